/// Screen state machine and the synchronous event loop.
///
/// The app owns the session and the current round and drives them from
/// keyboard input; all drawing lives in `ui::render`.
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::DefaultTerminal;
use std::time::Duration;
use tracing::info;

use crate::core::round::{GuessOutcome, HintOutcome, Round};
use crate::core::session::Session;
use crate::core::words::{Difficulty, WordBank};
use crate::ui::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    DifficultySelect { cursor: usize },
    Playing,
    GameOver { won: bool },
}

pub struct App {
    pub(crate) bank: WordBank,
    pub(crate) session: Session,
    pub(crate) difficulty: Difficulty,
    pub(crate) round: Option<Round>,
    pub(crate) screen: Screen,
    pub(crate) message: String,
    rng: rand::rngs::ThreadRng,
    should_quit: bool,
}

impl App {
    /// Start at the difficulty menu, or jump straight into a round when a
    /// difficulty came from the command line.
    pub fn new(bank: WordBank, difficulty: Option<Difficulty>) -> Result<Self> {
        let mut app = Self {
            bank,
            session: Session::new(),
            difficulty: difficulty.unwrap_or(Difficulty::Easy),
            round: None,
            screen: Screen::DifficultySelect { cursor: 0 },
            message: "Pick a difficulty to start.".to_string(),
            rng: rand::rng(),
            should_quit: false,
        };
        if let Some(difficulty) = difficulty {
            app.start_round(difficulty)?;
        }
        Ok(app)
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| render::draw(frame, self))?;

            // Non-blocking-ish input; the timeout keeps redraws cheap.
            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key)?;
                    }
                }
            }
        }
        Ok(())
    }

    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.screen {
            Screen::DifficultySelect { cursor } => self.handle_menu_key(key, cursor)?,
            Screen::Playing => self.handle_round_key(key)?,
            Screen::GameOver { won } => self.handle_game_over_key(key, won)?,
        }
        Ok(())
    }

    fn handle_menu_key(&mut self, key: KeyEvent, cursor: usize) -> Result<()> {
        match key.code {
            KeyCode::Up => {
                let cursor = cursor.checked_sub(1).unwrap_or(Difficulty::ALL.len() - 1);
                self.screen = Screen::DifficultySelect { cursor };
            }
            KeyCode::Down => {
                self.screen = Screen::DifficultySelect {
                    cursor: (cursor + 1) % Difficulty::ALL.len(),
                };
            }
            KeyCode::Enter => self.start_round(Difficulty::ALL[cursor])?,
            KeyCode::Char('1') => self.start_round(Difficulty::Easy)?,
            KeyCode::Char('2') => self.start_round(Difficulty::Medium)?,
            KeyCode::Char('3') => self.start_round(Difficulty::Hard)?,
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
        Ok(())
    }

    fn handle_round_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.use_hint(),
            KeyCode::Char(c) if c.is_ascii_alphabetic() => self.guess(c),
            _ => {}
        }
        Ok(())
    }

    fn handle_game_over_key(&mut self, key: KeyEvent, won: bool) -> Result<()> {
        match key.code {
            KeyCode::Char('p') | KeyCode::Enter => {
                self.session.replay_reset(won);
                self.start_round(self.difficulty)?;
            }
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
        Ok(())
    }

    fn start_round(&mut self, difficulty: Difficulty) -> Result<()> {
        let word = self.bank.pick(difficulty, &mut self.rng).to_string();
        info!(%difficulty, "starting round");
        self.round = Some(Round::new(&word)?);
        self.difficulty = difficulty;
        self.screen = Screen::Playing;
        self.message = "Guess a letter! (Tab for a hint, Esc to quit)".to_string();
        Ok(())
    }

    fn guess(&mut self, letter: char) {
        let Some(round) = self.round.as_mut() else {
            return;
        };
        let letter = letter.to_ascii_uppercase();
        self.message = match round.guess(letter) {
            GuessOutcome::Hit => format!("Good guess! '{letter}' is in the word."),
            GuessOutcome::Miss => format!("Sorry, '{letter}' is not in the word."),
            GuessOutcome::AlreadyGuessed => format!("Letter '{letter}' already guessed."),
            GuessOutcome::NotALetter | GuessOutcome::RoundOver => return,
        };
        self.check_round_end();
    }

    fn use_hint(&mut self) {
        let Some(round) = self.round.as_mut() else {
            return;
        };
        match round.hint(&mut self.rng) {
            HintOutcome::Revealed(letter) => {
                self.message = format!("Hint: '{letter}' is in the word.");
            }
            // the hint button is simply inert when it can't help
            HintOutcome::NoTokensLeft | HintOutcome::NothingToReveal => return,
        }
        self.check_round_end();
    }

    fn check_round_end(&mut self) {
        let Some(round) = self.round.as_ref() else {
            return;
        };
        if !round.is_over() {
            return;
        }
        let won = round.is_won();
        self.session.round_over(won);
        info!(
            won,
            secret = round.secret(),
            score = self.session.score(),
            level = self.session.level(),
            "round over"
        );
        self.screen = Screen::GameOver { won };
        self.message = if won {
            "YOU WON!".to_string()
        } else {
            "GAME OVER!".to_string()
        };
    }
}
