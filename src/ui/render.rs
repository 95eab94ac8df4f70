/// Ratatui drawing for every screen. Pure rendering, no game logic.
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::core::round::{Round, MAX_MISSES};
use crate::core::words::Difficulty;
use crate::ui::app::{App, Screen};

/// Gallows stages 0..=6, one per miss.
const GALLOWS: [&str; 7] = [
    "\n\n\n\n\n\n=========",
    "  +---+\n  |   |\n      |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n  |   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n /    |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n / \\  |\n      |\n=========",
];

pub fn draw(frame: &mut Frame, app: &App) {
    match app.screen {
        Screen::DifficultySelect { cursor } => draw_menu(frame, cursor),
        Screen::Playing => draw_round(frame, app),
        Screen::GameOver { won } => draw_game_over(frame, app, won),
    }
}

fn draw_menu(frame: &mut Frame, cursor: usize) {
    let mut lines = vec![
        Line::from(Span::styled(
            "HANGMAN",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Select Difficulty"),
        Line::from(""),
    ];
    for (i, difficulty) in Difficulty::ALL.iter().enumerate() {
        let label = format!("{}. {}", i + 1, difficulty.label());
        let style = if i == cursor {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let marker = if i == cursor { "> " } else { "  " };
        lines.push(Line::from(Span::styled(format!("{marker}{label}"), style)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Up/Down + Enter, or 1-3. Esc to quit.",
        Style::default().fg(Color::DarkGray),
    )));

    let menu = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(menu, centered(frame.area(), 40, 14));
}

fn draw_round(frame: &mut Frame, app: &App) {
    let Some(round) = app.round.as_ref() else {
        return;
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(9),
            Constraint::Length(4),
            Constraint::Length(3),
        ])
        .split(frame.area());

    draw_header(frame, app, round, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(16), Constraint::Min(20)])
        .split(chunks[1]);

    let gallows = Paragraph::new(GALLOWS[round.misses().min(MAX_MISSES) as usize])
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(gallows, body[0]);

    let word = Paragraph::new(round.masked())
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title("Word"));
    frame.render_widget(word, body[1]);

    let letters = Paragraph::new(alphabet_lines(round))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Letters"));
    frame.render_widget(letters, chunks[2]);

    let message = Paragraph::new(app.message.as_str())
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(message, chunks[3]);
}

fn draw_header(frame: &mut Frame, app: &App, round: &Round, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            format!(" Level: {} ", app.session.level()),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!(" Score: {} ", app.session.score()),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            format!(
                " Guesses left: {}/{} ",
                MAX_MISSES - round.misses(),
                MAX_MISSES
            ),
            Style::default().fg(Color::Red),
        ),
        Span::styled(
            format!(" Hints: {} (Tab) ", round.hints_left()),
            Style::default().fg(Color::Green),
        ),
    ]);
    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Hangman [{}]", app.difficulty)),
    );
    frame.render_widget(header, area);
}

fn alphabet_lines(round: &Round) -> Vec<Line<'static>> {
    let row = |range: std::ops::RangeInclusive<char>| {
        let mut spans = Vec::new();
        for letter in range {
            let style = if !round.has_guessed(letter) {
                Style::default()
            } else if round.secret().contains(letter) {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            };
            spans.push(Span::styled(format!("{letter} "), style));
        }
        Line::from(spans)
    };
    vec![row('A'..='M'), row('N'..='Z')]
}

fn draw_game_over(frame: &mut Frame, app: &App, won: bool) {
    let Some(round) = app.round.as_ref() else {
        return;
    };
    let (banner, color) = if won {
        ("YOU WON!", Color::Green)
    } else {
        ("GAME OVER!", Color::Red)
    };
    let score_line = if won {
        format!("Score: {}", app.session.score())
    } else {
        format!("Highest Score: {}", app.session.highest_score())
    };
    let reveal = if won {
        format!("The word was: {}", round.secret())
    } else {
        format!("The word is: {}", round.secret())
    };

    let lines = vec![
        Line::from(Span::styled(
            banner,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(reveal),
        Line::from(Span::styled(score_line, Style::default().fg(Color::Yellow))),
        Line::from(""),
        Line::from(Span::styled(
            "[p] Play Again   [q] Quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let screen = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(screen, centered(frame.area(), 44, 10));
}

/// Center a fixed-size box inside `area`, clamped to it.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
