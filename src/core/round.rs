/// One Hangman round: secret word, guessed letters, miss counter, hint tokens.
///
/// The round is pure state with no I/O; the UI drives it through `guess` and
/// `hint` and reads the fields back each frame.
use rand::seq::IndexedRandom;
use rand_core::RngCore;
use serde::{Deserialize, Serialize};

use crate::core::wincheck;
use crate::core::words::WordError;

/// Misses allowed before the round is lost (the gallows has 6 stages).
pub const MAX_MISSES: u8 = 6;
/// Hint tokens handed out at the start of every round.
pub const HINTS_PER_ROUND: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    InProgress,
    Won,
    Lost,
}

/// Result of a single guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter is in the word.
    Hit,
    /// The letter is not in the word; the miss counter went up.
    Miss,
    /// Repeat guess; nothing changed.
    AlreadyGuessed,
    /// Input wasn't A-Z; nothing changed.
    NotALetter,
    /// The round is already won or lost; nothing changed.
    RoundOver,
}

/// Result of asking for a hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintOutcome {
    /// A letter was revealed. Never counts as a miss.
    Revealed(char),
    /// No tokens left, or the round is already over.
    NoTokensLeft,
    /// Every letter of the word is already guessed. Shouldn't happen while the
    /// round is still in progress, but handled rather than panicking.
    NothingToReveal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    secret: String,
    guessed: Vec<char>,
    misses: u8,
    hints_left: u8,
    phase: Phase,
}

impl Round {
    /// Start a round over `word`. Lowercase input is accepted and uppercased;
    /// empty or non-alphabetic words are rejected.
    pub fn new(word: &str) -> Result<Self, WordError> {
        let secret = word.to_ascii_uppercase();
        if secret.is_empty() || !secret.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(WordError::InvalidWord(word.to_string()));
        }
        Ok(Self {
            secret,
            guessed: Vec::new(),
            misses: 0,
            hints_left: HINTS_PER_ROUND,
            phase: Phase::InProgress,
        })
    }

    /// Register a guessed letter and re-evaluate the round phase.
    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        if self.phase != Phase::InProgress {
            return GuessOutcome::RoundOver;
        }
        if !letter.is_ascii_alphabetic() {
            return GuessOutcome::NotALetter;
        }
        let letter = letter.to_ascii_uppercase();
        if self.guessed.contains(&letter) {
            return GuessOutcome::AlreadyGuessed;
        }
        self.guessed.push(letter);
        let outcome = if self.secret.contains(letter) {
            GuessOutcome::Hit
        } else {
            self.misses += 1;
            GuessOutcome::Miss
        };
        self.update_phase();
        outcome
    }

    /// Spend a hint token to reveal one random unguessed letter of the secret.
    pub fn hint<R: RngCore>(&mut self, rng: &mut R) -> HintOutcome {
        if self.phase != Phase::InProgress || self.hints_left == 0 {
            return HintOutcome::NoTokensLeft;
        }
        let candidates: Vec<char> = wincheck::unique_letters(&self.secret)
            .into_iter()
            .filter(|c| !self.guessed.contains(c))
            .collect();
        let Some(&letter) = candidates.choose(rng) else {
            return HintOutcome::NothingToReveal;
        };
        self.guessed.push(letter);
        self.hints_left -= 1;
        self.update_phase();
        HintOutcome::Revealed(letter)
    }

    // Win is checked before loss, so revealing the last letter on the final
    // miss-free guess always counts as a win.
    fn update_phase(&mut self) {
        if wincheck::covers(&self.secret, &self.guessed) {
            self.phase = Phase::Won;
        } else if is_lost(self.misses) {
            self.phase = Phase::Lost;
        }
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn guessed(&self) -> &[char] {
        &self.guessed
    }

    pub fn has_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter.to_ascii_uppercase())
    }

    pub fn misses(&self) -> u8 {
        self.misses
    }

    pub fn hints_left(&self) -> u8 {
        self.hints_left
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase != Phase::InProgress
    }

    pub fn is_won(&self) -> bool {
        self.phase == Phase::Won
    }

    /// The secret with unguessed letters masked, e.g. `_ A _ G _ A _`.
    pub fn masked(&self) -> String {
        let shown: Vec<String> = self
            .secret
            .chars()
            .map(|c| {
                if self.guessed.contains(&c) {
                    c.to_string()
                } else {
                    "_".to_string()
                }
            })
            .collect();
        shown.join(" ")
    }
}

pub fn is_lost(misses: u8) -> bool {
    misses >= MAX_MISSES
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn rejects_invalid_words() {
        assert!(Round::new("").is_err());
        assert!(Round::new("NOT A WORD").is_err());
        assert!(Round::new("C4T").is_err());
        assert!(Round::new("cat").is_ok());
    }

    #[test]
    fn fresh_round_state() {
        let round = Round::new("CAT").unwrap();
        assert_eq!(round.misses(), 0);
        assert_eq!(round.hints_left(), HINTS_PER_ROUND);
        assert!(round.guessed().is_empty());
        assert_eq!(round.phase(), Phase::InProgress);
        assert_eq!(round.masked(), "_ _ _");
    }

    #[test]
    fn guessing_every_letter_wins() {
        let mut round = Round::new("CAT").unwrap();
        assert_eq!(round.guess('C'), GuessOutcome::Hit);
        assert!(!round.is_over());
        assert_eq!(round.guess('A'), GuessOutcome::Hit);
        assert!(!round.is_over());
        assert_eq!(round.guess('T'), GuessOutcome::Hit);
        assert_eq!(round.phase(), Phase::Won);
        assert_eq!(round.masked(), "C A T");
    }

    #[test]
    fn six_distinct_misses_lose() {
        let mut round = Round::new("DOG").unwrap();
        for (i, letter) in ['X', 'Y', 'Z', 'Q', 'W', 'K'].into_iter().enumerate() {
            assert_eq!(round.guess(letter), GuessOutcome::Miss);
            assert_eq!(round.misses(), i as u8 + 1);
        }
        assert_eq!(round.phase(), Phase::Lost);
        assert!(is_lost(round.misses()));
    }

    #[test]
    fn repeated_letters_in_secret_count_once() {
        let mut round = Round::new("BEE").unwrap();
        round.guess('B');
        round.guess('E');
        assert_eq!(round.phase(), Phase::Won);
    }

    #[test]
    fn repeat_guess_is_a_no_op() {
        let mut round = Round::new("DOG").unwrap();
        assert_eq!(round.guess('X'), GuessOutcome::Miss);
        let (guessed, misses) = (round.guessed().to_vec(), round.misses());
        assert_eq!(round.guess('X'), GuessOutcome::AlreadyGuessed);
        assert_eq!(round.guess('x'), GuessOutcome::AlreadyGuessed);
        assert_eq!(round.guessed(), guessed);
        assert_eq!(round.misses(), misses);

        assert_eq!(round.guess('D'), GuessOutcome::Hit);
        assert_eq!(round.guess('D'), GuessOutcome::AlreadyGuessed);
    }

    #[test]
    fn non_letters_are_rejected() {
        let mut round = Round::new("DOG").unwrap();
        assert_eq!(round.guess('3'), GuessOutcome::NotALetter);
        assert_eq!(round.guess(' '), GuessOutcome::NotALetter);
        assert_eq!(round.misses(), 0);
        assert!(round.guessed().is_empty());
    }

    #[test]
    fn terminal_round_ignores_guesses() {
        let mut round = Round::new("A").unwrap();
        round.guess('A');
        assert_eq!(round.phase(), Phase::Won);
        assert_eq!(round.guess('B'), GuessOutcome::RoundOver);
        assert_eq!(round.guessed(), ['A']);
    }

    #[test]
    fn misses_and_guesses_grow_monotonically() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut round = Round::new("PYTHON").unwrap();
        let mut last_misses = 0;
        let mut last_guessed = 0;
        for letter in ['P', 'Q', 'Y', 'Z', 'T', 'T', 'X'] {
            round.guess(letter);
            assert!(round.misses() >= last_misses);
            assert!(round.guessed().len() >= last_guessed);
            last_misses = round.misses();
            last_guessed = round.guessed().len();
        }
        round.hint(&mut rng);
        assert!(round.misses() >= last_misses);
        assert!(round.guessed().len() >= last_guessed);
    }

    #[test]
    fn hints_reveal_secret_letters_without_missing() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut round = Round::new("RUST").unwrap();
        let HintOutcome::Revealed(letter) = round.hint(&mut rng) else {
            panic!("first hint should reveal");
        };
        assert!(round.secret().contains(letter));
        assert!(round.has_guessed(letter));
        assert_eq!(round.misses(), 0);
        assert_eq!(round.hints_left(), 1);
    }

    #[test]
    fn third_hint_is_refused() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut round = Round::new("KEYBOARD").unwrap();
        assert!(matches!(round.hint(&mut rng), HintOutcome::Revealed(_)));
        assert_eq!(round.hints_left(), 1);
        assert!(matches!(round.hint(&mut rng), HintOutcome::Revealed(_)));
        assert_eq!(round.hints_left(), 0);
        assert_eq!(round.hint(&mut rng), HintOutcome::NoTokensLeft);
        assert_eq!(round.hints_left(), 0);
    }

    #[test]
    fn hint_on_finished_round_is_refused() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut round = Round::new("A").unwrap();
        round.guess('A');
        assert_eq!(round.hint(&mut rng), HintOutcome::NoTokensLeft);
        assert_eq!(round.hints_left(), HINTS_PER_ROUND);
    }

    #[test]
    fn hint_with_nothing_left_to_reveal() {
        // Not reachable through guess/hint (the phase flips to Won first), so
        // deserialize an inconsistent round to exercise the defensive branch.
        let mut round: Round = serde_json::from_str(
            r#"{"secret":"AB","guessed":["A","B"],"misses":0,"hints_left":2,"phase":"InProgress"}"#,
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(4);
        assert_eq!(round.hint(&mut rng), HintOutcome::NothingToReveal);
        assert_eq!(round.hints_left(), 2);
    }

    #[test]
    fn loss_boundary_is_six() {
        for misses in 0..=5 {
            assert!(!is_lost(misses));
        }
        assert!(is_lost(6));
        assert!(is_lost(7));
    }
}
