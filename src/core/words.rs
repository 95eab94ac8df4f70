/// Difficulty-tagged word corpora.
///
/// The word lists ship embedded in the binary as JSON arrays and are validated
/// once at load; the rest of the game can assume every word is non-empty,
/// uppercase ASCII.
use rand::seq::IndexedRandom;
use rand_core::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WordError {
    #[error("invalid word {0:?} (words must be non-empty and alphabetic)")]
    InvalidWord(String),
    #[error("the {0} word list is empty")]
    EmptyCorpus(Difficulty),
    #[error("unknown difficulty {0:?} (expected easy, medium or hard)")]
    UnknownDifficulty(String),
    #[error("malformed word list: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(WordError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// One validated word list per difficulty.
pub struct WordBank {
    easy: Vec<String>,
    medium: Vec<String>,
    hard: Vec<String>,
}

impl WordBank {
    /// Load the corpora compiled into the binary.
    pub fn embedded() -> Result<Self, WordError> {
        Ok(Self {
            easy: load(include_str!("../../data/easy.json"), Difficulty::Easy)?,
            medium: load(include_str!("../../data/medium.json"), Difficulty::Medium)?,
            hard: load(include_str!("../../data/hard.json"), Difficulty::Hard)?,
        })
    }

    fn words(&self, difficulty: Difficulty) -> &[String] {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    /// Pick a secret word uniformly from the requested list.
    pub fn pick<R: RngCore>(&self, difficulty: Difficulty, rng: &mut R) -> &str {
        self.words(difficulty)
            .choose(rng)
            .expect("corpora are validated non-empty at load")
    }
}

fn load(json: &str, difficulty: Difficulty) -> Result<Vec<String>, WordError> {
    let raw: Vec<String> = serde_json::from_str(json)?;
    if raw.is_empty() {
        return Err(WordError::EmptyCorpus(difficulty));
    }
    raw.into_iter()
        .map(|word| {
            let upper = word.to_ascii_uppercase();
            if upper.is_empty() || !upper.chars().all(|c| c.is_ascii_uppercase()) {
                Err(WordError::InvalidWord(word))
            } else {
                Ok(upper)
            }
        })
        .collect()
}
