/// Session-wide scoring: score, level and highest score across rounds.
use serde::{Deserialize, Serialize};

/// Points awarded per won round.
pub const WIN_POINTS: u32 = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    score: u32,
    level: u32,
    highest_score: u32,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished round. Wins bump score and level; either way the
    /// highest score catches up with the current score.
    pub fn round_over(&mut self, won: bool) {
        if won {
            self.score += WIN_POINTS;
            self.level += 1;
        }
        self.highest_score = self.highest_score.max(self.score);
    }

    /// Apply the play-again policy. After a win everything carries over;
    /// after a loss the whole scoreboard resets, high score included.
    pub fn replay_reset(&mut self, last_won: bool) {
        if !last_won {
            *self = Self::default();
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn highest_score(&self) -> u32 {
        self.highest_score
    }
}
