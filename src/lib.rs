pub mod core {
    pub mod round;
    pub mod session;
    pub mod wincheck;
    pub mod words;
}

pub mod ui {
    pub mod app;
    pub mod render;
}

// Re-export for convenience
pub use crate::core::round::{GuessOutcome, HintOutcome, Phase, Round};
pub use crate::core::session::Session;
pub use crate::core::words::{Difficulty, WordBank};
