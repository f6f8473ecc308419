pub mod core {
    pub mod engine;
    pub mod error;
    pub mod letters;
    pub mod mask;
    pub mod session;
}

pub mod words;

// Re-export for convenience
pub use crate::core::engine::{Engine, GuessOutcome, HintGuard, HintOutcome};
pub use crate::core::error::GameError;
pub use crate::core::letters::LetterPool;
pub use crate::core::mask::PLACEHOLDER;
pub use crate::core::session::{GameSession, GameStatus, MAX_MISTAKES};
pub use crate::words::{WordBook, WordBookError, WordEntry};
