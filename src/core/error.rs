use thiserror::Error;

/// Everything that can go wrong while driving a game.
///
/// All variants are recoverable. A failing call leaves the session exactly
/// as it was; the caller decides how (or whether) to surface the condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// `start` was handed an empty word list.
    #[error("word list is empty")]
    EmptyWordList,

    /// The guessed letter was already played or was never offered.
    #[error("letter '{0}' is not available to guess")]
    LetterNotAvailable(char),

    /// A mutating call arrived with no game in progress.
    #[error("no game in progress")]
    NotInProgress,

    /// A hint was requested after all three tiers were consumed.
    #[error("all three hints have been used")]
    HintsExhausted,

    /// The guard policy refused a costed hint that would make the loss
    /// certain. Only raised under [`HintGuard::BlockFatal`].
    ///
    /// [`HintGuard::BlockFatal`]: crate::core::engine::HintGuard::BlockFatal
    #[error("hint refused: the next mistake would end the game")]
    HintUnavailable,
}
