/// Engine driving a hangman session from start to win or loss
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rand_core::RngCore;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::error::GameError;
use crate::core::session::{GameSession, GameStatus};
use crate::words::WordEntry;

/// Whether a costed hint may be taken when the next mistake ends the game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HintGuard {
    /// Let the hint through; the mistake is counted and the loss check runs
    /// exactly as it would for a wrong guess.
    #[default]
    AllowFatal,
    /// Refuse the hint with [`GameError::HintUnavailable`] instead.
    BlockFatal,
}

/// What a call to [`Engine::guess`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// The letter occurs in the phrase; every occurrence is now revealed.
    Hit(char),
    /// The letter is absent from the phrase; a mistake was counted.
    Miss(char),
}

/// What a call to [`Engine::use_hint`] did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HintOutcome {
    /// Tier 1, free: the hint text is now available for display.
    Text(String),
    /// Tier 2: these letters, all absent from the phrase, left the pool.
    Pruned(Vec<char>),
    /// Tier 3: these vowels were revealed in the mask.
    Vowels(Vec<char>),
}

/// The game engine. Owns the current session and the randomness feeding
/// word selection and letter pruning.
///
/// Randomness is injected so a fixed seed replays an identical game; see
/// [`Engine::seeded`].
#[derive(Debug)]
pub struct Engine<R = StdRng> {
    rng: R,
    guard: HintGuard,
    session: Option<GameSession>,
}

impl Engine<StdRng> {
    /// An engine drawing its randomness from the OS.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// A fully deterministic engine: identical seeds and identical calls
    /// replay identical games.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Engine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> Engine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            guard: HintGuard::default(),
            session: None,
        }
    }

    /// Set the policy for costed hints taken on the last mistake.
    pub fn with_guard(mut self, guard: HintGuard) -> Self {
        self.guard = guard;
        self
    }

    pub fn guard(&self) -> HintGuard {
        self.guard
    }

    /// The current session, if a game has been started.
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// Status of the current session, or `NotStarted` before the first game.
    pub fn status(&self) -> GameStatus {
        self.session
            .as_ref()
            .map_or(GameStatus::NotStarted, GameSession::status)
    }

    /// Start a new game on a phrase picked uniformly from `words`,
    /// replacing any session in flight.
    pub fn start(&mut self, words: &[WordEntry]) -> Result<&GameSession, GameError> {
        let entry = words.choose(&mut self.rng).ok_or(GameError::EmptyWordList)?;
        info!(choices = words.len(), phrase_len = entry.phrase.len(), "new game");
        debug!(phrase = %entry.phrase, hint = %entry.hint, "word selected");
        Ok(self.session.insert(GameSession::new(entry)))
    }

    /// Play one letter. A hit reveals every occurrence at once; a miss
    /// counts a mistake. Either way the letter leaves the pool for the rest
    /// of the session.
    pub fn guess(&mut self, letter: char) -> Result<GuessOutcome, GameError> {
        let session = self
            .session
            .as_mut()
            .filter(|s| !s.is_over())
            .ok_or(GameError::NotInProgress)?;

        let letter = letter.to_ascii_uppercase();
        if !session.letters().contains(letter) {
            return Err(GameError::LetterNotAvailable(letter));
        }

        let outcome = if session.contains(letter) {
            session.reveal(letter);
            GuessOutcome::Hit(letter)
        } else {
            session.add_mistake();
            GuessOutcome::Miss(letter)
        };
        session.take_letter(letter);
        session.resolve();

        debug!(?outcome, mistakes = session.mistakes(), status = ?session.status(), "guess");
        Ok(outcome)
    }

    /// Take the next hint tier.
    ///
    /// Tier 1 unlocks the hint text for free. Tier 2 costs a mistake and
    /// prunes half of the dead letters from the pool. Tier 3 costs a
    /// mistake and reveals the phrase's vowels. Each tier can be taken once
    /// per session, in order.
    pub fn use_hint(&mut self) -> Result<HintOutcome, GameError> {
        let guard = self.guard;
        let session = self
            .session
            .as_mut()
            .filter(|s| !s.is_over())
            .ok_or(GameError::NotInProgress)?;

        if session.hints_spent() {
            return Err(GameError::HintsExhausted);
        }

        let costed = session.hint_level() > 1;
        if costed && guard == HintGuard::BlockFatal && session.on_last_mistake() {
            return Err(GameError::HintUnavailable);
        }

        let outcome = match session.hint_level() {
            1 => {
                session.advance_hint();
                HintOutcome::Text(session.hint_text().to_owned())
            }
            2 => {
                session.advance_hint();
                session.add_mistake();
                let removed = session.prune_letters(&mut self.rng);
                session.resolve();
                HintOutcome::Pruned(removed)
            }
            _ => {
                session.advance_hint();
                session.add_mistake();
                let revealed = session.reveal_vowels();
                session.resolve();
                HintOutcome::Vowels(revealed)
            }
        };

        debug!(level = session.hint_level(), mistakes = session.mistakes(), "hint");
        Ok(outcome)
    }
}
