/// Game session state - one round of hangman
use std::collections::BTreeSet;

use rand_core::RngCore;
use serde::{Deserialize, Serialize};

use crate::core::letters::{LetterPool, VOWELS};
use crate::core::mask;
use crate::words::WordEntry;

/// Wrong guesses (or costed hints) a player gets before the game is lost.
pub const MAX_MISTAKES: u8 = 6;

const HINT_TIERS: u8 = 3;

/// Where a game currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Won,
    Lost,
}

/// One round of hangman: the secret phrase and everything the player has
/// done to it so far.
///
/// Sessions are owned by the engine and replaced wholly on reset; the
/// presentation layer observes them through the getters after each engine
/// call. The mistake count maps directly to the gallows image index (0-6).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    phrase: String,
    mask: String,
    hint: String,
    hint_level: u8,
    mistakes: u8,
    revealed: BTreeSet<char>,
    letters: LetterPool,
    status: GameStatus,
}

impl GameSession {
    pub(crate) fn new(entry: &WordEntry) -> Self {
        let phrase = entry.phrase.to_uppercase();
        Self {
            mask: mask::hidden(&phrase),
            phrase,
            hint: entry.hint.clone(),
            hint_level: 1,
            mistakes: 0,
            revealed: BTreeSet::new(),
            letters: LetterPool::full(),
            status: GameStatus::InProgress,
        }
    }

    /// The secret phrase, uppercased.
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// The display string: revealed letters, placeholders, literal spaces.
    pub fn mask(&self) -> &str {
        &self.mask
    }

    /// The hint text, once the first hint tier has been taken.
    pub fn hint(&self) -> Option<&str> {
        (self.hint_level > 1).then_some(self.hint.as_str())
    }

    /// The next hint tier to be taken (1-3), or 4 once all are spent.
    pub fn hint_level(&self) -> u8 {
        self.hint_level
    }

    pub fn mistakes(&self) -> u8 {
        self.mistakes
    }

    /// The letters still offered for guessing.
    pub fn letters(&self) -> &LetterPool {
        &self.letters
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Won | GameStatus::Lost)
    }

    /// True when one more mistake loses the game. Callers that want to keep
    /// players from hinting themselves to death can check this before a
    /// costed hint; see `HintGuard`.
    pub fn on_last_mistake(&self) -> bool {
        self.mistakes + 1 == MAX_MISTAKES
    }

    pub(crate) fn hints_spent(&self) -> bool {
        self.hint_level > HINT_TIERS
    }

    pub(crate) fn hint_text(&self) -> &str {
        &self.hint
    }

    pub(crate) fn advance_hint(&mut self) {
        self.hint_level += 1;
    }

    pub(crate) fn add_mistake(&mut self) {
        self.mistakes = (self.mistakes + 1).min(MAX_MISTAKES);
    }

    pub(crate) fn take_letter(&mut self, letter: char) {
        self.letters.remove(letter);
    }

    pub(crate) fn contains(&self, letter: char) -> bool {
        self.phrase.contains(letter)
    }

    /// Reveal every occurrence of `letter` in the mask.
    pub(crate) fn reveal(&mut self, letter: char) {
        self.revealed.insert(letter);
        self.mask = mask::apply(&self.phrase, &self.revealed);
    }

    /// Reveal all vowels occurring in the phrase and drop every vowel from
    /// the pool. Returns the vowels that were actually revealed.
    pub(crate) fn reveal_vowels(&mut self) -> Vec<char> {
        let present: Vec<char> = VOWELS
            .iter()
            .copied()
            .filter(|v| self.phrase.contains(*v))
            .collect();
        self.revealed.extend(present.iter().copied());
        self.mask = mask::apply(&self.phrase, &self.revealed);
        self.letters.remove_vowels();
        present
    }

    /// Drop half of the pool letters that are absent from the phrase.
    pub(crate) fn prune_letters<R>(&mut self, rng: &mut R) -> Vec<char>
    where
        R: RngCore + ?Sized,
    {
        let keep: BTreeSet<char> = self.phrase.chars().filter(char::is_ascii_alphabetic).collect();
        self.letters.remove_half(&keep, rng)
    }

    /// Settle the terminal transition after a mutating move. The loss check
    /// runs first: six mistakes lose even if the mask completed on the same
    /// move.
    pub(crate) fn resolve(&mut self) {
        if self.mistakes >= MAX_MISTAKES {
            self.status = GameStatus::Lost;
        } else if self.mask == self.phrase {
            self.status = GameStatus::Won;
        }
    }
}
