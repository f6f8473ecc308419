/// Letter pool the player picks guesses from
use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand_core::RngCore;
use serde::{Deserialize, Serialize};

pub const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// The letters still offered to the player, kept in A-Z order.
///
/// The pool only ever shrinks over the life of a session; a removed letter
/// cannot come back until the next game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterPool(BTreeSet<char>);

impl LetterPool {
    /// A fresh pool holding the whole alphabet.
    pub fn full() -> Self {
        Self(('A'..='Z').collect())
    }

    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(&letter)
    }

    /// Remove a single letter. Returns whether it was still in the pool.
    pub fn remove(&mut self, letter: char) -> bool {
        self.0.remove(&letter)
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Remove half (rounded down) of the letters not in `keep`, chosen with
    /// `rng`. Returns the removed letters in A-Z order.
    ///
    /// `keep` is the set of letters that occur in the phrase, so everything
    /// removed here was a guaranteed miss.
    pub fn remove_half<R>(&mut self, keep: &BTreeSet<char>, rng: &mut R) -> Vec<char>
    where
        R: RngCore + ?Sized,
    {
        let mut candidates: Vec<char> = self.0.iter().copied().filter(|c| !keep.contains(c)).collect();
        candidates.shuffle(rng);
        candidates.truncate(candidates.len() / 2);
        candidates.sort_unstable();
        for c in &candidates {
            self.0.remove(c);
        }
        candidates
    }

    /// Remove every vowel still in the pool. Returns the ones removed.
    pub fn remove_vowels(&mut self) -> Vec<char> {
        VOWELS.iter().copied().filter(|v| self.0.remove(v)).collect()
    }
}
