/// Word list collaborator - loads the phrases the engine plays on
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// One guessable phrase and the hint shown for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub phrase: String,
    pub hint: String,
}

impl WordEntry {
    pub fn new(phrase: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
            hint: hint.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum WordBookError {
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse word list: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("word list contains no entries")]
    Empty,
}

/// A non-empty collection of word entries, loaded once at startup and
/// handed to the engine by slice.
///
/// The on-disk format is a JSON array of `{"phrase": ..., "hint": ...}`
/// records. The engine itself never reads storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordBook {
    entries: Vec<WordEntry>,
}

impl WordBook {
    pub fn new(entries: Vec<WordEntry>) -> Result<Self, WordBookError> {
        if entries.is_empty() {
            return Err(WordBookError::Empty);
        }
        Ok(Self { entries })
    }

    pub fn from_json(json: &str) -> Result<Self, WordBookError> {
        Self::new(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, WordBookError> {
        let path = path.as_ref();
        let book = Self::from_json(&fs::read_to_string(path)?)?;
        info!(entries = book.len(), path = %path.display(), "word book loaded");
        Ok(book)
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
