//! Word list used to validate runs of letters

use anyhow::Context;
use rustc_hash::FxHashSet;
use std::path::Path;

/// Shortest string that can count as a word
pub const MIN_WORD_LEN: usize = 3;

/// Set-membership oracle for words
pub trait WordOracle: Sync {
    /// Case-insensitive membership test
    fn is_word(&self, word: &str) -> bool;
}

/// In-memory word list holding lowercase words of at least three letters
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| w.chars().count() >= MIN_WORD_LEN)
            .collect();
        Self { words }
    }

    /// Parse a newline-separated word list
    pub fn parse(text: &str) -> Self {
        Self::from_words(text.lines())
    }

    /// Load a newline-separated word list from disk
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dictionary: {}", path.display()))?;
        let dictionary = Self::parse(&content);
        tracing::info!(
            "Loaded {} words from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordOracle for Dictionary {
    fn is_word(&self, word: &str) -> bool {
        if word.chars().any(|c| c.is_uppercase()) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }
}
