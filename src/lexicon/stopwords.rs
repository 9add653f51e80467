use std::{collections::HashSet, fs, path::Path};

use tracing::debug;

use crate::error::{Error, Result};

/// Set of words excluded from every term count
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a UTF-8 stopword file, one word per line
    /// Lines are trimmed and blank lines are ignored.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let set = Self::from_lines(text.lines());
        debug!(path = %path.display(), stopwords = set.len(), "loaded stopwords");
        Ok(set)
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = lines
            .into_iter()
            .filter_map(|line| {
                let word = line.as_ref().trim();
                (!word.is_empty()).then(|| word.to_string())
            })
            .collect();
        Self { words }
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
