use std::{fs, path::{Path, PathBuf}};

use encoding_rs::Encoding;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};

/// Polarity weight per lexicon category
/// Keys are category file names without the `.txt` extension.
/// Categories missing from the table weigh 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryWeights {
    weights: IndexMap<String, f64>,
}

impl Default for CategoryWeights {
    /// HowNet category table.
    /// `主张词语（中文)` keeps the mixed-width parenthesis of the distributed table.
    fn default() -> Self {
        [
            ("程度级别词语（中文）", 0.0),
            ("负面评价词语（中文）", -1.0),
            ("负面情感词语（中文）", -1.0),
            ("正面评价词语（中文）", 1.0),
            ("正面情感词语（中文）", 1.0),
            ("主张词语（中文)", 0.5),
        ]
        .into_iter()
        .collect()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for CategoryWeights {
    fn from_iter<T: IntoIterator<Item = (S, f64)>>(iter: T) -> Self {
        Self {
            weights: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl CategoryWeights {
    /// Weight of a category, 0 when unknown
    #[inline]
    pub fn weight(&self, category: &str) -> f64 {
        self.weights.get(category).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.weights.contains_key(category)
    }
}

/// Text encoding of lexicon files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LexiconEncoding {
    /// legacy simplified-Chinese code page (cp936)
    #[default]
    Gbk,
    Utf8,
}

impl LexiconEncoding {
    fn encoding(self) -> &'static Encoding {
        match self {
            LexiconEncoding::Gbk => encoding_rs::GBK,
            LexiconEncoding::Utf8 => encoding_rs::UTF_8,
        }
    }

    /// Decode without replacement characters; malformed input is an error
    pub fn decode(self, bytes: &[u8], path: &Path) -> Result<String> {
        let encoding = self.encoding();
        encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(|text| text.into_owned())
            .ok_or_else(|| Error::Decode {
                path: path.to_path_buf(),
                encoding: encoding.name(),
            })
    }
}

/// Word -> polarity weight table
///
/// Words listed under several categories are merged pairwise:
/// `stored = (stored + weight) / 2` for every repeat, in load order.
/// This is not a running mean; three entries `1, 1, -1` give `0.0`,
/// while `-1, 1, 1` give `0.5`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SentimentLexicon {
    #[serde(with = "indexmap::map::serde_seq")]
    words: IndexMap<String, f64>,
}

impl SentimentLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `*.txt` category file of a directory
    ///
    /// Files are processed in ascending file name order so that the
    /// order-dependent merge gives the same result on every platform.
    ///
    /// # Arguments
    /// * `dir` - lexicon directory
    /// * `categories` - category weight table
    /// * `encoding` - encoding of the category files
    pub fn load<P: AsRef<Path>>(
        dir: P,
        categories: &CategoryWeights,
        encoding: LexiconEncoding,
    ) -> Result<Self> {
        let dir = dir.as_ref();
        let mut files: Vec<PathBuf> = fs::read_dir(dir)
            .map_err(|e| Error::io(dir, e))?
            .map(|entry| entry.map(|e| e.path()).map_err(|e| Error::io(dir, e)))
            .collect::<Result<_>>()?;
        files.retain(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "txt"));
        files.sort();

        let mut lexicon = Self::new();
        for path in &files {
            let category = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            if !categories.contains(&category) {
                warn!(category = %category, "unknown lexicon category, weight 0");
            }
            let weight = categories.weight(&category);
            let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
            let text = encoding.decode(&bytes, path)?;
            let before = lexicon.len();
            lexicon.extend_category(text.lines(), weight);
            debug!(category = %category, weight, new_words = lexicon.len() - before, "loaded lexicon category");
        }
        info!(files = files.len(), words = lexicon.len(), "sentiment lexicon ready");
        Ok(lexicon)
    }

    /// Add the lines of one category file
    pub fn extend_category<I, S>(&mut self, lines: I, weight: f64) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            let word = line.as_ref().trim();
            if !word.is_empty() {
                self.insert(word, weight);
            }
        }
        self
    }

    /// Insert one word, averaging with the stored weight if already present
    #[inline]
    pub fn insert(&mut self, word: &str, weight: f64) -> &mut Self {
        match self.words.get_mut(word) {
            Some(stored) => *stored = (*stored + weight) / 2.0,
            None => {
                self.words.insert(word.to_string(), weight);
            }
        }
        self
    }

    #[inline]
    pub fn weight(&self, word: &str) -> Option<f64> {
        self.words.get(word).copied()
    }

    /// Sum of weights of the whitespace separated tokens of `text`
    /// Tokens missing from the lexicon add nothing.
    pub fn score(&self, text: &str) -> f64 {
        text.split_whitespace()
            .filter_map(|token| self.weight(token))
            .fold(0.0, |acc, w| acc + w)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
