use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::vectorizer::term::TermFrequency;

/// Document count and per-term document frequency of a corpus
/// Built in one pass over all documents; read-only afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Corpus {
    /// number of documents added
    doc_num: u64,
    /// term -> number of documents containing it
    #[serde(with = "indexmap::map::serde_seq")]
    term_counts: IndexMap<Box<str>, u64>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build document frequencies from per-document term frequencies
    /// Each term of a document is counted once, however often it repeats.
    pub fn from_term_frequencies<'a, I>(freqs: I) -> Self
    where
        I: IntoIterator<Item = &'a TermFrequency>,
    {
        let mut corpus = Self::new();
        for freq in freqs {
            corpus.add_set(&freq.term_set_ref_str());
        }
        corpus
    }

    /// Add one document given its distinct terms
    pub fn add_set<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        self.doc_num += 1;
        for term in terms {
            match self.term_counts.get_mut(term.as_ref()) {
                Some(count) => *count += 1,
                None => {
                    self.term_counts.insert(term.as_ref().into(), 1);
                }
            }
        }
        self
    }

    /// Get the number of documents in the corpus
    #[inline]
    pub fn get_doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Document frequency of a term, 0 for unseen terms
    #[inline]
    pub fn get_term_count(&self, term: &str) -> u64 {
        self.term_counts.get(term).copied().unwrap_or(0)
    }

    /// Get the current vocabulary size (number of unique terms)
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_counts.len()
    }

    /// Terms in first-seen order
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.term_counts.keys().map(|k| &**k)
    }
}
