use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{lexicon::stopwords::StopwordSet, vectorizer::token::{Document, TaggedToken}};

/// POS codes kept by the keyword pass:
/// noun, person name, place name, organization name, verbal noun
pub const DEFAULT_DESIRED_POS: [&str; 5] = ["n", "nr", "ns", "nt", "vn"];

/// Token filter shared by the term frequency and document frequency passes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermFilter {
    /// drop stopwords only
    Unrestricted,
    /// drop stopwords and tokens whose POS is not in the set
    PosRestricted(HashSet<String>),
}

impl Default for TermFilter {
    fn default() -> Self {
        Self::pos_restricted(DEFAULT_DESIRED_POS)
    }
}

impl TermFilter {
    pub fn pos_restricted<I, S>(pos: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TermFilter::PosRestricted(pos.into_iter().map(Into::into).collect())
    }

    /// Whether a token is counted
    #[inline]
    pub fn keep(&self, token: &TaggedToken, stopwords: &StopwordSet) -> bool {
        if stopwords.contains(&token.word) {
            return false;
        }
        match self {
            TermFilter::Unrestricted => true,
            TermFilter::PosRestricted(desired) => desired.contains(&token.pos),
        }
    }

    /// Kept words of a document, in document order with repeats
    pub fn kept_words<'a>(
        &'a self,
        doc: &'a Document,
        stopwords: &'a StopwordSet,
    ) -> impl Iterator<Item = &'a str> + 'a {
        doc.tokens()
            .iter()
            .filter(move |tok| self.keep(tok, stopwords))
            .map(|tok| tok.word.as_str())
    }
}

/// TermFrequency struct
/// Counts of the kept terms of one document.
/// Terms iterate in order of first occurrence, which downstream tie-breaking relies on.
///
/// # Examples
/// ```
/// use qa_keyword_features::vectorizer::term::TermFrequency;
/// let mut term_freq = TermFrequency::new();
/// term_freq.add_term("外卖").add_term("骑手").add_term("外卖");
///
/// assert_eq!(term_freq.term_count("外卖"), 2);
/// assert_eq!(term_freq.term_set_ref_str(), vec!["外卖", "骑手"]);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TermFrequency {
    #[serde(with = "indexmap::map::serde_seq")]
    term_count: IndexMap<String, u64>,
    total_term_count: u64,
}

impl TermFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the kept tokens of a document
    ///
    /// # Arguments
    /// * `doc` - tagged document
    /// * `stopwords` - stopword set
    /// * `filter` - POS filter variant
    pub fn from_document(doc: &Document, stopwords: &StopwordSet, filter: &TermFilter) -> Self {
        let mut freq = Self::new();
        for word in filter.kept_words(doc, stopwords) {
            freq.add_term(word);
        }
        freq
    }

    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        match self.term_count.get_mut(term) {
            Some(count) => *count += 1,
            None => {
                self.term_count.insert(term.to_string(), 1);
            }
        }
        self.total_term_count += 1;
        self
    }

    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }

    /// Count of one term, 0 if absent
    #[inline]
    pub fn term_count(&self, term: &str) -> u64 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    /// (term, count) in first-occurrence order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.term_count.iter().map(|(term, &count)| (term.as_str(), count))
    }

    pub fn term_set_ref_str(&self) -> Vec<&str> {
        self.term_count.keys().map(String::as_str).collect()
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.term_count.contains_key(term)
    }

    /// number of distinct terms
    pub fn term_num(&self) -> usize {
        self.term_count.len()
    }

    /// number of counted occurrences
    pub fn term_sum(&self) -> u64 {
        self.total_term_count
    }

    pub fn is_empty(&self) -> bool {
        self.term_count.is_empty()
    }
}
