use indexmap::IndexMap;
use num::Float;
use serde::{Deserialize, Serialize};

use crate::vectorizer::{corpus::Corpus, term::TermFrequency};

/// TF-IDF weights of one document
/// Keys follow the first-occurrence order of the source `TermFrequency`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "N: Serialize", deserialize = "N: Deserialize<'de>"))]
pub struct TfIdfScores<N = f64> {
    #[serde(with = "indexmap::map::serde_seq")]
    scores: IndexMap<String, N>,
}

impl<N> TfIdfScores<N>
where
    N: Float,
{
    pub fn new() -> Self {
        Self {
            scores: IndexMap::new(),
        }
    }

    pub fn insert(&mut self, term: &str, score: N) {
        self.scores.insert(term.to_string(), score);
    }

    #[inline]
    pub fn get(&self, term: &str) -> Option<N> {
        self.scores.get(term).copied()
    }

    /// (term, score) in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, N)> {
        self.scores.iter().map(|(term, &score)| (term.as_str(), score))
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// TF-IDF calculation engine
///
/// Implement this trait to plug another weighting scheme into
/// `TfIdfVectorizer<N, E>`.
pub trait TfIdfEngine<N>
where
    N: Float,
{
    /// IDF of a term
    /// # Arguments
    /// * `doc_num` - documents in the corpus
    /// * `doc_freq` - documents containing the term
    fn idf(doc_num: u64, doc_freq: u64) -> N;

    /// Raw count times IDF for every term of a document
    /// Terms the corpus has never seen get `doc_freq = 0`.
    fn tf_idf(freq: &TermFrequency, corpus: &Corpus) -> TfIdfScores<N>;
}

/// Smoothed engine: `idf = ln((N + 1) / (df + 1)) + 1`, `tf_idf = count * idf`
/// The weight is finite and positive for every `df <= N`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmoothTfIdfEngine;

macro_rules! impl_smooth_engine {
    ($($t:ty),*) => {$(
        impl TfIdfEngine<$t> for SmoothTfIdfEngine {
            #[inline]
            fn idf(doc_num: u64, doc_freq: u64) -> $t {
                ((doc_num as $t + 1.0) / (doc_freq as $t + 1.0)).ln() + 1.0
            }

            fn tf_idf(freq: &TermFrequency, corpus: &Corpus) -> TfIdfScores<$t> {
                let doc_num = corpus.get_doc_num();
                let mut scores = TfIdfScores::new();
                for (term, count) in freq.iter() {
                    let idf = <Self as TfIdfEngine<$t>>::idf(doc_num, corpus.get_term_count(term));
                    scores.insert(term, count as $t * idf);
                }
                scores
            }
        }
    )*};
}

impl_smooth_engine!(f32, f64);
