use std::collections::HashMap;

use ndarray::{Array2, ArrayView1};
use num::Float;
use serde::{Deserialize, Serialize};

use crate::vectorizer::tfidf::TfIdfScores;

/// Sorted, deduplicated terms; position = column index
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Vocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Sort (byte order, i.e. code point order) and deduplicate
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut terms: Vec<String> = terms.into_iter().map(Into::into).collect();
        terms.sort_unstable();
        terms.dedup();
        let index = terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();
        Self { terms, index }
    }

    #[inline]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl From<Vec<String>> for Vocabulary {
    fn from(terms: Vec<String>) -> Self {
        Self::from_terms(terms)
    }
}

impl From<Vocabulary> for Vec<String> {
    fn from(vocab: Vocabulary) -> Self {
        vocab.terms
    }
}

/// One dense TF-IDF row per document over a shared vocabulary
/// `rows` is `(documents, vocabulary.len())`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseTfIdfMatrix<N = f64> {
    pub vocabulary: Vocabulary,
    pub rows: Array2<N>,
}

impl<N> DenseTfIdfMatrix<N>
where
    N: Float,
{
    /// Scatter each document's scores into a zeroed row of vocabulary width
    /// Terms missing from the vocabulary are skipped.
    pub fn build(vocabulary: Vocabulary, scores: &[TfIdfScores<N>]) -> Self {
        let mut rows = Array2::zeros((scores.len(), vocabulary.len()));
        for (doc, mut row) in scores.iter().zip(rows.rows_mut()) {
            for (term, value) in doc.iter() {
                if let Some(idx) = vocabulary.index_of(term) {
                    row[idx] = value;
                }
            }
        }
        Self { vocabulary, rows }
    }

    pub fn n_rows(&self) -> usize {
        self.rows.nrows()
    }

    pub fn n_cols(&self) -> usize {
        self.rows.ncols()
    }

    pub fn row(&self, doc: usize) -> Option<ArrayView1<'_, N>> {
        (doc < self.rows.nrows()).then(|| self.rows.row(doc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_is_sorted_bijection() {
        let vocab = Vocabulary::from_terms(["狗", "b", "猫", "a", "b"]);
        assert_eq!(vocab.terms(), &["a", "b", "狗", "猫"]);
        assert!(vocab.terms().windows(2).all(|w| w[0] < w[1]));
        for (i, term) in vocab.terms().iter().enumerate() {
            assert_eq!(vocab.index_of(term), Some(i));
        }
        assert_eq!(vocab.index_of("c"), None);
    }

    #[test]
    fn rows_have_vocabulary_width_and_skip_unknown_terms() {
        let vocab = Vocabulary::from_terms(["a", "b", "c"]);
        let mut first = TfIdfScores::new();
        first.insert("c", 2.0);
        first.insert("a", 1.0);
        first.insert("zzz", 9.0);
        let second = TfIdfScores::new();

        let matrix = DenseTfIdfMatrix::build(vocab, &[first, second]);
        assert_eq!(matrix.n_rows(), 2);
        assert_eq!(matrix.n_cols(), 3);
        assert_eq!(matrix.row(0).unwrap().to_vec(), vec![1.0, 0.0, 2.0]);
        assert_eq!(matrix.row(1).unwrap().to_vec(), vec![0.0, 0.0, 0.0]);
        assert!(matrix.row(2).is_none());
    }

    #[test]
    fn no_documents_keeps_vocabulary_width() {
        let matrix = DenseTfIdfMatrix::<f64>::build(Vocabulary::from_terms(["a", "b"]), &[]);
        assert_eq!(matrix.rows.dim(), (0, 2));
        assert_eq!(matrix.n_cols(), matrix.vocabulary.len());
    }

    #[test]
    fn matrix_cbor_roundtrip() {
        let mut scores = TfIdfScores::new();
        scores.insert("b", 0.5);
        let matrix = DenseTfIdfMatrix::build(Vocabulary::from_terms(["a", "b"]), &[scores]);
        let bytes = serde_cbor::to_vec(&matrix).unwrap();
        let back: DenseTfIdfMatrix = serde_cbor::from_slice(&bytes).unwrap();
        assert_eq!(back, matrix);
    }

    #[test]
    fn vocabulary_serde_rebuilds_index() {
        let vocab = Vocabulary::from_terms(["b", "a"]);
        let bytes = serde_cbor::to_vec(&vocab).unwrap();
        let back: Vocabulary = serde_cbor::from_slice(&bytes).unwrap();
        assert_eq!(back, vocab);
        assert_eq!(back.index_of("b"), Some(1));
    }
}
