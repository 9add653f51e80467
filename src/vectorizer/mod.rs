pub mod corpus;
pub mod dense;
pub mod keyword;
pub mod term;
pub mod tfidf;
pub mod token;

use std::marker::PhantomData;

use num::Float;
use rayon::prelude::*;
use tracing::debug;

use crate::{
    lexicon::stopwords::StopwordSet,
    vectorizer::{
        corpus::Corpus,
        dense::{DenseTfIdfMatrix, Vocabulary},
        keyword::DocumentKeywords,
        term::{TermFilter, TermFrequency},
        tfidf::{SmoothTfIdfEngine, TfIdfEngine, TfIdfScores},
        token::Document,
    },
};

/// TF-IDF over one in-memory corpus
///
/// Holds the filtered term frequency of every document and the corpus
/// statistics derived from them. Both are computed once in `new`, with
/// the same `TermFilter`, and never change afterwards.
///
/// `TfIdfVectorizer<N, E>` has the following generic parameters:
/// - `N`: weight type (`f32` or `f64`)
/// - `E`: TF-IDF calculation engine (default `SmoothTfIdfEngine`)
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer<N = f64, E = SmoothTfIdfEngine>
where
    N: Float,
    E: TfIdfEngine<N>,
{
    /// per-document term frequency, in corpus order
    pub documents: Vec<TermFrequency>,
    /// document frequency statistics
    pub corpus: Corpus,
    filter: TermFilter,
    _marker: PhantomData<fn() -> (N, E)>,
}

impl<N, E> TfIdfVectorizer<N, E>
where
    N: Float + Send,
    E: TfIdfEngine<N>,
{
    /// Count terms of every document and collect corpus statistics
    ///
    /// Term counting runs per document in parallel; the document frequency
    /// pass runs afterwards over the finished counts, in corpus order.
    pub fn new(documents: &[Document], stopwords: &StopwordSet, filter: TermFilter) -> Self {
        let freqs: Vec<TermFrequency> = documents
            .par_iter()
            .map(|doc| TermFrequency::from_document(doc, stopwords, &filter))
            .collect();
        let corpus = Corpus::from_term_frequencies(&freqs);
        debug!(
            documents = corpus.get_doc_num(),
            terms = corpus.vocab_size(),
            "corpus statistics ready"
        );
        Self {
            documents: freqs,
            corpus,
            filter,
            _marker: PhantomData,
        }
    }

    pub fn filter(&self) -> &TermFilter {
        &self.filter
    }

    pub fn doc_num(&self) -> usize {
        self.documents.len()
    }

    /// TF-IDF scores of one document
    pub fn tf_idf(&self, doc: usize) -> Option<TfIdfScores<N>> {
        self.documents
            .get(doc)
            .map(|freq| E::tf_idf(freq, &self.corpus))
    }

    /// TF-IDF scores of all documents, in corpus order
    pub fn tf_idf_all(&self) -> Vec<TfIdfScores<N>> {
        self.documents
            .par_iter()
            .map(|freq| E::tf_idf(freq, &self.corpus))
            .collect()
    }

    /// Top `top_k` keywords of every document
    pub fn keywords(&self, top_k: usize) -> Vec<DocumentKeywords<N>>
    where
        N: num::traits::float::TotalOrder,
    {
        self.documents
            .par_iter()
            .map(|freq| DocumentKeywords::from_scores(&E::tf_idf(freq, &self.corpus), top_k))
            .collect()
    }

    /// Sorted vocabulary of every term that survived filtering
    pub fn vocabulary(&self) -> Vocabulary {
        Vocabulary::from_terms(self.corpus.terms())
    }

    /// Dense TF-IDF rows over the full vocabulary
    pub fn dense_matrix(&self) -> DenseTfIdfMatrix<N> {
        let scores = self.tf_idf_all();
        let matrix = DenseTfIdfMatrix::build(self.vocabulary(), &scores);
        debug!(rows = matrix.n_rows(), cols = matrix.n_cols(), "dense tf-idf matrix built");
        matrix
    }
}
