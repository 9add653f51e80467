use std::{
    collections::{BTreeMap, HashMap},
    sync::LazyLock,
};

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{Error, Result},
    features::matrix::{self, FeatureMatrix},
    vectorizer::{
        dense::Vocabulary,
        tfidf::{SmoothTfIdfEngine, TfIdfEngine},
    },
};

/// words of two or more word characters
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is valid"));

/// TF-IDF over word n-grams of whitespace-joined keyword texts
///
/// - text is lowercased, tokens are runs of 2+ word characters
/// - n-grams are space-joined, all shorter n-grams first
/// - `max_features` keeps the most frequent n-grams corpus-wide (ties: lexicographic)
/// - columns are in lexicographic n-gram order
/// - weights are `count * (ln((1 + n) / (1 + df)) + 1)`, each row l2-normalised
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NgramTfidfVectorizer {
    ngram_range: (usize, usize),
    max_features: Option<usize>,
    vocabulary: Vocabulary,
    idf: Vec<f64>,
}

impl Default for NgramTfidfVectorizer {
    fn default() -> Self {
        Self::new((1, 2), Some(1000))
    }
}

impl NgramTfidfVectorizer {
    /// Unfitted vectorizer
    /// A range with `min == 0` is treated as starting at 1.
    pub fn new(ngram_range: (usize, usize), max_features: Option<usize>) -> Self {
        let min_n = ngram_range.0.max(1);
        Self {
            ngram_range: (min_n, ngram_range.1.max(min_n)),
            max_features,
            vocabulary: Vocabulary::default(),
            idf: Vec::new(),
        }
    }

    /// Tokenize and expand one text into its n-grams
    pub fn analyze(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = TOKEN_PATTERN.find_iter(&lowered).map(|m| m.as_str()).collect();
        let (min_n, max_n) = self.ngram_range;
        let mut grams = Vec::new();
        for n in min_n..=max_n.min(tokens.len()) {
            grams.extend(tokens.windows(n).map(|w| w.join(" ")));
        }
        grams
    }

    /// Learn vocabulary and IDF
    ///
    /// Fails with `Error::EmptyVocabulary` when there are no texts or no text
    /// yields a single n-gram.
    pub fn fit<S: AsRef<str>>(&mut self, texts: &[S]) -> Result<&mut Self> {
        let mut term_counts: HashMap<String, u64> = HashMap::new();
        let mut doc_freq: HashMap<String, u64> = HashMap::new();
        for text in texts {
            let mut seen = HashMap::new();
            for gram in self.analyze(text.as_ref()) {
                *seen.entry(gram).or_insert(0u64) += 1;
            }
            for (gram, count) in seen {
                *term_counts.entry(gram.clone()).or_insert(0) += count;
                *doc_freq.entry(gram).or_insert(0) += 1;
            }
        }
        if term_counts.is_empty() {
            return Err(Error::EmptyVocabulary);
        }

        let mut ranked: Vec<(String, u64)> = term_counts.into_iter().collect();
        if let Some(limit) = self.max_features {
            ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            ranked.truncate(limit);
        }
        self.vocabulary = Vocabulary::from_terms(ranked.into_iter().map(|(gram, _)| gram));

        let doc_num = texts.len() as u64;
        self.idf = self
            .vocabulary
            .terms()
            .iter()
            .map(|gram| {
                let df = doc_freq.get(gram).copied().unwrap_or(0);
                <SmoothTfIdfEngine as TfIdfEngine<f64>>::idf(doc_num, df)
            })
            .collect();
        debug!(documents = doc_num, features = self.vocabulary.len(), "n-gram vectorizer fitted");
        if self.vocabulary.is_empty() {
            return Err(Error::EmptyVocabulary);
        }
        Ok(self)
    }

    /// Weight texts against the fitted vocabulary; unseen n-grams are ignored
    pub fn transform<S: AsRef<str>>(&self, texts: &[S]) -> FeatureMatrix {
        let rows = texts.iter().map(|text| {
            let mut counts: BTreeMap<usize, u64> = BTreeMap::new();
            for gram in self.analyze(text.as_ref()) {
                if let Some(idx) = self.vocabulary.index_of(&gram) {
                    *counts.entry(idx).or_insert(0) += 1;
                }
            }
            let weighted: Vec<(usize, f64)> = counts
                .into_iter()
                .map(|(idx, count)| (idx, count as f64 * self.idf[idx]))
                .collect();
            let norm = weighted.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
            if norm > 0.0 {
                weighted.into_iter().map(|(idx, w)| (idx, w / norm)).collect()
            } else {
                weighted
            }
        });
        matrix::from_rows(self.vocabulary.len(), rows)
    }

    pub fn fit_transform<S: AsRef<str>>(&mut self, texts: &[S]) -> Result<FeatureMatrix> {
        self.fit(texts)?;
        Ok(self.transform(texts))
    }

    /// Fitted n-grams, in column order
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// IDF per column
    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    pub fn is_fitted(&self) -> bool {
        !self.vocabulary.is_empty()
    }
}
