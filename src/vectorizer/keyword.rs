use std::fmt;

use num::traits::float::TotalOrder;
use num::Float;
use serde::{Deserialize, Serialize};

use crate::vectorizer::tfidf::TfIdfScores;

/// Default number of keywords kept per document
pub const DEFAULT_TOP_K: usize = 10;

/// A term with its TF-IDF score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword<N = f64> {
    pub term: String,
    pub score: N,
}

/// Highest scoring terms of one document, best first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentKeywords<N = f64> {
    keywords: Vec<Keyword<N>>,
}

impl<N> DocumentKeywords<N>
where
    N: Float,
{
    /// Pick the `top_k` best terms of a document
    ///
    /// The sort is stable, so equal scores keep the order of the score map
    /// (first occurrence in the document). Fewer than `top_k` terms are
    /// returned as-is, without padding.
    pub fn from_scores(scores: &TfIdfScores<N>, top_k: usize) -> Self
    where
        N: TotalOrder,
    {
        let mut keywords: Vec<Keyword<N>> = scores
            .iter()
            .map(|(term, score)| Keyword {
                term: term.to_string(),
                score,
            })
            .collect();
        keywords.sort_by(|a, b| b.score.total_cmp(&a.score));
        keywords.truncate(top_k);
        Self { keywords }
    }

    pub fn keywords(&self) -> &[Keyword<N>] {
        &self.keywords
    }

    /// Keyword terms joined by single spaces, scores dropped
    pub fn to_text(&self) -> String {
        self.terms().collect::<Vec<_>>().join(" ")
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(|k| k.term.as_str())
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl<N> fmt::Display for DocumentKeywords<N>
where
    N: Float + fmt::Display,
{
    /// one `term: score` line per keyword
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for k in &self.keywords {
            writeln!(f, "{}: {:.4}", k.term, k.score)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(pairs: &[(&str, f64)]) -> TfIdfScores<f64> {
        let mut s = TfIdfScores::new();
        for (term, score) in pairs {
            s.insert(term, *score);
        }
        s
    }

    #[test]
    fn sorted_descending_and_truncated() {
        let s = scores(&[("a", 1.0), ("b", 3.0), ("c", 2.0), ("d", 0.5)]);
        let kw = DocumentKeywords::from_scores(&s, 3);
        assert_eq!(kw.terms().collect::<Vec<_>>(), vec!["b", "c", "a"]);
        assert!(kw.keywords().windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn ties_keep_insertion_order() {
        let s = scores(&[("x", 1.0), ("y", 2.0), ("z", 1.0), ("w", 2.0), ("v", 1.0)]);
        let kw = DocumentKeywords::from_scores(&s, 4);
        assert_eq!(kw.terms().collect::<Vec<_>>(), vec!["y", "w", "x", "z"]);
    }

    #[test]
    fn zero_scores_sort_last() {
        let s = scores(&[("z", 0.0), ("a", 0.1), ("b", 0.0)]);
        let kw = DocumentKeywords::from_scores(&s, 3);
        assert_eq!(kw.terms().collect::<Vec<_>>(), vec!["a", "z", "b"]);
    }

    #[test]
    fn short_documents_are_not_padded() {
        let s = scores(&[("only", 1.2)]);
        assert_eq!(DocumentKeywords::from_scores(&s, 10).len(), 1);
        assert!(DocumentKeywords::from_scores(&TfIdfScores::<f64>::new(), 10).is_empty());
        assert!(DocumentKeywords::from_scores(&s, 0).is_empty());
    }

    #[test]
    fn text_and_display() {
        let s = scores(&[("外卖", 2.5), ("骑手", 1.25)]);
        let kw = DocumentKeywords::from_scores(&s, DEFAULT_TOP_K);
        assert_eq!(kw.to_text(), "外卖 骑手");
        assert_eq!(kw.to_string(), "外卖: 2.5000\n骑手: 1.2500\n");
    }
}
