//! File-to-features entry points used by the binary.
use std::path::Path;

use tracing::info;

use crate::{
    config::PipelineConfig,
    error::Result,
    features::{HybridFeatureBuilder, HybridFeatures},
    lexicon::{sentiment::SentimentLexicon, stopwords::StopwordSet},
    vectorizer::{
        dense::DenseTfIdfMatrix, keyword::DocumentKeywords, term::TermFilter, token::Document,
        TfIdfVectorizer,
    },
};

/// Top-k keywords per line of a tagged corpus, POS-restricted
pub fn extract_keywords<P: AsRef<Path>>(
    corpus: P,
    stopwords: &StopwordSet,
    config: &PipelineConfig,
) -> Result<Vec<DocumentKeywords>> {
    let docs = Document::read_corpus(corpus)?;
    let vectorizer: TfIdfVectorizer = TfIdfVectorizer::new(&docs, stopwords, config.keyword_filter());
    let keywords = vectorizer.keywords(config.top_k);
    info!(documents = keywords.len(), top_k = config.top_k, "keywords extracted");
    Ok(keywords)
}

/// Dense TF-IDF rows over the full (stopword-filtered) vocabulary
pub fn extract_tfidf_features<P: AsRef<Path>>(
    corpus: P,
    stopwords: &StopwordSet,
) -> Result<DenseTfIdfMatrix> {
    let docs = Document::read_corpus(corpus)?;
    let vectorizer: TfIdfVectorizer = TfIdfVectorizer::new(&docs, stopwords, TermFilter::Unrestricted);
    let matrix = vectorizer.dense_matrix();
    info!(documents = matrix.n_rows(), vocabulary = matrix.n_cols(), "dense features extracted");
    Ok(matrix)
}

/// Keywords -> hybrid n-gram TF-IDF + sentiment matrix
pub fn build_feature_matrix<P: AsRef<Path>>(
    keywords: &[DocumentKeywords],
    lexicon_dir: P,
    config: &PipelineConfig,
) -> Result<HybridFeatures> {
    let lexicon = SentimentLexicon::load(
        lexicon_dir,
        &config.lexicon_categories,
        config.lexicon_encoding,
    )?;
    HybridFeatureBuilder::new(&lexicon)
        .ngram_range(config.ngram_range)
        .max_features(config.max_features)
        .build(keywords)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;
    use crate::{error::Error, features::matrix, lexicon::sentiment::LexiconEncoding};

    const CORPUS: &str = "京东/nt 外卖/n 补贴/vn 很/d 便宜/a\n\
                          美团/nt 骑手/n 待遇/n 失望/v\n\
                          外卖/n 补贴/vn 满意/v\n";

    #[test]
    fn corpus_to_hybrid_features() {
        let dir = tempdir().unwrap();
        let corpus = dir.path().join("words.txt");
        fs::write(&corpus, CORPUS).unwrap();
        let lexicon_dir = dir.path().join("lexicon");
        fs::create_dir(&lexicon_dir).unwrap();
        fs::write(lexicon_dir.join("正面评价词语（中文）.txt"), "补贴\n").unwrap();

        let config = PipelineConfig {
            lexicon_encoding: LexiconEncoding::Utf8,
            top_k: 2,
            ..PipelineConfig::default()
        };
        let stopwords = StopwordSet::from_lines(["很"]);

        let keywords = extract_keywords(&corpus, &stopwords, &config).unwrap();
        assert_eq!(keywords.len(), 3);
        assert!(keywords.iter().all(|k| k.len() <= 2));

        let features = build_feature_matrix(&keywords, &lexicon_dir, &config).unwrap();
        assert_eq!(features.matrix.rows(), 3);
        let col = features.sentiment_column();
        let expected: Vec<f64> = keywords
            .iter()
            .map(|k| if k.terms().any(|t| t == "补贴") { 1.0 } else { 0.0 })
            .collect();
        assert_eq!(features.sentiment, expected);
        assert_eq!(matrix::value_at(&features.matrix, 0, col), expected[0]);

        let dense = extract_tfidf_features(&corpus, &stopwords).unwrap();
        assert_eq!(dense.n_rows(), 3);
        assert!(dense.vocabulary.index_of("便宜").is_some());
        assert!(dense.vocabulary.index_of("很").is_none());
    }

    #[test]
    fn missing_corpus_fails_fast() {
        let err = extract_keywords("/no/corpus.txt", &StopwordSet::new(), &PipelineConfig::default())
            .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
