use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    lexicon::sentiment::{CategoryWeights, LexiconEncoding},
    vectorizer::term::{TermFilter, DEFAULT_DESIRED_POS},
};

/// Pipeline settings
/// Every field has a default, so a config file only needs the values it changes.
///
/// # Examples
/// ```
/// use qa_keyword_features::PipelineConfig;
/// let config = PipelineConfig::from_json(r#"{ "top_k": 5 }"#).unwrap();
/// assert_eq!(config.top_k, 5);
/// assert_eq!(config.max_features, Some(1000));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// keywords kept per document
    pub top_k: usize,
    /// POS codes accepted by the keyword pass
    pub desired_pos: Vec<String>,
    /// vocabulary cap of the n-gram vectorizer, `None` keeps every n-gram
    pub max_features: Option<usize>,
    /// inclusive n-gram range of the n-gram vectorizer
    pub ngram_range: (usize, usize),
    /// encoding of the lexicon category files
    pub lexicon_encoding: LexiconEncoding,
    /// category file name (without extension) -> polarity weight
    pub lexicon_categories: CategoryWeights,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            top_k: 10,
            desired_pos: DEFAULT_DESIRED_POS.iter().map(|s| s.to_string()).collect(),
            max_features: Some(1000),
            ngram_range: (1, 2),
            lexicon_encoding: LexiconEncoding::Gbk,
            lexicon_categories: CategoryWeights::default(),
        }
    }
}

impl PipelineConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json(&json)
    }

    /// Filter of the keyword pass (stopwords + POS whitelist)
    pub fn keyword_filter(&self) -> TermFilter {
        TermFilter::pos_restricted(self.desired_pos.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_pipeline() {
        let config = PipelineConfig::default();
        assert_eq!(config.top_k, 10);
        assert_eq!(config.max_features, Some(1000));
        assert_eq!(config.ngram_range, (1, 2));
        assert_eq!(config.lexicon_encoding, LexiconEncoding::Gbk);
        assert_eq!(config.desired_pos, vec!["n", "nr", "ns", "nt", "vn"]);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = PipelineConfig::from_json(
            r#"{ "max_features": null, "lexicon_encoding": "utf8", "desired_pos": ["n"] }"#,
        )
        .unwrap();
        assert_eq!(config.max_features, None);
        assert_eq!(config.lexicon_encoding, LexiconEncoding::Utf8);
        assert_eq!(config.top_k, 10);
        assert!(matches!(config.keyword_filter(), TermFilter::PosRestricted(ref set) if set.len() == 1));
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = PipelineConfig::from_json("{ top_k: ").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = PipelineConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
