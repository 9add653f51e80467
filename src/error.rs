use std::path::PathBuf;

/// Result type used across the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while loading resources or building features
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A stopword, lexicon, corpus or label file could not be read or written
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Lexicon bytes are not valid in the configured encoding
    #[error("'{path}' is not valid {encoding}")]
    Decode {
        path: PathBuf,
        encoding: &'static str,
    },

    /// Vectorizer fitting got no documents, or no n-gram survived tokenization
    #[error("empty vocabulary; the documents contain no usable terms")]
    EmptyVocabulary,

    /// Feature matrix rows and label vector disagree in length
    #[error("feature matrix has {rows} rows but {labels} labels were given")]
    LabelMismatch { rows: usize, labels: usize },

    /// A column to append does not have one value per matrix row
    #[error("expected {expected} values, got {found}")]
    ShapeMismatch { expected: usize, found: usize },

    /// A label line that is not an integer class
    #[error("invalid label {value:?} on line {line}")]
    InvalidLabel { line: usize, value: String },

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_cbor::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
