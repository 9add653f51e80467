//! Seam towards the sentiment classifier.
//!
//! The trainer is external; this module only checks that features and
//! labels line up and hands them over.
use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{Error, Result},
    features::matrix::FeatureMatrix,
};

/// Feature matrix with one class label per row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawDataset")]
pub struct LabeledDataset {
    matrix: FeatureMatrix,
    labels: Vec<u8>,
}

/// unchecked on-disk form
#[derive(Deserialize)]
struct RawDataset {
    matrix: FeatureMatrix,
    labels: Vec<u8>,
}

impl TryFrom<RawDataset> for LabeledDataset {
    type Error = Error;

    fn try_from(raw: RawDataset) -> Result<Self> {
        Self::new(raw.matrix, raw.labels)
    }
}

impl LabeledDataset {
    /// Pair features with labels; row and label counts must agree
    pub fn new(matrix: FeatureMatrix, labels: Vec<u8>) -> Result<Self> {
        if matrix.rows() != labels.len() {
            return Err(Error::LabelMismatch {
                rows: matrix.rows(),
                labels: labels.len(),
            });
        }
        Ok(Self { matrix, labels })
    }

    pub fn matrix(&self) -> &FeatureMatrix {
        &self.matrix
    }

    pub fn labels(&self) -> &[u8] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Parse labels, one integer class per line; blank lines are skipped
pub fn parse_labels(text: &str) -> Result<Vec<u8>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            line.trim().parse::<u8>().map_err(|_| Error::InvalidLabel {
                line: i + 1,
                value: line.trim().to_string(),
            })
        })
        .collect()
}

/// Read a UTF-8 label file
pub fn load_labels<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let labels = parse_labels(&text)?;
    debug!(path = %path.display(), labels = labels.len(), "loaded labels");
    Ok(labels)
}

/// A sentiment classifier trainer
/// The algorithm is up to the implementor.
pub trait SentimentTrainer {
    type Model;

    fn train(&self, data: &LabeledDataset) -> Result<Self::Model>;
}
