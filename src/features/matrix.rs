//! Sparse feature matrices on top of `sprs`.
use sprs::{CsMat, TriMat};

use crate::error::{Error, Result};

/// Row-major (CSR) sparse matrix, one row per document
/// Zero values are not stored.
pub type FeatureMatrix = CsMat<f64>;

/// Build a CSR matrix from per-row `(column, value)` pairs
/// Zeros and columns outside `n_cols` are dropped.
pub fn from_rows<R, I>(n_cols: usize, rows: R) -> FeatureMatrix
where
    R: IntoIterator<Item = I>,
    I: IntoIterator<Item = (usize, f64)>,
{
    let mut triplets = Vec::new();
    let mut n_rows = 0;
    for (r, row) in rows.into_iter().enumerate() {
        n_rows = r + 1;
        triplets.extend(
            row.into_iter()
                .filter(|&(c, v)| v != 0.0 && c < n_cols)
                .map(|(c, v)| (r, c, v)),
        );
    }
    let mut tri = TriMat::with_capacity((n_rows, n_cols), triplets.len());
    for (r, c, v) in triplets {
        tri.add_triplet(r, c, v);
    }
    tri.to_csr()
}

/// Horizontally append one dense column, giving it the last column index
pub fn hstack_column(matrix: &FeatureMatrix, column: &[f64]) -> Result<FeatureMatrix> {
    if column.len() != matrix.rows() {
        return Err(Error::ShapeMismatch {
            expected: matrix.rows(),
            found: column.len(),
        });
    }
    let new_col = matrix.cols();
    let mut tri = TriMat::with_capacity((matrix.rows(), new_col + 1), matrix.nnz() + column.len());
    for (&v, (r, c)) in matrix.iter() {
        tri.add_triplet(r, c, v);
    }
    for (r, &v) in column.iter().enumerate() {
        if v != 0.0 {
            tri.add_triplet(r, new_col, v);
        }
    }
    Ok(tri.to_csr())
}

/// Value at (row, col), zero if not stored or out of range
#[inline]
pub fn value_at(matrix: &FeatureMatrix, row: usize, col: usize) -> f64 {
    matrix.get(row, col).copied().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_drop_zeros_and_stray_columns() {
        let m = from_rows(3, [vec![(0, 1.0), (2, 0.5)], vec![], vec![(1, 0.0), (1, 2.0), (7, 1.0)]]);

        assert_eq!(m.shape(), (3, 3));
        assert_eq!(m.nnz(), 3);
        assert_eq!(value_at(&m, 0, 2), 0.5);
        assert_eq!(value_at(&m, 0, 1), 0.0);
        assert_eq!(value_at(&m, 2, 1), 2.0);
        assert_eq!(value_at(&m, 9, 0), 0.0);
        assert_eq!(m.outer_view(1).map(|row| row.nnz()), Some(0));
    }

    #[test]
    fn hstack_appends_last_column() {
        let m = from_rows(2, [vec![(1, 0.25)], vec![(0, 1.0)]]);
        let stacked = hstack_column(&m, &[-1.5, 0.0]).unwrap();

        assert_eq!(stacked.shape(), (2, 3));
        assert_eq!(stacked.nnz(), 3);
        assert_eq!(value_at(&stacked, 0, 1), 0.25);
        assert_eq!(value_at(&stacked, 0, 2), -1.5);
        assert_eq!(value_at(&stacked, 1, 0), 1.0);
        assert_eq!(value_at(&stacked, 1, 2), 0.0);
    }

    #[test]
    fn hstack_length_mismatch() {
        let m = from_rows(1, [vec![(0, 1.0)]]);
        assert!(matches!(
            hstack_column(&m, &[1.0, 2.0]),
            Err(Error::ShapeMismatch { expected: 1, found: 2 })
        ));
    }

    #[test]
    fn cbor_roundtrip_keeps_shape() {
        let m = from_rows(4, [vec![(3, 1.0)], vec![(0, 2.0), (1, 3.0)]]);
        let bytes = serde_cbor::to_vec(&m).unwrap();
        let back: FeatureMatrix = serde_cbor::from_slice(&bytes).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn inconsistent_structure_is_rejected_on_load() {
        let m = from_rows(2, [vec![(0, 1.0)]]);
        let mut value = serde_json::to_value(&m).unwrap();
        let indices = value
            .get_mut("indices")
            .expect("serialized matrix has column indices");
        *indices = serde_json::json!([5]);
        assert!(serde_json::from_value::<FeatureMatrix>(value).is_err());
    }
}
