use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Row-major value slab backing one series.
///
/// Rows are sample points along a curve; columns are successive frames of the
/// same curve. A plain 1-D sequence normalizes to a single-column matrix, so
/// a static curve is the one-frame special case of an animated family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl SeriesMatrix {
    /// Normalizes a 1-D sequence into a single-frame matrix.
    pub fn from_curve(values: &[f64]) -> PlotResult<Self> {
        Self::from_parts(values.len(), 1, values.to_vec())
    }

    /// Builds a multi-frame matrix from equal-length frame columns.
    pub fn from_columns(columns: &[Vec<f64>]) -> PlotResult<Self> {
        let Some(first) = columns.first() else {
            return Err(PlotError::InvalidData(
                "series payload must contain at least one frame".to_owned(),
            ));
        };
        let rows = first.len();
        for (index, column) in columns.iter().enumerate() {
            if column.len() != rows {
                return Err(PlotError::InvalidData(format!(
                    "frame {index} has {} points, expected {rows}",
                    column.len()
                )));
            }
        }

        let mut data = vec![0.0; rows * columns.len()];
        for (col, column) in columns.iter().enumerate() {
            for (row, value) in column.iter().enumerate() {
                data[row * columns.len() + col] = *value;
            }
        }
        Self::from_parts(rows, columns.len(), data)
    }

    fn from_parts(rows: usize, cols: usize, data: Vec<f64>) -> PlotResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(PlotError::InvalidData(
                "series payload must not be empty".to_owned(),
            ));
        }
        debug_assert_eq!(data.len(), rows * cols);
        if data.iter().any(|value| !value.is_finite()) {
            return Err(PlotError::InvalidData(
                "series payload values must be finite".to_owned(),
            ));
        }
        Ok(Self { rows, cols, data })
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Copies one frame column out of the slab.
    #[must_use]
    pub fn column(&self, col: usize) -> Vec<f64> {
        debug_assert!(col < self.cols);
        (0..self.rows).map(|row| self.value(row, col)).collect()
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.fold_key(|value| OrderedFloat(value))
    }

    #[must_use]
    pub fn max_abs(&self) -> f64 {
        self.fold_key(|value| OrderedFloat(-value.abs())).abs()
    }

    #[must_use]
    pub fn has_negative(&self) -> bool {
        self.data.iter().any(|value| *value < 0.0)
    }

    fn fold_key(&self, key: impl Fn(f64) -> OrderedFloat<f64>) -> f64 {
        // Construction guarantees a non-empty, finite slab.
        self.data
            .iter()
            .copied()
            .min_by_key(|value| key(*value))
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::SeriesMatrix;

    #[test]
    fn curve_normalizes_to_single_column() {
        let matrix = SeriesMatrix::from_curve(&[0.0, 1.0, 4.0]).expect("valid curve");
        assert_eq!(matrix.rows(), 3);
        assert_eq!(matrix.cols(), 1);
        assert_eq!(matrix.column(0), vec![0.0, 1.0, 4.0]);
    }

    #[test]
    fn columns_store_frames_side_by_side() {
        let matrix = SeriesMatrix::from_columns(&[vec![1.0, 2.0], vec![3.0, 4.0]])
            .expect("valid frames");
        assert_eq!(matrix.rows(), 2);
        assert_eq!(matrix.cols(), 2);
        assert_eq!(matrix.column(0), vec![1.0, 2.0]);
        assert_eq!(matrix.column(1), vec![3.0, 4.0]);
    }

    #[test]
    fn ragged_frames_are_rejected() {
        let result = SeriesMatrix::from_columns(&[vec![1.0, 2.0], vec![3.0]]);
        assert!(result.is_err());
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert!(SeriesMatrix::from_curve(&[0.0, f64::NAN]).is_err());
        assert!(SeriesMatrix::from_curve(&[f64::INFINITY]).is_err());
    }

    #[test]
    fn extrema_cover_the_whole_slab() {
        let matrix = SeriesMatrix::from_columns(&[vec![-2.0, 1.0], vec![0.5, 1.5]])
            .expect("valid frames");
        assert_eq!(matrix.min(), -2.0);
        assert_eq!(matrix.max_abs(), 2.0);
        assert!(matrix.has_negative());
    }
}
