use ndarray::{Array2, ArrayView1, ArrayView2};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::services::factor_model::rows_to_array;

/// Raw user × item rating table from training.
///
/// Rows follow the user index, columns follow the item catalog. A stored value of
/// `0.0` means "no recorded rating"; only strictly positive cells count as rated.
#[derive(Debug, Clone)]
pub struct InteractionMatrix {
    ratings: Array2<f64>,
}

/// On-disk representation; `null` cells are missing ratings.
///
/// `null` is stored as `0.0` once loaded, so after loading it cannot be told apart
/// from an explicit zero. Both mean "not rated".
#[derive(Debug, Deserialize)]
pub struct InteractionMatrixArtifact {
    pub rows: Vec<Vec<Option<f64>>>,
}

impl InteractionMatrix {
    pub fn new(ratings: Array2<f64>) -> Result<Self> {
        if let Some(((row, col), value)) = ratings
            .indexed_iter()
            .find(|(_, value)| !value.is_finite() || **value < 0.0)
        {
            return Err(AppError::ArtifactUnavailable(format!(
                "interaction table holds invalid rating {} at row {}, column {}",
                value, row, col
            )));
        }
        Ok(Self { ratings })
    }

    /// Build from nullable rows. With no rows the table is `0 × item_count`.
    pub fn from_rows(rows: Vec<Vec<Option<f64>>>, item_count: usize) -> Result<Self> {
        if rows.is_empty() {
            return Self::new(Array2::zeros((0, item_count)));
        }

        let dense = rows
            .into_iter()
            .map(|row| row.into_iter().map(|cell| cell.unwrap_or(0.0)).collect())
            .collect();
        Self::new(rows_to_array(dense, "interaction table")?)
    }

    pub fn nrows(&self) -> usize {
        self.ratings.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.ratings.ncols()
    }

    pub fn ratings(&self) -> ArrayView2<'_, f64> {
        self.ratings.view()
    }

    pub fn row(&self, index: usize) -> Option<ArrayView1<'_, f64>> {
        (index < self.ratings.nrows()).then(|| self.ratings.row(index))
    }

    /// Column positions holding a recorded rating for `row`
    pub fn rated_columns(&self, row: usize) -> Vec<usize> {
        self.row(row)
            .map(|ratings| {
                ratings
                    .iter()
                    .enumerate()
                    .filter(|(_, value)| **value > 0.0)
                    .map(|(col, _)| col)
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl InteractionMatrixArtifact {
    pub fn into_matrix(self, item_count: usize) -> Result<InteractionMatrix> {
        InteractionMatrix::from_rows(self.rows, item_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_null_cells_read_as_missing() {
        let matrix =
            InteractionMatrix::from_rows(vec![vec![Some(5.0), None, Some(3.0)]], 3).unwrap();
        assert_eq!(matrix.row(0).unwrap(), array![5.0, 0.0, 3.0]);
        assert_eq!(matrix.rated_columns(0), vec![0, 2]);
    }

    #[test]
    fn test_zero_is_not_a_rating() {
        let matrix = InteractionMatrix::new(array![[0.0, 4.0, 0.0]]).unwrap();
        assert_eq!(matrix.rated_columns(0), vec![1]);
    }

    #[test]
    fn test_negative_and_non_finite_rejected() {
        assert!(InteractionMatrix::new(array![[1.0, -2.0]]).is_err());
        assert!(InteractionMatrix::new(array![[f64::INFINITY, 1.0]]).is_err());
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let result = InteractionMatrix::from_rows(vec![vec![Some(1.0)], vec![None, None]], 2);
        assert!(matches!(result, Err(AppError::ArtifactUnavailable(_))));
    }

    #[test]
    fn test_no_rows_keeps_catalog_width() {
        let matrix = InteractionMatrix::from_rows(Vec::new(), 4).unwrap();
        assert_eq!(matrix.nrows(), 0);
        assert_eq!(matrix.ncols(), 4);
    }

    #[test]
    fn test_out_of_range_row() {
        let matrix = InteractionMatrix::new(array![[1.0]]).unwrap();
        assert!(matrix.row(1).is_none());
        assert!(matrix.rated_columns(1).is_empty());
    }
}
