/// Linear Factor Model
///
/// Any factorization technique that projects an item-rating vector into a
/// K-dimensional latent space and reconstructs item scores through a K × C
/// component matrix can back the scoring engine.
///
/// # Artifact format
/// `factor_model.json` is tagged on `kind`:
/// ```json
/// {"kind": "truncated_svd", "components": [[0.1, 0.2, 0.3], [0.4, 0.5, 0.6]]}
/// ```
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use serde::Deserialize;
use std::fmt;

use crate::error::{AppError, Result};

pub trait LinearFactorModel: fmt::Debug + Send + Sync {
    /// Short label used in logs and model info
    fn name(&self) -> &'static str;

    /// K × C component matrix
    fn components(&self) -> ArrayView2<'_, f64>;

    /// Map a rating vector of length C to a latent vector of length K
    fn project(&self, ratings: ArrayView1<'_, f64>) -> Result<Array1<f64>>;

    /// Number of latent dimensions (K)
    fn latent_dim(&self) -> usize {
        self.components().nrows()
    }

    /// Number of catalog items (C)
    fn item_count(&self) -> usize {
        self.components().ncols()
    }

    /// Project every row of an N × C matrix, yielding N × K
    fn project_rows(&self, ratings: ArrayView2<'_, f64>) -> Result<Array2<f64>> {
        let mut latent = Array2::zeros((ratings.nrows(), self.latent_dim()));
        for (row, mut out) in ratings.outer_iter().zip(latent.outer_iter_mut()) {
            let projected = self.project(row)?;
            if projected.len() != out.len() {
                return Err(AppError::dimension_mismatch(
                    "projection output",
                    out.len(),
                    projected.len(),
                ));
            }
            out.assign(&projected);
        }
        Ok(latent)
    }

    /// (1 × K) · (K × C) → C predicted ratings
    fn reconstruct(&self, latent: ArrayView1<'_, f64>) -> Result<Array1<f64>> {
        let components = self.components();
        if latent.len() != components.nrows() {
            return Err(AppError::dimension_mismatch(
                "latent vector",
                components.nrows(),
                latent.len(),
            ));
        }
        Ok(latent.dot(&components))
    }
}

/// Truncated SVD: projection is `X · Vᵀ`, reconstruction is `z · V`.
#[derive(Debug, Clone)]
pub struct TruncatedSvdModel {
    components: Array2<f64>,
}

impl TruncatedSvdModel {
    pub fn new(components: Array2<f64>) -> Result<Self> {
        if components.nrows() == 0 {
            return Err(AppError::ArtifactUnavailable(
                "factor model has no latent components".to_string(),
            ));
        }
        if components.iter().any(|value| !value.is_finite()) {
            return Err(AppError::ArtifactUnavailable(
                "factor model components contain non-finite values".to_string(),
            ));
        }
        Ok(Self { components })
    }

    /// Build from nested rows, rejecting ragged input
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let components = rows_to_array(rows, "factor model components")?;
        Self::new(components)
    }
}

impl LinearFactorModel for TruncatedSvdModel {
    fn name(&self) -> &'static str {
        "truncated_svd"
    }

    fn components(&self) -> ArrayView2<'_, f64> {
        self.components.view()
    }

    fn project(&self, ratings: ArrayView1<'_, f64>) -> Result<Array1<f64>> {
        if ratings.len() != self.components.ncols() {
            return Err(AppError::dimension_mismatch(
                "rating vector",
                self.components.ncols(),
                ratings.len(),
            ));
        }
        Ok(self.components.dot(&ratings))
    }

    fn project_rows(&self, ratings: ArrayView2<'_, f64>) -> Result<Array2<f64>> {
        if ratings.ncols() != self.components.ncols() {
            return Err(AppError::dimension_mismatch(
                "rating matrix columns",
                self.components.ncols(),
                ratings.ncols(),
            ));
        }
        Ok(ratings.dot(&self.components.t()))
    }
}

/// On-disk representation of the factor model
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FactorModelArtifact {
    TruncatedSvd { components: Vec<Vec<f64>> },
}

impl FactorModelArtifact {
    pub fn into_model(self) -> Result<Box<dyn LinearFactorModel>> {
        match self {
            FactorModelArtifact::TruncatedSvd { components } => {
                Ok(Box::new(TruncatedSvdModel::from_rows(components)?))
            }
        }
    }
}

/// Convert nested rows into a dense matrix. An empty outer vector yields a 0 × 0 matrix.
pub(crate) fn rows_to_array(rows: Vec<Vec<f64>>, what: &str) -> Result<Array2<f64>> {
    let nrows = rows.len();
    let ncols = rows.first().map(Vec::len).unwrap_or(0);

    if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != ncols) {
        return Err(AppError::ArtifactUnavailable(format!(
            "{} row {} has {} columns, expected {}",
            what,
            index,
            row.len(),
            ncols
        )));
    }

    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    Ok(Array2::from_shape_vec((nrows, ncols), flat)?)
}
