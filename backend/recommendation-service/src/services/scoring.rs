/// Latent Factor Scoring Engine
///
/// Rating vector → project → latent (1 × K) · components (K × C) → predictions (C).
/// Latent inputs skip the projection step. Predictions are left unclipped.
use ndarray::Array1;

use super::cold_start::UserVector;
use super::factor_model::LinearFactorModel;
use crate::error::{AppError, Result};

pub fn predict(model: &dyn LinearFactorModel, input: &UserVector) -> Result<Array1<f64>> {
    let item_count = model.item_count();

    let projected;
    let latent = match input {
        UserVector::Ratings(ratings) => {
            if ratings.len() != item_count {
                return Err(AppError::dimension_mismatch(
                    "rating vector",
                    item_count,
                    ratings.len(),
                ));
            }
            projected = model.project(ratings.view())?;
            &projected
        }
        UserVector::Latent(latent) => latent,
    };

    if latent.len() != model.latent_dim() {
        return Err(AppError::dimension_mismatch(
            "latent vector",
            model.latent_dim(),
            latent.len(),
        ));
    }

    let predictions = model.reconstruct(latent.view())?;
    if predictions.len() != item_count {
        return Err(AppError::dimension_mismatch(
            "prediction vector",
            item_count,
            predictions.len(),
        ));
    }

    Ok(predictions)
}
