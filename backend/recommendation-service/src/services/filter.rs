/// Exclusion & Threshold Filter
///
/// Drops items the user already rated (regardless of their predicted score), then
/// keeps only predictions >= `min_rating`.
use ndarray::Array1;
use std::collections::HashSet;

use crate::artifacts::ItemCatalog;
use crate::error::{AppError, Result};
use crate::models::{ItemId, Recommendation};

pub fn select_candidates(
    predictions: &Array1<f64>,
    catalog: &ItemCatalog,
    rated_items: &HashSet<ItemId>,
    min_rating: f64,
) -> Result<Vec<Recommendation>> {
    if predictions.len() != catalog.len() {
        return Err(AppError::dimension_mismatch(
            "prediction vector",
            catalog.len(),
            predictions.len(),
        ));
    }

    let candidates = catalog
        .items()
        .iter()
        .zip(predictions.iter())
        .filter(|(item_id, _)| !rated_items.contains(*item_id))
        .filter(|(_, score)| **score >= min_rating)
        .map(|(&product_id, &predicted_rating)| Recommendation {
            product_id,
            predicted_rating,
        })
        .collect();

    Ok(candidates)
}
