/// Cold-Start Resolver
///
/// Decides how a user enters the scoring engine:
/// 1. Known user + interaction table → the user's own rating row
/// 2. Otherwise, with an interaction table → mean latent vector over all training users
/// 3. Otherwise → zero rating vector, projected normally
///
/// Only path 1 yields a non-empty rated-item set.
use ndarray::{Array1, Axis};
use std::collections::HashSet;
use tracing::debug;

use super::factor_model::LinearFactorModel;
use crate::artifacts::{ArtifactBundle, InteractionMatrix};
use crate::error::{AppError, Result};
use crate::models::{ItemId, UserId};

/// Input handed to the scoring engine
#[derive(Debug, Clone, PartialEq)]
pub enum UserVector {
    /// Item-rating vector of catalog length, still to be projected
    Ratings(Array1<f64>),
    /// Already in latent space, reconstructed directly
    Latent(Array1<f64>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionPath {
    Known,
    MeanLatent,
    ZeroVector,
}

impl ResolutionPath {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionPath::Known => "known",
            ResolutionPath::MeanLatent => "mean_latent",
            ResolutionPath::ZeroVector => "zero_vector",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedUser {
    pub input: UserVector,
    pub rated_items: HashSet<ItemId>,
    pub path: ResolutionPath,
}

pub fn resolve(user_id: UserId, bundle: &ArtifactBundle) -> Result<ResolvedUser> {
    let catalog = bundle.catalog();

    let known_row = bundle
        .user_index()
        .row_of(user_id)
        .zip(bundle.interactions());

    let resolved = match known_row {
        Some((row, table)) => {
            let ratings = table.row(row).ok_or_else(|| {
                AppError::Computation(format!(
                    "user {} maps to row {} outside the interaction table",
                    user_id, row
                ))
            })?;

            let rated_items = table
                .rated_columns(row)
                .into_iter()
                .filter_map(|col| catalog.item_at(col))
                .collect();

            ResolvedUser {
                input: UserVector::Ratings(ratings.to_owned()),
                rated_items,
                path: ResolutionPath::Known,
            }
        }
        None => match bundle.interactions() {
            Some(table) => match mean_latent_vector(bundle.model(), table)? {
                Some(mean) => ResolvedUser {
                    input: UserVector::Latent(mean),
                    rated_items: HashSet::new(),
                    path: ResolutionPath::MeanLatent,
                },
                None => zero_vector(catalog.len()),
            },
            None => zero_vector(catalog.len()),
        },
    };

    debug!(
        user_id,
        path = resolved.path.as_str(),
        rated_items = resolved.rated_items.len(),
        "Resolved user input vector"
    );

    Ok(resolved)
}

/// Mean of every training row projected into latent space.
///
/// Depends only on the model and the table. `None` when the table has no rows.
pub fn mean_latent_vector(
    model: &dyn LinearFactorModel,
    table: &InteractionMatrix,
) -> Result<Option<Array1<f64>>> {
    if table.nrows() == 0 {
        return Ok(None);
    }

    let latent = model.project_rows(table.ratings())?;
    if latent.ncols() != model.latent_dim() {
        return Err(AppError::dimension_mismatch(
            "projected training rows",
            model.latent_dim(),
            latent.ncols(),
        ));
    }

    Ok(latent.mean_axis(Axis(0)))
}

fn zero_vector(item_count: usize) -> ResolvedUser {
    ResolvedUser {
        input: UserVector::Ratings(Array1::zeros(item_count)),
        rated_items: HashSet::new(),
        path: ResolutionPath::ZeroVector,
    }
}
