//! Artifact Bundle
//!
//! Immutable container for everything the scoring engine reads: the item catalog,
//! the user index, the factor model and the optional raw interaction table.
//!
//! The bundle is validated once on construction. After that it is never mutated and
//! can be shared across concurrent requests behind an `Arc`.
//!
//! # Contract
//! - component matrix columns == catalog length
//! - interaction table rows == user index length
//! - interaction table columns == catalog length

pub mod catalog;
pub mod interactions;
pub mod loader;
pub mod user_index;

pub use catalog::ItemCatalog;
pub use interactions::InteractionMatrix;
pub use loader::{
    FACTOR_MODEL_FILE, INTERACTION_MATRIX_FILE, ITEM_CATALOG_FILE, USER_INDEX_FILE,
};
pub use user_index::UserIndex;

use serde::Serialize;

use crate::error::{AppError, Result};
use crate::services::factor_model::LinearFactorModel;

#[derive(Debug)]
pub struct ArtifactBundle {
    catalog: ItemCatalog,
    user_index: UserIndex,
    model: Box<dyn LinearFactorModel>,
    interactions: Option<InteractionMatrix>,
}

/// Shape of the loaded bundle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BundleSummary {
    pub model: &'static str,
    pub item_count: usize,
    pub latent_dim: usize,
    pub known_users: usize,
    pub has_interactions: bool,
}

impl ArtifactBundle {
    pub fn new(
        catalog: ItemCatalog,
        user_index: UserIndex,
        model: Box<dyn LinearFactorModel>,
        interactions: Option<InteractionMatrix>,
    ) -> Result<Self> {
        if model.item_count() != catalog.len() {
            return Err(AppError::dimension_mismatch(
                "factor model item columns",
                catalog.len(),
                model.item_count(),
            ));
        }

        if let Some(table) = &interactions {
            if table.nrows() != user_index.len() {
                return Err(AppError::dimension_mismatch(
                    "interaction table rows",
                    user_index.len(),
                    table.nrows(),
                ));
            }
            if table.ncols() != catalog.len() {
                return Err(AppError::dimension_mismatch(
                    "interaction table columns",
                    catalog.len(),
                    table.ncols(),
                ));
            }
        }

        Ok(Self {
            catalog,
            user_index,
            model,
            interactions,
        })
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn user_index(&self) -> &UserIndex {
        &self.user_index
    }

    pub fn model(&self) -> &dyn LinearFactorModel {
        self.model.as_ref()
    }

    pub fn interactions(&self) -> Option<&InteractionMatrix> {
        self.interactions.as_ref()
    }

    pub fn summary(&self) -> BundleSummary {
        BundleSummary {
            model: self.model.name(),
            item_count: self.catalog.len(),
            latent_dim: self.model.latent_dim(),
            known_users: self.user_index.len(),
            has_interactions: self.interactions.is_some(),
        }
    }
}
