// Loads the artifact bundle from a model directory.
//
// Layout:
//   item_catalog.json        [101, 102, 103]                          (required)
//   user_index.json          {"5": 0, "7": 1}                         (required)
//   factor_model.json        {"kind": "truncated_svd", ...}           (required)
//   interaction_matrix.json  {"rows": [[5.0, null, 3.0], ...]}        (optional)

use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, warn};

use super::interactions::InteractionMatrixArtifact;
use super::{ArtifactBundle, ItemCatalog, UserIndex};
use crate::error::{AppError, Result};
use crate::models::{ItemId, UserId};
use crate::services::factor_model::FactorModelArtifact;

pub const ITEM_CATALOG_FILE: &str = "item_catalog.json";
pub const USER_INDEX_FILE: &str = "user_index.json";
pub const FACTOR_MODEL_FILE: &str = "factor_model.json";
pub const INTERACTION_MATRIX_FILE: &str = "interaction_matrix.json";

impl ArtifactBundle {
    /// Read and validate every artifact under `model_dir`.
    ///
    /// A missing interaction table is not an error; a present but unreadable one is.
    pub fn load<P: AsRef<Path>>(model_dir: P) -> Result<Self> {
        let dir = model_dir.as_ref();

        if !dir.is_dir() {
            return Err(AppError::ArtifactUnavailable(format!(
                "model directory not found: {}",
                dir.display()
            )));
        }

        let items: Vec<ItemId> = read_required(dir, ITEM_CATALOG_FILE, "item catalog")?;
        let catalog = ItemCatalog::new(items)?;

        let rows: HashMap<UserId, usize> = read_required(dir, USER_INDEX_FILE, "user index")?;
        let user_index = UserIndex::new(rows)?;

        let model_artifact: FactorModelArtifact =
            read_required(dir, FACTOR_MODEL_FILE, "factor model")?;
        let model = model_artifact.into_model()?;

        let interactions =
            read_optional::<InteractionMatrixArtifact>(dir, INTERACTION_MATRIX_FILE)?
                .map(|artifact| artifact.into_matrix(catalog.len()))
                .transpose()?;

        if interactions.is_none() {
            warn!(
                model_dir = %dir.display(),
                "Interaction table unavailable, cold-start users fall back to the zero vector"
            );
        }

        let bundle = ArtifactBundle::new(catalog, user_index, model, interactions)?;
        let summary = bundle.summary();

        info!(
            model_dir = %dir.display(),
            model = summary.model,
            item_count = summary.item_count,
            latent_dim = summary.latent_dim,
            known_users = summary.known_users,
            has_interactions = summary.has_interactions,
            "Model artifacts loaded"
        );

        Ok(bundle)
    }
}

fn read_required<T: DeserializeOwned>(dir: &Path, file: &str, what: &str) -> Result<T> {
    let path = dir.join(file);
    let data = fs::read(&path).map_err(|err| {
        AppError::ArtifactUnavailable(format!("{} ({}): {}", what, path.display(), err))
    })?;

    serde_json::from_slice(&data).map_err(|err| {
        AppError::ArtifactUnavailable(format!("{} ({}) is malformed: {}", what, path.display(), err))
    })
}

fn read_optional<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<Option<T>> {
    let path = dir.join(file);
    let data = match fs::read(&path) {
        Ok(data) => data,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(AppError::ArtifactUnavailable(format!(
                "{}: {}",
                path.display(),
                err
            )))
        }
    };

    if data.iter().all(u8::is_ascii_whitespace) {
        warn!("Artifact file is empty: {}", path.display());
        return Ok(None);
    }

    serde_json::from_slice(&data).map(Some).map_err(|err| {
        AppError::ArtifactUnavailable(format!("{} is malformed: {}", path.display(), err))
    })
}
