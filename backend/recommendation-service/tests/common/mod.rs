//! On-disk model fixture shared by the integration tests
//!
//! catalog      [101, 102, 103, 104]
//! user index   {5: 0, 7: 1, 9: 2}
//! components   [[1, 1, 1, 0],
//!               [0, 0, 1, 1]]
//! interactions u5 [5, -, 3, -]  → latent [8, 3] → predicted [8, 8, 11, 3]
//!              u7 [-, 4, -, 2]  → latent [4, 2] → predicted [4, 4, 6, 2]
//!              u9 [1, -, -, -]  → latent [1, 0] → predicted [1, 1, 1, 0]
//! mean latent  [13/3, 5/3]      → predicted [13/3, 13/3, 6, 5/3]
#![allow(dead_code)]

use std::cmp::Ordering;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use recommendation_service::artifacts::{
    FACTOR_MODEL_FILE, INTERACTION_MATRIX_FILE, ITEM_CATALOG_FILE, USER_INDEX_FILE,
};
use recommendation_service::models::Recommendation;

pub const KNOWN_USERS: [i64; 3] = [5, 7, 9];

pub fn rated_items(user_id: i64) -> Vec<i64> {
    match user_id {
        5 => vec![101, 103],
        7 => vec![102, 104],
        9 => vec![101],
        _ => vec![],
    }
}

/// Highest rating first, equal ratings by ascending item id
pub fn is_ranked(ranked: &[Recommendation]) -> bool {
    ranked.windows(2).all(|pair| {
        match pair[0].predicted_rating.total_cmp(&pair[1].predicted_rating) {
            Ordering::Greater => true,
            Ordering::Equal => pair[0].product_id < pair[1].product_id,
            Ordering::Less => false,
        }
    })
}

pub fn model_dir(with_interactions: bool) -> TempDir {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    write_artifacts(tmp.path(), with_interactions);
    tmp
}

pub fn write_artifacts(dir: &Path, with_interactions: bool) {
    fs::write(dir.join(ITEM_CATALOG_FILE), "[101, 102, 103, 104]").unwrap();
    fs::write(dir.join(USER_INDEX_FILE), r#"{"5": 0, "7": 1, "9": 2}"#).unwrap();
    fs::write(
        dir.join(FACTOR_MODEL_FILE),
        r#"{"kind": "truncated_svd", "components": [[1.0, 1.0, 1.0, 0.0], [0.0, 0.0, 1.0, 1.0]]}"#,
    )
    .unwrap();

    if with_interactions {
        fs::write(
            dir.join(INTERACTION_MATRIX_FILE),
            r#"{"rows": [[5.0, null, 3.0, null], [null, 4.0, 0.0, 2.0], [1.0, 0.0, null, 0.0]]}"#,
        )
        .unwrap();
    }
}
