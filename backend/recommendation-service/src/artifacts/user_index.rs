use std::collections::HashMap;

use crate::error::{AppError, Result};
use crate::models::UserId;

/// Maps a known user to its row in the training interaction table.
///
/// Rows are contiguous: with `n` users every index in `0..n` is used exactly once.
#[derive(Debug, Clone, Default)]
pub struct UserIndex {
    rows: HashMap<UserId, usize>,
}

impl UserIndex {
    pub fn new(rows: HashMap<UserId, usize>) -> Result<Self> {
        let n = rows.len();
        let mut seen = vec![false; n];

        for (&user_id, &row) in &rows {
            if row >= n {
                return Err(AppError::ArtifactUnavailable(format!(
                    "user index maps user {} to row {}, but only {} users are indexed",
                    user_id, row, n
                )));
            }
            if seen[row] {
                return Err(AppError::ArtifactUnavailable(format!(
                    "user index assigns row {} to more than one user",
                    row
                )));
            }
            seen[row] = true;
        }

        Ok(Self { rows })
    }

    pub fn row_of(&self, user_id: UserId) -> Option<usize> {
        self.rows.get(&user_id).copied()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
