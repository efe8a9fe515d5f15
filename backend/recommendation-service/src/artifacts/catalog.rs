use std::collections::HashMap;

use crate::error::{AppError, Result};
use crate::models::ItemId;

/// Ordered item identifiers; position is the column index used for scoring.
#[derive(Debug, Clone)]
pub struct ItemCatalog {
    items: Vec<ItemId>,
}

impl ItemCatalog {
    pub fn new(items: Vec<ItemId>) -> Result<Self> {
        let mut positions = HashMap::with_capacity(items.len());
        for (index, &item_id) in items.iter().enumerate() {
            if let Some(previous) = positions.insert(item_id, index) {
                return Err(AppError::ArtifactUnavailable(format!(
                    "item catalog lists item {} twice (columns {} and {})",
                    item_id, previous, index
                )));
            }
        }
        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item_at(&self, index: usize) -> Option<ItemId> {
        self.items.get(index).copied()
    }

    pub fn items(&self) -> &[ItemId] {
        &self.items
    }
}
