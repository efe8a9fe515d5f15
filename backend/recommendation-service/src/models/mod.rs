use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

pub type UserId = i64;
pub type ItemId = i64;

pub const DEFAULT_TOP_N: usize = 10;
pub const DEFAULT_MIN_RATING: f64 = 4.0;

/// A validated scoring request
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationRequest {
    pub user_id: UserId,
    pub top_n: usize,
    pub min_rating: f64,
}

impl RecommendationRequest {
    /// `top_n` must be non-negative and `min_rating` must be a number.
    pub fn new(user_id: UserId, top_n: i64, min_rating: f64) -> Result<Self> {
        let top_n = usize::try_from(top_n).map_err(|_| {
            AppError::InputValidation(format!("top_n must be non-negative, got {}", top_n))
        })?;

        if min_rating.is_nan() {
            return Err(AppError::InputValidation(
                "min_rating must be a number, got NaN".to_string(),
            ));
        }

        Ok(Self {
            user_id,
            top_n,
            min_rating,
        })
    }
}

/// One recommended item with its predicted rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub product_id: ItemId,
    pub predicted_rating: f64,
}

/// Response for a single scoring request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub user_id: UserId,
    pub recommendations: Vec<Recommendation>,
    pub count: usize,
}

impl RecommendationResponse {
    pub fn new(user_id: UserId, recommendations: Vec<Recommendation>) -> Self {
        let count = recommendations.len();
        Self {
            user_id,
            recommendations,
            count,
        }
    }
}
