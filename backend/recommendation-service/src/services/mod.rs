//! Recommendation scoring pipeline
//!
//! request → cold-start resolution → scoring → exclusion/threshold → ranking → response
//!
//! Every stage is a pure function over the shared, read-only [`ArtifactBundle`];
//! per-request vectors and candidate lists are owned by the request.

pub mod cold_start;
pub mod factor_model;
pub mod filter;
pub mod ranker;
pub mod scoring;

pub use cold_start::{ResolutionPath, ResolvedUser, UserVector};
pub use factor_model::{LinearFactorModel, TruncatedSvdModel};

use std::sync::Arc;
use tracing::info;

use crate::artifacts::{ArtifactBundle, BundleSummary};
use crate::error::Result;
use crate::models::{RecommendationRequest, RecommendationResponse};

#[derive(Debug, Clone)]
pub struct RecommendationService {
    bundle: Arc<ArtifactBundle>,
}

impl RecommendationService {
    pub fn new(bundle: Arc<ArtifactBundle>) -> Self {
        Self { bundle }
    }

    pub fn bundle(&self) -> &ArtifactBundle {
        &self.bundle
    }

    pub fn model_info(&self) -> BundleSummary {
        self.bundle.summary()
    }

    pub fn recommend(&self, request: &RecommendationRequest) -> Result<RecommendationResponse> {
        let bundle = self.bundle.as_ref();

        let resolved = cold_start::resolve(request.user_id, bundle)?;
        let predictions = scoring::predict(bundle.model(), &resolved.input)?;
        let candidates = filter::select_candidates(
            &predictions,
            bundle.catalog(),
            &resolved.rated_items,
            request.min_rating,
        )?;
        let candidate_count = candidates.len();
        let ranked = ranker::rank(candidates, request.top_n);

        info!(
            user_id = request.user_id,
            path = resolved.path.as_str(),
            top_n = request.top_n,
            min_rating = request.min_rating,
            candidates = candidate_count,
            returned = ranked.len(),
            "Recommendations generated"
        );

        Ok(RecommendationResponse::new(request.user_id, ranked))
    }
}
