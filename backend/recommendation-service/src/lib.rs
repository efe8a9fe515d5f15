pub mod artifacts;
pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

pub use artifacts::ArtifactBundle;
pub use config::Config;
pub use error::{AppError, Result};
pub use models::{Recommendation, RecommendationRequest, RecommendationResponse};
pub use services::{LinearFactorModel, RecommendationService, TruncatedSvdModel};
