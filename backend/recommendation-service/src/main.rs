use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use recommendation_service::handlers::{configure, RecommendationHandlerState};
use recommendation_service::{ArtifactBundle, Config, RecommendationService};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,actix_web=info".into());
    if config.json_logs() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!(
        "Starting recommendation-service v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Artifacts are loaded once and shared read-only by every worker
    let bundle = ArtifactBundle::load(&config.model_dir).with_context(|| {
        format!(
            "Failed to load model artifacts from {}",
            config.model_dir.display()
        )
    })?;
    let service = Arc::new(RecommendationService::new(Arc::new(bundle)));

    let state = web::Data::new(RecommendationHandlerState {
        service,
        default_top_n: config.default_top_n,
        default_min_rating: config.default_min_rating,
        max_top_n: config.max_top_n,
    });

    let bind_address = config.bind_address();
    tracing::info!("HTTP server listening on {}", bind_address);

    HttpServer::new(move || App::new().app_data(state.clone()).configure(configure))
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await
        .context("HTTP server error")?;

    Ok(())
}
