use axum::{response::IntoResponse, routing::get, Json, Router};
use http::StatusCode;
use serde_json::json;
use std::{error::Error, sync::Arc, time::Duration};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, Level};
use tracing_subscriber::{
    filter::Targets, layer::SubscriberExt, util::SubscriberInitExt, Registry,
};
pub mod news;
pub use news::news_routes;

use crate::utils::{
    config::Config, gateway::SearchGateway, news_client::NewsApiClient, state::AppState,
};

/// Request spans and rejections are always traced; `level` governs this crate only.
fn log_filter(level: Level) -> Targets {
    Targets::new()
        .with_targets([
            ("tower_http::trace::on_request", Level::TRACE),
            ("tower_http::trace::on_response", Level::TRACE),
            ("tower_http::trace::make_span", Level::DEBUG),
            ("axum::rejection", Level::TRACE),
        ])
        .with_target(env!("CARGO_CRATE_NAME"), level)
        .with_default(Level::INFO)
}

pub fn init_tracing(level: Level) {
    Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(log_filter(level))
        .init();
}

pub fn make_app(config: &Config) -> Result<Router, Box<dyn Error>> {
    info!("Initializing application...");
    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.news_api_timeout_secs))
        .build()?;
    let provider = NewsApiClient::new(
        http_client,
        config.news_api_base_url.clone(),
        config.news_api_key.clone(),
    );
    info!("News provider client initialized for {}", config.news_api_base_url);

    let state = Arc::new(AppState {
        gateway: SearchGateway::new(Arc::new(provider)),
    });

    let app = app_router(state);
    info!("Application initialized successfully");

    Ok(app)
}

pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health_check))
        .nest("/api/news", news_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"message": "ok"}))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_level_follows_config() {
        let filter = log_filter(Level::WARN);
        assert!(filter.would_enable(env!("CARGO_CRATE_NAME"), &Level::WARN));
        assert!(!filter.would_enable(env!("CARGO_CRATE_NAME"), &Level::INFO));
        assert!(filter.would_enable("tower_http::trace::on_response", &Level::TRACE));
        assert!(!filter.would_enable("hyper", &Level::DEBUG));
    }
}
