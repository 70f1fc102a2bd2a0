use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{
    handlers::news::{
        get_categories, get_countries, get_everything, get_languages, get_sources,
        get_top_headlines,
    },
    utils::state::AppState,
};

pub fn news_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/top-headlines", get(get_top_headlines))
        .route("/everything", get(get_everything))
        .route("/sources", get(get_sources))
        .route("/countries", get(get_countries))
        .route("/languages", get(get_languages))
        .route("/categories", get(get_categories))
}
