use std::sync::Arc;

use crate::{
    models::{
        error::NewsError,
        news::{PagedResult, SourcesResult},
    },
    utils::{
        catalog::{countries, languages, CATEGORIES},
        formatter::{format_articles, format_sources},
        query_builder::{
            build_everything, build_headlines, build_sources, EverythingParams, HeadlinesParams,
            SourcesParams,
        },
        state::AppState,
    },
};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::IntoResponse,
    Json,
};
use http::StatusCode;
use serde_json::json;
use tracing::{debug, error};

pub async fn get_top_headlines(
    State(state): State<Arc<AppState>>,
    params: Result<Query<HeadlinesParams>, QueryRejection>,
) -> Result<Json<PagedResult>, NewsError> {
    let Query(params) = params.inspect_err(|e| debug!("Unreadable headlines query: {e}"))?;
    let query = build_headlines(params).inspect_err(|e| debug!("Rejected headlines query: {e}"))?;

    let page = state
        .gateway
        .top_headlines(&query)
        .await
        .inspect_err(|e| error!("Top Headlines Error: {e}"))?;

    Ok(Json(format_articles(page, query)))
}

pub async fn get_everything(
    State(state): State<Arc<AppState>>,
    params: Result<Query<EverythingParams>, QueryRejection>,
) -> Result<Json<PagedResult>, NewsError> {
    let Query(params) = params.inspect_err(|e| debug!("Unreadable search query: {e}"))?;
    let query = build_everything(params).inspect_err(|e| debug!("Rejected search query: {e}"))?;

    let page = state
        .gateway
        .everything(&query)
        .await
        .inspect_err(|e| error!("Everything Error: {e}"))?;

    Ok(Json(format_articles(page, query)))
}

pub async fn get_sources(
    State(state): State<Arc<AppState>>,
    params: Result<Query<SourcesParams>, QueryRejection>,
) -> Result<Json<SourcesResult>, NewsError> {
    let Query(params) = params.inspect_err(|e| debug!("Unreadable sources query: {e}"))?;
    let query = build_sources(params).inspect_err(|e| debug!("Rejected sources query: {e}"))?;

    let sources = state
        .gateway
        .sources(&query)
        .await
        .inspect_err(|e| error!("Sources Error: {e}"))?;

    Ok(Json(format_sources(sources, query)))
}

pub async fn get_countries() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "countries": countries() })))
}

pub async fn get_languages() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "languages": languages() })))
}

pub async fn get_categories() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "categories": CATEGORIES })))
}
