// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Park catalog and Park Selector routes (public).

use crate::error::Result;
use crate::models::{MatchScore, Park};
use crate::services::SearchQuery;
use crate::AppState;
use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use validator::Validate;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/parks", get(list_parks))
        .route("/api/recommendations", post(recommend))
}

// ─── Catalog ─────────────────────────────────────────────────

/// The catalog only changes on redeploy.
async fn list_parks(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let parks: Vec<Park> = state.catalog.parks().to_vec();
    ([(header::CACHE_CONTROL, "public, max-age=300")], Json(parks))
}

// ─── Recommendations ─────────────────────────────────────────

#[derive(Deserialize, Validate)]
struct RecommendationRequest {
    #[validate(length(max = 500))]
    query: String,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RecommendationResponse {
    pub query: String,
    pub results: Vec<MatchScore>,
}

/// Rank parks against a free-text activity query.
async fn recommend(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RecommendationRequest>,
) -> Result<Json<RecommendationResponse>> {
    request.validate()?;
    let query = SearchQuery::parse(&request.query)?;

    // Purely cosmetic pause so the UI's "thinking" state is visible
    let delay = state.config.recommendation_delay_ms;
    if delay > 0 {
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }

    let results = state.matcher.score_parks(&state.catalog, &query);
    tracing::info!(
        query = %query.as_str(),
        top = results.first().map(|r| r.park_id.as_str()).unwrap_or(""),
        "Recommendations computed"
    );

    Ok(Json(RecommendationResponse {
        query: query.as_str().to_string(),
        results,
    }))
}
