// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Issue report routes (public; email is optional and never listed).

use crate::error::Result;
use crate::models::ParkReport;
use crate::services::ReportDraft;
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/reports", post(submit_report).get(recent_reports))
}

#[derive(Deserialize)]
struct RecentQuery {
    #[serde(default = "default_limit")]
    limit: usize,
}

fn default_limit() -> usize {
    20
}

/// Recent reports, newest first.
async fn recent_reports(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RecentQuery>,
) -> Result<Json<Vec<ParkReport>>> {
    Ok(Json(state.reports.recent(query.limit).await?))
}

async fn submit_report(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<ReportDraft>,
) -> Result<(StatusCode, Json<ParkReport>)> {
    let report = state
        .reports
        .submit(&state.catalog, draft, Utc::now())
        .await?;
    Ok((StatusCode::CREATED, Json(report)))
}
