// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Event calendar route (public).

use crate::error::Result;
use crate::models::ParkEvent;
use crate::services::events::{list_events, EventFilter};
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/events", get(get_events))
}

#[derive(Deserialize)]
struct EventsQuery {
    /// Event category, or "all"
    category: Option<String>,
    /// Day (YYYY-MM-DD)
    date: Option<String>,
    /// Park id, or "all"
    park: Option<String>,
}

async fn get_events(
    State(state): State<Arc<AppState>>,
    Query(params): Query<EventsQuery>,
) -> Result<Json<Vec<ParkEvent>>> {
    let filter = EventFilter::from_params(
        params.category.as_deref(),
        params.date.as_deref(),
        params.park.as_deref(),
    )?;
    Ok(Json(list_events(&state.catalog, &filter)?))
}
