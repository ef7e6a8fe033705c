// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Community voting routes.

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::{NewPoll, PollCategory, PollTier, PollType};
use crate::services::PollView;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

/// Poll routes readable without signing in.
pub fn public_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/polls", get(list_polls))
        .route("/api/polls/{id}", get(get_poll))
}

/// Poll routes that need a session.
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/polls", post(create_poll))
        .route("/api/polls/{id}/vote", post(cast_vote))
}

// ─── Reading ─────────────────────────────────────────────────

async fn list_polls(State(state): State<Arc<AppState>>) -> Result<Json<Vec<PollView>>> {
    Ok(Json(state.polls.list(Utc::now()).await?))
}

async fn get_poll(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<PollView>> {
    Ok(Json(state.polls.get(&id, Utc::now()).await?))
}

// ─── Voting ──────────────────────────────────────────────────

#[derive(Deserialize, Validate)]
struct VoteRequest {
    /// `yes`/`no` or the text of a choice
    #[validate(length(min = 1, max = 200))]
    option: String,
}

async fn cast_vote(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(request): Json<VoteRequest>,
) -> Result<Json<PollView>> {
    request.validate()?;
    let view = state
        .polls
        .cast_vote(&user.user_id, &id, &request.option, Utc::now())
        .await?;
    Ok(Json(view))
}

// ─── Administration ──────────────────────────────────────────

#[derive(Deserialize, Validate)]
struct CreatePollRequest {
    #[validate(length(min = 1, max = 200))]
    title: String,
    #[validate(length(min = 1, max = 2000))]
    description: String,
    category: PollCategory,
    tier: PollTier,
    #[serde(rename = "type")]
    poll_type: PollType,
    endtime: DateTime<Utc>,
    #[serde(default)]
    #[validate(length(max = 20))]
    choices: Vec<String>,
}

async fn create_poll(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<CreatePollRequest>,
) -> Result<(StatusCode, Json<PollView>)> {
    request.validate()?;
    let draft = NewPoll {
        title: request.title.trim().to_string(),
        description: request.description.trim().to_string(),
        category: request.category,
        tier: request.tier,
        poll_type: request.poll_type,
        endtime: request.endtime,
    };

    let view = state
        .polls
        .create_poll(&user.user_id, draft, request.choices, Utc::now())
        .await?;
    Ok((StatusCode::CREATED, Json(view)))
}
