// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use chrono::{Duration, Utc};
use liberty_parks::config::Config;
use liberty_parks::db::BackendDb;
use liberty_parks::middleware::auth::create_jwt;
use liberty_parks::models::{Poll, PollCategory, PollChoice, PollTier, PollType, Profile, Role};
use liberty_parks::routes::create_router;
use liberty_parks::services::ParkCatalog;
use liberty_parks::AppState;
use std::sync::Arc;

pub const ADMIN_ID: &str = "admin-0001";

/// Create a test app backed by the in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let db = BackendDb::new_in_memory();
    let catalog = ParkCatalog::builtin().expect("bundled catalog");

    let state = Arc::new(AppState::new(config, db, catalog));
    (create_router(state.clone()), state)
}

/// Seed an admin profile plus an open yes/no poll ("1"), an open
/// multiple-choice poll ("2") and a closed yes/no poll ("3").
#[allow(dead_code)]
pub fn seed(state: &AppState) {
    let store = state.db.memory().expect("in-memory backend");
    let now = Utc::now();

    store.set_profile(Profile {
        id: ADMIN_ID.to_string(),
        role: Role::Admin,
    });
    store.insert_poll(
        poll("1", PollType::YesNo, now + Duration::days(7)),
        Vec::new(),
    );
    store.insert_poll(
        poll("2", PollType::MultipleChoice, now + Duration::days(3)),
        ["Basketball", "Pickleball", "Tennis"]
            .iter()
            .map(|c| PollChoice {
                poll_id: "2".to_string(),
                choice: c.to_string(),
            })
            .collect(),
    );
    store.insert_poll(
        poll("3", PollType::YesNo, now - Duration::days(1)),
        Vec::new(),
    );
}

fn poll(id: &str, poll_type: PollType, endtime: chrono::DateTime<Utc>) -> Poll {
    Poll {
        id: id.to_string(),
        title: format!("Poll {}", id),
        description: "Community question".to_string(),
        category: PollCategory::Amenity,
        tier: PollTier::Small,
        poll_type,
        endtime,
        approved: None,
    }
}

#[allow(dead_code)]
pub fn create_test_jwt(user_id: &str, secret: &[u8]) -> String {
    create_jwt(user_id, secret).expect("Failed to create JWT")
}

/// JSON POST, optionally with a bearer token.
#[allow(dead_code)]
pub fn post_json(uri: &str, body: serde_json::Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

#[allow(dead_code)]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[allow(dead_code)]
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
