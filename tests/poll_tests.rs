// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Community voting endpoint tests.

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::json;
use tower::ServiceExt;

mod common;

fn count(poll: &serde_json::Value, option: &str) -> u64 {
    poll["votes"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["option"] == option)
        .and_then(|c| c["votes"].as_u64())
        .unwrap()
}

#[tokio::test]
async fn test_list_polls_with_status() {
    let (app, state) = common::create_test_app();
    common::seed(&state);

    let response = app.oneshot(common::get("/api/polls")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    let polls = body.as_array().unwrap();
    assert_eq!(polls.len(), 3);

    assert_eq!(polls[0]["id"], "1");
    assert_eq!(polls[0]["type"], "yes_no");
    assert_eq!(polls[0]["status"], "in_progress");
    assert_eq!(polls[0]["status_label"], "In Progress");
    assert_eq!(polls[0]["status_color"], "blue");

    assert_eq!(polls[1]["choices"], json!(["Basketball", "Pickleball", "Tennis"]));

    assert_eq!(polls[2]["status"], "under_decision");
    assert!(polls[2]["endtime"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_get_unknown_poll() {
    let (app, state) = common::create_test_app();
    common::seed(&state);

    let response = app.oneshot(common::get("/api/polls/404")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_vote_requires_auth() {
    let (app, state) = common::create_test_app();
    common::seed(&state);

    let response = app
        .oneshot(common::post_json(
            "/api/polls/1/vote",
            json!({ "option": "yes" }),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(state.db.get_votes("1").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_revote_moves_vote() {
    let (app, state) = common::create_test_app();
    common::seed(&state);
    let token = common::create_test_jwt("resident-42", &state.config.jwt_secret);

    let response = app
        .clone()
        .oneshot(common::post_json(
            "/api/polls/2/vote",
            json!({ "option": "Pickleball" }),
            Some(&token),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let poll = common::body_json(response).await;
    assert_eq!(count(&poll, "Pickleball"), 1);

    let response = app
        .clone()
        .oneshot(common::post_json(
            "/api/polls/2/vote",
            json!({ "option": "Tennis" }),
            Some(&token),
        ))
        .await
        .unwrap();
    let poll = common::body_json(response).await;
    assert_eq!(poll["total_votes"], 1);
    assert_eq!(count(&poll, "Pickleball"), 0);
    assert_eq!(count(&poll, "Tennis"), 1);

    // The stored state agrees with what was returned
    let votes = state.db.get_votes("2").await.unwrap();
    assert_eq!(votes.len(), 1);
    assert_eq!(votes[0].vote_option.as_deref(), Some("Tennis"));

    let response = app.oneshot(common::get("/api/polls/2")).await.unwrap();
    let poll = common::body_json(response).await;
    assert_eq!(count(&poll, "Tennis"), 1);
}

#[tokio::test]
async fn test_vote_via_session_cookie() {
    let (app, state) = common::create_test_app();
    common::seed(&state);
    let token = common::create_test_jwt("resident-7", &state.config.jwt_secret);

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/polls/1/vote")
        .header("Content-Type", "application/json")
        .header("Cookie", format!("sb-access-token={}", token))
        .body(axum::body::Body::from(json!({ "option": "no" }).to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let poll = common::body_json(response).await;
    assert_eq!(count(&poll, "no"), 1);
    assert_eq!(poll["yes_percentage"], 0);
}

#[tokio::test]
async fn test_vote_rejections() {
    let (app, state) = common::create_test_app();
    common::seed(&state);
    let token = common::create_test_jwt("resident-42", &state.config.jwt_secret);

    let cases = [
        ("/api/polls/1/vote", "maybe", StatusCode::BAD_REQUEST),
        ("/api/polls/2/vote", "Curling", StatusCode::BAD_REQUEST),
        ("/api/polls/3/vote", "yes", StatusCode::BAD_REQUEST),
        ("/api/polls/9/vote", "yes", StatusCode::NOT_FOUND),
    ];
    for (uri, option, status) in cases {
        let response = app
            .clone()
            .oneshot(common::post_json(
                uri,
                json!({ "option": option }),
                Some(&token),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), status, "{uri} {option}");
    }

    for id in ["1", "2", "3"] {
        assert!(state.db.get_votes(id).await.unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_create_poll_admin_only() {
    let (app, state) = common::create_test_app();
    common::seed(&state);
    let body = json!({
        "title": "Splash pad",
        "description": "Add a splash pad at Liberty Park",
        "category": "amenity",
        "tier": "medium",
        "type": "yes_no",
        "endtime": (Utc::now() + Duration::days(30)).to_rfc3339(),
    });

    let resident = common::create_test_jwt("resident-42", &state.config.jwt_secret);
    let response = app
        .clone()
        .oneshot(common::post_json("/api/polls", body.clone(), Some(&resident)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let admin = common::create_test_jwt(common::ADMIN_ID, &state.config.jwt_secret);
    let response = app
        .oneshot(common::post_json("/api/polls", body, Some(&admin)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let poll = common::body_json(response).await;
    assert_eq!(poll["title"], "Splash pad");
    assert_eq!(poll["status"], "in_progress");
    assert_eq!(poll["total_votes"], 0);
    assert_eq!(state.db.list_polls().await.unwrap().len(), 4);
}

#[tokio::test]
async fn test_create_poll_validation() {
    let (app, state) = common::create_test_app();
    common::seed(&state);
    let admin = common::create_test_jwt(common::ADMIN_ID, &state.config.jwt_secret);

    let in_past = json!({
        "title": "Fireworks",
        "description": "Fourth of July show",
        "category": "event",
        "tier": "big",
        "type": "yes_no",
        "endtime": (Utc::now() - Duration::hours(1)).to_rfc3339(),
    });
    let single_choice = json!({
        "title": "Fireworks",
        "description": "Pick a night",
        "category": "event",
        "tier": "big",
        "type": "multiple_choice",
        "endtime": (Utc::now() + Duration::days(5)).to_rfc3339(),
        "choices": ["July 3"],
    });
    let empty_title = json!({
        "title": "",
        "description": "Pick a night",
        "category": "event",
        "tier": "big",
        "type": "yes_no",
        "endtime": (Utc::now() + Duration::days(5)).to_rfc3339(),
    });

    for body in [in_past, single_choice, empty_title] {
        let response = app
            .clone()
            .oneshot(common::post_json("/api/polls", body, Some(&admin)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
    assert_eq!(state.db.list_polls().await.unwrap().len(), 3);
}
