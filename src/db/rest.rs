// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! REST client for the hosted backend (PostgREST conventions).
//!
//! Filters use the `column=eq.value` syntax, upserts rely on
//! `on_conflict` plus `Prefer: resolution=merge-duplicates`.

use crate::db::tables;
use crate::error::AppError;
use crate::models::{NewPoll, ParkReport, Poll, PollChoice, Profile, Vote};
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};

/// Hosted backend client.
#[derive(Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    // ─── Polls ───────────────────────────────────────────────────

    pub async fn list_polls(&self) -> Result<Vec<Poll>, AppError> {
        self.select(tables::POLLS, &[("order", "endtime.desc".to_string())])
            .await
    }

    pub async fn get_poll(&self, poll_id: &str) -> Result<Option<Poll>, AppError> {
        let rows: Vec<Poll> = self.select(tables::POLLS, &[eq("id", poll_id)]).await?;
        Ok(rows.into_iter().next())
    }

    pub async fn get_choices(&self, poll_id: &str) -> Result<Vec<PollChoice>, AppError> {
        self.select(tables::CHOICES, &[eq("poll_id", poll_id)]).await
    }

    /// Insert a poll and its choices, returning the stored poll.
    ///
    /// The two inserts are separate requests; if the choices fail the poll
    /// row is deleted again so no choiceless poll is left behind.
    pub async fn create_poll(&self, poll: &NewPoll, choices: &[String]) -> Result<Poll, AppError> {
        let rows: Vec<Poll> = self.insert(tables::POLLS, poll).await?;
        let created = rows
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Backend("Poll insert returned no row".to_string()))?;

        if !choices.is_empty() {
            let rows: Vec<PollChoice> = choices
                .iter()
                .map(|choice| PollChoice {
                    poll_id: created.id.clone(),
                    choice: choice.clone(),
                })
                .collect();
            let inserted: Result<Vec<PollChoice>, AppError> =
                self.insert(tables::CHOICES, &rows).await;

            if let Err(err) = inserted {
                tracing::warn!(
                    poll_id = %created.id,
                    error = %err,
                    "Choice insert failed, removing poll"
                );
                if let Err(cleanup) = self.delete_poll(&created.id).await {
                    tracing::error!(
                        poll_id = %created.id,
                        error = %cleanup,
                        "Failed to remove poll without choices"
                    );
                }
                return Err(err);
            }
        }

        Ok(created)
    }

    async fn delete_poll(&self, poll_id: &str) -> Result<(), AppError> {
        let response = self
            .request(Method::DELETE, tables::POLLS)
            .query(&[eq("id", poll_id)])
            .send()
            .await
            .map_err(|e| AppError::Backend(e.to_string()))?;

        check_response(response).await
    }

    // ─── Votes ───────────────────────────────────────────────────

    pub async fn get_votes(&self, poll_id: &str) -> Result<Vec<Vote>, AppError> {
        self.select(tables::VOTING, &[eq("poll_id", poll_id)]).await
    }

    /// Insert or replace the caller's vote for a poll.
    pub async fn upsert_vote(&self, vote: &Vote) -> Result<(), AppError> {
        let response = self
            .request(Method::POST, tables::VOTING)
            .query(&[("on_conflict", "user_id,poll_id")])
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(vote)
            .send()
            .await
            .map_err(|e| AppError::Backend(e.to_string()))?;

        check_response(response).await
    }

    // ─── Profiles & Reports ──────────────────────────────────────

    pub async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>, AppError> {
        let rows: Vec<Profile> = self.select(tables::PROFILES, &[eq("id", user_id)]).await?;
        Ok(rows.into_iter().next())
    }

    /// Most recent reports first.
    pub async fn list_reports(&self, limit: usize) -> Result<Vec<ParkReport>, AppError> {
        self.select(
            tables::REPORTS,
            &[
                ("order", "created_at.desc".to_string()),
                ("limit", limit.to_string()),
            ],
        )
        .await
    }

    pub async fn insert_report(&self, report: &ParkReport) -> Result<(), AppError> {
        let response = self
            .request(Method::POST, tables::REPORTS)
            .header("Prefer", "return=minimal")
            .json(report)
            .send()
            .await
            .map_err(|e| AppError::Backend(e.to_string()))?;

        check_response(response).await
    }

    // ─── Helpers ─────────────────────────────────────────────────

    fn request(&self, method: Method, table: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/rest/v1/{}", self.base_url, table);
        self.http
            .request(method, url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        filters: &[(&str, String)],
    ) -> Result<Vec<T>, AppError> {
        let response = self
            .request(Method::GET, table)
            .query(&[("select", "*")])
            .query(filters)
            .send()
            .await
            .map_err(|e| AppError::Backend(e.to_string()))?;

        check_response_json(response).await
    }

    async fn insert<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        table: &str,
        body: &B,
    ) -> Result<Vec<T>, AppError> {
        let response = self
            .request(Method::POST, table)
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::Backend(e.to_string()))?;

        check_response_json(response).await
    }
}

/// Equality filter in PostgREST syntax.
fn eq(column: &'static str, value: &str) -> (&'static str, String) {
    (column, format!("eq.{}", value))
}

/// Check response status and return error if not successful.
async fn check_response(response: reqwest::Response) -> Result<(), AppError> {
    if response.status().is_success() {
        return Ok(());
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(AppError::Backend(format!("HTTP {}: {}", status, body)))
}

/// Check response and parse JSON body.
async fn check_response_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, AppError> {
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::Backend(format!("HTTP {}: {}", status, body)));
    }

    response
        .json()
        .await
        .map_err(|e| AppError::Backend(format!("JSON parse error: {}", e)))
}
