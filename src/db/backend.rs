// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Backend handle used by services.
//!
//! Dispatches to the hosted REST backend in production or to the in-memory
//! store when no backend URL is configured.

use crate::db::memory::MemoryStore;
use crate::db::rest::RestClient;
use crate::error::AppError;
use crate::models::{NewPoll, ParkReport, Poll, PollChoice, Profile, Vote};
use std::sync::Arc;

/// Backend database client.
#[derive(Clone)]
pub struct BackendDb {
    inner: Backend,
}

#[derive(Clone)]
enum Backend {
    Rest(RestClient),
    Memory(Arc<MemoryStore>),
}

impl BackendDb {
    /// Connect to the hosted backend's REST interface.
    pub fn new(base_url: &str, api_key: &str) -> Self {
        tracing::info!(url = base_url, "Using hosted backend");
        Self {
            inner: Backend::Rest(RestClient::new(base_url, api_key)),
        }
    }

    /// Create an in-memory backend (local development and tests).
    pub fn new_in_memory() -> Self {
        Self {
            inner: Backend::Memory(Arc::new(MemoryStore::new())),
        }
    }

    /// Direct access to the in-memory store, if that is what backs this handle.
    pub fn memory(&self) -> Option<&MemoryStore> {
        match &self.inner {
            Backend::Memory(store) => Some(store.as_ref()),
            Backend::Rest(_) => None,
        }
    }

    // ─── Poll Operations ─────────────────────────────────────────

    pub async fn list_polls(&self) -> Result<Vec<Poll>, AppError> {
        match &self.inner {
            Backend::Rest(client) => client.list_polls().await,
            Backend::Memory(store) => Ok(store.list_polls()),
        }
    }

    pub async fn get_poll(&self, poll_id: &str) -> Result<Option<Poll>, AppError> {
        match &self.inner {
            Backend::Rest(client) => client.get_poll(poll_id).await,
            Backend::Memory(store) => Ok(store.get_poll(poll_id)),
        }
    }

    pub async fn get_choices(&self, poll_id: &str) -> Result<Vec<PollChoice>, AppError> {
        match &self.inner {
            Backend::Rest(client) => client.get_choices(poll_id).await,
            Backend::Memory(store) => Ok(store.get_choices(poll_id)),
        }
    }

    pub async fn create_poll(&self, poll: &NewPoll, choices: &[String]) -> Result<Poll, AppError> {
        match &self.inner {
            Backend::Rest(client) => client.create_poll(poll, choices).await,
            Backend::Memory(store) => Ok(store.create_poll(poll, choices)),
        }
    }

    // ─── Vote Operations ─────────────────────────────────────────

    pub async fn get_votes(&self, poll_id: &str) -> Result<Vec<Vote>, AppError> {
        match &self.inner {
            Backend::Rest(client) => client.get_votes(poll_id).await,
            Backend::Memory(store) => Ok(store.get_votes(poll_id)),
        }
    }

    /// Insert or replace a vote; at most one vote exists per (user, poll).
    pub async fn upsert_vote(&self, vote: &Vote) -> Result<(), AppError> {
        match &self.inner {
            Backend::Rest(client) => client.upsert_vote(vote).await,
            Backend::Memory(store) => {
                store.upsert_vote(vote);
                Ok(())
            }
        }
    }

    // ─── Profile & Report Operations ─────────────────────────────

    pub async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>, AppError> {
        match &self.inner {
            Backend::Rest(client) => client.get_profile(user_id).await,
            Backend::Memory(store) => Ok(store.get_profile(user_id)),
        }
    }

    /// Most recent reports first, at most `limit`.
    pub async fn list_reports(&self, limit: usize) -> Result<Vec<ParkReport>, AppError> {
        match &self.inner {
            Backend::Rest(client) => client.list_reports(limit).await,
            Backend::Memory(store) => Ok(store.reports().into_iter().take(limit).collect()),
        }
    }

    pub async fn insert_report(&self, report: &ParkReport) -> Result<(), AppError> {
        match &self.inner {
            Backend::Rest(client) => client.insert_report(report).await,
            Backend::Memory(store) => {
                store.insert_report(report);
                Ok(())
            }
        }
    }
}
