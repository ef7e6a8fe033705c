// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Liberty Parks: park recommendations, community polls and issue reports
//!
//! This crate provides the backend API for the Liberty Township parks site:
//! it ranks parks against free-text activity queries, serves community polls
//! with their derived status, and accepts issue reports from residents.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::BackendDb;
use services::{ParkCatalog, PollService, QueryMatcher, ReportService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: BackendDb,
    pub catalog: ParkCatalog,
    pub matcher: QueryMatcher,
    pub polls: PollService,
    pub reports: ReportService,
}

impl AppState {
    /// Wire services around a backend handle.
    pub fn new(config: Config, db: BackendDb, catalog: ParkCatalog) -> Self {
        Self {
            polls: PollService::new(db.clone()),
            reports: ReportService::new(db.clone()),
            matcher: QueryMatcher::default(),
            config,
            db,
            catalog,
        }
    }
}
