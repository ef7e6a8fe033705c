// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod catalog;
pub mod events;
pub mod keywords;
pub mod matcher;
pub mod poll_status;
pub mod polls;
pub mod reports;

pub use catalog::{CatalogError, ParkCatalog};
pub use events::{list_events, EventFilter};
pub use matcher::{QueryError, QueryMatcher, SearchQuery};
pub use poll_status::{resolve_status, PollStatus};
pub use polls::{PollService, PollView};
pub use reports::{ReportDraft, ReportService};
