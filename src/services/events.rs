// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Event calendar filtering.

use crate::error::AppError;
use crate::models::{EventCategory, ParkEvent};
use crate::services::catalog::ParkCatalog;
use chrono::NaiveDate;

/// Calendar filters; `None` means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub category: Option<EventCategory>,
    pub date: Option<NaiveDate>,
    /// Park id; events match when their location names the park
    pub park_id: Option<String>,
}

impl EventFilter {
    /// Build a filter from raw query parameters. Blank values and `all`
    /// leave that dimension unfiltered.
    pub fn from_params(
        category: Option<&str>,
        date: Option<&str>,
        park: Option<&str>,
    ) -> Result<Self, AppError> {
        let category = selected(category)
            .map(|raw| {
                EventCategory::parse(raw)
                    .ok_or_else(|| AppError::BadRequest(format!("Unknown event category: {}", raw)))
            })
            .transpose()?;
        let date = selected(date)
            .map(|raw| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
                    AppError::BadRequest("Invalid 'date' parameter: expected YYYY-MM-DD".to_string())
                })
            })
            .transpose()?;

        Ok(Self {
            category,
            date,
            park_id: selected(park).map(str::to_string),
        })
    }
}

fn selected(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
}

/// Events matching every filter, ordered by date (catalog order within a day).
pub fn list_events(catalog: &ParkCatalog, filter: &EventFilter) -> Result<Vec<ParkEvent>, AppError> {
    let park_name = filter
        .park_id
        .as_deref()
        .map(|id| {
            catalog
                .find(id)
                .map(|park| park.name.to_lowercase())
                .ok_or_else(|| AppError::BadRequest(format!("Unknown park: {}", id)))
        })
        .transpose()?;

    let mut events: Vec<ParkEvent> = catalog
        .events()
        .iter()
        .filter(|e| filter.category.map_or(true, |c| e.category == c))
        .filter(|e| filter.date.map_or(true, |d| e.date == d))
        .filter(|e| {
            park_name
                .as_deref()
                .map_or(true, |name| e.location.to_lowercase().contains(name))
        })
        .cloned()
        .collect();

    events.sort_by_key(|e| e.date);
    Ok(events)
}
