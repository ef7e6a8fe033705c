// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Park events shown on the community calendar.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A scheduled event at one of the parks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct ParkEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub date: NaiveDate,
    /// Display time, e.g. "7:00 AM"
    pub start_time: String,
    pub end_time: String,
    /// Free text, usually "<Park name>" or "<Park name> - <spot>"
    pub location: String,
    pub category: EventCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Sports,
    Community,
    Nature,
    Fitness,
    Family,
    Seasonal,
}

impl EventCategory {
    pub const ALL: [EventCategory; 6] = [
        EventCategory::Sports,
        EventCategory::Community,
        EventCategory::Nature,
        EventCategory::Fitness,
        EventCategory::Family,
        EventCategory::Seasonal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EventCategory::Sports => "sports",
            EventCategory::Community => "community",
            EventCategory::Nature => "nature",
            EventCategory::Fitness => "fitness",
            EventCategory::Family => "family",
            EventCategory::Seasonal => "seasonal",
        }
    }

    /// Parse a category name, ignoring case.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name.trim()))
    }
}
