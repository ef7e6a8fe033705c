// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Park recommendation results.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// How well a park matches a free-text query. Computed per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct MatchScore {
    pub park_id: String,
    pub park_name: String,
    /// Match percentage, 0-100
    pub score: u8,
    /// e.g. "Good for run and dog"
    pub match_reason: String,
    /// Activities that contributed meaningfully to this park's score
    pub matched_features: Vec<String>,
}
