// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Park catalog loading: parks, their scoring attributes and the event calendar.

use crate::models::{Park, ParkAttributes, ParkEvent};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const BUILTIN_PARKS: &str = include_str!("../../data/parks.json");

/// On-disk layout of the catalog file.
#[derive(Deserialize)]
struct CatalogFile {
    parks: Vec<Park>,
    #[serde(default)]
    attributes: HashMap<String, ParkAttributes>,
    #[serde(default)]
    events: Vec<ParkEvent>,
}

/// Static park reference data plus the scoring attributes for each park.
#[derive(Debug, Default, Clone)]
pub struct ParkCatalog {
    parks: Vec<Park>,
    attributes: HashMap<String, ParkAttributes>,
    events: Vec<ParkEvent>,
}

impl ParkCatalog {
    /// Load the catalog from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| CatalogError::IoError(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load the catalog from a JSON string.
    pub fn load_from_json(json_data: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            serde_json::from_str(json_data).map_err(|e| CatalogError::ParseError(e.to_string()))?;

        let mut seen = std::collections::HashSet::new();
        for park in &file.parks {
            if !seen.insert(park.id.as_str()) {
                return Err(CatalogError::DuplicatePark(park.id.clone()));
            }
        }

        let unscored = file
            .parks
            .iter()
            .filter(|p| !file.attributes.contains_key(&p.id))
            .count();
        if unscored > 0 {
            tracing::warn!(
                count = unscored,
                "Parks without attribute data will be left out of recommendations"
            );
        }

        let mut seen_events = std::collections::HashSet::new();
        for event in &file.events {
            if !seen_events.insert(event.id.as_str()) {
                return Err(CatalogError::DuplicateEvent(event.id.clone()));
            }
        }

        tracing::info!(
            parks = file.parks.len(),
            events = file.events.len(),
            "Loaded park catalog"
        );
        Ok(Self {
            parks: file.parks,
            attributes: file.attributes,
            events: file.events,
        })
    }

    /// The catalog bundled with the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::load_from_json(BUILTIN_PARKS)
    }

    /// All parks in catalog order.
    pub fn parks(&self) -> &[Park] {
        &self.parks
    }

    /// Find a park by id.
    pub fn find(&self, id: &str) -> Option<&Park> {
        self.parks.iter().find(|p| p.id == id)
    }

    /// Scoring attributes for a park, if the park has any.
    pub fn attributes(&self, park_id: &str) -> Option<&ParkAttributes> {
        self.attributes.get(park_id)
    }

    /// Calendar events in catalog order.
    pub fn events(&self) -> &[ParkEvent] {
        &self.events
    }

    /// Parks that have attribute data, paired with it.
    pub fn scored_parks(&self) -> impl Iterator<Item = (&Park, &ParkAttributes)> {
        self.parks
            .iter()
            .filter_map(|p| self.attributes.get(&p.id).map(|a| (p, a)))
    }
}

/// Errors from catalog loading.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse park catalog: {0}")]
    ParseError(String),

    #[error("Duplicate park id: {0}")]
    DuplicatePark(String),

    #[error("Duplicate event id: {0}")]
    DuplicateEvent(String),
}
