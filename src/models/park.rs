// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Park reference data and per-park scoring attributes.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A township park as shown on the site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Park {
    /// Stable identifier (e.g., "big-bear")
    pub id: String,
    /// Display name (e.g., "Big Bear Park")
    pub name: String,
    pub description: String,
    pub address: String,
    pub amenities: Vec<Amenity>,
}

impl Park {
    /// Number of distinct amenity types offered by this park.
    pub fn amenity_type_count(&self) -> usize {
        let mut kinds: Vec<&str> = self.amenities.iter().map(|a| a.kind.as_str()).collect();
        kinds.sort_unstable();
        kinds.dedup();
        kinds.len()
    }
}

/// A single amenity within a park.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Amenity {
    /// Amenity type tag ("trail", "playground", "picnic", ...)
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
}

/// Scoring dimensions for a park.
///
/// Values are nominally 0-5, but later data revisions may go up to 7.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkAttributes {
    #[serde(default)]
    pub running_trails: u8,
    #[serde(default)]
    pub dog_friendly: u8,
    #[serde(default)]
    pub picnic_facilities: u8,
    #[serde(default)]
    pub playground: u8,
    #[serde(default)]
    pub sports_fields: u8,
    #[serde(default)]
    pub nature_sensitivity: u8,
    #[serde(default)]
    pub water_access: u8,
    #[serde(default)]
    pub parking: u8,
    #[serde(default)]
    pub accessibility: u8,
    #[serde(default)]
    pub biking_trails: u8,
    #[serde(default)]
    pub open_space: u8,
    #[serde(default)]
    pub shelters: u8,
}

impl ParkAttributes {
    /// Look up the value of a single attribute.
    pub fn get(&self, attribute: Attribute) -> u8 {
        match attribute {
            Attribute::RunningTrails => self.running_trails,
            Attribute::DogFriendly => self.dog_friendly,
            Attribute::PicnicFacilities => self.picnic_facilities,
            Attribute::Playground => self.playground,
            Attribute::SportsFields => self.sports_fields,
            Attribute::NatureSensitivity => self.nature_sensitivity,
            Attribute::WaterAccess => self.water_access,
            Attribute::Parking => self.parking,
            Attribute::Accessibility => self.accessibility,
            Attribute::BikingTrails => self.biking_trails,
            Attribute::OpenSpace => self.open_space,
            Attribute::Shelters => self.shelters,
        }
    }
}

/// Named attribute dimension referenced by keyword weight tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    RunningTrails,
    DogFriendly,
    PicnicFacilities,
    Playground,
    SportsFields,
    NatureSensitivity,
    WaterAccess,
    Parking,
    Accessibility,
    BikingTrails,
    OpenSpace,
    Shelters,
}
