// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Park selector: rank parks against a free-text activity query.
//!
//! Scoring works in three steps:
//! 1. Detect activities in the query and collapse overlapping ones
//! 2. Score each park from the surviving activities' attribute weights, or
//!    from general appeal when nothing was recognised
//! 3. Rescale so the best park is at most 100 and sort

use crate::models::{Attribute, MatchScore, Park, ParkAttributes};
use crate::services::catalog::ParkCatalog;
use crate::services::keywords::{detect_activities, resolve_overlaps, ActivityMatch};

/// Attributes averaged for the general-appeal fallback.
const QUALITY_ATTRIBUTES: [Attribute; 5] = [
    Attribute::Parking,
    Attribute::Accessibility,
    Attribute::Playground,
    Attribute::PicnicFacilities,
    Attribute::RunningTrails,
];

const GENERAL_PURPOSE_REASON: &str = "General-purpose park";

/// A validated, non-blank search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Trim the raw input and reject it if nothing is left.
    pub fn parse(raw: &str) -> Result<Self, QueryError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(QueryError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("Please enter your interests")]
    Empty,
}

/// Tunable constants of the scoring model.
#[derive(Debug, Clone)]
struct MatcherSettings {
    /// Attribute value treated as "full marks"
    max_attribute_value: f64,
    /// Fraction of an activity's maximum it must reach to be named in the reason
    match_threshold: f64,
    diversity_weight: f64,
    quality_weight: f64,
    size_weight: f64,
    /// Distinct amenity types that count as fully diverse
    max_amenity_types: usize,
    /// Amenity count that counts as a full-size park
    amenity_count_cap: usize,
}

impl Default for MatcherSettings {
    fn default() -> Self {
        Self {
            max_attribute_value: 5.0,
            match_threshold: 0.3,
            diversity_weight: 40.0,
            quality_weight: 40.0,
            size_weight: 20.0,
            max_amenity_types: 6,
            amenity_count_cap: 8,
        }
    }
}

/// Per-park score before rescaling.
struct RawScore<'a> {
    park: &'a Park,
    percent: f64,
    matched: Vec<&'static str>,
}

/// Scores parks against activity queries.
#[derive(Debug, Clone, Default)]
pub struct QueryMatcher {
    settings: MatcherSettings,
}

impl QueryMatcher {
    /// Rank every park that has attribute data against the query.
    ///
    /// Results are sorted by score (descending), then park name.
    pub fn score_parks(&self, catalog: &ParkCatalog, query: &SearchQuery) -> Vec<MatchScore> {
        let lowered = query.as_str().to_lowercase();
        let activities = resolve_overlaps(detect_activities(&lowered));

        tracing::debug!(
            activities = ?activities.iter().map(ActivityMatch::name).collect::<Vec<_>>(),
            "Scoring parks"
        );

        let mut raw: Vec<RawScore> = catalog
            .scored_parks()
            .map(|(park, attrs)| {
                if activities.is_empty() {
                    self.general_appeal(park, attrs)
                } else {
                    self.activity_score(&activities, park, attrs)
                }
            })
            .collect();

        // Additive contributions are not capped; pull everything down together
        let best = raw.iter().map(|r| r.percent).fold(0.0_f64, f64::max);
        if best > 100.0 {
            let factor = 100.0 / best;
            tracing::debug!(best, factor, "Rescaling park scores");
            for entry in &mut raw {
                entry.percent = (entry.percent * factor).round();
            }
        }

        let mut results: Vec<MatchScore> = raw
            .into_iter()
            .map(|entry| MatchScore {
                park_id: entry.park.id.clone(),
                park_name: entry.park.name.clone(),
                score: entry.percent.clamp(0.0, 100.0) as u8,
                match_reason: match_reason(&entry.matched),
                matched_features: entry.matched.iter().map(|m| m.to_string()).collect(),
            })
            .collect();

        results.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.park_name.cmp(&b.park_name))
        });
        results
    }

    fn activity_score<'a>(
        &self,
        activities: &[ActivityMatch],
        park: &'a Park,
        attrs: &ParkAttributes,
    ) -> RawScore<'a> {
        let max_value = self.settings.max_attribute_value;
        let mut total = 0.0;
        let mut total_max = 0.0;
        let mut matched = Vec::new();

        for activity in activities {
            let frequency = f64::from(activity.frequency);
            let mut score = 0.0;
            let mut max = 0.0;

            for &(attribute, weight) in activity.keyword.weights {
                let value = f64::from(attrs.get(attribute));
                let magnitude = f64::from(weight).abs();
                if weight >= 0 {
                    score += (value / max_value) * magnitude * frequency;
                } else {
                    score += ((max_value - value) / max_value) * magnitude * frequency;
                }
                max += magnitude * frequency;
            }

            if score > self.settings.match_threshold * max {
                matched.push(activity.name());
            }
            total += score;
            total_max += max;
        }

        let percent = if total_max > 0.0 {
            (100.0 * total / total_max).round()
        } else {
            0.0
        };

        RawScore {
            park,
            percent,
            matched,
        }
    }

    fn general_appeal<'a>(&self, park: &'a Park, attrs: &ParkAttributes) -> RawScore<'a> {
        let s = &self.settings;

        let diversity =
            (park.amenity_type_count() as f64 / s.max_amenity_types as f64).min(1.0);
        let quality = QUALITY_ATTRIBUTES
            .iter()
            .map(|&a| f64::from(attrs.get(a)))
            .sum::<f64>()
            / QUALITY_ATTRIBUTES.len() as f64
            / s.max_attribute_value;
        let size = (park.amenities.len() as f64 / s.amenity_count_cap as f64).min(1.0);

        let percent =
            (s.diversity_weight * diversity + s.quality_weight * quality + s.size_weight * size)
                .round();

        RawScore {
            park,
            percent,
            matched: Vec::new(),
        }
    }
}

fn match_reason(matched: &[&str]) -> String {
    match matched {
        [] => GENERAL_PURPOSE_REASON.to_string(),
        [only] => format!("Good for {}", only),
        [first, second, ..] => format!("Good for {} and {}", first, second),
    }
}
