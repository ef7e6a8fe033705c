// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity keyword rules for the park selector.
//!
//! Each rule maps a canonical activity to attribute weights and the phrases
//! that signal it in free text. Overlap groups list activities that share
//! vocabulary; when several members of one group match, only the most
//! specific one is kept.

use crate::models::Attribute::{self, *};
use lazy_static::lazy_static;
use regex::Regex;

/// A canonical activity and how it relates to park attributes.
#[derive(Debug)]
pub struct ActivityKeyword {
    pub name: &'static str,
    /// Rank used to pick a single winner inside an overlap group
    pub specificity: u8,
    /// Signed attribute contributions; negative weights reward low values
    pub weights: &'static [(Attribute, i8)],
    pub synonyms: &'static [&'static str],
}

/// Activities that share vocabulary, in tie-break order.
#[derive(Debug)]
pub struct OverlapGroup {
    pub name: &'static str,
    pub members: &'static [&'static str],
}

pub static ACTIVITY_KEYWORDS: &[ActivityKeyword] = &[
    ActivityKeyword {
        name: "run",
        specificity: 9,
        weights: &[(RunningTrails, 5), (Parking, 2), (Accessibility, 3), (DogFriendly, 1)],
        synonyms: &[
            "running", "jog", "jogging", "exercise", "workout", "cardio", "trail", "runner",
            "jogs", "sprint", "sprinting", "distance", "marathon", "training", "pace", "mile",
            "miles", "5k", "10k",
        ],
    },
    ActivityKeyword {
        name: "dog",
        specificity: 9,
        weights: &[
            (DogFriendly, 5),
            (RunningTrails, 3),
            (Parking, 3),
            (Playground, -1),
            (OpenSpace, 3),
        ],
        synonyms: &[
            "dogs", "puppy", "puppies", "pet", "pets", "canine", "walk dog", "dog walk", "pup",
            "doggy", "doggie", "fur baby", "pooch", "hound", "retriever", "labrador",
            "german shepherd", "poodle", "terrier", "bulldog",
        ],
    },
    ActivityKeyword {
        name: "picnic",
        specificity: 8,
        weights: &[
            (PicnicFacilities, 5),
            (Parking, 3),
            (Playground, 2),
            (Accessibility, 2),
            (Shelters, 4),
            (OpenSpace, 3),
        ],
        synonyms: &[
            "lunch", "eat", "food", "meal", "outdoor dining", "bbq", "grill", "shelter",
            "dining", "snack", "breakfast", "dinner", "feast", "cookout", "barbecue", "blanket",
            "basket", "table", "pavilion", "covered",
        ],
    },
    ActivityKeyword {
        name: "family",
        specificity: 7,
        weights: &[
            (Playground, 5),
            (PicnicFacilities, 4),
            (Parking, 4),
            (Accessibility, 4),
            (SportsFields, 2),
            (Shelters, 3),
        ],
        synonyms: &[
            "families", "kids", "children", "kid", "child", "toddler", "baby", "family-friendly",
            "youngster", "infant", "preschool", "kindergarten", "elementary", "little ones",
            "youth", "juvenile", "son", "daughter", "grandkids", "nephew",
        ],
    },
    ActivityKeyword {
        name: "sports",
        specificity: 7,
        weights: &[(SportsFields, 5), (Parking, 3), (Accessibility, 3), (OpenSpace, 4)],
        synonyms: &[
            "sport", "soccer", "football", "basketball", "baseball", "athletic", "game", "play",
            "tennis", "volleyball", "lacrosse", "frisbee", "disc", "kickball", "softball",
            "field", "court", "practice", "team", "league",
        ],
    },
    ActivityKeyword {
        name: "nature",
        specificity: 8,
        weights: &[
            (NatureSensitivity, 5),
            (RunningTrails, 3),
            (WaterAccess, 2),
            (Accessibility, 1),
        ],
        synonyms: &[
            "natural", "wildlife", "outdoors", "scenic", "peaceful", "quiet", "serene",
            "tranquil", "wilderness", "flora", "fauna", "birds", "birdwatching", "trees",
            "forest", "woods", "preserve", "conservation", "eco", "environment",
        ],
    },
    ActivityKeyword {
        name: "water",
        specificity: 9,
        weights: &[
            (WaterAccess, 5),
            (NatureSensitivity, 3),
            (Parking, 3),
            (PicnicFacilities, 2),
        ],
        synonyms: &[
            "lake", "pond", "creek", "stream", "fish", "fishing", "waterfront", "swim",
            "swimming", "river", "wade", "wading", "splash", "kayak", "boat", "boating", "shore",
            "beach", "aquatic", "angling",
        ],
    },
    ActivityKeyword {
        name: "hike",
        specificity: 8,
        weights: &[
            (RunningTrails, 5),
            (NatureSensitivity, 4),
            (Accessibility, 1),
            (Parking, 2),
            (BikingTrails, 2),
        ],
        synonyms: &[
            "hiking", "walk", "walking", "stroll", "trek", "trekking", "explore", "wander",
            "ramble", "trail walk", "nature walk", "backpack", "backpacking", "expedition",
            "adventure", "pathway", "footpath", "traverse", "roam", "meander",
        ],
    },
    ActivityKeyword {
        name: "playground",
        specificity: 8,
        weights: &[
            (Playground, 5),
            (Parking, 3),
            (PicnicFacilities, 3),
            (Accessibility, 4),
        ],
        synonyms: &[
            "play", "swing", "swings", "slide", "slides", "playarea", "playset", "jungle gym",
            "monkey bars", "seesaw", "merry-go-round", "sandbox", "climber", "playstructure",
            "equipment", "toy", "climbing", "playing", "recess", "playdate",
        ],
    },
    ActivityKeyword {
        name: "relax",
        specificity: 6,
        weights: &[
            (PicnicFacilities, 4),
            (NatureSensitivity, 4),
            (Parking, 3),
            (Accessibility, 3),
            (Shelters, 3),
        ],
        synonyms: &[
            "relaxing", "chill", "unwind", "rest", "peaceful", "calm", "leisure", "lounge",
            "sit", "meditate", "meditation", "yoga", "zen", "destress", "decompress", "recharge",
            "peace", "serenity", "solitude", "contemplation",
        ],
    },
    ActivityKeyword {
        name: "bike",
        specificity: 8,
        weights: &[
            (BikingTrails, 5),
            (RunningTrails, 3),
            (Parking, 3),
            (Accessibility, 2),
            (OpenSpace, 2),
        ],
        synonyms: &[
            "biking", "bicycle", "cycling", "cycle", "ride", "riding", "pedal", "pedaling",
            "cyclist", "mountain bike", "road bike", "bmx", "bike ride", "bike trail",
            "two wheels", "wheeling", "cruising", "spin", "velocipede", "tandem",
        ],
    },
    ActivityKeyword {
        name: "event",
        specificity: 5,
        weights: &[
            (OpenSpace, 5),
            (Parking, 4),
            (Accessibility, 4),
            (Shelters, 3),
            (SportsFields, 3),
        ],
        synonyms: &[
            "events", "gathering", "party", "celebration", "festival", "reunion", "meetup",
            "get-together", "assembly", "function", "occasion", "ceremony", "program",
            "activity", "social", "community", "group", "organization", "club", "meeting",
        ],
    },
    ActivityKeyword {
        name: "exercise",
        specificity: 5,
        weights: &[
            (RunningTrails, 4),
            (SportsFields, 4),
            (OpenSpace, 3),
            (Parking, 2),
            (Accessibility, 3),
            (BikingTrails, 3),
        ],
        synonyms: &[
            "exercising", "fitness", "workout", "training", "physical activity", "active",
            "cardio", "conditioning", "movement", "health", "wellness", "gym", "outdoor gym",
            "calisthenics", "aerobics", "stretching", "warmup", "cooldown", "bodyweight",
            "strength",
        ],
    },
    ActivityKeyword {
        name: "photography",
        specificity: 8,
        weights: &[
            (NatureSensitivity, 5),
            (WaterAccess, 3),
            (RunningTrails, 2),
            (Parking, 3),
        ],
        synonyms: &[
            "photo", "photos", "photograph", "picture", "pictures", "camera", "shoot",
            "photoshoot", "scenic photos", "landscape", "portrait", "snapshot", "capture",
            "imaging", "lens", "instagram", "selfie", "pics", "photography", "photographer",
        ],
    },
    ActivityKeyword {
        name: "shelter",
        specificity: 6,
        weights: &[
            (Shelters, 5),
            (PicnicFacilities, 4),
            (Parking, 3),
            (Accessibility, 3),
        ],
        synonyms: &[
            "shelters", "pavilion", "pavilions", "covered area", "shade", "covered", "roof",
            "canopy", "gazebo", "pergola", "awning", "cover", "rain protection",
            "sun protection", "reserved space", "rental", "booking", "reservation",
            "indoor-outdoor", "structure",
        ],
    },
    ActivityKeyword {
        name: "accessible",
        specificity: 8,
        weights: &[
            (Accessibility, 5),
            (Parking, 4),
            (PicnicFacilities, 3),
            (Playground, 3),
        ],
        synonyms: &[
            "accessibility", "wheelchair", "handicap", "ada", "disability", "disabled",
            "mobility", "paved", "flat", "easy access", "ramp", "ramped", "barrier-free",
            "universal design", "inclusive", "stroller", "walker", "cane", "elderly", "senior",
        ],
    },
    ActivityKeyword {
        name: "scenic",
        specificity: 6,
        weights: &[
            (NatureSensitivity, 5),
            (WaterAccess, 3),
            (RunningTrails, 2),
            (OpenSpace, 3),
        ],
        synonyms: &[
            "scenery", "view", "views", "vista", "panorama", "landscape", "picturesque",
            "beautiful", "pretty", "gorgeous", "breathtaking", "stunning", "photogenic",
            "aesthetic", "overlook", "lookout", "vantage", "sightseeing", "natural beauty",
            "pristine",
        ],
    },
    ActivityKeyword {
        name: "open",
        specificity: 4,
        weights: &[(OpenSpace, 5), (SportsFields, 3), (Parking, 2), (Accessibility, 3)],
        synonyms: &[
            "open space", "spacious", "field", "fields", "lawn", "grass", "meadow", "clearing",
            "expanse", "wide open", "roomy", "uncrowded", "spread out", "large area", "big",
            "vast", "expansive", "room", "space", "area",
        ],
    },
    ActivityKeyword {
        name: "parking",
        specificity: 5,
        weights: &[(Parking, 5), (Accessibility, 3)],
        synonyms: &[
            "park", "lot", "parking lot", "car", "vehicle", "parking space", "parking area",
            "easy parking", "ample parking", "good parking", "convenient", "close parking",
            "nearby parking", "accessible parking", "drive", "driving", "automobile",
            "transportation", "access", "entrance",
        ],
    },
    ActivityKeyword {
        name: "quiet",
        specificity: 7,
        weights: &[
            (NatureSensitivity, 5),
            (WaterAccess, 2),
            (OpenSpace, -2),
            (SportsFields, -2),
        ],
        synonyms: &[
            "quietness", "silent", "silence", "tranquil", "tranquility", "peaceful", "calm",
            "still", "hushed", "secluded", "isolated", "private", "remote", "away", "hidden",
            "undisturbed", "solitary", "retreat", "sanctuary", "escape",
        ],
    },
];

pub static OVERLAP_GROUPS: &[OverlapGroup] = &[
    OverlapGroup {
        name: "fitness",
        members: &["run", "hike", "exercise"],
    },
    OverlapGroup {
        name: "calm",
        members: &["nature", "quiet", "relax"],
    },
    OverlapGroup {
        name: "dining",
        members: &["picnic", "shelter"],
    },
    OverlapGroup {
        name: "play",
        members: &["playground", "sports", "open"],
    },
    OverlapGroup {
        name: "views",
        members: &["photography", "scenic"],
    },
];

lazy_static! {
    /// One whole-word, case-insensitive pattern per activity (keyword + synonyms).
    static ref KEYWORD_PATTERNS: Vec<(&'static ActivityKeyword, Regex)> = ACTIVITY_KEYWORDS
        .iter()
        .map(|keyword| (keyword, build_pattern(keyword)))
        .collect();
}

fn build_pattern(keyword: &ActivityKeyword) -> Regex {
    let mut terms: Vec<&str> = std::iter::once(keyword.name)
        .chain(keyword.synonyms.iter().copied())
        .collect();
    // Longest first so multi-word phrases win over their single-word prefixes
    terms.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    terms.dedup();

    let alternation = terms
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");

    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation))
        .unwrap_or_else(|e| panic!("invalid pattern for '{}': {}", keyword.name, e))
}

/// An activity detected in a query together with its occurrence count.
#[derive(Debug, Clone, Copy)]
pub struct ActivityMatch {
    pub keyword: &'static ActivityKeyword,
    pub frequency: u32,
}

impl ActivityMatch {
    pub fn name(&self) -> &'static str {
        self.keyword.name
    }
}

/// Find every activity mentioned in the query, in rule-table order.
pub fn detect_activities(query: &str) -> Vec<ActivityMatch> {
    KEYWORD_PATTERNS
        .iter()
        .filter_map(|(keyword, pattern)| {
            let frequency = pattern.find_iter(query).count() as u32;
            (frequency > 0).then_some(ActivityMatch {
                keyword: *keyword,
                frequency,
            })
        })
        .collect()
}

/// Collapse each overlap group down to its most specific matched member.
///
/// Losing members are dropped along with their frequencies. Activities that
/// are not in any group pass through unchanged.
pub fn resolve_overlaps(matches: Vec<ActivityMatch>) -> Vec<ActivityMatch> {
    let mut dropped: Vec<&'static str> = Vec::new();

    for group in OVERLAP_GROUPS {
        let present: Vec<&ActivityMatch> = group
            .members
            .iter()
            .filter_map(|member| matches.iter().find(|m| m.name() == *member))
            .collect();
        if present.len() < 2 {
            continue;
        }

        let mut winner = present[0];
        for &candidate in &present[1..] {
            if candidate.keyword.specificity > winner.keyword.specificity {
                winner = candidate;
            }
        }

        tracing::debug!(
            group = group.name,
            kept = winner.name(),
            candidates = present.len(),
            "Resolved overlapping activities"
        );
        dropped.extend(
            present
                .iter()
                .map(|m| m.name())
                .filter(|name| *name != winner.name()),
        );
    }

    matches
        .into_iter()
        .filter(|m| !dropped.contains(&m.name()))
        .collect()
}
