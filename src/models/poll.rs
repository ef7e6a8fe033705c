// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Community voting models.
//!
//! Rows mirror the hosted backend tables (`polls`, `choices`, `voting`,
//! `profiles`). The backend owns these records; the service only reads them
//! and writes through the backend client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Option label used for an affirmative yes/no vote.
pub const YES: &str = "yes";
/// Option label used for a negative yes/no vote.
pub const NO: &str = "no";

/// A community poll.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Poll {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: PollCategory,
    pub tier: PollTier,
    #[serde(rename = "type")]
    pub poll_type: PollType,
    pub endtime: DateTime<Utc>,
    #[serde(default)]
    pub approved: Option<bool>,
}

/// Fields required to create a poll (the backend assigns the id).
#[derive(Debug, Clone, Serialize)]
pub struct NewPoll {
    pub title: String,
    pub description: String,
    pub category: PollCategory,
    pub tier: PollTier,
    #[serde(rename = "type")]
    pub poll_type: PollType,
    pub endtime: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "snake_case")]
pub enum PollCategory {
    Amenity,
    Event,
}

/// Poll size class; each tier implies the vote count needed for approval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "snake_case")]
pub enum PollTier {
    Small,
    Medium,
    Big,
}

impl PollTier {
    /// Minimum total votes before a yes/no poll can be approved.
    pub fn vote_threshold(self) -> u32 {
        match self {
            PollTier::Small => 100,
            PollTier::Medium => 250,
            PollTier::Big => 500,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "snake_case")]
pub enum PollType {
    YesNo,
    MultipleChoice,
}

/// One option of a multiple-choice poll.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollChoice {
    pub poll_id: String,
    pub choice: String,
}

/// A single user's vote on a poll. At most one row exists per (user, poll).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub user_id: String,
    pub poll_id: String,
    /// Yes/no polls store a boolean
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote: Option<bool>,
    /// Multiple-choice polls store the chosen choice text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_option: Option<String>,
}

impl Vote {
    /// The option this vote counts towards, if it carries one.
    pub fn option_label(&self) -> Option<&str> {
        match (self.vote, self.vote_option.as_deref()) {
            (Some(true), _) => Some(YES),
            (Some(false), _) => Some(NO),
            (None, option) => option,
        }
    }
}

/// User profile row; only the role is consumed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub role: Role,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    #[default]
    Resident,
}

/// Vote count for one option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct OptionCount {
    pub option: String,
    pub votes: u32,
}

/// Vote counts for a poll, one bucket per option in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct VoteTally {
    pub counts: Vec<OptionCount>,
    pub total: u32,
}

impl VoteTally {
    /// Count votes per option.
    ///
    /// Every option of the poll gets a bucket even with zero votes. Votes for
    /// options the poll no longer offers are still counted in their own bucket.
    pub fn from_votes(poll_type: PollType, choices: &[PollChoice], votes: &[Vote]) -> Self {
        let mut counts: Vec<OptionCount> = match poll_type {
            PollType::YesNo => vec![YES, NO]
                .into_iter()
                .map(|option| OptionCount {
                    option: option.to_string(),
                    votes: 0,
                })
                .collect(),
            PollType::MultipleChoice => choices
                .iter()
                .map(|c| OptionCount {
                    option: c.choice.clone(),
                    votes: 0,
                })
                .collect(),
        };

        let mut total = 0;
        for label in votes.iter().filter_map(Vote::option_label) {
            total += 1;
            match counts.iter_mut().find(|c| c.option == label) {
                Some(bucket) => bucket.votes += 1,
                None => counts.push(OptionCount {
                    option: label.to_string(),
                    votes: 1,
                }),
            }
        }

        Self { counts, total }
    }

    /// Votes recorded for a given option.
    pub fn count(&self, option: &str) -> u32 {
        self.counts
            .iter()
            .find(|c| c.option == option)
            .map(|c| c.votes)
            .unwrap_or(0)
    }

    pub fn yes_votes(&self) -> u32 {
        self.count(YES)
    }

    /// Share of yes votes as a rounded percentage (0 when nobody voted).
    pub fn yes_percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (f64::from(self.yes_votes()) * 100.0 / f64::from(self.total)).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yes_no_vote(user: &str, yes: bool) -> Vote {
        Vote {
            user_id: user.to_string(),
            poll_id: "poll-1".to_string(),
            vote: Some(yes),
            vote_option: None,
        }
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(PollTier::Small.vote_threshold(), 100);
        assert_eq!(PollTier::Medium.vote_threshold(), 250);
        assert_eq!(PollTier::Big.vote_threshold(), 500);
    }

    #[test]
    fn test_yes_no_tally_has_both_buckets() {
        let tally = VoteTally::from_votes(PollType::YesNo, &[], &[]);
        assert_eq!(tally.total, 0);
        assert_eq!(tally.counts.len(), 2);
        assert_eq!(tally.yes_percentage(), 0);
    }

    #[test]
    fn test_yes_no_tally_counts() {
        let votes = vec![
            yes_no_vote("a", true),
            yes_no_vote("b", true),
            yes_no_vote("c", false),
        ];
        let tally = VoteTally::from_votes(PollType::YesNo, &[], &votes);
        assert_eq!(tally.total, 3);
        assert_eq!(tally.yes_votes(), 2);
        assert_eq!(tally.count(NO), 1);
        assert_eq!(tally.yes_percentage(), 67);
    }

    #[test]
    fn test_multiple_choice_tally_keeps_choice_order() {
        let choices: Vec<PollChoice> = ["Pickleball", "Tennis", "Basketball"]
            .iter()
            .map(|c| PollChoice {
                poll_id: "poll-2".to_string(),
                choice: c.to_string(),
            })
            .collect();
        let votes = vec![Vote {
            user_id: "a".to_string(),
            poll_id: "poll-2".to_string(),
            vote: None,
            vote_option: Some("Tennis".to_string()),
        }];

        let tally = VoteTally::from_votes(PollType::MultipleChoice, &choices, &votes);
        let options: Vec<&str> = tally.counts.iter().map(|c| c.option.as_str()).collect();
        assert_eq!(options, vec!["Pickleball", "Tennis", "Basketball"]);
        assert_eq!(tally.count("Tennis"), 1);
        assert_eq!(tally.count("Pickleball"), 0);
        assert_eq!(tally.total, 1);
    }

    #[test]
    fn test_poll_deserializes_backend_row() {
        let row = serde_json::json!({
            "id": "7",
            "title": "Pickleball Courts at Liberty Park",
            "description": "Add 4 dedicated courts",
            "category": "amenity",
            "tier": "medium",
            "type": "yes_no",
            "endtime": "2025-12-31T00:00:00Z",
            "approved": null
        });
        let poll: Poll = serde_json::from_value(row).unwrap();
        assert_eq!(poll.tier, PollTier::Medium);
        assert_eq!(poll.poll_type, PollType::YesNo);
        assert_eq!(poll.approved, None);
    }
}
