// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Poll status decision rule.

use crate::models::{Poll, PollType, VoteTally};
use chrono::{DateTime, Utc};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Share of yes votes a yes/no poll needs to be approved.
pub const APPROVAL_RATE: f64 = 0.67;

/// Display status of a poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "snake_case")]
pub enum PollStatus {
    InProgress,
    Approved,
    UnderDecision,
}

impl PollStatus {
    pub fn label(self) -> &'static str {
        match self {
            PollStatus::InProgress => "In Progress",
            PollStatus::Approved => "Approved",
            PollStatus::UnderDecision => "Under Decision",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            PollStatus::InProgress => "blue",
            PollStatus::Approved => "green",
            PollStatus::UnderDecision => "amber",
        }
    }
}

/// Classify a poll from its configuration and current tally.
///
/// Multiple-choice polls are never approved automatically. Yes/no polls need
/// both the tier's vote threshold and a 67% yes share once voting has closed.
pub fn resolve_status(poll: &Poll, tally: &VoteTally, now: DateTime<Utc>) -> PollStatus {
    if now < poll.endtime {
        return PollStatus::InProgress;
    }

    if poll.poll_type == PollType::MultipleChoice {
        return PollStatus::UnderDecision;
    }

    let approval_rate = if tally.total == 0 {
        0.0
    } else {
        f64::from(tally.yes_votes()) / f64::from(tally.total)
    };

    if tally.total >= poll.tier.vote_threshold() && approval_rate >= APPROVAL_RATE {
        PollStatus::Approved
    } else {
        PollStatus::UnderDecision
    }
}
