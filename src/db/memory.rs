// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory backend used for local development and tests.
//!
//! Mirrors the hosted backend's constraints: votes are keyed by
//! (user, poll) so a second vote replaces the first.

use crate::models::{NewPoll, ParkReport, Poll, PollChoice, Profile, Vote};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Default)]
pub struct MemoryStore {
    polls: DashMap<String, Poll>,
    choices: DashMap<String, Vec<PollChoice>>,
    votes: DashMap<(String, String), Vote>,
    profiles: DashMap<String, Profile>,
    reports: DashMap<String, ParkReport>,
    next_poll_id: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Polls ordered by end time, latest first.
    pub fn list_polls(&self) -> Vec<Poll> {
        let mut polls: Vec<Poll> = self.polls.iter().map(|p| p.value().clone()).collect();
        polls.sort_by(|a, b| b.endtime.cmp(&a.endtime).then_with(|| a.id.cmp(&b.id)));
        polls
    }

    pub fn get_poll(&self, poll_id: &str) -> Option<Poll> {
        self.polls.get(poll_id).map(|p| p.value().clone())
    }

    pub fn get_choices(&self, poll_id: &str) -> Vec<PollChoice> {
        self.choices
            .get(poll_id)
            .map(|c| c.value().clone())
            .unwrap_or_default()
    }

    pub fn create_poll(&self, poll: &NewPoll, choices: &[String]) -> Poll {
        // Seeded polls may already hold low ids
        let id = loop {
            let candidate = (self.next_poll_id.fetch_add(1, Ordering::Relaxed) + 1).to_string();
            if !self.polls.contains_key(&candidate) {
                break candidate;
            }
        };
        let created = Poll {
            id,
            title: poll.title.clone(),
            description: poll.description.clone(),
            category: poll.category,
            tier: poll.tier,
            poll_type: poll.poll_type,
            endtime: poll.endtime,
            approved: None,
        };
        let rows = choices
            .iter()
            .map(|choice| PollChoice {
                poll_id: created.id.clone(),
                choice: choice.clone(),
            })
            .collect();

        self.insert_poll(created.clone(), rows);
        created
    }

    /// Store a poll with a caller-chosen id (seeding).
    pub fn insert_poll(&self, poll: Poll, choices: Vec<PollChoice>) {
        if !choices.is_empty() {
            self.choices.insert(poll.id.clone(), choices);
        }
        self.polls.insert(poll.id.clone(), poll);
    }

    /// Votes for a poll, ordered by user for stable output.
    pub fn get_votes(&self, poll_id: &str) -> Vec<Vote> {
        let mut votes: Vec<Vote> = self
            .votes
            .iter()
            .filter(|v| v.key().1 == poll_id)
            .map(|v| v.value().clone())
            .collect();
        votes.sort_by(|a, b| a.user_id.cmp(&b.user_id));
        votes
    }

    pub fn upsert_vote(&self, vote: &Vote) {
        self.votes
            .insert((vote.user_id.clone(), vote.poll_id.clone()), vote.clone());
    }

    pub fn get_profile(&self, user_id: &str) -> Option<Profile> {
        self.profiles.get(user_id).map(|p| p.value().clone())
    }

    pub fn set_profile(&self, profile: Profile) {
        self.profiles.insert(profile.id.clone(), profile);
    }

    pub fn insert_report(&self, report: &ParkReport) {
        self.reports.insert(report.id.clone(), report.clone());
    }

    /// Reports newest first.
    pub fn reports(&self) -> Vec<ParkReport> {
        let mut reports: Vec<ParkReport> = self.reports.iter().map(|r| r.value().clone()).collect();
        reports.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        reports
    }
}
