// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Community poll service: listing, voting and administration.

use crate::db::BackendDb;
use crate::error::AppError;
use crate::models::poll::{OptionCount, NO, YES};
use crate::models::{
    NewPoll, Poll, PollCategory, PollChoice, PollTier, PollType, Role, Vote, VoteTally,
};
use crate::services::poll_status::{resolve_status, PollStatus};
use crate::time_utils::format_utc_rfc3339;
use chrono::{DateTime, Utc};
use futures_util::future::try_join_all;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A poll as shown to residents: configuration, tally and derived status.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PollView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: PollCategory,
    pub tier: PollTier,
    #[serde(rename = "type")]
    pub poll_type: PollType,
    pub endtime: String,
    pub choices: Vec<String>,
    pub votes: Vec<OptionCount>,
    pub total_votes: u32,
    pub yes_percentage: u32,
    pub status: PollStatus,
    pub status_label: String,
    pub status_color: String,
}

impl PollView {
    fn build(poll: Poll, choices: Vec<String>, tally: VoteTally, now: DateTime<Utc>) -> Self {
        let status = resolve_status(&poll, &tally, now);
        Self {
            id: poll.id,
            title: poll.title,
            description: poll.description,
            category: poll.category,
            tier: poll.tier,
            poll_type: poll.poll_type,
            endtime: format_utc_rfc3339(poll.endtime),
            choices,
            yes_percentage: tally.yes_percentage(),
            total_votes: tally.total,
            votes: tally.counts,
            status,
            status_label: status.label().to_string(),
            status_color: status.color().to_string(),
        }
    }
}

/// Poll operations on top of the backend.
#[derive(Clone)]
pub struct PollService {
    db: BackendDb,
}

impl PollService {
    pub fn new(db: BackendDb) -> Self {
        Self { db }
    }

    /// All polls with their current tallies.
    pub async fn list(&self, now: DateTime<Utc>) -> Result<Vec<PollView>, AppError> {
        let polls = self.db.list_polls().await?;
        try_join_all(polls.into_iter().map(|poll| self.view(poll, now))).await
    }

    pub async fn get(&self, poll_id: &str, now: DateTime<Utc>) -> Result<PollView, AppError> {
        let poll = self.find(poll_id).await?;
        self.view(poll, now).await
    }

    /// Record (or replace) a user's vote and return the refreshed poll.
    ///
    /// Yes/no polls take `yes` or `no`; multiple-choice polls take the exact
    /// text of one of their choices.
    pub async fn cast_vote(
        &self,
        user_id: &str,
        poll_id: &str,
        option: &str,
        now: DateTime<Utc>,
    ) -> Result<PollView, AppError> {
        let poll = self.find(poll_id).await?;
        if now >= poll.endtime {
            return Err(AppError::BadRequest("Voting has closed".to_string()));
        }

        let option = option.trim();
        let vote = match poll.poll_type {
            PollType::YesNo => {
                let value = match option.to_ascii_lowercase().as_str() {
                    YES => true,
                    NO => false,
                    _ => {
                        return Err(AppError::BadRequest(
                            "Vote must be \"yes\" or \"no\"".to_string(),
                        ))
                    }
                };
                Vote {
                    user_id: user_id.to_string(),
                    poll_id: poll.id.clone(),
                    vote: Some(value),
                    vote_option: None,
                }
            }
            PollType::MultipleChoice => {
                let choices = self.db.get_choices(&poll.id).await?;
                if !choices.iter().any(|c| c.choice == option) {
                    return Err(AppError::BadRequest(format!(
                        "\"{}\" is not a choice for this poll",
                        option
                    )));
                }
                Vote {
                    user_id: user_id.to_string(),
                    poll_id: poll.id.clone(),
                    vote: None,
                    vote_option: Some(option.to_string()),
                }
            }
        };

        self.db.upsert_vote(&vote).await?;
        tracing::info!(user_id, poll_id = %poll.id, "Vote recorded");

        // Refetch so the tally reflects what the backend stored
        self.view(poll, now).await
    }

    /// Create a poll. Only admins may do this.
    pub async fn create_poll(
        &self,
        user_id: &str,
        draft: NewPoll,
        choices: Vec<String>,
        now: DateTime<Utc>,
    ) -> Result<PollView, AppError> {
        let role = self
            .db
            .get_profile(user_id)
            .await?
            .map(|p| p.role)
            .unwrap_or_default();
        if role != Role::Admin {
            tracing::warn!(user_id, "Non-admin attempted to create a poll");
            return Err(AppError::Forbidden(
                "Only administrators can create polls".to_string(),
            ));
        }

        if draft.title.trim().is_empty() || draft.description.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Title and description are required".to_string(),
            ));
        }
        if draft.endtime <= now {
            return Err(AppError::BadRequest(
                "End time must be in the future".to_string(),
            ));
        }

        let choices = match draft.poll_type {
            PollType::YesNo => Vec::new(),
            PollType::MultipleChoice => normalize_choices(choices)?,
        };

        let poll = self.db.create_poll(&draft, &choices).await?;
        tracing::info!(poll_id = %poll.id, title = %poll.title, "Poll created");

        let rows: Vec<PollChoice> = choices
            .iter()
            .map(|choice| PollChoice {
                poll_id: poll.id.clone(),
                choice: choice.clone(),
            })
            .collect();
        let tally = VoteTally::from_votes(poll.poll_type, &rows, &[]);
        Ok(PollView::build(poll, choices, tally, now))
    }

    async fn find(&self, poll_id: &str) -> Result<Poll, AppError> {
        self.db
            .get_poll(poll_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Poll {} not found", poll_id)))
    }

    async fn view(&self, poll: Poll, now: DateTime<Utc>) -> Result<PollView, AppError> {
        let (choices, votes) =
            tokio::try_join!(self.db.get_choices(&poll.id), self.db.get_votes(&poll.id))?;
        let tally = VoteTally::from_votes(poll.poll_type, &choices, &votes);
        let labels = choices.into_iter().map(|c| c.choice).collect();
        Ok(PollView::build(poll, labels, tally, now))
    }
}

/// Trim choices and require at least two distinct non-empty ones.
fn normalize_choices(choices: Vec<String>) -> Result<Vec<String>, AppError> {
    let mut normalized: Vec<String> = Vec::with_capacity(choices.len());
    for choice in choices {
        let choice = choice.trim();
        if choice.is_empty() {
            return Err(AppError::BadRequest("Choices cannot be empty".to_string()));
        }
        if normalized.iter().any(|c| c == choice) {
            return Err(AppError::BadRequest(format!("Duplicate choice \"{}\"", choice)));
        }
        normalized.push(choice.to_string());
    }

    if normalized.len() < 2 {
        return Err(AppError::BadRequest(
            "Multiple-choice polls need at least two choices".to_string(),
        ));
    }
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Profile;
    use chrono::Duration;

    fn seeded() -> (PollService, BackendDb) {
        let db = BackendDb::new_in_memory();
        let store = db.memory().expect("in-memory backend");
        let now = Utc::now();

        store.insert_poll(
            Poll {
                id: "1".to_string(),
                title: "Dog park at Liberty".to_string(),
                description: "Fence off a dog run".to_string(),
                category: PollCategory::Amenity,
                tier: PollTier::Small,
                poll_type: PollType::YesNo,
                endtime: now + Duration::days(7),
                approved: None,
            },
            Vec::new(),
        );
        store.insert_poll(
            Poll {
                id: "2".to_string(),
                title: "Summer concert".to_string(),
                description: "Pick a genre".to_string(),
                category: PollCategory::Event,
                tier: PollTier::Medium,
                poll_type: PollType::MultipleChoice,
                endtime: now + Duration::days(3),
                approved: None,
            },
            ["Jazz", "Rock", "Folk"]
                .iter()
                .map(|c| PollChoice {
                    poll_id: "2".to_string(),
                    choice: c.to_string(),
                })
                .collect(),
        );
        store.insert_poll(
            Poll {
                id: "3".to_string(),
                title: "Lights at the courts".to_string(),
                description: "Closed poll".to_string(),
                category: PollCategory::Amenity,
                tier: PollTier::Small,
                poll_type: PollType::YesNo,
                endtime: now - Duration::days(1),
                approved: None,
            },
            Vec::new(),
        );
        store.set_profile(Profile {
            id: "admin-1".to_string(),
            role: Role::Admin,
        });

        (PollService::new(db.clone()), db)
    }

    fn draft(poll_type: PollType, endtime: DateTime<Utc>) -> NewPoll {
        NewPoll {
            title: "Splash pad".to_string(),
            description: "Add a splash pad near the playground".to_string(),
            category: PollCategory::Amenity,
            tier: PollTier::Big,
            poll_type,
            endtime,
        }
    }

    #[tokio::test]
    async fn test_revote_replaces_previous_vote() {
        let (service, _db) = seeded();
        let now = Utc::now();

        let view = service.cast_vote("alice", "2", "Jazz", now).await.unwrap();
        assert_eq!(view.total_votes, 1);

        let view = service.cast_vote("alice", "2", "Rock", now).await.unwrap();
        assert_eq!(view.total_votes, 1);
        let count = |name: &str| view.votes.iter().find(|c| c.option == name).unwrap().votes;
        assert_eq!(count("Jazz"), 0);
        assert_eq!(count("Rock"), 1);
        assert_eq!(count("Folk"), 0);
    }

    #[tokio::test]
    async fn test_yes_no_vote_and_percentage() {
        let (service, _db) = seeded();
        let now = Utc::now();

        service.cast_vote("alice", "1", "yes", now).await.unwrap();
        service.cast_vote("bob", "1", "YES", now).await.unwrap();
        let view = service.cast_vote("carol", "1", "no", now).await.unwrap();

        assert_eq!(view.total_votes, 3);
        assert_eq!(view.yes_percentage, 67);
        assert_eq!(view.status, PollStatus::InProgress);
        assert_eq!(view.status_label, "In Progress");
    }

    #[tokio::test]
    async fn test_invalid_options_rejected() {
        let (service, db) = seeded();
        let now = Utc::now();

        let err = service.cast_vote("alice", "1", "maybe", now).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        let err = service.cast_vote("alice", "2", "Polka", now).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        let err = service.cast_vote("alice", "99", "yes", now).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        assert!(db.get_votes("1").await.unwrap().is_empty());
        assert!(db.get_votes("2").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_closed_poll_rejects_votes() {
        let (service, db) = seeded();
        let err = service
            .cast_vote("alice", "3", "yes", Utc::now())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg == "Voting has closed"));
        assert!(db.get_votes("3").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_closed_poll_without_votes_under_decision() {
        let (service, _db) = seeded();
        let view = service.get("3", Utc::now()).await.unwrap();
        assert_eq!(view.status, PollStatus::UnderDecision);
        assert_eq!(view.status_color, "amber");
        assert_eq!(view.yes_percentage, 0);
    }

    #[tokio::test]
    async fn test_list_orders_latest_endtime_first() {
        let (service, _db) = seeded();
        let now = Utc::now();
        service.cast_vote("alice", "1", "yes", now).await.unwrap();
        service.cast_vote("alice", "2", "Folk", now).await.unwrap();
        service.cast_vote("bob", "2", "Folk", now).await.unwrap();

        let views = service.list(now).await.unwrap();
        let ids: Vec<&str> = views.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);

        // Each view carries its own poll's tally
        let totals: Vec<u32> = views.iter().map(|v| v.total_votes).collect();
        assert_eq!(totals, vec![1, 2, 0]);
        assert_eq!(views[0].yes_percentage, 100);
    }

    #[tokio::test]
    async fn test_create_requires_admin() {
        let (service, db) = seeded();
        let now = Utc::now();
        let err = service
            .create_poll(
                "resident-1",
                draft(PollType::YesNo, now + Duration::days(1)),
                Vec::new(),
                now,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
        assert_eq!(db.list_polls().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_create_validates_fields() {
        let (service, db) = seeded();
        let now = Utc::now();

        let past = service
            .create_poll("admin-1", draft(PollType::YesNo, now), Vec::new(), now)
            .await;
        assert!(matches!(past, Err(AppError::BadRequest(_))));

        let one_choice = service
            .create_poll(
                "admin-1",
                draft(PollType::MultipleChoice, now + Duration::days(1)),
                vec!["Only".to_string()],
                now,
            )
            .await;
        assert!(matches!(one_choice, Err(AppError::BadRequest(_))));

        let duplicate = service
            .create_poll(
                "admin-1",
                draft(PollType::MultipleChoice, now + Duration::days(1)),
                vec!["Same".to_string(), " Same ".to_string()],
                now,
            )
            .await;
        assert!(matches!(duplicate, Err(AppError::BadRequest(_))));

        assert_eq!(db.list_polls().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_admin_creates_multiple_choice_poll() {
        let (service, db) = seeded();
        let now = Utc::now();

        let view = service
            .create_poll(
                "admin-1",
                draft(PollType::MultipleChoice, now + Duration::days(14)),
                vec!["North lawn".to_string(), "South lawn".to_string()],
                now,
            )
            .await
            .unwrap();

        assert_eq!(view.choices, vec!["North lawn", "South lawn"]);
        assert_eq!(view.votes.len(), 2);
        assert_eq!(view.total_votes, 0);
        assert_eq!(view.status, PollStatus::InProgress);
        assert_eq!(db.get_choices(&view.id).await.unwrap().len(), 2);

        let voted = service
            .cast_vote("alice", &view.id, "South lawn", now)
            .await
            .unwrap();
        assert_eq!(voted.total_votes, 1);
    }
}
