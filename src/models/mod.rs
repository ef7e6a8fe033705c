// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod event;
pub mod park;
pub mod poll;
pub mod recommendation;
pub mod report;

pub use event::{EventCategory, ParkEvent};
pub use park::{Amenity, Attribute, Park, ParkAttributes};
pub use poll::{
    NewPoll, Poll, PollCategory, PollChoice, PollTier, PollType, Profile, Role, Vote, VoteTally,
};
pub use recommendation::MatchScore;
pub use report::{ParkReport, ReportStatus};
