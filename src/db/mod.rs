//! Database layer (hosted backend).

pub mod backend;
pub mod memory;
pub mod rest;

pub use backend::BackendDb;

/// Backend table names as constants.
pub mod tables {
    /// User profiles (id → role)
    pub const PROFILES: &str = "profiles";
    pub const POLLS: &str = "polls";
    /// Options of multiple-choice polls
    pub const CHOICES: &str = "choices";
    /// One vote per (user_id, poll_id)
    pub const VOTING: &str = "voting";
    pub const REPORTS: &str = "reports";
}
