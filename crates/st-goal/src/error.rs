// error.rs — Error types for the study goal store.

use thiserror::Error;

/// Input that the store refuses to accept.
///
/// The display strings are user-facing: the interactive menu prints them
/// verbatim next to the prompt that produced the bad value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Title cannot be empty.")]
    EmptyTitle,

    #[error("A goal with this title already exists.")]
    DuplicateTitle(String),

    #[error("Weekly goal should be a positive number.")]
    NonPositiveWeeklyGoal(f64),

    #[error("Duration should be a positive number.")]
    NonPositiveWeeks,

    #[error("Hours should be a positive number.")]
    NonPositiveHours(f64),

    #[error("Total goal is too large to track.")]
    TotalGoalOverflow { weekly_goal: f64, weeks: u32 },

    #[error("Logged hours are too large to track.")]
    ProgressOverflow { progress: f64, hours: f64 },
}

/// Errors that can occur during goal store operations.
#[derive(Debug, Error)]
pub enum GoalError {
    /// A file I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    IoError {
        path: String,
        source: std::io::Error,
    },

    /// Failed to serialize/deserialize the goal collection.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Bad or duplicate input.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The referenced goal does not exist.
    #[error("goal not found: {0}")]
    NotFound(String),

    /// A notification dispatch failed (non-fatal).
    #[error("notification error: {0}")]
    NotificationError(String),
}
