//! # st-goal
//!
//! Study goals, session logging and file persistence for the study tracker.
//!
//! A [`Goal`] is a weekly study-hour target held for a fixed number of
//! weeks. Sessions are appended to it as they are logged; progress and
//! percentage are always derived from the session list.
//!
//! ## Key components
//!
//! - [`Goal`] — the record, with derived progress, percentage and completion
//! - [`GoalRef`] — addresses a goal by position or case-insensitive title
//! - [`GoalStore`] — JSON file persistence with create / log / delete / list
//! - [`validate`] — per-field checks shared by the store and the prompts
//! - [`TrackerEvent`] / [`EventDispatcher`] — lifecycle events and sinks

pub mod error;
pub mod events;
pub mod goal;
pub mod store;
pub mod validate;

pub use error::{GoalError, ValidationError};
pub use events::{EventDispatcher, LogSink, NotificationSink, TrackerEvent};
pub use goal::{Goal, GoalRef};
pub use store::GoalStore;
