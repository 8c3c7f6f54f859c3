// events.rs — Event model and notification dispatch.
//
// The CLI emits an event after each successful store operation and when a
// logged session pushes a goal over its total. Sinks decide what to do with
// them; the always-available one appends JSONL to a file.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::GoalError;
use crate::goal::Goal;

/// Events emitted at key points in a goal's life.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum TrackerEvent {
    /// A new goal was added.
    GoalCreated {
        title: String,
        total_goal: f64,
        timestamp: DateTime<Utc>,
    },

    /// A study session was logged.
    SessionLogged {
        title: String,
        hours: f64,
        progress: f64,
        timestamp: DateTime<Utc>,
    },

    /// Logged hours reached the total goal.
    GoalCompleted {
        title: String,
        progress: f64,
        total_goal: f64,
        timestamp: DateTime<Utc>,
    },

    /// A goal was removed.
    GoalDeleted {
        title: String,
        timestamp: DateTime<Utc>,
    },
}

impl TrackerEvent {
    /// Get the event type name as a string.
    pub fn event_type(&self) -> &str {
        match self {
            TrackerEvent::GoalCreated { .. } => "goal_created",
            TrackerEvent::SessionLogged { .. } => "session_logged",
            TrackerEvent::GoalCompleted { .. } => "goal_completed",
            TrackerEvent::GoalDeleted { .. } => "goal_deleted",
        }
    }

    pub fn goal_created(goal: &Goal) -> Self {
        TrackerEvent::GoalCreated {
            title: goal.title().to_string(),
            total_goal: goal.total_goal(),
            timestamp: Utc::now(),
        }
    }

    pub fn session_logged(goal: &Goal, hours: f64) -> Self {
        TrackerEvent::SessionLogged {
            title: goal.title().to_string(),
            hours,
            progress: goal.progress(),
            timestamp: Utc::now(),
        }
    }

    pub fn goal_completed(goal: &Goal) -> Self {
        TrackerEvent::GoalCompleted {
            title: goal.title().to_string(),
            progress: goal.progress(),
            total_goal: goal.total_goal(),
            timestamp: Utc::now(),
        }
    }

    pub fn goal_deleted(goal: &Goal) -> Self {
        TrackerEvent::GoalDeleted {
            title: goal.title().to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Receives tracker events.
pub trait NotificationSink: Send {
    /// Handle an event. Errors are logged but don't stop the caller.
    fn send(&self, event: &TrackerEvent) -> Result<(), GoalError>;
}

/// Appends events as JSONL to a file.
pub struct LogSink {
    path: PathBuf,
}

impl LogSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl NotificationSink for LogSink {
    fn send(&self, event: &TrackerEvent) -> Result<(), GoalError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| GoalError::IoError {
                path: parent.display().to_string(),
                source,
            })?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| GoalError::IoError {
                path: self.path.display().to_string(),
                source,
            })?;

        let json = serde_json::to_string(event)?;
        writeln!(file, "{}", json).map_err(|source| GoalError::IoError {
            path: self.path.display().to_string(),
            source,
        })?;

        Ok(())
    }
}

/// Dispatches events to multiple sinks.
///
/// A failing sink is logged via tracing and skipped; the others still
/// receive the event.
pub struct EventDispatcher {
    sinks: Vec<Box<dyn NotificationSink>>,
}

impl EventDispatcher {
    /// Create a new dispatcher with no sinks.
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    /// Add a notification sink.
    pub fn add_sink(&mut self, sink: Box<dyn NotificationSink>) {
        self.sinks.push(sink);
    }

    /// Dispatch an event to all sinks.
    pub fn dispatch(&self, event: &TrackerEvent) {
        for sink in &self.sinks {
            if let Err(e) = sink.send(event) {
                tracing::warn!(event = event.event_type(), "notification sink error: {}", e);
            }
        }
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
