// goal.rs — Goal: one weekly study-hour target and its logged sessions.
//
// A Goal stores only raw inputs: the weekly rate, the duration, the total
// fixed at creation, and every session in the order it was logged.
// Progress and percentage are derived on read, so they can never drift
// from the session list.
//
// On disk a goal is a flat JSON object:
//   { "title", "weeklyGoal", "weeks", "totalGoal", "progress", "sessions" }
// `progress` is written for readers of the file but ignored on load.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A tracked study target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "GoalRecord", try_from = "GoalRecord")]
pub struct Goal {
    title: String,
    weekly_goal: f64,
    weeks: u32,
    total_goal: f64,
    sessions: Vec<f64>,
}

impl Goal {
    /// Build a goal with no sessions. Callers go through
    /// [`GoalStore::create`](crate::GoalStore::create), which validates first.
    pub(crate) fn new(title: impl Into<String>, weekly_goal: f64, weeks: u32) -> Self {
        Self {
            title: title.into(),
            weekly_goal,
            weeks,
            total_goal: weekly_goal * f64::from(weeks),
            sessions: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Target hours per week.
    pub fn weekly_goal(&self) -> f64 {
        self.weekly_goal
    }

    /// Duration in weeks.
    pub fn weeks(&self) -> u32 {
        self.weeks
    }

    /// Hours needed to complete the goal (weekly goal × weeks).
    pub fn total_goal(&self) -> f64 {
        self.total_goal
    }

    /// Logged session hours, oldest first.
    pub fn sessions(&self) -> &[f64] {
        &self.sessions
    }

    /// Cumulative hours logged: the sum over every session, recomputed each call.
    pub fn progress(&self) -> f64 {
        // Folding from +0.0 keeps an empty goal at "0", never "-0".
        self.sessions.iter().fold(0.0, |total, hours| total + hours)
    }

    /// Progress as a percentage of the total goal, rounded to two decimals.
    ///
    /// Values above 100 are kept; the total goal is always positive.
    pub fn progress_percent(&self) -> f64 {
        let raw = self.progress() / self.total_goal * 100.0;
        (raw * 100.0).round() / 100.0
    }

    /// [`progress_percent`](Self::progress_percent) with exactly two decimals, e.g. `"25.00"`.
    pub fn percent_label(&self) -> String {
        format!("{:.2}", self.progress_percent())
    }

    /// Whether the logged hours have reached the total goal.
    pub fn is_complete(&self) -> bool {
        self.progress() >= self.total_goal
    }

    /// Case-insensitive title comparison.
    pub fn matches_title(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.trim().to_lowercase()
    }

    pub(crate) fn push_session(&mut self, hours: f64) {
        self.sessions.push(hours);
    }
}

/// Identifies one stored goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalRef {
    /// 0-based index in stored order.
    Position(usize),
    /// Title, matched case-insensitively.
    Title(String),
}

impl GoalRef {
    /// Index of the referenced goal within `goals`, if it resolves.
    pub fn resolve(&self, goals: &[Goal]) -> Option<usize> {
        match self {
            GoalRef::Position(i) => (*i < goals.len()).then_some(*i),
            GoalRef::Title(t) => goals.iter().position(|g| g.matches_title(t)),
        }
    }
}

impl fmt::Display for GoalRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalRef::Position(i) => write!(f, "#{}", i + 1),
            GoalRef::Title(t) => write!(f, "\"{}\"", t),
        }
    }
}

impl From<usize> for GoalRef {
    fn from(i: usize) -> Self {
        GoalRef::Position(i)
    }
}

impl From<&str> for GoalRef {
    fn from(title: &str) -> Self {
        GoalRef::Title(title.to_string())
    }
}

impl From<String> for GoalRef {
    fn from(title: String) -> Self {
        GoalRef::Title(title)
    }
}

/// On-disk shape of a goal.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoalRecord {
    title: String,
    weekly_goal: f64,
    weeks: u32,
    total_goal: f64,
    #[serde(default)]
    progress: f64,
    #[serde(default)]
    sessions: Vec<f64>,
}

impl From<Goal> for GoalRecord {
    fn from(goal: Goal) -> Self {
        GoalRecord {
            progress: goal.progress(),
            title: goal.title,
            weekly_goal: goal.weekly_goal,
            weeks: goal.weeks,
            total_goal: goal.total_goal,
            sessions: goal.sessions,
        }
    }
}

impl TryFrom<GoalRecord> for Goal {
    type Error = String;

    fn try_from(record: GoalRecord) -> Result<Self, Self::Error> {
        if !(record.total_goal.is_finite() && record.total_goal > 0.0) {
            return Err(format!(
                "goal \"{}\" has a non-positive totalGoal ({})",
                record.title, record.total_goal
            ));
        }
        let goal = Goal {
            title: record.title,
            weekly_goal: record.weekly_goal,
            weeks: record.weeks,
            total_goal: record.total_goal,
            sessions: record.sessions,
        };
        let recomputed = goal.progress();
        if (recomputed - record.progress).abs() > 1e-9 {
            tracing::warn!(
                title = %goal.title,
                stored = record.progress,
                recomputed,
                "stored progress disagrees with session sum; using session sum"
            );
        }
        Ok(goal)
    }
}
