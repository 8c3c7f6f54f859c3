// store.rs — GoalStore: persistence for the study goal collection.
//
// All goals live in one JSON file holding an array of Goal records, in the
// order they were created. Every operation reads the whole file, changes
// the in-memory list, and writes the whole file back. There is no locking;
// two processes writing at once means the last writer wins.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::GoalError;
use crate::goal::{Goal, GoalRef};
use crate::validate::{
    validate_hours, validate_progress, validate_title, validate_total_goal, validate_weekly_goal,
    validate_weeks,
};

/// Persistent store for Goal records.
pub struct GoalStore {
    path: PathBuf,
}

impl GoalStore {
    /// Create a store backed by the given data file.
    ///
    /// Nothing is touched on disk until the first operation; a missing file
    /// is then created holding an empty array.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Add a new goal with no sessions and persist it.
    pub fn create(&self, title: &str, weekly_goal: f64, weeks: u32) -> Result<Goal, GoalError> {
        let mut goals = self.load()?;

        let title = validate_title(&goals, title)?;
        let weekly_goal = validate_weekly_goal(weekly_goal)?;
        let weeks = validate_weeks(weeks)?;
        validate_total_goal(weekly_goal, weeks)?;

        let goal = Goal::new(title, weekly_goal, weeks);
        goals.push(goal.clone());
        self.save(&goals)?;

        tracing::info!(title = %goal.title(), total_goal = goal.total_goal(), "goal created");
        Ok(goal)
    }

    /// Append a study session to a goal and persist it.
    ///
    /// The caller decides what to do when the returned goal
    /// [`is_complete`](Goal::is_complete).
    pub fn log_session(&self, goal_ref: &GoalRef, hours: f64) -> Result<Goal, GoalError> {
        let mut goals = self.load()?;
        let idx = Self::resolve(&goals, goal_ref)?;
        let hours = validate_hours(hours)?;
        validate_progress(&goals[idx], hours)?;

        let goal = &mut goals[idx];
        goal.push_session(hours);
        let updated = goal.clone();
        self.save(&goals)?;

        tracing::info!(
            title = %updated.title(),
            hours,
            progress = updated.progress(),
            "session logged"
        );
        Ok(updated)
    }

    /// Remove a goal entirely and return the removed record.
    pub fn delete(&self, goal_ref: &GoalRef) -> Result<Goal, GoalError> {
        let mut goals = self.load()?;
        let idx = Self::resolve(&goals, goal_ref)?;

        let removed = goals.remove(idx);
        self.save(&goals)?;

        tracing::info!(title = %removed.title(), "goal deleted");
        Ok(removed)
    }

    /// All goals in the order they were created.
    pub fn list(&self) -> Result<Vec<Goal>, GoalError> {
        self.load()
    }

    /// Look up a single goal without modifying anything.
    pub fn get(&self, goal_ref: &GoalRef) -> Result<Option<Goal>, GoalError> {
        let mut goals = self.load()?;
        Ok(goal_ref.resolve(&goals).map(|idx| goals.swap_remove(idx)))
    }

    fn resolve(goals: &[Goal], goal_ref: &GoalRef) -> Result<usize, GoalError> {
        goal_ref
            .resolve(goals)
            .ok_or_else(|| GoalError::NotFound(goal_ref.to_string()))
    }

    /// Read the whole collection, creating an empty file on first access.
    fn load(&self) -> Result<Vec<Goal>, GoalError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "data file missing, initializing");
            self.save(&[])?;
            return Ok(Vec::new());
        }
        let json = fs::read_to_string(&self.path).map_err(|source| GoalError::IoError {
            path: self.path.display().to_string(),
            source,
        })?;
        let goals: Vec<Goal> = serde_json::from_str(&json)?;
        tracing::debug!(path = %self.path.display(), count = goals.len(), "loaded goals");
        Ok(goals)
    }

    /// Write the whole collection, replacing the previous file contents.
    fn save(&self, goals: &[Goal]) -> Result<(), GoalError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| GoalError::IoError {
                path: parent.display().to_string(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(goals)?;
        fs::write(&self.path, json).map_err(|source| GoalError::IoError {
            path: self.path.display().to_string(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), count = goals.len(), "saved goals");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use tempfile::tempdir;

    fn titles(goals: &[Goal]) -> Vec<&str> {
        goals.iter().map(|g| g.title()).collect()
    }

    #[test]
    fn list_on_empty_store_is_empty() {
        let dir = tempdir().unwrap();
        let store = GoalStore::new(dir.path().join("study-tracker.json"));

        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn first_access_creates_empty_array_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("study-tracker.json");
        let store = GoalStore::new(&path);

        store.list().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn create_computes_total_and_persists() {
        let dir = tempdir().unwrap();
        let store = GoalStore::new(dir.path().join("goals.json"));

        let goal = store.create("Rust", 6.0, 4).unwrap();
        assert_eq!(goal.title(), "Rust");
        assert_eq!(goal.total_goal(), 24.0);
        assert!(goal.sessions().is_empty());

        let listed = store.list().unwrap();
        assert_eq!(listed, vec![goal]);
    }

    #[test]
    fn create_rejects_case_insensitive_duplicate() {
        let dir = tempdir().unwrap();
        let store = GoalStore::new(dir.path().join("goals.json"));

        store.create("Math", 5.0, 2).unwrap();
        let result = store.create("math", 3.0, 1);
        assert!(matches!(
            result,
            Err(GoalError::Validation(ValidationError::DuplicateTitle(_)))
        ));
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn create_rejects_invalid_fields() {
        let dir = tempdir().unwrap();
        let store = GoalStore::new(dir.path().join("goals.json"));

        assert!(matches!(
            store.create("", 5.0, 2),
            Err(GoalError::Validation(ValidationError::EmptyTitle))
        ));
        assert!(matches!(
            store.create("X", -1.0, 2),
            Err(GoalError::Validation(ValidationError::NonPositiveWeeklyGoal(_)))
        ));
        assert!(matches!(
            store.create("X", 5.0, 0),
            Err(GoalError::Validation(ValidationError::NonPositiveWeeks))
        ));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn log_session_appends_and_recomputes() {
        let dir = tempdir().unwrap();
        let store = GoalStore::new(dir.path().join("goals.json"));
        store.create("Math", 5.0, 2).unwrap();

        let goal = store.log_session(&GoalRef::Position(0), 3.0).unwrap();
        assert_eq!(goal.sessions(), &[3.0]);
        assert_eq!(goal.progress(), 3.0);

        let goal = store.log_session(&"math".into(), 1.5).unwrap();
        assert_eq!(goal.sessions(), &[3.0, 1.5]);
        assert_eq!(goal.progress(), 4.5);

        let reloaded = store.get(&GoalRef::Position(0)).unwrap().unwrap();
        assert_eq!(reloaded.progress(), 4.5);
    }

    #[test]
    fn log_session_on_missing_goal_is_not_found() {
        let dir = tempdir().unwrap();
        let store = GoalStore::new(dir.path().join("goals.json"));
        store.create("Math", 5.0, 2).unwrap();

        assert!(matches!(
            store.log_session(&GoalRef::Position(3), 1.0),
            Err(GoalError::NotFound(_))
        ));
        assert!(matches!(
            store.log_session(&"History".into(), 1.0),
            Err(GoalError::NotFound(_))
        ));
    }

    #[test]
    fn log_session_rejects_non_positive_hours() {
        let dir = tempdir().unwrap();
        let store = GoalStore::new(dir.path().join("goals.json"));
        store.create("Math", 5.0, 2).unwrap();

        assert!(matches!(
            store.log_session(&GoalRef::Position(0), 0.0),
            Err(GoalError::Validation(ValidationError::NonPositiveHours(_)))
        ));
        assert!(store.list().unwrap()[0].sessions().is_empty());
    }

    #[test]
    fn create_rejects_total_goal_overflow() {
        let dir = tempdir().unwrap();
        let store = GoalStore::new(dir.path().join("goals.json"));

        assert!(matches!(
            store.create("Huge", 1e308, 10),
            Err(GoalError::Validation(ValidationError::TotalGoalOverflow { .. }))
        ));
        // The file is still readable and untouched.
        assert!(store.list().unwrap().is_empty());
        assert!(!fs::read_to_string(store.path.as_path()).unwrap().contains("null"));
    }

    #[test]
    fn log_session_rejects_progress_overflow() {
        let dir = tempdir().unwrap();
        let store = GoalStore::new(dir.path().join("goals.json"));
        store.create("Math", 5.0, 2).unwrap();

        store.log_session(&GoalRef::Position(0), 1e308).unwrap();
        assert!(matches!(
            store.log_session(&GoalRef::Position(0), 1e308),
            Err(GoalError::Validation(ValidationError::ProgressOverflow { .. }))
        ));

        let goals = store.list().unwrap();
        assert_eq!(goals[0].sessions(), &[1e308]);
        assert!(goals[0].progress().is_finite());
    }

    #[test]
    fn delete_removes_only_target() {
        let dir = tempdir().unwrap();
        let store = GoalStore::new(dir.path().join("goals.json"));
        store.create("A", 1.0, 1).unwrap();
        store.create("B", 2.0, 2).unwrap();
        store.create("C", 3.0, 3).unwrap();
        store.log_session(&"C".into(), 4.0).unwrap();

        let removed = store.delete(&GoalRef::Position(1)).unwrap();
        assert_eq!(removed.title(), "B");

        let remaining = store.list().unwrap();
        assert_eq!(titles(&remaining), vec!["A", "C"]);
        assert_eq!(remaining[1].sessions(), &[4.0]);
        assert_eq!(remaining[1].total_goal(), 9.0);
    }

    #[test]
    fn delete_missing_goal_is_not_found() {
        let dir = tempdir().unwrap();
        let store = GoalStore::new(dir.path().join("goals.json"));

        assert!(matches!(
            store.delete(&GoalRef::Position(0)),
            Err(GoalError::NotFound(_))
        ));
    }

    #[test]
    fn corrupt_file_is_serialization_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("goals.json");
        fs::write(&path, "{ not json").unwrap();
        let store = GoalStore::new(&path);

        assert!(matches!(
            store.list(),
            Err(GoalError::SerializationError(_))
        ));
    }

    #[test]
    fn reads_file_written_by_hand() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("goals.json");
        fs::write(
            &path,
            r#"[
  {
    "title": "Spanish",
    "weeklyGoal": 3,
    "weeks": 4,
    "totalGoal": 12,
    "progress": 5,
    "sessions": [2, 3]
  }
]"#,
        )
        .unwrap();
        let store = GoalStore::new(&path);

        let goals = store.list().unwrap();
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0].weekly_goal(), 3.0);
        assert_eq!(goals[0].progress(), 5.0);
        assert_eq!(goals[0].percent_label(), "41.67");
    }
}
