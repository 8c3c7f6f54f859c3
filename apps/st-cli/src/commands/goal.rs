// goal.rs — One-shot subcommands: add, log, view, show, delete.
//
// Same store operations as the menu, driven from arguments instead of
// prompts. Rejected input is an error here, so the process exits non-zero.

use clap::Subcommand;
use st_goal::GoalRef;

use super::Tracker;
use crate::prompt::Prompter;

#[derive(Subcommand)]
pub enum GoalCommands {
    /// Add a new goal.
    Add {
        /// Goal title (e.g., "Linear algebra").
        title: String,
        /// Target study hours per week.
        #[arg(long)]
        weekly: f64,
        /// Duration of the goal in weeks.
        #[arg(long)]
        weeks: u32,
    },
    /// Log a study session against a goal.
    Log {
        /// Goal title (case-insensitive).
        title: String,
        /// Hours studied.
        hours: f64,
    },
    /// Show progress for every goal.
    View,
    /// Show progress for a single goal.
    Show {
        /// Goal title (case-insensitive).
        title: String,
    },
    /// Delete a goal.
    Delete {
        /// Goal title (case-insensitive).
        title: String,
    },
}

pub fn execute(
    cmd: &GoalCommands,
    tracker: &Tracker,
    prompt: &mut dyn Prompter,
) -> anyhow::Result<()> {
    match cmd {
        GoalCommands::Add {
            title,
            weekly,
            weeks,
        } => super::add_goal(tracker, prompt, title, *weekly, *weeks),
        GoalCommands::Log { title, hours } => {
            super::log_session(tracker, prompt, &GoalRef::from(title.as_str()), *hours)
        }
        GoalCommands::View => super::view_progress(tracker, prompt),
        GoalCommands::Show { title } => {
            super::show_goal(tracker, prompt, &GoalRef::from(title.as_str()))
        }
        GoalCommands::Delete { title } => {
            super::delete_goal(tracker, prompt, &GoalRef::from(title.as_str()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::tracker_in;
    use crate::prompt::testing::mock_prompt;
    use st_goal::GoalError;
    use tempfile::tempdir;

    #[test]
    fn add_log_delete_by_title() {
        let dir = tempdir().unwrap();
        let tracker = tracker_in(dir.path());
        let (mut prompt, output) = mock_prompt("");

        let add = GoalCommands::Add {
            title: "Statistics".into(),
            weekly: 3.0,
            weeks: 4,
        };
        execute(&add, &tracker, &mut prompt).unwrap();

        let log = GoalCommands::Log {
            title: "STATISTICS".into(),
            hours: 2.5,
        };
        execute(&log, &tracker, &mut prompt).unwrap();
        assert_eq!(tracker.store.list().unwrap()[0].progress(), 2.5);

        execute(&GoalCommands::View, &tracker, &mut prompt).unwrap();
        assert!(output.contents().contains("Progress: 2.5 hours (20.83%)"));

        let show = GoalCommands::Show {
            title: "statistics".into(),
        };
        execute(&show, &tracker, &mut prompt).unwrap();
        assert_eq!(output.contents().matches("(20.83%)").count(), 2);

        let delete = GoalCommands::Delete {
            title: "statistics".into(),
        };
        execute(&delete, &tracker, &mut prompt).unwrap();
        assert!(tracker.store.list().unwrap().is_empty());
        assert!(output.contents().contains("Deleted goal \"Statistics\"."));
    }

    #[test]
    fn rejected_input_is_an_error() {
        let dir = tempdir().unwrap();
        let tracker = tracker_in(dir.path());
        let (mut prompt, _output) = mock_prompt("");

        let add = GoalCommands::Add {
            title: "Stats".into(),
            weekly: 3.0,
            weeks: 0,
        };
        let err = execute(&add, &tracker, &mut prompt).unwrap_err();
        assert_eq!(err.to_string(), "Duration should be a positive number.");

        let log = GoalCommands::Log {
            title: "Stats".into(),
            hours: 1.0,
        };
        let err = execute(&log, &tracker, &mut prompt).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GoalError>(),
            Some(GoalError::NotFound(_))
        ));
    }
}
