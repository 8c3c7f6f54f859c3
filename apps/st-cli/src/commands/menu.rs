// menu.rs — The interactive main menu.
//
// Loops on "What do you want to do?" until Exit or end of input. Every field
// is parsed and validated as soon as it is typed; a bad value is explained
// and asked again, so store validation errors never reach the user here.

use st_goal::validate::{validate_hours, validate_title, validate_weekly_goal, validate_weeks};
use st_goal::{GoalError, GoalRef, ValidationError};

use super::Tracker;
use crate::prompt::{ask, PromptError, Prompter};
use crate::render::{goal_choices, Tone};

/// Main menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddGoal,
    LogSession,
    ViewProgress,
    DeleteGoal,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 5] = [
        MenuAction::AddGoal,
        MenuAction::LogSession,
        MenuAction::ViewProgress,
        MenuAction::DeleteGoal,
        MenuAction::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::AddGoal => "Add a new goal",
            MenuAction::LogSession => "Log a study session",
            MenuAction::ViewProgress => "View progress",
            MenuAction::DeleteGoal => "Delete a goal",
            MenuAction::Exit => "Exit",
        }
    }
}

/// Run the menu until the user exits. End of input counts as Exit.
pub fn run(tracker: &Tracker, prompt: &mut dyn Prompter) -> anyhow::Result<()> {
    let labels: Vec<String> = MenuAction::ALL
        .iter()
        .map(|a| a.label().to_string())
        .collect();

    loop {
        let action = match prompt.select("What do you want to do?", &labels) {
            Ok(idx) => MenuAction::ALL[idx],
            Err(PromptError::Closed) => MenuAction::Exit,
            Err(e) => return Err(e.into()),
        };
        tracing::debug!(?action, "menu selection");

        let result = match action {
            MenuAction::AddGoal => add_goal(tracker, prompt),
            MenuAction::LogSession => log_session(tracker, prompt),
            MenuAction::ViewProgress => super::view_progress(tracker, prompt),
            MenuAction::DeleteGoal => delete_goal(tracker, prompt),
            MenuAction::Exit => {
                prompt.say(Tone::Info, "Goodbye!")?;
                return Ok(());
            }
        };

        if let Err(e) = result {
            if matches!(e.downcast_ref::<PromptError>(), Some(PromptError::Closed)) {
                prompt.say(Tone::Info, "Goodbye!")?;
                return Ok(());
            }
            return Err(e);
        }
    }
}

fn add_goal(tracker: &Tracker, prompt: &mut dyn Prompter) -> anyhow::Result<()> {
    let existing = tracker.store.list()?;

    let title = ask(prompt, "Enter your goal title:", |s| {
        validate_title(&existing, s)
            .map(str::to_string)
            .map_err(|e| e.to_string())
    })?;
    let weekly_goal = ask(prompt, "Enter weekly study goal (hours):", parse_weekly_goal)?;
    let weeks = ask(prompt, "Enter duration of goal (weeks):", parse_weeks)?;

    let result = super::add_goal(tracker, prompt, &title, weekly_goal, weeks);
    recover_rejected(prompt, result)
}

fn log_session(tracker: &Tracker, prompt: &mut dyn Prompter) -> anyhow::Result<()> {
    let goals = tracker.store.list()?;
    if goals.is_empty() {
        prompt.say(Tone::Warning, "No goals found. Add a goal first.")?;
        return Ok(());
    }

    let idx = prompt.select("Select the goal to log progress:", &goal_choices(&goals))?;
    let hours = ask(prompt, "Enter hours studied:", parse_hours)?;

    let result = super::log_session(tracker, prompt, &GoalRef::Position(idx), hours);
    recover_rejected(prompt, result)
}

fn delete_goal(tracker: &Tracker, prompt: &mut dyn Prompter) -> anyhow::Result<()> {
    let goals = tracker.store.list()?;
    if goals.is_empty() {
        prompt.say(Tone::Warning, "No goals found to delete.")?;
        return Ok(());
    }

    let idx = prompt.select("Select the goal to delete:", &goal_choices(&goals))?;
    let result = super::delete_goal(tracker, prompt, &GoalRef::Position(idx));
    recover_rejected(prompt, result)
}

/// Report a goal that vanished or input the store refused, then carry on.
/// Anything else (I/O, corrupt data) stays fatal.
fn recover_rejected(prompt: &mut dyn Prompter, result: anyhow::Result<()>) -> anyhow::Result<()> {
    match result {
        Err(e) => match e.downcast_ref::<GoalError>() {
            Some(GoalError::NotFound(_)) | Some(GoalError::Validation(_)) => {
                tracing::warn!("store rejected menu operation: {}", e);
                prompt.say(Tone::Error, &format!(">> {}", e))?;
                Ok(())
            }
            _ => Err(e),
        },
        ok => ok,
    }
}

fn parse_number(input: &str, not_a_number: &str) -> Result<f64, String> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| !n.is_nan())
        .ok_or_else(|| not_a_number.to_string())
}

fn parse_weekly_goal(input: &str) -> Result<f64, String> {
    let hours = parse_number(input, "Weekly goal should be a number.")?;
    validate_weekly_goal(hours).map_err(|e| e.to_string())
}

fn parse_weeks(input: &str) -> Result<u32, String> {
    let weeks = parse_number(input, "Duration should be a number.")?;
    if weeks <= 0.0 {
        return Err(ValidationError::NonPositiveWeeks.to_string());
    }
    if weeks.fract() != 0.0 || weeks > f64::from(u32::MAX) {
        return Err("Duration should be a whole number of weeks.".to_string());
    }
    validate_weeks(weeks as u32).map_err(|e| e.to_string())
}

fn parse_hours(input: &str) -> Result<f64, String> {
    let hours = parse_number(input, "Hours should be a number.")?;
    validate_hours(hours).map_err(|e| e.to_string())
}
