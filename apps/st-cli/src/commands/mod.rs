// commands — Store operations plus the output and events around them.
//
// Both the interactive menu and the one-shot subcommands go through the
// functions here, so a goal logged either way prints the same lines and
// emits the same events.

pub mod goal;
pub mod menu;

use st_goal::{EventDispatcher, GoalError, GoalRef, GoalStore, LogSink, TrackerEvent};

use crate::config::{DisplayConfig, TrackerConfig};
use crate::prompt::Prompter;
use crate::render::{goal_report, single_goal_report, Tone};

/// The store, its event sinks, and display settings for one run.
pub struct Tracker {
    pub store: GoalStore,
    pub events: EventDispatcher,
    pub display: DisplayConfig,
}

impl Tracker {
    pub fn from_config(config: &TrackerConfig) -> Self {
        let mut events = EventDispatcher::new();
        if let Some(ref log) = config.events_log {
            events.add_sink(Box::new(LogSink::new(log)));
        }
        Self {
            store: GoalStore::new(&config.data_file),
            events,
            display: config.display.clone(),
        }
    }
}

/// Create a goal and announce it. Validation failures propagate to the caller.
pub fn add_goal(
    tracker: &Tracker,
    prompt: &mut dyn Prompter,
    title: &str,
    weekly_goal: f64,
    weeks: u32,
) -> anyhow::Result<()> {
    let goal = tracker.store.create(title, weekly_goal, weeks)?;
    tracker.events.dispatch(&TrackerEvent::goal_created(&goal));
    prompt.say(Tone::Success, "Goal added successfully!")?;
    Ok(())
}

/// Log hours against a goal, congratulating when the goal is reached.
pub fn log_session(
    tracker: &Tracker,
    prompt: &mut dyn Prompter,
    goal_ref: &GoalRef,
    hours: f64,
) -> anyhow::Result<()> {
    let goal = tracker.store.log_session(goal_ref, hours)?;
    tracker
        .events
        .dispatch(&TrackerEvent::session_logged(&goal, hours));
    prompt.say(
        Tone::Success,
        &format!("Logged {} hours for \"{}\".", hours, goal.title()),
    )?;

    if goal.is_complete() {
        tracker.events.dispatch(&TrackerEvent::goal_completed(&goal));
        prompt.say(Tone::Info, "🎉 Congratulations! You've achieved your goal!")?;
    }
    Ok(())
}

/// Remove a goal and confirm.
pub fn delete_goal(
    tracker: &Tracker,
    prompt: &mut dyn Prompter,
    goal_ref: &GoalRef,
) -> anyhow::Result<()> {
    let removed = tracker.store.delete(goal_ref)?;
    tracker.events.dispatch(&TrackerEvent::goal_deleted(&removed));
    prompt.say(Tone::Error, &format!("Deleted goal \"{}\".", removed.title()))?;
    Ok(())
}

/// Print every goal with its progress bar.
pub fn view_progress(tracker: &Tracker, prompt: &mut dyn Prompter) -> anyhow::Result<()> {
    let goals = tracker.store.list()?;
    if goals.is_empty() {
        prompt.say(Tone::Warning, "No goals found.")?;
        return Ok(());
    }

    for (i, goal) in goals.iter().enumerate() {
        for (tone, line) in goal_report(i + 1, goal, tracker.display.bar_width) {
            prompt.say(tone, &line)?;
        }
    }
    Ok(())
}

/// Print one goal's progress. An unknown reference is `NotFound`.
pub fn show_goal(
    tracker: &Tracker,
    prompt: &mut dyn Prompter,
    goal_ref: &GoalRef,
) -> anyhow::Result<()> {
    let goal = tracker
        .store
        .get(goal_ref)?
        .ok_or_else(|| GoalError::NotFound(goal_ref.to_string()))?;
    for (tone, line) in single_goal_report(&goal, tracker.display.bar_width) {
        prompt.say(tone, &line)?;
    }
    Ok(())
}
