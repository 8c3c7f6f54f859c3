// render.rs — Text rendering for progress output.

use st_goal::Goal;

/// How a line of output should look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Success,
    Warning,
    Error,
    Info,
    Heading,
}

impl Tone {
    fn ansi(self) -> Option<&'static str> {
        match self {
            Tone::Plain => None,
            Tone::Success => Some("\x1b[32m"), // Green
            Tone::Warning => Some("\x1b[33m"), // Yellow
            Tone::Error => Some("\x1b[31m"),   // Red
            Tone::Info => Some("\x1b[34m"),    // Blue
            Tone::Heading => Some("\x1b[36m"), // Cyan
        }
    }
}

/// Wrap `text` in the tone's color, or return it untouched when color is off.
pub fn paint(tone: Tone, text: &str, color: bool) -> String {
    match tone.ansi() {
        Some(code) if color => format!("{code}{text}\x1b[0m"),
        _ => text.to_string(),
    }
}

/// Fixed-width bar scaled to `percent`, followed by the percentage.
///
/// Filled cells are clamped to the width, so goals past 100% show a full bar.
pub fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent / 100.0) * width as f64).round().clamp(0.0, width as f64) as usize;
    format!(
        "[{}{}] {:.2}%",
        "█".repeat(filled),
        "░".repeat(width - filled),
        percent
    )
}

/// Lines shown for one goal in the progress view. `position` is 1-based.
pub fn goal_report(position: usize, goal: &Goal, bar_width: usize) -> Vec<(Tone, String)> {
    report_under(format!("\n{}. {}", position, goal.title()), goal, bar_width)
}

/// Report for a goal looked up on its own, headed by the bare title.
pub fn single_goal_report(goal: &Goal, bar_width: usize) -> Vec<(Tone, String)> {
    report_under(goal.title().to_string(), goal, bar_width)
}

fn report_under(heading: String, goal: &Goal, bar_width: usize) -> Vec<(Tone, String)> {
    vec![
        (Tone::Heading, heading),
        (Tone::Plain, format!("Weekly Goal: {} hours", goal.weekly_goal())),
        (Tone::Plain, format!("Total Goal: {} hours", goal.total_goal())),
        (
            Tone::Plain,
            format!(
                "Progress: {} hours ({}%)",
                goal.progress(),
                goal.percent_label()
            ),
        ),
        (Tone::Plain, progress_bar(goal.progress_percent(), bar_width)),
    ]
}

/// Selection-list labels, e.g. `"1. Math"`.
pub fn goal_choices(goals: &[Goal]) -> Vec<String> {
    goals
        .iter()
        .enumerate()
        .map(|(i, g)| format!("{}. {}", i + 1, g.title()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_scales_to_width() {
        assert_eq!(
            progress_bar(25.0, 20),
            format!("[{}{}] 25.00%", "█".repeat(5), "░".repeat(15))
        );
        assert_eq!(progress_bar(0.0, 20), format!("[{}] 0.00%", "░".repeat(20)));
        assert_eq!(progress_bar(33.33, 10), format!("[███{}] 33.33%", "░".repeat(7)));
    }

    #[test]
    fn bar_clamps_past_full() {
        assert_eq!(progress_bar(150.0, 4), "[████] 150.00%");
    }

    #[test]
    fn paint_respects_color_flag() {
        assert_eq!(paint(Tone::Success, "ok", false), "ok");
        assert_eq!(paint(Tone::Success, "ok", true), "\x1b[32mok\x1b[0m");
        assert_eq!(paint(Tone::Plain, "ok", true), "ok");
    }

    #[test]
    fn report_and_choices_for_stored_goal() {
        let dir = tempfile::tempdir().unwrap();
        let store = st_goal::GoalStore::new(dir.path().join("goals.json"));
        store.create("Math", 10.0, 2).unwrap();
        let goal = store.log_session(&"Math".into(), 5.0).unwrap();

        let lines: Vec<String> = goal_report(1, &goal, 20)
            .into_iter()
            .map(|(_, line)| line)
            .collect();
        assert_eq!(lines[0], "\n1. Math");
        assert_eq!(lines[1], "Weekly Goal: 10 hours");
        assert_eq!(lines[2], "Total Goal: 20 hours");
        assert_eq!(lines[3], "Progress: 5 hours (25.00%)");
        assert!(lines[4].ends_with("] 25.00%"));

        let single = single_goal_report(&goal, 20);
        assert_eq!(single[0], (Tone::Heading, "Math".to_string()));
        assert_eq!(single[1..], goal_report(1, &goal, 20)[1..]);

        assert_eq!(goal_choices(&[goal]), vec!["1. Math".to_string()]);
    }
}
