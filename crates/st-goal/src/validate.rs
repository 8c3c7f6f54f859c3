// validate.rs — Field checks shared by the store and the interactive prompts.
//
// The store runs every check again on create/log_session; prompts call the
// same functions per field so they can re-ask before anything is written.

use crate::error::ValidationError;
use crate::goal::Goal;

/// Check a candidate title against the goals already stored.
///
/// Returns the trimmed title. Duplicate detection ignores case.
pub fn validate_title<'a>(existing: &[Goal], title: &'a str) -> Result<&'a str, ValidationError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if existing.iter().any(|g| g.matches_title(title)) {
        return Err(ValidationError::DuplicateTitle(title.to_string()));
    }
    Ok(title)
}

pub fn validate_weekly_goal(hours: f64) -> Result<f64, ValidationError> {
    if hours.is_finite() && hours > 0.0 {
        Ok(hours)
    } else {
        Err(ValidationError::NonPositiveWeeklyGoal(hours))
    }
}

pub fn validate_weeks(weeks: u32) -> Result<u32, ValidationError> {
    if weeks == 0 {
        return Err(ValidationError::NonPositiveWeeks);
    }
    Ok(weeks)
}

/// Hours for a single study session.
pub fn validate_hours(hours: f64) -> Result<f64, ValidationError> {
    if hours.is_finite() && hours > 0.0 {
        Ok(hours)
    } else {
        Err(ValidationError::NonPositiveHours(hours))
    }
}

/// The product of two valid fields can still overflow to infinity.
pub fn validate_total_goal(weekly_goal: f64, weeks: u32) -> Result<f64, ValidationError> {
    let total = weekly_goal * f64::from(weeks);
    if total.is_finite() {
        Ok(total)
    } else {
        Err(ValidationError::TotalGoalOverflow { weekly_goal, weeks })
    }
}

/// Progress after adding `hours` to a goal, if it stays finite.
pub fn validate_progress(goal: &Goal, hours: f64) -> Result<f64, ValidationError> {
    let progress = goal.progress() + hours;
    if progress.is_finite() {
        Ok(progress)
    } else {
        Err(ValidationError::ProgressOverflow {
            progress: goal.progress(),
            hours,
        })
    }
}
