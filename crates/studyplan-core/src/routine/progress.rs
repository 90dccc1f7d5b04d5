//! Sources of goal completion state.
//!
//! The prototype this engine replaces faked goal completion with a random
//! count. Completion is injected through a trait instead, keeping routine
//! generation deterministic and testable.

use chrono::NaiveDate;

use crate::student::Student;

/// Supplies how many goal blocks a student has completed on a given day.
pub trait GoalProgressSource {
    fn completed_goals(&self, student: &Student, date: NaiveDate) -> u32;
}

/// Default source: no goals completed yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCompletedGoals;

impl GoalProgressSource for NoCompletedGoals {
    fn completed_goals(&self, _student: &Student, _date: NaiveDate) -> u32 {
        0
    }
}

/// Fixed completion count, mainly for tests and demos.
#[derive(Debug, Clone, Copy)]
pub struct FixedProgress(pub u32);

impl GoalProgressSource for FixedProgress {
    fn completed_goals(&self, _student: &Student, _date: NaiveDate) -> u32 {
        self.0
    }
}
