//! Match scoring between tasks and student profiles.
//!
//! A task's match score is an additive blend of four signals, capped at 100:
//!
//! | Signal | Points |
//! |--------|--------|
//! | Subject appears in the student's interests | 40 |
//! | A career goal's keywords match the title or subject | 30 |
//! | A strength's task kinds include the task's kind | 20 |
//! | Task priority | high 10 / medium 5 / low 0 |
//!
//! Goal and strength matching short-circuit on the first aligned entry, so
//! multiple matching goals never double-count.

use serde::{Deserialize, Serialize};

use crate::catalog::{Task, TaskPriority};
use crate::student::{CareerGoal, Strength, Student};

/// Highest score a task can receive.
pub const MAX_SCORE: u8 = 100;

/// Additive weights for each scoring signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Points for a subject interest match
    pub interest: u8,
    /// Points for career goal alignment
    pub career_goal: u8,
    /// Points for strength alignment
    pub strength: u8,
    /// Points for high task priority
    pub high_priority: u8,
    /// Points for medium task priority
    pub medium_priority: u8,
}

impl ScoreWeights {
    /// The standard 40/30/20/10/5 weighting.
    pub fn standard() -> Self {
        Self {
            interest: 40,
            career_goal: 30,
            strength: 20,
            high_priority: 10,
            medium_priority: 5,
        }
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::standard()
    }
}

/// First career goal whose keyword vocabulary matches the task's title or
/// subject as a substring. Unrecognized goal names are skipped.
pub fn aligned_goal(task: &Task, student: &Student) -> Option<CareerGoal> {
    student
        .career_goals
        .iter()
        .filter_map(|name| CareerGoal::from_name(name))
        .find(|goal| {
            goal.subject_keywords()
                .iter()
                .any(|keyword| task.title.contains(keyword) || task.subject.contains(keyword))
        })
}

/// First strength whose task kinds include the task's kind. Unrecognized
/// strength names are skipped.
pub fn aligned_strength(task: &Task, student: &Student) -> Option<Strength> {
    student
        .strengths
        .iter()
        .filter_map(|name| Strength::from_name(name))
        .find(|strength| strength.task_kinds().contains(&task.kind))
}

fn interest_match(task: &Task, student: &Student) -> bool {
    student.interests.iter().any(|interest| interest == &task.subject)
}

/// Compute the 0-100 match score for a task against a student profile.
pub fn match_score(task: &Task, student: &Student, weights: ScoreWeights) -> u8 {
    let mut score: u32 = 0;

    if interest_match(task, student) {
        score += weights.interest as u32;
    }
    if aligned_goal(task, student).is_some() {
        score += weights.career_goal as u32;
    }
    if aligned_strength(task, student).is_some() {
        score += weights.strength as u32;
    }
    score += match task.priority {
        TaskPriority::High => weights.high_priority as u32,
        TaskPriority::Medium => weights.medium_priority as u32,
        TaskPriority::Low => 0,
    };

    score.min(MAX_SCORE as u32) as u8
}

/// Build the human-readable justification for recommending a task.
///
/// Clauses appear in a fixed order (interest, first aligned goal, first
/// aligned strength, high priority) joined with "and"; a generic sentence is
/// used when nothing applies.
pub fn reason(task: &Task, student: &Student) -> String {
    let mut clauses = Vec::new();

    if interest_match(task, student) {
        clauses.push(format!("matches your interest in {}", task.subject));
    }
    if let Some(goal) = aligned_goal(task, student) {
        clauses.push(format!("aligns with your career goal: {}", goal.name()));
    }
    if let Some(strength) = aligned_strength(task, student) {
        clauses.push(format!("leverages your strength in {}", strength.name()));
    }
    if task.priority == TaskPriority::High {
        clauses.push("high priority for academic success".to_string());
    }

    if clauses.is_empty() {
        "recommended for well-rounded academic development".to_string()
    } else {
        format!("Recommended because it {}", clauses.join(" and "))
    }
}
