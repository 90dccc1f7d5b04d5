//! Recommendation engine: ranks catalog tasks against a student profile.

use serde::{Deserialize, Serialize};

use super::scoring::{self, ScoreWeights};
use crate::catalog::{Task, TaskCatalog, TaskPriority};
use crate::student::Student;

/// A catalog task together with its computed fit for one student.
///
/// Created fresh on every scoring call and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRecommendation {
    #[serde(flatten)]
    pub task: Task,
    /// 0-100, how well the task matches the student
    pub match_score: u8,
    /// Human-readable justification for the score, distinct from the
    /// task's own catalog rationale
    pub adaptive_reason: String,
}

/// Scores and ranks the task catalog for student profiles.
///
/// An explicit, constructed service: callers own their engine instance and
/// there is no process-wide singleton.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    catalog: TaskCatalog,
    weights: ScoreWeights,
}

impl RecommendationEngine {
    /// Create an engine over a catalog with the standard weights.
    pub fn new(catalog: TaskCatalog) -> Self {
        Self {
            catalog,
            weights: ScoreWeights::standard(),
        }
    }

    /// Create with custom weights
    pub fn with_weights(catalog: TaskCatalog, weights: ScoreWeights) -> Self {
        Self { catalog, weights }
    }

    pub fn catalog(&self) -> &TaskCatalog {
        &self.catalog
    }

    pub fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// Top recommendations for a student, sorted by score descending.
    ///
    /// The sort is stable: tasks with equal scores keep their catalog order.
    /// An optional exact-match subject filter narrows the candidate pool.
    /// An empty catalog yields an empty list.
    pub fn recommend(
        &self,
        student: &Student,
        limit: usize,
        subject: Option<&str>,
    ) -> Vec<TaskRecommendation> {
        let mut recommendations: Vec<TaskRecommendation> = self
            .catalog
            .tasks()
            .iter()
            .filter(|task| subject.map_or(true, |s| task.subject == s))
            .map(|task| self.recommendation(task, student))
            .collect();

        recommendations.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        recommendations.truncate(limit);
        recommendations
    }

    /// Recommendations that fit into an open stretch of `available_minutes`.
    ///
    /// A filtered subset of [`recommend`](Self::recommend): ordering is
    /// preserved and every returned task's duration fits the available time.
    pub fn recommend_for_free_time(
        &self,
        student: &Student,
        available_minutes: u32,
        limit: usize,
    ) -> Vec<TaskRecommendation> {
        self.recommend(student, limit, None)
            .into_iter()
            .filter(|rec| rec.task.duration <= available_minutes)
            .collect()
    }

    /// All recommendations at a given priority, sorted by score descending.
    pub fn recommend_by_priority(
        &self,
        student: &Student,
        priority: TaskPriority,
    ) -> Vec<TaskRecommendation> {
        let mut recommendations: Vec<TaskRecommendation> = self
            .catalog
            .tasks()
            .iter()
            .filter(|task| task.priority == priority)
            .map(|task| self.recommendation(task, student))
            .collect();

        recommendations.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        recommendations
    }

    fn recommendation(&self, task: &Task, student: &Student) -> TaskRecommendation {
        TaskRecommendation {
            match_score: scoring::match_score(task, student, self.weights),
            adaptive_reason: scoring::reason(task, student),
            task: task.clone(),
        }
    }
}
