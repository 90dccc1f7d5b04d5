//! Daily routine generation: packing recommendations around the base day.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::goal::goal_blocks;
use super::packing::{pack_free_slots, DEFAULT_MIN_REMAINDER_MINUTES};
use super::progress::{GoalProgressSource, NoCompletedGoals};
use crate::catalog::TaskPriority;
use crate::recommend::{aligned_goal, RecommendationEngine, TaskRecommendation};
use crate::schedule::{DayTemplate, ItemKind, ScheduleItem};
use crate::student::Student;

/// Aggregated goal completion for one routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub completed: u32,
    pub total: u32,
}

/// A generated, time-sorted plan for one day.
///
/// Constructed fresh per generation call; the schedule is sorted ascending
/// by start time and non-overlapping after packing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRoutine {
    pub date: NaiveDate,
    pub schedule: Vec<ScheduleItem>,
    /// Minutes across task and goal blocks
    pub total_study_time: u32,
    /// Minutes left in free blocks after packing
    pub total_free_time: u32,
    pub goal_progress: GoalProgress,
    /// The recommendations the day was built from
    pub recommendations: Vec<TaskRecommendation>,
}

/// Tunables for routine generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Recommendations requested from the engine per day
    pub candidate_limit: usize,
    /// High-priority candidates actually offered to the packer
    pub high_priority_cap: usize,
    /// Free minutes at or below which a shrunk block is dropped
    pub min_free_remainder_minutes: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            candidate_limit: 8,
            high_priority_cap: 3,
            min_free_remainder_minutes: DEFAULT_MIN_REMAINDER_MINUTES,
        }
    }
}

/// Composes daily routines from a recommendation engine and a day template.
///
/// The template is owned, read-only, and shared by every generated routine;
/// each output is an independent value.
pub struct RoutineGenerator {
    engine: RecommendationEngine,
    template: DayTemplate,
    config: GeneratorConfig,
    progress: Box<dyn GoalProgressSource>,
}

impl RoutineGenerator {
    /// Create a generator with default tunables and no completed goals.
    pub fn new(engine: RecommendationEngine, template: DayTemplate) -> Self {
        Self {
            engine,
            template,
            config: GeneratorConfig::default(),
            progress: Box::new(NoCompletedGoals),
        }
    }

    /// Set the generation tunables
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the goal completion source
    pub fn with_progress_source(
        mut self,
        source: impl GoalProgressSource + 'static,
    ) -> Self {
        self.progress = Box::new(source);
        self
    }

    pub fn engine(&self) -> &RecommendationEngine {
        &self.engine
    }

    pub fn template(&self) -> &DayTemplate {
        &self.template
    }

    /// Generate the routine for one day.
    ///
    /// High-priority recommendations (capped) are packed into the template's
    /// free blocks, goal blocks are appended, and the result is sorted by
    /// start time with study/free totals aggregated.
    pub fn generate_daily(&self, student: &Student, date: NaiveDate) -> DailyRoutine {
        let recommendations =
            self.engine
                .recommend(student, self.config.candidate_limit, None);

        let priority_tasks: Vec<TaskRecommendation> = recommendations
            .iter()
            .filter(|rec| rec.task.priority == TaskPriority::High)
            .take(self.config.high_priority_cap)
            .cloned()
            .collect();

        let mut schedule = pack_free_slots(
            self.template.items(),
            &priority_tasks,
            self.config.min_free_remainder_minutes,
        );

        let goals = goal_blocks(student);
        let total_goals = goals.len() as u32;
        schedule.extend(goals);
        schedule.sort_by_key(|item| item.start);

        let completed = self
            .progress
            .completed_goals(student, date)
            .min(total_goals);

        DailyRoutine {
            date,
            total_study_time: total_study_minutes(&schedule),
            total_free_time: total_free_minutes(&schedule),
            goal_progress: GoalProgress {
                completed,
                total: total_goals,
            },
            recommendations,
            schedule,
        }
    }

    /// Generate routines for seven consecutive days starting at `start`.
    pub fn generate_weekly(&self, student: &Student, start: NaiveDate) -> Vec<DailyRoutine> {
        (0..7)
            .map(|offset| self.generate_daily(student, start + Days::new(offset)))
            .collect()
    }

    /// Rebuild a routine's schedule around career-goal-aligned tasks only.
    ///
    /// Repacks the pristine template using the subset of the routine's
    /// recommendations whose title or subject matches the student's career
    /// goal keywords, without the priority filter or cap used in normal
    /// generation. Goal progress and recommendations carry over unchanged.
    pub fn optimize_for_goals(&self, student: &Student, routine: &DailyRoutine) -> DailyRoutine {
        let aligned: Vec<TaskRecommendation> = routine
            .recommendations
            .iter()
            .filter(|rec| aligned_goal(&rec.task, student).is_some())
            .cloned()
            .collect();

        let mut schedule = pack_free_slots(
            self.template.items(),
            &aligned,
            self.config.min_free_remainder_minutes,
        );
        schedule.sort_by_key(|item| item.start);

        DailyRoutine {
            date: routine.date,
            total_study_time: total_study_minutes(&schedule),
            total_free_time: total_free_minutes(&schedule),
            goal_progress: routine.goal_progress,
            recommendations: routine.recommendations.clone(),
            schedule,
        }
    }
}

/// Minutes spent in task and goal blocks.
pub fn total_study_minutes(schedule: &[ScheduleItem]) -> u32 {
    schedule
        .iter()
        .filter(|item| matches!(item.kind, ItemKind::Task | ItemKind::Goal))
        .filter_map(|item| item.estimated_duration)
        .sum()
}

/// Minutes left in free blocks.
pub fn total_free_minutes(schedule: &[ScheduleItem]) -> u32 {
    schedule
        .iter()
        .filter(|item| item.kind == ItemKind::Free)
        .filter_map(|item| item.estimated_duration)
        .sum()
}
