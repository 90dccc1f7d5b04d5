//! Daily routine generation.
//!
//! This module provides:
//! - Greedy packing of recommended tasks into the free blocks of a day
//! - Goal blocks derived from a student's career goals
//! - The [`RoutineGenerator`] composing daily and weekly routines

mod generator;
mod goal;
mod packing;
mod progress;

pub use generator::{
    total_free_minutes, total_study_minutes, DailyRoutine, GeneratorConfig, GoalProgress,
    RoutineGenerator,
};
pub use goal::goal_blocks;
pub use packing::{pack_free_slots, DEFAULT_MIN_REMAINDER_MINUTES};
pub use progress::{FixedProgress, GoalProgressSource, NoCompletedGoals};
