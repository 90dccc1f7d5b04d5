//! # Studyplan Core Library
//!
//! This library provides the core business logic for studyplan, a student
//! guidance tool that turns a student profile and a fixed task catalog into
//! a ranked, time-boxed personal study plan. All operations are pure,
//! synchronous computations over in-memory data; the CLI binary is a thin
//! layer over the same core library.
//!
//! ## Architecture
//!
//! - **Recommendation Engine**: additive 0-100 match scoring between catalog
//!   tasks and a student profile, with human-readable justifications
//! - **Routine Generator**: greedy packing of high-priority recommendations
//!   into the free blocks of a base day template, plus career-goal blocks
//! - **Schedule**: "HH:MM" clock times, time-boxed items, and the base day
//! - **Config**: TOML-based application configuration
//!
//! ## Key Components
//!
//! - [`RecommendationEngine`]: scores and ranks catalog tasks
//! - [`RoutineGenerator`]: composes a [`DailyRoutine`] for a day or a week
//! - [`TaskCatalog`]: the read-only pool of study tasks
//! - [`Config`]: application configuration management

pub mod catalog;
pub mod config;
pub mod error;
pub mod recommend;
pub mod routine;
pub mod schedule;
pub mod student;

pub use catalog::{Task, TaskCatalog, TaskDifficulty, TaskKind, TaskPriority};
pub use config::Config;
pub use error::{ConfigError, CoreError, ValidationError};
pub use recommend::{RecommendationEngine, ScoreWeights, TaskRecommendation};
pub use routine::{
    DailyRoutine, GeneratorConfig, GoalProgress, GoalProgressSource, NoCompletedGoals,
    RoutineGenerator,
};
pub use schedule::{DayTemplate, ItemKind, ScheduleItem, TimeOfDay};
pub use student::{CareerGoal, Strength, Student};
