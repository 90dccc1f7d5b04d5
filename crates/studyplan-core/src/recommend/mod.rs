//! Task recommendation: match scoring and ranking.
//!
//! This module provides:
//! - Additive 0-100 match scoring between a task and a student profile
//! - Human-readable justifications for each score
//! - The [`RecommendationEngine`] that ranks a catalog for a student

mod engine;
mod scoring;

pub use engine::{RecommendationEngine, TaskRecommendation};
pub use scoring::{aligned_goal, aligned_strength, match_score, reason, ScoreWeights, MAX_SCORE};
