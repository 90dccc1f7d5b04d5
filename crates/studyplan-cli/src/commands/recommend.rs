use std::path::PathBuf;

use clap::Subcommand;
use studyplan_core::{Config, RecommendationEngine, TaskPriority};

#[derive(Subcommand)]
pub enum RecommendAction {
    /// Top recommendations for a student
    List {
        /// Student profile JSON file
        #[arg(long)]
        student: PathBuf,
        /// Maximum number of recommendations
        #[arg(long)]
        limit: Option<usize>,
        /// Exact subject filter (e.g. "Computer Science")
        #[arg(long)]
        subject: Option<String>,
    },
    /// Recommendations that fit a stretch of free time
    FreeTime {
        /// Student profile JSON file
        #[arg(long)]
        student: PathBuf,
        /// Available minutes
        #[arg(long)]
        minutes: u32,
        /// Maximum number of recommendations
        #[arg(long)]
        limit: Option<usize>,
    },
    /// All recommendations at a given priority
    ByPriority {
        /// Student profile JSON file
        #[arg(long)]
        student: PathBuf,
        /// high, medium, or low
        #[arg(long)]
        priority: String,
    },
}

pub fn run(action: RecommendAction) -> super::CliResult {
    let config = Config::load_or_default();
    let engine = RecommendationEngine::new(super::load_catalog(&config)?);

    match action {
        RecommendAction::List {
            student,
            limit,
            subject,
        } => {
            let student = super::load_student(&student)?;
            let limit = limit.unwrap_or(config.recommendations.default_limit);
            let recommendations = engine.recommend(&student, limit, subject.as_deref());
            println!("{}", serde_json::to_string_pretty(&recommendations)?);
        }
        RecommendAction::FreeTime {
            student,
            minutes,
            limit,
        } => {
            let student = super::load_student(&student)?;
            let limit = limit.unwrap_or(config.recommendations.free_time_limit);
            let recommendations = engine.recommend_for_free_time(&student, minutes, limit);
            println!("{}", serde_json::to_string_pretty(&recommendations)?);
        }
        RecommendAction::ByPriority { student, priority } => {
            let student = super::load_student(&student)?;
            let priority: TaskPriority = priority.parse()?;
            let recommendations = engine.recommend_by_priority(&student, priority);
            println!("{}", serde_json::to_string_pretty(&recommendations)?);
        }
    }
    Ok(())
}
