use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Subcommand;
use studyplan_core::Config;

#[derive(Subcommand)]
pub enum RoutineAction {
    /// Generate the routine for one day
    Daily {
        /// Student profile JSON file
        #[arg(long)]
        student: PathBuf,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Generate routines for seven consecutive days
    Weekly {
        /// Student profile JSON file
        #[arg(long)]
        student: PathBuf,
        /// Start date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        start: Option<NaiveDate>,
    },
    /// Rebuild a day's free time around career-goal-aligned tasks
    Optimize {
        /// Student profile JSON file
        #[arg(long)]
        student: PathBuf,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

pub fn run(action: RoutineAction) -> super::CliResult {
    let config = Config::load_or_default();
    let generator = super::build_generator(&config)?;

    match action {
        RoutineAction::Daily { student, date } => {
            let student = super::load_student(&student)?;
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let routine = generator.generate_daily(&student, date);
            println!("{}", serde_json::to_string_pretty(&routine)?);
        }
        RoutineAction::Weekly { student, start } => {
            let student = super::load_student(&student)?;
            let start = start.unwrap_or_else(|| Local::now().date_naive());
            let routines = generator.generate_weekly(&student, start);
            println!("{}", serde_json::to_string_pretty(&routines)?);
        }
        RoutineAction::Optimize { student, date } => {
            let student = super::load_student(&student)?;
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let routine = generator.generate_daily(&student, date);
            let optimized = generator.optimize_for_goals(&student, &routine);
            println!("{}", serde_json::to_string_pretty(&optimized)?);
        }
    }
    Ok(())
}
