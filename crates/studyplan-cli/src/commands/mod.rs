//! CLI subcommand implementations and shared loading helpers.

pub mod catalog;
pub mod config;
pub mod recommend;
pub mod routine;

use std::path::Path;

use studyplan_core::{
    Config, DayTemplate, RecommendationEngine, RoutineGenerator, Student, TaskCatalog,
};

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Load a student profile from a JSON file.
pub fn load_student(path: &Path) -> Result<Student, Box<dyn std::error::Error>> {
    let data = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// The configured custom catalog, or the built-in one.
pub fn load_catalog(config: &Config) -> Result<TaskCatalog, Box<dyn std::error::Error>> {
    match &config.catalog_path {
        Some(path) => Ok(TaskCatalog::load(path)?),
        None => Ok(TaskCatalog::builtin()),
    }
}

/// The configured custom day template, or the built-in one.
pub fn load_template(config: &Config) -> Result<DayTemplate, Box<dyn std::error::Error>> {
    match &config.template_path {
        Some(path) => Ok(DayTemplate::load(path)?),
        None => Ok(DayTemplate::builtin()),
    }
}

/// A routine generator wired up from the configuration.
pub fn build_generator(config: &Config) -> Result<RoutineGenerator, Box<dyn std::error::Error>> {
    let engine = RecommendationEngine::new(load_catalog(config)?);
    let template = load_template(config)?;
    Ok(RoutineGenerator::new(engine, template).with_config(config.generator_config()))
}
