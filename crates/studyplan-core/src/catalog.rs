//! Task catalog: the fixed, read-only pool of study tasks that
//! recommendations are drawn from.
//!
//! The built-in catalog carries the standard set of subject tasks; a custom
//! catalog can be loaded from a JSON array of tasks instead. Tasks are never
//! created or deleted at runtime.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::error::{Result, ValidationError};

/// Task priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl FromStr for TaskPriority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Err(ValidationError::InvalidValue {
                field: "priority".to_string(),
                message: format!("expected high, medium, or low, got \"{other}\""),
            }),
        }
    }
}

/// Task difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskDifficulty {
    Easy,
    Medium,
    Hard,
}

impl TaskDifficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

/// Kind of work a task involves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Practice,
    Review,
    Project,
    Reading,
    Research,
}

impl TaskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Practice => "practice",
            Self::Review => "review",
            Self::Project => "project",
            Self::Reading => "reading",
            Self::Research => "research",
        }
    }
}

/// A study task from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub subject: String,
    /// Estimated duration in minutes
    pub duration: u32,
    pub priority: TaskPriority,
    pub difficulty: TaskDifficulty,
    #[serde(rename = "type")]
    pub kind: TaskKind,
    pub description: String,
    pub reason: String,
    #[serde(default)]
    pub resources: Vec<String>,
}

/// A read-only collection of tasks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskCatalog {
    tasks: Vec<Task>,
}

impl TaskCatalog {
    /// Create a catalog from a task list.
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// An empty catalog. Scoring over it yields empty recommendation lists,
    /// which is a valid result rather than an error.
    pub fn empty() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Load a catalog from a JSON file containing an array of tasks.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let catalog: TaskCatalog = serde_json::from_str(&data)?;
        Ok(catalog)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// The built-in subject task catalog.
    pub fn builtin() -> Self {
        Self {
            tasks: vec![
                // Mathematics
                builtin_task(
                    "math-001",
                    "Algebra Practice Set - Linear Equations",
                    "Mathematics",
                    30,
                    TaskPriority::High,
                    TaskDifficulty::Medium,
                    TaskKind::Practice,
                    "Solve 15 linear equation problems with varying complexity",
                    "Strengthen problem-solving skills",
                    &["Algebra Workbook Ch. 3", "Khan Academy Linear Equations"],
                ),
                builtin_task(
                    "math-002",
                    "Quadratic Functions Review",
                    "Mathematics",
                    45,
                    TaskPriority::Medium,
                    TaskDifficulty::Hard,
                    TaskKind::Review,
                    "Review quadratic functions, graphing, and applications",
                    "Prepare for upcoming test",
                    &["Textbook Ch. 5", "Practice Problems Set B"],
                ),
                builtin_task(
                    "math-003",
                    "Statistics Data Analysis Project",
                    "Mathematics",
                    60,
                    TaskPriority::Medium,
                    TaskDifficulty::Medium,
                    TaskKind::Project,
                    "Analyze real-world data using statistical methods",
                    "Apply mathematical concepts to real scenarios",
                    &["Statistics Software", "Sample Datasets"],
                ),
                // Computer Science
                builtin_task(
                    "cs-001",
                    "Python Programming Basics",
                    "Computer Science",
                    45,
                    TaskPriority::High,
                    TaskDifficulty::Easy,
                    TaskKind::Practice,
                    "Learn Python syntax, variables, and basic operations",
                    "Build foundation for software engineering career",
                    &["Python.org Tutorial", "Codecademy Python Course"],
                ),
                builtin_task(
                    "cs-002",
                    "Data Structures - Arrays and Lists",
                    "Computer Science",
                    50,
                    TaskPriority::High,
                    TaskDifficulty::Medium,
                    TaskKind::Practice,
                    "Understand and implement arrays, lists, and their operations",
                    "Essential for programming interviews and software development",
                    &["Data Structures Textbook", "LeetCode Practice Problems"],
                ),
                builtin_task(
                    "cs-003",
                    "Web Development Project - Personal Portfolio",
                    "Computer Science",
                    90,
                    TaskPriority::Medium,
                    TaskDifficulty::Medium,
                    TaskKind::Project,
                    "Create a personal portfolio website using HTML, CSS, and JavaScript",
                    "Practical application of web development skills",
                    &["MDN Web Docs", "GitHub Pages", "VS Code"],
                ),
                // Physics
                builtin_task(
                    "phy-001",
                    "Physics Formula Review - Mechanics",
                    "Physics",
                    25,
                    TaskPriority::Medium,
                    TaskDifficulty::Easy,
                    TaskKind::Review,
                    "Review and memorize key mechanics formulas",
                    "Prepare for upcoming physics test",
                    &["Physics Formula Sheet", "Practice Problems"],
                ),
                builtin_task(
                    "phy-002",
                    "Lab Report - Pendulum Experiment",
                    "Physics",
                    40,
                    TaskPriority::High,
                    TaskDifficulty::Medium,
                    TaskKind::Project,
                    "Write lab report analyzing pendulum motion data",
                    "Develop scientific writing and analysis skills",
                    &["Lab Data", "Report Template", "Scientific Writing Guide"],
                ),
                // General academic
                builtin_task(
                    "gen-001",
                    "Study Skills Workshop - Note Taking",
                    "Study Skills",
                    30,
                    TaskPriority::Low,
                    TaskDifficulty::Easy,
                    TaskKind::Reading,
                    "Learn effective note-taking strategies for better learning",
                    "Improve overall academic performance",
                    &["Study Skills Guide", "Note-taking Templates"],
                ),
                builtin_task(
                    "gen-002",
                    "Career Research - Software Engineering",
                    "Career Development",
                    35,
                    TaskPriority::Medium,
                    TaskDifficulty::Easy,
                    TaskKind::Research,
                    "Research software engineering career paths and requirements",
                    "Align studies with career goals",
                    &["Career Websites", "Industry Reports", "Professional Networks"],
                ),
            ],
        }
    }
}

impl Default for TaskCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[allow(clippy::too_many_arguments)]
fn builtin_task(
    id: &str,
    title: &str,
    subject: &str,
    duration: u32,
    priority: TaskPriority,
    difficulty: TaskDifficulty,
    kind: TaskKind,
    description: &str,
    reason: &str,
    resources: &[&str],
) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        subject: subject.to_string(),
        duration,
        priority,
        difficulty,
        kind,
        description: description.to_string(),
        reason: reason.to_string(),
        resources: resources.iter().map(|r| r.to_string()).collect(),
    }
}
