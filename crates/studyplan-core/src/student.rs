//! Student profiles and the closed goal/strength vocabularies.
//!
//! Profiles arrive from the enclosing application with interests, strengths,
//! and career goals as plain strings. The scorer maps them onto the
//! [`CareerGoal`] and [`Strength`] enums; names outside those vocabularies
//! contribute nothing to a score rather than erroring.

use serde::{Deserialize, Serialize};

use crate::catalog::TaskKind;

/// A student profile.
///
/// Immutable for the duration of a scoring or scheduling operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub career_goals: Vec<String>,
}

impl Student {
    /// Create a new profile with empty interests, strengths, and goals.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            student_id: None,
            class_name: None,
            year: None,
            interests: Vec::new(),
            strengths: Vec::new(),
            career_goals: Vec::new(),
        }
    }

    /// Add a subject interest
    pub fn with_interest(mut self, subject: impl Into<String>) -> Self {
        self.interests.push(subject.into());
        self
    }

    /// Add a strength
    pub fn with_strength(mut self, strength: impl Into<String>) -> Self {
        self.strengths.push(strength.into());
        self
    }

    /// Add a career goal
    pub fn with_career_goal(mut self, goal: impl Into<String>) -> Self {
        self.career_goals.push(goal.into());
        self
    }
}

/// Career goals with a recognized subject vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CareerGoal {
    SoftwareEngineer,
    DataScientist,
    Doctor,
    Researcher,
}

impl CareerGoal {
    /// Resolve a free-text goal name. Unknown names return `None` and are
    /// skipped by the scorer.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Software Engineer" => Some(Self::SoftwareEngineer),
            "Data Scientist" => Some(Self::DataScientist),
            "Doctor" => Some(Self::Doctor),
            "Researcher" => Some(Self::Researcher),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::SoftwareEngineer => "Software Engineer",
            Self::DataScientist => "Data Scientist",
            Self::Doctor => "Doctor",
            Self::Researcher => "Researcher",
        }
    }

    /// Subjects and title keywords that advance this goal.
    pub fn subject_keywords(&self) -> &'static [&'static str] {
        match self {
            Self::SoftwareEngineer => &["Computer Science", "Programming", "Web Development"],
            Self::DataScientist => &["Mathematics", "Statistics", "Computer Science"],
            Self::Doctor => &["Biology", "Chemistry", "Physics"],
            Self::Researcher => &["Mathematics", "Physics", "Biology", "Chemistry"],
        }
    }
}

/// Academic strengths with the task kinds they map onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strength {
    ProblemSolving,
    AnalyticalThinking,
    CriticalThinking,
    Research,
}

impl Strength {
    /// Resolve a free-text strength name. Unknown names return `None` and
    /// are skipped by the scorer.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Problem Solving" => Some(Self::ProblemSolving),
            "Analytical Thinking" => Some(Self::AnalyticalThinking),
            "Critical Thinking" => Some(Self::CriticalThinking),
            "Research" => Some(Self::Research),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::ProblemSolving => "Problem Solving",
            Self::AnalyticalThinking => "Analytical Thinking",
            Self::CriticalThinking => "Critical Thinking",
            Self::Research => "Research",
        }
    }

    /// Task kinds this strength plays to.
    pub fn task_kinds(&self) -> &'static [TaskKind] {
        match self {
            Self::ProblemSolving => &[TaskKind::Practice, TaskKind::Project],
            Self::AnalyticalThinking => &[TaskKind::Review, TaskKind::Research],
            Self::CriticalThinking => &[TaskKind::Project, TaskKind::Research],
            Self::Research => &[TaskKind::Research, TaskKind::Reading],
        }
    }
}
