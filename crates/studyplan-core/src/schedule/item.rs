//! Schedule items: the time-boxed blocks a day is made of.

use serde::{Deserialize, Serialize};

use super::time::TimeOfDay;
use crate::catalog::TaskPriority;

/// Kind of schedule item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Fixed class block
    Class,
    /// Break between classes
    Break,
    /// A recommended task packed into free time
    Task,
    /// A career-goal activity
    Goal,
    /// Unallocated free time
    Free,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Break => "break",
            Self::Task => "task",
            Self::Goal => "goal",
            Self::Free => "free",
        }
    }
}

/// A single time-boxed block on a day schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub id: String,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub title: String,
    pub kind: ItemKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(default)]
    pub optional: bool,
    /// Remaining usable minutes; set on free blocks and on generated
    /// task/goal blocks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<u32>,
}

impl ScheduleItem {
    /// Create a new schedule item with no optional fields set.
    pub fn new(
        id: impl Into<String>,
        kind: ItemKind,
        title: impl Into<String>,
        start: TimeOfDay,
        end: TimeOfDay,
    ) -> Self {
        Self {
            id: id.into(),
            start,
            end,
            title: title.into(),
            kind,
            subject: None,
            room: None,
            description: None,
            priority: None,
            optional: false,
            estimated_duration: None,
        }
    }

    /// Set the subject
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the room
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Mark as optional
    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Set the estimated usable duration in minutes
    pub fn with_estimated_duration(mut self, minutes: u32) -> Self {
        self.estimated_duration = Some(minutes);
        self
    }

    /// Wall-clock length of the block in minutes.
    pub fn duration_minutes(&self) -> u32 {
        self.start.minutes_until(self.end)
    }

    /// Check if this item overlaps with another
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && self.end > other.start
    }
}
