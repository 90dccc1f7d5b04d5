//! The immutable base day template routines are generated from.

use std::path::Path;

use super::item::{ItemKind, ScheduleItem};
use super::time::TimeOfDay;
use crate::error::{CoreError, Result, ValidationError};

/// A fixed base schedule for one school day: class blocks, breaks, and the
/// free blocks that task packing fills.
///
/// Templates are validated on construction: items must be start-sorted and
/// non-overlapping, and every item must end after it starts.
#[derive(Debug, Clone)]
pub struct DayTemplate {
    items: Vec<ScheduleItem>,
}

impl DayTemplate {
    /// Create a template from a list of items.
    ///
    /// # Errors
    /// Returns a [`ValidationError`] if any item has `end <= start` or if
    /// consecutive items overlap or are out of order.
    pub fn new(items: Vec<ScheduleItem>) -> Result<Self, ValidationError> {
        validate(&items)?;
        Ok(Self { items })
    }

    /// Load a template from a JSON file containing an array of items.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let items: Vec<ScheduleItem> = serde_json::from_str(&data)?;
        Self::new(items).map_err(CoreError::Validation)
    }

    pub fn items(&self) -> &[ScheduleItem] {
        &self.items
    }

    /// The built-in school day: four classes, a short break, lunch, and two
    /// free blocks (45 and 60 minutes).
    pub fn builtin() -> Self {
        let items = vec![
            ScheduleItem::new(
                "class-1",
                ItemKind::Class,
                "Mathematics",
                TimeOfDay::new(9, 0),
                TimeOfDay::new(10, 0),
            )
            .with_subject("Mathematics")
            .with_room("Room 101")
            .with_description("Algebra and Linear Equations"),
            ScheduleItem::new(
                "class-2",
                ItemKind::Class,
                "Physics",
                TimeOfDay::new(10, 0),
                TimeOfDay::new(11, 0),
            )
            .with_subject("Physics")
            .with_room("Room 203")
            .with_description("Mechanics and Motion"),
            ScheduleItem::new(
                "break-1",
                ItemKind::Break,
                "Break",
                TimeOfDay::new(11, 0),
                TimeOfDay::new(11, 15),
            )
            .with_description("Short break between classes"),
            ScheduleItem::new(
                "free-1",
                ItemKind::Free,
                "Free Period",
                TimeOfDay::new(11, 15),
                TimeOfDay::new(12, 0),
            )
            .with_description("Available for study or personal tasks")
            .with_estimated_duration(45),
            ScheduleItem::new(
                "class-3",
                ItemKind::Class,
                "Computer Science",
                TimeOfDay::new(12, 0),
                TimeOfDay::new(13, 0),
            )
            .with_subject("Computer Science")
            .with_room("Lab 1")
            .with_description("Programming and Data Structures"),
            ScheduleItem::new(
                "lunch",
                ItemKind::Break,
                "Lunch Break",
                TimeOfDay::new(13, 0),
                TimeOfDay::new(14, 0),
            )
            .with_room("Cafeteria")
            .with_description("Lunch and social time"),
            ScheduleItem::new(
                "class-4",
                ItemKind::Class,
                "English",
                TimeOfDay::new(14, 0),
                TimeOfDay::new(15, 0),
            )
            .with_subject("English")
            .with_room("Room 105")
            .with_description("Literature and Writing"),
            ScheduleItem::new(
                "free-2",
                ItemKind::Free,
                "Study Time",
                TimeOfDay::new(15, 0),
                TimeOfDay::new(16, 0),
            )
            .with_description("Dedicated study period")
            .with_estimated_duration(60),
        ];

        // Built-in items are well-formed by construction.
        Self { items }
    }
}

impl Default for DayTemplate {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate(items: &[ScheduleItem]) -> Result<(), ValidationError> {
    for item in items {
        if item.end <= item.start {
            return Err(ValidationError::InvalidTimeRange {
                item: item.id.clone(),
                start: item.start,
                end: item.end,
            });
        }
    }
    for pair in items.windows(2) {
        if pair[1].start < pair[0].end {
            return Err(ValidationError::OverlappingItems {
                first: pair[0].id.clone(),
                second: pair[1].id.clone(),
            });
        }
    }
    Ok(())
}
