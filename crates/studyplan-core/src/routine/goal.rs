//! Goal blocks derived from a student's career goals.

use crate::catalog::TaskPriority;
use crate::schedule::{ItemKind, ScheduleItem, TimeOfDay};
use crate::student::{CareerGoal, Student};

/// Build the late-afternoon goal blocks for a student's career goals.
///
/// Only goals with a block mapping produce anything; ids are indexed by the
/// goal's position in the student's list so they stay stable across runs.
pub fn goal_blocks(student: &Student) -> Vec<ScheduleItem> {
    let mut blocks = Vec::new();

    for (index, name) in student.career_goals.iter().enumerate() {
        let block = match CareerGoal::from_name(name) {
            Some(CareerGoal::SoftwareEngineer) => ScheduleItem::new(
                format!("goal-{index}"),
                ItemKind::Goal,
                "Career Development - Programming Practice",
                TimeOfDay::new(16, 0),
                TimeOfDay::new(16, 30),
            )
            .with_description(format!(
                "Work on programming skills to achieve your goal: {name}"
            )),
            Some(CareerGoal::DataScientist) => ScheduleItem::new(
                format!("goal-{index}"),
                ItemKind::Goal,
                "Career Development - Data Analysis",
                TimeOfDay::new(16, 30),
                TimeOfDay::new(17, 0),
            )
            .with_description(format!(
                "Practice data analysis skills for your goal: {name}"
            )),
            _ => continue,
        };

        blocks.push(
            block
                .with_priority(TaskPriority::Medium)
                .with_optional(true)
                .with_estimated_duration(30),
        );
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dual_goal_student_gets_both_blocks() {
        let student = Student::new("1", "Alex Johnson")
            .with_career_goal("Software Engineer")
            .with_career_goal("Data Scientist");
        let blocks = goal_blocks(&student);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].start, TimeOfDay::new(16, 0));
        assert_eq!(blocks[0].end, TimeOfDay::new(16, 30));
        assert_eq!(blocks[1].start, TimeOfDay::new(16, 30));
        assert_eq!(blocks[1].end, TimeOfDay::new(17, 0));
        assert!(blocks.iter().all(|b| b.optional && b.kind == ItemKind::Goal));
    }

    #[test]
    fn unmapped_goals_produce_no_blocks() {
        let student = Student::new("2", "Sarah Chen")
            .with_career_goal("Doctor")
            .with_career_goal("Researcher");
        assert!(goal_blocks(&student).is_empty());
    }

    #[test]
    fn ids_follow_goal_list_positions() {
        let student = Student::new("1", "A")
            .with_career_goal("Doctor")
            .with_career_goal("Data Scientist");
        let blocks = goal_blocks(&student);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].id, "goal-1");
    }
}
