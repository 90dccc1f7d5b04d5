//! Greedy insertion of recommended tasks into free schedule blocks.
//!
//! A single left-to-right pass over the base day builds a fresh sequence
//! instead of splicing the input in place, so there is no index bookkeeping
//! when a free block shrinks or disappears.

use crate::recommend::TaskRecommendation;
use crate::schedule::{ItemKind, ScheduleItem, TimeOfDay};

/// Remaining free minutes at or below which a shrunk free block is dropped
/// outright instead of kept.
pub const DEFAULT_MIN_REMAINDER_MINUTES: u32 = 10;

/// Pack candidate tasks into the free blocks of a day, left to right.
///
/// Each free block with remaining capacity consumes at most one candidate:
/// scanning starts at the current candidate pointer and skips candidates
/// already placed, taking the first whose duration fits the block. A placed
/// task starts at the block's start time; the free block survives behind the
/// task, shrunk, only when more than `min_remainder_minutes` remain. The
/// pointer advances by one per placement; candidates that fail to fit do not
/// advance it.
///
/// Non-free items and free blocks without an `estimated_duration` pass
/// through untouched, so packing with no candidates is the identity.
pub fn pack_free_slots(
    base: &[ScheduleItem],
    candidates: &[TaskRecommendation],
    min_remainder_minutes: u32,
) -> Vec<ScheduleItem> {
    let mut packed = Vec::with_capacity(base.len() + candidates.len());
    let mut consumed = vec![false; candidates.len()];
    let mut next = 0usize;

    for item in base {
        let capacity = match (item.kind, item.estimated_duration) {
            (ItemKind::Free, Some(minutes)) if next < candidates.len() => minutes,
            _ => {
                packed.push(item.clone());
                continue;
            }
        };

        let selected = (next..candidates.len())
            .find(|&i| !consumed[i] && candidates[i].task.duration <= capacity);
        let Some(index) = selected else {
            packed.push(item.clone());
            continue;
        };

        let duration = candidates[index].task.duration;
        let task_end = item.start.add_minutes(duration);
        packed.push(task_block(&candidates[index], item.start, task_end));

        let remaining = capacity - duration;
        if remaining > min_remainder_minutes {
            let mut rest = item.clone();
            rest.start = task_end;
            rest.estimated_duration = Some(remaining);
            packed.push(rest);
        }

        consumed[index] = true;
        next += 1;
    }

    packed
}

fn task_block(
    recommendation: &TaskRecommendation,
    start: TimeOfDay,
    end: TimeOfDay,
) -> ScheduleItem {
    let task = &recommendation.task;
    ScheduleItem::new(
        format!("task-{}", task.id),
        ItemKind::Task,
        &task.title,
        start,
        end,
    )
    .with_subject(&task.subject)
    .with_description(&task.description)
    .with_priority(task.priority)
    .with_estimated_duration(task.duration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TaskCatalog;
    use crate::recommend::RecommendationEngine;
    use crate::schedule::DayTemplate;
    use crate::student::Student;

    fn candidate(id: &str) -> TaskRecommendation {
        let engine = RecommendationEngine::new(TaskCatalog::builtin());
        let student = Student::new("1", "Test");
        engine
            .recommend(&student, 10, None)
            .into_iter()
            .find(|rec| rec.task.id == id)
            .unwrap()
    }

    fn free_block(id: &str, start: TimeOfDay, end: TimeOfDay, minutes: u32) -> ScheduleItem {
        ScheduleItem::new(id, ItemKind::Free, "Free Period", start, end)
            .with_estimated_duration(minutes)
    }

    #[test]
    fn no_candidates_is_identity() {
        let template = DayTemplate::builtin();
        let packed = pack_free_slots(template.items(), &[], DEFAULT_MIN_REMAINDER_MINUTES);
        assert_eq!(packed.len(), template.items().len());
        assert!(packed
            .iter()
            .zip(template.items())
            .all(|(a, b)| a.id == b.id && a.start == b.start));
    }

    #[test]
    fn large_remainder_keeps_a_shrunk_free_block() {
        // 45-minute block, 30-minute task: 15 minutes remain, above the
        // threshold, so the block survives starting at the task's end.
        let base = [free_block(
            "free-1",
            TimeOfDay::new(11, 15),
            TimeOfDay::new(12, 0),
            45,
        )];
        let packed = pack_free_slots(&base, &[candidate("math-001")], 10);

        assert_eq!(packed.len(), 2);
        assert_eq!(packed[0].id, "task-math-001");
        assert_eq!(packed[0].start, TimeOfDay::new(11, 15));
        assert_eq!(packed[0].end, TimeOfDay::new(11, 45));
        assert_eq!(packed[1].id, "free-1");
        assert_eq!(packed[1].start, TimeOfDay::new(11, 45));
        assert_eq!(packed[1].estimated_duration, Some(15));
    }

    #[test]
    fn small_remainder_drops_the_free_block() {
        // 45-minute block, 40-minute task: 5 minutes remain, at or below the
        // threshold, so the block disappears.
        let base = [free_block(
            "free-1",
            TimeOfDay::new(11, 15),
            TimeOfDay::new(12, 0),
            45,
        )];
        let packed = pack_free_slots(&base, &[candidate("phy-002")], 10);

        assert_eq!(packed.len(), 1);
        assert_eq!(packed[0].id, "task-phy-002");
        assert_eq!(packed[0].end, TimeOfDay::new(11, 55));
    }

    #[test]
    fn each_slot_consumes_at_most_one_candidate() {
        let base = [free_block(
            "free-2",
            TimeOfDay::new(15, 0),
            TimeOfDay::new(16, 0),
            60,
        )];
        // Both fit, but a single slot places only the first.
        let candidates = [candidate("math-001"), candidate("cs-001")];
        let packed = pack_free_slots(&base, &candidates, 10);

        let tasks: Vec<&str> = packed
            .iter()
            .filter(|item| item.kind == ItemKind::Task)
            .map(|item| item.id.as_str())
            .collect();
        assert_eq!(tasks, ["task-math-001"]);
    }

    #[test]
    fn oversized_candidates_are_skipped_without_advancing() {
        // cs-003 (90 min) cannot fit either block; math-001 (30 min) lands in
        // the first and cs-001 (45 min) in the second.
        let base = [
            free_block("free-1", TimeOfDay::new(11, 15), TimeOfDay::new(12, 0), 45),
            free_block("free-2", TimeOfDay::new(15, 0), TimeOfDay::new(16, 0), 60),
        ];
        let candidates = [candidate("cs-003"), candidate("math-001"), candidate("cs-001")];
        let packed = pack_free_slots(&base, &candidates, 10);

        let tasks: Vec<&str> = packed
            .iter()
            .filter(|item| item.kind == ItemKind::Task)
            .map(|item| item.id.as_str())
            .collect();
        assert_eq!(tasks, ["task-math-001", "task-cs-001"]);
    }

    #[test]
    fn placed_candidates_are_never_placed_twice() {
        // math-001 is selected for the first slot from behind the pointer;
        // the second slot must not re-place it.
        let base = [
            free_block("free-1", TimeOfDay::new(11, 15), TimeOfDay::new(11, 50), 35),
            free_block("free-2", TimeOfDay::new(15, 0), TimeOfDay::new(16, 0), 60),
        ];
        // cs-001 (45) does not fit the 35-minute block, math-001 (30) does.
        let candidates = [candidate("cs-001"), candidate("math-001")];
        let packed = pack_free_slots(&base, &candidates, 10);

        let tasks: Vec<&str> = packed
            .iter()
            .filter(|item| item.kind == ItemKind::Task)
            .map(|item| item.id.as_str())
            .collect();
        assert_eq!(tasks, ["task-math-001"]);
    }

    #[test]
    fn packed_schedule_has_no_overlaps() {
        let template = DayTemplate::builtin();
        let candidates = [candidate("math-001"), candidate("cs-001")];
        let packed = pack_free_slots(template.items(), &candidates, 10);

        for (i, a) in packed.iter().enumerate() {
            assert!(a.start < a.end, "item {} has start >= end", a.id);
            for b in packed.iter().skip(i + 1) {
                assert!(!a.overlaps(b), "{} overlaps {}", a.id, b.id);
            }
        }
    }
}
