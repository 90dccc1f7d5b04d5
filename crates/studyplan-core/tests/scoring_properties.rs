//! Property-based checks over scoring and free-slot packing.

use proptest::prelude::*;

use studyplan_core::recommend::{match_score, ScoreWeights, MAX_SCORE};
use studyplan_core::routine::{pack_free_slots, total_free_minutes};
use studyplan_core::schedule::DayTemplate;
use studyplan_core::{
    RecommendationEngine, Student, Task, TaskCatalog, TaskDifficulty, TaskKind, TaskPriority,
    TaskRecommendation,
};

const SUBJECTS: &[&str] = &[
    "Mathematics",
    "Computer Science",
    "Physics",
    "Chemistry",
    "Biology",
    "Study Skills",
];

const GOALS: &[&str] = &[
    "Software Engineer",
    "Data Scientist",
    "Doctor",
    "Researcher",
    "Astronaut",
];

const STRENGTHS: &[&str] = &[
    "Problem Solving",
    "Analytical Thinking",
    "Critical Thinking",
    "Research",
    "Juggling",
];

fn priority_strategy() -> impl Strategy<Value = TaskPriority> {
    prop_oneof![
        Just(TaskPriority::High),
        Just(TaskPriority::Medium),
        Just(TaskPriority::Low),
    ]
}

fn kind_strategy() -> impl Strategy<Value = TaskKind> {
    prop_oneof![
        Just(TaskKind::Practice),
        Just(TaskKind::Review),
        Just(TaskKind::Project),
        Just(TaskKind::Reading),
        Just(TaskKind::Research),
    ]
}

fn task_strategy() -> impl Strategy<Value = Task> {
    (
        "[a-z]{3}-[0-9]{3}",
        proptest::sample::select(SUBJECTS),
        5u32..=120,
        priority_strategy(),
        kind_strategy(),
    )
        .prop_map(|(id, subject, duration, priority, kind)| Task {
            title: format!("{subject} Session"),
            subject: subject.to_string(),
            id,
            duration,
            priority,
            difficulty: TaskDifficulty::Medium,
            kind,
            description: String::new(),
            reason: String::new(),
            resources: Vec::new(),
        })
}

fn student_strategy() -> impl Strategy<Value = Student> {
    (
        proptest::sample::subsequence(SUBJECTS.to_vec(), 0..SUBJECTS.len()),
        proptest::sample::subsequence(GOALS.to_vec(), 0..GOALS.len()),
        proptest::sample::subsequence(STRENGTHS.to_vec(), 0..STRENGTHS.len()),
    )
        .prop_map(|(interests, goals, strengths)| {
            let mut student = Student::new("p-1", "Property Student");
            for interest in interests {
                student = student.with_interest(interest);
            }
            for goal in goals {
                student = student.with_career_goal(goal);
            }
            for strength in strengths {
                student = student.with_strength(strength);
            }
            student
        })
}

proptest! {
    #[test]
    fn score_never_exceeds_the_cap(
        task in task_strategy(),
        student in student_strategy(),
    ) {
        let score = match_score(&task, &student, ScoreWeights::standard());
        prop_assert!(score <= MAX_SCORE);
    }

    #[test]
    fn adding_an_interest_never_lowers_a_score(
        task in task_strategy(),
        student in student_strategy(),
    ) {
        let before = match_score(&task, &student, ScoreWeights::standard());
        let enriched = student.with_interest(task.subject.clone());
        let after = match_score(&task, &enriched, ScoreWeights::standard());
        prop_assert!(after >= before);
    }

    #[test]
    fn adding_a_career_goal_never_lowers_a_score(
        task in task_strategy(),
        student in student_strategy(),
        goal in proptest::sample::select(GOALS),
    ) {
        let before = match_score(&task, &student, ScoreWeights::standard());
        let enriched = student.with_career_goal(goal);
        let after = match_score(&task, &enriched, ScoreWeights::standard());
        prop_assert!(after >= before);
    }

    #[test]
    fn adding_a_strength_never_lowers_a_score(
        task in task_strategy(),
        student in student_strategy(),
        strength in proptest::sample::select(STRENGTHS),
    ) {
        let before = match_score(&task, &student, ScoreWeights::standard());
        let enriched = student.with_strength(strength);
        let after = match_score(&task, &enriched, ScoreWeights::standard());
        prop_assert!(after >= before);
    }

    #[test]
    fn recommendations_respect_limit_and_descend(
        tasks in proptest::collection::vec(task_strategy(), 0..20),
        student in student_strategy(),
        limit in 0usize..12,
    ) {
        let engine = RecommendationEngine::new(TaskCatalog::new(tasks));
        let recommendations = engine.recommend(&student, limit, None);

        prop_assert!(recommendations.len() <= limit);
        for pair in recommendations.windows(2) {
            prop_assert!(pair[0].match_score >= pair[1].match_score);
        }
    }

    #[test]
    fn free_time_results_always_fit(
        tasks in proptest::collection::vec(task_strategy(), 0..20),
        student in student_strategy(),
        available in 0u32..180,
    ) {
        let engine = RecommendationEngine::new(TaskCatalog::new(tasks));
        for rec in engine.recommend_for_free_time(&student, available, 10) {
            prop_assert!(rec.task.duration <= available);
        }
    }

    #[test]
    fn packing_never_overlaps_or_grows_free_time(
        tasks in proptest::collection::vec(task_strategy(), 0..8),
        student in student_strategy(),
    ) {
        let template = DayTemplate::builtin();
        let engine = RecommendationEngine::new(TaskCatalog::new(tasks));
        let candidates: Vec<TaskRecommendation> = engine.recommend(&student, 8, None);

        let packed = pack_free_slots(template.items(), &candidates, 10);

        let mut sorted = packed.clone();
        sorted.sort_by_key(|item| item.start);
        for (i, a) in sorted.iter().enumerate() {
            prop_assert!(a.start < a.end);
            for b in sorted.iter().skip(i + 1) {
                prop_assert!(!a.overlaps(b), "{} overlaps {}", a.id, b.id);
            }
        }

        let before = total_free_minutes(template.items());
        let after = total_free_minutes(&packed);
        prop_assert!(after <= before);
    }
}
