//! End-to-end dashboard behavior: filter → classify → aggregate over one
//! task set, plus property checks for the score bounds, filter conjunction,
//! and sort stability.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use taskdeck_core::{
    aggregate, classify_due_date, due_bucket, filter_and_sort, DueBucket, FilterConfig, Task,
    TaskPriority, TaskStatus,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

fn task(name: &str, status: TaskStatus, due: Option<&str>) -> Task {
    let mut t = Task::new(name, "project-1");
    t.status = status;
    t.due_date = due.map(String::from);
    t
}

#[test]
fn dashboard_scenario() {
    // Pending 3 days overdue, completed yesterday-due, in-progress due
    // tomorrow, completed due in 5 days.
    let tasks = vec![
        task("overdue", TaskStatus::Pending, Some("2024-06-07")),
        task("done-late", TaskStatus::Completed, Some("2024-06-09")),
        task("tomorrow", TaskStatus::InProgress, Some("2024-06-11")),
        task("done-early", TaskStatus::Completed, Some("2024-06-15")),
    ];

    let stats = aggregate(&tasks, today());
    assert_eq!(stats.total_overdue, 1);
    assert_eq!(stats.due_today, 0);
    assert_eq!(stats.completion_rate, 50);

    let sorted = filter_and_sort(&tasks, &FilterConfig::default(), today());
    let names: Vec<_> = sorted.iter().map(|t| t.name.as_str()).collect();
    // Pending first, then in-progress, then the completed pair in input order.
    assert_eq!(names, vec!["overdue", "tomorrow", "done-late", "done-early"]);

    // The visible list gets per-task classifications.
    let c = classify_due_date(sorted[0].due_date.as_deref(), today());
    assert_eq!(c.label, "3 days overdue");
    assert_eq!(due_bucket(sorted[1].due_date.as_deref(), today()), DueBucket::DueTomorrow);
}

#[test]
fn filtering_has_no_cross_task_interaction() {
    // Removing a task that fails a predicate never changes the outcome for
    // the survivors.
    let tasks = vec![
        task("keep-a", TaskStatus::Pending, Some("2024-06-10")),
        task("drop", TaskStatus::Completed, Some("2024-06-10")),
        task("keep-b", TaskStatus::Pending, Some("2024-06-10")),
    ];
    let config = FilterConfig {
        status: Some(TaskStatus::Pending),
        ..Default::default()
    };

    let full = filter_and_sort(&tasks, &config, today());
    let without_failing: Vec<Task> = vec![tasks[0].clone(), tasks[2].clone()];
    let reduced = filter_and_sort(&without_failing, &config, today());

    let full_ids: Vec<_> = full.iter().map(|t| t.id.as_str()).collect();
    let reduced_ids: Vec<_> = reduced.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(full_ids, reduced_ids);
}

fn arb_status() -> impl Strategy<Value = TaskStatus> {
    prop_oneof![
        Just(TaskStatus::Pending),
        Just(TaskStatus::InProgress),
        Just(TaskStatus::OnHold),
        Just(TaskStatus::Completed),
        Just(TaskStatus::Unknown),
    ]
}

fn arb_priority() -> impl Strategy<Value = TaskPriority> {
    prop_oneof![
        Just(TaskPriority::Low),
        Just(TaskPriority::Medium),
        Just(TaskPriority::High),
        Just(TaskPriority::Critical),
    ]
}

/// Due dates spread around today, plus missing and garbage values.
fn arb_due() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None::<String>),
        Just(Some("not-a-date".to_string())),
        (-30i64..30).prop_map(|offset| {
            Some((today() + Duration::days(offset)).format("%Y-%m-%d").to_string())
        }),
    ]
}

fn arb_task() -> impl Strategy<Value = Task> {
    (arb_status(), arb_priority(), arb_due(), "[a-z]{1,8}").prop_map(
        |(status, priority, due, name)| {
            let mut t = Task::new(name, "project-1");
            t.status = status;
            t.priority = priority;
            t.due_date = due;
            t
        },
    )
}

proptest! {
    #[test]
    fn score_fields_stay_in_bounds(tasks in prop::collection::vec(arb_task(), 0..40)) {
        let stats = aggregate(&tasks, today());
        prop_assert!(stats.productivity_score <= 100);
        prop_assert!(stats.completion_rate <= 100);
        prop_assert!(stats.on_time_percentage <= 100);
        if tasks.is_empty() {
            prop_assert_eq!(stats.productivity_score, 0);
            prop_assert_eq!(stats.completion_rate, 0);
            prop_assert_eq!(stats.on_time_percentage, 0);
        }
    }

    #[test]
    fn overdue_never_counts_completed(tasks in prop::collection::vec(arb_task(), 0..40)) {
        let stats = aggregate(&tasks, today());
        let open_past_due = tasks
            .iter()
            .filter(|t| {
                !matches!(t.status, TaskStatus::Completed)
                    && t.parsed_due_date().is_some_and(|d| d < today())
            })
            .count() as u32;
        prop_assert_eq!(stats.total_overdue, open_past_due);
    }

    #[test]
    fn sort_is_monotone_and_stable(tasks in prop::collection::vec(arb_task(), 0..40)) {
        let sorted = filter_and_sort(&tasks, &FilterConfig::default(), today());
        // Monotone in status rank.
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].status.sort_rank() <= pair[1].status.sort_rank());
        }
        // Stable: within a rank, input order is preserved.
        let input_pos = |id: &str| tasks.iter().position(|t| t.id == id).unwrap();
        for pair in sorted.windows(2) {
            if pair[0].status.sort_rank() == pair[1].status.sort_rank() {
                prop_assert!(input_pos(&pair[0].id) < input_pos(&pair[1].id));
            }
        }
    }

    #[test]
    fn classifier_never_panics(due in arb_due()) {
        let c = classify_due_date(due.as_deref(), today());
        prop_assert!(c.rank <= 5);
        prop_assert!(!c.label.is_empty());
    }
}
