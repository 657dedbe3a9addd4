//! Domain-focused tests for task validation, status parsing, and merging.

use super::{FixedClock, datetime, test_now};
use crate::task::domain::{
    ParseTaskStatusError, Task, TaskDescription, TaskDomainError, TaskStatus, TaskTitle,
    TaskUpdate,
};
use chrono::Duration;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> FixedClock {
    FixedClock::at(test_now())
}

fn sample_task(clock: &FixedClock) -> Task {
    Task::new(
        TaskTitle::new("Write launch notes").expect("valid title"),
        TaskDescription::new("Summarise the release for the newsletter").expect("valid description"),
        datetime("2024-06-01T09:00:00Z"),
        clock,
    )
    .expect("task creation should succeed")
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn title_rejects_empty_values(#[case] raw: &str) {
    assert_eq!(TaskTitle::new(raw), Err(TaskDomainError::EmptyTitle));
}

#[rstest]
fn title_preserves_original_text() {
    let title = TaskTitle::new("  Ship the beta  ").expect("valid title");
    assert_eq!(title.as_str(), "  Ship the beta  ");
}

#[rstest]
#[case("")]
#[case("   ")]
fn description_rejects_empty_values(#[case] raw: &str) {
    assert_eq!(
        TaskDescription::new(raw),
        Err(TaskDomainError::EmptyDescription)
    );
}

#[rstest]
#[case(TaskStatus::Open, "OPEN")]
#[case(TaskStatus::Done, "DONE")]
fn status_as_str_matches_wire_form(#[case] status: TaskStatus, #[case] expected: &str) {
    assert_eq!(status.as_str(), expected);
}

#[rstest]
#[case("OPEN", TaskStatus::Open)]
#[case("done", TaskStatus::Done)]
#[case(" Open ", TaskStatus::Open)]
fn status_parses_case_insensitively(#[case] raw: &str, #[case] expected: TaskStatus) {
    assert_eq!(TaskStatus::try_from(raw), Ok(expected));
}

#[rstest]
fn status_rejects_unknown_text() {
    assert_eq!(
        TaskStatus::try_from("ARCHIVED"),
        Err(ParseTaskStatusError("ARCHIVED".to_owned()))
    );
}

#[rstest]
fn new_task_is_open_and_keeps_its_fields(clock: FixedClock) {
    let task = sample_task(&clock);

    assert_eq!(task.status(), TaskStatus::Open);
    assert_eq!(task.title().as_str(), "Write launch notes");
    assert_eq!(
        task.description().as_str(),
        "Summarise the release for the newsletter"
    );
    assert_eq!(task.due_date(), datetime("2024-06-01T09:00:00Z"));
    assert!(!task.id().into_inner().is_nil());
}

#[rstest]
fn new_tasks_receive_distinct_identifiers(clock: FixedClock) {
    let first = sample_task(&clock);
    let second = sample_task(&clock);
    assert_ne!(first.id(), second.id());
}

#[rstest]
fn due_date_equal_to_now_is_accepted(clock: FixedClock) {
    let result = Task::new(
        TaskTitle::new("Due right now").expect("valid title"),
        TaskDescription::new("Boundary case").expect("valid description"),
        test_now(),
        &clock,
    );
    assert!(result.is_ok());
}

#[rstest]
fn past_due_date_is_rejected(clock: FixedClock) {
    let past = test_now() - Duration::seconds(1);
    let result = Task::new(
        TaskTitle::new("Too late").expect("valid title"),
        TaskDescription::new("Already overdue").expect("valid description"),
        past,
        &clock,
    );
    assert_eq!(result, Err(TaskDomainError::DueDateInPast(past)));
}

#[rstest]
fn empty_update_retains_every_field(clock: FixedClock) {
    let mut task = sample_task(&clock);
    let before = task.clone();

    task.apply(&TaskUpdate::new());

    assert_eq!(task, before);
}

#[rstest]
fn status_only_update_leaves_other_fields_unchanged(clock: FixedClock) {
    let mut task = sample_task(&clock);
    let before = task.clone();

    task.apply(&TaskUpdate::new().with_status(TaskStatus::Done));

    assert_eq!(task.status(), TaskStatus::Done);
    assert_eq!(task.id(), before.id());
    assert_eq!(task.title(), before.title());
    assert_eq!(task.description(), before.description());
    assert_eq!(task.due_date(), before.due_date());
}

#[rstest]
fn full_update_replaces_everything_except_identity(clock: FixedClock) {
    let mut task = sample_task(&clock);
    let original_id = task.id();
    let new_due = datetime("2023-03-01T08:00:00Z");

    let update = TaskUpdate::new()
        .with_title(TaskTitle::new("Revised title").expect("valid title"))
        .with_description(TaskDescription::new("Revised description").expect("valid description"))
        .with_due_date(new_due)
        .with_status(TaskStatus::Done);
    task.apply(&update);

    assert_eq!(task.id(), original_id);
    assert_eq!(task.title().as_str(), "Revised title");
    assert_eq!(task.description().as_str(), "Revised description");
    assert_eq!(task.due_date(), new_due);
    assert_eq!(task.status(), TaskStatus::Done);
}

#[rstest]
fn task_serialises_to_wire_shape(clock: FixedClock) {
    let task = sample_task(&clock);
    let value = serde_json::to_value(&task).expect("task should serialise");

    assert_eq!(
        value.get("id").and_then(serde_json::Value::as_str),
        Some(task.id().to_string().as_str())
    );
    assert_eq!(
        value.get("title").and_then(serde_json::Value::as_str),
        Some("Write launch notes")
    );
    assert_eq!(
        value.get("dueDate").and_then(serde_json::Value::as_str),
        Some("2024-06-01T09:00:00Z")
    );
    assert_eq!(
        value.get("status").and_then(serde_json::Value::as_str),
        Some("OPEN")
    );
}
