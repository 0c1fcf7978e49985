//! Unit tests for the board projection.

use crate::board::view::BoardView;
use crate::task::domain::{NewTaskData, OwnerId, Task, TaskId, TaskStatus, TaskTitle};
use mockable::DefaultClock;
use rstest::rstest;

fn task_with_status(title: &str, status: TaskStatus) -> Task {
    Task::new(
        OwnerId::new(),
        NewTaskData {
            title: TaskTitle::new(title).expect("valid title"),
            description: None,
            status,
            due_date: None,
        },
        &DefaultClock,
    )
}

#[rstest]
fn empty_board_has_empty_columns() {
    let view = BoardView::from_tasks([]);
    assert!(view.is_empty());
    for status in TaskStatus::ALL {
        assert!(view.column(status).is_empty());
    }
}

#[rstest]
fn partition_is_total_and_disjoint() {
    let tasks = vec![
        task_with_status("Write spec", TaskStatus::Pending),
        task_with_status("Review spec", TaskStatus::Pending),
        task_with_status("Implement core", TaskStatus::InProgress),
        task_with_status("Ship release", TaskStatus::Completed),
    ];
    let ids: Vec<TaskId> = tasks.iter().map(Task::id).collect();

    let view = BoardView::from_tasks(tasks);

    assert_eq!(view.len(), ids.len());
    for id in &ids {
        let appearances = TaskStatus::ALL
            .into_iter()
            .filter(|status| view.column(*status).iter().any(|task| task.id() == *id))
            .count();
        assert_eq!(appearances, 1, "task {id} must sit in exactly one column");
    }
}

#[rstest]
fn columns_reflect_task_status() {
    let task = task_with_status("Implement core", TaskStatus::InProgress);
    let id = task.id();

    let view = BoardView::from_tasks([task]);

    assert_eq!(view.status_of(id), Some(TaskStatus::InProgress));
    assert!(view.contains(id));
    assert_eq!(view.column(TaskStatus::InProgress).len(), 1);
    assert!(view.column(TaskStatus::Pending).is_empty());
    assert!(view.column(TaskStatus::Completed).is_empty());
}

#[rstest]
fn unknown_task_has_no_column() {
    let view = BoardView::from_tasks([task_with_status("Write spec", TaskStatus::Pending)]);
    assert_eq!(view.status_of(TaskId::new()), None);
    assert!(!view.contains(TaskId::new()));
}

#[rstest]
fn rebuilding_from_the_same_tasks_yields_an_equal_view() {
    let tasks = vec![
        task_with_status("Write spec", TaskStatus::Pending),
        task_with_status("Review spec", TaskStatus::Pending),
        task_with_status("Ship release", TaskStatus::Completed),
    ];

    let first = BoardView::from_tasks(tasks.clone());
    let mut reversed = tasks;
    reversed.reverse();
    let second = BoardView::from_tasks(reversed);

    assert_eq!(first, second);
}
