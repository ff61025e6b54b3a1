//! Integration tests for board commands.
//!
//! Drives `BoardStore` through the typed API and through raw `Command`
//! values the way a UI layer would, checking resulting column contents
//! and that rejected commands leave the board untouched.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use taskboard::board::{BoardError, BoardStore, TaskDefaults};
use taskboard_proto::board::{
    Board, ColumnId, DEFAULT_TASK_DESCRIPTION, DEFAULT_TASK_TITLE, TaskId,
};
use taskboard_proto::codec::{decode_board, encode_board};
use taskboard_proto::command::{Command, DropLocation};

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

/// Creates a store whose `todo` column holds three tasks `t1`, `t2`, `t3`.
fn store_with_three_todos() -> (BoardStore, [TaskId; 3]) {
    let mut store = BoardStore::new();
    let (_, t1) = store.create_task(ColumnId::Todo, "t1", "");
    let (_, t2) = store.create_task(ColumnId::Todo, "t2", "");
    let (_, t3) = store.create_task(ColumnId::Todo, "t3", "");
    (store, [t1, t2, t3])
}

fn ids(board: &Board, column: ColumnId) -> Vec<TaskId> {
    board.column(column).task_ids.clone()
}

fn drag(task_id: &TaskId, from: (&str, usize), to: Option<(&str, usize)>) -> Command {
    Command::Drag {
        task_id: task_id.to_string(),
        source: DropLocation::new(from.0, from.1),
        destination: to.map(|(column, index)| DropLocation::new(column, index)),
    }
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn move_to_empty_column() {
    let (mut store, [t1, t2, t3]) = store_with_three_todos();
    let board = store
        .move_task(&t2, ColumnId::Todo, 1, ColumnId::InProgress, 0)
        .expect("move");
    assert_eq!(ids(&board, ColumnId::Todo), vec![t1, t3]);
    assert_eq!(ids(&board, ColumnId::InProgress), vec![t2]);
    assert!(board.check_invariants().is_ok());
}

#[test]
fn reorder_first_to_last() {
    let (mut store, [t1, t2, t3]) = store_with_three_todos();
    let board = store
        .move_task(&t1, ColumnId::Todo, 0, ColumnId::Todo, 2)
        .expect("move");
    assert_eq!(ids(&board, ColumnId::Todo), vec![t2, t3, t1]);
}

#[test]
fn reorder_last_to_first() {
    let (mut store, [t1, t2, t3]) = store_with_three_todos();
    let board = store
        .move_task(&t3, ColumnId::Todo, 2, ColumnId::Todo, 0)
        .expect("move");
    assert_eq!(ids(&board, ColumnId::Todo), vec![t3, t1, t2]);
}

#[test]
fn create_with_empty_form_uses_placeholders() {
    let (mut store, [t1, t2, t3]) = store_with_three_todos();
    let (board, id) = store.create_task(ColumnId::Todo, "", "");
    let task = board.task(&id).expect("created task");
    assert_eq!(task.content, DEFAULT_TASK_TITLE);
    assert_eq!(task.description, DEFAULT_TASK_DESCRIPTION);
    assert_eq!(ids(&board, ColumnId::Todo), vec![t1, t2, t3, id]);
}

#[test]
fn delete_unknown_task_changes_nothing() {
    let (mut store, _) = store_with_three_todos();
    let before = store.board().clone();
    let ghost = TaskId::new();
    assert_eq!(
        store.delete_task(&ghost),
        Err(BoardError::TaskNotFound(ghost.to_string()))
    );
    assert_eq!(store.board(), &before);
}

#[test]
fn stale_drag_coordinates_are_rejected() {
    let (mut store, [t1, _, _]) = store_with_three_todos();
    let before = store.board().clone();
    let err = store
        .move_task(&t1, ColumnId::Todo, 1, ColumnId::Completed, 0)
        .expect_err("stale index");
    assert_eq!(
        err,
        BoardError::IndexOutOfRange {
            column: ColumnId::Todo,
            index: 1,
            len: 3,
        }
    );
    assert_eq!(store.board(), &before);
}

#[test]
fn same_slot_move_is_identity() {
    let (mut store, [_, t2, _]) = store_with_three_todos();
    let before = store.board().clone();
    let board = store
        .move_task(&t2, ColumnId::Todo, 1, ColumnId::Todo, 1)
        .expect("no-op");
    assert_eq!(board, before);
}

#[test]
fn cross_column_move_and_back_restores_columns() {
    let (mut store, _) = store_with_three_todos();
    let (_, c1) = store.create_task(ColumnId::Completed, "c1", "");
    store.create_task(ColumnId::Completed, "c2", "");
    let before = store.board().clone();

    store
        .move_task(&c1, ColumnId::Completed, 0, ColumnId::Todo, 3)
        .expect("there");
    let board = store
        .move_task(&c1, ColumnId::Todo, 3, ColumnId::Completed, 0)
        .expect("back");
    assert_eq!(board, before);
}

#[test]
fn delete_then_second_delete_fails() {
    let (mut store, [_, t2, _]) = store_with_three_todos();
    store.delete_task(&t2).expect("first delete");
    assert!(matches!(
        store.delete_task(&t2),
        Err(BoardError::TaskNotFound(_))
    ));
    assert_eq!(store.board().task_count(), 2);
}

#[test]
fn update_keeps_column_and_position() {
    let (mut store, [t1, t2, t3]) = store_with_three_todos();
    let board = store
        .update_task(&t2, "Second task", "with details")
        .expect("update");
    assert_eq!(ids(&board, ColumnId::Todo), vec![t1, t2, t3]);
    let task = board.task(&t2).expect("task");
    assert_eq!(task.content, "Second task");
    assert_eq!(task.description, "with details");
}

// ---------------------------------------------------------------------------
// Drag-end events through the command interface
// ---------------------------------------------------------------------------

#[test]
fn drag_sequence_across_all_columns() {
    let (mut store, [t1, t2, t3]) = store_with_three_todos();

    store
        .apply(&drag(&t1, ("todo", 0), Some(("inProgress", 0))))
        .expect("t1 to in progress");
    store
        .apply(&drag(&t3, ("todo", 1), Some(("inProgress", 1))))
        .expect("t3 to in progress");
    store
        .apply(&drag(&t1, ("inProgress", 0), Some(("completed", 0))))
        .expect("t1 to completed");
    let outcome = store
        .apply(&drag(&t2, ("todo", 0), Some(("completed", 0))))
        .expect("t2 to completed front");

    let board = outcome.board;
    assert!(board.column(ColumnId::Todo).is_empty());
    assert_eq!(ids(&board, ColumnId::InProgress), vec![t3]);
    assert_eq!(ids(&board, ColumnId::Completed), vec![t2, t1]);
    assert!(board.check_invariants().is_ok());
}

#[test]
fn abandoned_drag_is_silent_no_op() {
    let (mut store, [t1, _, _]) = store_with_three_todos();
    let before = store.board().clone();
    let outcome = store
        .apply(&drag(&t1, ("todo", 0), None))
        .expect("abandoned drag never fails");
    assert_eq!(outcome.board, before);
    assert_eq!(outcome.created, None);
}

#[test]
fn command_with_unknown_column_is_invalid() {
    let (mut store, [t1, _, _]) = store_with_three_todos();
    let err = store
        .apply(&drag(&t1, ("todo", 0), Some(("archive", 0))))
        .expect_err("unknown column");
    assert_eq!(err, BoardError::InvalidColumn("archive".to_string()));
}

#[test]
fn edit_flow_prefills_then_updates() {
    let mut store = BoardStore::with_defaults(TaskDefaults {
        title: "Untitled".to_string(),
        description: String::new(),
    });
    let created = store
        .apply(&Command::Create {
            column: "inProgress".to_string(),
            content: String::new(),
            description: "draft".to_string(),
        })
        .expect("create")
        .created
        .expect("id");

    let (content, description) = store.edit_form(&created).expect("form");
    assert_eq!((content, description), ("Untitled", "draft"));

    store
        .apply(&Command::Update {
            task_id: created.to_string(),
            content: "Final".to_string(),
            description: String::new(),
        })
        .expect("update");
    assert_eq!(store.edit_form(&created).expect("form"), ("Final", ""));
}

// ---------------------------------------------------------------------------
// Snapshots handed to outer layers
// ---------------------------------------------------------------------------

#[test]
fn encoded_snapshot_can_seed_a_new_store() {
    let (mut store, [_, t2, _]) = store_with_three_todos();
    store
        .move_task(&t2, ColumnId::Todo, 1, ColumnId::Completed, 0)
        .expect("move");

    let bytes = encode_board(store.board()).expect("encode");
    let decoded = decode_board(&bytes).expect("decode");
    let mut restored = BoardStore::from_board(decoded, TaskDefaults::default()).expect("adopt");

    assert_eq!(restored.board(), store.board());
    restored.delete_task(&t2).expect("restored store is usable");
    assert!(restored.board().column(ColumnId::Completed).is_empty());
}

#[test]
fn decoded_snapshot_with_renamed_column_is_refused() {
    let (store, _) = store_with_three_todos();
    let mut tampered = store.board().clone();
    tampered.column_mut(ColumnId::Todo).title = "Backlog".to_string();

    let bytes = encode_board(&tampered).expect("encode");
    let decoded = decode_board(&bytes).expect("decode");
    let err = BoardStore::from_board(decoded, TaskDefaults::default()).expect_err("retitled");
    assert!(matches!(err, BoardError::Inconsistent(_)));
}
