//! Integration tests for script replay and board rendering.
//!
//! Mirrors what the `taskboard` binary does: parse a JSON-lines script,
//! run it against a configured store, and render the final board.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use taskboard::board::{BoardError, BoardStore, TaskDefaults};
use taskboard::render::{RenderOptions, render_board};
use taskboard::script::{ScriptError, parse_script, run_script};
use taskboard_proto::board::ColumnId;

const PLANNING_SCRIPT: &str = r#"
# three tasks, then work through them
{"op":"create","column":"todo","content":"Design","description":"sketch the lanes","label":"design"}
{"op":"create","column":"todo","content":"Build","label":"build"}
{"op":"create","column":"todo","label":"blank"}
{"op":"drag","task_id":"@design","source":{"column":"todo","index":0},"destination":{"column":"inProgress","index":0}}
{"op":"drag","task_id":"@design","source":{"column":"inProgress","index":0},"destination":{"column":"completed","index":0}}
{"op":"drag","task_id":"@build","source":{"column":"todo","index":0}}
{"op":"move","task_id":"@blank","source":{"column":"todo","index":1},"destination":{"column":"todo","index":0}}
{"op":"update","task_id":"@blank","content":"Test","description":"cover the edges"}
"#;

#[test]
fn planning_script_renders_expected_board() {
    let steps = parse_script(PLANNING_SCRIPT).expect("parse");
    assert_eq!(steps.len(), 8);

    let mut store = BoardStore::new();
    let report = run_script(&mut store, &steps, true);
    assert!(report.rejected.is_empty(), "{:?}", report.rejected);
    assert_eq!(report.applied, 8);

    let text = render_board(store.board(), &RenderOptions::default());
    assert_eq!(
        text,
        "TODO (2 cards)\n\
         \x20 - Test\n\
         \x20     cover the edges\n\
         \x20 - Build\n\
         \x20     Add a description\n\
         In Progress (0 cards)\n\
         \x20 (empty)\n\
         Completed (1 cards)\n\
         \x20 - Design\n\
         \x20     sketch the lanes\n"
    );
}

#[test]
fn configured_placeholders_flow_into_created_tasks() {
    let steps = parse_script(r#"{"op":"create","column":"completed"}"#).expect("parse");
    let mut store = BoardStore::with_defaults(TaskDefaults {
        title: "Card".to_string(),
        description: "TBD".to_string(),
    });
    run_script(&mut store, &steps, false);

    let board = store.board();
    let id = board.column(ColumnId::Completed).task_ids[0];
    let task = board.task(&id).expect("task");
    assert_eq!(task.content, "Card");
    assert_eq!(task.description, "TBD");
}

#[test]
fn rejections_do_not_corrupt_the_board() {
    let script = r#"
{"op":"create","column":"todo","content":"A","label":"a"}
{"op":"move","task_id":"@a","source":{"column":"todo","index":3},"destination":{"column":"completed","index":0}}
{"op":"move","task_id":"@a","source":{"column":"todo","index":0},"destination":{"column":"completed","index":5}}
{"op":"delete","task_id":"@a"}
{"op":"delete","task_id":"@a"}
"#;
    let steps = parse_script(script).expect("parse");
    let mut store = BoardStore::new();
    let report = run_script(&mut store, &steps, false);

    assert_eq!(report.applied, 2);
    let errors: Vec<&BoardError> = report.rejected.iter().map(|r| &r.error).collect();
    assert!(matches!(
        errors[0],
        BoardError::IndexOutOfRange {
            column: ColumnId::Todo,
            index: 3,
            ..
        }
    ));
    assert!(matches!(
        errors[1],
        BoardError::IndexOutOfRange {
            column: ColumnId::Completed,
            index: 5,
            len: 0,
        }
    ));
    assert!(matches!(errors[2], BoardError::TaskNotFound(_)));
    assert!(store.board().is_empty());
    assert!(store.board().check_invariants().is_ok());
}

#[test]
fn malformed_line_is_reported_with_its_number() {
    let script = "{\"op\":\"create\",\"column\":\"todo\"}\n\n{\"op\":\"move\",\"task_id\":\"x\"}\n";
    let err = parse_script(script).expect_err("missing move fields");
    assert!(matches!(err, ScriptError::Parse { line: 3, .. }));
}
