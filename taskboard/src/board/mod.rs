//! Board state management for `Taskboard`.
//!
//! Every command consumes one [`Board`](taskboard_proto::board::Board)
//! snapshot and yields the next. Validation happens before any change, so a
//! rejected command leaves the current snapshot exactly as it was.

pub mod ops;
pub mod reorder;
pub mod store;

pub use ops::TaskDefaults;
pub use reorder::{ReorderError, reorder_within, transfer};
pub use store::{BoardStore, Outcome};

use taskboard_proto::board::{ColumnId, InvariantViolation};
use thiserror::Error;

/// Errors that can occur during board commands.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    /// The named column is not one of the fixed columns.
    #[error("invalid column: {0}")]
    InvalidColumn(String),
    /// No task with the given id exists on the board.
    #[error("task not found: {0}")]
    TaskNotFound(String),
    /// A position does not match the current column contents.
    #[error("index {index} is stale or out of range for column {column} (len {len})")]
    IndexOutOfRange {
        /// Column the index was checked against.
        column: ColumnId,
        /// Index supplied by the caller.
        index: usize,
        /// Length the index was checked against.
        len: usize,
    },
    /// A snapshot supplied from outside breaks the document invariants.
    #[error("inconsistent board: {0}")]
    Inconsistent(#[from] InvariantViolation),
}
