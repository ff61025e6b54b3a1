//! Commands the UI layer sends to the board.
//!
//! Inputs are raw strings exactly as the outer layer captured them: column
//! names from drop targets, task ids from rendered cards, form text that has
//! not been defaulted yet. Parsing and validation happen in the store.

use serde::{Deserialize, Serialize};

/// A column plus index, as reported by a drag gesture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropLocation {
    /// Column wire name (`todo`, `inProgress`, `completed`).
    pub column: String,
    /// Zero-based position within the column.
    pub index: usize,
}

impl DropLocation {
    /// Creates a drop location from a column name and index.
    pub fn new(column: impl Into<String>, index: usize) -> Self {
        Self {
            column: column.into(),
            index,
        }
    }
}

/// One command against the board.
///
/// Serialized as JSON objects tagged by `op`, e.g.
/// `{"op":"create","column":"todo","content":"Write docs"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    /// Add a task at the end of a column.
    Create {
        /// Target column.
        column: String,
        /// Title as typed; empty means "use the placeholder".
        #[serde(default)]
        content: String,
        /// Description as typed; empty means "use the placeholder".
        #[serde(default)]
        description: String,
    },
    /// Replace a task's title and description.
    Update {
        /// Task to edit.
        task_id: String,
        /// New title.
        #[serde(default)]
        content: String,
        /// New description.
        #[serde(default)]
        description: String,
    },
    /// Remove a task from the board.
    Delete {
        /// Task to remove.
        task_id: String,
    },
    /// Move a task to an explicit position.
    Move {
        /// Task being moved.
        task_id: String,
        /// Where the task currently is.
        source: DropLocation,
        /// Where the task should end up.
        destination: DropLocation,
    },
    /// End of a drag gesture. A missing destination abandons the drag.
    Drag {
        /// Task being dragged.
        task_id: String,
        /// Where the drag started.
        source: DropLocation,
        /// Where it was dropped, if anywhere.
        #[serde(default)]
        destination: Option<DropLocation>,
    },
}

impl Command {
    /// Task id this command addresses, if it addresses an existing task.
    #[must_use]
    pub fn task_id(&self) -> Option<&str> {
        match self {
            Self::Create { .. } => None,
            Self::Update { task_id, .. }
            | Self::Delete { task_id }
            | Self::Move { task_id, .. }
            | Self::Drag { task_id, .. } => Some(task_id.as_str()),
        }
    }

    /// Mutable access to the addressed task id, for callers that resolve
    /// symbolic references before dispatch.
    pub fn task_id_mut(&mut self) -> Option<&mut String> {
        match self {
            Self::Create { .. } => None,
            Self::Update { task_id, .. }
            | Self::Delete { task_id }
            | Self::Move { task_id, .. }
            | Self::Drag { task_id, .. } => Some(task_id),
        }
    }

    /// Short verb naming the command, for logs.
    #[must_use]
    pub const fn verb(&self) -> &'static str {
        match self {
            Self::Create { .. } => "create",
            Self::Update { .. } => "update",
            Self::Delete { .. } => "delete",
            Self::Move { .. } => "move",
            Self::Drag { .. } => "drag",
        }
    }
}
