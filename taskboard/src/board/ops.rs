//! Snapshot transformers for the four board commands.
//!
//! Each function reads the given board, validates the request against it,
//! and only then builds the successor snapshot. The input board is never
//! modified.

use taskboard_proto::board::{
    Board, ColumnId, DEFAULT_TASK_DESCRIPTION, DEFAULT_TASK_TITLE, Task, TaskId,
};

use super::BoardError;
use super::reorder::{ReorderError, reorder_within, transfer};

/// Placeholder text applied to empty form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDefaults {
    /// Title used when a task is created or edited with empty content.
    pub title: String,
    /// Description used when a task is created with an empty description.
    pub description: String,
}

impl Default for TaskDefaults {
    fn default() -> Self {
        Self {
            title: DEFAULT_TASK_TITLE.to_string(),
            description: DEFAULT_TASK_DESCRIPTION.to_string(),
        }
    }
}

impl TaskDefaults {
    fn title_or_default(&self, content: &str) -> String {
        if content.is_empty() {
            self.title.clone()
        } else {
            content.to_string()
        }
    }

    fn description_or_default(&self, description: &str) -> String {
        if description.is_empty() {
            self.description.clone()
        } else {
            description.to_string()
        }
    }
}

/// Adds a new task at the end of `column`.
///
/// Empty `content` or `description` are replaced by the placeholders in
/// `defaults`. Returns the new board and the freshly minted id.
#[must_use]
pub fn create_task(
    board: &Board,
    defaults: &TaskDefaults,
    column: ColumnId,
    content: &str,
    description: &str,
) -> (Board, TaskId) {
    let mut id = TaskId::new();
    while board.contains_task(&id) {
        id = TaskId::new();
    }

    let mut next = board.clone();
    next.insert_task(Task {
        id,
        content: defaults.title_or_default(content),
        description: defaults.description_or_default(description),
    });
    next.column_mut(column).task_ids.push(id);
    (next, id)
}

/// Replaces the title and description of an existing task.
///
/// The task keeps its column and position. Empty `content` falls back to
/// the placeholder title; `description` is stored as given.
///
/// # Errors
///
/// Returns [`BoardError::TaskNotFound`] if `task_id` is not on the board.
pub fn update_task(
    board: &Board,
    defaults: &TaskDefaults,
    task_id: &TaskId,
    content: &str,
    description: &str,
) -> Result<Board, BoardError> {
    if !board.contains_task(task_id) {
        return Err(BoardError::TaskNotFound(task_id.to_string()));
    }

    let mut next = board.clone();
    let task = next
        .task_mut(task_id)
        .ok_or_else(|| BoardError::TaskNotFound(task_id.to_string()))?;
    task.content = defaults.title_or_default(content);
    task.description = description.to_string();
    Ok(next)
}

/// Removes a task from the task mapping and from whichever column lists it.
///
/// # Errors
///
/// Returns [`BoardError::TaskNotFound`] if `task_id` is not on the board.
pub fn delete_task(board: &Board, task_id: &TaskId) -> Result<Board, BoardError> {
    if !board.contains_task(task_id) {
        return Err(BoardError::TaskNotFound(task_id.to_string()));
    }

    let mut next = board.clone();
    next.remove_task(task_id);
    for column in ColumnId::ALL {
        next.column_mut(column).task_ids.retain(|id| id != task_id);
    }
    Ok(next)
}

/// Moves a task from `source[source_index]` to `destination[destination_index]`.
///
/// Within one column the destination index refers to the column after the
/// task has been taken out; across columns it refers to the destination as
/// it stands. Moving a task onto its own position returns the board as is.
///
/// # Errors
///
/// Returns [`BoardError::TaskNotFound`] if `task_id` is not on the board,
/// or [`BoardError::IndexOutOfRange`] if `source_index` does not hold
/// `task_id` or `destination_index` is past the insertion range.
pub fn move_task(
    board: &Board,
    task_id: &TaskId,
    source: ColumnId,
    source_index: usize,
    destination: ColumnId,
    destination_index: usize,
) -> Result<Board, BoardError> {
    if !board.contains_task(task_id) {
        return Err(BoardError::TaskNotFound(task_id.to_string()));
    }

    let source_ids = &board.column(source).task_ids;
    if source_ids.get(source_index) != Some(task_id) {
        return Err(BoardError::IndexOutOfRange {
            column: source,
            index: source_index,
            len: source_ids.len(),
        });
    }

    if source == destination && source_index == destination_index {
        return Ok(board.clone());
    }

    if source == destination {
        let reordered = reorder_within(source_ids, source_index, destination_index)
            .map_err(|e| out_of_range(e, source, destination))?;
        let mut next = board.clone();
        next.column_mut(source).task_ids = reordered;
        return Ok(next);
    }

    let (remaining, received) = transfer(
        source_ids,
        source_index,
        &board.column(destination).task_ids,
        destination_index,
    )
    .map_err(|e| out_of_range(e, source, destination))?;
    let mut next = board.clone();
    next.column_mut(source).task_ids = remaining;
    next.column_mut(destination).task_ids = received;
    Ok(next)
}

const fn out_of_range(err: ReorderError, source: ColumnId, destination: ColumnId) -> BoardError {
    match err {
        ReorderError::Source { index, len } => BoardError::IndexOutOfRange {
            column: source,
            index,
            len,
        },
        ReorderError::Destination { index, len } => BoardError::IndexOutOfRange {
            column: destination,
            index,
            len,
        },
    }
}
