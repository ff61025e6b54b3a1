//! Board document types for `Taskboard`.
//!
//! A [`Board`] is one immutable snapshot of the document: three fixed
//! columns, each holding an ordered list of task ids, and a mapping from
//! task id to [`Task`]. Column order inside a board is the display order
//! `todo`, `inProgress`, `completed`.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Title given to a task created with empty content.
pub const DEFAULT_TASK_TITLE: &str = "New Task";

/// Description given to a task created with an empty description.
pub const DEFAULT_TASK_DESCRIPTION: &str = "Add a description";

/// Unique identifier for a task, based on UUID v7 for time-ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Mints a new time-ordered task identifier (UUID v7).
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Creates a `TaskId` from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

/// Error returned when a string does not name one of the fixed columns.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown column: {0}")]
pub struct ParseColumnError(pub String);

/// Identity of one of the board's fixed columns.
///
/// The set is closed: no operation adds or removes columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnId {
    /// Work not yet started.
    Todo,
    /// Work being done.
    InProgress,
    /// Finished work.
    Completed,
}

impl ColumnId {
    /// Number of columns on every board.
    pub const COUNT: usize = 3;

    /// All columns in display order.
    pub const ALL: [Self; Self::COUNT] = [Self::Todo, Self::InProgress, Self::Completed];

    /// Slot of this column in a board's column array.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Wire name of the column, as used by the UI layer.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "inProgress",
            Self::Completed => "completed",
        }
    }

    /// Display label of the column.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnId {
    type Err = ParseColumnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ParseColumnError(s.to_string()))
    }
}

/// A unit of work on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: TaskId,
    /// Display title.
    pub content: String,
    /// Free-text description.
    pub description: String,
}

/// An ordered lane of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Which fixed column this is.
    pub id: ColumnId,
    /// Display label.
    pub title: String,
    /// Task ids in display order. The only ordering authority for the lane.
    pub task_ids: Vec<TaskId>,
}

impl Column {
    /// Creates an empty column carrying its default title.
    #[must_use]
    pub fn empty(id: ColumnId) -> Self {
        Self {
            id,
            title: id.title().to_string(),
            task_ids: Vec::new(),
        }
    }

    /// Number of cards in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.task_ids.len()
    }

    /// Returns `true` if the column holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.task_ids.is_empty()
    }

    /// Position of `task_id` in this column, if present.
    #[must_use]
    pub fn position(&self, task_id: &TaskId) -> Option<usize> {
        self.task_ids.iter().position(|id| id == task_id)
    }
}

/// Which document invariant a board snapshot breaks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    /// A column sits in the wrong slot of the column array.
    #[error("column {found} stored in slot {slot}")]
    ColumnOutOfPlace {
        /// Slot that was inspected.
        slot: usize,
        /// Column found there.
        found: ColumnId,
    },
    /// A column carries a title other than its fixed one.
    #[error("column {column} retitled to {found:?}")]
    ColumnRetitled {
        /// Column carrying the title.
        column: ColumnId,
        /// Title found.
        found: String,
    },
    /// A task is stored under a key other than its own id.
    #[error("task {found} stored under key {key}")]
    TaskKeyMismatch {
        /// Map key.
        key: TaskId,
        /// Id carried by the task.
        found: TaskId,
    },
    /// A column references a task that does not exist.
    #[error("column {column} references missing task {task_id}")]
    DanglingTaskId {
        /// Column holding the reference.
        column: ColumnId,
        /// Missing task.
        task_id: TaskId,
    },
    /// A task id appears more than once across all columns.
    #[error("task {task_id} appears more than once")]
    DuplicateTaskId {
        /// Repeated task.
        task_id: TaskId,
    },
    /// A task exists but no column lists it.
    #[error("task {task_id} is not in any column")]
    OrphanTask {
        /// Unplaced task.
        task_id: TaskId,
    },
}

/// One version of the board document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    columns: [Column; ColumnId::COUNT],
    tasks: BTreeMap<TaskId, Task>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates a board with the three fixed columns and no tasks.
    #[must_use]
    pub fn new() -> Self {
        Self {
            columns: ColumnId::ALL.map(Column::empty),
            tasks: BTreeMap::new(),
        }
    }

    /// Columns in display order.
    #[must_use]
    pub const fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The column with the given id.
    #[must_use]
    pub const fn column(&self, id: ColumnId) -> &Column {
        &self.columns[id.index()]
    }

    /// Mutable access to a column's contents.
    ///
    /// Callers are responsible for keeping the board consistent; see
    /// [`Board::check_invariants`].
    pub const fn column_mut(&mut self, id: ColumnId) -> &mut Column {
        &mut self.columns[id.index()]
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.get(id)
    }

    /// Mutable access to a task's fields.
    pub fn task_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.get_mut(id)
    }

    /// Returns `true` if the board holds a task with this id.
    #[must_use]
    pub fn contains_task(&self, id: &TaskId) -> bool {
        self.tasks.contains_key(id)
    }

    /// Inserts a task into the task mapping without placing it in a column.
    ///
    /// Returns the task previously stored under the same id, if any.
    pub fn insert_task(&mut self, task: Task) -> Option<Task> {
        self.tasks.insert(task.id, task)
    }

    /// Removes a task from the task mapping without touching any column.
    pub fn remove_task(&mut self, id: &TaskId) -> Option<Task> {
        self.tasks.remove(id)
    }

    /// Total number of tasks on the board.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if the board holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Column that lists the given task.
    #[must_use]
    pub fn column_of(&self, task_id: &TaskId) -> Option<ColumnId> {
        self.position_of(task_id).map(|(column, _)| column)
    }

    /// Column and index at which the given task is listed.
    #[must_use]
    pub fn position_of(&self, task_id: &TaskId) -> Option<(ColumnId, usize)> {
        self.columns
            .iter()
            .find_map(|column| column.position(task_id).map(|index| (column.id, index)))
    }

    /// Verifies the document invariants.
    ///
    /// Every listed id must exist in the task mapping, every task must be
    /// listed exactly once across all columns, and each column must sit in
    /// its own slot under its fixed title.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        for (slot, column) in self.columns.iter().enumerate() {
            if column.id.index() != slot {
                return Err(InvariantViolation::ColumnOutOfPlace {
                    slot,
                    found: column.id,
                });
            }
            if column.title != column.id.title() {
                return Err(InvariantViolation::ColumnRetitled {
                    column: column.id,
                    found: column.title.clone(),
                });
            }
        }

        for (key, task) in &self.tasks {
            if *key != task.id {
                return Err(InvariantViolation::TaskKeyMismatch {
                    key: *key,
                    found: task.id,
                });
            }
        }

        let mut listed = HashSet::with_capacity(self.tasks.len());
        for column in &self.columns {
            for task_id in &column.task_ids {
                if !self.tasks.contains_key(task_id) {
                    return Err(InvariantViolation::DanglingTaskId {
                        column: column.id,
                        task_id: *task_id,
                    });
                }
                if !listed.insert(*task_id) {
                    return Err(InvariantViolation::DuplicateTaskId { task_id: *task_id });
                }
            }
        }

        if let Some(task_id) = self.tasks.keys().find(|id| !listed.contains(*id)) {
            return Err(InvariantViolation::OrphanTask { task_id: *task_id });
        }

        Ok(())
    }
}
