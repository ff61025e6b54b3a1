//! Board store holding the current snapshot.
//!
//! `BoardStore` is the application-layer interface for the UI: it owns the
//! latest [`Board`], runs commands against it through [`super::ops`], and
//! hands back the successor snapshot for rendering.

use taskboard_proto::board::{Board, ColumnId, TaskId};
use taskboard_proto::command::{Command, DropLocation};

use super::BoardError;
use super::ops::{self, TaskDefaults};

/// Result of applying a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Board after the command.
    pub board: Board,
    /// Id minted by a create command.
    pub created: Option<TaskId>,
}

/// Owns the current board snapshot and serializes commands against it.
///
/// Commands run one at a time; each sees the board committed by the
/// previous one. A rejected command leaves the current snapshot in place.
#[derive(Debug, Clone, Default)]
pub struct BoardStore {
    board: Board,
    defaults: TaskDefaults,
}

impl BoardStore {
    /// Creates a store with an empty board and the standard placeholders.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with an empty board and custom placeholders.
    #[must_use]
    pub fn with_defaults(defaults: TaskDefaults) -> Self {
        Self {
            board: Board::new(),
            defaults,
        }
    }

    /// Adopts an existing snapshot, e.g. one decoded by an outer layer.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Inconsistent`] if the snapshot breaks the
    /// document invariants.
    pub fn from_board(board: Board, defaults: TaskDefaults) -> Result<Self, BoardError> {
        board.check_invariants()?;
        Ok(Self { board, defaults })
    }

    /// The current snapshot.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Placeholders applied to empty form input.
    #[must_use]
    pub const fn defaults(&self) -> &TaskDefaults {
        &self.defaults
    }

    /// Consumes the store, returning the current snapshot.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Adds a task at the end of `column`.
    pub fn create_task(
        &mut self,
        column: ColumnId,
        content: &str,
        description: &str,
    ) -> (Board, TaskId) {
        let (next, id) = ops::create_task(&self.board, &self.defaults, column, content, description);
        tracing::debug!(task_id = %id, %column, "task created");
        (self.commit(next), id)
    }

    /// Replaces a task's title and description in place.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TaskNotFound`] if the task does not exist.
    pub fn update_task(
        &mut self,
        task_id: &TaskId,
        content: &str,
        description: &str,
    ) -> Result<Board, BoardError> {
        let next = ops::update_task(&self.board, &self.defaults, task_id, content, description)?;
        tracing::debug!(task_id = %task_id, "task updated");
        Ok(self.commit(next))
    }

    /// Removes a task from the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TaskNotFound`] if the task does not exist,
    /// including when it was already deleted.
    pub fn delete_task(&mut self, task_id: &TaskId) -> Result<Board, BoardError> {
        let next = ops::delete_task(&self.board, task_id)?;
        tracing::debug!(task_id = %task_id, "task deleted");
        Ok(self.commit(next))
    }

    /// Moves a task to a new column and/or position.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TaskNotFound`] if the task does not exist, or
    /// [`BoardError::IndexOutOfRange`] if either index does not match the
    /// current board.
    pub fn move_task(
        &mut self,
        task_id: &TaskId,
        source: ColumnId,
        source_index: usize,
        destination: ColumnId,
        destination_index: usize,
    ) -> Result<Board, BoardError> {
        let next = ops::move_task(
            &self.board,
            task_id,
            source,
            source_index,
            destination,
            destination_index,
        )?;
        if source == destination && source_index == destination_index {
            tracing::trace!(task_id = %task_id, %source, source_index, "move onto same slot");
            return Ok(next);
        }

        tracing::debug!(
            task_id = %task_id,
            from = %source,
            from_index = source_index,
            to = %destination,
            to_index = destination_index,
            "task moved"
        );
        Ok(self.commit(next))
    }

    /// Current title and description of a task, for prefilling an edit form.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TaskNotFound`] if the task does not exist.
    pub fn edit_form(&self, task_id: &TaskId) -> Result<(&str, &str), BoardError> {
        self.board
            .task(task_id)
            .map(|task| (task.content.as_str(), task.description.as_str()))
            .ok_or_else(|| BoardError::TaskNotFound(task_id.to_string()))
    }

    /// Applies a command carrying raw UI input.
    ///
    /// Column names and task ids are parsed here; an unknown column yields
    /// [`BoardError::InvalidColumn`] and an unparsable task id yields
    /// [`BoardError::TaskNotFound`]. A drag without a destination is a
    /// no-op and never fails.
    ///
    /// # Errors
    ///
    /// Returns the [`BoardError`] of the rejected command; the board is
    /// left unchanged.
    pub fn apply(&mut self, command: &Command) -> Result<Outcome, BoardError> {
        let result = self.dispatch(command);
        if let Err(ref e) = result {
            tracing::debug!(
                op = command.verb(),
                task_id = command.task_id(),
                error = %e,
                "command rejected"
            );
        }
        result
    }

    fn dispatch(&mut self, command: &Command) -> Result<Outcome, BoardError> {
        match command {
            Command::Create {
                column,
                content,
                description,
            } => {
                let column = parse_column(column)?;
                let (board, id) = self.create_task(column, content, description);
                Ok(Outcome {
                    board,
                    created: Some(id),
                })
            }
            Command::Update {
                task_id,
                content,
                description,
            } => {
                let task_id = parse_task_id(task_id)?;
                let board = self.update_task(&task_id, content, description)?;
                Ok(Outcome::board_only(board))
            }
            Command::Delete { task_id } => {
                let task_id = parse_task_id(task_id)?;
                let board = self.delete_task(&task_id)?;
                Ok(Outcome::board_only(board))
            }
            Command::Move {
                task_id,
                source,
                destination,
            } => self.dispatch_move(task_id, source, destination),
            Command::Drag {
                task_id,
                source,
                destination,
            } => match destination {
                Some(destination) => self.dispatch_move(task_id, source, destination),
                None => {
                    tracing::trace!(task_id = %task_id, "drag abandoned");
                    Ok(Outcome::board_only(self.board.clone()))
                }
            },
        }
    }

    fn dispatch_move(
        &mut self,
        task_id: &str,
        source: &DropLocation,
        destination: &DropLocation,
    ) -> Result<Outcome, BoardError> {
        let source_column = parse_column(&source.column)?;
        let destination_column = parse_column(&destination.column)?;
        let task_id = parse_task_id(task_id)?;
        let board = self.move_task(
            &task_id,
            source_column,
            source.index,
            destination_column,
            destination.index,
        )?;
        Ok(Outcome::board_only(board))
    }

    fn commit(&mut self, next: Board) -> Board {
        debug_assert!(next.check_invariants().is_ok());
        self.board = next;
        self.board.clone()
    }
}

impl Outcome {
    const fn board_only(board: Board) -> Self {
        Self {
            board,
            created: None,
        }
    }
}

fn parse_column(raw: &str) -> Result<ColumnId, BoardError> {
    raw.parse()
        .map_err(|_| BoardError::InvalidColumn(raw.to_string()))
}

fn parse_task_id(raw: &str) -> Result<TaskId, BoardError> {
    raw.parse()
        .map_err(|_| BoardError::TaskNotFound(raw.to_string()))
}
