//! Plain-text board rendering.

use std::fmt;

use taskboard_proto::board::Board;

/// What to include when rendering a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Print each task's id after its title.
    pub show_ids: bool,
    /// Print each task's description under its title.
    pub show_descriptions: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_ids: false,
            show_descriptions: true,
        }
    }
}

/// Text view of a board, one block per column in display order.
///
/// Each block starts with the column title and its card count, followed by
/// one line per task.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a Board,
    options: &'a RenderOptions,
}

impl<'a> BoardView<'a> {
    /// Creates a view of `board` rendered with `options`.
    #[must_use]
    pub const fn new(board: &'a Board, options: &'a RenderOptions) -> Self {
        Self { board, options }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for column in self.board.columns() {
            writeln!(f, "{} ({} cards)", column.title, column.len())?;
            if column.is_empty() {
                writeln!(f, "  (empty)")?;
            }
            for task in column.task_ids.iter().filter_map(|id| self.board.task(id)) {
                if self.options.show_ids {
                    writeln!(f, "  - {} [{}]", task.content, task.id)?;
                } else {
                    writeln!(f, "  - {}", task.content)?;
                }
                if self.options.show_descriptions && !task.description.is_empty() {
                    writeln!(f, "      {}", task.description)?;
                }
            }
        }
        Ok(())
    }
}

/// Renders the board as text; see [`BoardView`].
#[must_use]
pub fn render_board(board: &Board, options: &RenderOptions) -> String {
    BoardView::new(board, options).to_string()
}
