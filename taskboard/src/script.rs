//! JSON-lines command scripts.
//!
//! A script holds one [`Command`] per line. Blank lines and lines starting
//! with `#` are skipped. A `create` line may carry a `label`; later lines
//! refer to the created task as `@label` wherever a task id is expected.

use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};

use taskboard_proto::board::TaskId;
use taskboard_proto::command::Command;

use crate::board::{BoardError, BoardStore};

/// Prefix marking a task reference as a script label.
pub const LABEL_PREFIX: char = '@';

/// Errors that can occur while loading a script.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// Failed to read the script source.
    #[error("failed to read script {path}: {source}")]
    Read {
        /// Path that was attempted (`-` for stdin).
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// A line is not a valid command.
    #[error("line {line}: {source}")]
    Parse {
        /// One-based line number.
        line: usize,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

/// One parsed script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptStep {
    /// One-based line number in the source.
    pub line: usize,
    /// Command to apply.
    pub command: Command,
    /// Name bound to the task a `create` mints.
    pub label: Option<String>,
}

/// A command the store refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// Line of the rejected command.
    pub line: usize,
    /// Why it was rejected.
    pub error: BoardError,
}

/// Summary of a script run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptReport {
    /// Commands that committed (including no-op moves and abandoned drags).
    pub applied: usize,
    /// Commands the store rejected, in order.
    pub rejected: Vec<Rejection>,
    /// The run stopped early because of a rejection in strict mode.
    pub halted: bool,
}

/// Reads a script from `path`, or from stdin when `path` is `None`.
///
/// # Errors
///
/// Returns [`ScriptError::Read`] if the source cannot be read.
pub fn read_script(path: Option<&Path>) -> Result<String, ScriptError> {
    match path {
        Some(p) => std::fs::read_to_string(p).map_err(|e| ScriptError::Read {
            path: p.to_path_buf(),
            source: e,
        }),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| ScriptError::Read {
                    path: PathBuf::from("-"),
                    source: e,
                })?;
            Ok(text)
        }
    }
}

/// Parses script text into steps.
///
/// # Errors
///
/// Returns [`ScriptError::Parse`] for the first line that is not a command.
pub fn parse_script(text: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    let mut steps = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        steps.push(parse_step(line, trimmed)?);
    }
    Ok(steps)
}

fn parse_step(line: usize, text: &str) -> Result<ScriptStep, ScriptError> {
    let mut value: serde_json::Value =
        serde_json::from_str(text).map_err(|source| ScriptError::Parse { line, source })?;
    let label = value
        .as_object_mut()
        .and_then(|object| object.remove("label"))
        .and_then(|label| label.as_str().map(str::to_string));
    let command =
        serde_json::from_value(value).map_err(|source| ScriptError::Parse { line, source })?;
    Ok(ScriptStep {
        line,
        command,
        label,
    })
}

/// Applies steps to `store` in order.
///
/// Rejected commands are recorded and skipped; with `strict` the run stops
/// at the first one.
pub fn run_script(store: &mut BoardStore, steps: &[ScriptStep], strict: bool) -> ScriptReport {
    let mut labels: HashMap<String, TaskId> = HashMap::new();
    let mut report = ScriptReport::default();

    for step in steps {
        let command = resolve_labels(&step.command, &labels);
        match store.apply(&command) {
            Ok(outcome) => {
                report.applied += 1;
                if let (Some(label), Some(id)) = (&step.label, outcome.created) {
                    labels.insert(label.clone(), id);
                }
            }
            Err(error) => {
                tracing::warn!(line = step.line, error = %error, "script command rejected");
                report.rejected.push(Rejection {
                    line: step.line,
                    error,
                });
                if strict {
                    report.halted = true;
                    break;
                }
            }
        }
    }

    report
}

/// Replaces an `@label` task reference with the id bound to it.
///
/// Unknown labels are left as written so the store reports them as
/// missing tasks.
fn resolve_labels(command: &Command, labels: &HashMap<String, TaskId>) -> Command {
    let mut resolved = command.clone();
    if let Some(task_id) = resolved.task_id_mut() {
        let bound = task_id
            .strip_prefix(LABEL_PREFIX)
            .and_then(|label| labels.get(label));
        if let Some(id) = bound {
            *task_id = id.to_string();
        }
    }
    resolved
}
