//! Replays board commands and prints the resulting board.
//!
//! Reads a JSON-lines script of commands, applies them to a fresh board in
//! order, reports rejected commands on stderr, and prints the final board.
//! Configuration via CLI flags, environment variables, or config file
//! (`~/.config/taskboard/config.toml`).
//!
//! ```bash
//! # Replay a script file
//! cargo run --bin taskboard -- --script demo.jsonl
//!
//! # Or pipe commands in
//! echo '{"op":"create","column":"todo","content":"Ship it"}' | cargo run --bin taskboard
//! ```

use std::path::Path;

use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;

use taskboard::board::BoardStore;
use taskboard::config::{AppConfig, CliArgs};
use taskboard::render;
use taskboard::script;

fn main() {
    let cli = CliArgs::parse();

    let config = match AppConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            std::process::exit(1);
        }
    };

    // Logs go to a file so stdout carries only the board.
    let _log_guard = init_logging(&config.log_level, cli.log_file.as_deref());

    tracing::info!("taskboard starting");

    let steps = match script::read_script(cli.script.as_deref())
        .and_then(|text| script::parse_script(&text))
    {
        Ok(steps) => steps,
        Err(e) => {
            tracing::error!(error = %e, "failed to load script");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let mut store = BoardStore::with_defaults(config.task_defaults.clone());
    let report = script::run_script(&mut store, &steps, config.strict);

    for rejection in &report.rejected {
        eprintln!("line {}: {}", rejection.line, rejection.error);
    }
    print!("{}", render::BoardView::new(store.board(), &config.render));

    tracing::info!(
        applied = report.applied,
        rejected = report.rejected.len(),
        "taskboard exiting"
    );

    if report.halted {
        std::process::exit(2);
    }
}

/// Initialize file-based logging.
///
/// Returns a [`WorkerGuard`] that must be held until shutdown to ensure all
/// buffered log entries are flushed.
fn init_logging(level: &str, file_path: Option<&Path>) -> Option<WorkerGuard> {
    let default_path = std::env::temp_dir().join("taskboard.log");
    let log_path = file_path.unwrap_or(&default_path);

    let log_dir = log_path.parent()?;
    let file_name = log_path.file_name()?.to_str()?;

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .init();

    Some(guard)
}
