//! Configuration system for the `taskboard` binary.
//!
//! Supports layered configuration with the following priority (highest first):
//! 1. CLI arguments
//! 2. Environment variables (via clap `env` attribute)
//! 3. TOML config file (`~/.config/taskboard/config.toml`)
//! 4. Compiled defaults
//!
//! Missing config file is not an error (defaults are used). An explicit
//! `--config` path that doesn't exist is an error.

use std::path::PathBuf;

use crate::board::TaskDefaults;
use crate::render::RenderOptions;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),
}

// ---------------------------------------------------------------------------
// TOML file structs (all fields Option for partial overrides)
// ---------------------------------------------------------------------------

/// Top-level TOML config file structure.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ConfigFile {
    tasks: TasksFileConfig,
    render: RenderFileConfig,
}

/// `[tasks]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct TasksFileConfig {
    default_title: Option<String>,
    default_description: Option<String>,
}

/// `[render]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct RenderFileConfig {
    show_ids: Option<bool>,
    show_descriptions: Option<bool>,
}

// ---------------------------------------------------------------------------
// CLI arguments
// ---------------------------------------------------------------------------

/// CLI arguments parsed by clap.
#[derive(clap::Parser, Debug, Default)]
#[command(version, about = "Replay board commands and print the resulting board")]
pub struct CliArgs {
    /// JSON-lines command script (default: read from stdin).
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    /// Path to config file (default: `~/.config/taskboard/config.toml`).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Stop at the first rejected command.
    #[arg(long)]
    pub strict: bool,

    /// Print task ids next to titles.
    #[arg(long)]
    pub show_ids: bool,

    /// Omit task descriptions from the output.
    #[arg(long)]
    pub hide_descriptions: bool,

    /// Title given to tasks created without one.
    #[arg(long, env = "TASKBOARD_DEFAULT_TITLE")]
    pub default_title: Option<String>,

    /// Description given to tasks created without one.
    #[arg(long, env = "TASKBOARD_DEFAULT_DESCRIPTION")]
    pub default_description: Option<String>,

    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", env = "TASKBOARD_LOG")]
    pub log_level: String,

    /// Path to log file (default: `$TMPDIR/taskboard.log`).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Resolved configuration
// ---------------------------------------------------------------------------

/// Fully resolved configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Placeholders for empty form input.
    pub task_defaults: TaskDefaults,
    /// Board output options.
    pub render: RenderOptions,
    /// Abort the replay on the first rejected command.
    pub strict: bool,
    /// Log level filter string.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            task_defaults: TaskDefaults::default(),
            render: RenderOptions::default(),
            strict: false,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration by merging CLI args, env vars, and a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the explicit config file cannot be read,
    /// or if any config file that exists cannot be parsed.
    pub fn load(cli: &CliArgs) -> Result<Self, ConfigError> {
        let file = load_config_file(cli.config.as_deref())?;
        Ok(Self::resolve(cli, &file))
    }

    /// Resolve an `AppConfig` from CLI args and a parsed config file.
    ///
    /// Priority: CLI > file > default. Boolean flags can only switch a
    /// setting away from its default.
    fn resolve(cli: &CliArgs, file: &ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            task_defaults: TaskDefaults {
                title: cli
                    .default_title
                    .clone()
                    .or_else(|| file.tasks.default_title.clone())
                    .unwrap_or(defaults.task_defaults.title),
                description: cli
                    .default_description
                    .clone()
                    .or_else(|| file.tasks.default_description.clone())
                    .unwrap_or(defaults.task_defaults.description),
            },
            render: RenderOptions {
                show_ids: cli.show_ids
                    || file.render.show_ids.unwrap_or(defaults.render.show_ids),
                show_descriptions: !cli.hide_descriptions
                    && file
                        .render
                        .show_descriptions
                        .unwrap_or(defaults.render.show_descriptions),
            },
            strict: cli.strict,
            log_level: cli.log_level.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Load and parse a TOML config file.
///
/// If `explicit_path` is `Some`, the file must exist (error if not).
/// If `explicit_path` is `None`, the default path is tried and missing file
/// is treated as empty config.
fn load_config_file(explicit_path: Option<&std::path::Path>) -> Result<ConfigFile, ConfigError> {
    let path = if let Some(p) = explicit_path {
        let contents = std::fs::read_to_string(p).map_err(|e| ConfigError::ReadFile {
            path: p.to_path_buf(),
            source: e,
        })?;
        return Ok(toml::from_str(&contents)?);
    } else {
        let Some(config_dir) = dirs::config_dir() else {
            return Ok(ConfigFile::default());
        };
        config_dir.join("taskboard").join("config.toml")
    };

    match std::fs::read_to_string(&path) {
        Ok(contents) => Ok(toml::from_str(&contents)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ConfigFile::default()),
        Err(e) => Err(ConfigError::ReadFile { path, source: e }),
    }
}
