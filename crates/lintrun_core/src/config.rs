//! Runner configuration.

use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use jsonc_parser::ParseOptions;
use serde::{Deserialize, Serialize};

use crate::RunnerError;

/// Configuration for the runner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RunnerConfig {
    /// Maximum number of linter processes running at once.
    #[serde(default = "default_max_workers")]
    pub max_workers: usize,

    /// Linter invocation.
    #[serde(default)]
    pub linter: LinterCommand,

    /// File patterns to include.
    #[serde(default)]
    pub include: Vec<String>,

    /// File patterns to exclude. Dependencies are skipped unless the file
    /// sets its own list.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Directory containing the configuration file. Relative linter paths
    /// are resolved against it.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

/// The external linter: `<command> <args...> <file>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinterCommand {
    #[serde(default = "default_command")]
    pub command: String,

    #[serde(default = "default_args")]
    pub args: Vec<String>,
}

impl Default for LinterCommand {
    fn default() -> Self {
        Self {
            command: default_command(),
            args: default_args(),
        }
    }
}

fn default_exclude() -> Vec<String> {
    vec!["**/node_modules/**".to_string()]
}

fn default_max_workers() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

fn default_command() -> String {
    "node_modules/.bin/eslint".to_string()
}

fn default_args() -> Vec<String> {
    vec!["--color".to_string()]
}

impl RunnerConfig {
    /// Configuration file names, in lookup order.
    pub const CONFIG_FILES: [&'static str; 2] = [".lintrun.jsonc", ".lintrun.json"];

    /// Creates the default configuration.
    pub fn new() -> Self {
        Self {
            max_workers: default_max_workers(),
            linter: LinterCommand::default(),
            include: Vec::new(),
            exclude: default_exclude(),
            base_dir: None,
        }
    }

    /// Finds a configuration file in `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let dir = dir.as_ref();
        Self::CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Loads configuration from a file.
    ///
    /// Supports `.lintrun.jsonc`, `.lintrun.json`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RunnerError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| RunnerError::config(format!("Failed to read config: {}", e)))?;

        let mut config = Self::from_json(&content)?;

        if let Some(parent) = path.parent() {
            config.base_dir = Some(parent.to_path_buf());
        }

        Ok(config)
    }

    /// Parses configuration from a JSON string. Comments and trailing commas
    /// are accepted.
    pub fn from_json(json: &str) -> Result<Self, RunnerError> {
        let value = jsonc_parser::parse_to_serde_value(json, &ParseOptions::default())
            .map_err(|e| RunnerError::config(format!("Invalid JSON: {}", e)))?
            .unwrap_or_else(|| serde_json::Value::Object(serde_json::Map::new()));

        let config: Self = serde_json::from_value(value)
            .map_err(|e| RunnerError::config(format!("Invalid config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), RunnerError> {
        if self.max_workers == 0 {
            return Err(RunnerError::config("maxWorkers must be at least 1"));
        }
        if self.linter.command.trim().is_empty() {
            return Err(RunnerError::config("linter.command must not be empty"));
        }
        Ok(())
    }

    /// Path of the linter executable.
    ///
    /// A bare program name is left for `PATH` lookup; a relative path is
    /// resolved against the configuration directory.
    pub fn linter_program(&self) -> PathBuf {
        let command = Path::new(&self.linter.command);
        let is_bare_name = command.components().count() == 1 && !command.is_absolute();
        match &self.base_dir {
            Some(base) if !is_bare_name && command.is_relative() => base.join(command),
            _ => command.to_path_buf(),
        }
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self::new()
    }
}
