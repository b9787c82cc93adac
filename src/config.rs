//! Configuration file support for mvn-dep-cost.
//!
//! Provides YAML-based configuration through `mvn-dep-cost.config.yml` files,
//! including data structures, file loading, validation, and merging with the
//! command line.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::Args;
use mvn_dep_cost::prelude::{ProfilerError, Result, DEFAULT_BUILD_COMMAND};

pub const CONFIG_FILENAME: &str = "mvn-dep-cost.config.yml";

const DEFAULT_WORK_DIR: &str = "tmp";
const DEFAULT_RESULT_DIR: &str = "result";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub work_dir: Option<PathBuf>,
    pub result_dir: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
    pub build_command: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Directory searched for a config file: the one holding the descriptor.
pub fn config_dir_for(descriptor: &Path) -> &Path {
    match descriptor.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref command) = config.build_command {
        let has_program = command
            .first()
            .is_some_and(|program| !program.trim().is_empty());
        if !has_program {
            return Err(ProfilerError::InvalidConfig {
                message: "build_command must not be empty".to_string(),
                hint: "List the program first, then its arguments (e.g. [\"mvn\", \"compile\"])"
                    .to_string(),
            }
            .into());
        }
    }

    if config.timeout_secs == Some(0) {
        return Err(ProfilerError::InvalidConfig {
            message: "timeout_secs must be greater than 0".to_string(),
            hint: "Remove timeout_secs to wait for builds without a limit".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Effective settings for one run.
///
/// Precedence: command-line flags, then the config file, then defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub work_dir: PathBuf,
    pub result_dir: PathBuf,
    pub timeout: Option<Duration>,
    pub build_command: Vec<String>,
}

impl Settings {
    pub fn resolve(args: &Args, config: Option<ConfigFile>) -> Self {
        let config = config.unwrap_or_default();

        let work_dir = args
            .work_dir
            .clone()
            .or(config.work_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_WORK_DIR));
        let result_dir = args
            .result_dir
            .clone()
            .or(config.result_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RESULT_DIR));
        let timeout = args
            .timeout
            .or(config.timeout_secs)
            .map(Duration::from_secs);
        let build_command = args
            .build_command
            .as_ref()
            .map(|command| command.0.clone())
            .or(config.build_command)
            .unwrap_or_else(|| DEFAULT_BUILD_COMMAND.iter().map(|s| s.to_string()).collect());

        Self {
            work_dir,
            result_dir,
            timeout,
            build_command,
        }
    }
}
