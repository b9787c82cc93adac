use crate::ports::outbound::BuildRunner;
use crate::profiling::domain::{BuildOutcome, BuildStatus};
use crate::shared::error::ProfilerError;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use std::fs::File;
use std::path::Path;
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::Command;
use tracing::{debug, warn};

/// Compile only, skipping test compilation and execution
pub const DEFAULT_BUILD_COMMAND: &[&str] = &["mvn", "compile", "-Dmaven.test.skip=true"];

/// MavenBuildRunner adapter running the build tool as a child process
///
/// stdout and stderr share one log file. Without a timeout the runner
/// waits for the process indefinitely.
#[derive(Debug, Clone)]
pub struct MavenBuildRunner {
    program: String,
    args: Vec<String>,
    timeout: Option<Duration>,
}

impl MavenBuildRunner {
    /// Creates a runner from a full command line (program first)
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the command is empty or the program is blank
    pub fn new(command: Vec<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut parts = command.into_iter();
        let program = parts
            .next()
            .filter(|program| !program.trim().is_empty())
            .ok_or_else(|| ProfilerError::InvalidConfig {
                message: "build command is empty".to_string(),
                hint: "Provide at least the program to run, e.g. \"mvn compile\"".to_string(),
            })?;

        Ok(Self {
            program,
            args: parts.collect(),
            timeout,
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl Default for MavenBuildRunner {
    fn default() -> Self {
        Self {
            program: DEFAULT_BUILD_COMMAND[0].to_string(),
            args: DEFAULT_BUILD_COMMAND[1..]
                .iter()
                .map(|arg| arg.to_string())
                .collect(),
            timeout: None,
        }
    }
}

#[async_trait]
impl BuildRunner for MavenBuildRunner {
    async fn run(&self, work_dir: &Path, log_path: &Path) -> Result<BuildOutcome> {
        let log_error = |e: std::io::Error| ProfilerError::Workspace {
            path: log_path.to_path_buf(),
            details: format!("Failed to create build log: {}", e),
        };
        let stdout_log = File::create(log_path).map_err(log_error)?;
        let stderr_log = stdout_log.try_clone().map_err(log_error)?;

        debug!(
            command = %self.command_line(),
            work_dir = %work_dir.display(),
            "starting build"
        );

        let started = Instant::now();
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .current_dir(work_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::from(stdout_log))
            .stderr(Stdio::from(stderr_log))
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ProfilerError::BuildToolUnavailable {
                program: self.program.clone(),
                details: e.to_string(),
            })?;

        let exit = match self.timeout {
            None => Some(child.wait().await.context("Failed to wait for build process")?),
            Some(limit) => match tokio::time::timeout(limit, child.wait()).await {
                Ok(exit) => Some(exit.context("Failed to wait for build process")?),
                Err(_) => {
                    warn!(timeout_secs = limit.as_secs(), "build timed out, killing it");
                    child
                        .kill()
                        .await
                        .context("Failed to kill timed-out build process")?;
                    None
                }
            },
        };
        let elapsed = started.elapsed();

        let status = match exit {
            Some(exit) if exit.success() => BuildStatus::Succeeded,
            Some(exit) => BuildStatus::Failed {
                exit_code: exit.code(),
            },
            None => BuildStatus::TimedOut,
        };
        debug!(%status, elapsed_ms = elapsed.as_millis() as u64, "build finished");

        Ok(BuildOutcome::new(status, elapsed))
    }

    fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
