use crate::profiling::domain::BuildOutcome;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;

/// BuildRunner port for invoking the external build tool
///
/// # Async Support
/// Runs are awaited one at a time; the async signature only lets
/// implementations enforce timeouts without blocking threads.
#[async_trait]
pub trait BuildRunner: Send + Sync {
    /// Runs the build in `work_dir`, capturing stdout and stderr to `log_path`
    ///
    /// A build that runs but fails is reported through the returned
    /// `BuildOutcome`, not as an error.
    ///
    /// # Errors
    /// Returns an error if the build tool cannot be started at all, or if
    /// the log file cannot be created.
    async fn run(&self, work_dir: &Path, log_path: &Path) -> Result<BuildOutcome>;

    /// Human-readable command line, for progress output
    fn command_line(&self) -> String;
}
