use std::fmt;
use std::time::Duration;

/// How an isolated build process terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStatus {
    /// Process exited with code 0
    Succeeded,
    /// Process exited with a non-zero code, or was killed by a signal (`None`)
    Failed { exit_code: Option<i32> },
    /// Process exceeded the configured timeout and was killed
    TimedOut,
}

impl fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildStatus::Succeeded => write!(f, "succeeded"),
            BuildStatus::Failed {
                exit_code: Some(code),
            } => write!(f, "failed with exit code {}", code),
            BuildStatus::Failed { exit_code: None } => write!(f, "terminated by signal"),
            BuildStatus::TimedOut => write!(f, "timed out"),
        }
    }
}

/// Result of one external build invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOutcome {
    status: BuildStatus,
    elapsed: Duration,
}

impl BuildOutcome {
    pub fn new(status: BuildStatus, elapsed: Duration) -> Self {
        Self { status, elapsed }
    }

    pub fn status(&self) -> BuildStatus {
        self.status
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn is_success(&self) -> bool {
        self.status == BuildStatus::Succeeded
    }

    /// Wall-clock time in seconds at millisecond resolution
    pub fn total_seconds(&self) -> f64 {
        self.elapsed.as_millis() as f64 / 1000.0
    }
}
