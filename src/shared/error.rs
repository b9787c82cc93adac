use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every dependency was measured and the report was written
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (malformed descriptor, missing build tool, I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency profiling.
///
/// Every variant is fatal for the whole run. Per-dependency build failures
/// are not errors: they are recorded as zeroed measurements instead.
#[derive(Debug, Error)]
pub enum ProfilerError {
    #[error("Build descriptor not found: {path}\n\n💡 Hint: {suggestion}")]
    DescriptorNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to read build descriptor: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    DescriptorReadError { path: PathBuf, details: String },

    #[error("Malformed build descriptor: {details}\n\n💡 Hint: Please verify that the file is a valid pom.xml with an <artifactId> and complete <dependency> entries")]
    MalformedDescriptor { details: String },

    #[error("Workspace error: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the work directory is writable and not in use by another run")]
    Workspace { path: PathBuf, details: String },

    #[error("Failed to start build tool: {program}\nDetails: {details}\n\n💡 Hint: Please verify that the build tool is installed and on your PATH, or set --build-command")]
    BuildToolUnavailable { program: String, details: String },

    #[error("Failed to write report: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the result directory is writable")]
    ReportWriteError { path: PathBuf, details: String },

    #[error("Invalid configuration: {message}\n\n💡 Hint: {hint}")]
    InvalidConfig { message: String, hint: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_descriptor_not_found_display() {
        let error = ProfilerError::DescriptorNotFound {
            path: PathBuf::from("/test/pom.xml"),
            suggestion: "Test suggestion".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Build descriptor not found"));
        assert!(display.contains("/test/pom.xml"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("Test suggestion"));
    }

    #[test]
    fn test_malformed_descriptor_display() {
        let error = ProfilerError::MalformedDescriptor {
            details: "missing <artifactId>".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Malformed build descriptor"));
        assert!(display.contains("missing <artifactId>"));
    }

    #[test]
    fn test_build_tool_unavailable_display() {
        let error = ProfilerError::BuildToolUnavailable {
            program: "mvn".to_string(),
            details: "No such file or directory".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to start build tool: mvn"));
        assert!(display.contains("No such file or directory"));
        assert!(display.contains("--build-command"));
    }

    #[test]
    fn test_workspace_error_display() {
        let error = ProfilerError::Workspace {
            path: PathBuf::from("tmp/abc"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Workspace error: tmp/abc"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_security_error_display() {
        let error = ProfilerError::SecurityError {
            path: PathBuf::from("/test/symlink"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("/test/symlink"));
        assert!(display.contains("Use a regular file instead"));
    }
}
