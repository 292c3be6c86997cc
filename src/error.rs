//! Error types for gulp-targets
//!
//! Provides structured error types with suggestions for common gulp issues.

use serde::Serialize;
use thiserror::Error;

/// Main error type for provider operations
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Project directory not found
    #[error("Project not found: {path}")]
    ProjectNotFound {
        path: String,
        suggestion: Option<String>,
    },

    /// Neither the local nor the global gulp could be started
    #[error("Gulp executable not found: {command}")]
    ExecutableNotFound { command: String, error: String },

    /// Gulp ran but exited with a non-zero status
    #[error("Command failed: {command}")]
    InvocationFailed {
        command: String,
        exit_code: Option<i32>,
        stderr: String,
        suggestion: Option<String>,
    },

    /// Gulp output contained no task names
    #[error("No gulp tasks found in output of: {command}")]
    ParseFailed { command: String, output: String },

    /// Command timed out
    #[error("Command timed out after {timeout_secs}s: {command}")]
    Timeout { command: String, timeout_secs: u64 },

    /// Task listing exceeded the capture limit
    #[error("Task listing from {command} exceeded {limit} bytes")]
    OutputTooLarge { command: String, limit: usize },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Serializable error info for MCP and JSON responses
#[derive(Debug, Serialize, Clone)]
pub struct ErrorInfo {
    pub message: String,
    pub error_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stderr: Option<String>,
}

impl ErrorInfo {
    fn new(err: &ProviderError, error_type: &str, suggestion: Option<String>) -> Self {
        Self {
            message: err.to_string(),
            error_type: error_type.to_string(),
            suggestion,
            exit_code: None,
            stderr: None,
        }
    }
}

impl From<&ProviderError> for ErrorInfo {
    fn from(err: &ProviderError) -> Self {
        match err {
            ProviderError::ProjectNotFound { suggestion, .. } => {
                ErrorInfo::new(err, "project_not_found", suggestion.clone())
            }
            ProviderError::ExecutableNotFound { error, .. } => ErrorInfo::new(
                err,
                "executable_not_found",
                Some(format!(
                    "Install gulp locally (npm install --save-dev gulp) or globally (npm install -g gulp-cli): {}",
                    error
                )),
            ),
            ProviderError::InvocationFailed {
                exit_code,
                stderr,
                suggestion,
                ..
            } => ErrorInfo {
                exit_code: *exit_code,
                stderr: Some(stderr.clone()),
                ..ErrorInfo::new(err, "invocation_failed", suggestion.clone())
            },
            ProviderError::ParseFailed { .. } => ErrorInfo::new(
                err,
                "parse_failed",
                Some("Define at least one task (e.g. a default task) in the gulpfile".to_string()),
            ),
            ProviderError::Timeout { .. } => ErrorInfo::new(
                err,
                "timeout",
                Some("Increase defaults.timeout or check whether the gulpfile hangs on load".to_string()),
            ),
            ProviderError::OutputTooLarge { .. } => ErrorInfo::new(
                err,
                "output_too_large",
                Some("Check that the gulpfile does not print to stdout while loading".to_string()),
            ),
            ProviderError::Io(_) => ErrorInfo::new(err, "io_error", None),
        }
    }
}

/// Suggest fixes for common gulp failure output
pub fn suggest_fix(command: &str, stderr: &str) -> Option<String> {
    if stderr.contains("Local gulp not found") || stderr.contains("Cannot find module 'gulp'") {
        return Some(
            "gulp is not installed in this project. Run 'npm install --save-dev gulp'.".to_string(),
        );
    }

    if stderr.contains("No gulpfile found") {
        return Some(
            "No gulpfile found. Check the project path points at the directory containing gulpfile.js."
                .to_string(),
        );
    }

    if stderr.contains("Cannot find module") {
        return Some(
            "The gulpfile requires a missing module. Run 'npm install' in the project.".to_string(),
        );
    }

    if stderr.contains("Task never defined") || stderr.contains("Task function must be specified") {
        return Some(
            "The gulpfile references an undefined task. Fix the gulpfile task definitions."
                .to_string(),
        );
    }

    if stderr.contains("Permission denied") {
        return Some(format!(
            "Permission denied. Make sure '{}' is executable.",
            command
        ));
    }

    if stderr.contains("command not found") || stderr.contains("not found") {
        return Some(
            "gulp command not found. Install gulp-cli globally: npm install -g gulp-cli".to_string(),
        );
    }

    None
}
