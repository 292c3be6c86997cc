//! Common traits and types for build providers
//!
//! Defines the target descriptor handed to the host build runner and the
//! two-method interface every provider implements.

use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

/// One invocable build action, as consumed by the host build runner
///
/// The host executes `exec` with `args` directly; `sh` tells it whether to
/// go through a shell instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BuildTarget {
    /// Display name, prefixed with the provider label ("Gulp: watch")
    pub name: String,
    /// Executable to run: a path or a bare command name
    pub exec: String,
    /// Arguments passed to `exec`
    pub args: Vec<String>,
    /// Whether to run through a shell
    pub sh: bool,
}

impl BuildTarget {
    /// Target that runs `task` via `exec` without a shell
    pub fn task(label: &str, exec: impl Into<String>, task: impl Into<String>) -> Self {
        let task = task.into();
        Self {
            name: format!("{}: {}", label, task),
            exec: exec.into(),
            args: vec![task],
            sh: false,
        }
    }

    /// The command line the host will run (for display/logging)
    pub fn command_line(&self) -> String {
        let mut parts = vec![self.exec.clone()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

/// Trait for build providers
///
/// A provider reports whether it applies to a directory and, if so, which
/// targets the host can run there.
#[async_trait]
pub trait BuildProvider: Send + Sync {
    /// Get the name of this provider (e.g., "gulp")
    fn name(&self) -> &str;

    /// Whether this provider applies to `dir`
    ///
    /// Never fails: unreadable or missing directories are simply not eligible.
    fn is_eligible(&self, dir: &Path) -> bool;

    /// Enumerate the targets available in `dir`
    ///
    /// # Errors
    /// * `ProviderError::ExecutableNotFound` - If the tool could not be started
    /// * `ProviderError::InvocationFailed` - If the listing command fails
    /// * `ProviderError::ParseFailed` - If no targets could be recognized
    async fn settings(&self, dir: &Path) -> ProviderResult<Vec<BuildTarget>>;
}
