//! Gulp build provider
//!
//! Turns the tasks of a gulp project into build targets.
//!
//! # Target Discovery
//!
//! 1. **Local gulp** - `node_modules/.bin/gulp --tasks-simple`, one target per task
//! 2. **No local gulp** - a single `gulp default` target for the global command
//!
//! With `gulp.query_global = true` the global command is asked for its task
//! list too, instead of assuming only `default` exists.

use std::path::Path;

use async_trait::async_trait;

use super::binary::{absolute_dir, GulpBinary};
use super::detect::is_gulp_project;
use super::parse::parse_tasks;
use super::traits::{BuildProvider, BuildTarget, ProviderResult};
use crate::config::{Config, EmptyTasks};
use crate::error::ProviderError;
use crate::executor::{display_command, exec_command, ExecOptions, MAX_OUTPUT_SIZE};

/// Task gulp runs when invoked without a task name
const DEFAULT_TASK: &str = "default";

/// Gulp build provider
///
/// Holds configuration only; nothing is cached between calls.
#[derive(Debug, Clone, Default)]
pub struct GulpBuilder {
    config: Config,
}

impl GulpBuilder {
    /// Create a provider with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider with a specific configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// The configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Ask `binary` for its task list and return the task names
    async fn list_tasks(&self, dir: &Path, binary: &GulpBinary) -> ProviderResult<Vec<String>> {
        let exec = binary.exec();
        let args: Vec<&str> = self.config.gulp.list_args.iter().map(String::as_str).collect();
        let command = display_command(&exec, &args);

        let options = ExecOptions::in_dir(dir).with_timeout_opt(self.config.timeout());
        let result = exec_command(&exec, &args, &options)
            .await?
            .into_success(&command)?;

        if result.stdout_truncated {
            return Err(ProviderError::OutputTooLarge {
                command,
                limit: MAX_OUTPUT_SIZE,
            });
        }

        let tasks = parse_tasks(&result.stdout);
        if tasks.is_empty() {
            match self.config.defaults.empty_tasks {
                EmptyTasks::Error => {
                    return Err(ProviderError::ParseFailed {
                        command,
                        output: result.stdout,
                    })
                }
                EmptyTasks::Empty => {
                    tracing::warn!("'{}' listed no tasks in {}", command, dir.display());
                }
            }
        }

        Ok(tasks)
    }

    /// Map task names to targets run by `binary`
    fn targets(&self, binary: &GulpBinary, tasks: Vec<String>) -> Vec<BuildTarget> {
        let exec = binary.exec();
        tasks
            .into_iter()
            .map(|task| BuildTarget::task(&self.config.defaults.label, exec.clone(), task))
            .collect()
    }
}

#[async_trait]
impl BuildProvider for GulpBuilder {
    fn name(&self) -> &str {
        "gulp"
    }

    fn is_eligible(&self, dir: &Path) -> bool {
        is_gulp_project(dir, &self.config.gulp)
    }

    async fn settings(&self, dir: &Path) -> ProviderResult<Vec<BuildTarget>> {
        let dir = absolute_dir(dir);
        let binary = GulpBinary::resolve(&dir, &self.config.gulp);

        let tasks = if binary.is_local() || self.config.gulp.query_global {
            self.list_tasks(&dir, &binary).await?
        } else {
            vec![DEFAULT_TASK.to_string()]
        };

        tracing::debug!(
            "Found {} gulp task(s) in {} using {}",
            tasks.len(),
            dir.display(),
            binary
        );

        Ok(self.targets(&binary, tasks))
    }
}
