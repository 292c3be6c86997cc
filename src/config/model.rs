//! Configuration model for gulp-targets
//!
//! Defines the structure for XDG-compliant layered configuration.

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Provider-wide settings
    #[serde(default)]
    pub defaults: Defaults,

    /// How gulp is located and queried
    #[serde(default)]
    pub gulp: GulpConfig,
}

/// What to do when gulp lists zero tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmptyTasks {
    /// Treat an empty listing as a parse failure
    #[default]
    Error,
    /// Return an empty target list
    Empty,
}

/// Provider-wide settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Defaults {
    /// Label prefixed to every target name ("Gulp: default")
    #[serde(default = "default_label")]
    pub label: String,

    /// Timeout for the task listing in seconds (0 = wait forever)
    #[serde(default)]
    pub timeout: u64,

    /// Policy for a listing with no tasks
    #[serde(default)]
    pub empty_tasks: EmptyTasks,
}

fn default_label() -> String {
    "Gulp".to_string()
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            label: default_label(),
            timeout: 0,
            empty_tasks: EmptyTasks::default(),
        }
    }
}

/// Gulp lookup and invocation settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GulpConfig {
    /// Global command used when no local gulp is installed
    #[serde(default = "default_gulp_command")]
    pub command: String,

    /// Project-relative path of the locally installed gulp
    #[serde(default = "default_local_bin")]
    pub local_bin: String,

    /// Arguments that make gulp print one task name per line
    #[serde(default = "default_list_args")]
    pub list_args: Vec<String>,

    /// Gulpfile names that make a directory eligible, in lookup order
    #[serde(default = "default_gulpfiles")]
    pub gulpfiles: Vec<String>,

    /// Ask the global gulp for its tasks instead of assuming "default"
    #[serde(default)]
    pub query_global: bool,
}

fn default_gulp_command() -> String {
    "gulp".to_string()
}

fn default_local_bin() -> String {
    "node_modules/.bin/gulp".to_string()
}

fn default_list_args() -> Vec<String> {
    vec!["--tasks-simple".to_string()]
}

fn default_gulpfiles() -> Vec<String> {
    [
        "gulpfile.js",
        "Gulpfile.js",
        "gulpfile.babel.js",
        "gulpfile.mjs",
        "gulpfile.cjs",
        "gulpfile.ts",
        "gulpfile.coffee",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for GulpConfig {
    fn default() -> Self {
        Self {
            command: default_gulp_command(),
            local_bin: default_local_bin(),
            list_args: default_list_args(),
            gulpfiles: default_gulpfiles(),
            query_global: false,
        }
    }
}

impl GulpConfig {
    /// Global command with `~` and `$VAR` expanded
    ///
    /// Falls back to the raw value when a referenced variable is unset.
    pub fn expanded_command(&self) -> String {
        match shellexpand::full(&self.command) {
            Ok(expanded) => expanded.into_owned(),
            Err(e) => {
                tracing::warn!("Could not expand gulp.command '{}': {}", self.command, e);
                self.command.clone()
            }
        }
    }
}

impl Config {
    /// Timeout for the task listing, if any
    pub fn timeout(&self) -> Option<std::time::Duration> {
        (self.defaults.timeout > 0).then(|| std::time::Duration::from_secs(self.defaults.timeout))
    }
}
