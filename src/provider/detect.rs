//! Gulp project detection
//!
//! Eligibility depends only on a gulpfile being present at the project root.
//! Whether gulp itself is installed is reported separately and never
//! affects eligibility.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::binary::{find_global, find_local};
use crate::config::GulpConfig;

/// Result of inspecting a directory for a gulp setup
#[derive(Debug, Clone, Default, Serialize)]
pub struct Detection {
    /// Whether a gulpfile was found
    pub eligible: bool,
    /// Name of the gulpfile that matched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gulpfile: Option<String>,
    /// Path of the project-local gulp, if installed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_gulp: Option<String>,
    /// Path the global command resolves to on PATH, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_gulp: Option<String>,
}

/// Find the gulpfile directly inside `dir`
///
/// Checks the configured names in order; no recursion.
pub fn find_gulpfile(dir: &Path, config: &GulpConfig) -> Option<PathBuf> {
    config
        .gulpfiles
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Whether `dir` contains a gulpfile
pub fn is_gulp_project(dir: &Path, config: &GulpConfig) -> bool {
    find_gulpfile(dir, config).is_some()
}

/// Inspect `dir` for gulpfile, local gulp and global gulp
pub fn detect_gulp(dir: &Path, config: &GulpConfig) -> Detection {
    let gulpfile = find_gulpfile(dir, config).and_then(|path| {
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
    });

    Detection {
        eligible: gulpfile.is_some(),
        gulpfile,
        local_gulp: find_local(dir, config).map(|p| p.display().to_string()),
        global_gulp: find_global(config).map(|p| p.display().to_string()),
    }
}
