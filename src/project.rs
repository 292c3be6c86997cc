//! Project directory resolution shared by the CLI and the MCP server

use std::path::{Path, PathBuf};

use crate::error::ProviderError;
use crate::provider::binary::absolute_dir;

/// Expand `~` and `$VAR` in a user-supplied project path
///
/// `None` means the current directory and relative paths are made absolute
/// against it. The path is not required to exist;
/// eligibility checks treat a missing directory as "not eligible".
pub fn expand_project_path(project: Option<&str>) -> Result<PathBuf, ProviderError> {
    match project {
        None => std::env::current_dir().map_err(ProviderError::Io),
        Some(raw) => {
            let expanded = shellexpand::full(raw).map_err(|e| ProviderError::ProjectNotFound {
                path: raw.to_string(),
                suggestion: Some(format!("Could not expand path: {}", e)),
            })?;
            Ok(absolute_dir(Path::new(expanded.as_ref())))
        }
    }
}

/// Resolve a project path that must be an existing directory
pub fn resolve_project_dir(project: Option<&str>) -> Result<PathBuf, ProviderError> {
    let path = expand_project_path(project)?;

    if !path.is_dir() {
        return Err(ProviderError::ProjectNotFound {
            path: path.display().to_string(),
            suggestion: Some("Pass the directory that contains the gulpfile".to_string()),
        });
    }

    Ok(path)
}
