//! Gulp executable resolution
//!
//! A project-local gulp (`node_modules/.bin/gulp`) always wins over the
//! global command. Resolution happens on every call so that installing or
//! removing gulp between calls is picked up.

use std::path::{Path, PathBuf};

use crate::config::GulpConfig;

/// Where the gulp to invoke lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GulpBinary {
    /// Installed in the project's dependency directory
    Local(PathBuf),
    /// Command name (or configured path) left to the host's PATH lookup
    Global(String),
}

impl GulpBinary {
    /// Resolve the gulp to use for `dir`
    ///
    /// A local path is always absolute, so it stays valid when the host runs
    /// it with the project directory as working directory.
    pub fn resolve(dir: &Path, config: &GulpConfig) -> Self {
        let dir = absolute_dir(dir);
        match find_local(&dir, config) {
            Some(path) => {
                tracing::debug!("Using local gulp: {}", path.display());
                GulpBinary::Local(path)
            }
            None => {
                let command = config.expanded_command();
                tracing::debug!("No local gulp in {}, falling back to '{}'", dir.display(), command);
                GulpBinary::Global(command)
            }
        }
    }

    /// The string the host should execute
    pub fn exec(&self) -> String {
        match self {
            GulpBinary::Local(path) => path.to_string_lossy().into_owned(),
            GulpBinary::Global(command) => command.clone(),
        }
    }

    /// Whether this is a project-local install
    pub fn is_local(&self) -> bool {
        matches!(self, GulpBinary::Local(_))
    }
}

impl std::fmt::Display for GulpBinary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GulpBinary::Local(path) => write!(f, "local:{}", path.display()),
            GulpBinary::Global(command) => write!(f, "global:{}", command),
        }
    }
}

/// Make `dir` absolute against the current directory
///
/// The path is not canonicalized; symlinks and `..` are kept as given.
pub fn absolute_dir(dir: &Path) -> PathBuf {
    std::path::absolute(dir).unwrap_or_else(|e| {
        tracing::warn!("Could not make {} absolute: {}", dir.display(), e);
        dir.to_path_buf()
    })
}

/// Find the project-local gulp, if installed
///
/// On Windows npm installs a `gulp.cmd` shim next to the extensionless
/// script; the shim is the one that can actually be spawned.
pub fn find_local(dir: &Path, config: &GulpConfig) -> Option<PathBuf> {
    let path = dir.join(&config.local_bin);

    #[cfg(windows)]
    {
        let shim = path.with_extension("cmd");
        if shim.is_file() {
            return Some(shim);
        }
    }

    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Locate the global command on PATH (for reporting only)
pub fn find_global(config: &GulpConfig) -> Option<PathBuf> {
    which::which(config.expanded_command()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn install_local_gulp(dir: &Path) -> PathBuf {
        let bin_dir = dir.join("node_modules").join(".bin");
        fs::create_dir_all(&bin_dir).unwrap();
        let gulp = bin_dir.join("gulp");
        fs::write(&gulp, "#!/bin/sh\n").unwrap();
        gulp
    }

    #[test]
    fn test_resolve_local() {
        let dir = TempDir::new().unwrap();
        let gulp = install_local_gulp(dir.path());

        let binary = GulpBinary::resolve(dir.path(), &GulpConfig::default());

        assert!(binary.is_local());
        assert_eq!(binary, GulpBinary::Local(gulp.clone()));
        assert_eq!(binary.exec(), gulp.to_string_lossy());
    }

    #[test]
    fn test_resolve_global_fallback() {
        let dir = TempDir::new().unwrap();

        let binary = GulpBinary::resolve(dir.path(), &GulpConfig::default());

        assert!(!binary.is_local());
        assert_eq!(binary, GulpBinary::Global("gulp".to_string()));
        assert_eq!(binary.exec(), "gulp");
    }

    #[test]
    fn test_resolve_ignores_directory_named_gulp() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("node_modules/.bin/gulp")).unwrap();

        let binary = GulpBinary::resolve(dir.path(), &GulpConfig::default());
        assert!(!binary.is_local());
    }

    #[test]
    fn test_resolve_custom_global_command() {
        let dir = TempDir::new().unwrap();
        let config = GulpConfig {
            command: "/opt/node/bin/gulp".to_string(),
            ..Default::default()
        };

        let binary = GulpBinary::resolve(dir.path(), &config);
        assert_eq!(binary.exec(), "/opt/node/bin/gulp");
    }

    #[test]
    fn test_resolve_is_fresh_each_call() {
        let dir = TempDir::new().unwrap();
        let config = GulpConfig::default();

        assert!(!GulpBinary::resolve(dir.path(), &config).is_local());
        install_local_gulp(dir.path());
        assert!(GulpBinary::resolve(dir.path(), &config).is_local());
    }

    #[test]
    #[serial]
    fn test_absolute_dir() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(absolute_dir(Path::new("site")), cwd.join("site"));
        assert_eq!(absolute_dir(Path::new("/srv/site")), PathBuf::from("/srv/site"));
    }

    #[test]
    fn test_display() {
        assert_eq!(GulpBinary::Global("gulp".to_string()).to_string(), "global:gulp");
        assert!(GulpBinary::Local(PathBuf::from("/p/node_modules/.bin/gulp"))
            .to_string()
            .starts_with("local:"));
    }

    #[test]
    fn test_find_global_missing_command() {
        let config = GulpConfig {
            command: "gulp_that_does_not_exist_98765".to_string(),
            ..Default::default()
        };
        assert!(find_global(&config).is_none());
    }
}
