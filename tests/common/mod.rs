//! Common test utilities for gulp-targets tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Gulpfile declaring the tasks listed by `FAKE_GULP_TASKS`
pub const SAMPLE_GULPFILE: &str = r#"
const gulp = require('gulp');

gulp.task('default', (done) => done());
gulp.task('dev build', (done) => done());
gulp.task('watch', () => gulp.watch('src/**/*.js', gulp.series('dev build')));
"#;

/// Shell body of a fake gulp that answers `--tasks-simple` like gulp-cli
pub const FAKE_GULP_TASKS: &str = r#"if [ "$1" = "--tasks-simple" ]; then
  printf 'default\ndev build\nwatch\n'
else
  echo "[00:00:00] Task '$1' is not in your gulpfile" >&2
  exit 1
fi"#;

/// Creates a temporary directory with a gulpfile and no local gulp
pub fn create_gulp_project() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("gulpfile.js"), SAMPLE_GULPFILE)
        .expect("Failed to write gulpfile.js");
    let path = dir.path().to_path_buf();
    (dir, path)
}

/// Creates a temporary directory with a gulpfile and a fake local gulp
#[cfg(unix)]
pub fn create_gulp_project_with_local_gulp(body: &str) -> (TempDir, PathBuf, PathBuf) {
    let (dir, path) = create_gulp_project();
    let gulp = install_local_gulp(&path, body);
    (dir, path, gulp)
}

/// Installs an executable `node_modules/.bin/gulp` shell script
#[cfg(unix)]
pub fn install_local_gulp(project: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let bin_dir = project.join("node_modules").join(".bin");
    std::fs::create_dir_all(&bin_dir).expect("Failed to create node_modules/.bin");

    let gulp = bin_dir.join("gulp");
    std::fs::write(&gulp, format!("#!/bin/sh\n{}\n", body)).expect("Failed to write gulp");

    let mut perms = std::fs::metadata(&gulp)
        .expect("Failed to get metadata")
        .permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&gulp, perms).expect("Failed to set permissions");

    gulp
}

/// Creates a temporary directory with no gulpfile
pub fn create_empty_project() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().to_path_buf();
    (dir, path)
}
