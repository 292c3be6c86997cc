//! End-to-end behaviour of the gulp provider against on-disk projects

mod common;

use std::fs;

use gulp_targets::{BuildProvider, BuildTarget, GulpBuilder, ProviderError};
use serial_test::serial;

use common::*;

#[test]
fn test_not_eligible_without_gulpfile() {
    let (_dir, path) = create_empty_project();
    fs::write(path.join("package.json"), r#"{"name": "site"}"#).unwrap();
    fs::create_dir_all(path.join("node_modules/.bin")).unwrap();
    fs::write(path.join("node_modules/.bin/gulp"), "").unwrap();

    assert!(!GulpBuilder::new().is_eligible(&path));
}

#[test]
fn test_eligible_without_gulp_installed() {
    let (_dir, path) = create_gulp_project();

    assert!(GulpBuilder::new().is_eligible(&path));
}

#[tokio::test]
async fn test_global_fallback_lists_default_only() {
    let (_dir, path) = create_gulp_project();

    let targets = GulpBuilder::new().settings(&path).await.unwrap();

    assert_eq!(targets.len(), 1);
    let target = targets.iter().find(|t| t.name == "Gulp: default").unwrap();
    assert!(!target.sh);
    assert_eq!(target.args, vec!["default"]);
    assert_eq!(target.exec, "gulp");
}

#[tokio::test]
async fn test_settings_is_idempotent_without_local_gulp() {
    let (_dir, path) = create_gulp_project();
    let builder = GulpBuilder::new();

    let first = builder.settings(&path).await.unwrap();
    let second = builder.settings(&path).await.unwrap();

    assert_eq!(first, second);
}

#[cfg(unix)]
mod local_gulp {
    use super::*;

    #[tokio::test]
    #[serial]
    async fn test_eligible_with_local_gulp() {
        let (_dir, path, _gulp) = create_gulp_project_with_local_gulp(FAKE_GULP_TASKS);

        assert!(GulpBuilder::new().is_eligible(&path));
    }

    #[tokio::test]
    #[serial]
    async fn test_lists_targets_with_local_gulp() {
        let (_dir, path, _gulp) = create_gulp_project_with_local_gulp(FAKE_GULP_TASKS);

        let settings = GulpBuilder::new().settings(&path).await.unwrap();

        let mut expected = vec!["Gulp: default", "Gulp: dev build", "Gulp: watch"];
        expected.sort();
        let mut real: Vec<&str> = settings.iter().map(|s| s.name.as_str()).collect();
        real.sort();
        assert_eq!(expected, real);
    }

    #[tokio::test]
    #[serial]
    async fn test_exports_correct_settings_with_local_gulp() {
        let (_dir, path, gulp) = create_gulp_project_with_local_gulp(FAKE_GULP_TASKS);

        let settings = GulpBuilder::new().settings(&path).await.unwrap();

        assert_eq!(settings.len(), 3);
        let target = settings.iter().find(|s| s.name == "Gulp: watch").unwrap();
        assert!(!target.sh);
        assert_eq!(target.args, vec!["watch"]);
        assert_eq!(
            target.exec,
            path.join("node_modules").join(".bin").join("gulp").to_string_lossy()
        );
        assert_eq!(target.exec, gulp.to_string_lossy());
    }

    #[tokio::test]
    #[serial]
    async fn test_every_target_uses_local_exec() {
        let (_dir, path, gulp) = create_gulp_project_with_local_gulp(FAKE_GULP_TASKS);

        let settings = GulpBuilder::new().settings(&path).await.unwrap();

        for target in &settings {
            assert_eq!(target.exec, gulp.to_string_lossy());
            assert_eq!(target.args.len(), 1);
            assert_eq!(target.name, format!("Gulp: {}", target.args[0]));
        }
    }

    #[tokio::test]
    #[serial]
    async fn test_settings_is_idempotent_with_local_gulp() {
        let (_dir, path, _gulp) = create_gulp_project_with_local_gulp(FAKE_GULP_TASKS);
        let builder = GulpBuilder::new();

        let first = builder.settings(&path).await.unwrap();
        let second = builder.settings(&path).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    #[serial]
    async fn test_targets_are_directly_runnable() {
        let (_dir, path, _gulp) = create_gulp_project_with_local_gulp(
            r#"if [ "$1" = "--tasks-simple" ]; then echo build; else echo "ran $1"; fi"#,
        );

        let settings = GulpBuilder::new().settings(&path).await.unwrap();
        let BuildTarget { exec, args, .. } = &settings[0];

        let output = std::process::Command::new(exec)
            .args(args)
            .current_dir(&path)
            .output()
            .unwrap();

        assert!(output.status.success());
        assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "ran build");
    }

    #[tokio::test]
    #[serial]
    async fn test_picks_up_newly_installed_gulp() {
        let (_dir, path) = create_gulp_project();
        let builder = GulpBuilder::new();

        let before = builder.settings(&path).await.unwrap();
        assert_eq!(before.len(), 1);

        install_local_gulp(&path, FAKE_GULP_TASKS);
        let after = builder.settings(&path).await.unwrap();
        assert_eq!(after.len(), 3);
    }

    #[tokio::test]
    #[serial]
    async fn test_banner_lines_are_ignored() {
        let (_dir, path, _gulp) = create_gulp_project_with_local_gulp(
            "echo '[10:00:00] Requiring external module @babel/register'\n\
             echo ''\n\
             echo 'default'\n\
             echo 'styles'",
        );

        let settings = GulpBuilder::new().settings(&path).await.unwrap();
        let names: Vec<&str> = settings.iter().map(|s| s.name.as_str()).collect();

        assert_eq!(names, vec!["Gulp: default", "Gulp: styles"]);
    }

    #[tokio::test]
    #[serial]
    async fn test_failing_gulp_is_an_error() {
        let (_dir, path, _gulp) =
            create_gulp_project_with_local_gulp("echo 'Error: Cannot find module \"gulp\"' >&2; exit 1");

        let result = GulpBuilder::new().settings(&path).await;

        assert!(matches!(
            result,
            Err(ProviderError::InvocationFailed { exit_code: Some(1), .. })
        ));
    }

    #[tokio::test]
    #[serial]
    async fn test_no_tasks_is_a_parse_failure() {
        let (_dir, path, _gulp) = create_gulp_project_with_local_gulp("true");

        let result = GulpBuilder::new().settings(&path).await;

        assert!(matches!(result, Err(ProviderError::ParseFailed { .. })));
    }
}
