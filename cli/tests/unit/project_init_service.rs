//! Tests for the `project_init` application service.
//!
//! The scaffolding tool and secret source are mocked; filesystem work goes
//! through the real `LocalFs` inside a `TempDir`.

#![allow(clippy::expect_used)]

use std::path::Path;

use fuzzy_couscous::application::ports::StdoutTarget;
use fuzzy_couscous::application::services::project_init::{InitOptions, init_project};
use fuzzy_couscous::domain::{DEFAULT_BRANCH, DEFAULT_REPO, ENV_KEYS, ProjectError};
use fuzzy_couscous::infra::fs::LocalFs;
use fuzzy_couscous::infra::secret::UrlSafeTokenGenerator;
use tempfile::TempDir;

use crate::helpers::{
    FailingScaffolder, FakeScaffolder, FixedSecret, MissingScaffolder, RecordingReporter,
    env_value,
};

const SECRET: &str = "fixed-secret_value-for-tests-0123456789abc";

fn opts<'a>(base_dir: &'a Path, project_name: &'a str) -> InitOptions<'a> {
    InitOptions {
        base_dir,
        project_name,
        repo: DEFAULT_REPO,
        branch: DEFAULT_BRANCH,
        tool_stdout: StdoutTarget::Inherit,
    }
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).expect("read file")
}

// ── Happy path ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_init_project_my_site_end_to_end() {
    let dir = TempDir::new().expect("tempdir");
    let runner = FakeScaffolder::new();
    let reporter = RecordingReporter::default();

    let outcome = init_project(
        &runner,
        &LocalFs,
        &FixedSecret(SECRET),
        &reporter,
        &opts(dir.path(), "My Site"),
    )
    .await
    .expect("init should succeed");

    assert_eq!(outcome.project_name, "My_Site");
    assert_eq!(
        outcome.template_url,
        "https://github.com/Tobi-De/fuzzy-couscous/archive/main.zip"
    );
    assert_eq!(outcome.project_dir, dir.path().join("My_Site"));
    assert_eq!(outcome.env_file, dir.path().join("My_Site").join(".env"));
    assert_eq!(outcome.scaffold_exit_code, Some(0));

    let calls = runner.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "django-admin");
    assert_eq!(
        calls[0].1,
        vec![
            "startproject",
            "My_Site",
            "--template",
            "https://github.com/Tobi-De/fuzzy-couscous/archive/main.zip",
            "-e=py,html,toml,md,json,js,sh",
        ]
    );

    assert!(reporter.warnings().is_empty());
    assert_eq!(reporter.successes().len(), 1);
}

#[tokio::test]
async fn test_init_project_leaves_only_the_project_directory() {
    let dir = TempDir::new().expect("tempdir");

    init_project(
        &FakeScaffolder::new(),
        &LocalFs,
        &FixedSecret(SECRET),
        &RecordingReporter::default(),
        &opts(dir.path(), "shop"),
    )
    .await
    .expect("init should succeed");

    let project = dir.path().join("shop");
    assert!(!dir.path().join("_root_shop").exists());
    assert!(project.join("manage.py").is_file());
    assert!(project.join("shop").join("settings.py").is_file());
    assert!(!project.join("README.md").exists(), "template root leaked");

    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .expect("read_dir")
        .map(|e| e.expect("entry").file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("shop")]);
}

#[tokio::test]
async fn test_init_project_writes_env_file() {
    let dir = TempDir::new().expect("tempdir");

    let outcome = init_project(
        &FakeScaffolder::new(),
        &LocalFs,
        &FixedSecret(SECRET),
        &RecordingReporter::default(),
        &opts(dir.path(), "My Site"),
    )
    .await
    .expect("init should succeed");

    let content = read(&outcome.env_file);
    assert_eq!(
        content,
        format!(
            "DJANGO_DEBUG=True\n\
             DJANGO_SECRET_KEY={SECRET}\n\
             DJANGO_ALLOWED_HOSTS=*\n\
             DATABASE_URL=postgres:///My_Site\n\
             DJANGO_SUPERUSER_EMAIL=\n\
             DJANGO_SUPERUSER_PASSWORD=\n"
        )
    );
    let keys: Vec<&str> = content
        .lines()
        .filter_map(|l| l.split_once('=').map(|(k, _)| k))
        .collect();
    assert_eq!(keys, ENV_KEYS);
}

#[tokio::test]
async fn test_init_project_replaces_env_shipped_by_template() {
    let dir = TempDir::new().expect("tempdir");

    let outcome = init_project(
        &FakeScaffolder::with_template_env("FROM_TEMPLATE=1\n"),
        &LocalFs,
        &FixedSecret(SECRET),
        &RecordingReporter::default(),
        &opts(dir.path(), "blog"),
    )
    .await
    .expect("init should succeed");

    let content = read(&outcome.env_file);
    assert!(!content.contains("FROM_TEMPLATE"));
    assert_eq!(content.lines().count(), 6);
}

#[tokio::test]
async fn test_init_project_uses_repo_and_branch_overrides() {
    let dir = TempDir::new().expect("tempdir");
    let runner = FakeScaffolder::new();
    let options = InitOptions {
        base_dir: dir.path(),
        project_name: "blog",
        repo: "acme/django-starter",
        branch: "v2",
        tool_stdout: StdoutTarget::Inherit,
    };

    let outcome = init_project(
        &runner,
        &LocalFs,
        &FixedSecret(SECRET),
        &RecordingReporter::default(),
        &options,
    )
    .await
    .expect("init should succeed");

    assert_eq!(
        outcome.template_url,
        "https://github.com/acme/django-starter/archive/v2.zip"
    );
    assert_eq!(runner.calls()[0].1[3], outcome.template_url);
}

#[tokio::test]
async fn test_init_project_forwards_tool_stdout_target() {
    let dir = TempDir::new().expect("tempdir");
    let runner = FakeScaffolder::new();
    let options = InitOptions {
        tool_stdout: StdoutTarget::Stderr,
        ..opts(dir.path(), "shop")
    };

    init_project(
        &runner,
        &LocalFs,
        &FixedSecret(SECRET),
        &RecordingReporter::default(),
        &options,
    )
    .await
    .expect("init should succeed");

    assert_eq!(runner.stdout_targets(), vec![StdoutTarget::Stderr]);
}

#[tokio::test]
async fn test_init_project_secret_differs_between_runs() {
    let dir = TempDir::new().expect("tempdir");
    let mut secrets = Vec::new();

    for name in ["one", "two"] {
        let outcome = init_project(
            &FakeScaffolder::new(),
            &LocalFs,
            &UrlSafeTokenGenerator,
            &RecordingReporter::default(),
            &opts(dir.path(), name),
        )
        .await
        .expect("init should succeed");
        let content = read(&outcome.env_file);
        let secret = env_value(&content, "DJANGO_SECRET_KEY").expect("secret key line");
        assert!(secret.len() >= 32, "secret too short: {secret}");
        assert!(
            secret
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
        let database = env_value(&content, "DATABASE_URL").expect("database line");
        assert_eq!(database.rsplit('/').next(), Some(name));
        secrets.push(secret);
    }

    assert_ne!(secrets[0], secrets[1]);
}

// ── Failure paths ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_init_project_second_run_fails() {
    let dir = TempDir::new().expect("tempdir");
    let runner = FakeScaffolder::new();

    init_project(
        &runner,
        &LocalFs,
        &FixedSecret(SECRET),
        &RecordingReporter::default(),
        &opts(dir.path(), "My Site"),
    )
    .await
    .expect("first run should succeed");

    let err = init_project(
        &runner,
        &LocalFs,
        &FixedSecret("second-secret"),
        &RecordingReporter::default(),
        &opts(dir.path(), "My Site"),
    )
    .await
    .expect_err("second run must fail");

    assert!(matches!(
        err.downcast_ref::<ProjectError>(),
        Some(ProjectError::ProjectExists(_))
    ));
    // The first project is left exactly as it was.
    let env = read(&dir.path().join("My_Site").join(".env"));
    assert_eq!(env_value(&env, "DJANGO_SECRET_KEY").as_deref(), Some(SECRET));
    assert!(dir.path().join("My_Site").join("My_Site").is_dir());
    assert_eq!(runner.calls().len(), 1);
}

#[tokio::test]
async fn test_init_project_scaffold_failure_surfaces_missing_path() {
    let dir = TempDir::new().expect("tempdir");
    let reporter = RecordingReporter::default();

    let err = init_project(
        &FailingScaffolder,
        &LocalFs,
        &FixedSecret(SECRET),
        &reporter,
        &opts(dir.path(), "shop"),
    )
    .await
    .expect_err("rename of a missing directory must fail");

    assert!(err.to_string().contains("moving"), "unexpected error: {err:#}");
    assert_eq!(reporter.warnings().len(), 1);
    assert!(reporter.warnings()[0].contains("django-admin"));
    assert!(!dir.path().join("shop").exists());
    assert!(!dir.path().join("_root_shop").exists());
}

#[tokio::test]
async fn test_init_project_leftover_temp_root_is_not_clobbered() {
    let dir = TempDir::new().expect("tempdir");
    let leftover = dir.path().join("_root_shop");
    std::fs::create_dir(&leftover).expect("mkdir leftover");

    let err = init_project(
        &FakeScaffolder::new(),
        &LocalFs,
        &FixedSecret(SECRET),
        &RecordingReporter::default(),
        &opts(dir.path(), "shop"),
    )
    .await
    .expect_err("rename onto an existing directory must fail");

    assert!(matches!(
        err.downcast_ref::<ProjectError>(),
        Some(ProjectError::DestinationExists { .. })
    ));
    // No rollback: the scaffolded tree stays where the tool put it.
    assert!(dir.path().join("shop").join("shop").is_dir());
    assert!(leftover.is_dir());
}

#[tokio::test]
async fn test_init_project_blank_name_rejected_before_scaffolding() {
    let dir = TempDir::new().expect("tempdir");
    let runner = FakeScaffolder::new();

    let err = init_project(
        &runner,
        &LocalFs,
        &FixedSecret(SECRET),
        &RecordingReporter::default(),
        &opts(dir.path(), "   "),
    )
    .await
    .expect_err("blank name");

    assert_eq!(
        err.downcast_ref::<ProjectError>(),
        Some(&ProjectError::EmptyName)
    );
    assert!(runner.calls().is_empty());
}

#[tokio::test]
async fn test_init_project_missing_tool_propagates_spawn_error() {
    let dir = TempDir::new().expect("tempdir");

    let err = init_project(
        &MissingScaffolder,
        &LocalFs,
        &FixedSecret(SECRET),
        &RecordingReporter::default(),
        &opts(dir.path(), "shop"),
    )
    .await
    .expect_err("spawn failure");

    assert!(err.to_string().contains("failed to spawn django-admin"));
    assert!(!dir.path().join("shop").exists());
}
