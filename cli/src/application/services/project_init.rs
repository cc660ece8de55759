//! Application service — project initialization use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::application::ports::{
    CommandRunner, ProgressReporter, ProjectFs, SecretGenerator, StdoutTarget,
};
use crate::domain::{
    EnvFile, ProjectError, ProjectLayout, SCAFFOLD_PROGRAM, normalize_project_name, scaffold_args,
    template_url,
};

/// Inputs of one initialization run.
pub struct InitOptions<'a> {
    /// Directory the scaffolding tool runs in and the project lands in.
    pub base_dir: &'a Path,
    /// Project name as typed by the user, before normalization.
    pub project_name: &'a str,
    /// Template repository identifier, e.g. `Tobi-De/fuzzy-couscous`.
    pub repo: &'a str,
    /// Template branch or ref.
    pub branch: &'a str,
    /// Where the scaffolding tool's stdout goes.
    pub tool_stdout: StdoutTarget,
}

/// Outcome of the `init_project` use-case.
#[derive(Debug, Clone, Serialize)]
pub struct InitOutcome {
    pub project_name: String,
    pub template_url: String,
    pub project_dir: PathBuf,
    pub env_file: PathBuf,
    /// Exit code of the scaffolding tool. `None` when it was killed by a signal.
    pub scaffold_exit_code: Option<i32>,
}

/// Scaffold a project from the template archive and reshape it in place.
///
/// Steps run strictly in order and nothing is rolled back: a failing step
/// leaves whatever earlier steps produced, including `_root_<name>`.
///
/// # Errors
///
/// Returns an error if the name is blank, `<base>/<name>` already exists, the
/// scaffolding tool cannot be spawned, or any rename, write, or delete fails.
/// A non-zero exit of the scaffolding tool is reported but does not stop the
/// run.
pub async fn init_project(
    runner: &impl CommandRunner,
    fs: &impl ProjectFs,
    secrets: &impl SecretGenerator,
    reporter: &impl ProgressReporter,
    opts: &InitOptions<'_>,
) -> Result<InitOutcome> {
    let name = normalize_project_name(opts.project_name)?;
    let url = template_url(opts.repo, opts.branch);
    let layout = ProjectLayout::new(opts.base_dir, name.as_str());

    // An existing project would be torn apart by the renames below.
    if fs.exists(&layout.project_dir()) {
        return Err(ProjectError::ProjectExists(layout.project_dir()).into());
    }

    // Step 1: Run the scaffolding tool.
    reporter.step(&format!("creating project '{name}' from {url}..."));
    let args = scaffold_args(&name, &url);
    let argv: Vec<&str> = args.iter().map(String::as_str).collect();
    tracing::debug!(program = SCAFFOLD_PROGRAM, args = ?argv, "running scaffolding tool");
    let status = runner
        .run_status(SCAFFOLD_PROGRAM, &argv, layout.base(), opts.tool_stdout)
        .await?;
    if !status.success() {
        tracing::warn!(program = SCAFFOLD_PROGRAM, code = ?status.code(), "scaffolding tool failed");
        reporter.warn(&format!("{SCAFFOLD_PROGRAM} exited with {status}"));
    }

    // Step 2: Free the project name by renaming the outer directory.
    let temp_root = layout.temp_root_dir();
    tracing::debug!(from = %layout.root_dir().display(), to = %temp_root.display(), "renaming template root");
    fs.rename(&layout.root_dir(), &temp_root)?;

    // Step 3: Move the inner directory into place.
    tracing::debug!(from = %layout.inner_dir().display(), to = %layout.project_dir().display(), "moving project directory");
    fs.rename(&layout.inner_dir(), &layout.project_dir())?;

    // Step 4: Write the environment file.
    reporter.step("writing .env...");
    let secret_key = secrets.generate();
    let env = EnvFile {
        secret_key: &secret_key,
        project_name: &name,
    };
    fs.write(&layout.env_file(), &env.render())
        .context("writing environment file")?;

    // Step 5: Drop what is left of the template root.
    tracing::debug!(path = %temp_root.display(), "removing template root");
    fs.remove_dir_all(&temp_root)?;

    reporter.success(&format!("project '{name}' created"));

    Ok(InitOutcome {
        project_name: name,
        template_url: url,
        project_dir: layout.project_dir(),
        env_file: layout.env_file(),
        scaffold_exit_code: status.code(),
    })
}
