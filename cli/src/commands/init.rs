//! Init command — scaffold a project from the template and tidy it up.

use anyhow::{Context, Result};
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::StdoutTarget;
use crate::application::services::project_init::{InitOptions, init_project};
use crate::domain::{DEFAULT_BRANCH, DEFAULT_REPO};
use crate::output::{HumanRenderer, TerminalReporter, json};

/// Arguments for project initialization.
#[derive(Args)]
pub struct InitArgs {
    /// Name of the project to create (spaces become underscores)
    pub project_name: String,

    /// Template branch or ref
    #[arg(short, long, default_value = DEFAULT_BRANCH)]
    pub branch: String,

    /// Template repository on GitHub, as owner/name
    #[arg(short, long, default_value = DEFAULT_REPO)]
    pub repo: String,
}

/// Entry point for project initialization in the current directory.
///
/// # Errors
///
/// Returns an error if the current directory cannot be read or any step of
/// `init_project` fails.
pub async fn run(app: &AppContext, args: &InitArgs) -> Result<()> {
    let base_dir = std::env::current_dir().context("cannot determine current directory")?;
    let opts = InitOptions {
        base_dir: &base_dir,
        project_name: &args.project_name,
        repo: &args.repo,
        branch: &args.branch,
        tool_stdout: if app.is_json() {
            StdoutTarget::Stderr
        } else {
            StdoutTarget::Inherit
        },
    };
    let reporter = TerminalReporter::new(&app.output);

    let outcome = init_project(&app.runner, &app.fs, &app.secrets, &reporter, &opts).await?;

    if app.is_json() {
        println!("{}", json::format_outcome(&outcome)?);
    } else {
        HumanRenderer::new(&app.output).render_outcome(&outcome);
    }
    Ok(())
}
