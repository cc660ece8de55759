//! Infrastructure implementation of the `CommandRunner` port.

use std::path::Path;
use std::process::{ExitStatus, Stdio};

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, StdoutTarget};

/// Production `CommandRunner` — spawns the child with tokio and waits for it.
///
/// stdin and stderr are inherited so the scaffolding tool talks to the
/// user's terminal directly. `kill_on_drop` keeps an aborted run from
/// orphaning the child.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioCommandRunner;

impl CommandRunner for TokioCommandRunner {
    async fn run_status(
        &self,
        program: &str,
        args: &[&str],
        cwd: &Path,
        stdout: StdoutTarget,
    ) -> Result<ExitStatus> {
        let stdout = match stdout {
            StdoutTarget::Inherit => Stdio::inherit(),
            StdoutTarget::Stderr => Stdio::from(std::io::stderr()),
        };
        let mut child = tokio::process::Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdout(stdout)
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        child
            .wait()
            .await
            .with_context(|| format!("waiting for {program}"))
    }
}
