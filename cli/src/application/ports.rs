//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` and `std` — never from
//! `crate::infra`, `crate::commands`, or `crate::output`.

use std::path::Path;
use std::process::ExitStatus;

use anyhow::Result;

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Where a child process writes its standard output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StdoutTarget {
    /// Share the parent's stdout.
    #[default]
    Inherit,
    /// Send it to the parent's stderr, keeping stdout free for JSON.
    Stderr,
}

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run `program` in `cwd` and return its exit status.
    ///
    /// stdin and stderr are inherited; stdout goes where `stdout` says.
    /// No timeout: the call resolves only when the child exits.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or waited on. A
    /// non-zero exit is NOT an error.
    async fn run_status(
        &self,
        program: &str,
        args: &[&str],
        cwd: &Path,
        stdout: StdoutTarget,
    ) -> Result<ExitStatus>;
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Filesystem operations used to reshape the scaffolded tree.
pub trait ProjectFs {
    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Rename or move `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns an error if `from` is missing or `to` already exists.
    fn rename(&self, from: &Path, to: &Path) -> Result<()>;

    /// Create or truncate the file at `path` with `content`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn write(&self, path: &Path, content: &str) -> Result<()>;

    /// Recursively delete the directory at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is missing or cannot be removed.
    fn remove_dir_all(&self, path: &Path) -> Result<()>;
}

// ── Secret Port ───────────────────────────────────────────────────────────────

/// Source of fresh secret tokens.
pub trait SecretGenerator {
    /// Return a new URL-safe token. Every call yields a different value.
    fn generate(&self) -> String;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}
