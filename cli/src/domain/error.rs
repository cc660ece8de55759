//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use std::path::PathBuf;

use thiserror::Error;

// ── Project errors ────────────────────────────────────────────────────────────

/// Errors raised while preparing or reshaping a scaffolded project.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectError {
    #[error("Project name cannot be empty.")]
    EmptyName,

    #[error("Directory {} already exists.", .0.display())]
    ProjectExists(PathBuf),

    #[error("Cannot move {} to {}: destination already exists.", .from.display(), .to.display())]
    DestinationExists { from: PathBuf, to: PathBuf },
}
