//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`.
//! All functions are synchronous and take data in, returning data out.

pub mod env_file;
pub mod error;
pub mod project;

pub use env_file::{ENV_KEYS, EnvFile};
pub use error::ProjectError;
pub use project::{
    DEFAULT_BRANCH, DEFAULT_REPO, ProjectLayout, SCAFFOLD_PROGRAM, normalize_project_name,
    scaffold_args, template_url,
};
