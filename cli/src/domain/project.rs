//! Project naming, template location, and on-disk layout.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use std::path::{Path, PathBuf};

use crate::domain::error::ProjectError;

// ── Constants ────────────────────────────────────────────────────────────────

/// Template repository used when `--repo` is not given.
pub const DEFAULT_REPO: &str = "Tobi-De/fuzzy-couscous";

/// Template ref used when `--branch` is not given.
pub const DEFAULT_BRANCH: &str = "main";

/// External scaffolding program.
pub const SCAFFOLD_PROGRAM: &str = "django-admin";

/// File extensions the scaffolding tool renders as templates instead of copying.
pub const TEMPLATE_EXTENSIONS: &[&str] = &["py", "html", "toml", "md", "json", "js", "sh"];

/// Prefix of the temporary name given to the scaffolded root directory.
pub const TEMP_ROOT_PREFIX: &str = "_root_";

/// Name of the generated environment file inside the project directory.
pub const ENV_FILE_NAME: &str = ".env";

const GITHUB_URL: &str = "https://github.com";

// ── Naming ───────────────────────────────────────────────────────────────────

/// Normalizes a user-supplied project name.
///
/// Surrounding whitespace is stripped and every remaining space becomes an
/// underscore. The result names every path of the run and is passed to the
/// scaffolding tool as the project identifier.
///
/// # Errors
///
/// Returns [`ProjectError::EmptyName`] if nothing is left after trimming.
pub fn normalize_project_name(raw: &str) -> Result<String, ProjectError> {
    let name = raw.trim().replace(' ', "_");
    if name.is_empty() {
        return Err(ProjectError::EmptyName);
    }
    Ok(name)
}

/// Zip archive URL of `repo` at `branch`. Both are substituted verbatim.
#[must_use]
pub fn template_url(repo: &str, branch: &str) -> String {
    format!("{GITHUB_URL}/{repo}/archive/{branch}.zip")
}

/// Arguments passed to [`SCAFFOLD_PROGRAM`].
#[must_use]
pub fn scaffold_args(project_name: &str, template_url: &str) -> Vec<String> {
    vec![
        "startproject".to_string(),
        project_name.to_string(),
        "--template".to_string(),
        template_url.to_string(),
        format!("-e={}", TEMPLATE_EXTENSIONS.join(",")),
    ]
}

// ── Layout ───────────────────────────────────────────────────────────────────

/// Every path touched by one run, derived from the working directory and the
/// normalized project name.
///
/// The scaffolding tool writes `<base>/<name>/<name>/...`. The outer directory
/// is renamed to `<base>/_root_<name>` so the inner one can take its place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    base: PathBuf,
    name: String,
}

impl ProjectLayout {
    #[must_use]
    pub fn new(base: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            name: name.into(),
        }
    }

    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Outer directory produced by the scaffolding tool.
    #[must_use]
    pub fn root_dir(&self) -> PathBuf {
        self.base.join(&self.name)
    }

    /// Temporary name of the outer directory while the inner one is moved out.
    #[must_use]
    pub fn temp_root_dir(&self) -> PathBuf {
        self.base.join(format!("{TEMP_ROOT_PREFIX}{}", self.name))
    }

    /// Inner project directory, after the outer one was renamed.
    #[must_use]
    pub fn inner_dir(&self) -> PathBuf {
        self.temp_root_dir().join(&self.name)
    }

    /// Final project directory. Same path as [`Self::root_dir`]; the two never
    /// exist at the same time.
    #[must_use]
    pub fn project_dir(&self) -> PathBuf {
        self.root_dir()
    }

    #[must_use]
    pub fn env_file(&self) -> PathBuf {
        self.project_dir().join(ENV_FILE_NAME)
    }
}
