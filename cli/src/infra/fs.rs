//! Filesystem infrastructure — implements `ProjectFs` over `std::fs`.

use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::ProjectFs;
use crate::domain::ProjectError;

/// Production filesystem implementation of `ProjectFs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl ProjectFs for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        // std::fs::rename silently replaces an empty directory on unix.
        if to.exists() {
            return Err(ProjectError::DestinationExists {
                from: from.to_path_buf(),
                to: to.to_path_buf(),
            }
            .into());
        }
        std::fs::rename(from, to)
            .with_context(|| format!("moving {} to {}", from.display(), to.display()))
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        std::fs::write(path, content).with_context(|| format!("writing file {}", path.display()))
    }

    fn remove_dir_all(&self, path: &Path) -> Result<()> {
        std::fs::remove_dir_all(path)
            .with_context(|| format!("removing directory {}", path.display()))
    }
}
