//! Run configuration.
//!
//! The restructuring takes no flags, no environment variables and no
//! configuration file. The only setting is the project root that every
//! relative path in the relocation table is resolved against; the binary uses
//! the current directory and tests point it at a scratch directory.

use std::path::PathBuf;

/// Settings for a relocation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelocateConfig {
    /// Directory the table's relative paths are resolved against.
    pub project_root: PathBuf,
}

impl RelocateConfig {
    /// Creates a configuration rooted at `project_root`.
    pub fn with_project_root(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
        }
    }

    /// Resolves a table path against the project root.
    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.project_root.join(relative)
    }
}

impl Default for RelocateConfig {
    fn default() -> Self {
        Self::with_project_root(".")
    }
}
