//! Locates the configuration file for a check run.
//!
//! First match wins:
//!
//! 1. `--config` flag or `GHERKIN_LINT_CONFIG`
//! 2. `gherkin-lint.toml` / `.gherkin-lint.toml` in the checked directory or
//!    the nearest ancestor that has one
//! 3. `config.toml` in the global directory (`$GHERKIN_LINT_CONFIG_DIR`,
//!    else `~/.gherkin-lint/`)
//! 4. built-in defaults

use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given on the command line.
    Explicit(PathBuf),
    /// Found next to the documents.
    Project(PathBuf),
    /// Found in the global config directory.
    Global(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    /// Returns the config file path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Returns `true` for a global config.
    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global(_))
    }
}

const PROJECT_FILES: [&str; 2] = ["gherkin-lint.toml", ".gherkin-lint.toml"];
const GLOBAL_FILE: &str = "config.toml";
const GLOBAL_DIR_ENV: &str = "GHERKIN_LINT_CONFIG_DIR";

/// Resolves the configuration for documents under `project_dir`.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    let global_dir = std::env::var_os(GLOBAL_DIR_ENV)
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|h| h.join(".gherkin-lint")));
    resolve_with(project_dir, explicit, global_dir.as_deref())
}

fn resolve_with(project_dir: &Path, explicit: Option<&Path>, global_dir: Option<&Path>) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    if let Some(found) = nearest_project_config(project_dir) {
        tracing::debug!("Found project config: {}", found.display());
        return ConfigSource::Project(found);
    }

    global_dir
        .map(|dir| dir.join(GLOBAL_FILE))
        .filter(|p| p.is_file())
        .map_or(ConfigSource::Default, |p| {
            tracing::debug!("Found global config: {}", p.display());
            ConfigSource::Global(p)
        })
}

fn nearest_project_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        PROJECT_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|p| p.is_file())
    })
}
