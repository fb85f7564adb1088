// SPDX-License-Identifier: MIT
//! Run options and the optional `railstart.toml` config file.
//!
//! Precedence, highest first: CLI flags (env-backed) → config file →
//! built-in defaults. The config file is optional and only overrides the
//! template source and the skip-git default.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

/// Default template repository cloned when no local dir is given.
pub const DEFAULT_TEMPLATE_URL: &str = "https://github.com/railstart/railstart.git";

/// Subdirectory of the template repository holding the bundled assets.
pub const TEMPLATE_ASSET_DIR: &str = "templates";

// ─── ScaffoldOptions ─────────────────────────────────────────────────────────

/// Fully resolved options for one scaffold run.
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    /// Skip the final `git init`/`git add`/`git commit` phase.
    pub skip_git: bool,
    /// Use a local template asset directory instead of cloning.
    pub template_dir: Option<PathBuf>,
    /// Remote template repository to clone when no local dir is given.
    pub template_url: String,
    /// Branch to check out inside the clone. None = default branch.
    pub template_branch: Option<String>,
    /// Suppress progress output (errors still print).
    pub quiet: bool,
}

impl Default for ScaffoldOptions {
    fn default() -> Self {
        Self {
            skip_git: false,
            template_dir: None,
            template_url: DEFAULT_TEMPLATE_URL.to_string(),
            template_branch: None,
            quiet: false,
        }
    }
}

// ─── Config file ─────────────────────────────────────────────────────────────

/// `railstart.toml` shape. Every field optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub skip_git: Option<bool>,
    pub templates: TemplatesSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TemplatesSection {
    pub dir: Option<PathBuf>,
    pub url: Option<String>,
    pub branch: Option<String>,
}

impl ConfigFile {
    /// Load the config file if it exists. A missing file is not an
    /// error; an unparsable one is reported and ignored so a stray
    /// config can never brick the CLI.
    pub fn load(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(_) => return Self::default(),
        };
        match toml::from_str(&raw) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(path = %path.display(), err = %e, "ignoring invalid config file");
                Self::default()
            }
        }
    }

    /// Fold the file's values beneath already-resolved flag values.
    /// Flags that were explicitly set win.
    pub fn apply(self, options: &mut ScaffoldOptions) {
        if let Some(skip) = self.skip_git {
            // Only raise, never un-set an explicit --skip-git.
            options.skip_git = options.skip_git || skip;
        }
        if options.template_dir.is_none() {
            options.template_dir = self.templates.dir;
        }
        if options.template_url == DEFAULT_TEMPLATE_URL {
            if let Some(url) = self.templates.url {
                options.template_url = url;
            }
        }
        if options.template_branch.is_none() {
            options.template_branch = self.templates.branch;
        }
    }
}
