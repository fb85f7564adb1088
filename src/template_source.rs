// SPDX-License-Identifier: MIT
//! Template asset resolution.
//!
//! Bundled assets (Procfiles, database config, app/config/lib overlays,
//! Cucumber features) live under `templates/` in this repository. A run
//! either points at a local checkout of that directory or clones the
//! template repository into a temporary directory, which is removed when
//! the run ends.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;
use tracing::info;

use crate::config::{ScaffoldOptions, TEMPLATE_ASSET_DIR};
use crate::error::ScaffoldError;
use crate::exec::{check_status, CommandRunner};

/// Where template assets are read from for the duration of a run.
///
/// The `Cloned` variant owns its [`TempDir`]; dropping the source (end of
/// run, success or failure) removes the clone from disk.
#[derive(Debug)]
pub enum TemplateSource {
    Local(PathBuf),
    Cloned { clone: TempDir },
}

impl TemplateSource {
    /// Resolve the asset root per the options: an explicit local
    /// directory wins, otherwise the template repository is cloned.
    pub async fn resolve(
        options: &ScaffoldOptions,
        runner: &Arc<dyn CommandRunner>,
        cwd: &Path,
    ) -> Result<Self, ScaffoldError> {
        if let Some(dir) = &options.template_dir {
            if !dir.is_dir() {
                return Err(ScaffoldError::TemplateSource(format!(
                    "template dir {} does not exist",
                    dir.display()
                )));
            }
            info!(dir = %dir.display(), "using local template assets");
            return Ok(Self::Local(dir.clone()));
        }

        let clone = TempDir::with_prefix("railstart-")
            .map_err(|e| ScaffoldError::TemplateSource(format!("tempdir: {e}")))?;
        let clone_path = clone.path().to_string_lossy().to_string();

        info!(url = %options.template_url, "cloning template repository");
        let argv = [
            "git",
            "clone",
            "--quiet",
            options.template_url.as_str(),
            clone_path.as_str(),
        ];
        check_status(&argv, runner.run(&argv, cwd).await?)?;

        if let Some(branch) = &options.template_branch {
            let argv = ["git", "checkout", branch.as_str()];
            check_status(&argv, runner.run(&argv, clone.path()).await?)?;
        }

        let source = Self::Cloned { clone };
        if !source.asset_root().is_dir() {
            return Err(ScaffoldError::TemplateSource(format!(
                "cloned repository has no {TEMPLATE_ASSET_DIR}/ directory"
            )));
        }
        Ok(source)
    }

    /// Directory all template-relative paths are joined against.
    pub fn asset_root(&self) -> PathBuf {
        match self {
            Self::Local(dir) => dir.clone(),
            Self::Cloned { clone } => clone.path().join(TEMPLATE_ASSET_DIR),
        }
    }
}
