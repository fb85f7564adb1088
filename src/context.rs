// SPDX-License-Identifier: MIT
//! Shared state for one scaffold run.
//!
//! The original generation scripts in this space lean on an implicit
//! current working directory and hidden template-engine state; here
//! everything a step touches travels through [`ScaffoldContext`]: the
//! project root, the resolved options, the injected command runner, the
//! resolved template source, and the step-execution log.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::config::ScaffoldOptions;
use crate::error::ScaffoldError;
use crate::exec::{check_status, CommandOutput, CommandRunner};
use crate::runner::StepResult;
use crate::template_source::TemplateSource;

/// Mutable run state threaded through every step.
///
/// The context (and therefore the orchestrator) is the exclusive owner
/// of the project tree for the duration of the run.
pub struct ScaffoldContext {
    pub run_id: String,
    pub started_at: String,
    pub project_root: PathBuf,
    /// Database/README-safe name derived from the project directory.
    pub app_name: String,
    pub options: ScaffoldOptions,
    pub runner: Arc<dyn CommandRunner>,
    /// Resolved by the first step; later steps read assets through it.
    pub template_source: Option<TemplateSource>,
    /// Append-only log of finished steps.
    pub log: Vec<StepResult>,
}

impl ScaffoldContext {
    pub fn new(
        project_root: PathBuf,
        options: ScaffoldOptions,
        runner: Arc<dyn CommandRunner>,
    ) -> Self {
        let app_name = app_name_from(&project_root);
        Self {
            run_id: Uuid::new_v4().to_string(),
            started_at: Utc::now().to_rfc3339(),
            project_root,
            app_name,
            options,
            runner,
            template_source: None,
            log: Vec::new(),
        }
    }

    /// Join a project-relative path.
    pub fn path(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.project_root.join(rel)
    }

    /// Asset root of the resolved template source.
    pub fn template_root(&self) -> Result<PathBuf, ScaffoldError> {
        self.template_source
            .as_ref()
            .map(TemplateSource::asset_root)
            .ok_or_else(|| ScaffoldError::TemplateSource("template source not resolved".into()))
    }

    /// Run an external command in the project root; non-zero exit is fatal.
    pub async fn exec(&self, argv: &[&str]) -> Result<CommandOutput, ScaffoldError> {
        check_status(argv, self.runner.run(argv, &self.project_root).await?)
    }

    /// `bin/rails generate <args…>` — the generator argv is an external
    /// contract; arguments pass through verbatim.
    pub async fn generate(&self, args: &[&str]) -> Result<CommandOutput, ScaffoldError> {
        let mut argv = vec!["bin/rails", "generate"];
        argv.extend_from_slice(args);
        self.exec(&argv).await
    }

    /// `bin/rails <task>` (e.g. `sitemap:install`, `active_storage:install`).
    pub async fn rails_command(&self, args: &[&str]) -> Result<CommandOutput, ScaffoldError> {
        let mut argv = vec!["bin/rails"];
        argv.extend_from_slice(args);
        self.exec(&argv).await
    }

    /// `yarn add <package>`.
    pub async fn yarn_add(&self, package: &str) -> Result<CommandOutput, ScaffoldError> {
        self.exec(&["yarn", "add", package]).await
    }

    /// Progress line for the user. Suppressed by `--quiet`; errors go
    /// through the error path, never through here.
    pub fn say(&self, message: impl AsRef<str>) {
        if !self.options.quiet {
            println!("{}", message.as_ref());
        }
    }
}

/// Derive the app name Rails would use: the project directory name,
/// lowercased, with anything outside `[a-z0-9_]` folded to `_`.
fn app_name_from(project_root: &Path) -> String {
    let raw = project_root
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "app".to_string());
    raw.chars()
        .map(|c| {
            let c = c.to_ascii_lowercase();
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
