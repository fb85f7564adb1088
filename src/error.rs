// SPDX-License-Identifier: MIT
//! Error taxonomy for a scaffold run.
//!
//! Everything here is fatal and aborts the run at the first occurrence.
//! The one carve-out — the final git commit — is handled by the step
//! runner's non-fatal flag, not by a separate error variant.

use std::path::PathBuf;

/// Errors produced while scaffolding a project tree.
#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    /// An external command exited non-zero.
    #[error("command `{command}` failed (exit {code}): {stderr}")]
    CommandFailed {
        command: String,
        code: i32,
        stderr: String,
    },

    /// A literal anchor string was absent from the target file.
    /// The file is guaranteed to be unmodified when this is returned.
    #[error("anchor {anchor:?} not found in {path}")]
    AnchorNotFound { path: PathBuf, anchor: String },

    /// A substitution pattern matched nothing in the target file.
    /// The file is guaranteed to be unmodified when this is returned.
    #[error("pattern `{pattern}` matched nothing in {path}")]
    PatternNotFound { path: PathBuf, pattern: String },

    /// A generated file we expected to find (e.g. the newest migration)
    /// does not exist.
    #[error("no generated file matching {pattern:?} under {dir}")]
    MissingArtifact { dir: PathBuf, pattern: String },

    /// A file a step needs to edit or copy is missing.
    #[error("required file not found: {0}")]
    MissingFile(PathBuf),

    /// The template asset source could not be resolved.
    #[error("template source unavailable: {0}")]
    TemplateSource(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
