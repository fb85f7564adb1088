// SPDX-License-Identifier: MIT
//! Literal-anchor text insertion and pattern substitution.
//!
//! Behavior is undefined when a generated file does not contain the
//! expected anchor — that is surfaced as a fatal error, and the target
//! file is guaranteed untouched on every error path (edits happen on an
//! in-memory copy and are written back only on success).

use std::path::Path;

use regex::Regex;

use crate::error::ScaffoldError;

/// Where to place inserted content relative to the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Immediately preceding the anchor, byte-for-byte.
    Before,
    /// Immediately following the anchor.
    After,
}

fn read(path: &Path) -> Result<String, ScaffoldError> {
    if !path.is_file() {
        return Err(ScaffoldError::MissingFile(path.to_path_buf()));
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Insert `content` immediately before or after the first occurrence of
/// the literal `anchor` in `path`. The rest of the file is unchanged.
pub fn insert_into_file(
    path: &Path,
    content: &str,
    position: Position,
    anchor: &str,
) -> Result<(), ScaffoldError> {
    let original = read(path)?;
    let idx = original
        .find(anchor)
        .ok_or_else(|| ScaffoldError::AnchorNotFound {
            path: path.to_path_buf(),
            anchor: anchor.to_string(),
        })?;

    let split = match position {
        Position::Before => idx,
        Position::After => idx + anchor.len(),
    };

    let mut updated = String::with_capacity(original.len() + content.len());
    updated.push_str(&original[..split]);
    updated.push_str(content);
    updated.push_str(&original[split..]);
    std::fs::write(path, updated)?;
    Ok(())
}

/// Replace every match of `pattern` in `path` with `replacement`.
///
/// A pattern that matches nothing is fatal (the generated file did not
/// have the shape the sequence expects), and the file is left unchanged.
pub fn gsub_file(path: &Path, pattern: &Regex, replacement: &str) -> Result<(), ScaffoldError> {
    let original = read(path)?;
    if !pattern.is_match(&original) {
        return Err(ScaffoldError::PatternNotFound {
            path: path.to_path_buf(),
            pattern: pattern.as_str().to_string(),
        });
    }
    let updated = pattern.replace_all(&original, replacement);
    std::fs::write(path, updated.as_ref())?;
    Ok(())
}

/// Append `content` to the end of `path`, inserting a separating newline
/// if the file does not already end with one.
pub fn append_to_file(path: &Path, content: &str) -> Result<(), ScaffoldError> {
    let mut text = read(path)?;
    if !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
    text.push_str(content);
    std::fs::write(path, text)?;
    Ok(())
}

/// The route-file block opener every route insertion keys off.
pub const ROUTES_DRAW_ANCHOR: &str = "Rails.application.routes.draw do\n";

/// Add a route line inside the `config/routes.rb` draw block, two-space
/// indented, immediately after the block opener.
pub fn add_route(project_root: &Path, route: &str) -> Result<(), ScaffoldError> {
    let path = project_root.join("config/routes.rb");
    insert_into_file(&path, &format!("  {route}\n"), Position::After, ROUTES_DRAW_ANCHOR)
}

/// Add a configuration line to `config/application.rb`, inside the
/// application class body.
pub fn add_environment(project_root: &Path, line: &str) -> Result<(), ScaffoldError> {
    let path = project_root.join("config/application.rb");
    insert_into_file(
        &path,
        &format!("    {line}\n"),
        Position::After,
        "class Application < Rails::Application\n",
    )
}

/// Add a configuration line to `config/environments/<env>.rb`, inside
/// the configure block.
pub fn add_environment_for(project_root: &Path, env: &str, line: &str) -> Result<(), ScaffoldError> {
    let path = project_root.join(format!("config/environments/{env}.rb"));
    insert_into_file(
        &path,
        &format!("  {line}\n"),
        Position::After,
        "Rails.application.configure do\n",
    )
}
