// SPDX-License-Identifier: MIT
//! Copying and rendering bundled template assets into the project tree.

use std::path::Path;

use crate::error::ScaffoldError;

/// Copy one asset file, creating parent directories as needed.
/// Existing files are overwritten.
pub fn copy_file(asset_root: &Path, project_root: &Path, rel: &str) -> Result<(), ScaffoldError> {
    let src = asset_root.join(rel);
    if !src.is_file() {
        return Err(ScaffoldError::MissingFile(src));
    }
    let dest = project_root.join(rel);
    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::copy(&src, &dest)?;
    Ok(())
}

/// Recursively copy an asset directory over the project tree,
/// overwriting anything already there.
pub fn copy_dir(asset_root: &Path, project_root: &Path, rel: &str) -> Result<(), ScaffoldError> {
    let src_root = asset_root.join(rel);
    if !src_root.is_dir() {
        return Err(ScaffoldError::MissingFile(src_root));
    }

    let mut pending = vec![src_root.clone()];
    while let Some(dir) = pending.pop() {
        let rel_dir = dir
            .strip_prefix(&src_root)
            .expect("walked path is under its own root");
        let dest_dir = project_root.join(rel).join(rel_dir);
        std::fs::create_dir_all(&dest_dir)?;

        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_dir() {
                pending.push(path);
            } else {
                let dest = dest_dir.join(entry.file_name());
                std::fs::copy(&path, &dest)?;
            }
        }
    }
    Ok(())
}

/// Render an asset into the project tree, substituting every
/// `{{key}}` placeholder with its value.
pub fn render_file(
    asset_root: &Path,
    project_root: &Path,
    src_rel: &str,
    dest_rel: &str,
    substitutions: &[(&str, &str)],
) -> Result<(), ScaffoldError> {
    let src = asset_root.join(src_rel);
    if !src.is_file() {
        return Err(ScaffoldError::MissingFile(src));
    }

    let mut content = std::fs::read_to_string(&src)?;
    for (key, value) in substitutions {
        content = content.replace(&format!("{{{{{key}}}}}"), value);
    }

    let dest = project_root.join(dest_rel);
    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&dest, content)?;
    Ok(())
}
