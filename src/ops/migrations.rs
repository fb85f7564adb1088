// SPDX-License-Identifier: MIT
//! Locating just-generated migration files under `db/migrate/`.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::ScaffoldError;

fn migrate_dir(project_root: &Path) -> PathBuf {
    project_root.join("db/migrate")
}

/// The most recently modified migration file.
///
/// Known limitation, preserved deliberately: this assumes the
/// immediately preceding generator created exactly one new migration.
/// If anything else writes into `db/migrate/` between the generator and
/// this lookup (a concurrent run, a re-run against a dirty tree), the
/// wrong file can be selected. The generators give no better signal, so
/// the mtime heuristic is the contract.
pub fn latest_migration(project_root: &Path) -> Result<PathBuf, ScaffoldError> {
    let dir = migrate_dir(project_root);
    let mut newest: Option<(SystemTime, PathBuf)> = None;

    for entry in std::fs::read_dir(&dir).map_err(|_| ScaffoldError::MissingArtifact {
        dir: dir.clone(),
        pattern: "*".into(),
    })? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let mtime = entry.metadata()?.modified()?;
        match &newest {
            Some((best, _)) if *best >= mtime => {}
            _ => newest = Some((mtime, path)),
        }
    }

    newest
        .map(|(_, path)| path)
        .ok_or_else(|| ScaffoldError::MissingArtifact {
            dir,
            pattern: "*".into(),
        })
}

/// The first migration whose file name ends with `suffix`
/// (e.g. `friendly_id_slugs.rb`).
pub fn migration_with_suffix(project_root: &Path, suffix: &str) -> Result<PathBuf, ScaffoldError> {
    let dir = migrate_dir(project_root);
    let entries = std::fs::read_dir(&dir).map_err(|_| ScaffoldError::MissingArtifact {
        dir: dir.clone(),
        pattern: format!("*{suffix}"),
    })?;

    let mut matches: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.file_name()
                .map(|n| n.to_string_lossy().ends_with(suffix))
                .unwrap_or(false)
        })
        .collect();
    matches.sort();

    matches
        .into_iter()
        .next()
        .ok_or_else(|| ScaffoldError::MissingArtifact {
            dir,
            pattern: format!("*{suffix}"),
        })
}
