// SPDX-License-Identifier: MIT
//! Gemfile manifest edits.
//!
//! Declarations are append-only during a run: single `gem` lines at the
//! end of the file, grouped declarations as a trailing `group ... end`
//! block. Running the sequence twice appends duplicates — idempotence is
//! deliberately not provided.

use std::fmt::Write as _;
use std::path::Path;

use crate::error::ScaffoldError;
use crate::ops::text::append_to_file;

/// One dependency declaration destined for the Gemfile.
#[derive(Debug, Clone)]
pub struct GemDependency {
    pub name: &'static str,
    /// Version requirements in declaration order (`~> 4.7`, `>= 4.7.3`).
    pub requirements: &'static [&'static str],
    /// `github: 'owner/repo', branch: '...'` source override.
    pub github: Option<(&'static str, &'static str)>,
    /// Explicit `require:` argument, when the declaration carries one.
    pub require: Option<bool>,
}

impl GemDependency {
    pub const fn new(name: &'static str, requirements: &'static [&'static str]) -> Self {
        Self {
            name,
            requirements,
            github: None,
            require: None,
        }
    }

    pub const fn from_github(name: &'static str, repo: &'static str, branch: &'static str) -> Self {
        Self {
            name,
            requirements: &[],
            github: Some((repo, branch)),
            require: None,
        }
    }

    pub const fn without_require(name: &'static str) -> Self {
        Self {
            name,
            requirements: &[],
            github: None,
            require: Some(false),
        }
    }

    /// Render the `gem '...'` line exactly as it appears in the manifest.
    pub fn to_declaration(&self) -> String {
        let mut line = format!("gem '{}'", self.name);
        for req in self.requirements {
            write!(line, ", '{req}'").expect("writing to a String cannot fail");
        }
        if let Some((repo, branch)) = self.github {
            write!(line, ", github: '{repo}', branch: '{branch}'")
                .expect("writing to a String cannot fail");
        }
        if let Some(require) = self.require {
            write!(line, ", require: {require}").expect("writing to a String cannot fail");
        }
        line
    }
}

fn gemfile(project_root: &Path) -> std::path::PathBuf {
    project_root.join("Gemfile")
}

/// Append one gem declaration after the existing entries.
pub fn add_gem(project_root: &Path, gem: &GemDependency) -> Result<(), ScaffoldError> {
    append_to_file(&gemfile(project_root), &format!("{}\n", gem.to_declaration()))
}

/// Append a `group <groups> do ... end` block containing `gems`.
pub fn add_gem_group(
    project_root: &Path,
    groups: &[&str],
    gems: &[GemDependency],
) -> Result<(), ScaffoldError> {
    let labels: Vec<String> = groups.iter().map(|g| format!(":{g}")).collect();
    let mut block = format!("\ngroup {} do\n", labels.join(", "));
    for gem in gems {
        writeln!(block, "  {}", gem.to_declaration()).expect("writing to a String cannot fail");
    }
    block.push_str("end\n");
    append_to_file(&gemfile(project_root), &block)
}
