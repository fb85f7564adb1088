// SPDX-License-Identifier: MIT
//! Command execution capability.
//!
//! Every external tool the scaffolder drives (`bin/rails`, `bundle`,
//! `yarn`, `git`, `spring`, `wheneverize`) is invoked through the
//! [`CommandRunner`] trait so the orchestration logic can be exercised
//! in tests without the real toolchain installed.
//!
//! The argv lists passed through here are part of the external contract
//! with the Rails generators and must not be rewritten or re-quoted.

use std::path::Path;

use async_trait::async_trait;

use crate::error::ScaffoldError;

/// Captured result of one external command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Capability to run an external command to completion.
///
/// Implementations block (await) until the process exits; there is no
/// timeout and no retry. Spawn failures (binary not on PATH, bad cwd)
/// surface as `ScaffoldError::Io`.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, argv: &[&str], cwd: &Path) -> Result<CommandOutput, ScaffoldError>;
}

/// Runs commands on the host system via `tokio::process`.
pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, argv: &[&str], cwd: &Path) -> Result<CommandOutput, ScaffoldError> {
        let (program, args) = argv.split_first().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty argv")
        })?;

        let output = tokio::process::Command::new(program)
            .args(args)
            .current_dir(cwd)
            .output()
            .await?;

        Ok(CommandOutput {
            code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Render an argv for log and error messages.
pub fn display_argv(argv: &[&str]) -> String {
    argv.join(" ")
}

/// Map a non-zero exit into the fatal error the step runner aborts on.
pub fn check_status(argv: &[&str], output: CommandOutput) -> Result<CommandOutput, ScaffoldError> {
    if output.success() {
        Ok(output)
    } else {
        Err(ScaffoldError::CommandFailed {
            command: display_argv(argv),
            code: output.code,
            stderr: output.stderr.trim_end().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_zero_exit_maps_to_command_failed() {
        let out = CommandOutput {
            code: 1,
            stdout: String::new(),
            stderr: "boom\n".into(),
        };
        let err = check_status(&["git", "commit"], out).unwrap_err();
        match err {
            ScaffoldError::CommandFailed { command, code, stderr } => {
                assert_eq!(command, "git commit");
                assert_eq!(code, 1);
                assert_eq!(stderr, "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn zero_exit_passes_through() {
        let out = CommandOutput {
            code: 0,
            stdout: "ok".into(),
            stderr: String::new(),
        };
        assert!(check_status(&["true"], out).is_ok());
    }
}
