// SPDX-License-Identifier: MIT
//! The scaffolding orchestrator.
//!
//! Executes [`Step::SEQUENCE`] strictly in order against the project
//! tree. A step must finish before the next begins; the first fatal
//! failure aborts everything that remains. There is no rollback — a
//! mid-run failure leaves the tree partially modified, matching the
//! non-transactional file writes of the generators being driven.

use serde_json::{json, Value};
use tracing::{info, warn};

use crate::context::ScaffoldContext;
use crate::error::ScaffoldError;
use crate::steps::Step;

/// Terminal status of a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Success,
    Failure,
}

impl RunStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
        }
    }
}

/// Outcome of a single step, appended to the context log as each step
/// finishes.
#[derive(Debug, Clone, serde::Serialize)]
pub struct StepResult {
    pub step_index: usize,
    pub step_name: &'static str,
    /// `success`, `failed`, `tolerated`, or `skipped`.
    pub status: &'static str,
    /// Error text for `failed`/`tolerated` outcomes.
    pub detail: Option<String>,
    pub duration_ms: u64,
}

/// Run the full sequence. On fatal failure the error is returned after
/// the failing step has been recorded in `ctx.log`; the tolerated
/// commit failure is recorded, printed, and does not fail the run.
pub async fn run(ctx: &mut ScaffoldContext) -> Result<RunStatus, ScaffoldError> {
    let total = Step::SEQUENCE.len();

    for (i, step) in Step::SEQUENCE.iter().enumerate() {
        if !step.enabled(&ctx.options) {
            ctx.log.push(StepResult {
                step_index: i,
                step_name: step.name(),
                status: "skipped",
                detail: None,
                duration_ms: 0,
            });
            info!(step = step.name(), "skipped");
            continue;
        }

        ctx.say(format!("[{}/{}] {}", i + 1, total, step.name()));
        let start = std::time::Instant::now();
        let result = step.run(ctx).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(()) => {
                info!(step = step.name(), duration_ms, "step complete");
                ctx.log.push(StepResult {
                    step_index: i,
                    step_name: step.name(),
                    status: "success",
                    detail: None,
                    duration_ms,
                });
            }
            Err(e) if step.fatal() => {
                ctx.log.push(StepResult {
                    step_index: i,
                    step_name: step.name(),
                    status: "failed",
                    detail: Some(e.to_string()),
                    duration_ms,
                });
                return Err(e);
            }
            Err(e) => {
                // The commit carve-out: surface the message, keep going.
                warn!(step = step.name(), err = %e, "non-fatal step failed");
                eprintln!("{}", e);
                ctx.log.push(StepResult {
                    step_index: i,
                    step_name: step.name(),
                    status: "tolerated",
                    detail: Some(e.to_string()),
                    duration_ms,
                });
            }
        }
    }

    Ok(RunStatus::Success)
}

/// Run summary for `--json` output.
pub fn summary(ctx: &ScaffoldContext, status: RunStatus) -> Value {
    json!({
        "runId": ctx.run_id,
        "app": ctx.app_name,
        "projectRoot": ctx.project_root,
        "startedAt": ctx.started_at,
        "status": status.as_str(),
        "steps": ctx.log,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_status_exit_codes() {
        assert_eq!(RunStatus::Success.exit_code(), 0);
        assert_eq!(RunStatus::Failure.exit_code(), 1);
    }
}
