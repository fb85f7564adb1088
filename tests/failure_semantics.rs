// SPDX-License-Identifier: MIT
//! First-failure abort, the tolerated commit failure, and the
//! no-modification guarantee for missing anchors.

mod support;

use railstart::error::ScaffoldError;
use railstart::runner::{self, RunStatus};
use support::{bare_skeleton, context, MockRunner};

#[tokio::test]
async fn fatal_step_failure_aborts_the_remaining_sequence() {
    let skeleton = bare_skeleton();
    let mock = MockRunner::new();
    mock.fail_on("yarn add bootstrap@next", 127, "yarn: command not found");
    let mut ctx = context(&skeleton, mock.clone(), false);

    let err = runner::run(&mut ctx).await.unwrap_err();
    match err {
        ScaffoldError::CommandFailed { command, code, stderr } => {
            assert_eq!(command, "yarn add bootstrap@next");
            assert_eq!(code, 127);
            assert_eq!(stderr, "yarn: command not found");
        }
        other => panic!("unexpected error: {other}"),
    }

    // The failing step is the last log entry.
    let last = ctx.log.last().unwrap();
    assert_eq!(last.step_name, "add-javascript");
    assert_eq!(last.status, "failed");

    // Nothing after the failure ran: no later commands, no copied files.
    let calls = mock.recorded();
    assert!(calls.iter().all(|c| !c.starts_with("wheneverize")));
    assert!(calls.iter().all(|c| !c.starts_with("git")));
    assert!(!skeleton.path().join("Procfile").exists());
}

#[tokio::test]
async fn commit_failure_is_tolerated_and_reported() {
    let skeleton = bare_skeleton();
    let mock = MockRunner::new();
    mock.fail_on(
        "git commit",
        128,
        "fatal: unable to auto-detect email address",
    );
    let mut ctx = context(&skeleton, mock.clone(), false);

    // Overall run still succeeds.
    let status = runner::run(&mut ctx).await.unwrap();
    assert_eq!(status, RunStatus::Success);

    let last = ctx.log.last().unwrap();
    assert_eq!(last.step_name, "git-commit");
    assert_eq!(last.status, "tolerated");
    assert!(last
        .detail
        .as_deref()
        .unwrap()
        .contains("unable to auto-detect email address"));

    // git init/add still ran before the tolerated commit.
    let calls = mock.recorded();
    assert!(calls.contains(&"git init".to_string()));
    assert!(calls.contains(&"git add .".to_string()));
}

#[tokio::test]
async fn earlier_git_failures_are_still_fatal() {
    let skeleton = bare_skeleton();
    let mock = MockRunner::new();
    mock.fail_on("git init", 1, "permission denied");
    let mut ctx = context(&skeleton, mock.clone(), false);

    let err = runner::run(&mut ctx).await.unwrap_err();
    assert!(matches!(err, ScaffoldError::CommandFailed { .. }));
    assert_eq!(ctx.log.last().unwrap().step_name, "git-init");
}

#[tokio::test]
async fn missing_readme_anchor_fails_without_touching_the_file() {
    let skeleton = bare_skeleton();
    std::fs::write(
        skeleton.path().join("README.md"),
        "A readme with no standard heading\n",
    )
    .unwrap();
    let mock = MockRunner::new();
    let mut ctx = context(&skeleton, mock.clone(), false);

    let err = runner::run(&mut ctx).await.unwrap_err();
    match err {
        ScaffoldError::AnchorNotFound { anchor, .. } => assert_eq!(anchor, "# README"),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(ctx.log.last().unwrap().step_name, "update-readme");
    assert_eq!(
        std::fs::read_to_string(skeleton.path().join("README.md")).unwrap(),
        "A readme with no standard heading\n"
    );
}
