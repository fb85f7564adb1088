// SPDX-License-Identifier: MIT
//! Version-control finalization.
//!
//! `git init` + `git add .` are ordinary fatal steps; the commit is the
//! sequence's one tolerated failure (a machine without `user.email`
//! configured should still end up with a fully scaffolded app).

use crate::context::ScaffoldContext;
use crate::error::ScaffoldError;

pub async fn git_init(ctx: &ScaffoldContext) -> Result<(), ScaffoldError> {
    ctx.exec(&["git", "init"]).await?;
    ctx.exec(&["git", "add", "."]).await?;
    Ok(())
}

pub async fn git_commit(ctx: &ScaffoldContext) -> Result<(), ScaffoldError> {
    ctx.exec(&["git", "commit", "-m", "Initial commit"]).await?;
    Ok(())
}
