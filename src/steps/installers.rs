// SPDX-License-Identifier: MIT
//! External installer invocations: scheduled tasks, sitemaps, storage,
//! and the test frameworks.

use crate::context::ScaffoldContext;
use crate::error::ScaffoldError;

pub async fn add_whenever(ctx: &ScaffoldContext) -> Result<(), ScaffoldError> {
    ctx.exec(&["wheneverize", "."]).await?;
    Ok(())
}

pub async fn add_sitemap(ctx: &ScaffoldContext) -> Result<(), ScaffoldError> {
    ctx.rails_command(&["sitemap:install"]).await?;
    Ok(())
}

pub async fn install_storage(ctx: &ScaffoldContext) -> Result<(), ScaffoldError> {
    ctx.rails_command(&["active_storage:install"]).await?;
    Ok(())
}

pub async fn install_rspec(ctx: &ScaffoldContext) -> Result<(), ScaffoldError> {
    ctx.generate(&["rspec:install"]).await?;
    Ok(())
}

pub async fn install_cucumber(ctx: &ScaffoldContext) -> Result<(), ScaffoldError> {
    ctx.generate(&["cucumber:install"]).await?;
    Ok(())
}
