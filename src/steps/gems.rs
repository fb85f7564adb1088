// SPDX-License-Identifier: MIT
//! Gem declarations and the dependency install bridge.
//!
//! Version constraints are pinned to the set the generated starter app
//! is known to work with; changing them is a compatibility decision,
//! not a routine bump.

use crate::context::ScaffoldContext;
use crate::error::ScaffoldError;
use crate::ops::manifest::{add_gem, add_gem_group, GemDependency};

const GEMS: &[GemDependency] = &[
    GemDependency::new("devise", &["~> 4.7", ">= 4.7.3"]),
    GemDependency::from_github("devise-bootstrapped", "excid3/devise-bootstrapped", "bootstrap4"),
    GemDependency::new("devise_masquerade", &["~> 1.2"]),
    GemDependency::new("font-awesome-sass", &["~> 5.15.1"]),
    GemDependency::new("friendly_id", &["~> 5.3"]),
    GemDependency::new("image_processing", &[]),
    GemDependency::new("madmin", &[]),
    GemDependency::new("mini_magick", &["~> 4.10", ">= 4.10.1"]),
    GemDependency::new("name_of_person", &["~> 1.1"]),
    GemDependency::new("noticed", &["~> 1.2"]),
    GemDependency::new("omniauth-facebook", &["~> 6.0"]),
    GemDependency::new("omniauth-github", &["~> 1.4"]),
    GemDependency::new("omniauth-twitter", &["~> 1.4"]),
    GemDependency::new("pundit", &["~> 2.1"]),
    GemDependency::new("redis", &["~> 4.2", ">= 4.2.2"]),
    GemDependency::new("sidekiq", &["~> 6.1"]),
    GemDependency::new("sitemap_generator", &["~> 6.1", ">= 6.1.2"]),
    GemDependency::without_require("whenever"),
];

const TEST_GEMS: &[GemDependency] = &[
    GemDependency::new("capybara-screenshot", &[]),
    GemDependency::without_require("cucumber-rails"),
    GemDependency::new("database_cleaner", &[]),
    GemDependency::new("rails-controller-testing", &[]),
];

const DEV_TEST_GEMS: &[GemDependency] = &[
    GemDependency::new("rspec-rails", &[]),
    GemDependency::new("factory_bot_rails", &[]),
    GemDependency::new("shoulda-matchers", &[]),
    GemDependency::new("faker", &[]),
];

/// Number of top-level gem declarations `add_gems` appends.
pub const GEM_COUNT: usize = GEMS.len();

pub fn add_gems(ctx: &ScaffoldContext) -> Result<(), ScaffoldError> {
    for gem in GEMS {
        add_gem(&ctx.project_root, gem)?;
    }
    Ok(())
}

pub fn add_test_gems(ctx: &ScaffoldContext) -> Result<(), ScaffoldError> {
    add_gem_group(&ctx.project_root, &["test"], TEST_GEMS)?;
    add_gem_group(&ctx.project_root, &["development", "test"], DEV_TEST_GEMS)
}

pub async fn bundle_install(ctx: &ScaffoldContext) -> Result<(), ScaffoldError> {
    ctx.exec(&["bundle", "install"]).await?;
    Ok(())
}
