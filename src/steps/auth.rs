// SPDX-License-Identifier: MIT
//! Application naming, Devise user setup, and Pundit authorization.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::context::ScaffoldContext;
use crate::error::ScaffoldError;
use crate::ops::migrations::latest_migration;
use crate::ops::text::{
    add_environment, add_environment_for, add_route, gsub_file, insert_into_file, Position,
};

static ADMIN_COLUMN: Lazy<Regex> =
    Lazy::new(|| Regex::new(":admin").expect("static pattern compiles"));

static COMMENTED_SECRET_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"  # config\.secret_key = .+").expect("static pattern compiles"));

static GEMFILE_LOCK_RAILS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^    rails \((\d+)\.(\d+)\.(\d+)").expect("static pattern compiles"));

pub fn set_application_name(ctx: &ScaffoldContext) -> Result<(), ScaffoldError> {
    add_environment(
        &ctx.project_root,
        "config.application_name = Rails.application.class.module_parent_name",
    )?;
    ctx.say("You can change application name inside: ./config/application.rb");
    Ok(())
}

/// Stop any spring dev-watcher left running by `rails new`, so the
/// generators below don't talk to a stale preloader.
pub async fn stop_spring(ctx: &ScaffoldContext) -> Result<(), ScaffoldError> {
    ctx.exec(&["spring", "stop"]).await?;
    Ok(())
}

pub async fn add_users(ctx: &ScaffoldContext) -> Result<(), ScaffoldError> {
    ctx.generate(&["devise:install"]).await?;

    add_environment_for(
        &ctx.project_root,
        "development",
        "config.action_mailer.default_url_options = { host: 'localhost', port: 3000 }",
    )?;
    add_route(&ctx.project_root, "root to: 'home#index'")?;

    // Devise notices are installed via Bootstrap.
    ctx.generate(&["devise:views:bootstrapped"]).await?;

    ctx.generate(&[
        "devise",
        "User",
        "first_name",
        "last_name",
        "announcements_last_read_at:datetime",
        "admin:boolean",
    ])
    .await?;

    // The generator just wrote the users migration; default admin to false.
    let migration = latest_migration(&ctx.project_root)?;
    gsub_file(&migration, &ADMIN_COLUMN, ":admin, default: false")?;

    // Skeletons newer than Rails 5.2 keep the secret key in credentials.
    if rails_version_above_5_2(ctx) {
        gsub_file(
            &ctx.path("config/initializers/devise.rb"),
            &COMMENTED_SECRET_KEY,
            "  config.secret_key = Rails.application.credentials.secret_key_base",
        )?;
    }

    insert_into_file(
        &ctx.path("app/models/user.rb"),
        "omniauthable, :masqueradable, :",
        Position::After,
        "devise :",
    )
}

pub async fn add_authorization(ctx: &ScaffoldContext) -> Result<(), ScaffoldError> {
    ctx.generate(&["pundit:install"]).await?;
    Ok(())
}

/// Read the skeleton's Rails version out of `Gemfile.lock`. When the
/// lockfile is missing or unparsable we assume a modern skeleton.
fn rails_version_above_5_2(ctx: &ScaffoldContext) -> bool {
    let lock = match std::fs::read_to_string(ctx.path("Gemfile.lock")) {
        Ok(lock) => lock,
        Err(_) => return true,
    };
    match GEMFILE_LOCK_RAILS.captures(&lock) {
        Some(caps) => {
            let major: u32 = caps[1].parse().unwrap_or(0);
            let minor: u32 = caps[2].parse().unwrap_or(0);
            let patch: u32 = caps[3].parse().unwrap_or(0);
            (major, minor, patch) > (5, 2, 0)
        }
        None => true,
    }
}
