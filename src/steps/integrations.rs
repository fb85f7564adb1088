// SPDX-License-Identifier: MIT
//! Frontend packages, domain models, social login, background jobs,
//! and slugs.
//!
//! The inserted Ruby snippets are byte-for-byte the text the generated
//! app expects; reformatting them would change the contract.

use crate::context::ScaffoldContext;
use crate::error::ScaffoldError;
use crate::ops::migrations::migration_with_suffix;
use crate::ops::text::{
    add_environment, add_route, insert_into_file, Position, ROUTES_DRAW_ANCHOR,
};

/// Per-provider OmniAuth credential wiring, inserted into the Devise
/// initializer ahead of the Warden section.
const OMNIAUTH_CREDENTIALS: &str = "  env_creds = Rails.application.credentials[Rails.env.to_sym] || {}
    %i{ facebook twitter github }.each do |provider|
      if options = env_creds[provider]
        config.omniauth provider, options[:app_id], options[:app_secret], options.fetch(:options, {})
      end
    end

";

/// Admin-gated Sidekiq web UI and the madmin namespace, mounted at the
/// top of the routes draw block.
const SIDEKIQ_ROUTES: &str = "authenticate :user, lambda { |u| u.admin? } do
  mount Sidekiq::Web => '/sidekiq'

  namespace :madmin do
  end
end

";

pub async fn add_javascript(ctx: &ScaffoldContext) -> Result<(), ScaffoldError> {
    ctx.yarn_add("bootstrap@next").await?;
    ctx.yarn_add("@popperjs/core").await?;
    ctx.yarn_add("@fortawesome/fontawesome-free").await?;
    Ok(())
}

pub async fn add_announcements(ctx: &ScaffoldContext) -> Result<(), ScaffoldError> {
    ctx.generate(&[
        "model",
        "Announcement",
        "published_at:datetime",
        "announcement_type",
        "name",
        "description:text",
    ])
    .await?;
    add_route(&ctx.project_root, "resources :announcements, only: [:index]")
}

pub async fn add_notifications(ctx: &ScaffoldContext) -> Result<(), ScaffoldError> {
    ctx.generate(&["noticed:model"]).await?;
    add_route(&ctx.project_root, "resources :notifications, only: [:index]")
}

pub async fn add_multiple_authentication(ctx: &ScaffoldContext) -> Result<(), ScaffoldError> {
    insert_into_file(
        &ctx.path("config/routes.rb"),
        ", controllers: { omniauth_callbacks: \"users/omniauth_callbacks\" }",
        Position::After,
        "  devise_for :users",
    )?;

    ctx.generate(&[
        "model",
        "Service",
        "user:references",
        "provider",
        "uid",
        "access_token",
        "access_token_secret",
        "refresh_token",
        "expires_at:datetime",
        "auth:text",
    ])
    .await?;

    insert_into_file(
        &ctx.path("config/initializers/devise.rb"),
        OMNIAUTH_CREDENTIALS,
        Position::Before,
        "  # ==> Warden configuration",
    )
}

pub fn add_sidekiq(ctx: &ScaffoldContext) -> Result<(), ScaffoldError> {
    add_environment(&ctx.project_root, "config.active_job.queue_adapter = :sidekiq")?;

    let routes = ctx.path("config/routes.rb");
    insert_into_file(
        &routes,
        "require 'sidekiq/web'\n\n",
        Position::Before,
        "Rails.application.routes.draw do",
    )?;
    insert_into_file(&routes, SIDEKIQ_ROUTES, Position::After, ROUTES_DRAW_ANCHOR)
}

pub async fn add_friendly_id(ctx: &ScaffoldContext) -> Result<(), ScaffoldError> {
    ctx.generate(&["friendly_id"]).await?;

    let migration = migration_with_suffix(&ctx.project_root, "friendly_id_slugs.rb")?;
    insert_into_file(&migration, "[5.2]", Position::After, "ActiveRecord::Migration")
}
