// SPDX-License-Identifier: MIT
//! The fixed scaffolding sequence.
//!
//! Steps are statically declared in [`Step::SEQUENCE`] and executed
//! strictly in order by the runner; nothing creates steps at runtime.
//! Each step is a thin adapter over the primitive ops and the injected
//! command runner. Only the final commit step is non-fatal.

mod auth;
mod content;
mod gems;
mod installers;
mod integrations;
mod vcs;

use crate::config::ScaffoldOptions;
use crate::context::ScaffoldContext;
use crate::error::ScaffoldError;
use crate::template_source::TemplateSource;

/// One named unit of the scaffolding sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    ResolveTemplates,
    AddGems,
    AddTestGems,
    BundleInstall,
    SetApplicationName,
    StopSpring,
    AddUsers,
    AddAuthorization,
    AddJavascript,
    AddAnnouncements,
    AddNotifications,
    AddMultipleAuthentication,
    AddSidekiq,
    AddFriendlyId,
    CopyTemplates,
    ConfigureDatabase,
    AddWhenever,
    AddSitemap,
    UpdateReadme,
    InstallStorage,
    InstallRspec,
    InstallCucumber,
    CopyFeatures,
    GitInit,
    GitCommit,
}

impl Step {
    /// The full sequence, in execution order.
    pub const SEQUENCE: &'static [Step] = &[
        Step::ResolveTemplates,
        Step::AddGems,
        Step::AddTestGems,
        Step::BundleInstall,
        Step::SetApplicationName,
        Step::StopSpring,
        Step::AddUsers,
        Step::AddAuthorization,
        Step::AddJavascript,
        Step::AddAnnouncements,
        Step::AddNotifications,
        Step::AddMultipleAuthentication,
        Step::AddSidekiq,
        Step::AddFriendlyId,
        Step::CopyTemplates,
        Step::ConfigureDatabase,
        Step::AddWhenever,
        Step::AddSitemap,
        Step::UpdateReadme,
        Step::InstallStorage,
        Step::InstallRspec,
        Step::InstallCucumber,
        Step::CopyFeatures,
        Step::GitInit,
        Step::GitCommit,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Step::ResolveTemplates => "resolve-templates",
            Step::AddGems => "add-gems",
            Step::AddTestGems => "add-test-gems",
            Step::BundleInstall => "bundle-install",
            Step::SetApplicationName => "set-application-name",
            Step::StopSpring => "stop-spring",
            Step::AddUsers => "add-users",
            Step::AddAuthorization => "add-authorization",
            Step::AddJavascript => "add-javascript",
            Step::AddAnnouncements => "add-announcements",
            Step::AddNotifications => "add-notifications",
            Step::AddMultipleAuthentication => "add-multiple-authentication",
            Step::AddSidekiq => "add-sidekiq",
            Step::AddFriendlyId => "add-friendly-id",
            Step::CopyTemplates => "copy-templates",
            Step::ConfigureDatabase => "configure-database",
            Step::AddWhenever => "add-whenever",
            Step::AddSitemap => "add-sitemap",
            Step::UpdateReadme => "update-readme",
            Step::InstallStorage => "install-storage",
            Step::InstallRspec => "install-rspec",
            Step::InstallCucumber => "install-cucumber",
            Step::CopyFeatures => "copy-features",
            Step::GitInit => "git-init",
            Step::GitCommit => "git-commit",
        }
    }

    /// A failed fatal step aborts the remaining sequence. The commit is
    /// the single carve-out: a bad git identity must not fail the run.
    pub fn fatal(&self) -> bool {
        !matches!(self, Step::GitCommit)
    }

    /// Whether the step participates in this run at all.
    pub fn enabled(&self, options: &ScaffoldOptions) -> bool {
        match self {
            Step::GitInit | Step::GitCommit => !options.skip_git,
            _ => true,
        }
    }

    pub async fn run(&self, ctx: &mut ScaffoldContext) -> Result<(), ScaffoldError> {
        match self {
            Step::ResolveTemplates => {
                let source =
                    TemplateSource::resolve(&ctx.options, &ctx.runner, &ctx.project_root).await?;
                ctx.template_source = Some(source);
                Ok(())
            }
            Step::AddGems => gems::add_gems(ctx),
            Step::AddTestGems => gems::add_test_gems(ctx),
            Step::BundleInstall => gems::bundle_install(ctx).await,
            Step::SetApplicationName => auth::set_application_name(ctx),
            Step::StopSpring => auth::stop_spring(ctx).await,
            Step::AddUsers => auth::add_users(ctx).await,
            Step::AddAuthorization => auth::add_authorization(ctx).await,
            Step::AddJavascript => integrations::add_javascript(ctx).await,
            Step::AddAnnouncements => integrations::add_announcements(ctx).await,
            Step::AddNotifications => integrations::add_notifications(ctx).await,
            Step::AddMultipleAuthentication => {
                integrations::add_multiple_authentication(ctx).await
            }
            Step::AddSidekiq => integrations::add_sidekiq(ctx),
            Step::AddFriendlyId => integrations::add_friendly_id(ctx).await,
            Step::CopyTemplates => content::copy_templates(ctx),
            Step::ConfigureDatabase => content::configure_database(ctx),
            Step::AddWhenever => installers::add_whenever(ctx).await,
            Step::AddSitemap => installers::add_sitemap(ctx).await,
            Step::UpdateReadme => content::update_readme(ctx),
            Step::InstallStorage => installers::install_storage(ctx).await,
            Step::InstallRspec => installers::install_rspec(ctx).await,
            Step::InstallCucumber => installers::install_cucumber(ctx).await,
            Step::CopyFeatures => content::copy_features(ctx),
            Step::GitInit => vcs::git_init(ctx).await,
            Step::GitCommit => vcs::git_commit(ctx).await,
        }
    }
}
