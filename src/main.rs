// SPDX-License-Identifier: MIT
//! `railstart` CLI entry point.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::Parser;

use railstart::config::{ConfigFile, ScaffoldOptions};
use railstart::context::ScaffoldContext;
use railstart::exec::SystemRunner;
use railstart::runner::{self, RunStatus};

#[derive(Parser)]
#[command(
    name = "railstart",
    about = "Wire a fresh Rails skeleton into a full starter app",
    version
)]
struct Args {
    /// Path to the freshly generated Rails application
    path: PathBuf,

    /// Skip the final git init/add/commit
    #[arg(long, env = "SKIP_GIT")]
    skip_git: bool,

    /// Local template asset directory (skips cloning)
    #[arg(long, env = "RAILSTART_TEMPLATE_DIR", value_name = "DIR")]
    template_dir: Option<PathBuf>,

    /// Template repository to clone when no local dir is given
    #[arg(long, env = "RAILSTART_TEMPLATE_URL", value_name = "URL")]
    template_url: Option<String>,

    /// Branch to check out inside the template clone
    #[arg(long, env = "RAILSTART_TEMPLATE_BRANCH", value_name = "BRANCH")]
    template_branch: Option<String>,

    /// Config file path (default: ./railstart.toml if present)
    #[arg(long, env = "RAILSTART_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RAILSTART_LOG")]
    log: Option<String>,

    /// Print the run summary as JSON when the sequence finishes
    #[arg(long)]
    json: bool,

    /// Suppress progress output.
    ///
    /// Errors are still printed to stderr; JSON output is unaffected.
    #[arg(long, short = 'q')]
    quiet: bool,
}

impl Args {
    fn into_options(self) -> (PathBuf, Option<PathBuf>, bool, ScaffoldOptions) {
        let mut options = ScaffoldOptions {
            skip_git: self.skip_git,
            template_dir: self.template_dir,
            template_branch: self.template_branch,
            quiet: self.quiet,
            ..Default::default()
        };
        if let Some(url) = self.template_url {
            options.template_url = url;
        }
        (self.path, self.config, self.json, options)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Init once — must happen before any tracing calls.
    let log_level = args.log.as_deref().unwrap_or("info").to_owned();
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .compact()
        .init();

    let (path, config_path, json, mut options) = args.into_options();

    let config_path = config_path.unwrap_or_else(|| PathBuf::from("railstart.toml"));
    ConfigFile::load(&config_path).apply(&mut options);

    let project_root = path
        .canonicalize()
        .with_context(|| format!("target skeleton not found: {}", path.display()))?;
    if !project_root.is_dir() {
        anyhow::bail!("target is not a directory: {}", project_root.display());
    }

    let mut ctx = ScaffoldContext::new(project_root, options, Arc::new(SystemRunner));

    match runner::run(&mut ctx).await {
        Ok(status) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&runner::summary(&ctx, status))?);
            } else {
                print_banner(&ctx);
            }
            std::process::exit(status.exit_code());
        }
        Err(e) => {
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&runner::summary(&ctx, RunStatus::Failure))?
                );
            }
            eprintln!("railstart: {e}");
            std::process::exit(RunStatus::Failure.exit_code());
        }
    }
}

fn print_banner(ctx: &ScaffoldContext) {
    ctx.say("");
    ctx.say(format!("{} successfully created!", ctx.app_name));
    ctx.say("");
    ctx.say("To get started with your new app:");
    ctx.say(format!("  cd {}", ctx.app_name));
    ctx.say("");
    ctx.say("  # Update config/database.yml with your database credentials");
    ctx.say("");
    ctx.say("  rails db:create db:migrate");
    ctx.say("  rails g madmin:install # Generate admin dashboards");
    ctx.say("  gem install foreman");
    ctx.say("  foreman start # Run Rails, sidekiq, and webpack-dev-server");
}
