// SPDX-License-Identifier: MIT
//! File payloads: Procfiles, app/config/lib overlays, database config,
//! README onboarding section, and Cucumber features.

use crate::context::ScaffoldContext;
use crate::error::ScaffoldError;
use crate::ops::assets::{copy_dir, copy_file, render_file};
use crate::ops::text::{add_route, insert_into_file, Position};

/// Onboarding section inserted into the skeleton's README.
const README_SECTION: &str = "
## To get started with your new app

- cd {{app_name}}
- Update config/database.yml with your database credentials
- rails db:create db:migrate
- rails g madmin:install # Generate admin dashboards
- gem install foreman
- foreman start # Run Rails, sidekiq, and webpack-dev-server

### Running your app

To run your app, use `foreman start`. Foreman will run `Procfile.dev` via
`foreman start -f Procfile.dev` as configured by the `.foreman` file and will
launch the development processes `rails server`, `sidekiq`, and
`webpack-dev-server` processes. You can also run them in separate terminals
manually if you prefer. A separate `Procfile` is generated for deploying to
production on Heroku.

### Authenticate with social networks

We use the encrypted Rails Credentials for app_id and app_secrets when it
comes to omniauth authentication. Edit them as so:

```
EDITOR=vim rails credentials:edit
```

Make sure your file follow this structure:

```yml
secret_key_base: [your-key]
development:
  github:
    app_id: something
    app_secret: something
    options:
      scope: 'user:email'
      whatever: true
production:
  github:
    app_id: something
    app_secret: something
    options:
      scope: 'user:email'
      whatever: true
```

With the environment, the service and the app_id/app_secret. If this is done
correctly, you should see login links for the services you have added to the
encrypted credentials using `EDITOR=vim rails credentials:edit`

### Testing

The app is set up for BDD using cucumber. Just run `cucumber` to be walked
through the process.

### Cleaning up

```bash
rails db:drop
spring stop
cd ..
rm -rf {{app_name}}
```";

pub fn copy_templates(ctx: &ScaffoldContext) -> Result<(), ScaffoldError> {
    let assets = ctx.template_root()?;
    let root = &ctx.project_root;

    copy_file(&assets, root, "Procfile")?;
    copy_file(&assets, root, "Procfile.dev")?;
    copy_file(&assets, root, ".foreman")?;

    copy_dir(&assets, root, "app")?;
    copy_dir(&assets, root, "config")?;
    copy_dir(&assets, root, "lib")?;

    add_route(root, "get '/terms', to: 'home#terms'")?;
    add_route(root, "get '/privacy', to: 'home#privacy'")
}

/// Swap the skeleton's database config for the Postgres template.
pub fn configure_database(ctx: &ScaffoldContext) -> Result<(), ScaffoldError> {
    let existing = ctx.path("config/database.yml");
    if existing.exists() {
        std::fs::remove_file(&existing)?;
    }
    let upcase = ctx.app_name.to_uppercase();
    render_file(
        &ctx.template_root()?,
        &ctx.project_root,
        "database.yml",
        "config/database.yml",
        &[
            ("app_name", ctx.app_name.as_str()),
            ("app_name_upcase", upcase.as_str()),
        ],
    )
}

pub fn update_readme(ctx: &ScaffoldContext) -> Result<(), ScaffoldError> {
    let section = README_SECTION.replace("{{app_name}}", &ctx.app_name);
    insert_into_file(
        &ctx.path("README.md"),
        &format!("\n{}", section.trim_start_matches('\n')),
        Position::After,
        "# README",
    )
}

pub fn copy_features(ctx: &ScaffoldContext) -> Result<(), ScaffoldError> {
    copy_dir(&ctx.template_root()?, &ctx.project_root, "features")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScaffoldOptions;
    use crate::exec::{CommandOutput, CommandRunner};
    use crate::template_source::TemplateSource;
    use async_trait::async_trait;
    use std::path::Path;
    use std::sync::Arc;
    use tempfile::TempDir;

    struct NoopRunner;

    #[async_trait]
    impl CommandRunner for NoopRunner {
        async fn run(&self, _argv: &[&str], _cwd: &Path) -> Result<CommandOutput, ScaffoldError> {
            Ok(CommandOutput {
                code: 0,
                stdout: String::new(),
                stderr: String::new(),
            })
        }
    }

    fn context(project: &TempDir, assets: &TempDir) -> ScaffoldContext {
        let mut ctx = ScaffoldContext::new(
            project.path().to_path_buf(),
            ScaffoldOptions {
                quiet: true,
                ..Default::default()
            },
            Arc::new(NoopRunner),
        );
        ctx.template_source = Some(TemplateSource::Local(assets.path().to_path_buf()));
        ctx
    }

    #[test]
    fn readme_section_lands_immediately_after_heading() {
        let project = TempDir::new().unwrap();
        let assets = TempDir::new().unwrap();
        std::fs::write(
            project.path().join("README.md"),
            "# README\n\nThis README would normally document...\n",
        )
        .unwrap();

        let ctx = context(&project, &assets);
        update_readme(&ctx).unwrap();

        let readme = std::fs::read_to_string(project.path().join("README.md")).unwrap();
        assert!(readme.starts_with("# README\n## To get started with your new app\n"));
        assert!(readme.contains(&format!("- cd {}\n", ctx.app_name)));
        assert!(readme.ends_with("This README would normally document...\n"));
    }

    #[test]
    fn readme_without_heading_fails_untouched() {
        let project = TempDir::new().unwrap();
        let assets = TempDir::new().unwrap();
        std::fs::write(project.path().join("README.md"), "no heading here\n").unwrap();

        let err = update_readme(&context(&project, &assets)).unwrap_err();
        assert!(matches!(err, ScaffoldError::AnchorNotFound { .. }));
        assert_eq!(
            std::fs::read_to_string(project.path().join("README.md")).unwrap(),
            "no heading here\n"
        );
    }

    #[test]
    fn database_config_is_replaced_with_rendered_template() {
        let project = TempDir::new().unwrap();
        let assets = TempDir::new().unwrap();
        std::fs::create_dir_all(project.path().join("config")).unwrap();
        std::fs::write(project.path().join("config/database.yml"), "adapter: sqlite3\n").unwrap();
        std::fs::write(
            assets.path().join("database.yml"),
            "default: &default\n  adapter: postgresql\ndevelopment:\n  database: {{app_name}}_development\n",
        )
        .unwrap();

        let ctx = context(&project, &assets);
        configure_database(&ctx).unwrap();

        let database =
            std::fs::read_to_string(project.path().join("config/database.yml")).unwrap();
        assert!(database.contains("adapter: postgresql"));
        assert!(database.contains(&format!("database: {}_development", ctx.app_name)));
    }
}
