// SPDX-License-Identifier: MIT
//! Shared fixtures: a bare Rails skeleton and a scripted command runner.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::TempDir;

use railstart::config::ScaffoldOptions;
use railstart::context::ScaffoldContext;
use railstart::error::ScaffoldError;
use railstart::exec::{CommandOutput, CommandRunner};

/// Scripted stand-in for the external toolchain.
///
/// Records every argv it receives, simulates the file side effects of
/// the generators later steps depend on, and fails any command whose
/// joined argv starts with a scripted prefix.
#[derive(Default)]
pub struct MockRunner {
    pub calls: Mutex<Vec<String>>,
    failures: Mutex<Vec<(String, i32, String)>>,
}

impl MockRunner {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Make every command starting with `prefix` exit with `code`.
    pub fn fail_on(&self, prefix: &str, code: i32, stderr: &str) {
        self.failures
            .lock()
            .unwrap()
            .push((prefix.to_string(), code, stderr.to_string()));
    }

    pub fn recorded(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// The file side effects of the few generators whose output later
    /// steps edit. Everything else is a successful no-op.
    fn apply_effects(&self, command: &str, cwd: &Path) {
        if command == "bin/rails generate devise:install" {
            write(
                cwd,
                "config/initializers/devise.rb",
                concat!(
                    "Devise.setup do |config|\n",
                    "  # config.secret_key = '8d8aa32b50ef7b4d6b8a8e9d6c41f2ab'\n",
                    "  # ==> Warden configuration\n",
                    "end\n",
                ),
            );
        } else if command.starts_with("bin/rails generate devise User") {
            write(
                cwd,
                "db/migrate/20201001000000_devise_create_users.rb",
                concat!(
                    "class DeviseCreateUsers < ActiveRecord::Migration[6.0]\n",
                    "  def change\n",
                    "    create_table :users do |t|\n",
                    "      t.boolean :admin\n",
                    "    end\n",
                    "  end\n",
                    "end\n",
                ),
            );
            write(
                cwd,
                "app/models/user.rb",
                "class User < ApplicationRecord\n  devise :database_authenticatable, :registerable\nend\n",
            );
            // Devise also registers its routes.
            let routes = cwd.join("config/routes.rb");
            let content = std::fs::read_to_string(&routes).unwrap();
            std::fs::write(
                &routes,
                content.replace(
                    "Rails.application.routes.draw do\n",
                    "Rails.application.routes.draw do\n  devise_for :users\n",
                ),
            )
            .unwrap();
        } else if command == "bin/rails generate friendly_id" {
            write(
                cwd,
                "db/migrate/20201001000010_create_friendly_id_slugs.rb",
                "class CreateFriendlyIdSlugs < ActiveRecord::Migration\nend\n",
            );
        }
    }
}

#[async_trait]
impl CommandRunner for MockRunner {
    async fn run(&self, argv: &[&str], cwd: &Path) -> Result<CommandOutput, ScaffoldError> {
        let command = argv.join(" ");
        self.calls.lock().unwrap().push(command.clone());

        for (prefix, code, stderr) in self.failures.lock().unwrap().iter() {
            if command.starts_with(prefix.as_str()) {
                return Ok(CommandOutput {
                    code: *code,
                    stdout: String::new(),
                    stderr: stderr.clone(),
                });
            }
        }

        self.apply_effects(&command, cwd);
        Ok(CommandOutput {
            code: 0,
            stdout: String::new(),
            stderr: String::new(),
        })
    }
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

/// Lay down the files `rails new` leaves behind that the sequence edits.
pub fn bare_skeleton() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    write(root, "Gemfile", "source 'https://rubygems.org'\ngem 'rails'\n");
    write(
        root,
        "Gemfile.lock",
        "GEM\n  remote: https://rubygems.org/\n  specs:\n    rails (6.0.3)\n",
    );
    write(
        root,
        "README.md",
        "# README\n\nThis README would normally document whatever steps are necessary to get the\napplication up and running.\n",
    );
    write(root, "config/routes.rb", "Rails.application.routes.draw do\nend\n");
    write(
        root,
        "config/application.rb",
        concat!(
            "require_relative 'boot'\n",
            "\n",
            "module Skeleton\n",
            "  class Application < Rails::Application\n",
            "    config.load_defaults 6.0\n",
            "  end\n",
            "end\n",
        ),
    );
    write(
        root,
        "config/environments/development.rb",
        "Rails.application.configure do\n  config.cache_classes = false\nend\n",
    );
    write(root, "config/database.yml", "default: &default\n  adapter: sqlite3\n");
    std::fs::create_dir_all(root.join("db/migrate")).unwrap();

    dir
}

/// Path to this repository's bundled template assets.
pub fn local_templates() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates")
}

pub fn context(skeleton: &TempDir, runner: Arc<MockRunner>, skip_git: bool) -> ScaffoldContext {
    ScaffoldContext::new(
        skeleton.path().to_path_buf(),
        ScaffoldOptions {
            skip_git,
            template_dir: Some(local_templates()),
            quiet: true,
            ..Default::default()
        },
        runner,
    )
}
