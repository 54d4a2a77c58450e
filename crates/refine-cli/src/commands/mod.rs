//! CLI command implementations.

pub mod apply;
pub mod call;
pub mod create;
pub mod delete;
pub mod export;
pub mod facets;
pub mod info;
pub mod link;
pub mod projects;

use std::time::Duration;

use refine::{RefineClient, RefineConfig};

use crate::cli::Cli;

/// Settings shared by every command.
pub struct Context {
    pub config: RefineConfig,
    pub project: Option<String>,
    pub json: bool,
    pub verbose: bool,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Self {
        let timeout = (cli.timeout > 0).then(|| Duration::from_secs(cli.timeout));
        let config = RefineConfig::default()
            .with_server(cli.server.clone())
            .with_timeout(timeout)
            .with_throws_exceptions(!cli.no_throw);

        Self {
            config,
            project: cli.project.clone(),
            json: cli.json,
            verbose: cli.verbose,
        }
    }

    /// Bind to the project given with `--project`.
    pub fn open(&self) -> Result<RefineClient, Box<dyn std::error::Error>> {
        let project = self.project.as_deref().ok_or(
            "No project selected. Pass --project <ID> or set OPENREFINE_PROJECT.",
        )?;
        tracing::debug!(project, server = %self.config.server, "opening project");
        Ok(RefineClient::open(self.config.clone(), project)?)
    }
}
