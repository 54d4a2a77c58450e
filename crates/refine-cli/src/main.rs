//! Refine CLI - drive an OpenRefine server from the shell.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use commands::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = Context::from_cli(&cli);

    let result = match cli.command {
        Commands::Projects => commands::projects::run(&ctx),

        Commands::Create { name, file } => commands::create::run(&ctx, name, file),

        Commands::Info => commands::info::run(&ctx),

        Commands::Call { command, params } => commands::call::run(&ctx, command, params),

        Commands::Apply { operations } => commands::apply::run(&ctx, operations),

        Commands::Export {
            format,
            output,
            options,
        } => commands::export::run(&ctx, format, output, options),

        Commands::Facets { columns } => commands::facets::run(&ctx, columns),

        Commands::Link { columns } => commands::link::run(&ctx, columns),

        Commands::Delete => commands::delete::run(&ctx),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "refine=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
