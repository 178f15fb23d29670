//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use clap::Parser;
use dfs_lineup::{
    cli::{Commands, DfsLineup},
    commands::{
        optimize::{handle_optimize, OptimizeParams},
        rules::handle_rules,
    },
    Result,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = DfsLineup::parse();

    // Logs go to stderr so `--json` output stays parseable.
    let default_level = if app.command.verbose() {
        "warn,dfs_lineup=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match app.command {
        Commands::Optimize {
            league,
            salary_cap,
            input,
            json,
            verbose: _,
        } => {
            handle_optimize(OptimizeParams {
                league,
                salary_cap,
                input,
                as_json: json,
            })
            .await?
        }

        Commands::Rules { league, json } => handle_rules(league, json)?,
    }

    Ok(())
}
