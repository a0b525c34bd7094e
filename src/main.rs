//! routable - route names and URLs for domain records.

use anyhow::Result;
use clap::{ColorChoice, Parser};

use routable::cli::{self, Cli, Commands, common::Session};
use routable::config::{RoutableConfig, find_config_file};
use routable::{debug, logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = load_config(&cli)?;
    let session = Session::new(&config);

    match &cli.command {
        Commands::Route { ty, action } => {
            cli::route::run_route(&session.store, ty, action.as_deref());
        }
        Commands::Url { args } => cli::url::run_url(&session, args)?,
        Commands::List => cli::list::run_list(&session.table),
        Commands::Check => {
            if !cli::check::run_check(&session.table, &session.generator(), &session.store) {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Load the config file. `route` works without one, using derived names only.
fn load_config(cli: &Cli) -> Result<RoutableConfig> {
    if matches!(cli.command, Commands::Route { .. }) && find_config_file(&cli.config).is_none() {
        debug!("config"; "{} not found, using defaults", cli.config.display());
        return Ok(RoutableConfig::default());
    }
    Ok(RoutableConfig::load(&cli.config)?)
}
