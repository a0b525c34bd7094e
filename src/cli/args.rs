//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::CONFIG_FILE;

/// Route names and URLs for the records in routable.toml
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: routable.toml)
    #[arg(short = 'C', long, global = true, default_value = CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output (shows how each parameter was resolved)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the route name a record of TYPE uses
    #[command(visible_alias = "r")]
    Route {
        /// Record type (e.g. `User`, `app::BlogPost`)
        #[arg(value_name = "TYPE")]
        ty: String,

        /// Route action (default: show)
        action: Option<String>,
    },

    /// Print the URL of a record
    #[command(visible_alias = "u")]
    Url {
        #[command(flatten)]
        args: UrlArgs,
    },

    /// List registered routes and their parameters
    #[command(visible_alias = "l")]
    List,

    /// Try every record against every route of its group
    #[command(visible_alias = "c")]
    Check,
}

/// Url command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct UrlArgs {
    /// Record reference, `Type:id` (e.g. `Thread:7`)
    #[arg(value_name = "RECORD")]
    pub record: String,

    /// Route action (default: show)
    pub action: Option<String>,

    /// Use this route instead of the record's own `base.action`
    #[arg(short, long, value_name = "NAME")]
    pub route: Option<String>,

    /// Named parameter; VALUE is a record reference or a literal route key
    #[arg(short = 'p', long = "param", value_name = "NAME=VALUE", value_parser = parse_named_param)]
    pub params: Vec<(String, String)>,

    /// Positional record matched to parameters by type
    #[arg(short = 'a', long = "arg", value_name = "RECORD")]
    pub args: Vec<String>,

    /// Print resolved parameters and the URL as JSON
    #[arg(short, long)]
    pub json: bool,
}

fn parse_named_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got `{raw}`")),
    }
}
