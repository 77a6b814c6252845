//! Droid CLI - keep remote hosts supplied with an up-to-date droid binary
//!
//! Usage: droid <COMMAND>
//!
//! Commands:
//!   sync    Copy the artifact to hosts whose copy is missing or stale
//!   check   Report stale hosts without copying
//!   digest  Print the SHA-1 digest of a file
//!   hosts   List configured hosts

mod cli;
mod commands;
mod logging;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use commands::sync::SyncArgs;
use commands::Workspace;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet, cli.json);

    match run(cli.command, cli.config.as_deref(), cli.json) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": true,
                    "message": format!("{e:#}"),
                });
                println!("{}", serde_json::to_string(&error_json).unwrap_or_default());
            } else {
                eprintln!("Error: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, config: Option<&std::path::Path>, json: bool) -> Result<bool> {
    match command {
        Commands::Digest { path } => {
            commands::digest::cmd_digest(&path, json)?;
            Ok(true)
        }
        Commands::Hosts => {
            let ws = Workspace::load(config, json)?;
            commands::hosts::cmd_hosts(&ws, json)?;
            Ok(true)
        }
        Commands::Sync {
            artifact,
            hosts,
            retries,
            retry_delay,
        } => {
            let ws = Workspace::load(config, json)?;
            let args = SyncArgs {
                artifact,
                hosts,
                retries,
                retry_delay,
            };
            commands::sync::cmd_sync(&ws, args, json)
        }
        Commands::Check { artifact, hosts } => {
            let ws = Workspace::load(config, json)?;
            commands::check::cmd_check(&ws, artifact, &hosts, json)
        }
    }
}
