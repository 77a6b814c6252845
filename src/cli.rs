use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Droid - keep remote hosts supplied with an up-to-date droid binary
#[derive(Parser, Debug)]
#[command(name = "droid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ./droid.toml, then ~/.config/droid/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy the artifact to every host whose copy is missing or stale
    Sync {
        /// Local artifact (overrides `artifact` in the config)
        #[arg(short, long, value_name = "PATH")]
        artifact: Option<PathBuf>,

        /// Only these hosts (repeatable; default: all configured hosts)
        #[arg(long = "host", value_name = "NAME")]
        hosts: Vec<String>,

        /// Extra attempts per host after an upload or transport failure
        #[arg(long, default_value_t = 0)]
        retries: u32,

        /// Seconds to wait between attempts
        #[arg(long, default_value_t = 2, value_name = "SECS")]
        retry_delay: u64,
    },

    /// Report which hosts hold a stale copy, without copying
    Check {
        /// Local artifact (overrides `artifact` in the config)
        #[arg(short, long, value_name = "PATH")]
        artifact: Option<PathBuf>,

        /// Only these hosts (repeatable; default: all configured hosts)
        #[arg(long = "host", value_name = "NAME")]
        hosts: Vec<String>,
    },

    /// Print the SHA-1 digest of a file in sha1sum format
    Digest {
        /// File to digest
        path: PathBuf,
    },

    /// List configured hosts
    Hosts,
}
