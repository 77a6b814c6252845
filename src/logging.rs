//! Log setup
//!
//! Logs go to stderr so command results on stdout stay machine-readable.
//! `RUST_LOG` overrides the level picked from `-v`.

use is_terminal::IsTerminal;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub fn init(verbose: u8, quiet: bool, json: bool) {
    if quiet {
        return;
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_for(verbose)));

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(std::io::stderr().is_terminal())
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

fn filter_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn,droid=info",
        1 => "info,droid=debug",
        2 => "debug,droid=trace",
        _ => "trace",
    }
}
