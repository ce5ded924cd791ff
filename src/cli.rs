//! CLI entry point: flags only, no subcommands — this binary has
//! exactly one mode of operation (run the protocol loop against
//! stdin/stdout). Grounded on `tools/butterfly-route/src/main.rs`'s
//! `clap::Parser` derive style.

use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "hexroute")]
#[command(about = "Interactive shortest-path server over a hexagonal grid", long_about = None)]
pub struct Cli {
    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Increase log verbosity (-v for info, -vv for debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

/// Initializes structured logging. Mirrors `step9/mod.rs`'s
/// `init_tracing`: `RUST_LOG` wins when set, otherwise `-v`/`-vv` picks
/// the default filter, and `--log-format` selects the formatter.
pub fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    match cli.log_format {
        LogFormat::Json => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        LogFormat::Text => {
            fmt().with_env_filter(filter).with_target(false).init();
        }
    }
}
