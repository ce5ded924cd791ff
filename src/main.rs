use anyhow::Result;
use clap::Parser;
use std::io::{self, BufWriter};
use std::process::ExitCode;

use hexroute::cli::{init_tracing, Cli};
use hexroute::protocol;
use hexroute::World;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let mut world = World::new();
    let stdin = io::stdin();
    let stdout = BufWriter::new(io::stdout());
    let code = protocol::run(&mut world, stdin.lock(), stdout)?;

    Ok(ExitCode::from(code as u8))
}
