//! CLI entry point for the hexagonal lattice simulator

use clap::Parser;
use hexlattice::io::cli::{Cli, CommandRunner, init_logging};

fn main() -> hexlattice::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let runner = CommandRunner::new(cli);
    runner.run(&mut std::io::stdout().lock())
}
