use anyhow::Result;
use clap::Parser;
use outgo::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
