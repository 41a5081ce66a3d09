use anyhow::Result;
use clap::Parser;
use formdeck::cli;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    cli::run(args)
}
