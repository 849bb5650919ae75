use anyhow::Result;
use clap::Parser;
use terminal_rain::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    terminal_rain::run(&cli)
}
