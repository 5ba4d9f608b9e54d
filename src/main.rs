use anyhow::Result;
use clap::Parser;

mod cli_bin;

use cli_bin::args::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    cli_bin::commands::run(&cli)
}
