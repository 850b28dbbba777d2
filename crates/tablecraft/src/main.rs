use clap::Parser;
use tablecraft::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli::init_logging(cli.verbose);
    cli::run(cli)
}
