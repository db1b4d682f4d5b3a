mod cli;
mod clock;
mod config;
mod data;
mod logging;
mod source;
mod ui;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.global.verbose);
    if let Err(e) = cli::run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
