use clap::Parser;

use txn_insights::app::bootstrap;
use txn_insights::cli::Cli;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(err) = bootstrap::run(&cli.data_dir) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
