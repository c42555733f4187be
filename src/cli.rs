use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "txn-insights")]
#[command(about = "Interactive terminal dashboard over pre-aggregated transaction datasets")]
#[command(version)]
pub struct Cli {
    /// Directory holding the six dataset CSV files.
    #[arg(short, long, default_value = "data")]
    pub data_dir: PathBuf,
}
