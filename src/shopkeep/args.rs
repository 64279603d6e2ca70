use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shopkeep")]
#[command(version)]
#[command(about = "Terminal retail inventory and ordering tool", long_about = None)]
pub struct Cli {
    /// Directory holding the data files (defaults to the platform data dir,
    /// or $SHOPKEEP_DATA_DIR when set)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}
