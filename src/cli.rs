use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "autofilm")]
#[command(author, version, about = "Mirror an AList library as .strm pointer files")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, env = "AUTOFILM_CONFIG", default_value = "config.toml")]
    pub config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
