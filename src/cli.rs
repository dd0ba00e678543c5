// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: The tool is prompt-driven; flags only tweak config path and logging.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scmssh")]
#[command(about = "SSH to SteelConnect appliances via SCM tunnel or direct uplink")]
#[command(version)]
pub struct Cli {
    /// Path to a config file (default: scmssh.yml in the working directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
