//! Command-line argument parsing

use clap::Parser;

/// Interactively pick a package manager and framework, then run its official scaffolding tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "scaffold-picker")]
pub struct Args {
    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Launch the scaffolding command through the system shell
    #[arg(long)]
    pub shell: bool,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
