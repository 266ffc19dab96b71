pub mod parse;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "pathfinder")]
#[command(about = "Converts an nmap xml report into a vulnerability report.")]
pub struct CommandLine {
    /// Enable debug logging
    #[arg(short = 'D', long = "debug")]
    pub debug: bool,
    /// Nmap xml report to parse
    #[arg(short = 'f', long = "filename", value_name = "FILE")]
    pub filename: PathBuf,
    /// Write the yaml report here instead of logging it
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
