use clap::Parser;
use std::path::PathBuf;

pub fn parse() -> Cli {
    Cli::parse()
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Turn console debugging information on
    #[arg(short, long)]
    pub console: bool,

    /// Log to a file
    #[arg(short, long, value_name = "FILE", default_value = "senstation.log")]
    pub log_file: PathBuf,

    /// Verbosity, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file (overrides the CONFIG_FILE variable)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Read the sensors once, print the reading and exit
    #[arg(short, long)]
    pub dry_run: bool,
}
