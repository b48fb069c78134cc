use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "gridshell-cmd",
    version,
    about = "Inspect GridShell device command specifications"
)]
pub struct Args {
    /// Command specification, e.g. "show ver;reload action_map={'[yes/no]':'yes'}"
    pub spec: Option<String>,

    /// Read the specification from a file instead
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// List registered resource schemas, one per line, then exit
    #[arg(long)]
    pub list_families: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}
