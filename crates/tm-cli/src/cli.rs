use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tmstore",
    about = "Inspect trust metadata the way an in-memory repository serves it",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file with store settings (max_download_size, location)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show checksum, consistent name and version of metadata files
    Inspect(InspectArgs),
    /// Load a metadata directory and list every name it is served under
    List(ListArgs),
    /// Load a metadata directory and print the blob stored under a name
    Get(GetArgs),
}

#[derive(Args)]
pub struct InspectArgs {
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

#[derive(Args)]
pub struct ListArgs {
    pub dir: PathBuf,
    /// Also print consistent names
    #[arg(long)]
    pub consistent: bool,
}

#[derive(Args)]
pub struct GetArgs {
    pub dir: PathBuf,
    pub name: String,
    /// Read at most this many bytes (default: the store's download maximum)
    #[arg(long)]
    pub size: Option<u64>,
    /// Fetch the copy of NAME pinned to this SHA-256 checksum (hex)
    #[arg(long)]
    pub sha256: Option<String>,
}
