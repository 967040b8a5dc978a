//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::{Parser, Subcommand};

use crate::domain::entities::split_plan::{DEFAULT_LINES_PER_SHARD, DEFAULT_SHARD_PREFIX};

/// RDFシャードをTriplyDBデータセットにアップロードするCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "shardsync")]
#[command(about = "Upload RDF shard files to a TriplyDB dataset", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Upload matching shard files from a directory to the dataset
    Upload(UploadArgs),
    /// Split a Turtle/N-Triples source into numbered gzip shards
    Split(SplitArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct UploadArgs {
    /// Dataset name under the caller's account
    #[arg(long, default_value = "imdb")]
    pub dataset: String,

    /// Directory to scan for shard files
    #[arg(long, default_value = ".")]
    pub dir: String,

    /// Dry run mode - don't actually upload
    #[arg(long)]
    pub dry_run: bool,

    /// Max retries per import for transient errors (0 = fail fast)
    #[arg(long, default_value_t = 0)]
    pub max_retries: u32,

    /// Config file path (JSON; defaults apply when omitted)
    #[arg(short, long)]
    pub config: Option<String>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct SplitArgs {
    /// Input file (.nt/.ttl, optionally gzipped)
    pub input: String,

    /// Output file name prefix
    #[arg(long, default_value = DEFAULT_SHARD_PREFIX)]
    pub prefix: String,

    /// Output directory
    #[arg(long, default_value = ".")]
    pub out_dir: String,

    /// Statements per shard
    #[arg(long, default_value_t = DEFAULT_LINES_PER_SHARD)]
    pub lines_per_shard: u64,

    /// Stop after writing this many statements in total
    #[arg(long)]
    pub limit: Option<u64>,
}
