//! Shardsync - RDF Shard Uploader
//!
//! `imdb_shard_*.nt.gz` をTriplyDBのデータセットにアップロード

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use shardsync::adapter::config::{Config, Credential};
use shardsync::adapter::repositories::gzip_shard_splitter::GzipShardSplitter;
use shardsync::application::dto::upload_config::UploadConfig;
use shardsync::application::use_cases::split_source::SplitSourceUseCase;
use shardsync::domain::entities::split_plan::SplitPlan;
use shardsync::driver::cli::{SplitArgs, UploadArgs};
use shardsync::driver::{Args, Command, ShardUploadWorkflow};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Command::Upload(upload) => run_upload(upload).await,
        Command::Split(split) => run_split(split).await,
    }
}

async fn run_upload(args: UploadArgs) -> Result<()> {
    // 設定ファイルは省略可。省略時はデフォルト値を使う。
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    // トークンはファイル列挙より先に環境から読む。
    // ドライランでは資格情報なしでも動く。
    let credential = if args.dry_run {
        Credential::from_env().ok()
    } else {
        Some(Credential::from_env()?)
    };

    let dir = PathBuf::from(shellexpand::tilde(&args.dir).as_ref());
    let upload = UploadConfig::new(args.dataset, dir, config.shard_pattern, args.max_retries);

    let workflow = ShardUploadWorkflow::new(upload, config.api_url, credential);

    workflow.execute(args.dry_run).await
}

async fn run_split(args: SplitArgs) -> Result<()> {
    let input = PathBuf::from(shellexpand::tilde(&args.input).as_ref());
    let out_dir = PathBuf::from(shellexpand::tilde(&args.out_dir).as_ref());

    let plan = SplitPlan::new(args.prefix, out_dir, args.lines_per_shard, args.limit);

    let use_case = SplitSourceUseCase::new(Arc::new(GzipShardSplitter::new()));
    let summary = use_case.execute(&input, &plan).await?;

    println!(
        "✓ Wrote {} statements into {} shards ({} lines skipped)",
        summary.statements_written,
        summary.shards.len(),
        summary.lines_skipped
    );

    Ok(())
}
