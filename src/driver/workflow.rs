//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::Result;
use log::info;

use std::sync::Arc;

use crate::adapter::config::Credential;
use crate::adapter::repositories::fs_shard_repository::FsShardRepository;
use crate::adapter::repositories::http_dataset_repository::HttpDatasetRepository;
use crate::adapter::repositories::http_import_repository::HttpImportRepository;
use crate::adapter::triply::client::{RealClientFactory, TriplyClientFactory};
use crate::adapter::triply::retry::RetryPolicy;
use crate::application::dto::upload_config::UploadConfig;
use crate::application::use_cases::discover_shards::DiscoverShardsUseCase;
use crate::application::use_cases::import_shards::ImportShardsUseCase;
use crate::application::use_cases::resolve_dataset::ResolveDatasetUseCase;
use crate::domain::error::UploadError;
use crate::domain::services::shard_filter::ShardFilter;

/// Shard Upload Workflow
///
/// 設定と資格情報は構築時に注入される（環境に触れるのはmainのみ）。
/// 実行結果は `Result` で返し、終了コードへの変換は呼び出し側が行う。
pub struct ShardUploadWorkflow {
    upload: UploadConfig,
    factory: Option<Arc<dyn TriplyClientFactory>>,
}

impl ShardUploadWorkflow {
    /// Create a new workflow instance with injected configuration
    ///
    /// `credential` はドライランではNoneでよい。実アップロードで
    /// Noneの場合は認証エラーになる。
    pub fn new(upload: UploadConfig, api_url: String, credential: Option<Credential>) -> Self {
        let factory = credential.map(|c| {
            Arc::new(RealClientFactory::new(api_url.clone(), c)) as Arc<dyn TriplyClientFactory>
        });
        Self { upload, factory }
    }

    /// Create a workflow with a custom client factory
    ///
    /// テストでモッククライアントを差し込むための構築口
    pub fn with_factory(upload: UploadConfig, factory: Arc<dyn TriplyClientFactory>) -> Self {
        Self {
            upload,
            factory: Some(factory),
        }
    }

    fn build_discover(&self) -> Result<DiscoverShardsUseCase<FsShardRepository>> {
        let filter = ShardFilter::new(&self.upload.shard_pattern)?;
        Ok(DiscoverShardsUseCase::new(Arc::new(FsShardRepository::new(
            filter,
        ))))
    }

    /// Execute the upload workflow
    pub async fn execute(&self, dry_run: bool) -> Result<()> {
        info!("Starting shard uploader...");
        info!("Dry run: {}", dry_run);

        println!("✓ Using configuration:");
        println!("  Dataset: {}", self.upload.dataset);
        println!("  Directory: {}", self.upload.dir.display());
        println!("  Pattern: {}", self.upload.shard_pattern);
        println!("  Max retries: {}", self.upload.max_retries);

        let batch_id = uuid::Uuid::new_v4().to_string();
        info!("upload batch id: {}", batch_id);

        let discover = self.build_discover()?;

        if dry_run {
            let shards = discover.execute(&self.upload.dir).await?;
            println!(
                "✓ Found {} shard files in {}",
                shards.len(),
                self.upload.dir.display()
            );
            println!("✓ Dry-run mode (not actually uploading)");
            println!("  Would upload {} files:", shards.len());
            for shard in &shards {
                println!("    - {}", shard.name());
            }
            return Ok(());
        }

        // セッション確立とデータセット解決はファイル列挙より先。
        // 候補が0件でも必ず実行される。
        let factory = self.factory.as_ref().ok_or_else(|| {
            UploadError::Authentication("no credential provided".to_string())
        })?;
        let api = factory.create_client().await?;
        println!("✓ Created TriplyDB client");

        let resolve = ResolveDatasetUseCase::new(Arc::new(HttpDatasetRepository::new(api.clone())));
        let dataset = resolve.execute(&self.upload.dataset).await?;
        println!("✓ Resolved dataset {}", dataset);

        let shards = discover.execute(&self.upload.dir).await?;
        println!(
            "✓ Found {} shard files in {}",
            shards.len(),
            self.upload.dir.display()
        );

        if shards.is_empty() {
            println!("No shard files to upload. Exiting.");
            return Ok(());
        }

        let import_repo = Arc::new(HttpImportRepository::new(
            api,
            RetryPolicy::new(self.upload.max_retries),
        ));
        let summary = ImportShardsUseCase::new(import_repo)
            .execute(&dataset, &shards)
            .await?;

        println!("✓ Uploaded {} shard files", summary.imported.len());
        println!("✓ Upload complete!");

        Ok(())
    }
}
