//! HTTP Import Repository Implementation
//!
//! ImportRepositoryのTriplyDB API実装（リトライポリシー付き）

use anyhow::Result;
use async_trait::async_trait;
use log::warn;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

use crate::adapter::triply::client::TriplyApi;
use crate::adapter::triply::retry::{
    calculate_retry_delay, error_chain_to_string, is_retryable_error, RetryPolicy,
};
use crate::domain::entities::dataset_ref::DatasetRef;
use crate::domain::entities::shard_file::ShardFile;
use crate::domain::error::UploadError;
use crate::domain::repositories::import_repository::ImportRepository;

/// TriplyDB APIベースのインポートリポジトリ
///
/// リトライは一時的エラーにのみ適用される。既定のポリシーは
/// `max_retries = 0` で、現行のフェイルファスト挙動を保つ。
pub struct HttpImportRepository {
    api: Arc<dyn TriplyApi>,
    policy: RetryPolicy,
}

impl HttpImportRepository {
    /// 新しいリポジトリを作成
    pub fn new(api: Arc<dyn TriplyApi>, policy: RetryPolicy) -> Self {
        Self { api, policy }
    }
}

#[async_trait]
impl ImportRepository for HttpImportRepository {
    async fn import_shard(&self, dataset: &DatasetRef, shard: &ShardFile) -> Result<()> {
        // ファイルは1回だけ読む
        let contents = tokio::fs::read(shard.path()).await.map_err(|e| {
            UploadError::Filesystem(format!("cannot read {}: {}", shard.path().display(), e))
        })?;

        let mut retry_count: u32 = 0;

        loop {
            let result = self
                .api
                .import_file(
                    dataset.account(),
                    dataset.dataset(),
                    shard.name(),
                    contents.clone(),
                )
                .await;

            match result {
                Ok(_job) => return Ok(()),
                Err(e) => {
                    let chain = error_chain_to_string(&e);
                    if retry_count < self.policy.max_retries && is_retryable_error(&chain) {
                        retry_count += 1;
                        let delay = calculate_retry_delay(retry_count);
                        warn!(
                            "import of {} failed ({}), retry {}/{} in {}ms",
                            shard.name(),
                            chain,
                            retry_count,
                            self.policy.max_retries,
                            delay
                        );
                        sleep(Duration::from_millis(delay)).await;
                        continue;
                    }
                    return Err(e);
                }
            }
        }
    }
}
