//! # Resolve Dataset Use Case
//!
//! データセット解決ユースケース

use std::sync::Arc;
use anyhow::Result;

use crate::domain::entities::dataset_ref::DatasetRef;
use crate::domain::repositories::dataset_repository::DatasetRepository;

/// データセット解決ユースケース
///
/// 呼び出し元アカウントを解決し、その配下の既存データセットを
/// 名前で引く。候補ファイルが0件でも必ず一度実行される。
pub struct ResolveDatasetUseCase<R: DatasetRepository> {
    dataset_repository: Arc<R>,
}

impl<R: DatasetRepository> ResolveDatasetUseCase<R> {
    /// 新しいユースケースを作成
    pub fn new(dataset_repository: Arc<R>) -> Self {
        Self { dataset_repository }
    }

    /// データセットを解決する
    ///
    /// # Errors
    ///
    /// 認証失敗またはデータセット不在でエラーを返す
    pub async fn execute(&self, dataset: &str) -> Result<DatasetRef> {
        self.dataset_repository.resolve(dataset).await
    }
}
