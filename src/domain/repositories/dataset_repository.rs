//! # Dataset Repository Trait
//!
//! リモートデータセットの解決を抽象化

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::dataset_ref::DatasetRef;

/// データセットリポジトリ
///
/// 呼び出し元アカウントの解決と、その配下のデータセット参照の
/// 取得を担当するリポジトリ
#[async_trait]
pub trait DatasetRepository: Send + Sync {
    /// アカウントを解決し、名前でデータセットを引く
    ///
    /// # Arguments
    ///
    /// * `dataset` - データセット名
    ///
    /// # Returns
    ///
    /// 解決済みのデータセット参照
    ///
    /// # Errors
    ///
    /// 認証に失敗した場合（`UploadError::Authentication`）、または
    /// データセットが存在しない場合（`UploadError::DatasetNotFound`）に
    /// エラーを返す。作成へのフォールバックは行わない。
    async fn resolve(&self, dataset: &str) -> Result<DatasetRef>;
}
