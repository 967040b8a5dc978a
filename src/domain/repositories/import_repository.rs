//! # Import Repository Trait
//!
//! シャードのリモートインポートを抽象化

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::dataset_ref::DatasetRef;
use crate::domain::entities::shard_file::ShardFile;

/// インポートリポジトリ
///
/// 単一シャードのリモートインポートを担当するリポジトリ。
/// 呼び出し側は厳密に逐次実行する（同時に複数のインポートを
/// 走らせない）。
#[async_trait]
pub trait ImportRepository: Send + Sync {
    /// シャードを1つデータセットにインポートする
    ///
    /// # Arguments
    ///
    /// * `dataset` - インポート先のデータセット参照
    /// * `shard` - インポートするシャードファイル
    ///
    /// # Errors
    ///
    /// リモートがファイルを拒否した場合（`UploadError::Import`）、
    /// またはファイルが読み取れない場合にエラーを返す
    async fn import_shard(&self, dataset: &DatasetRef, shard: &ShardFile) -> Result<()>;
}
