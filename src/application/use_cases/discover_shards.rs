//! # Discover Shards Use Case
//!
//! 候補シャード発見ユースケース

use std::path::Path;
use std::sync::Arc;
use anyhow::Result;

use crate::domain::entities::shard_file::ShardFile;
use crate::domain::repositories::shard_repository::ShardRepository;

/// 候補シャード発見ユースケース
///
/// 指定されたディレクトリからパターンに一致するシャードを発見する
pub struct DiscoverShardsUseCase<R: ShardRepository> {
    shard_repository: Arc<R>,
}

impl<R: ShardRepository> DiscoverShardsUseCase<R> {
    /// 新しいユースケースを作成
    pub fn new(shard_repository: Arc<R>) -> Self {
        Self { shard_repository }
    }

    /// 候補シャードを発見する
    ///
    /// # Arguments
    ///
    /// * `dir` - 走査対象のディレクトリ
    ///
    /// # Errors
    ///
    /// ディレクトリの読み取りに失敗した場合にエラーを返す
    pub async fn execute(&self, dir: &Path) -> Result<Vec<ShardFile>> {
        self.shard_repository.discover_shards(dir).await
    }
}
