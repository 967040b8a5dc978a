//! # Shard Repository Trait
//!
//! 候補シャードファイルの発見を抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use crate::domain::entities::shard_file::ShardFile;

/// シャードリポジトリ
///
/// アップロード候補ファイルの発見を担当するリポジトリ
#[async_trait]
pub trait ShardRepository: Send + Sync {
    /// ディレクトリ直下から候補シャードを発見する
    ///
    /// 候補集合は呼び出し時に一度だけ計算される（遅延列挙しない）。
    /// 並び順はファイルシステムの列挙順のままで、ソートは保証しない。
    ///
    /// # Arguments
    ///
    /// * `dir` - 走査対象のディレクトリ
    ///
    /// # Returns
    ///
    /// パターンに一致したシャードファイルのリスト
    ///
    /// # Errors
    ///
    /// ディレクトリが読み取れない場合にエラーを返す
    async fn discover_shards(&self, dir: &Path) -> Result<Vec<ShardFile>>;
}
