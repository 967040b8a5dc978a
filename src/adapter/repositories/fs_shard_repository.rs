//! Filesystem Shard Repository Implementation
//!
//! ShardRepositoryのファイルシステム実装

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::domain::entities::shard_file::ShardFile;
use crate::domain::error::UploadError;
use crate::domain::repositories::shard_repository::ShardRepository;
use crate::domain::services::shard_filter::ShardFilter;

/// ファイルシステムベースのシャードリポジトリ
///
/// ディレクトリ直下のみを走査する（サブディレクトリには降りない）。
pub struct FsShardRepository {
    filter: ShardFilter,
}

impl FsShardRepository {
    /// 新しいリポジトリを作成
    pub fn new(filter: ShardFilter) -> Self {
        Self { filter }
    }

    /// シャードを発見する（内部実装）
    fn discover_shards_internal(filter: &ShardFilter, dir: &Path) -> Result<Vec<ShardFile>> {
        if !dir.is_dir() {
            return Err(UploadError::Filesystem(format!(
                "not a readable directory: {}",
                dir.display()
            ))
            .into());
        }

        let mut shards = Vec::new();

        // 列挙順はOS依存のまま。ソートはしない。
        // 列挙エラー（権限不足など）は握りつぶさずに分類して返す。
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| {
                UploadError::Filesystem(format!("cannot list {}: {}", dir.display(), e))
            })?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if filter.matches(name) {
                    shards.push(ShardFile::new(name, path.to_path_buf()));
                }
            }
        }

        info!("Found {} shard files in {}", shards.len(), dir.display());

        Ok(shards)
    }
}

#[async_trait]
impl ShardRepository for FsShardRepository {
    async fn discover_shards(&self, dir: &Path) -> Result<Vec<ShardFile>> {
        let filter = self.filter.clone();
        let dir: PathBuf = dir.to_path_buf();
        tokio::task::spawn_blocking(move || Self::discover_shards_internal(&filter, &dir))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}
