//! # Import Shards Use Case
//!
//! シャードインポートユースケース

use std::sync::Arc;
use anyhow::Result;
use log::info;

use crate::domain::entities::dataset_ref::DatasetRef;
use crate::domain::entities::shard_file::ShardFile;
use crate::domain::repositories::import_repository::ImportRepository;

/// インポート結果のサマリー
#[derive(Debug, Clone)]
pub struct ImportSummary {
    /// インポートに成功したファイル名（実行順）
    pub imported: Vec<String>,
}

/// シャードインポートユースケース
///
/// 候補シャードを厳密に逐次インポートする。並列実行はしない。
/// いずれかのシャードで失敗した場合、残りのシャードには一切
/// 手を付けずにエラーを返す（フェイルファスト）。
pub struct ImportShardsUseCase<I: ImportRepository> {
    import_repository: Arc<I>,
}

impl<I: ImportRepository> ImportShardsUseCase<I> {
    /// 新しいユースケースを作成
    pub fn new(import_repository: Arc<I>) -> Self {
        Self { import_repository }
    }

    /// シャードを順番にインポートする
    ///
    /// ファイルごとに開始行と完了行をコンソールに出力する。
    ///
    /// # Arguments
    ///
    /// * `dataset` - インポート先のデータセット参照
    /// * `shards` - 候補シャード（発見時の列挙順のまま）
    ///
    /// # Errors
    ///
    /// 最初に失敗したインポートのエラーをそのまま返す
    pub async fn execute(
        &self,
        dataset: &DatasetRef,
        shards: &[ShardFile],
    ) -> Result<ImportSummary> {
        let mut imported = Vec::with_capacity(shards.len());

        for shard in shards {
            println!("Uploading {} ...", shard.name());
            self.import_repository.import_shard(dataset, shard).await?;
            println!("Done: {}", shard.name());
            info!("imported {} into {}", shard.name(), dataset);
            imported.push(shard.name().to_string());
        }

        Ok(ImportSummary { imported })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::domain::error::UploadError;

    /// 呼び出されたファイル名を記録し、指定した名前で失敗するモック
    struct MockImportRepository {
        calls: Mutex<Vec<String>>,
        fail_on: Option<String>,
    }

    impl MockImportRepository {
        fn new(fail_on: Option<&str>) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_on: fail_on.map(|s| s.to_string()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ImportRepository for MockImportRepository {
        async fn import_shard(&self, _dataset: &DatasetRef, shard: &ShardFile) -> Result<()> {
            self.calls.lock().unwrap().push(shard.name().to_string());
            if self.fail_on.as_deref() == Some(shard.name()) {
                return Err(UploadError::Import {
                    file: shard.name().to_string(),
                    reason: "rejected".to_string(),
                }
                .into());
            }
            Ok(())
        }
    }

    fn shard(name: &str) -> ShardFile {
        ShardFile::new(name, format!("/data/{}", name))
    }

    #[tokio::test]
    async fn test_import_all_shards_in_order() {
        let repo = Arc::new(MockImportRepository::new(None));
        let use_case = ImportShardsUseCase::new(repo.clone());
        let dataset = DatasetRef::new("alice", "imdb");

        let shards = vec![
            shard("imdb_shard_1.nt.gz"),
            shard("imdb_shard_2.nt.gz"),
            shard("imdb_shard_3.nt.gz"),
        ];

        let summary = use_case.execute(&dataset, &shards).await.unwrap();

        assert_eq!(
            summary.imported,
            vec![
                "imdb_shard_1.nt.gz",
                "imdb_shard_2.nt.gz",
                "imdb_shard_3.nt.gz"
            ]
        );
        assert_eq!(repo.calls(), summary.imported);
    }

    #[tokio::test]
    async fn test_import_empty_candidate_set() {
        let repo = Arc::new(MockImportRepository::new(None));
        let use_case = ImportShardsUseCase::new(repo.clone());
        let dataset = DatasetRef::new("alice", "imdb");

        let summary = use_case.execute(&dataset, &[]).await.unwrap();

        assert!(summary.imported.is_empty());
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn test_failure_halts_remaining_imports() {
        // 3件中2件目で失敗: 1件目は1回だけ呼ばれ、3件目は呼ばれない
        let repo = Arc::new(MockImportRepository::new(Some("imdb_shard_2.nt.gz")));
        let use_case = ImportShardsUseCase::new(repo.clone());
        let dataset = DatasetRef::new("alice", "imdb");

        let shards = vec![
            shard("imdb_shard_1.nt.gz"),
            shard("imdb_shard_2.nt.gz"),
            shard("imdb_shard_3.nt.gz"),
        ];

        let err = use_case.execute(&dataset, &shards).await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<UploadError>(),
            Some(UploadError::Import { file, .. }) if file == "imdb_shard_2.nt.gz"
        ));
        assert_eq!(
            repo.calls(),
            vec!["imdb_shard_1.nt.gz", "imdb_shard_2.nt.gz"]
        );
    }
}
