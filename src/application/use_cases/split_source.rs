//! # Split Source Use Case
//!
//! ソース分割ユースケース

use std::path::Path;
use std::sync::Arc;
use anyhow::Result;

use crate::domain::entities::split_plan::{SplitPlan, SplitSummary};
use crate::domain::repositories::shard_splitter::ShardSplitter;

/// ソース分割ユースケース
///
/// 変換済みのTurtle/N-Triplesソースを、アップロード候補の命名規則に
/// 従った番号付きgzipシャードへ分割する
pub struct SplitSourceUseCase<S: ShardSplitter> {
    splitter: Arc<S>,
}

impl<S: ShardSplitter> SplitSourceUseCase<S> {
    /// 新しいユースケースを作成
    pub fn new(splitter: Arc<S>) -> Self {
        Self { splitter }
    }

    /// ソースを分割する
    ///
    /// # Errors
    ///
    /// 入出力に失敗した場合にエラーを返す
    pub async fn execute(&self, input: &Path, plan: &SplitPlan) -> Result<SplitSummary> {
        self.splitter.split(input, plan).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::path::PathBuf;

    struct MockShardSplitter;

    #[async_trait]
    impl ShardSplitter for MockShardSplitter {
        async fn split(&self, _input: &Path, plan: &SplitPlan) -> Result<SplitSummary> {
            Ok(SplitSummary {
                shards: vec![plan.shard_path(1)],
                statements_written: 10,
                lines_skipped: 2,
            })
        }
    }

    #[tokio::test]
    async fn test_split_source_delegates() {
        let use_case = SplitSourceUseCase::new(Arc::new(MockShardSplitter));
        let plan = SplitPlan::new("imdb_shard_", "/out", 100, None);

        let summary = use_case
            .execute(&PathBuf::from("/in/imdb_transformed.ttl"), &plan)
            .await
            .unwrap();

        assert_eq!(summary.shards, vec![PathBuf::from("/out/imdb_shard_0001.nt.gz")]);
        assert_eq!(summary.statements_written, 10);
        assert_eq!(summary.lines_skipped, 2);
    }
}
