//! # Shard Splitter Trait
//!
//! ソースファイルのシャード分割を抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use crate::domain::entities::split_plan::{SplitPlan, SplitSummary};

/// シャード分割
///
/// Turtle/N-Triplesソースを番号付きのgzipシャードへ分割する
#[async_trait]
pub trait ShardSplitter: Send + Sync {
    /// ソースを分割し、書き出したシャードの一覧を返す
    ///
    /// # Arguments
    ///
    /// * `input` - 入力ファイル（`.nt`/`.ttl`または`.gz`）
    /// * `plan` - 分割パラメータ
    ///
    /// # Errors
    ///
    /// 入力が読めない、または出力が書けない場合にエラーを返す
    async fn split(&self, input: &Path, plan: &SplitPlan) -> Result<SplitSummary>;
}
