//! # SplitPlan / SplitSummary
//!
//! シャード分割のパラメータと結果

use std::path::PathBuf;

/// 1シャードあたりのデフォルト行数（おおよそ0.5〜2GB/ファイル）
pub const DEFAULT_LINES_PER_SHARD: u64 = 5_000_000;

/// シャードファイル名のデフォルトプレフィックス
pub const DEFAULT_SHARD_PREFIX: &str = "imdb_shard_";

/// シャード分割のパラメータ
#[derive(Debug, Clone)]
pub struct SplitPlan {
    /// 出力ファイル名のプレフィックス（`<prefix><NNNN>.nt.gz`）
    pub prefix: String,
    /// 出力先ディレクトリ
    pub out_dir: PathBuf,
    /// 1シャードあたりの行数
    pub lines_per_shard: u64,
    /// 書き出す文（statement）総数の上限。Noneなら無制限
    pub limit: Option<u64>,
}

impl SplitPlan {
    /// 新しい分割パラメータを作成
    pub fn new(
        prefix: impl Into<String>,
        out_dir: impl Into<PathBuf>,
        lines_per_shard: u64,
        limit: Option<u64>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            out_dir: out_dir.into(),
            lines_per_shard,
            limit,
        }
    }

    /// インデックスからシャードファイル名を組み立てる
    ///
    /// インデックスは1始まり、4桁ゼロ埋め。
    pub fn shard_name(&self, index: u32) -> String {
        format!("{}{:04}.nt.gz", self.prefix, index)
    }

    /// インデックスから出力パスを組み立てる
    pub fn shard_path(&self, index: u32) -> PathBuf {
        self.out_dir.join(self.shard_name(index))
    }
}

/// シャード分割の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSummary {
    /// 書き出されたシャードファイルのパス
    pub shards: Vec<PathBuf>,
    /// 書き出された文の総数
    pub statements_written: u64,
    /// スキップされた行数（空行と@prefix行）
    pub lines_skipped: u64,
}
