//! # Shard Filter Service
//!
//! 候補ファイル名のパターン判定サービス

use anyhow::{Context, Result};
use regex::Regex;

/// デフォルトのシャード名パターン
///
/// 大文字小文字を区別し、両端アンカー付きで完全一致させる。
pub const DEFAULT_SHARD_PATTERN: &str = r"^imdb_shard_.*\.nt\.gz$";

/// シャード名フィルタ
///
/// ファイル名がアップロード候補の命名規則に一致するかを判定する
#[derive(Clone)]
pub struct ShardFilter {
    pattern: Regex,
}

impl ShardFilter {
    /// パターン文字列からフィルタを作成
    ///
    /// # Errors
    ///
    /// パターンが正規表現として不正な場合にエラーを返す
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .with_context(|| format!("invalid shard pattern: {}", pattern))?;
        Ok(Self { pattern })
    }

    /// デフォルトパターンのフィルタを作成
    pub fn default_pattern() -> Self {
        // 定数パターンは常に有効
        Self {
            pattern: Regex::new(DEFAULT_SHARD_PATTERN).unwrap(),
        }
    }

    /// ファイル名が候補かどうかを判定
    pub fn matches(&self, file_name: &str) -> bool {
        self.pattern.is_match(file_name)
    }
}
