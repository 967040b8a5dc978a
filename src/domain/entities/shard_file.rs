//! # ShardFile Entity
//!
//! アップロード候補のシャードファイル

use std::path::{Path, PathBuf};

/// アップロード候補のシャードファイル
///
/// 起動時に一度だけディレクトリ走査で発見され、以降は再走査されない。
/// アップロード中に一度読まれるだけで、変更も削除もされない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShardFile {
    /// ファイル名（パターンに一致した名前そのもの）
    name: String,
    /// 絶対パス
    path: PathBuf,
}

impl ShardFile {
    /// 新しいシャードファイルを作成
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// ファイル名を返す
    pub fn name(&self) -> &str {
        &self.name
    }

    /// パスを返す
    pub fn path(&self) -> &Path {
        &self.path
    }
}
