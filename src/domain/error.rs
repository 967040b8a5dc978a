//! # Upload Error Taxonomy
//!
//! アップロード処理のエラー分類

use thiserror::Error;

/// アップロード処理で発生するエラー
///
/// Adapter層がHTTPステータスやI/Oエラーからこの分類へ変換し、
/// 上位層は `anyhow::Result` でそのまま伝播させる。
/// どの変種もローカルでは回復しない（最上位で報告して終了する）。
#[derive(Debug, Error)]
pub enum UploadError {
    /// トークンが未設定、または認証が拒否された
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// 指定されたデータセットがアカウント配下に存在しない
    #[error("dataset not found: {0}")]
    DatasetNotFound(String),

    /// リモートのインポートが特定のファイルを拒否した
    #[error("import failed for {file}: {reason}")]
    Import { file: String, reason: String },

    /// ディレクトリまたはファイルが読み取れない
    #[error("filesystem error: {0}")]
    Filesystem(String),
}
