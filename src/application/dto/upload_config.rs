//! # Upload Configuration DTO
//!
//! アップロード設定のData Transfer Object

use std::path::PathBuf;

/// アップロード設定
///
/// アップロード実行に必要な設定情報。環境変数やCLIの解釈は
/// Driver層で済ませ、ここには確定した値だけが入る。
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// 対象データセット名
    pub dataset: String,
    /// 候補ファイルを走査するディレクトリ
    pub dir: PathBuf,
    /// シャード名のパターン（両端アンカー付き正規表現）
    pub shard_pattern: String,
    /// リトライ上限（0でフェイルファスト、現行のデフォルト）
    pub max_retries: u32,
}

impl UploadConfig {
    /// 新しいアップロード設定を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use shardsync::application::dto::upload_config::UploadConfig;
    ///
    /// let config = UploadConfig::new(
    ///     "imdb".to_string(),
    ///     ".".into(),
    ///     r"^imdb_shard_.*\.nt\.gz$".to_string(),
    ///     0, // フェイルファスト
    /// );
    ///
    /// assert_eq!(config.dataset, "imdb");
    /// assert_eq!(config.max_retries, 0);
    /// ```
    pub fn new(dataset: String, dir: PathBuf, shard_pattern: String, max_retries: u32) -> Self {
        Self {
            dataset,
            dir,
            shard_pattern,
            max_retries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_config_new() {
        let config = UploadConfig::new(
            "imdb".to_string(),
            "/data".into(),
            r"^imdb_shard_.*\.nt\.gz$".to_string(),
            2,
        );

        assert_eq!(config.dataset, "imdb");
        assert_eq!(config.dir, PathBuf::from("/data"));
        assert_eq!(config.shard_pattern, r"^imdb_shard_.*\.nt\.gz$");
        assert_eq!(config.max_retries, 2);
    }

    #[test]
    fn test_upload_config_clone() {
        let config = UploadConfig::new(
            "imdb".to_string(),
            ".".into(),
            r"^imdb_shard_.*\.nt\.gz$".to_string(),
            0,
        );

        let cloned = config.clone();

        assert_eq!(cloned.dataset, config.dataset);
        assert_eq!(cloned.max_retries, config.max_retries);
    }
}
