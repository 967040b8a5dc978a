//! Configuration and Credential Loading
//!
//! 設定ファイルと環境変数からの資格情報の読み込み

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

use crate::domain::error::UploadError;
use crate::domain::services::shard_filter::DEFAULT_SHARD_PATTERN;

use super::triply::client::DEFAULT_API_URL;

/// トークンを運ぶ環境変数名
pub const TOKEN_ENV_VAR: &str = "TOKEN";

/// ベアラートークン
///
/// プロセス起動時に環境から一度だけ読み、プロセスの生存期間中
/// 保持する。永続化はしない。ローカルでの検証も行わない。
#[derive(Clone)]
pub struct Credential {
    token: String,
}

impl Credential {
    /// `TOKEN` 環境変数からトークンを読む
    ///
    /// # Errors
    ///
    /// 変数が未設定の場合 `UploadError::Authentication` を返す。
    /// ファイルシステムに触れる前に失敗する。
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(TOKEN_ENV_VAR)
            .map_err(|_| UploadError::Authentication(format!("{} is not set", TOKEN_ENV_VAR)))?;
        Ok(Self { token })
    }

    /// テスト用に明示的なトークンから作成
    pub fn from_token(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// トークン文字列を返す
    pub fn token(&self) -> &str {
        &self.token
    }
}

// トークンがログやエラー出力に漏れないようにする
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(****)")
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_shard_pattern() -> String {
    DEFAULT_SHARD_PATTERN.to_string()
}

/// 設定ファイル（JSON、省略可）の内容
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_shard_pattern")]
    pub shard_pattern: String,
}

impl Config {
    /// 設定ファイルを読み込む
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let content = fs::read_to_string(expanded.as_ref())?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            shard_pattern: default_shard_pattern(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.api_url, "https://api.triplydb.com");
        assert_eq!(config.shard_pattern, r"^imdb_shard_.*\.nt\.gz$");
    }

    #[test]
    fn test_config_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"api_url":"https://triply.example.com"}}"#).unwrap();

        let config = Config::load(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.api_url, "https://triply.example.com");
        // 省略されたフィールドはデフォルトに戻る
        assert_eq!(config.shard_pattern, r"^imdb_shard_.*\.nt\.gz$");
    }

    #[test]
    fn test_config_load_missing_file_is_error() {
        assert!(Config::load("/no/such/config.json").is_err());
    }

    #[test]
    fn test_credential_from_token() {
        let cred = Credential::from_token("t0k3n");
        assert_eq!(cred.token(), "t0k3n");
    }

    #[test]
    fn test_credential_from_env() {
        // 同一テスト内で未設定と設定済みの両方を順に検証する
        // （環境変数は他テストと競合しないようここだけで触る）
        std::env::remove_var(TOKEN_ENV_VAR);
        let err = Credential::from_env().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<UploadError>(),
            Some(UploadError::Authentication(_))
        ));

        std::env::set_var(TOKEN_ENV_VAR, "t0k3n");
        let cred = Credential::from_env().unwrap();
        assert_eq!(cred.token(), "t0k3n");
        std::env::remove_var(TOKEN_ENV_VAR);
    }

    #[test]
    fn test_credential_debug_is_redacted() {
        let cred = Credential::from_token("super-secret");
        let debug = format!("{:?}", cred);
        assert_eq!(debug, "Credential(****)");
        assert!(!debug.contains("super-secret"));
    }
}
