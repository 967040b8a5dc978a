//! TriplyDB API Models
//!
//! APIレスポンスのserdeモデル

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `GET /me` のレスポンス
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// アカウント名（データセットURLの所有者セグメント）
    pub account_name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// `GET /datasets/{account}/{dataset}` のレスポンス
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// データセット内の文（statement）数
    #[serde(default)]
    pub statements: Option<u64>,
}

/// `POST /datasets/{account}/{dataset}/jobs` のレスポンス
///
/// インポートはサーバ側でジョブとして処理される。このツールは
/// ジョブの受理のみを確認し、完了はポーリングしない。
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportJob {
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
