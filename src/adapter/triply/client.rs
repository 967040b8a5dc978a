//! TriplyDB Client Abstractions
//!
//! クライアントの抽象化と実装

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;

#[cfg(test)]
use mockall::automock;

use std::sync::Arc;

use super::models::{Account, Dataset, ImportJob};
use crate::adapter::config::Credential;
use crate::domain::error::UploadError;

/// TriplyDB APIのデフォルトベースURL
pub const DEFAULT_API_URL: &str = "https://api.triplydb.com";

/// Trait for TriplyDB API operations
/// This enables mocking in tests while using the real client in production
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TriplyApi: Send + Sync {
    /// Resolve the account that owns the token (`GET /me`)
    async fn get_account(&self) -> Result<Account>;

    /// Look up an existing dataset under an account
    async fn get_dataset(&self, account: &str, dataset: &str) -> Result<Dataset>;

    /// Import a single file into a dataset as an upload job
    async fn import_file(
        &self,
        account: &str,
        dataset: &str,
        file_name: &str,
        contents: Vec<u8>,
    ) -> Result<ImportJob>;
}

/// Real TriplyDB client over the HTTP API
///
/// ベアラートークンで認証する。トークンのローカル検証は行わず、
/// サーバの応答をそのままエラー分類へ写像する。
pub struct TriplyClient {
    http: reqwest::Client,
    api_url: String,
    token: String,
}

impl TriplyClient {
    /// 新しいクライアントを作成
    ///
    /// `api_url` の末尾スラッシュは取り除く。
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            api_url,
            token: token.into(),
        }
    }
}

#[async_trait]
impl TriplyApi for TriplyClient {
    async fn get_account(&self) -> Result<Account> {
        let url = format!("{}/me", self.api_url);
        let resp = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .context("account lookup request failed")?;

        match resp.status() {
            s if s.is_success() => resp
                .json::<Account>()
                .await
                .context("invalid account response"),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(UploadError::Authentication(
                format!("server returned {}", resp.status()),
            )
            .into()),
            s => Err(anyhow!("account lookup failed: server returned {}", s)),
        }
    }

    async fn get_dataset(&self, account: &str, dataset: &str) -> Result<Dataset> {
        let url = format!("{}/datasets/{}/{}", self.api_url, account, dataset);
        let resp = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .context("dataset lookup request failed")?;

        match resp.status() {
            s if s.is_success() => resp
                .json::<Dataset>()
                .await
                .context("invalid dataset response"),
            StatusCode::NOT_FOUND => {
                Err(UploadError::DatasetNotFound(format!("{}/{}", account, dataset)).into())
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(UploadError::Authentication(
                format!("server returned {}", resp.status()),
            )
            .into()),
            s => Err(anyhow!("dataset lookup failed: server returned {}", s)),
        }
    }

    async fn import_file(
        &self,
        account: &str,
        dataset: &str,
        file_name: &str,
        contents: Vec<u8>,
    ) -> Result<ImportJob> {
        let url = format!("{}/datasets/{}/{}/jobs", self.api_url, account, dataset);

        let part = Part::bytes(contents)
            .file_name(file_name.to_string())
            .mime_str("application/gzip")
            .context("invalid mime type for upload part")?;
        let form = Form::new().part("file", part);

        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .multipart(form)
            .send()
            .await
            .with_context(|| format!("import request failed for {}", file_name))?;

        let status = resp.status();
        if status.is_success() {
            resp.json::<ImportJob>()
                .await
                .context("invalid import job response")
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(UploadError::Import {
                file: file_name.to_string(),
                reason: format!("server returned {}: {}", status, body.trim()),
            }
            .into())
        }
    }
}

/// Factory for creating TriplyDB clients
///
/// ワークフローが実クライアントの構築に直接依存しないための
/// 注入シーム。テストではモッククライアントを返す実装を挿す。
#[async_trait]
pub trait TriplyClientFactory: Send + Sync {
    async fn create_client(&self) -> Result<Arc<dyn TriplyApi>>;
}

/// Production implementation of TriplyClientFactory
pub struct RealClientFactory {
    api_url: String,
    credential: Credential,
}

impl RealClientFactory {
    pub fn new(api_url: String, credential: Credential) -> Self {
        Self {
            api_url,
            credential,
        }
    }
}

#[async_trait]
impl TriplyClientFactory for RealClientFactory {
    async fn create_client(&self) -> Result<Arc<dyn TriplyApi>> {
        Ok(Arc::new(TriplyClient::new(
            self.api_url.clone(),
            self.credential.token(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = TriplyClient::new("https://api.triplydb.com/", "t0k3n");
        assert_eq!(client.api_url, "https://api.triplydb.com");
    }

    #[tokio::test]
    async fn test_real_factory_creates_client() {
        let factory = RealClientFactory::new(
            "https://api.triplydb.com".to_string(),
            Credential::from_token("t0k3n"),
        );
        assert!(factory.create_client().await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_api_resolves_account() {
        let mut mock = MockTriplyApi::new();
        mock.expect_get_account().returning(|| {
            Ok(Account {
                account_name: "alice".to_string(),
                email: None,
            })
        });

        let account = mock.get_account().await.unwrap();
        assert_eq!(account.account_name, "alice");
    }
}
