//! HTTP Dataset Repository Implementation
//!
//! DatasetRepositoryのTriplyDB API実装

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::adapter::triply::client::TriplyApi;
use crate::domain::entities::dataset_ref::DatasetRef;
use crate::domain::repositories::dataset_repository::DatasetRepository;

/// TriplyDB APIベースのデータセットリポジトリ
pub struct HttpDatasetRepository {
    api: Arc<dyn TriplyApi>,
}

impl HttpDatasetRepository {
    /// 新しいリポジトリを作成
    pub fn new(api: Arc<dyn TriplyApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl DatasetRepository for HttpDatasetRepository {
    async fn resolve(&self, dataset: &str) -> Result<DatasetRef> {
        // トークンの持ち主のアカウントを先に解決する
        let account = self.api.get_account().await?;

        // 既存データセットのみ。作成へのフォールバックは行わない。
        let found = self.api.get_dataset(&account.account_name, dataset).await?;

        info!(
            "resolved dataset {}/{}",
            account.account_name, found.name
        );

        Ok(DatasetRef::new(account.account_name, found.name))
    }
}
