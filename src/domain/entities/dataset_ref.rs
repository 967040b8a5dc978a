//! # DatasetRef Value Object
//!
//! 解決済みデータセット参照のバリューオブジェクト

/// 解決済みのリモートデータセット参照
///
/// アカウント名とデータセット名の組。このツールはデータセットを
/// 作成も削除もしない（既存である前提で、インポートにより
/// リモート側でのみ変更される）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetRef {
    account: String,
    dataset: String,
}

impl DatasetRef {
    /// 新しいデータセット参照を作成
    pub fn new(account: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            dataset: dataset.into(),
        }
    }

    /// アカウント名を返す
    pub fn account(&self) -> &str {
        &self.account
    }

    /// データセット名を返す
    pub fn dataset(&self) -> &str {
        &self.dataset
    }
}

impl std::fmt::Display for DatasetRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.account, self.dataset)
    }
}
