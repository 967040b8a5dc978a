//! # Domain Layer
//!
//! このモジュールはビジネスの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - 外部依存を持たない（Rust標準ライブラリと最小限の依存のみ）
//! - HTTP APIやファイル形式の詳細について何も知らない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（ShardFile, DatasetRefなど）
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（シャード名フィルタ等のビジネスルール）
//! - **error**: エラー分類（UploadError）

pub mod entities;
pub mod error;
pub mod repositories;
pub mod services;
