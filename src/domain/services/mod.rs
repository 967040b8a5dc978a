//! # Domain Services
//!
//! Domain Service（ビジネスルール）
//!
//! - **shard_filter**: 候補ファイル名のパターン判定
//! - **statement_filter**: RDF文として書き出す行の判定

pub mod shard_filter;
pub mod statement_filter;
