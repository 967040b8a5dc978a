//! Adapter Layer
//!
//! 外部システム（TriplyDB HTTP API, ファイルシステム）との統合

pub mod config;
pub mod repositories;
pub mod triply;
