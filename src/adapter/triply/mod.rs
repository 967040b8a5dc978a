//! TriplyDB HTTP API Integration
//!
//! TriplyDB APIクライアントとリトライポリシー

pub mod client;
pub mod models;
pub mod retry;
