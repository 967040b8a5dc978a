//! TriplyDB Retry Policy and Error Classification
//!
//! リトライポリシーとエラー分類

pub const INITIAL_RETRY_DELAY_MS: u64 = 1000;
pub const MAX_RETRY_DELAY_MS: u64 = 32000;

/// インポートのリトライポリシー
///
/// 既定は `max_retries = 0`（フェイルファスト）。リトライは
/// 一時的と分類されたエラーにのみ適用される。
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_retries: u32,
}

impl RetryPolicy {
    pub fn new(max_retries: u32) -> Self {
        Self { max_retries }
    }

    /// フェイルファスト（リトライなし）
    pub fn fail_fast() -> Self {
        Self { max_retries: 0 }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::fail_fast()
    }
}

/// Calculate retry delay with exponential backoff
pub fn calculate_retry_delay(retry_count: u32) -> u64 {
    std::cmp::min(
        INITIAL_RETRY_DELAY_MS * (1 << (retry_count - 1)),
        MAX_RETRY_DELAY_MS,
    )
}

/// Convert error chain to string including all causes
pub fn error_chain_to_string(e: &anyhow::Error) -> String {
    let mut messages = Vec::new();
    for cause in e.chain() {
        messages.push(cause.to_string());
    }
    messages.join(" | ")
}

/// Check if an error is transient (worth retrying with the same client)
///
/// 認証失敗やデータセット不在は含めない（リトライしても回復しない）。
pub fn is_retryable_error(error_msg: &str) -> bool {
    error_msg.contains("Broken pipe")
        || error_msg.contains("broken pipe")
        || error_msg.contains("Connection reset")
        || error_msg.contains("connection reset")
        || error_msg.contains("Connection refused")
        || error_msg.contains("connection refused")
        || error_msg.contains("connection error")
        || error_msg.contains("unexpected end of file")
        || error_msg.contains("500")
        || error_msg.contains("502")
        || error_msg.contains("503")
        || error_msg.contains("429")
        || error_msg.contains("rate")
        || error_msg.contains("timeout")
        || error_msg.contains("Timeout")
}
