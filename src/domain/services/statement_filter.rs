//! # Statement Filter Service
//!
//! シャードに書き出す行の判定サービス

/// 行をシャードに書き出すべきかを判定
///
/// Turtleの`@prefix`ヘッダ行と空行は文ではないためスキップする。
/// `@prefix`の判定は行頭のみ（インデントされた行は対象外）。
/// それ以外の行はN-Triples文としてそのまま書き出す。
pub fn is_statement_line(line: &str) -> bool {
    !line.trim().is_empty() && !line.starts_with("@prefix")
}
