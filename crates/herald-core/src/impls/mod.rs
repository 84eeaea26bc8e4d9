//! Impls - ports の実装（テスト・開発用）
//!
//! # 含まれる実装
//! - **RecordingSink**: 重複定義の通知をメモリに溜める
//!
//! 本番用の `TracingSink` は port と同じ場所（`ports::diagnostic_sink`）にある。

pub mod recording_sink;

pub use self::recording_sink::RecordingSink;
