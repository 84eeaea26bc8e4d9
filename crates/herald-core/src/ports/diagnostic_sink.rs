//! DiagnosticSink port - 重複定義の通知先の抽象化
//!
//! # 実装
//! - TracingSink: `tracing::warn!` に流す（デフォルト）
//! - RecordingSink (`impls`): メモリに記録（テスト用）

use crate::domain::EventName;

/// DiagnosticSink は重複定義を受け取る
///
/// `definitions` はその時点での定義回数（2 以上）。
/// 呼び出しは定義 1 回につき最大 1 回。
pub trait DiagnosticSink: Send + Sync {
    fn duplicate_definition(&self, event: &EventName, definitions: usize);
}

/// tracing に warning を出す sink
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn duplicate_definition(&self, event: &EventName, definitions: usize) {
        tracing::warn!(
            name = %event,
            definitions,
            "duplicate event definition: '{}' is already defined",
            event
        );
    }
}
