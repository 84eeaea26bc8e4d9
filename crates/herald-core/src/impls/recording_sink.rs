//! RecordingSink - 重複定義をメモリに記録する sink
//!
//! # 学習ポイント
//! - `&self` の trait メソッドから Mutex で内部可変性
//! - Arc<RecordingSink> を registry とテストで共有する

use crate::domain::EventName;
use crate::ports::DiagnosticSink;
use std::sync::{Mutex, PoisonError};

/// RecordingSink は受け取った通知を順番に保持する
///
/// # 使用例
/// ```ignore
/// let sink = Arc::new(RecordingSink::new());
/// let registry = EventRegistry::new().with_sink(sink.clone());
/// registry.define_no_payload("x");
/// registry.define_no_payload("x");
/// assert_eq!(sink.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RecordingSink {
    reports: Mutex<Vec<(EventName, usize)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 記録済みの (event, 定義回数) を古い順に返す
    pub fn reports(&self) -> Vec<(EventName, usize)> {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for RecordingSink {
    fn duplicate_definition(&self, event: &EventName, definitions: usize) {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((event.clone(), definitions));
    }
}
