//! Errors - エラー型と不一致の分類
//!
//! `create` / `check` は total なので、ここにあるのは
//! - `Mismatch`: `check` が false になった理由（`inspect` 用）
//! - `HeraldError`: JSON 変換・設定読み込み・CLI の I/O
//!   だけ。

use thiserror::Error;

use super::event_name::EventName;

/// candidate が descriptor に一致しなかった理由
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Mismatch {
    #[error("candidate is absent")]
    Absent,

    #[error("candidate has no event")]
    MissingEvent,

    #[error("expected event '{expected}', found '{found}'")]
    WrongEvent { expected: EventName, found: String },

    #[error("event '{0}' has no payload")]
    MissingPayload(EventName),

    #[error("payload of event '{0}' rejected by predicate")]
    PredicateRejected(EventName),
}

#[derive(Debug, Error)]
pub enum HeraldError {
    #[error("json encode: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("invalid config: {0}")]
    Config(#[source] serde_json::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
