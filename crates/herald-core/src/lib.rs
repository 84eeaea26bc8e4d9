//! herald-core
//!
//! Typed event descriptors: a producer tags a value with an event name,
//! a consumer checks that an untyped value is that event.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（EventName, TaggedPayload, TaggedNoPayload, errors）
//! - **typed**: descriptor API（EventRegistry, PayloadDescriptor, NoPayloadDescriptor, Predicate, Event）
//! - **ports**: 抽象化レイヤー（DiagnosticSink）
//! - **impls**: 実装（RecordingSink などテスト用）
//! - **config**: RegistryConfig

pub mod domain;
pub mod typed;
pub mod ports;
pub mod impls;
pub mod config;

pub use crate::config::RegistryConfig;
pub use crate::domain::{EventName, HeraldError, Mismatch, TaggedNoPayload, TaggedPayload};
pub use crate::typed::{
    DynDescriptor, Event, EventRegistry, NoPayloadDescriptor, PayloadDescriptor, Predicate,
};
