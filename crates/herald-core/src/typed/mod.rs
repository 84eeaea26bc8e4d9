//! Typed - 型付き event descriptor API
//!
//! producer は descriptor の `create` で event 名を付け、
//! consumer は `check` / `narrow` で unknown な値を検査する。
//!
//! # 二層構造
//! - **表層（Typed）**: `PayloadDescriptor<T>`, `NoPayloadDescriptor`, `Event` trait
//! - **内部（Dyn）**: `DynDescriptor` trait - object-safe, type erasure

pub mod event;
pub mod predicate;
pub mod descriptor;
pub mod no_payload;
pub mod dynamic;
pub mod registry;

// 主要な trait/型 を再エクスポート
pub use self::event::Event;
pub use self::predicate::Predicate;
pub use self::descriptor::PayloadDescriptor;
pub use self::no_payload::NoPayloadDescriptor;
pub use self::dynamic::{DynDescriptor, classify};
pub use self::registry::EventRegistry;
