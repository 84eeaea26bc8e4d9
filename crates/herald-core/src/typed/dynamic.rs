//! DynDescriptor - object-safe な descriptor の抽象化
//!
//! # 学習ポイント
//! - `PayloadDescriptor<T>` と `NoPayloadDescriptor` は別の型
//! - 型を消して `Vec<Box<dyn DynDescriptor>>` にまとめると、
//!   受信した値をまとめて分類できる

use serde_json::Value;

use super::descriptor::PayloadDescriptor;
use super::no_payload::NoPayloadDescriptor;
use crate::domain::{EventName, Mismatch};

/// DynDescriptor は payload 型を消した descriptor
///
/// # Object Safety
/// - ジェネリックなメソッドを持たない
/// - `create` は型に依存するので含めない
pub trait DynDescriptor: Send + Sync {
    fn event(&self) -> &EventName;

    fn inspect(&self, candidate: &Value) -> Result<(), Mismatch>;

    fn check(&self, candidate: &Value) -> bool {
        self.inspect(candidate).is_ok()
    }
}

impl<T> DynDescriptor for PayloadDescriptor<T> {
    fn event(&self) -> &EventName {
        PayloadDescriptor::event(self)
    }

    fn inspect(&self, candidate: &Value) -> Result<(), Mismatch> {
        PayloadDescriptor::inspect(self, candidate)
    }
}

impl DynDescriptor for NoPayloadDescriptor {
    fn event(&self) -> &EventName {
        NoPayloadDescriptor::event(self)
    }

    fn inspect(&self, candidate: &Value) -> Result<(), Mismatch> {
        NoPayloadDescriptor::inspect(self, candidate)
    }
}

/// 最初に一致した descriptor の event 名を返す。
/// 一致しなければ各 descriptor の不一致理由を返す。
pub fn classify<'a>(
    descriptors: &'a [Box<dyn DynDescriptor>],
    candidate: &Value,
) -> Result<&'a EventName, Vec<Mismatch>> {
    let mut reasons = Vec::with_capacity(descriptors.len());
    for d in descriptors {
        match d.inspect(candidate) {
            Ok(()) => return Ok(d.event()),
            Err(reason) => reasons.push(reason),
        }
    }
    Err(reasons)
}
