//! EventRegistry - descriptor の発行と重複定義の検出
//!
//! # 学習ポイント
//! - グローバル状態ではなく、呼び出し側が所有する registry
//! - `&self` + Mutex で複数スレッドから define できる
//! - 重複は warning のみ。定義そのものは止めない

use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use super::descriptor::PayloadDescriptor;
use super::event::Event;
use super::no_payload::NoPayloadDescriptor;
use super::predicate::Predicate;
use crate::config::RegistryConfig;
use crate::domain::EventName;
use crate::ports::{DiagnosticSink, TracingSink};

/// EventRegistry は event 名ごとの定義回数を持ち、descriptor を作る
///
/// # 使用例
/// ```ignore
/// let registry = EventRegistry::new();
/// let login = registry.define_with::<serde_json::Value, _>("login", |p| p.get("userId").is_some());
/// let logout = registry.define_no_payload("logout");
///
/// let msg = login.create(json!({ "userId": 7 })).to_value()?;
/// assert!(login.check(&msg));
/// ```
///
/// # 内部実装
/// - HashMap<EventName, usize> で定義回数を管理（削除はしない）
/// - 回数の更新は lock 内で行うので、同時に define しても warning は欠けない
/// - sink の呼び出しは lock の外
pub struct EventRegistry {
    seen: Mutex<HashMap<EventName, usize>>,
    config: RegistryConfig,
    sink: Arc<dyn DiagnosticSink>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self {
            seen: Mutex::new(HashMap::new()),
            config: RegistryConfig::default(),
            sink: Arc::new(TracingSink),
        }
    }

    pub fn with_config(mut self, config: RegistryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// payload 付き event を定義
    ///
    /// `predicate` が None なら payload は存在チェックのみ。
    pub fn define<T>(
        &self,
        event: impl Into<EventName>,
        predicate: Option<Predicate>,
    ) -> PayloadDescriptor<T> {
        let event = event.into();
        self.record(&event);
        PayloadDescriptor::new(event, predicate)
    }

    /// クロージャを predicate にして定義
    pub fn define_with<T, F>(
        &self,
        event: impl Into<EventName>,
        predicate: F,
    ) -> PayloadDescriptor<T>
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.define(event, Some(Predicate::new(predicate)))
    }

    /// `Event` 実装から定義。payload の serde の形を predicate にする。
    pub fn define_event<E: Event>(&self) -> PayloadDescriptor<E::Payload> {
        self.define(E::NAME, Some(Predicate::shape::<E::Payload>()))
    }

    pub fn define_no_payload(&self, event: impl Into<EventName>) -> NoPayloadDescriptor {
        let event = event.into();
        self.record(&event);
        NoPayloadDescriptor::new(event)
    }

    pub fn is_defined(&self, event: &str) -> bool {
        self.definition_count(event) > 0
    }

    pub fn definition_count(&self, event: &str) -> usize {
        self.lock()
            .get(&EventName::new(event))
            .copied()
            .unwrap_or(0)
    }

    /// 定義済みの event 名（ソート済み）
    pub fn defined_events(&self) -> Vec<EventName> {
        let mut names: Vec<EventName> = self.lock().keys().cloned().collect();
        names.sort();
        names
    }

    /// これまでの重複定義の合計（= 出した、または config で抑止した warning の数）
    pub fn duplicate_count(&self) -> usize {
        self.lock().values().map(|n| n.saturating_sub(1)).sum()
    }

    fn record(&self, event: &EventName) {
        let definitions = {
            let mut seen = self.lock();
            let count = seen.entry(event.clone()).or_insert(0);
            *count += 1;
            *count
        };

        tracing::debug!(name = %event, definitions, "event defined");

        if definitions > 1 && self.config.warn_on_duplicate {
            self.sink.duplicate_definition(event, definitions);
        }
    }

    // map は回数しか持たないので poison されても中身はそのまま使える
    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<EventName, usize>> {
        self.seen.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for EventRegistry {
    fn default() -> Self {
        Self::new()
    }
}
