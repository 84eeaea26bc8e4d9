//! PayloadDescriptor - payload 付き event の create / check
//!
//! # 学習ポイント
//! - `PhantomData<fn() -> T>`: T を所有しないので Send/Sync は T に左右されない
//! - `check` は total（どんな入力でも panic しない）

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

use super::predicate::Predicate;
use crate::domain::tagged::{match_event, present_payload};
use crate::domain::{EventName, Mismatch, TaggedPayload};

/// PayloadDescriptor は event 名と（任意の）predicate を束ねる
///
/// `EventRegistry::define` から作る。作成後は不変。
pub struct PayloadDescriptor<T> {
    event: EventName,
    predicate: Option<Predicate>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> PayloadDescriptor<T> {
    pub(crate) fn new(event: EventName, predicate: Option<Predicate>) -> Self {
        Self {
            event,
            predicate,
            _marker: PhantomData,
        }
    }

    pub fn event(&self) -> &EventName {
        &self.event
    }

    pub fn has_predicate(&self) -> bool {
        self.predicate.is_some()
    }

    /// payload に event 名を付ける。検証はしない。
    pub fn create(&self, payload: T) -> TaggedPayload<T> {
        TaggedPayload::new(self.event.clone(), payload)
    }

    /// candidate がこの event の payload なら true
    ///
    /// 1. candidate が absent（null）でない
    /// 2. `event` がこの descriptor の event 名と一致
    /// 3. `payload` が存在し null でない
    /// 4. predicate があれば payload に対して true
    pub fn check(&self, candidate: &Value) -> bool {
        self.inspect(candidate).is_ok()
    }

    /// `None` は absent として扱う
    pub fn check_opt(&self, candidate: Option<&Value>) -> bool {
        candidate.is_some_and(|c| self.check(c))
    }

    /// `check` と同じ判定。false の場合はどの条件で落ちたかを返す。
    pub fn inspect(&self, candidate: &Value) -> Result<(), Mismatch> {
        match_event(candidate, &self.event)?;
        let payload =
            present_payload(candidate).ok_or_else(|| Mismatch::MissingPayload(self.event.clone()))?;
        match &self.predicate {
            Some(predicate) if !predicate.test(payload) => {
                Err(Mismatch::PredicateRejected(self.event.clone()))
            }
            _ => Ok(()),
        }
    }
}

impl<T: DeserializeOwned> PayloadDescriptor<T> {
    /// `check` が通り、payload が `T` に deserialize できれば型付きで返す
    pub fn narrow(&self, candidate: &Value) -> Option<TaggedPayload<T>> {
        if !self.check(candidate) {
            return None;
        }
        let payload = present_payload(candidate)?;
        T::deserialize(payload)
            .ok()
            .map(|payload| TaggedPayload::new(self.event.clone(), payload))
    }
}

impl<T> Clone for PayloadDescriptor<T> {
    fn clone(&self) -> Self {
        Self::new(self.event.clone(), self.predicate.clone())
    }
}

impl<T> fmt::Debug for PayloadDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PayloadDescriptor")
            .field("event", &self.event)
            .field("predicate", &self.predicate)
            .finish()
    }
}
