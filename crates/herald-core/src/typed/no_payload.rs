//! NoPayloadDescriptor - payload を持たない event の create / check

use serde_json::Value;

use crate::domain::tagged::match_event;
use crate::domain::{EventName, Mismatch, TaggedNoPayload};

/// NoPayloadDescriptor は event 名だけを束ねる
///
/// `check` は event 名しか見ない。payload が付いていても無視する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoPayloadDescriptor {
    event: EventName,
}

impl NoPayloadDescriptor {
    pub(crate) fn new(event: EventName) -> Self {
        Self { event }
    }

    pub fn event(&self) -> &EventName {
        &self.event
    }

    pub fn create(&self) -> TaggedNoPayload {
        TaggedNoPayload::new(self.event.clone())
    }

    pub fn check(&self, candidate: &Value) -> bool {
        self.inspect(candidate).is_ok()
    }

    pub fn check_opt(&self, candidate: Option<&Value>) -> bool {
        candidate.is_some_and(|c| self.check(c))
    }

    pub fn inspect(&self, candidate: &Value) -> Result<(), Mismatch> {
        match_event(candidate, &self.event)
    }
}
