//! Tagged messages - event 名で tag 付けされたレコード
//!
//! `create` が作るのはこの 2 つだけ:
//! - `TaggedPayload<T>`: `{ "event": ..., "payload": ... }`
//! - `TaggedNoPayload`: `{ "event": ... }`

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{HeraldError, Mismatch};
use super::event_name::EventName;

/// event 名 + payload の組
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedPayload<T> {
    pub event: EventName,
    pub payload: T,
}

impl<T> TaggedPayload<T> {
    pub fn new(event: EventName, payload: T) -> Self {
        Self { event, payload }
    }

    pub fn into_payload(self) -> T {
        self.payload
    }
}

impl<T: Serialize> TaggedPayload<T> {
    /// 受信側と同じ "unknown" 表現（JSON value）に変換
    pub fn to_value(&self) -> Result<Value, HeraldError> {
        serde_json::to_value(self).map_err(HeraldError::Encode)
    }
}

/// payload を持たない event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedNoPayload {
    pub event: EventName,
}

impl TaggedNoPayload {
    pub fn new(event: EventName) -> Self {
        Self { event }
    }

    pub fn to_value(&self) -> Result<Value, HeraldError> {
        serde_json::to_value(self).map_err(HeraldError::Encode)
    }
}

/// candidate の `event` が `expected` と一致するか
///
/// `Null` は absent 扱い。object 以外は `event` を持たないものとして扱う。
pub(crate) fn match_event(candidate: &Value, expected: &EventName) -> Result<(), Mismatch> {
    if candidate.is_null() {
        return Err(Mismatch::Absent);
    }
    match candidate.get("event") {
        None | Some(Value::Null) => Err(Mismatch::MissingEvent),
        Some(Value::String(found)) if expected == found.as_str() => Ok(()),
        Some(Value::String(found)) => Err(Mismatch::WrongEvent {
            expected: expected.clone(),
            found: found.clone(),
        }),
        Some(other) => Err(Mismatch::WrongEvent {
            expected: expected.clone(),
            found: other.to_string(),
        }),
    }
}

/// 存在し、かつ null でない payload
pub(crate) fn present_payload(candidate: &Value) -> Option<&Value> {
    candidate.get("payload").filter(|p| !p.is_null())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tagged_payload_uses_event_and_payload_fields() {
        let tagged = TaggedPayload::new(EventName::new("login"), json!({ "userId": 7 }));
        let v = tagged.to_value().unwrap();
        assert_eq!(v, json!({ "event": "login", "payload": { "userId": 7 } }));
        assert_eq!(tagged.into_payload(), json!({ "userId": 7 }));
    }

    #[test]
    fn tagged_no_payload_has_only_event() {
        let v = TaggedNoPayload::new(EventName::new("logout")).to_value().unwrap();
        assert_eq!(v, json!({ "event": "logout" }));
    }

    #[test]
    fn match_event_reports_each_failure() {
        let login = EventName::new("login");
        assert_eq!(match_event(&Value::Null, &login), Err(Mismatch::Absent));
        assert_eq!(match_event(&json!({}), &login), Err(Mismatch::MissingEvent));
        assert_eq!(match_event(&json!(5), &login), Err(Mismatch::MissingEvent));
        assert_eq!(
            match_event(&json!({ "event": 1 }), &login),
            Err(Mismatch::WrongEvent { expected: login.clone(), found: "1".to_string() })
        );
        assert!(match_event(&json!({ "event": "login" }), &login).is_ok());
    }

    #[test]
    fn null_payload_is_not_present() {
        assert!(present_payload(&json!({ "payload": null })).is_none());
        assert!(present_payload(&json!({ "payload": false })).is_some());
    }
}
