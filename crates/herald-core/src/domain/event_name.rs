use serde::{Deserialize, Serialize};
use std::fmt;

/// EventName はメッセージ種別を識別する文字列キー
///
/// 一意性は advisory のみ。同じ名前を再定義しても止めない（warning が出るだけ）。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventName(String);

impl EventName {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for EventName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for EventName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for EventName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for EventName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_plain_string() {
        let name = EventName::new("user.login");
        assert_eq!(serde_json::to_value(&name).unwrap(), serde_json::json!("user.login"));
    }

    #[test]
    fn compares_with_str() {
        let name: EventName = "login".into();
        assert_eq!(name, "login");
        assert_eq!(name.to_string(), "login");
    }
}
