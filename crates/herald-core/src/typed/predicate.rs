//! Predicate - payload の形を検査する type guard
//!
//! # 学習ポイント
//! - `Arc<dyn Fn>` でクロージャを共有（descriptor を Clone 可能にする）
//! - `&Value` は serde の Deserializer なので clone せずに `T::deserialize` できる

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Predicate は payload（unknown = JSON value）を受け取って bool を返す
#[derive(Clone)]
pub struct Predicate {
    f: Arc<dyn Fn(&Value) -> bool + Send + Sync>,
}

impl Predicate {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self { f: Arc::new(f) }
    }

    /// payload が `T` として deserialize できれば true
    pub fn shape<T: DeserializeOwned>() -> Self {
        Self::new(|payload| T::deserialize(payload).is_ok())
    }

    /// payload が object で、`field` が null 以外の値を持てば true
    pub fn has_field(field: impl Into<String>) -> Self {
        let field = field.into();
        Self::new(move |payload| payload.get(&field).is_some_and(|v| !v.is_null()))
    }

    pub fn and(self, other: Predicate) -> Self {
        Self::new(move |payload| self.test(payload) && other.test(payload))
    }

    pub fn or(self, other: Predicate) -> Self {
        Self::new(move |payload| self.test(payload) || other.test(payload))
    }

    pub fn not(self) -> Self {
        Self::new(move |payload| !self.test(payload))
    }

    pub fn test(&self, payload: &Value) -> bool {
        (self.f)(payload)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde::Deserialize;
    use serde_json::json;

    #[allow(dead_code)]
    #[derive(Deserialize)]
    struct Login {
        #[serde(rename = "userId")]
        user_id: u64,
    }

    #[rstest]
    #[case(json!({ "userId": 7 }), true)]
    #[case(json!({ "userId": "seven" }), false)]
    #[case(json!({}), false)]
    #[case(json!([1, 2]), false)]
    fn shape_follows_serde(#[case] payload: Value, #[case] expected: bool) {
        assert_eq!(Predicate::shape::<Login>().test(&payload), expected);
    }

    #[rstest]
    #[case(json!({ "userId": 7 }), true)]
    #[case(json!({ "userId": null }), false)]
    #[case(json!({ "other": 1 }), false)]
    #[case(json!("userId"), false)]
    fn has_field_requires_non_null_value(#[case] payload: Value, #[case] expected: bool) {
        assert_eq!(Predicate::has_field("userId").test(&payload), expected);
    }

    #[test]
    fn combinators() {
        let positive = Predicate::new(|p| p.as_i64().is_some_and(|n| n > 0));
        let even = Predicate::new(|p| p.as_i64().is_some_and(|n| n % 2 == 0));

        let both = positive.clone().and(even.clone());
        assert!(both.test(&json!(4)));
        assert!(!both.test(&json!(3)));
        assert!(!both.test(&json!(-4)));

        let either = positive.clone().or(even);
        assert!(either.test(&json!(-4)));
        assert!(!either.test(&json!(-3)));

        let non_positive = positive.not();
        assert!(non_positive.test(&json!(0)));
        assert!(!non_positive.test(&json!(1)));
    }
}
