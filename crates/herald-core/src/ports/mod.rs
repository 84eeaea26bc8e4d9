//! Ports - 抽象化レイヤー
//!
//! registry が外に出す副作用は重複定義の warning だけなので、
//! port もそれ 1 つ。

pub mod diagnostic_sink;

pub use self::diagnostic_sink::{DiagnosticSink, TracingSink};
