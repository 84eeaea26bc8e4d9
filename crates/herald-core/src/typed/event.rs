//! Event trait - 型付き event の定義
//!
//! # 学習ポイント
//! - Associated Constants (`const NAME`)
//! - Associated Types (`type Payload`)

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Event は event 名と payload 型を対応付ける
///
/// # 使用例
/// ```ignore
/// #[derive(Serialize, Deserialize)]
/// struct OrderPlaced {
///     order_id: String,
/// }
///
/// struct OrderPlacedEvent;
///
/// impl Event for OrderPlacedEvent {
///     const NAME: &'static str = "shop.order.placed";
///     type Payload = OrderPlaced;
/// }
///
/// let placed = registry.define_event::<OrderPlacedEvent>();
/// ```
///
/// `EventRegistry::define_event` は `Payload` の serde の形を predicate にする。
pub trait Event {
    /// 命名規約: `{namespace}.{domain}.{action}`
    const NAME: &'static str;

    type Payload: Serialize + DeserializeOwned + Send + Sync + 'static;
}
