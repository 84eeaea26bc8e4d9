//! Domain model (event names, tagged messages, errors).

pub mod event_name;
pub mod tagged;
pub mod errors;

pub use self::event_name::EventName;
pub use self::tagged::{TaggedNoPayload, TaggedPayload};
pub use self::errors::{HeraldError, Mismatch};
