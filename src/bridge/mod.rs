//! Scroll requests posted by an embedding context.
//!
//! The channel is shared with unrelated host features, so anything that is
//! not `{ "scroll": <finite number> }` is dropped without comment. String
//! payloads are never parsed, even when they hold JSON text.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::ScrollBehavior;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollMessage {
    /// Relative vertical offset; negative scrolls up.
    pub scroll: f64,
}

impl ScrollMessage {
    /// The bridge always eases into the requested offset.
    pub const BEHAVIOR: ScrollBehavior = ScrollBehavior::Smooth;

    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        let scroll = value.get("scroll")?.as_f64()?;
        scroll.is_finite().then_some(Self { scroll })
    }
}
