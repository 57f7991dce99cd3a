use serde_json::Value;
use tracing::trace;

use crate::bridge::ScrollMessage;
use crate::error::ScrollResult;

use super::{InputController, ScrollHost};

impl<H: ScrollHost> InputController<H> {
    /// Handles a message from the embedding context.
    ///
    /// Returns `true` when the message was a scroll request and was applied.
    /// A JSON string value is treated like any other non-object payload.
    pub fn receive_message(&mut self, payload: &Value) -> ScrollResult<bool> {
        if !self.config.message_bridge {
            return Ok(false);
        }
        let Some(message) = ScrollMessage::from_value(payload) else {
            return Ok(false);
        };
        trace!(delta = message.scroll, "bridge scroll");
        self.host.scroll_by(message.scroll, ScrollMessage::BEHAVIOR)?;
        Ok(true)
    }
}
