use tracing::trace;

use crate::core::{EventDisposition, KeyInput};
use crate::error::ScrollResult;
use crate::interaction::resolve_key_scroll;

use super::{InputController, ScrollHost};

impl<H: ScrollHost> InputController<H> {
    /// Directional key navigation for remotes and keyboards.
    ///
    /// Unrecognized keys pass through untouched.
    pub fn key_down(&mut self, input: &KeyInput) -> ScrollResult<EventDisposition> {
        if !self.config.key_navigation {
            return Ok(EventDisposition::pass_through());
        }
        let viewport_height = self.host.viewport_height();
        let Some(scroll) = resolve_key_scroll(input, self.config.scroll_step, viewport_height)
        else {
            return Ok(EventDisposition::pass_through());
        };

        trace!(key = ?scroll.key, delta = scroll.delta, "key scroll");
        self.host.scroll_by(scroll.delta, scroll.behavior)?;
        Ok(EventDisposition::prevent_default())
    }
}
