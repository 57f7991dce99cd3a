use tracing::debug;

use crate::core::{EventDisposition, FrameId, PointerInput, SettleToken};
use crate::error::{ScrollError, ScrollResult};
use crate::interaction::{ClickDecision, GestureTransition, resolve_click};

use super::{InputController, ScrollHost};

impl<H: ScrollHost> InputController<H> {
    /// Pointer button pressed. Only the primary button starts a gesture.
    pub fn pointer_down(&mut self, input: PointerInput) -> ScrollResult<EventDisposition> {
        if !self.config.drag_scroll {
            return Ok(EventDisposition::pass_through());
        }
        let scroll_top = self.host.scroll_top();
        let transition = self.gesture.on_press(input, scroll_top);
        self.finish_pointer_transition(transition)
    }

    pub fn pointer_move(&mut self, input: PointerInput) -> ScrollResult<EventDisposition> {
        if !self.config.drag_scroll {
            return Ok(EventDisposition::pass_through());
        }
        let transition = self.gesture.on_move(input);
        self.finish_pointer_transition(transition)
    }

    pub fn pointer_up(&mut self) -> ScrollResult<EventDisposition> {
        let transition = self.gesture.on_release();
        self.finish_pointer_transition(transition)
    }

    /// Pointer left the document. Handled exactly like a release.
    pub fn pointer_leave(&mut self) -> ScrollResult<EventDisposition> {
        let transition = self.gesture.on_leave();
        self.finish_pointer_transition(transition)
    }

    /// Native `dragstart`; always cancelled while drag scrolling is enabled.
    #[must_use]
    pub fn drag_start(&self) -> EventDisposition {
        if !self.config.drag_scroll {
            return EventDisposition::pass_through();
        }
        self.gesture.on_native_drag_start()
    }

    /// Capture-phase click. Cancels the click that concludes a drag.
    #[must_use]
    pub fn click(&self) -> EventDisposition {
        let decision = resolve_click(&self.gesture);
        if decision == ClickDecision::Suppress {
            debug!("suppressing click that concluded a drag");
        }
        decision.disposition()
    }

    /// Frame callback for a previously requested `frame`.
    pub fn animation_frame(&mut self, frame: FrameId) -> ScrollResult<()> {
        let transition = self.gesture.on_frame(frame);
        self.apply_gesture_effects(&transition.effects)
    }

    /// Deferred settle task scheduled on release.
    ///
    /// Returns `false` if there was nothing left to settle or `token` is stale.
    pub fn settle_gesture(&mut self, token: SettleToken) -> bool {
        self.gesture.settle(token)
    }

    /// A host failure is returned as [`ScrollError::GestureEffect`] so the
    /// caller can still apply the disposition to the native event.
    fn finish_pointer_transition(
        &mut self,
        transition: GestureTransition,
    ) -> ScrollResult<EventDisposition> {
        self.apply_gesture_effects(&transition.effects)
            .map_err(|source| ScrollError::GestureEffect {
                disposition: transition.disposition,
                source: Box::new(source),
            })?;
        Ok(transition.disposition)
    }
}
