use tracing::warn;

use crate::error::{ScrollError, ScrollResult};
use crate::interaction::GestureEffect;

use super::{InputController, ScrollHost};

impl<H: ScrollHost> InputController<H> {
    /// Applies effects in order.
    ///
    /// A failing effect does not stop the rest: restore effects must reach the
    /// host even if an earlier call failed. The first error is returned.
    pub(super) fn apply_gesture_effects(&mut self, effects: &[GestureEffect]) -> ScrollResult<()> {
        let mut first_error: Option<ScrollError> = None;
        for effect in effects {
            if let Err(err) = self.apply_gesture_effect(*effect) {
                warn!(error = %err, ?effect, "scroll host rejected gesture effect");
                first_error.get_or_insert(err);
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn apply_gesture_effect(&mut self, effect: GestureEffect) -> ScrollResult<()> {
        match effect {
            GestureEffect::OverrideScrollBehavior(behavior) => {
                self.host.override_scroll_behavior(behavior)
            }
            GestureEffect::RestoreScrollBehavior => self.host.restore_scroll_behavior(),
            GestureEffect::SetGrabbing(grabbing) => self.host.set_grabbing(grabbing),
            GestureEffect::RequestFrame(frame) => self.host.request_frame(frame),
            GestureEffect::CancelFrame(frame) => self.host.cancel_frame(frame),
            GestureEffect::ScrollTo { top, behavior } => self.host.scroll_to(top, behavior),
            GestureEffect::ScheduleSettle(token) => self.host.schedule_settle(token),
        }
    }
}
