use crate::core::{FrameId, ScrollBehavior, SettleToken};
use crate::error::ScrollResult;
use crate::reveal::ElementId;

/// The page surface the controller drives.
///
/// Implementations own the real scroll position, the scroll-behavior style,
/// the grabbing cursor, frame and deferred-task scheduling, and the reveal
/// class. Scheduled frames and settle tasks are reported back through
/// [`super::InputController::animation_frame`] and
/// [`super::InputController::settle_gesture`].
pub trait ScrollHost {
    fn scroll_top(&self) -> f64;

    fn viewport_height(&self) -> f64;

    fn scroll_by(&mut self, delta: f64, behavior: ScrollBehavior) -> ScrollResult<()>;

    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) -> ScrollResult<()>;

    /// Overrides the page's default scroll behavior until restored.
    fn override_scroll_behavior(&mut self, behavior: ScrollBehavior) -> ScrollResult<()>;

    fn restore_scroll_behavior(&mut self) -> ScrollResult<()>;

    fn set_grabbing(&mut self, grabbing: bool) -> ScrollResult<()>;

    fn request_frame(&mut self, frame: FrameId) -> ScrollResult<()>;

    fn cancel_frame(&mut self, frame: FrameId) -> ScrollResult<()>;

    /// Queues a zero-delay task that must call back `settle_gesture(token)`.
    fn schedule_settle(&mut self, token: SettleToken) -> ScrollResult<()>;

    fn mark_revealed(&mut self, element: ElementId) -> ScrollResult<()>;
}
