use crate::core::{FrameId, ScrollBehavior, SettleToken};
use crate::error::ScrollResult;
use crate::reveal::ElementId;

use super::ScrollHost;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostCall {
    ScrollBy { delta: f64, behavior: ScrollBehavior },
    ScrollTo { top: f64, behavior: ScrollBehavior },
    OverrideScrollBehavior(ScrollBehavior),
    RestoreScrollBehavior,
    SetGrabbing(bool),
    RequestFrame(FrameId),
    CancelFrame(FrameId),
    ScheduleSettle(SettleToken),
    MarkRevealed(ElementId),
}

impl HostCall {
    #[must_use]
    pub fn is_scroll(self) -> bool {
        matches!(self, Self::ScrollBy { .. } | Self::ScrollTo { .. })
    }
}

/// In-memory host used by tests and headless replay.
///
/// Offsets are applied verbatim; clamping to the scrollable range is left to
/// real pages.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingHost {
    pub scroll_top: f64,
    pub viewport_height: f64,
    pub default_scroll_behavior: ScrollBehavior,
    pub scroll_behavior_override: Option<ScrollBehavior>,
    pub grabbing: bool,
    pub pending_frames: Vec<FrameId>,
    pub pending_settles: Vec<SettleToken>,
    pub revealed: Vec<ElementId>,
    pub calls: Vec<HostCall>,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self::new(0.0, 720.0)
    }
}

impl RecordingHost {
    #[must_use]
    pub fn new(scroll_top: f64, viewport_height: f64) -> Self {
        Self {
            scroll_top,
            viewport_height,
            default_scroll_behavior: ScrollBehavior::Smooth,
            scroll_behavior_override: None,
            grabbing: false,
            pending_frames: Vec::new(),
            pending_settles: Vec::new(),
            revealed: Vec::new(),
            calls: Vec::new(),
        }
    }

    /// Scroll behavior the page would currently use for its own scrolls.
    #[must_use]
    pub fn effective_scroll_behavior(&self) -> ScrollBehavior {
        self.scroll_behavior_override
            .unwrap_or(self.default_scroll_behavior)
    }

    #[must_use]
    pub fn scroll_calls(&self) -> Vec<HostCall> {
        self.calls
            .iter()
            .copied()
            .filter(|call| call.is_scroll())
            .collect()
    }

    /// Drains frames requested and not cancelled since the last call.
    pub fn take_pending_frames(&mut self) -> Vec<FrameId> {
        std::mem::take(&mut self.pending_frames)
    }

    /// Pops the oldest queued settle task.
    pub fn take_settle(&mut self) -> Option<SettleToken> {
        if self.pending_settles.is_empty() {
            return None;
        }
        Some(self.pending_settles.remove(0))
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl ScrollHost for RecordingHost {
    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn scroll_by(&mut self, delta: f64, behavior: ScrollBehavior) -> ScrollResult<()> {
        self.calls.push(HostCall::ScrollBy { delta, behavior });
        self.scroll_top += delta;
        Ok(())
    }

    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) -> ScrollResult<()> {
        self.calls.push(HostCall::ScrollTo { top, behavior });
        self.scroll_top = top;
        Ok(())
    }

    fn override_scroll_behavior(&mut self, behavior: ScrollBehavior) -> ScrollResult<()> {
        self.calls.push(HostCall::OverrideScrollBehavior(behavior));
        self.scroll_behavior_override = Some(behavior);
        Ok(())
    }

    fn restore_scroll_behavior(&mut self) -> ScrollResult<()> {
        self.calls.push(HostCall::RestoreScrollBehavior);
        self.scroll_behavior_override = None;
        Ok(())
    }

    fn set_grabbing(&mut self, grabbing: bool) -> ScrollResult<()> {
        self.calls.push(HostCall::SetGrabbing(grabbing));
        self.grabbing = grabbing;
        Ok(())
    }

    fn request_frame(&mut self, frame: FrameId) -> ScrollResult<()> {
        self.calls.push(HostCall::RequestFrame(frame));
        self.pending_frames.push(frame);
        Ok(())
    }

    fn cancel_frame(&mut self, frame: FrameId) -> ScrollResult<()> {
        self.calls.push(HostCall::CancelFrame(frame));
        self.pending_frames.retain(|pending| *pending != frame);
        Ok(())
    }

    fn schedule_settle(&mut self, token: SettleToken) -> ScrollResult<()> {
        self.calls.push(HostCall::ScheduleSettle(token));
        self.pending_settles.push(token);
        Ok(())
    }

    fn mark_revealed(&mut self, element: ElementId) -> ScrollResult<()> {
        self.calls.push(HostCall::MarkRevealed(element));
        if !self.revealed.contains(&element) {
            self.revealed.push(element);
        }
        Ok(())
    }
}
