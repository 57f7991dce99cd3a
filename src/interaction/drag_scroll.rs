use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::{EventDisposition, FrameId, PointerInput, ScrollBehavior, SettleToken};

/// Vertical travel, in pixels, a press must exceed before it counts as a drag.
pub const DEFAULT_DRAG_THRESHOLD_PX: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GesturePhase {
    Idle,
    /// Button held, movement still within the click threshold.
    Pressed,
    /// Button held, movement exceeded the threshold at least once.
    Dragging,
    /// Released but not yet settled.
    ///
    /// `dragged` stays readable here so the click that trails the release can
    /// still be classified.
    Releasing { dragged: bool },
}

/// Host-side action produced by a gesture transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEffect {
    OverrideScrollBehavior(ScrollBehavior),
    RestoreScrollBehavior,
    SetGrabbing(bool),
    RequestFrame(FrameId),
    CancelFrame(FrameId),
    ScrollTo { top: f64, behavior: ScrollBehavior },
    ScheduleSettle(SettleToken),
}

pub type GestureEffects = SmallVec<[GestureEffect; 4]>;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GestureTransition {
    pub effects: GestureEffects,
    pub disposition: EventDisposition,
}

impl GestureTransition {
    fn ignored() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.effects.is_empty() && self.disposition.is_pass_through()
    }
}

/// Frame request waiting for the next display refresh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendingFrame {
    pub id: FrameId,
    pub scroll_top: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Anchor {
    page_y: f64,
    scroll_top: f64,
}

/// Vertical drag-to-scroll recognizer with click classification.
///
/// Content follows the pointer: moving down by `delta` targets
/// `anchor_scroll_top - delta`. Scroll application is deferred to frame
/// callbacks and at most one frame request is outstanding at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct DragScrollState {
    threshold_px: f64,
    phase: GesturePhase,
    anchor: Option<Anchor>,
    pending_frame: Option<PendingFrame>,
    last_frame_id: FrameId,
    last_release: SettleToken,
}

impl Default for DragScrollState {
    fn default() -> Self {
        Self::new(DEFAULT_DRAG_THRESHOLD_PX)
    }
}

impl DragScrollState {
    #[must_use]
    pub fn new(threshold_px: f64) -> Self {
        Self {
            threshold_px,
            phase: GesturePhase::Idle,
            anchor: None,
            pending_frame: None,
            last_frame_id: FrameId(0),
            last_release: SettleToken(0),
        }
    }

    #[must_use]
    pub fn threshold_px(&self) -> f64 {
        self.threshold_px
    }

    pub fn set_threshold_px(&mut self, threshold_px: f64) {
        self.threshold_px = threshold_px;
    }

    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Button is held.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.phase, GesturePhase::Pressed | GesturePhase::Dragging)
    }

    /// Current interaction is (or just was) a drag.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(
            self.phase,
            GesturePhase::Dragging | GesturePhase::Releasing { dragged: true }
        )
    }

    /// Pointer Y and scroll offset recorded at the latest press.
    #[must_use]
    pub fn anchor(&self) -> Option<(f64, f64)> {
        self.anchor.map(|anchor| (anchor.page_y, anchor.scroll_top))
    }

    #[must_use]
    pub fn pending_frame(&self) -> Option<PendingFrame> {
        self.pending_frame
    }

    /// Handles a button press at `input`, with `scroll_top` read from the page.
    ///
    /// A press while already held re-anchors without touching the overrides,
    /// so overlapping presses can never strand the state machine. Any frame
    /// still pending targets the old anchor and is cancelled, since
    /// `scroll_top` was read before it ran.
    pub fn on_press(&mut self, input: PointerInput, scroll_top: f64) -> GestureTransition {
        if !input.button.is_primary() {
            return GestureTransition::ignored();
        }

        let was_active = self.is_active();
        self.phase = GesturePhase::Pressed;
        self.anchor = Some(Anchor {
            page_y: input.page_y,
            scroll_top,
        });

        let mut transition = GestureTransition::ignored();
        if let Some(stale) = self.pending_frame.take() {
            transition.effects.push(GestureEffect::CancelFrame(stale.id));
        }
        if was_active {
            trace!(page_y = input.page_y, scroll_top, "drag scroll re-anchored");
        } else {
            trace!(page_y = input.page_y, scroll_top, "drag scroll pressed");
            transition
                .effects
                .push(GestureEffect::OverrideScrollBehavior(ScrollBehavior::Instant));
            transition.effects.push(GestureEffect::SetGrabbing(true));
        }
        transition
    }

    /// Handles pointer movement. Horizontal position is ignored.
    pub fn on_move(&mut self, input: PointerInput) -> GestureTransition {
        let Some(anchor) = self.anchor.filter(|_| self.is_active()) else {
            return GestureTransition::ignored();
        };

        let delta = input.page_y - anchor.page_y;
        if self.phase == GesturePhase::Pressed && delta.abs() > self.threshold_px {
            trace!(delta, threshold = self.threshold_px, "drag scroll promoted to drag");
            self.phase = GesturePhase::Dragging;
        }

        let mut transition = GestureTransition {
            effects: GestureEffects::new(),
            disposition: EventDisposition::prevent_default(),
        };
        if let Some(previous) = self.pending_frame.take() {
            transition
                .effects
                .push(GestureEffect::CancelFrame(previous.id));
        }
        self.last_frame_id = self.last_frame_id.next();
        let frame = PendingFrame {
            id: self.last_frame_id,
            scroll_top: anchor.scroll_top - delta,
        };
        self.pending_frame = Some(frame);
        transition.effects.push(GestureEffect::RequestFrame(frame.id));
        transition
    }

    /// Pointer-up. Identical to [`Self::on_leave`].
    pub fn on_release(&mut self) -> GestureTransition {
        self.finish()
    }

    /// Pointer left the tracked surface mid-interaction.
    pub fn on_leave(&mut self) -> GestureTransition {
        self.finish()
    }

    /// Runs a frame callback.
    ///
    /// Only the latest requested frame applies its offset; ids that were
    /// cancelled or superseded yield nothing. A frame requested before release
    /// still applies after it, so the final offset matches the final delta.
    pub fn on_frame(&mut self, frame: FrameId) -> GestureTransition {
        match self.pending_frame {
            Some(pending) if pending.id == frame => {
                self.pending_frame = None;
                let mut transition = GestureTransition::ignored();
                transition.effects.push(GestureEffect::ScrollTo {
                    top: pending.scroll_top,
                    behavior: ScrollBehavior::Instant,
                });
                transition
            }
            _ => GestureTransition::ignored(),
        }
    }

    /// Native drag-image gestures always compete with drag scrolling.
    #[must_use]
    pub fn on_native_drag_start(&self) -> EventDisposition {
        EventDisposition::prevent_default()
    }

    /// Deferred second half of a release: clears the drag classification.
    ///
    /// Returns `false` when there was nothing to settle: a new press already
    /// started the next interaction, or `token` belongs to an older release.
    pub fn settle(&mut self, token: SettleToken) -> bool {
        match self.phase {
            GesturePhase::Releasing { dragged } if token == self.last_release => {
                trace!(dragged, "drag scroll settled");
                self.phase = GesturePhase::Idle;
                true
            }
            _ => false,
        }
    }

    fn finish(&mut self) -> GestureTransition {
        if !self.is_active() {
            return GestureTransition::ignored();
        }

        let dragged = self.phase == GesturePhase::Dragging;
        trace!(dragged, "drag scroll released");
        self.phase = GesturePhase::Releasing { dragged };
        self.last_release = SettleToken(self.last_release.0.wrapping_add(1));

        let mut transition = GestureTransition::ignored();
        transition.effects.push(GestureEffect::RestoreScrollBehavior);
        transition.effects.push(GestureEffect::SetGrabbing(false));
        transition
            .effects
            .push(GestureEffect::ScheduleSettle(self.last_release));
        transition
    }
}
