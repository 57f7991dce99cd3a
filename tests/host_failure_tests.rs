use remote_scroll::api::{InputController, InputControlsConfig, RecordingHost, ScrollHost};
use remote_scroll::core::{EventDisposition, FrameId, KeyInput, PointerInput, ScrollBehavior, SettleToken};
use remote_scroll::error::{ScrollError, ScrollResult};
use remote_scroll::reveal::ElementId;

/// Host whose cursor styling always fails.
#[derive(Debug, Default)]
struct BrokenCursorHost {
    inner: RecordingHost,
    fail_scroll: bool,
    fail_frames: bool,
}

impl ScrollHost for BrokenCursorHost {
    fn scroll_top(&self) -> f64 {
        self.inner.scroll_top()
    }

    fn viewport_height(&self) -> f64 {
        self.inner.viewport_height()
    }

    fn scroll_by(&mut self, delta: f64, behavior: ScrollBehavior) -> ScrollResult<()> {
        if self.fail_scroll {
            return Err(ScrollError::Host("scroll unavailable".to_owned()));
        }
        self.inner.scroll_by(delta, behavior)
    }

    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) -> ScrollResult<()> {
        self.inner.scroll_to(top, behavior)
    }

    fn override_scroll_behavior(&mut self, behavior: ScrollBehavior) -> ScrollResult<()> {
        self.inner.override_scroll_behavior(behavior)
    }

    fn restore_scroll_behavior(&mut self) -> ScrollResult<()> {
        self.inner.restore_scroll_behavior()
    }

    fn set_grabbing(&mut self, _grabbing: bool) -> ScrollResult<()> {
        Err(ScrollError::Host("cursor style unavailable".to_owned()))
    }

    fn request_frame(&mut self, frame: FrameId) -> ScrollResult<()> {
        if self.fail_frames {
            return Err(ScrollError::Host("frame scheduling unavailable".to_owned()));
        }
        self.inner.request_frame(frame)
    }

    fn cancel_frame(&mut self, frame: FrameId) -> ScrollResult<()> {
        self.inner.cancel_frame(frame)
    }

    fn schedule_settle(&mut self, token: SettleToken) -> ScrollResult<()> {
        self.inner.schedule_settle(token)
    }

    fn mark_revealed(&mut self, element: ElementId) -> ScrollResult<()> {
        self.inner.mark_revealed(element)
    }
}

#[test]
fn failing_effect_does_not_block_restore_or_settle() {
    let mut controller =
        InputController::new(BrokenCursorHost::default(), InputControlsConfig::default())
            .expect("controller init");

    let press = controller
        .pointer_down(PointerInput::primary(0.0, 100.0))
        .expect_err("cursor failure surfaces");
    assert!(matches!(press.root_cause(), ScrollError::Host(_)));
    assert_eq!(press.disposition(), Some(EventDisposition::pass_through()));
    assert_eq!(
        controller.host().inner.effective_scroll_behavior(),
        ScrollBehavior::Instant
    );

    controller
        .pointer_move(PointerInput::primary(0.0, 200.0))
        .expect("move");
    let release = controller.pointer_up().expect_err("cursor failure surfaces");
    assert!(matches!(release, ScrollError::GestureEffect { .. }));
    assert!(matches!(release.root_cause(), ScrollError::Host(_)));

    let inner = &controller.host().inner;
    assert_eq!(inner.effective_scroll_behavior(), ScrollBehavior::Smooth);
    assert_eq!(inner.pending_settles, vec![SettleToken(1)]);
    assert!(controller.click().prevent_default);
}

#[test]
fn failed_move_still_blocks_native_selection() {
    let mut controller = InputController::new(
        BrokenCursorHost {
            fail_frames: true,
            ..BrokenCursorHost::default()
        },
        InputControlsConfig::default(),
    )
    .expect("controller init");
    let _ = controller.pointer_down(PointerInput::primary(0.0, 100.0));

    let moved = controller
        .pointer_move(PointerInput::primary(0.0, 180.0))
        .expect_err("frame failure surfaces");
    let disposition = moved.disposition().expect("move keeps its disposition");
    assert!(disposition.prevent_default);
    assert!(matches!(moved.root_cause(), ScrollError::Host(_)));
    assert!(controller.is_dragging());
}

#[test]
fn key_scroll_failure_is_reported() {
    let mut controller = InputController::new(
        BrokenCursorHost {
            fail_scroll: true,
            ..BrokenCursorHost::default()
        },
        InputControlsConfig::default(),
    )
    .expect("controller init");
    let result = controller.key_down(&KeyInput::named("ArrowDown"));
    let err = result.expect_err("scroll failure surfaces");
    assert!(matches!(err, ScrollError::Host(_)));
    assert_eq!(err.disposition(), None);
}
