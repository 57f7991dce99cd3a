use remote_scroll::api::{HostCall, InputController, InputControlsConfig, RecordingHost};
use remote_scroll::core::{PointerInput, ScrollBehavior};
use proptest::prelude::*;

fn build_controller(scroll_top: f64) -> InputController<RecordingHost> {
    InputController::new(
        RecordingHost::new(scroll_top, 720.0),
        InputControlsConfig::default(),
    )
    .expect("controller init")
}

fn run_frames(controller: &mut InputController<RecordingHost>) {
    for frame in controller.host_mut().take_pending_frames() {
        controller.animation_frame(frame).expect("frame");
    }
}

proptest! {
    #[test]
    fn small_movements_always_classify_as_click(
        anchor_y in 0.0f64..2_000.0,
        offsets in prop::collection::vec(-5.0f64..=5.0, 1..20)
    ) {
        let mut controller = build_controller(0.0);
        controller.pointer_down(PointerInput::primary(0.0, anchor_y)).expect("press");
        for offset in &offsets {
            controller
                .pointer_move(PointerInput::primary(0.0, anchor_y + offset))
                .expect("move");
        }
        controller.pointer_up().expect("release");

        prop_assert!(controller.click().is_pass_through());
    }

    #[test]
    fn drags_cancel_click_and_land_on_final_delta(
        anchor_y in 0.0f64..2_000.0,
        anchor_scroll_top in 0.0f64..10_000.0,
        jump in prop_oneof![-800.0f64..-5.001, 5.001f64..800.0],
        final_delta in -800.0f64..800.0
    ) {
        let mut controller = build_controller(anchor_scroll_top);
        controller.pointer_down(PointerInput::primary(0.0, anchor_y)).expect("press");
        controller
            .pointer_move(PointerInput::primary(0.0, anchor_y + jump))
            .expect("jump");
        run_frames(&mut controller);
        controller
            .pointer_move(PointerInput::primary(0.0, anchor_y + final_delta))
            .expect("final move");
        run_frames(&mut controller);
        controller.pointer_up().expect("release");

        let disposition = controller.click();
        prop_assert!(disposition.prevent_default && disposition.stop_propagation);
        let expected = anchor_scroll_top - ((anchor_y + final_delta) - anchor_y);
        prop_assert!((controller.host().scroll_top - expected).abs() <= 1e-9);
    }

    #[test]
    fn scroll_behavior_is_instant_only_between_press_and_release(
        presses in prop::collection::vec((0.0f64..1_000.0, -50.0f64..50.0, any::<bool>(), any::<bool>()), 1..12)
    ) {
        let mut controller = build_controller(0.0);
        for (y, dy, leave, settle) in presses {
            controller.pointer_down(PointerInput::primary(0.0, y)).expect("press");
            prop_assert_eq!(controller.host().effective_scroll_behavior(), ScrollBehavior::Instant);
            prop_assert!(controller.host().grabbing);

            controller.pointer_move(PointerInput::primary(0.0, y + dy)).expect("move");
            prop_assert_eq!(controller.host().effective_scroll_behavior(), ScrollBehavior::Instant);

            if leave {
                controller.pointer_leave().expect("leave");
            } else {
                controller.pointer_up().expect("release");
            }
            prop_assert_eq!(controller.host().effective_scroll_behavior(), ScrollBehavior::Smooth);
            prop_assert!(!controller.host().grabbing);

            if settle {
                while let Some(token) = controller.host_mut().take_settle() {
                    controller.settle_gesture(token);
                }
            }
        }
    }

    #[test]
    fn at_most_one_frame_is_outstanding(
        moves in prop::collection::vec(-400.0f64..400.0, 1..40)
    ) {
        let mut controller = build_controller(1_000.0);
        controller.pointer_down(PointerInput::primary(0.0, 500.0)).expect("press");
        for dy in &moves {
            controller.pointer_move(PointerInput::primary(0.0, 500.0 + dy)).expect("move");
            prop_assert_eq!(controller.host().pending_frames.len(), 1);
        }
        run_frames(&mut controller);

        let last = moves.last().copied().unwrap_or_default();
        prop_assert_eq!(
            controller.host().scroll_calls(),
            vec![HostCall::ScrollTo { top: 1_000.0 - ((500.0 + last) - 500.0), behavior: ScrollBehavior::Instant }]
        );
    }
}
