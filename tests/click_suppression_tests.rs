use remote_scroll::api::{InputController, InputControlsConfig, RecordingHost};
use remote_scroll::core::PointerInput;

fn build_controller() -> InputController<RecordingHost> {
    InputController::new(RecordingHost::default(), InputControlsConfig::default())
        .expect("controller init")
}

fn gesture(controller: &mut InputController<RecordingHost>, from_y: f64, to_y: f64) {
    controller
        .pointer_down(PointerInput::primary(0.0, from_y))
        .expect("press");
    controller
        .pointer_move(PointerInput::primary(0.0, to_y))
        .expect("move");
    controller.pointer_up().expect("release");
}

#[test]
fn tap_within_threshold_keeps_click() {
    let mut controller = build_controller();
    gesture(&mut controller, 100.0, 104.0);

    let disposition = controller.click();
    assert!(disposition.is_pass_through());
}

#[test]
fn drag_cancels_trailing_click_before_settle() {
    let mut controller = build_controller();
    gesture(&mut controller, 100.0, 180.0);

    let disposition = controller.click();
    assert!(disposition.prevent_default);
    assert!(disposition.stop_propagation);
}

#[test]
fn click_after_settle_is_not_suppressed() {
    let mut controller = build_controller();
    gesture(&mut controller, 100.0, 180.0);
    let token = controller.host_mut().take_settle().expect("settle queued");
    assert!(controller.settle_gesture(token));

    assert!(controller.click().is_pass_through());
}

#[test]
fn next_press_clears_stale_drag_before_a_late_settle() {
    let mut controller = build_controller();
    gesture(&mut controller, 100.0, 180.0);
    let stale = controller.host_mut().take_settle().expect("settle queued");

    controller
        .pointer_down(PointerInput::primary(0.0, 50.0))
        .expect("press before settle ran");
    assert!(!controller.settle_gesture(stale));
    controller.pointer_up().expect("release");
    assert!(controller.click().is_pass_through());
    assert!(!controller.settle_gesture(stale));
    let current = controller.host_mut().take_settle().expect("second settle");
    assert!(controller.settle_gesture(current));
}

#[test]
fn click_without_any_gesture_passes_through() {
    let controller = build_controller();
    assert!(controller.click().is_pass_through());
}
