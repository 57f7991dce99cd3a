use criterion::{Criterion, criterion_group, criterion_main};
use remote_scroll::api::{InputController, InputControlsConfig, RecordingHost};
use remote_scroll::core::{KeyInput, PointerInput};
use remote_scroll::interaction::DragScrollState;
use remote_scroll::reveal::{ElementId, IntersectionEntry, RevealObserver};
use std::hint::black_box;

fn bench_recognizer_move_stream_1k(c: &mut Criterion) {
    c.bench_function("recognizer_move_stream_1k", |b| {
        b.iter(|| {
            let mut state = DragScrollState::default();
            let _ = state.on_press(PointerInput::primary(0.0, 500.0), 2_000.0);
            for i in 0..1_000 {
                let y = 500.0 + f64::from(i % 200) - 100.0;
                let _ = black_box(state.on_move(PointerInput::primary(0.0, y)));
            }
            let _ = black_box(state.on_release());
        })
    });
}

fn bench_controller_drag_with_frames(c: &mut Criterion) {
    c.bench_function("controller_drag_with_frames_1k", |b| {
        b.iter(|| {
            let mut controller = InputController::new(
                RecordingHost::new(2_000.0, 1080.0),
                InputControlsConfig::default(),
            )
            .expect("controller init");
            controller
                .pointer_down(PointerInput::primary(0.0, 500.0))
                .expect("press");
            for i in 0..1_000 {
                let y = 500.0 - f64::from(i);
                controller
                    .pointer_move(PointerInput::primary(0.0, y))
                    .expect("move");
                if i % 4 == 0 {
                    for frame in controller.host_mut().take_pending_frames() {
                        controller.animation_frame(frame).expect("frame");
                    }
                }
            }
            controller.pointer_up().expect("release");
            let _ = black_box(controller.click());
            controller
                .key_down(&KeyInput::named("PageDown"))
                .expect("page down");
        })
    });
}

fn bench_reveal_batch_10k(c: &mut Criterion) {
    let entries: Vec<IntersectionEntry> = (0..10_000)
        .map(|i| IntersectionEntry::new(ElementId(i % 500), i % 3 != 0, (i % 10) as f64 / 10.0))
        .collect();

    c.bench_function("reveal_batch_10k", |b| {
        b.iter(|| {
            let mut observer = RevealObserver::default();
            for index in 0..500 {
                observer.observe(ElementId(index));
            }
            let _ = black_box(observer.process(black_box(&entries)));
        })
    });
}

criterion_group!(
    benches,
    bench_recognizer_move_stream_1k,
    bench_controller_drag_with_frames,
    bench_reveal_batch_10k
);
criterion_main!(benches);
