use super::*;
use crate::host::ManualClock;

#[test]
fn layers_write_into_shared_state() {
    let stage = HeadlessStage::new();
    let mut layers = stage.layers(Box::new(ManualClock::new()));

    layers.overlay.show();
    layers.overlay.set_opacity(0.5, None);
    layers.label.set_text("hello");
    layers.label.set_interactive(true);
    layers.canvas.resize(Viewport::new(10, 20)).unwrap();
    layers.canvas.clear();
    layers.canvas.fill_spark(Rect::new(0.0, 0.0, 1.0, 1.0), Rgba8::BLACK, 1.0);
    layers.canvas.present().unwrap();
    layers.audio.play().unwrap();

    let s = stage.snapshot();
    assert!(s.overlay_visible);
    assert_eq!(s.overlay_opacity, 0.5);
    assert_eq!(s.label_text, "hello");
    assert!(s.label_interactive);
    assert_eq!(s.canvas_viewport, Some(Viewport::new(10, 20)));
    assert_eq!((s.clears, s.spark_draws, s.presents), (1, 1, 1));
    assert_eq!(s.audio_plays, 1);
}

#[test]
fn injected_failures_surface_as_errors() {
    let stage = HeadlessStage::new();
    let mut layers = stage.layers(Box::new(ManualClock::new()));
    stage.update(|s| {
        s.fail_audio = true;
        s.fail_present = true;
    });

    let err = layers.audio.play().unwrap_err();
    assert!(err.to_string().contains("autoplay"));
    assert!(matches!(
        layers.canvas.present(),
        Err(GargantaError::Render(_))
    ));
    assert_eq!(stage.snapshot().presents, 0);
}
