use super::*;
use crate::view::coordinator::{FrameState, RecordingHost};
use serde_json::json;

fn scene(v: serde_json::Value) -> Scene {
    Scene::from_reader(v.to_string().as_bytes()).unwrap()
}

fn basic() -> serde_json::Value {
    json!({
        "text": "hello squiggly world",
        "width": 300,
        "height": 60,
        "decorations": [{"start": 6, "end": 14}]
    })
}

#[test]
fn defaults_follow_layout_and_style_defaults() {
    let s = scene(basic());
    let def = s.def();
    assert_eq!(def.density, 1.0);
    assert_eq!(s.layout_opts(), MonoLayoutOpts::default());
    assert_eq!(def.insets, [0.0, 0.0]);
    assert_eq!(def.decorations[0].style, SquiggleDef::default());
}

#[test]
fn renderer_starts_the_frame_loop() {
    let mut host = RecordingHost::default();
    let r = scene(basic()).renderer(&mut host).unwrap();
    assert_eq!(host.frame_requests, 1);
    assert_eq!(r.view().state(), FrameState::Scheduled);
}

#[test]
fn static_scene_does_not_request_frames() {
    let mut v = basic();
    v["decorations"][0]["style"] = json!({"animated": false});
    let mut host = RecordingHost::default();
    let r = scene(v).renderer(&mut host).unwrap();
    assert_eq!(host.frame_requests, 0);
    assert_eq!(host.invalidations, 1);
    assert_eq!(r.view().state(), FrameState::Idle);
}

#[test]
fn svg_contains_one_path_per_region() {
    let mut host = RecordingHost::default();
    let mut r = scene(basic()).renderer(&mut host).unwrap();
    let (svg, stats) = r.render_svg(0).unwrap();
    assert_eq!(stats, DrawStats { decorations: 1, regions: 1 });
    assert_eq!(svg.matches("<path").count(), 1);
    assert!(svg.contains("stroke=\"#ff0000\""));
}

#[test]
fn raster_frame_strokes_under_the_range() {
    let mut host = RecordingHost::default();
    let mut r = scene(basic()).renderer(&mut host).unwrap();
    let (frame, _) = r.render_frame(0).unwrap();
    assert_eq!((frame.width, frame.height), (300, 60));

    // Stroke starts at x = 74; one period later the wave is back on the baseline (y = 24).
    let px = frame.pixel(122, 24).unwrap();
    assert!(px[0] > 200 && px[1] < 80 && px[2] < 80, "{px:?}");

    let bg = frame.pixel(10, 50).unwrap();
    assert_eq!(bg, [255, 255, 255, 255]);
}

#[test]
fn bad_decoration_range_is_a_layout_error() {
    let mut v = basic();
    v["decorations"][0]["end"] = json!(99);
    let mut host = RecordingHost::default();
    let err = scene(v).renderer(&mut host).err().unwrap();
    assert!(matches!(err, SquigglyError::Layout(_)), "{err:?}");
}

#[test]
fn invalid_style_names_the_decoration() {
    let mut v = basic();
    v["decorations"][0]["style"] = json!({"cycle_duration_ms": 0});
    let err = scene(v).decorated_text().err().unwrap();
    assert!(err.to_string().contains("decorations[0]"), "{err}");
}

#[test]
fn cycling_background_is_rejected() {
    let mut v = basic();
    v["background"] = json!({"hue_cycle": {}});
    let mut host = RecordingHost::default();
    let err = scene(v).renderer(&mut host).err().unwrap();
    assert!(matches!(err, SquigglyError::Validation(_)), "{err:?}");
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = Scene::from_reader("{".as_bytes()).unwrap_err();
    assert!(matches!(err, SquigglyError::Serde(_)));
    let err = Scene::from_reader(json!({"text": "x"}).to_string().as_bytes()).unwrap_err();
    assert!(matches!(err, SquigglyError::Serde(_)));
}

#[test]
fn missing_file_is_reported() {
    let err = Scene::from_path("does/not/exist.json").unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}
