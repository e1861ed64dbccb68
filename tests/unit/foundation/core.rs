use super::*;

#[test]
fn hsv_primaries() {
    assert_eq!(Rgba8::from_hsv(0.0, 1.0, 1.0), Rgba8::RED);
    assert_eq!(Rgba8::from_hsv(120.0, 1.0, 1.0), Rgba8::opaque(0, 255, 0));
    assert_eq!(Rgba8::from_hsv(240.0, 1.0, 1.0), Rgba8::opaque(0, 0, 255));
}

#[test]
fn hsv_hue_wraps() {
    assert_eq!(Rgba8::from_hsv(360.0, 1.0, 1.0), Rgba8::RED);
    assert_eq!(Rgba8::from_hsv(-120.0, 1.0, 1.0), Rgba8::opaque(0, 0, 255));
}

#[test]
fn hsv_zero_saturation_is_gray() {
    let c = Rgba8::from_hsv(200.0, 0.0, 0.5);
    assert_eq!((c.r, c.g, c.b), (128, 128, 128));
}

#[test]
fn hex_is_lowercase_rgb() {
    assert_eq!(Rgba8::opaque(255, 10, 0).to_hex_rgb(), "#ff0a00");
}
