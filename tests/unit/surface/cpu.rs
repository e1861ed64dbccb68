use super::*;
use crate::surface::corner::CornerRounding;

#[test]
fn rejects_degenerate_sizes() {
    assert!(matches!(
        CpuSurface::new(0, 10),
        Err(SquigglyError::Render(_))
    ));
    assert!(CpuSurface::new(10, 70_000).is_err());
}

#[test]
fn stroke_covers_pixels_on_the_line() {
    let mut s = CpuSurface::new(32, 16).unwrap();
    let style = StrokeStyle::rounded(4.0, Rgba8::RED, CornerRounding::new(8.0));
    s.stroke_polyline(&[Point::new(4.0, 8.0), Point::new(28.0, 8.0)], &style);
    let frame = s.finish();

    assert_eq!(frame.data.len(), 32 * 16 * 4);
    assert!(frame.premultiplied);
    let on = frame.pixel(16, 8).unwrap();
    assert!(on[0] > 200 && on[3] > 200, "{on:?}");
    assert_eq!(frame.pixel(16, 1).unwrap(), [0, 0, 0, 0]);
    assert_eq!(frame.pixel(32, 0), None);
}

#[test]
fn background_fills_every_pixel() {
    let frame = CpuSurface::with_background(4, 4, Rgba8::opaque(255, 255, 255))
        .unwrap()
        .finish();
    assert!(frame.data.chunks_exact(4).all(|px| px == [255, 255, 255, 255]));
}

#[test]
fn empty_polyline_draws_nothing() {
    let mut s = CpuSurface::new(4, 4).unwrap();
    let style = StrokeStyle::rounded(4.0, Rgba8::RED, CornerRounding::new(8.0));
    s.stroke_polyline(&[], &style);
    assert!(s.finish().data.iter().all(|&b| b == 0));
}

#[test]
fn unpremultiply_restores_straight_alpha() {
    let mut f = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![64, 0, 0, 128],
        premultiplied: true,
    };
    f.unpremultiply();
    assert_eq!(f.data, vec![128, 0, 0, 128]);
    assert!(!f.premultiplied);
}
