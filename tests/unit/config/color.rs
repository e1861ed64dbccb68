use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: ColorDef = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, ColorDef::rgba(1.0, 0.0, 0.0, 1.0));

    let c: ColorDef = serde_json::from_value(json!("#0000ff80")).unwrap();
    assert_eq!(
        c.to_source(),
        ColorSource::Solid(Rgba8::new(0, 0, 255, 128))
    );
}

#[test]
fn rejects_malformed_hex() {
    assert!(serde_json::from_value::<ColorDef>(json!("#ff00")).is_err());
    assert!(serde_json::from_value::<ColorDef>(json!("#gg0000")).is_err());
    assert!(serde_json::from_value::<ColorDef>(json!("#ééé")).is_err());
}

#[test]
fn parses_rgba_object_and_array() {
    let c: ColorDef = serde_json::from_value(json!({"r": 0.25, "g": 0.5, "b": 0.75})).unwrap();
    assert_eq!(c, ColorDef::rgba(0.25, 0.5, 0.75, 1.0));

    let c: ColorDef = serde_json::from_value(json!([0.25, 0.5, 0.75, 0.9])).unwrap();
    assert_eq!(c, ColorDef::rgba(0.25, 0.5, 0.75, 0.9));
    assert!(serde_json::from_value::<ColorDef>(json!([0.1, 0.2])).is_err());
}

#[test]
fn parses_hsla_object() {
    let c: ColorDef = serde_json::from_value(json!({"h": 0.0, "s": 1.0, "l": 0.5})).unwrap();
    assert_eq!(c.to_source(), ColorSource::Solid(Rgba8::RED));
}

#[test]
fn parses_hue_cycle_with_defaults() {
    let c: ColorDef = serde_json::from_value(json!({"hue_cycle": {"hue_offset_deg": 180.0}}))
        .unwrap();
    assert_eq!(
        c.to_source(),
        ColorSource::HueCycle {
            hue_offset_deg: 180.0,
            saturation: 1.0,
            value: 1.0,
        }
    );
}
