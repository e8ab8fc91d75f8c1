use scale2d::core::ViewBox;
use scale2d::render::{NullRenderer, StyleBag, TickFrame, TickLabels, TickPrimitive};
use scale2d::{Scale2DConfig, Scale2dError, ScaleConfig};
use serde_json::json;

fn sample_config() -> Scale2DConfig {
    let mut major_style = StyleBag::new();
    major_style.insert("stroke".to_owned(), json!("#444"));

    Scale2DConfig {
        scale_x: Some(ScaleConfig::linear(0.0, 10.0)),
        major_ticks_x: Some(vec![0.0, 5.0, 10.0]),
        minor_ticks_x: Some(vec![2.5, 7.5]),
        scale_y: Some(ScaleConfig::log(1.0, 100.0)),
        major_ticks_y: Some(vec![1.0, 10.0, 100.0]),
        major_style: Some(major_style),
        labels_x: Some(TickLabels::new().with_label(5.0, "5")),
        labels_y: Some(TickLabels::new().with_label(10.0, "10").with_label(100.0, "")),
        ..Scale2DConfig::new(ViewBox::new(0.0, 0.0, 100.0, 50.0))
    }
}

#[test]
fn config_json_roundtrip() {
    let config = sample_config();
    let json = config
        .to_json_pretty()
        .expect("config should serialize to json");
    let restored = Scale2DConfig::from_json_str(&json).expect("config should deserialize");

    assert_eq!(restored, config);
}

#[test]
fn config_parses_compact_host_json() {
    let input = r##"{
        "view_box": [0, 0, 100, 50],
        "scale_x": { "kind": "linear", "min": 0, "max": 10 },
        "major_ticks_x": [5],
        "labels_x": [[5, "five"]],
        "label_style_x": { "fontSize": 10, "fill": "#222" }
    }"##;

    let config = Scale2DConfig::from_json_str(input).expect("parse host json");
    assert_eq!(config.view_box, Some(ViewBox::new(0.0, 0.0, 100.0, 50.0)));
    assert_eq!(config.scale_y, None);

    let frame = config.render_frame().expect("render");
    assert_eq!(frame.len(), 2);
    let label = frame.labels().next().expect("label");
    assert_eq!((label.x, label.y), (50.5, 0.0));
    assert_eq!(label.text, "five");
    let keys: Vec<&str> = label
        .style
        .as_ref()
        .expect("label style")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, vec!["fontSize", "fill"]);
}

#[test]
fn config_without_view_box_renders_empty_frame() {
    let config = Scale2DConfig {
        view_box: None,
        ..sample_config()
    };
    let frame = config.render_frame().expect("render");
    assert_eq!(frame, TickFrame::empty());
}

#[test]
fn config_render_mixes_linear_and_log_axes() {
    let frame = sample_config().render_frame().expect("render");

    // minor-X: 2 lines; major-X: 3 lines + 1 label; major-Y: 3 lines + 1 label.
    assert_eq!(frame.lines().count(), 8);
    let texts: Vec<&str> = frame.labels().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["5", "10"]);

    let mut renderer = NullRenderer::default();
    sample_config()
        .render_with(&mut renderer)
        .expect("null render");
    assert_eq!(renderer.last_line_count, 8);
    assert_eq!(renderer.last_label_count, 2);
}

#[test]
fn invalid_log_scale_surfaces_as_scale_error() {
    let config = Scale2DConfig {
        scale_y: Some(ScaleConfig::log(0.0, 100.0)),
        ..sample_config()
    };
    let err = config.render_frame().expect_err("log domain must be positive");
    assert!(matches!(err, Scale2dError::InvalidScale(_)));
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let err = Scale2DConfig::from_json_str("{ \"view_box\": [1, 2] }").expect_err("short view box");
    assert!(matches!(err, Scale2dError::Serialization(_)));
}

#[test]
fn primitives_serialize_with_kind_tag() {
    let frame = sample_config().render_frame().expect("render");
    let json = frame.to_json_pretty().expect("frame json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    let first = &value["primitives"][0];
    assert_eq!(first["kind"], json!("line"));
    assert_eq!(first["class"], json!("tickmark-minor"));
    assert!(first.get("style").is_none());

    let restored: TickFrame = serde_json::from_str(&json).expect("frame roundtrip");
    assert_eq!(restored, frame);
    assert!(matches!(restored.primitives[0], TickPrimitive::Line(_)));
}
