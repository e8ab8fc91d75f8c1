use proptest::prelude::*;
use scale2d::Scale2D;
use scale2d::core::{Axis, LinearScale, PixelConverter, TickTier, ViewBox, Viewport};
use scale2d::render::{AxisPass, TickLabels, render_axis};

proptest! {
    #[test]
    fn x_lines_span_full_height_at_snapped_coordinate(
        domain_min in -1_000.0f64..1_000.0,
        domain_span in 0.01f64..1_000.0,
        width in 1.0f64..4_096.0,
        height in 1.0f64..4_096.0,
        ticks in prop::collection::vec(-2_000.0f64..2_000.0, 0..32)
    ) {
        let scale = LinearScale::new(domain_min, domain_min + domain_span, false);
        let viewport = Viewport::new(width, height);
        let converter = PixelConverter::new(&scale, Axis::X, viewport);

        let out = render_axis(&AxisPass::new(&scale, &ticks, Axis::X, TickTier::Major), viewport);
        prop_assert_eq!(out.len(), ticks.len());

        for (tick, primitive) in ticks.iter().zip(&out) {
            let line = primitive.as_line().expect("only lines without labels");
            let expected = converter.to_pixel(*tick).floor() + 0.5;
            prop_assert_eq!(line.x1, expected);
            prop_assert_eq!(line.x2, expected);
            prop_assert_eq!(line.y1, 0.0);
            prop_assert_eq!(line.y2, height);
        }
    }

    #[test]
    fn y_lines_span_full_width_at_snapped_coordinate(
        domain_min in -1_000.0f64..1_000.0,
        domain_span in 0.01f64..1_000.0,
        width in 1.0f64..4_096.0,
        height in 1.0f64..4_096.0,
        ticks in prop::collection::vec(-2_000.0f64..2_000.0, 0..32)
    ) {
        let scale = LinearScale::new(domain_min, domain_min + domain_span, false);
        let viewport = Viewport::new(width, height);
        let converter = PixelConverter::new(&scale, Axis::Y, viewport);

        let out = render_axis(&AxisPass::new(&scale, &ticks, Axis::Y, TickTier::Minor), viewport);
        prop_assert_eq!(out.len(), ticks.len());

        for (tick, primitive) in ticks.iter().zip(&out) {
            let line = primitive.as_line().expect("only lines without labels");
            let expected = converter.to_pixel(*tick).floor() + 0.5;
            prop_assert_eq!(line.y1, expected);
            prop_assert_eq!(line.y2, expected);
            prop_assert_eq!(line.x1, 0.0);
            prop_assert_eq!(line.x2, width);
            prop_assert_eq!((line.y1 - 0.5).fract(), 0.0);
        }
    }

    #[test]
    fn one_line_per_tick_and_labels_only_for_non_empty_entries(
        ticks in prop::collection::vec(0u8..20, 0..24),
        labeled in prop::collection::vec(0u8..20, 0..10),
        blank in prop::collection::vec(0u8..20, 0..10)
    ) {
        let mut labels = TickLabels::new();
        for value in &labeled {
            labels.insert(f64::from(*value), format!("v{value}"));
        }
        for value in &blank {
            labels.insert(f64::from(*value), "");
        }
        let ticks: Vec<f64> = ticks.into_iter().map(f64::from).collect();
        let scale = LinearScale::new(0.0, 20.0, false);

        let out = Scale2D::new()
            .with_view_box(ViewBox::new(0.0, 0.0, 200.0, 100.0))
            .with_scale_x(&scale)
            .with_ticks_x(Some(&ticks[..]), None)
            .with_labels_x(Some(&labels), None)
            .render();

        let line_count = out.iter().filter(|p| p.as_line().is_some()).count();
        let expected_labels = ticks.iter().filter(|t| labels.label_for(**t).is_some()).count();
        let label_count = out.iter().filter(|p| p.as_label().is_some()).count();
        prop_assert_eq!(line_count, ticks.len());
        prop_assert_eq!(label_count, expected_labels);

        // Every label directly follows the line of its tick.
        for (index, primitive) in out.iter().enumerate() {
            if let Some(label) = primitive.as_label() {
                let line = out[index - 1].as_line().expect("label follows a line");
                prop_assert_eq!(label.x, line.x1);
                prop_assert_eq!(label.y, 0.0);
            }
        }
    }

    #[test]
    fn missing_view_box_always_yields_nothing(
        ticks in prop::collection::vec(-50.0f64..50.0, 0..16)
    ) {
        let scale = LinearScale::new(-50.0, 50.0, false);
        let out = Scale2D::new()
            .with_scale_x(&scale)
            .with_scale_y(&scale)
            .with_ticks_x(Some(&ticks[..]), Some(&ticks[..]))
            .with_ticks_y(Some(&ticks[..]), Some(&ticks[..]))
            .render();
        prop_assert!(out.is_empty());
    }
}
