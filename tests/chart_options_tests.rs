use approx::assert_relative_eq;
use quadrant_chart::api::{ChartOptionsBuilder, QuadrantPoint, tooltip_label};
use quadrant_chart::core::{AxisSelection, ChartSize, GridLineStyle, Quadrant};
use quadrant_chart::extensions::OverlayLabels;

fn axes() -> AxisSelection {
    AxisSelection::new("Resolvability", "Opportunity").expect("valid axes")
}

#[test]
fn axes_are_fixed_to_zero_fifty_with_anchor_labels_only() {
    let options = ChartOptionsBuilder::new(&axes()).build();

    for axis in [&options.x_axis, &options.y_axis] {
        assert_eq!(axis.min, 0.0);
        assert_eq!(axis.max, 50.0);
        assert_eq!(axis.ticks.first().map(|tick| tick.value), Some(0.0));
        assert_eq!(axis.ticks.last().map(|tick| tick.value), Some(50.0));
        for tick in &axis.ticks {
            let anchored = tick.value == 0.0 || tick.value == 25.0 || tick.value == 50.0;
            assert_eq!(!tick.label.is_empty(), anchored, "tick {}", tick.value);
        }
    }
}

#[test]
fn midpoint_gridline_is_heavier_and_darker() {
    let options = ChartOptionsBuilder::new(&axes()).build();

    for tick in &options.x_axis.ticks {
        if tick.value == 25.0 {
            assert_eq!(tick.grid.width, 2.0);
            assert_eq!(tick.grid.color.to_css(), "rgba(0, 0, 0, 0.3)");
        } else {
            assert_eq!(tick.grid, GridLineStyle::REGULAR);
            assert_eq!(tick.grid.width, 1.0);
            assert_eq!(tick.grid.color.to_css(), "rgba(0, 0, 0, 0.1)");
        }
    }
}

#[test]
fn title_and_axis_titles_follow_display_names() {
    let options = ChartOptionsBuilder::new(&axes()).build();
    assert_eq!(options.title, "Resolvability vs Opportunity");
    assert!(!options.show_legend);

    let renamed = ChartOptionsBuilder::new(&axes())
        .axis_titles("Ease", "Value")
        .build();
    assert_eq!(renamed.title, "Ease vs Value");
    assert_eq!(renamed.x_axis.title, "Ease");
    assert_eq!(renamed.y_axis.title, "Value");
}

#[test]
fn dimensions_follow_chart_size() {
    let options = ChartOptionsBuilder::new(&axes())
        .size(ChartSize::new(1).expect("valid size"))
        .build();
    assert_relative_eq!(options.dimensions.container_px, 380.0, epsilon = 1e-9);
    assert_relative_eq!(options.dimensions.inner_px, 340.0, epsilon = 1e-9);

    let largest = ChartOptionsBuilder::new(&axes())
        .size(ChartSize::new(10).expect("valid size"))
        .build();
    assert_relative_eq!(largest.dimensions.container_px, 1000.0, epsilon = 1e-9);
    assert_relative_eq!(largest.dimensions.inner_px, 960.0, epsilon = 1e-9);
}

#[test]
fn overlay_labels_default_independently() {
    let labels = OverlayLabels::with_defaults(Some("Act now"), Some(""), None, Some("  "));
    assert_eq!(labels.top_right, "Act now");
    assert_eq!(labels.top_left, "2O - Big Impact");
    assert_eq!(labels.lower_right, "2R - Quick Win");
    assert_eq!(labels.lower_left, "3 - Low Priority");

    let hidden = ChartOptionsBuilder::new(&axes()).overlay(None).build();
    assert!(hidden.overlay.is_none());
}

#[test]
fn tooltip_shows_label_and_coordinates() {
    let point = QuadrantPoint {
        record_id: 3,
        x: 12.5,
        y: 40.0,
        label: "Pricing".to_owned(),
        quadrant: Quadrant::LowHigh,
        colors: Quadrant::LowHigh.colors(),
    };
    assert_eq!(tooltip_label(&point), "Pricing: (12.5, 40)");

    let unlabeled = QuadrantPoint {
        label: String::new(),
        ..point
    };
    assert_eq!(tooltip_label(&unlabeled), "Item: (12.5, 40)");
}
