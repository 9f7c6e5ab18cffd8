use std::collections::HashSet;

use quadrant_chart::api::{QuadrantPoint, build_points, quadrant_counts};
use quadrant_chart::core::{AxisSelection, FieldValue, Quadrant, Record};

fn axes() -> AxisSelection {
    AxisSelection::new("Resolvability", "Opportunity").expect("valid axes")
}

fn record(id: i64, x: FieldValue, y: FieldValue) -> Record {
    Record::new(id)
        .with_field("Resolvability", x)
        .with_field("Opportunity", y)
}

#[test]
fn one_record_per_quadrant_gets_four_distinct_colors() {
    let records = vec![
        record(1, FieldValue::Number(10.0), FieldValue::Number(10.0)),
        record(2, FieldValue::Number(10.0), FieldValue::Number(40.0)),
        record(3, FieldValue::Number(40.0), FieldValue::Number(10.0)),
        record(4, FieldValue::Number(40.0), FieldValue::Number(40.0)),
    ];

    let points = build_points(&records, &axes());
    let quadrants: Vec<Quadrant> = points.iter().map(|point| point.quadrant).collect();
    assert_eq!(
        quadrants,
        vec![
            Quadrant::LowLow,
            Quadrant::LowHigh,
            Quadrant::HighLow,
            Quadrant::HighHigh
        ]
    );
    assert_eq!(quadrant_counts(&points), [1, 1, 1, 1]);

    let fills: HashSet<String> = points.iter().map(|point| point.colors.fill.to_css()).collect();
    let borders: HashSet<String> = points
        .iter()
        .map(|point| point.colors.border.to_css())
        .collect();
    assert_eq!(fills.len(), 4);
    assert_eq!(borders.len(), 4);
}

#[test]
fn quadrant_palette_is_fixed() {
    let expected = [
        (Quadrant::HighHigh, "rgba(75, 192, 192, 0.6)", "rgba(75, 192, 192, 1)"),
        (Quadrant::LowHigh, "rgba(255, 206, 86, 0.6)", "rgba(255, 206, 86, 1)"),
        (Quadrant::LowLow, "rgba(255, 99, 132, 0.6)", "rgba(255, 99, 132, 1)"),
        (Quadrant::HighLow, "rgba(255, 159, 64, 0.6)", "rgba(255, 159, 64, 1)"),
    ];
    for (quadrant, fill, border) in expected {
        let colors = quadrant.colors();
        assert_eq!(colors.fill.to_css(), fill);
        assert_eq!(colors.border.to_css(), border);
    }
}

#[test]
fn records_without_both_measures_are_left_off_the_chart() {
    let records = vec![
        record(1, FieldValue::Text("12.5".to_owned()), FieldValue::Text("30".to_owned())),
        Record::new(2).with_field("Resolvability", FieldValue::Number(30.0)),
        record(3, FieldValue::Text(String::new()), FieldValue::Number(5.0)),
        record(4, FieldValue::Null, FieldValue::Number(5.0)),
        record(5, FieldValue::Text("abc".to_owned()), FieldValue::Number(5.0)),
    ];

    let points = build_points(&records, &axes());
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].record_id, 1);
    assert_eq!(points[0].x, 12.5);
    assert_eq!(points[0].y, 30.0);
    assert_eq!(points[0].quadrant, Quadrant::LowHigh);
}

#[test]
fn point_label_falls_back_to_item_id() {
    let titled = record(7, FieldValue::Number(1.0), FieldValue::Number(1.0)).with_title("Tariffs");
    let untitled = record(8, FieldValue::Number(1.0), FieldValue::Number(1.0));

    let axes = axes();
    let first = QuadrantPoint::from_record(&titled, &axes).expect("point");
    let second = QuadrantPoint::from_record(&untitled, &axes).expect("point");
    assert_eq!(first.label, "Tariffs");
    assert_eq!(second.label, "Item 8");
}

#[test]
fn boundary_record_lands_in_high_high() {
    let points = build_points(
        &[record(1, FieldValue::Number(25.0), FieldValue::Text("25".to_owned()))],
        &axes(),
    );
    assert_eq!(points[0].quadrant, Quadrant::HighHigh);
}
