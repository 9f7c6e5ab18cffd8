use quadrant_chart::core::{FieldValue, Quadrant, Record};
use serde_json::json;

fn object(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
    value.as_object().cloned().expect("json object")
}

#[test]
fn item_object_splits_id_title_and_fields() {
    let record = Record::from_json_object(&object(json!({
        "Id": 12,
        "Title": "Late invoices",
        "Resolvability": 30,
        "Opportunity": "18.5",
        "Owner": null
    })))
    .expect("record");

    assert_eq!(record.id, 12);
    assert_eq!(record.title.as_deref(), Some("Late invoices"));
    assert_eq!(record.fields.len(), 3);
    assert_eq!(record.measure("Resolvability"), Some(30.0));
    assert_eq!(record.measure("Opportunity"), Some(18.5));
    assert_eq!(record.field("Owner"), Some(&FieldValue::Null));
    assert_eq!(record.measure("Owner"), None);
    assert_eq!(record.field("Missing"), None);
}

#[test]
fn field_order_follows_the_payload() {
    let record = Record::from_json_object(&object(json!({
        "ID": "4",
        "Zeta": 1,
        "Alpha": 2
    })))
    .expect("record");

    assert_eq!(record.id, 4);
    let keys: Vec<&str> = record.fields.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["Zeta", "Alpha"]);
}

#[test]
fn empty_title_is_treated_as_absent() {
    let record = Record::from_json_object(&object(json!({ "Id": 9, "Title": "" })))
        .expect("record");
    assert_eq!(record.title, None);
    assert_eq!(record.display_label(), "Item 9");
}

#[test]
fn item_without_integer_id_is_rejected() {
    assert!(Record::from_json_object(&object(json!({ "Title": "orphan" }))).is_err());
    assert!(Record::from_json_object(&object(json!({ "Id": "abc" }))).is_err());
}

#[test]
fn field_values_keep_their_json_shape() {
    assert_eq!(FieldValue::from_json(&json!(true)), FieldValue::Boolean(true));
    assert_eq!(FieldValue::from_json(&json!(2.5)), FieldValue::Number(2.5));
    assert_eq!(
        FieldValue::from_json(&json!({ "Label": "x" })),
        FieldValue::Structured(json!({ "Label": "x" }))
    );

    assert_eq!(FieldValue::Null.display_text(), None);
    assert_eq!(FieldValue::Text(String::new()).display_text(), None);
    assert_eq!(FieldValue::Number(7.0).display_text().as_deref(), Some("7"));
    assert_eq!(
        FieldValue::Text("high".to_owned()).display_text().as_deref(),
        Some("high")
    );
}

#[test]
fn booleans_and_structured_values_are_not_measures() {
    let record = Record::new(1)
        .with_field("Flag", FieldValue::Boolean(true))
        .with_field("Lookup", FieldValue::Structured(json!({ "Id": 3 })));
    assert_eq!(record.measure("Flag"), None);
    assert_eq!(record.measure("Lookup"), None);
}

#[test]
fn native_number_just_below_the_midpoint_stays_below_it() {
    let raw = r#"{ "Id": 1, "Resolvability": 24.99999999999999822, "Opportunity": 10 }"#;
    let value: serde_json::Value = serde_json::from_str(raw).expect("valid json");
    let record =
        Record::from_json_object(value.as_object().expect("json object")).expect("record");

    let expected: f64 = "24.99999999999999822".parse().expect("decimal");
    assert!(expected < 25.0);
    let x = record.measure("Resolvability").expect("numeric");
    assert_eq!(x.to_bits(), expected.to_bits());

    let as_text = Record::new(2)
        .with_field("Resolvability", FieldValue::Text("24.99999999999999822".to_owned()))
        .with_field("Opportunity", FieldValue::Number(10.0));
    let y = record.measure("Opportunity").expect("numeric");
    assert_eq!(Quadrant::classify(x, y), Quadrant::LowLow);
    assert_eq!(
        as_text.measure("Resolvability").map(f64::to_bits),
        Some(x.to_bits())
    );
}
