use crate::core::types::FieldValue;

/// Coerces a raw field value into a measure.
///
/// Finite numbers and numeric strings (surrounding whitespace ignored) yield
/// a value. Empty strings, nulls, booleans, structured values, non-numeric
/// text and non-finite results yield `None`; nothing defaults to zero.
#[must_use]
pub fn parse_measure(value: &FieldValue) -> Option<f64> {
    match value {
        FieldValue::Number(number) => number.is_finite().then_some(*number),
        FieldValue::Text(text) => parse_measure_text(text),
        FieldValue::Null | FieldValue::Boolean(_) | FieldValue::Structured(_) => None,
    }
}

#[must_use]
pub fn parse_measure_text(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    // `f64::from_str` also accepts "inf" and "NaN".
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_text_parses() {
        assert_eq!(parse_measure(&FieldValue::Text("12.5".to_owned())), Some(12.5));
        assert_eq!(parse_measure(&FieldValue::Text(" 40 ".to_owned())), Some(40.0));
        assert_eq!(parse_measure(&FieldValue::Number(0.0)), Some(0.0));
    }

    #[test]
    fn non_numeric_values_have_no_measure() {
        for value in [
            FieldValue::Text(String::new()),
            FieldValue::Text("abc".to_owned()),
            FieldValue::Text("NaN".to_owned()),
            FieldValue::Text("inf".to_owned()),
            FieldValue::Null,
            FieldValue::Boolean(true),
        ] {
            assert_eq!(parse_measure(&value), None, "{value:?}");
        }
    }
}
