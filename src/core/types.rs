use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::measure::parse_measure;
use crate::error::{QuadrantError, QuadrantResult};

/// Raw value of one list field as returned by the data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Number(f64),
    Text(String),
    Boolean(bool),
    Structured(Value),
}

impl FieldValue {
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(flag) => Self::Boolean(*flag),
            Value::Number(number) => number
                .as_f64()
                .map_or_else(|| Self::Structured(value.clone()), Self::Number),
            Value::String(text) => Self::Text(text.clone()),
            Value::Array(_) | Value::Object(_) => Self::Structured(value.clone()),
        }
    }

    /// Text shown in a raw table cell. Null and empty text render as `None`.
    #[must_use]
    pub fn display_text(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::Text(text) if text.is_empty() => None,
            Self::Text(text) => Some(text.clone()),
            Self::Number(number) => Some(number.to_string()),
            Self::Boolean(flag) => Some(flag.to_string()),
            Self::Structured(value) => Some(value.to_string()),
        }
    }
}

/// One list item with the fields selected by the query.
///
/// Field lookups go through an explicit map; a field that was not returned
/// is reported as absent rather than defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub title: Option<String>,
    pub fields: IndexMap<String, FieldValue>,
}

impl Record {
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: None,
            fields: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: FieldValue) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// Builds a record from one item object of a list items payload.
    ///
    /// `Id` is required. `Title` is kept apart from the other fields; every
    /// remaining key, including OData annotations, lands in `fields`.
    pub fn from_json_object(object: &Map<String, Value>) -> QuadrantResult<Self> {
        let id = object
            .get("Id")
            .or_else(|| object.get("ID"))
            .and_then(json_integer)
            .ok_or_else(|| {
                QuadrantError::InvalidData("list item is missing an integer `Id`".to_owned())
            })?;

        let title = match object.get("Title") {
            Some(Value::String(text)) if !text.is_empty() => Some(text.clone()),
            _ => None,
        };

        let fields = object
            .iter()
            .filter(|(key, _)| !matches!(key.as_str(), "Id" | "ID" | "Title"))
            .map(|(key, value)| (key.clone(), FieldValue::from_json(value)))
            .collect();

        Ok(Self { id, title, fields })
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Numeric value of `name`, or `None` when absent or not numeric.
    #[must_use]
    pub fn measure(&self, name: &str) -> Option<f64> {
        self.field(name).and_then(parse_measure)
    }

    /// Point label: the title when present, `Item {id}` otherwise.
    #[must_use]
    pub fn display_label(&self) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => format!("Item {}", self.id),
        }
    }
}

fn json_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Pixel size of a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn square(side: u32) -> Self {
        Self::new(side, side)
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Pixel rectangle holding the plotted data, excluding axis titles and ticks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotArea {
    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        [self.left, self.top, self.right, self.bottom]
            .iter()
            .all(|value| value.is_finite())
            && self.width() > 0.0
            && self.height() > 0.0
    }

    /// Pixel position at fractions of the width and height from the top-left corner.
    #[must_use]
    pub fn point_at_fraction(self, x_fraction: f64, y_fraction: f64) -> (f64, f64) {
        (
            self.left + self.width() * x_fraction,
            self.top + self.height() * y_fraction,
        )
    }
}
