use reqwest::Url;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::{AxisSelection, Record};
use crate::data::query::{available_lists_url, list_items_url, numeric_fields_url, parse_web_url};
use crate::data::transport::ListTransport;
use crate::error::{QuadrantError, QuadrantResult};

/// What to read from a list: `Id` and `Title` are always selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemsRequest {
    pub list_title: String,
    pub fields: Vec<String>,
    pub item_id: Option<i64>,
}

impl ItemsRequest {
    #[must_use]
    pub fn new(list_title: impl Into<String>) -> Self {
        Self {
            list_title: list_title.into(),
            fields: Vec::new(),
            item_id: None,
        }
    }

    #[must_use]
    pub fn with_axes(mut self, axes: &AxisSelection) -> Self {
        self.fields
            .extend(axes.field_names().into_iter().map(str::to_owned));
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }

    #[must_use]
    pub fn with_item_id(mut self, item_id: Option<i64>) -> Self {
        self.item_id = item_id;
        self
    }
}

/// A visible generic list of the web.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOption {
    pub title: String,
}

/// A numeric column usable as a measure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureOption {
    pub internal_name: String,
    pub title: String,
}

/// Numeric columns of one list, in server order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureCatalog {
    pub list_title: String,
    pub measures: Vec<MeasureOption>,
}

impl MeasureCatalog {
    #[must_use]
    pub fn find(&self, internal_name: &str) -> Option<&MeasureOption> {
        self.measures
            .iter()
            .find(|option| option.internal_name == internal_name)
    }

    /// Display title of a measure, falling back to its internal name.
    #[must_use]
    pub fn display_name<'a>(&'a self, internal_name: &'a str) -> &'a str {
        self.find(internal_name)
            .map_or(internal_name, |option| option.title.as_str())
    }

    /// Both axes must name columns of this catalog.
    pub fn ensure_contains(&self, axes: &AxisSelection) -> QuadrantResult<()> {
        for field in axes.field_names() {
            if self.find(field).is_none() {
                return Err(QuadrantError::UnknownMeasure {
                    list: self.list_title.clone(),
                    field: field.to_owned(),
                });
            }
        }
        Ok(())
    }
}

/// Reads list items and list metadata through a [`ListTransport`].
#[derive(Debug, Clone)]
pub struct ListDataFetcher<T> {
    transport: T,
    web_url: Url,
}

impl<T: ListTransport> ListDataFetcher<T> {
    pub fn new(transport: T, web_url: &str) -> QuadrantResult<Self> {
        Ok(Self {
            transport,
            web_url: parse_web_url(web_url)?,
        })
    }

    #[must_use]
    pub fn web_url(&self) -> &Url {
        &self.web_url
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Records in the order the server returned them.
    pub fn fetch_items(&self, request: &ItemsRequest) -> QuadrantResult<Vec<Record>> {
        let fields: Vec<&str> = request.fields.iter().map(String::as_str).collect();
        let url = list_items_url(&self.web_url, &request.list_title, &fields, request.item_id)?;
        let payload = self.transport.get_json(&url)?;

        let records = payload_rows(&payload)?
            .iter()
            .map(|row| {
                row.as_object()
                    .ok_or_else(|| {
                        QuadrantError::InvalidData("list item is not a json object".to_owned())
                    })
                    .and_then(Record::from_json_object)
            })
            .collect::<QuadrantResult<Vec<_>>>()?;

        tracing::info!(
            list = %request.list_title,
            item_id = ?request.item_id,
            records = records.len(),
            "fetched list items"
        );
        Ok(records)
    }

    pub fn fetch_available_lists(&self) -> QuadrantResult<Vec<ListOption>> {
        let url = available_lists_url(&self.web_url)?;
        let payload = self.transport.get_json(&url)?;
        let lists = payload_rows(&payload)?
            .iter()
            .filter_map(|row| string_field(row, "Title"))
            .map(|title| ListOption { title })
            .collect::<Vec<_>>();
        tracing::debug!(lists = lists.len(), "fetched available lists");
        Ok(lists)
    }

    pub fn fetch_measure_catalog(&self, list_title: &str) -> QuadrantResult<MeasureCatalog> {
        let url = numeric_fields_url(&self.web_url, list_title)?;
        let payload = self.transport.get_json(&url)?;
        let measures = payload_rows(&payload)?
            .iter()
            .filter_map(|row| {
                let internal_name = string_field(row, "InternalName")?;
                let title = string_field(row, "Title").unwrap_or_else(|| internal_name.clone());
                Some(MeasureOption {
                    internal_name,
                    title,
                })
            })
            .collect::<Vec<_>>();
        tracing::debug!(list = %list_title, measures = measures.len(), "fetched numeric columns");
        Ok(MeasureCatalog {
            list_title: list_title.to_owned(),
            measures,
        })
    }
}

const NO_ROWS: &[Value] = &[];

/// Rows of a collection payload in `nometadata` (`value`) or verbose
/// (`d.results`) shape. A payload without either yields no rows.
fn payload_rows(payload: &Value) -> QuadrantResult<&[Value]> {
    let rows = payload
        .get("value")
        .or_else(|| payload.get("d").and_then(|d| d.get("results")));
    match rows {
        None | Some(Value::Null) => Ok(NO_ROWS),
        Some(Value::Array(rows)) => Ok(rows.as_slice()),
        Some(other) => Err(QuadrantError::Unexpected(format!(
            "unexpected collection payload: {other}"
        ))),
    }
}

fn string_field(row: &Value, key: &str) -> Option<String> {
    row.as_object()
        .and_then(|object: &Map<String, Value>| object.get(key))
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
}
