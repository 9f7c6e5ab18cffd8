use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::core::{AxisSelection, ChartSize};
use crate::error::{MissingSetting, QuadrantError, QuadrantResult};
use crate::extensions::OverlayLabels;

pub const DEFAULT_ISSUE_LIST: &str = "MA Issue Tmp";
pub const DEFAULT_ISSUE_X_MEASURE: &str = "Resolvability";
pub const DEFAULT_ISSUE_Y_MEASURE: &str = "Opportunity";

/// Settings of the quadrant chart widget, as stored by the host.
///
/// This type is serializable so hosts can persist it as-is; every field has
/// the host's default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadrantChartConfig {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub list_name: String,
    #[serde(default)]
    pub x_axis_measure: String,
    #[serde(default)]
    pub y_axis_measure: String,
    #[serde(default)]
    pub chart_size: ChartSize,
    #[serde(default = "default_show_watermark")]
    pub show_watermark: bool,
    #[serde(default)]
    pub top_right_label: String,
    #[serde(default)]
    pub top_left_label: String,
    #[serde(default)]
    pub lower_right_label: String,
    #[serde(default)]
    pub lower_left_label: String,
    /// Restricts the chart to one item, usually taken from the page's `ID` parameter.
    #[serde(default)]
    pub item_id: Option<i64>,
}

fn default_show_watermark() -> bool {
    true
}

impl Default for QuadrantChartConfig {
    fn default() -> Self {
        Self {
            description: String::new(),
            list_name: String::new(),
            x_axis_measure: String::new(),
            y_axis_measure: String::new(),
            chart_size: ChartSize::default(),
            show_watermark: default_show_watermark(),
            top_right_label: String::new(),
            top_left_label: String::new(),
            lower_right_label: String::new(),
            lower_left_label: String::new(),
            item_id: None,
        }
    }
}

impl QuadrantChartConfig {
    #[must_use]
    pub fn new(list_name: impl Into<String>) -> Self {
        Self {
            list_name: list_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_measures(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_axis_measure = x.into();
        self.y_axis_measure = y.into();
        self
    }

    #[must_use]
    pub fn with_chart_size(mut self, chart_size: ChartSize) -> Self {
        self.chart_size = chart_size;
        self
    }

    #[must_use]
    pub fn with_watermark(mut self, show_watermark: bool) -> Self {
        self.show_watermark = show_watermark;
        self
    }

    #[must_use]
    pub fn with_item_id(mut self, item_id: Option<i64>) -> Self {
        self.item_id = item_id;
        self
    }

    pub fn from_json_str(input: &str) -> QuadrantResult<Self> {
        parse_json(input, "quadrant chart config")
    }

    pub fn from_path(path: impl AsRef<Path>) -> QuadrantResult<Self> {
        read_json(path.as_ref(), "quadrant chart config")
    }

    pub fn list_name(&self) -> QuadrantResult<&str> {
        required_list_name(&self.list_name)
    }

    pub fn axes(&self) -> QuadrantResult<AxisSelection> {
        AxisSelection::new(self.x_axis_measure.as_str(), self.y_axis_measure.as_str())
    }

    /// Overlay labels when the watermark is shown, each blank label defaulted.
    #[must_use]
    pub fn overlay_labels(&self) -> Option<OverlayLabels> {
        self.show_watermark.then(|| {
            OverlayLabels::with_defaults(
                Some(self.top_right_label.as_str()),
                Some(self.top_left_label.as_str()),
                Some(self.lower_right_label.as_str()),
                Some(self.lower_left_label.as_str()),
            )
        })
    }

    /// Checks the settings needed before a fetch: list name first, then measures.
    pub fn validate(&self) -> QuadrantResult<AxisSelection> {
        self.list_name()?;
        self.axes()
    }

    /// Whether moving from `previous` to `self` changes what must be fetched.
    #[must_use]
    pub fn requires_refetch(&self, previous: &Self) -> bool {
        self.list_name != previous.list_name
            || self.x_axis_measure != previous.x_axis_measure
            || self.y_axis_measure != previous.y_axis_measure
            || self.item_id != previous.item_id
    }
}

/// Settings of the issue details widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueDetailsConfig {
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_issue_list")]
    pub list_name: String,
    #[serde(default = "default_issue_x_measure")]
    pub x_axis_measure: String,
    #[serde(default = "default_issue_y_measure")]
    pub y_axis_measure: String,
    #[serde(default)]
    pub chart_size: ChartSize,
    #[serde(default)]
    pub item_id: Option<i64>,
}

fn default_issue_list() -> String {
    DEFAULT_ISSUE_LIST.to_owned()
}

fn default_issue_x_measure() -> String {
    DEFAULT_ISSUE_X_MEASURE.to_owned()
}

fn default_issue_y_measure() -> String {
    DEFAULT_ISSUE_Y_MEASURE.to_owned()
}

impl Default for IssueDetailsConfig {
    fn default() -> Self {
        Self {
            description: String::new(),
            list_name: default_issue_list(),
            x_axis_measure: default_issue_x_measure(),
            y_axis_measure: default_issue_y_measure(),
            chart_size: ChartSize::default(),
            item_id: None,
        }
    }
}

impl IssueDetailsConfig {
    #[must_use]
    pub fn new(list_name: impl Into<String>) -> Self {
        Self {
            list_name: list_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_item_id(mut self, item_id: Option<i64>) -> Self {
        self.item_id = item_id;
        self
    }

    pub fn from_json_str(input: &str) -> QuadrantResult<Self> {
        parse_json(input, "issue details config")
    }

    pub fn from_path(path: impl AsRef<Path>) -> QuadrantResult<Self> {
        read_json(path.as_ref(), "issue details config")
    }

    pub fn list_name(&self) -> QuadrantResult<&str> {
        required_list_name(&self.list_name)
    }

    pub fn axes(&self) -> QuadrantResult<AxisSelection> {
        AxisSelection::new(self.x_axis_measure.as_str(), self.y_axis_measure.as_str())
    }

    pub fn validate(&self) -> QuadrantResult<AxisSelection> {
        self.list_name()?;
        self.axes()
    }

    #[must_use]
    pub fn requires_refetch(&self, previous: &Self) -> bool {
        self.list_name != previous.list_name
            || self.x_axis_measure != previous.x_axis_measure
            || self.y_axis_measure != previous.y_axis_measure
            || self.item_id != previous.item_id
    }
}

fn required_list_name(list_name: &str) -> QuadrantResult<&str> {
    let trimmed = list_name.trim();
    if trimmed.is_empty() {
        return Err(QuadrantError::MissingConfiguration(MissingSetting::ListName));
    }
    Ok(trimmed)
}

fn parse_json<T: DeserializeOwned>(input: &str, what: &str) -> QuadrantResult<T> {
    serde_json::from_str(input)
        .map_err(|e| QuadrantError::InvalidData(format!("failed to parse {what}: {e}")))
}

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> QuadrantResult<T> {
    let raw = fs::read_to_string(path).map_err(|e| {
        QuadrantError::InvalidData(format!("failed to read {what} `{}`: {e}", path.display()))
    })?;
    parse_json(&raw, what)
}
