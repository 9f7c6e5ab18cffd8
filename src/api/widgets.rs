use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::chart_options::{ChartOptions, ChartOptionsBuilder};
use crate::api::config::{IssueDetailsConfig, QuadrantChartConfig};
use crate::api::points::{QuadrantPoint, build_points};
use crate::api::scene::SceneBuilder;
use crate::api::widget_state::{RefreshTicket, WidgetPhase, WidgetSnapshot, WidgetState};
use crate::core::{AxisSelection, Record};
use crate::data::{ItemsRequest, ListDataFetcher, ListTransport, MeasureCatalog};
use crate::error::{ErrorKind, QuadrantError, QuadrantResult};
use crate::extensions::OverlayLabels;
use crate::render::{RenderFrame, Renderer};

pub const LOADING_MESSAGE: &str = "Loading list items...";
pub const NO_TITLE_PLACEHOLDER: &str = "(No Title)";
pub const MISSING_VALUE_PLACEHOLDER: &str = "-";

/// Everything the scatter renderer needs for one draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPresentation {
    pub options: ChartOptions,
    pub points: Vec<QuadrantPoint>,
    pub frame: RenderFrame,
    /// All fetched records, including those left off the chart.
    pub total_records: usize,
}

impl ChartPresentation {
    /// Classifies `records` and lays out the chart. `None` when no record has
    /// both measures numeric.
    pub fn build(
        records: &[Record],
        axes: &AxisSelection,
        options: ChartOptions,
    ) -> QuadrantResult<Option<Self>> {
        let points = build_points(records, axes);
        if points.is_empty() {
            return Ok(None);
        }
        let frame = SceneBuilder::new(&options).build(&points)?;
        Ok(Some(Self {
            options,
            points,
            frame,
            total_records: records.len(),
        }))
    }

    pub fn render_with<R: Renderer>(&self, renderer: &mut R) -> QuadrantResult<()> {
        renderer.render(&self.frame)
    }
}

/// Explains an empty chart; this is a view state, not an error.
#[must_use]
pub fn no_qualifying_data_message(x_title: &str, y_title: &str) -> String {
    format!("No items have numeric values for both {x_title} and {y_title}")
}

/// Body of the quadrant chart widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ChartView {
    Loading {
        message: String,
    },
    Error {
        kind: ErrorKind,
        message: String,
    },
    Empty {
        message: String,
        total_records: usize,
    },
    Ready(Box<ChartPresentation>),
}

impl ChartView {
    fn loading() -> Self {
        Self::Loading {
            message: LOADING_MESSAGE.to_owned(),
        }
    }

    fn error(error: &QuadrantError) -> Self {
        Self::Error {
            kind: error.kind(),
            message: error.to_string(),
        }
    }

    /// One-line text for hosts that only show a status line.
    #[must_use]
    pub fn status_text(&self) -> String {
        match self {
            Self::Loading { message } | Self::Empty { message, .. } => message.clone(),
            Self::Error { message, .. } => format!("Error: {message}"),
            Self::Ready(presentation) => format!(
                "{} of {} items plotted",
                presentation.points.len(),
                presentation.total_records
            ),
        }
    }
}

/// Fetch plumbing shared by both widgets.
#[derive(Debug)]
struct WidgetCore<T> {
    fetcher: ListDataFetcher<T>,
    state: WidgetState,
}

impl<T: ListTransport> WidgetCore<T> {
    fn new(fetcher: ListDataFetcher<T>) -> Self {
        Self {
            fetcher,
            state: WidgetState::new(),
        }
    }

    fn refresh(&mut self, request: QuadrantResult<ItemsRequest>) -> Arc<WidgetSnapshot> {
        let ticket = self.state.begin_refresh();
        let outcome = request.and_then(|request| self.fetcher.fetch_items(&request));
        if let Err(error) = &outcome {
            tracing::warn!(generation = ticket.generation(), %error, "widget refresh failed");
        }
        self.state.resolve(ticket, outcome);
        self.state.snapshot()
    }
}

/// Quadrant chart over two configurable measures.
#[derive(Debug)]
pub struct QuadrantChartWidget<T> {
    config: QuadrantChartConfig,
    catalog: Option<MeasureCatalog>,
    core: WidgetCore<T>,
}

impl<T: ListTransport> QuadrantChartWidget<T> {
    #[must_use]
    pub fn new(config: QuadrantChartConfig, fetcher: ListDataFetcher<T>) -> Self {
        Self {
            config,
            catalog: None,
            core: WidgetCore::new(fetcher),
        }
    }

    #[must_use]
    pub fn config(&self) -> &QuadrantChartConfig {
        &self.config
    }

    #[must_use]
    pub fn snapshot(&self) -> Arc<WidgetSnapshot> {
        self.core.state.snapshot()
    }

    #[must_use]
    pub fn fetcher(&self) -> &ListDataFetcher<T> {
        &self.core.fetcher
    }

    /// Replaces the settings and refetches when the list, measures or item
    /// filter changed. Style-only changes show up on the next `view`.
    pub fn set_config(&mut self, config: QuadrantChartConfig) -> Option<Arc<WidgetSnapshot>> {
        let refetch = config.requires_refetch(&self.config);
        if config.list_name != self.config.list_name {
            self.catalog = None;
        }
        self.config = config;
        refetch.then(|| self.refresh())
    }

    /// Loads the numeric columns of the configured list. Once loaded, axis
    /// titles use column titles and selections are checked against it.
    pub fn load_measure_catalog(&mut self) -> QuadrantResult<&MeasureCatalog> {
        let list = self.config.list_name()?.to_owned();
        let catalog = self.core.fetcher.fetch_measure_catalog(&list)?;
        Ok(&*self.catalog.insert(catalog))
    }

    #[must_use]
    pub fn measure_catalog(&self) -> Option<&MeasureCatalog> {
        self.catalog.as_ref()
    }

    /// The query this widget would issue, or the configuration error that
    /// stops it before any request is sent.
    pub fn items_request(&self) -> QuadrantResult<ItemsRequest> {
        let axes = self.config.validate()?;
        if let Some(catalog) = &self.catalog {
            catalog.ensure_contains(&axes)?;
        }
        Ok(ItemsRequest::new(self.config.list_name()?)
            .with_axes(&axes)
            .with_item_id(self.config.item_id))
    }

    /// Fetches synchronously and publishes the result.
    pub fn refresh(&mut self) -> Arc<WidgetSnapshot> {
        let request = self.items_request();
        self.core.refresh(request)
    }

    /// Starts a refresh whose fetch runs elsewhere; pair with [`Self::complete_refresh`].
    pub fn begin_refresh(&mut self) -> (RefreshTicket, QuadrantResult<ItemsRequest>) {
        let request = self.items_request();
        (self.core.state.begin_refresh(), request)
    }

    /// Publishes a fetch started by [`Self::begin_refresh`]; `false` when a
    /// newer refresh has superseded it.
    pub fn complete_refresh(
        &mut self,
        ticket: RefreshTicket,
        outcome: QuadrantResult<Vec<Record>>,
    ) -> bool {
        self.core.state.resolve(ticket, outcome)
    }

    pub fn chart_options(&self, axes: &AxisSelection) -> ChartOptions {
        let (x_title, y_title) = match &self.catalog {
            Some(catalog) => (
                catalog.display_name(&axes.x_field).to_owned(),
                catalog.display_name(&axes.y_field).to_owned(),
            ),
            None => (axes.x_field.clone(), axes.y_field.clone()),
        };
        ChartOptionsBuilder::new(axes)
            .axis_titles(x_title, y_title)
            .size(self.config.chart_size)
            .overlay(self.config.overlay_labels())
            .build()
    }

    #[must_use]
    pub fn view(&self) -> ChartView {
        let snapshot = self.snapshot();
        let records = match &snapshot.phase {
            WidgetPhase::Loading => return ChartView::loading(),
            WidgetPhase::Failed(error) => return ChartView::error(error),
            WidgetPhase::Loaded(loaded) => &loaded.records,
        };

        let axes = match self.config.axes() {
            Ok(axes) => axes,
            Err(error) => return ChartView::error(&error),
        };
        let options = self.chart_options(&axes);
        let (x_title, y_title) = (options.x_axis.title.clone(), options.y_axis.title.clone());
        match ChartPresentation::build(records, &axes, options) {
            Ok(Some(presentation)) => ChartView::Ready(Box::new(presentation)),
            Ok(None) => ChartView::Empty {
                message: no_qualifying_data_message(&x_title, &y_title),
                total_records: records.len(),
            },
            Err(error) => ChartView::error(&error),
        }
    }
}

/// One row of the raw issue table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRow {
    pub id: i64,
    pub title: String,
    pub x_value: String,
    pub y_value: String,
}

/// Raw listing of every fetched record, chart-qualified or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueTable {
    pub columns: [String; 4],
    pub rows: Vec<IssueRow>,
    /// Shown in place of rows when the list returned nothing.
    pub empty_message: Option<String>,
}

impl IssueTable {
    #[must_use]
    pub fn build(list_name: &str, records: &[Record], axes: &AxisSelection) -> Self {
        let cell = |record: &Record, field: &str| {
            record
                .field(field)
                .and_then(|value| value.display_text())
                .unwrap_or_else(|| MISSING_VALUE_PLACEHOLDER.to_owned())
        };

        let rows = records
            .iter()
            .map(|record| IssueRow {
                id: record.id,
                title: record
                    .title
                    .clone()
                    .unwrap_or_else(|| NO_TITLE_PLACEHOLDER.to_owned()),
                x_value: cell(record, &axes.x_field),
                y_value: cell(record, &axes.y_field),
            })
            .collect::<Vec<_>>();

        let empty_message = rows
            .is_empty()
            .then(|| format!("No items found in list \"{list_name}\""));

        Self {
            columns: [
                "ID".to_owned(),
                "Title".to_owned(),
                axes.x_field.clone(),
                axes.y_field.clone(),
            ],
            rows,
            empty_message,
        }
    }
}

/// Body of the issue details widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum IssueDetailsView {
    Loading {
        message: String,
    },
    Error {
        kind: ErrorKind,
        message: String,
    },
    Ready {
        table: IssueTable,
        /// Present only when at least one record qualifies for the chart.
        chart: Option<Box<ChartPresentation>>,
    },
}

/// Raw table of a list followed by a quadrant chart over fixed measures.
#[derive(Debug)]
pub struct IssueDetailsWidget<T> {
    config: IssueDetailsConfig,
    core: WidgetCore<T>,
}

impl<T: ListTransport> IssueDetailsWidget<T> {
    #[must_use]
    pub fn new(config: IssueDetailsConfig, fetcher: ListDataFetcher<T>) -> Self {
        Self {
            config,
            core: WidgetCore::new(fetcher),
        }
    }

    #[must_use]
    pub fn config(&self) -> &IssueDetailsConfig {
        &self.config
    }

    #[must_use]
    pub fn snapshot(&self) -> Arc<WidgetSnapshot> {
        self.core.state.snapshot()
    }

    pub fn set_config(&mut self, config: IssueDetailsConfig) -> Option<Arc<WidgetSnapshot>> {
        let refetch = config.requires_refetch(&self.config);
        self.config = config;
        refetch.then(|| self.refresh())
    }

    pub fn items_request(&self) -> QuadrantResult<ItemsRequest> {
        let axes = self.config.validate()?;
        Ok(ItemsRequest::new(self.config.list_name()?)
            .with_axes(&axes)
            .with_item_id(self.config.item_id))
    }

    pub fn refresh(&mut self) -> Arc<WidgetSnapshot> {
        let request = self.items_request();
        self.core.refresh(request)
    }

    pub fn begin_refresh(&mut self) -> (RefreshTicket, QuadrantResult<ItemsRequest>) {
        let request = self.items_request();
        (self.core.state.begin_refresh(), request)
    }

    pub fn complete_refresh(
        &mut self,
        ticket: RefreshTicket,
        outcome: QuadrantResult<Vec<Record>>,
    ) -> bool {
        self.core.state.resolve(ticket, outcome)
    }

    #[must_use]
    pub fn view(&self) -> IssueDetailsView {
        let snapshot = self.snapshot();
        let records = match &snapshot.phase {
            WidgetPhase::Loading => {
                return IssueDetailsView::Loading {
                    message: LOADING_MESSAGE.to_owned(),
                };
            }
            WidgetPhase::Failed(error) => return issue_error(error),
            WidgetPhase::Loaded(loaded) => &loaded.records,
        };

        let axes = match self.config.axes() {
            Ok(axes) => axes,
            Err(error) => return issue_error(&error),
        };
        let table = IssueTable::build(self.config.list_name.trim(), records, &axes);
        let options = ChartOptionsBuilder::new(&axes)
            .size(self.config.chart_size)
            .overlay(Some(OverlayLabels::default()))
            .build();
        match ChartPresentation::build(records, &axes, options) {
            Ok(chart) => IssueDetailsView::Ready {
                table,
                chart: chart.map(Box::new),
            },
            Err(error) => issue_error(&error),
        }
    }
}

fn issue_error(error: &QuadrantError) -> IssueDetailsView {
    IssueDetailsView::Error {
        kind: error.kind(),
        message: error.to_string(),
    }
}
