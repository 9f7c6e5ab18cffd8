mod chart_options;
mod config;
mod json_contract;
mod points;
mod scene;
mod widget_state;
mod widgets;

pub use chart_options::{
    AxisOptions, ChartDimensions, ChartOptions, ChartOptionsBuilder, POINT_HOVER_RADIUS_PX,
    POINT_RADIUS_PX, tooltip_label,
};
pub use config::{
    DEFAULT_ISSUE_LIST, DEFAULT_ISSUE_X_MEASURE, DEFAULT_ISSUE_Y_MEASURE, IssueDetailsConfig,
    QuadrantChartConfig,
};
pub use json_contract::{
    CHART_VIEW_JSON_SCHEMA_V1, ChartViewJsonContractV1, ISSUE_DETAILS_VIEW_JSON_SCHEMA_V1,
    IssueDetailsViewJsonContractV1,
};
pub use points::{QuadrantPoint, build_points, quadrant_counts};
pub use scene::{SceneBuilder, SceneStyle};
pub use widget_state::{LoadedRecords, RefreshTicket, WidgetPhase, WidgetSnapshot, WidgetState};
pub use widgets::{
    ChartPresentation, ChartView, IssueDetailsView, IssueDetailsWidget, IssueRow, IssueTable,
    LOADING_MESSAGE, MISSING_VALUE_PLACEHOLDER, NO_TITLE_PLACEHOLDER, QuadrantChartWidget,
    no_qualifying_data_message,
};
