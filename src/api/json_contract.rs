use serde::{Deserialize, Serialize};

use crate::error::{QuadrantError, QuadrantResult};

use super::{ChartView, IssueDetailsView};

pub const CHART_VIEW_JSON_SCHEMA_V1: u32 = 1;
pub const ISSUE_DETAILS_VIEW_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartViewJsonContractV1 {
    pub schema_version: u32,
    pub view: ChartView,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueDetailsViewJsonContractV1 {
    pub schema_version: u32,
    pub view: IssueDetailsView,
}

impl ChartView {
    pub fn to_json_contract_v1_pretty(&self) -> QuadrantResult<String> {
        let payload = ChartViewJsonContractV1 {
            schema_version: CHART_VIEW_JSON_SCHEMA_V1,
            view: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            QuadrantError::InvalidData(format!("failed to serialize chart view contract v1: {e}"))
        })
    }

    /// Accepts either a bare view or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> QuadrantResult<Self> {
        if let Ok(view) = serde_json::from_str::<ChartView>(input) {
            return Ok(view);
        }
        let payload: ChartViewJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            QuadrantError::InvalidData(format!("failed to parse chart view json payload: {e}"))
        })?;
        if payload.schema_version != CHART_VIEW_JSON_SCHEMA_V1 {
            return Err(QuadrantError::InvalidData(format!(
                "unsupported chart view schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.view)
    }
}

impl IssueDetailsView {
    pub fn to_json_contract_v1_pretty(&self) -> QuadrantResult<String> {
        let payload = IssueDetailsViewJsonContractV1 {
            schema_version: ISSUE_DETAILS_VIEW_JSON_SCHEMA_V1,
            view: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            QuadrantError::InvalidData(format!(
                "failed to serialize issue details view contract v1: {e}"
            ))
        })
    }

    pub fn from_json_compat_str(input: &str) -> QuadrantResult<Self> {
        if let Ok(view) = serde_json::from_str::<IssueDetailsView>(input) {
            return Ok(view);
        }
        let payload: IssueDetailsViewJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            QuadrantError::InvalidData(format!(
                "failed to parse issue details view json payload: {e}"
            ))
        })?;
        if payload.schema_version != ISSUE_DETAILS_VIEW_JSON_SCHEMA_V1 {
            return Err(QuadrantError::InvalidData(format!(
                "unsupported issue details view schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.view)
    }
}
