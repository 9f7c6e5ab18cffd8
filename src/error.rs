use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type QuadrantResult<T> = Result<T, QuadrantError>;

/// Configuration the widgets need before any fetch is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingSetting {
    ListName,
    Measures,
}

impl MissingSetting {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ListName => "List name not specified",
            Self::Measures => {
                "Measures not selected: choose both an X-axis and a Y-axis measure"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuadrantError {
    #[error("{}", .0.message())]
    MissingConfiguration(MissingSetting),

    #[error("Failed to fetch list items: {status} {reason}")]
    Transport { status: u16, reason: String },

    #[error("{0}")]
    Unexpected(String),

    #[error("invalid chart size: {0} (expected 1..=10)")]
    InvalidChartSize(u8),

    #[error("measure `{field}` is not a numeric column of list `{list}`")]
    UnknownMeasure { list: String, field: String },

    #[error("invalid data: {0}")]
    InvalidData(String),
}

/// Coarse category shown next to an error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Configuration,
    Transport,
    Unexpected,
}

impl QuadrantError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingConfiguration(_)
            | Self::InvalidChartSize(_)
            | Self::UnknownMeasure { .. } => ErrorKind::Configuration,
            Self::Transport { .. } => ErrorKind::Transport,
            Self::Unexpected(_) | Self::InvalidData(_) => ErrorKind::Unexpected,
        }
    }
}
