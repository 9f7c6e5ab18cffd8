use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::core::Record;
use crate::error::{QuadrantError, QuadrantResult};

/// Records of one successful fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedRecords {
    pub records: Vec<Record>,
    pub fetched_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WidgetPhase {
    Loading,
    Failed(QuadrantError),
    Loaded(LoadedRecords),
}

/// Immutable display state of one widget.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetSnapshot {
    pub generation: u64,
    pub phase: WidgetPhase,
}

impl WidgetSnapshot {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, WidgetPhase::Loading)
    }

    #[must_use]
    pub fn error(&self) -> Option<&QuadrantError> {
        match &self.phase {
            WidgetPhase::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Fetched records; empty unless the last fetch succeeded.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        match &self.phase {
            WidgetPhase::Loaded(loaded) => &loaded.records,
            _ => &[],
        }
    }
}

/// Proof that a refresh was started; carries its generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a refresh ticket must be resolved with `WidgetState::resolve`"]
pub struct RefreshTicket {
    generation: u64,
}

impl RefreshTicket {
    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// Owner of a widget's snapshot.
///
/// Every refresh bumps the generation. A ticket older than the latest one is
/// stale: resolving it leaves the snapshot untouched, so a slow earlier fetch
/// can never overwrite a newer result.
#[derive(Debug)]
pub struct WidgetState {
    latest_generation: u64,
    snapshot: Arc<WidgetSnapshot>,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self {
            latest_generation: 0,
            snapshot: Arc::new(WidgetSnapshot {
                generation: 0,
                phase: WidgetPhase::Loading,
            }),
        }
    }
}

impl WidgetState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn snapshot(&self) -> Arc<WidgetSnapshot> {
        Arc::clone(&self.snapshot)
    }

    #[must_use]
    pub fn latest_generation(&self) -> u64 {
        self.latest_generation
    }

    /// Starts a refresh and shows the loading state. The previous records are
    /// dropped from the snapshot.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.latest_generation += 1;
        self.snapshot = Arc::new(WidgetSnapshot {
            generation: self.latest_generation,
            phase: WidgetPhase::Loading,
        });
        RefreshTicket {
            generation: self.latest_generation,
        }
    }

    #[must_use]
    pub fn is_current(&self, ticket: RefreshTicket) -> bool {
        ticket.generation == self.latest_generation
    }

    /// Publishes the outcome of `ticket`'s fetch. Returns `false` and keeps the
    /// current snapshot when the ticket is stale.
    pub fn resolve(&mut self, ticket: RefreshTicket, outcome: QuadrantResult<Vec<Record>>) -> bool {
        if !self.is_current(ticket) {
            tracing::warn!(
                stale = ticket.generation,
                latest = self.latest_generation,
                "discarding out-of-order fetch result"
            );
            return false;
        }

        let phase = match outcome {
            Ok(records) => WidgetPhase::Loaded(LoadedRecords {
                records,
                fetched_at: Utc::now(),
            }),
            Err(error) => WidgetPhase::Failed(error),
        };
        self.snapshot = Arc::new(WidgetSnapshot {
            generation: ticket.generation,
            phase,
        });
        true
    }
}
