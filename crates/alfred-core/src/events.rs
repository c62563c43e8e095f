use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;
use crate::recommend::{AnnotatedPoi, CategoryFilter};

/// Why the rotation window went back to its first page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetReason {
    CategoryChanged,
    RadiusChanged,
    SearchChanged,
    ReferenceChanged,
    ResultCountChanged,
}

/// Every state change of the recommendation view produces an Event.
/// The display surface renders from them; the CLI prints them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    WindowAdvanced {
        start_index: usize,
        total: usize,
        at: DateTime<Utc>,
    },
    SelectionReset {
        reason: ResetReason,
        total: usize,
        at: DateTime<Utc>,
    },
    LocationUpdated {
        coordinate: Option<Coordinate>,
        at: DateTime<Utc>,
    },
    /// The provider failed; the message is shown verbatim.
    LocationFailed {
        message: String,
        at: DateTime<Utc>,
    },
    PageSnapshot {
        category: CategoryFilter,
        radius_km: u32,
        has_reference: bool,
        start_index: usize,
        total: usize,
        items: Vec<AnnotatedPoi>,
        at: DateTime<Utc>,
    },
}
