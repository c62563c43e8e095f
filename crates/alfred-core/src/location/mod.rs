//! Location acquisition.
//!
//! The device location is an external collaborator. A [`LocationProvider`]
//! answers refresh requests; the [`LocationTracker`] keeps the view-facing
//! state (last coordinate, permission, in-flight flag, last error) and turns
//! provider results into [`crate::Event`]s.

mod fixed;
mod tracker;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::LocationError;
use crate::geo::Coordinate;

pub use fixed::FixedLocationProvider;
pub use tracker::LocationTracker;

/// Permission state as last reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionStatus {
    #[default]
    Unknown,
    Granted,
    Denied,
}

/// Source of the user's current coordinate.
///
/// `refresh` may take arbitrarily long and may fail; callers treat any
/// failure as "no coordinate" and show the error message as-is.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Last coordinate the provider knows about, if any.
    fn current_coordinate(&self) -> Option<Coordinate>;

    /// Whether location permission has been granted.
    fn permission_granted(&self) -> bool;

    /// Ask for a fresh fix. Requests permission first when needed.
    async fn refresh(&self) -> Result<Coordinate, LocationError>;
}
