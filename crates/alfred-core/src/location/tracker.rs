use std::sync::Arc;

use chrono::Utc;
use tokio_util::sync::CancellationToken;

use super::{LocationProvider, PermissionStatus};
use crate::error::LocationError;
use crate::events::Event;
use crate::geo::Coordinate;

/// View-facing location state.
///
/// A refresh never blocks the rest of the view: callers either await
/// [`LocationTracker::refresh`] directly, or run the provider request
/// elsewhere and report back through [`LocationTracker::begin`] /
/// [`LocationTracker::apply`] / [`LocationTracker::abandon`].
pub struct LocationTracker {
    provider: Arc<dyn LocationProvider>,
    coordinate: Option<Coordinate>,
    permission: PermissionStatus,
    is_requesting: bool,
    error: Option<String>,
}

impl LocationTracker {
    /// Seeded with whatever the provider already knows, so a view can show
    /// distances before the first refresh completes.
    pub fn new(provider: Arc<dyn LocationProvider>) -> Self {
        let permission = if provider.permission_granted() {
            PermissionStatus::Granted
        } else {
            PermissionStatus::Unknown
        };
        let coordinate = provider.current_coordinate();
        Self {
            provider,
            coordinate,
            permission,
            is_requesting: false,
            error: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn provider(&self) -> Arc<dyn LocationProvider> {
        Arc::clone(&self.provider)
    }

    pub fn coordinate(&self) -> Option<Coordinate> {
        self.coordinate
    }

    pub fn permission(&self) -> PermissionStatus {
        self.permission
    }

    pub fn has_permission(&self) -> bool {
        self.permission == PermissionStatus::Granted
    }

    pub fn is_requesting(&self) -> bool {
        self.is_requesting
    }

    /// Message of the last failed refresh, unchanged from the provider.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Mark a request as in flight and clear the previous error.
    pub fn begin(&mut self) {
        self.is_requesting = true;
        self.error = None;
    }

    /// Record the outcome of a provider request.
    pub fn apply(&mut self, result: Result<Coordinate, LocationError>) -> Event {
        self.is_requesting = false;
        match result {
            Ok(coordinate) => {
                tracing::info!(
                    latitude = coordinate.latitude,
                    longitude = coordinate.longitude,
                    "location updated"
                );
                self.permission = PermissionStatus::Granted;
                self.coordinate = Some(coordinate);
                Event::LocationUpdated {
                    coordinate: self.coordinate,
                    at: Utc::now(),
                }
            }
            Err(LocationError::PermissionDenied) => {
                tracing::info!("location permission denied");
                self.permission = PermissionStatus::Denied;
                self.coordinate = None;
                Event::LocationUpdated {
                    coordinate: None,
                    at: Utc::now(),
                }
            }
            Err(LocationError::Unavailable(message)) => {
                tracing::warn!(%message, "location refresh failed");
                self.coordinate = None;
                self.error = Some(message.clone());
                Event::LocationFailed {
                    message,
                    at: Utc::now(),
                }
            }
        }
    }

    /// Forget an in-flight request without touching the last known state.
    pub fn abandon(&mut self) {
        if self.is_requesting {
            tracing::debug!("location request cancelled");
        }
        self.is_requesting = false;
    }

    /// Request a fresh coordinate, giving up when `cancel` fires.
    ///
    /// Returns `None` when cancelled; the previous coordinate is kept.
    pub async fn refresh(&mut self, cancel: &CancellationToken) -> Option<Event> {
        self.begin();
        let provider = Arc::clone(&self.provider);
        let result = tokio::select! {
            _ = cancel.cancelled() => None,
            r = provider.refresh() => Some(r),
        };
        match result {
            Some(r) => Some(self.apply(r)),
            None => {
                self.abandon();
                None
            }
        }
    }
}

impl std::fmt::Debug for LocationTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationTracker")
            .field("coordinate", &self.coordinate)
            .field("permission", &self.permission)
            .field("is_requesting", &self.is_requesting)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::FixedLocationProvider;

    fn tracker(provider: FixedLocationProvider) -> LocationTracker {
        LocationTracker::new(Arc::new(provider))
    }

    #[tokio::test]
    async fn successful_refresh_grants_permission() {
        let here = Coordinate::new(-12.0464, -77.0428);
        let mut t = tracker(FixedLocationProvider::At(here));
        let event = t.refresh(&CancellationToken::new()).await;
        assert!(matches!(
            event,
            Some(Event::LocationUpdated { coordinate: Some(c), .. }) if c == here
        ));
        assert_eq!(t.coordinate(), Some(here));
        assert!(t.has_permission());
        assert!(!t.is_requesting());
        assert!(t.error().is_none());
    }

    #[test]
    fn new_tracker_is_seeded_from_provider() {
        let here = Coordinate::new(-12.0464, -77.0428);
        let t = tracker(FixedLocationProvider::At(here));
        assert_eq!(t.coordinate(), Some(here));
        assert!(t.has_permission());
        assert!(!t.is_requesting());

        let t = tracker(FixedLocationProvider::Denied);
        assert_eq!(t.coordinate(), None);
        assert_eq!(t.permission(), PermissionStatus::Unknown);
    }

    #[tokio::test]
    async fn denied_permission_clears_coordinate_without_error() {
        let mut t = tracker(FixedLocationProvider::Denied);
        t.refresh(&CancellationToken::new()).await;
        assert_eq!(t.coordinate(), None);
        assert_eq!(t.permission(), PermissionStatus::Denied);
        assert!(t.error().is_none());
    }

    #[tokio::test]
    async fn failure_surfaces_message_verbatim() {
        let mut t = tracker(FixedLocationProvider::Failing("GPS timed out".into()));
        let event = t.refresh(&CancellationToken::new()).await;
        assert!(matches!(
            event,
            Some(Event::LocationFailed { ref message, .. }) if message == "GPS timed out"
        ));
        assert_eq!(t.error(), Some("GPS timed out"));
        assert_eq!(t.coordinate(), None);
    }

    #[tokio::test]
    async fn new_request_clears_previous_error() {
        let mut t = tracker(FixedLocationProvider::Failing("boom".into()));
        t.refresh(&CancellationToken::new()).await;
        t.begin();
        assert!(t.error().is_none());
        assert!(t.is_requesting());
    }

    #[tokio::test]
    async fn cancelled_refresh_keeps_previous_state() {
        let here = Coordinate::new(1.0, 2.0);
        let mut t = tracker(FixedLocationProvider::At(here));
        t.refresh(&CancellationToken::new()).await;

        let cancel = CancellationToken::new();
        cancel.cancel();
        // Both branches are ready; either way the coordinate stays the same.
        t.refresh(&cancel).await;
        assert_eq!(t.coordinate(), Some(here));
        assert!(!t.is_requesting());
    }
}
