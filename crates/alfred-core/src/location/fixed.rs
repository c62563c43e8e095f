use async_trait::async_trait;

use super::LocationProvider;
use crate::error::LocationError;
use crate::geo::Coordinate;

/// Provider answering with a preconfigured result.
///
/// Used by the CLI (coordinates from flags or config) and by tests.
#[derive(Debug, Clone, PartialEq)]
pub enum FixedLocationProvider {
    At(Coordinate),
    Denied,
    Failing(String),
}

impl FixedLocationProvider {
    /// `At` when a coordinate is known, `Denied` otherwise.
    pub fn from_option(coordinate: Option<Coordinate>) -> Self {
        coordinate.map_or(Self::Denied, Self::At)
    }
}

#[async_trait]
impl LocationProvider for FixedLocationProvider {
    fn current_coordinate(&self) -> Option<Coordinate> {
        match self {
            Self::At(c) => Some(*c),
            _ => None,
        }
    }

    fn permission_granted(&self) -> bool {
        !matches!(self, Self::Denied)
    }

    async fn refresh(&self) -> Result<Coordinate, LocationError> {
        match self {
            Self::At(c) => Ok(*c),
            Self::Denied => Err(LocationError::PermissionDenied),
            Self::Failing(message) => Err(LocationError::Unavailable(message.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HERE: Coordinate = Coordinate::new(-12.0464, -77.0428);

    #[test]
    fn known_coordinate_is_current_and_granted() {
        let provider = FixedLocationProvider::At(HERE);
        assert_eq!(provider.current_coordinate(), Some(HERE));
        assert!(provider.permission_granted());
    }

    #[test]
    fn denied_provider_has_no_coordinate_or_permission() {
        let provider = FixedLocationProvider::from_option(None);
        assert_eq!(provider, FixedLocationProvider::Denied);
        assert_eq!(provider.current_coordinate(), None);
        assert!(!provider.permission_granted());
    }

    #[test]
    fn failing_provider_is_permitted_but_has_no_fix() {
        let provider = FixedLocationProvider::Failing("no signal".into());
        assert_eq!(provider.current_coordinate(), None);
        assert!(provider.permission_granted());
    }

    #[tokio::test]
    async fn refresh_reports_configured_result() {
        assert_eq!(FixedLocationProvider::At(HERE).refresh().await, Ok(HERE));
        assert_eq!(
            FixedLocationProvider::Denied.refresh().await,
            Err(LocationError::PermissionDenied)
        );
        assert_eq!(
            FixedLocationProvider::Failing("no signal".into()).refresh().await,
            Err(LocationError::Unavailable("no signal".into()))
        );
    }
}
