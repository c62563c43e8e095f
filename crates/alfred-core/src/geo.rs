//! Great-circle distance between coordinates.
//!
//! Inputs are not range-checked. Callers are responsible for passing finite
//! degrees within [-90, 90] latitude and [-180, 180] longitude; anything else
//! yields a well-defined but meaningless distance.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A (latitude, longitude) pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether both components are finite and inside their valid ranges.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Distance to `other` in kilometers.
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        haversine_km(self, other)
    }
}

/// Haversine distance in kilometers.
///
/// The haversine term is clamped to [0, 1] so floating-point overshoot near
/// antipodal points (or out-of-range latitudes) cannot produce NaN.
pub fn haversine_km(a: &Coordinate, b: &Coordinate) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();

    let hav = (d_lat / 2.0).sin().powi(2) + (d_lon / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
    2.0 * EARTH_RADIUS_KM * hav.clamp(0.0, 1.0).sqrt().asin()
}

/// Human-readable distance: whole meters below 1 km, one decimal above.
pub fn format_distance(distance_km: Option<f64>) -> String {
    match distance_km {
        None => "unknown distance".to_string(),
        Some(km) if km < 1.0 => format!("{} m", (km * 1000.0).round() as i64),
        Some(km) => format!("{km:.1} km"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const LIMA: Coordinate = Coordinate::new(-12.0464, -77.0428);
    const CUSCO: Coordinate = Coordinate::new(-13.5320, -71.9675);

    #[test]
    fn lima_to_cusco() {
        let d = haversine_km(&LIMA, &CUSCO);
        assert!((d - 573.0).abs() < 5.0, "Expected ~573 km, got {d}");
    }

    #[test]
    fn identical_points_are_exactly_zero() {
        assert_eq!(haversine_km(&LIMA, &LIMA), 0.0);
    }

    #[test]
    fn antipodal_points_are_half_circumference() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 180.0);
        let d = haversine_km(&a, &b);
        assert!(d.is_finite());
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    #[test]
    fn format_distance_variants() {
        assert_eq!(format_distance(None), "unknown distance");
        assert_eq!(format_distance(Some(0.25)), "250 m");
        assert_eq!(format_distance(Some(0.0)), "0 m");
        assert_eq!(format_distance(Some(2.44)), "2.4 km");
        assert_eq!(format_distance(Some(1.0)), "1.0 km");
    }

    #[test]
    fn validity_check() {
        assert!(LIMA.is_valid());
        assert!(!Coordinate::new(91.0, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, f64::NAN).is_valid());
    }

    fn coordinate() -> impl Strategy<Value = Coordinate> {
        (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lon)| Coordinate::new(lat, lon))
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(a in coordinate(), b in coordinate()) {
            let ab = haversine_km(&a, &b);
            let ba = haversine_km(&b, &a);
            prop_assert!((ab - ba).abs() < 1e-6);
        }

        #[test]
        fn distance_to_self_is_zero(a in coordinate()) {
            prop_assert_eq!(haversine_km(&a, &a), 0.0);
        }

        #[test]
        fn distance_is_finite_and_bounded(a in coordinate(), b in coordinate()) {
            let d = haversine_km(&a, &b);
            prop_assert!(d.is_finite());
            prop_assert!(d >= 0.0);
            prop_assert!(d <= std::f64::consts::PI * EARTH_RADIUS_KM + 1e-6);
        }

        #[test]
        fn out_of_range_finite_input_never_yields_nan(
            lat1 in -1000.0f64..1000.0, lon1 in -1000.0f64..1000.0,
            lat2 in -1000.0f64..1000.0, lon2 in -1000.0f64..1000.0,
        ) {
            let d = haversine_km(&Coordinate::new(lat1, lon1), &Coordinate::new(lat2, lon2));
            prop_assert!(!d.is_nan());
        }
    }
}
