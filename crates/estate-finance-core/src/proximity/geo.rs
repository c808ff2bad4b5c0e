use serde::{Deserialize, Serialize};

use crate::error::EstateFinanceError;
use crate::EstateFinanceResult;

/// Mean Earth radius used for great-circle distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A WGS-84 coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Latitude in [-90, 90], longitude in [-180, 180], both finite.
    pub fn validate(&self, field: &str) -> EstateFinanceResult<()> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(EstateFinanceError::InvalidInput {
                field: format!("{field}.lat"),
                reason: format!("Latitude {} must be within [-90, 90]", self.lat),
            });
        }
        if !self.lng.is_finite() || !(-180.0..=180.0).contains(&self.lng) {
            return Err(EstateFinanceError::InvalidInput {
                field: format!("{field}.lng"),
                reason: format!("Longitude {} must be within [-180, 180]", self.lng),
            });
        }
        Ok(())
    }
}

/// Great-circle distance between two points, in kilometres.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    // clamp guards asin against h drifting past 1.0 for antipodal points
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

/// Validated, display-rounded distance between two points, in kilometres.
pub fn distance_km(from: GeoPoint, to: GeoPoint) -> EstateFinanceResult<f64> {
    from.validate("from")?;
    to.validate("to")?;
    Ok(round_km(haversine_km(from, to)))
}

/// Round a distance to two decimals for display.
pub fn round_km(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCRA: GeoPoint = GeoPoint {
        lat: 5.6037,
        lng: -0.1870,
    };
    const KUMASI: GeoPoint = GeoPoint {
        lat: 6.6885,
        lng: -1.6244,
    };

    #[test]
    fn test_identical_points_are_zero() {
        assert_eq!(haversine_km(ACCRA, ACCRA), 0.0);
    }

    #[test]
    fn test_accra_to_kumasi() {
        // roughly 200 km as the crow flies
        let d = haversine_km(ACCRA, KUMASI);
        assert!(d > 190.0 && d < 210.0, "got {d}");
    }

    #[test]
    fn test_symmetric() {
        let ab = haversine_km(ACCRA, KUMASI);
        let ba = haversine_km(KUMASI, ACCRA);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let d = haversine_km(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 0.0));
        assert!((d - 111.19).abs() < 0.01, "got {d}");
    }

    #[test]
    fn test_antipodal_is_half_circumference() {
        let d = haversine_km(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 180.0));
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert!(GeoPoint::new(91.0, 0.0).validate("origin").is_err());
        assert!(GeoPoint::new(0.0, -180.5).validate("origin").is_err());
        assert!(GeoPoint::new(f64::NAN, 0.0).validate("origin").is_err());
        assert!(ACCRA.validate("origin").is_ok());
    }

    #[test]
    fn test_distance_km_is_rounded() {
        let d = distance_km(ACCRA, KUMASI).unwrap();
        assert_eq!(d, round_km(haversine_km(ACCRA, KUMASI)));
        assert_eq!((d * 100.0).round() / 100.0, d);
    }

    #[test]
    fn test_distance_km_validates_both_ends() {
        let err = distance_km(ACCRA, GeoPoint::new(0.0, 181.0)).unwrap_err();
        assert!(err.to_string().contains("to.lng"));
    }

    #[test]
    fn test_round_km() {
        assert_eq!(round_km(1.23456), 1.23);
        assert_eq!(round_km(2.346), 2.35);
    }
}
