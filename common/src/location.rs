use serde::{Deserialize, Serialize};

/// Geographic coordinates in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lng: f64,
}

/// Map center used when no user location is known (central Dhaka).
pub const DHAKA: GeoLocation = GeoLocation {
    lat: 23.8103,
    lng: 90.4125,
};

impl GeoLocation {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// True when both components are finite and inside the WGS84 ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Haversine distance in kilometers between two points.
    pub fn distance_km(&self, other: &GeoLocation) -> f64 {
        const EARTH_RADIUS_KM: f64 = 6371.0;

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let dlat = (other.lat - self.lat).to_radians();
        let dlng = (other.lng - self.lng).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();

        EARTH_RADIUS_KM * c
    }
}

/// Returns the coordinate only if it is present and valid.
pub fn valid_coordinate(location: Option<&GeoLocation>) -> Option<GeoLocation> {
    location.filter(|l| l.is_valid()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_same_point() {
        assert!(DHAKA.distance_km(&DHAKA) < 0.001);
    }

    #[test]
    fn test_distance_dhaka_to_chittagong() {
        let ctg = GeoLocation::new(22.3569, 91.7832);
        let dist = DHAKA.distance_km(&ctg);
        // Dhaka to Chittagong is ~215 km as the crow flies
        assert!((dist - 215.0).abs() < 20.0, "got {dist}");
    }

    #[test]
    fn test_validity() {
        assert!(DHAKA.is_valid());
        assert!(!GeoLocation::new(f64::NAN, 90.0).is_valid());
        assert!(!GeoLocation::new(91.0, 90.0).is_valid());
        assert!(!GeoLocation::new(23.0, 181.0).is_valid());
        assert!(!GeoLocation::new(23.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn test_valid_coordinate() {
        assert_eq!(valid_coordinate(Some(&DHAKA)), Some(DHAKA));
        assert_eq!(valid_coordinate(None), None);
        assert_eq!(valid_coordinate(Some(&GeoLocation::new(100.0, 0.0))), None);
    }
}
