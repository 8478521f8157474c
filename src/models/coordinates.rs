use crate::constants::EARTH_RADIUS_KM;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Result<Self, String> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(format!(
                "Invalid latitude: {} (must be between -90 and 90)",
                lat
            ));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(format!(
                "Invalid longitude: {} (must be between -180 and 180)",
                lng
            ));
        }
        Ok(Coordinates { lat, lng })
    }

    /// Calculate distance between two coordinates using Haversine formula
    /// Returns distance in kilometers
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        let lat1_rad = self.lat.to_radians();
        let lat2_rad = other.lat.to_radians();
        let delta_lat = (other.lat - self.lat).to_radians();
        let delta_lng = (other.lng - self.lng).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }

    /// Extra kilometers travelled going `self -> via -> destination`
    /// instead of straight to `destination`.
    pub fn detour_via(&self, via: &Coordinates, destination: &Coordinates) -> f64 {
        self.distance_to(via) + via.distance_to(destination) - self.distance_to(destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DISTANCE_EPSILON_KM;

    #[test]
    fn test_coordinates_validation() {
        assert!(Coordinates::new(41.1579, -8.6291).is_ok());
        assert!(Coordinates::new(-90.0, -180.0).is_ok());
        assert!(Coordinates::new(90.0, 180.0).is_ok());
        assert!(Coordinates::new(91.0, 0.0).is_err()); // Invalid lat
        assert!(Coordinates::new(0.0, 181.0).is_err()); // Invalid lng
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_distance_calculation() {
        let porto = Coordinates::new(41.1579, -8.6291).unwrap();
        let lisbon = Coordinates::new(38.7223, -9.1393).unwrap();

        let distance = porto.distance_to(&lisbon);
        // Porto to Lisbon is roughly 274 km as the crow flies
        assert!((distance - 274.0).abs() < 5.0, "got {}", distance);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let pairs = [
            ((41.1579, -8.6291), (38.7223, -9.1393)),
            ((48.8566, 2.3522), (51.5074, -0.1278)),
            ((-33.8688, 151.2093), (35.6762, 139.6503)),
            ((0.0, 179.9), (0.0, -179.9)),
        ];

        for ((lat1, lng1), (lat2, lng2)) in pairs {
            let a = Coordinates::new(lat1, lng1).unwrap();
            let b = Coordinates::new(lat2, lng2).unwrap();
            assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < DISTANCE_EPSILON_KM);
        }
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let p = Coordinates::new(41.1579, -8.6291).unwrap();
        assert_eq!(p.distance_to(&p), 0.0);
    }

    #[test]
    fn test_detour_is_never_negative() {
        let start = Coordinates::new(41.1579, -8.6291).unwrap();
        let dest = Coordinates::new(38.7223, -9.1393).unwrap();
        let stations = [
            (40.2033, -8.4103), // Coimbra, close to the line
            (40.6405, -8.6538), // Aveiro
            (41.5454, -8.4265), // Braga, behind the start
            (start.lat, start.lng),
            (dest.lat, dest.lng),
        ];

        for (lat, lng) in stations {
            let via = Coordinates::new(lat, lng).unwrap();
            assert!(start.detour_via(&via, &dest) >= -DISTANCE_EPSILON_KM);
        }
    }

    #[test]
    fn test_detour_on_endpoint_is_zero() {
        let start = Coordinates::new(41.1579, -8.6291).unwrap();
        let dest = Coordinates::new(38.7223, -9.1393).unwrap();
        assert!(start.detour_via(&start, &dest).abs() < DISTANCE_EPSILON_KM);
    }
}
