//! Fixed-point geographic locations
//!
//! Positions cross the API boundary as a pair of signed 32-bit integers holding WGS84 degrees
//! scaled by 1e7, the same encoding used by autopilot telemetry and most GNSS receivers. The
//! encoding resolves roughly 1.1 cm at the equator, which is far below the resolution of the
//! magnetic tables. All interpolation math happens in floating point after [`Location::latitude_deg`]
//! and [`Location::longitude_deg`] convert back to degrees.
use std::fmt::{self, Display};

use ::nav_types::WGS84;
use serde::{Deserialize, Serialize};

/// Scale between fixed-point units and degrees
pub const DEGREES_TO_FIXED: f64 = 1e7;
/// Scale between degrees and fixed-point units
pub const FIXED_TO_DEGREES: f64 = 1e-7;

/// A WGS84 latitude/longitude pair stored in 1e-7 degree units
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Latitude in 1e-7 degrees
    pub lat: i32,
    /// Longitude in 1e-7 degrees
    pub lng: i32,
}

impl Location {
    /// Build a location directly from fixed-point components
    pub const fn new(lat: i32, lng: i32) -> Self {
        Location { lat, lng }
    }
    /// Encode a latitude/longitude pair given in degrees.
    ///
    /// Values are rounded to the nearest fixed-point unit, so the round trip through
    /// [`Location::latitude_deg`] is accurate to half a unit (5e-8 degrees). Inputs beyond the
    /// `i32` range saturate; NaN encodes as zero.
    ///
    /// # Example
    /// ```rust
    /// use geomag::Location;
    /// let berlin = Location::from_degrees(52.52, 13.405);
    /// assert_eq!(berlin.lat, 525_200_000);
    /// assert_eq!(berlin.lng, 134_050_000);
    /// ```
    pub fn from_degrees(latitude: f64, longitude: f64) -> Self {
        Location {
            lat: (latitude * DEGREES_TO_FIXED).round() as i32,
            lng: (longitude * DEGREES_TO_FIXED).round() as i32,
        }
    }
    /// Latitude in degrees
    pub fn latitude_deg(&self) -> f64 {
        self.lat as f64 * FIXED_TO_DEGREES
    }
    /// Longitude in degrees
    pub fn longitude_deg(&self) -> f64 {
        self.lng as f64 * FIXED_TO_DEGREES
    }
    /// Convert to a `nav-types` geodetic position on the ellipsoid surface
    ///
    /// # Panics
    /// `nav-types` rejects latitudes beyond +/-90 degrees.
    pub fn to_wgs84(&self) -> WGS84<f64> {
        WGS84::from_degrees_and_meters(self.latitude_deg(), self.longitude_deg(), 0.0)
    }
}

impl From<WGS84<f64>> for Location {
    fn from(position: WGS84<f64>) -> Self {
        // Altitude is dropped; the tables describe the field at sea level only.
        Location::from_degrees(position.latitude_degrees(), position.longitude_degrees())
    }
}

impl From<(f64, f64)> for Location {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Location::from_degrees(latitude, longitude)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.7}, {:.7})",
            self.latitude_deg(),
            self.longitude_deg()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn fixed_point_round_trip() {
        let points = [
            (52.52, 13.405),
            (35.6892, 51.389),
            (-33.8688, 151.2093),
            (0.1807, -78.4678),
            (-89.9999999, 179.9999999),
            (90.0, -180.0),
        ];
        for (lat, lon) in points {
            let loc = Location::from_degrees(lat, lon);
            assert!((loc.latitude_deg() - lat).abs() <= 1e-7);
            assert!((loc.longitude_deg() - lon).abs() <= 1e-7);
        }
    }
    #[test]
    fn rounds_to_nearest_unit() {
        let loc = Location::from_degrees(1.000_000_06, -1.000_000_06);
        assert_eq!(loc.lat, 10_000_001);
        assert_eq!(loc.lng, -10_000_001);
    }
    #[test]
    fn saturates_out_of_range() {
        let loc = Location::from_degrees(1.0e6, -1.0e6);
        assert_eq!(loc.lat, i32::MAX);
        assert_eq!(loc.lng, i32::MIN);
        assert_eq!(Location::from_degrees(f64::NAN, 0.0).lat, 0);
    }
    #[test]
    fn wgs84_conversion() {
        let loc = Location::from_degrees(45.0, -75.0);
        let wgs84 = loc.to_wgs84();
        assert_approx_eq!(wgs84.latitude_degrees(), 45.0, 1e-9);
        assert_approx_eq!(wgs84.longitude_degrees(), -75.0, 1e-9);
        let back = Location::from(wgs84);
        assert_eq!(back, loc);
    }
    #[test]
    fn display() {
        let loc = Location::new(525_200_000, 134_050_000);
        assert_eq!(format!("{}", loc), "(52.5200000, 13.4050000)");
    }
}
