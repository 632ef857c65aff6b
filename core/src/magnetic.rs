//! World Magnetic Model lookup at sea level
//!
//! This module binds the embedded [`crate::tables`] snapshot into a process-wide [`WMM_GRID`]
//! and exposes the query surface used by compass calibration and heading correction code:
//!
//! - [`magnetic_field`]: intensity, declination, inclination and an in-bounds flag
//! - [`magnetic_declination`]: declination only
//! - [`earth_field_vector`]: the North-East-Down field vector at a fixed-point [`Location`]
//! - [`true_heading`] / [`magnetic_heading`]: compass heading correction
//!
//! The grid is built at compile time, so there is no initialization step and no query touches
//! the heap. All functions are safe to call concurrently and from interrupt context.
//!
//! The model ignores altitude (the WGS84 ellipsoid surface is assumed) and time (the tables are a
//! frozen snapshot). Accuracy is bounded by the 10 degree grid: expect errors of a degree or two
//! in declination at mid latitudes and considerably more close to the magnetic poles.
use nalgebra::Vector3;

use crate::grid::{FieldGrid, FieldSample, GridGeometry};
use crate::location::Location;
use crate::tables::{
    DECLINATION_TABLE, INCLINATION_TABLE, INTENSITY_TABLE, LAT_STEPS, LON_STEPS, MIN_LATITUDE,
    MIN_LONGITUDE, RESOLUTION,
};
use crate::wrap_to_360;

/// Grid type of the embedded world tables
pub type WmmGrid = FieldGrid<LAT_STEPS, LON_STEPS>;

/// Geometry of the embedded world tables
pub const WMM_GEOMETRY: GridGeometry = GridGeometry {
    min_latitude: MIN_LATITUDE,
    min_longitude: MIN_LONGITUDE,
    resolution: RESOLUTION,
};
/// Highest latitude covered by the tables, degrees
pub const MAX_LATITUDE: f32 = MIN_LATITUDE + (LAT_STEPS - 1) as f32 * RESOLUTION;
/// Highest longitude covered by the tables, degrees
pub const MAX_LONGITUDE: f32 = MIN_LONGITUDE + (LON_STEPS - 1) as f32 * RESOLUTION;

/// The embedded world grid
pub static WMM_GRID: WmmGrid = FieldGrid::new(
    WMM_GEOMETRY,
    DECLINATION_TABLE,
    INCLINATION_TABLE,
    INTENSITY_TABLE,
);

/// Earth's magnetic field parameters at a latitude/longitude.
///
/// Inputs outside +/-90 degrees latitude or +/-180 degrees longitude are clamped onto the table
/// edge and reported with `in_bounds == false`. Longitude is not wrapped across the dateline.
///
/// # Parameters
/// - `latitude` - The WGS84 latitude in degrees
/// - `longitude` - The WGS84 longitude in degrees
///
/// # Returns
/// A [`FieldSample`] with intensity in Gauss and angles in degrees
///
/// # Example
/// ```rust
/// use geomag::magnetic;
/// let berlin = magnetic::magnetic_field(52.52, 13.405);
/// assert!(berlin.in_bounds);
/// assert!(berlin.intensity > 0.48 && berlin.intensity < 0.51);
/// assert!(berlin.inclination > 65.0 && berlin.inclination < 70.0);
/// ```
pub fn magnetic_field(latitude: f32, longitude: f32) -> FieldSample {
    WMM_GRID.sample_field(latitude, longitude)
}

/// Magnetic declination in degrees (positive east) at a latitude/longitude.
///
/// Convenience wrapper around [`magnetic_field`]; clamping is not reported.
///
/// # Example
/// ```rust
/// use geomag::magnetic;
/// let declination = magnetic::magnetic_declination(-33.8688, 151.2093);
/// assert!(declination > 11.0 && declination < 14.0);
/// ```
pub fn magnetic_declination(latitude: f32, longitude: f32) -> f32 {
    WMM_GRID.declination(latitude, longitude)
}

/// Earth's magnetic field vector in Gauss, North-East-Down frame, at a fixed-point location.
///
/// The vector is produced even when the location lies outside the tables; use
/// [`magnetic_field`] when the in-bounds flag matters.
///
/// # Example
/// ```rust
/// use geomag::{Location, magnetic};
/// let b = magnetic::earth_field_vector(&Location::from_degrees(52.52, 13.405));
/// assert!(b[0] > 0.0); // north
/// assert!(b[2] > 0.0); // down, northern hemisphere
/// ```
pub fn earth_field_vector(location: &Location) -> Vector3<f32> {
    WMM_GRID.field_vector(location)
}

/// Convert a magnetic compass heading to a true heading, degrees in [0, 360)
pub fn true_heading(magnetic_heading: f32, latitude: f32, longitude: f32) -> f32 {
    wrap_to_360(magnetic_heading + magnetic_declination(latitude, longitude))
}

/// Convert a true heading to the heading a magnetic compass would read, degrees in [0, 360)
pub fn magnetic_heading(true_heading: f32, latitude: f32, longitude: f32) -> f32 {
    wrap_to_360(true_heading - magnetic_declination(latitude, longitude))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn table_bounds() {
        assert_eq!(MAX_LATITUDE, 90.0);
        assert_eq!(MAX_LONGITUDE, 180.0);
        assert_eq!(WMM_GRID.max_latitude(), MAX_LATITUDE);
        assert_eq!(WMM_GRID.max_longitude(), MAX_LONGITUDE);
        assert_eq!(WMM_GRID.dimensions(), (19, 37));
    }
    #[test]
    fn origin_is_a_grid_node() {
        let sample = magnetic_field(0.0, 0.0);
        assert!(sample.in_bounds);
        assert_eq!(sample.declination, DECLINATION_TABLE[9][18]);
        assert_eq!(sample.inclination, INCLINATION_TABLE[9][18]);
        assert_eq!(sample.intensity, INTENSITY_TABLE[9][18]);
    }
    #[test]
    fn tables_are_physical() {
        for i in 0..LAT_STEPS {
            for j in 0..LON_STEPS {
                let node = WMM_GRID.node(i, j).unwrap();
                assert!(node.intensity > 0.2 && node.intensity < 0.7);
                assert!(node.inclination.abs() <= 90.0);
                assert!(node.declination.abs() <= 180.0);
            }
        }
    }
    #[test]
    fn dateline_columns_agree() {
        // -180 and +180 are the same meridian
        for i in 0..LAT_STEPS {
            let west = WMM_GRID.node(i, 0).unwrap();
            let east = WMM_GRID.node(i, LON_STEPS - 1).unwrap();
            assert_approx_eq!(west.intensity, east.intensity, 1e-5);
            assert_approx_eq!(west.inclination, east.inclination, 1e-3);
        }
    }
    #[test]
    fn declination_wrapper() {
        let sample = magnetic_field(35.6892, 51.389);
        assert_eq!(magnetic_declination(35.6892, 51.389), sample.declination);
    }
    #[test]
    fn heading_correction() {
        let declination = magnetic_declination(-33.8688, 151.2093);
        assert_approx_eq!(
            true_heading(0.0, -33.8688, 151.2093),
            declination,
            1e-5
        );
        let heading = true_heading(355.0, -33.8688, 151.2093);
        assert!((0.0..360.0).contains(&heading));
        assert_approx_eq!(heading, 355.0 + declination - 360.0, 1e-4);
        assert_approx_eq!(
            magnetic_heading(heading, -33.8688, 151.2093),
            355.0,
            1e-4
        );
    }
}
