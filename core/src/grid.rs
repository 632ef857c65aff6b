//! Regular latitude/longitude grid of magnetic field samples
//!
//! A [`FieldGrid`] holds three parallel tables (declination, inclination, intensity) sampled at
//! a fixed angular resolution and answers point queries by bilinear interpolation between the
//! four nodes surrounding the query. The grid never fails: coordinates outside the covered
//! range are clamped onto its edge and the result is flagged through [`FieldSample::in_bounds`].
//!
//! The geometry is a value rather than a set of hard-coded constants, so the same code serves
//! the embedded world table ([`crate::magnetic::WMM_GRID`]) and small synthetic grids.
//!
//! # Interpolation
//! For a query at fractional grid position $(i + \delta_\phi, j + \delta_\lambda)$ each field
//! $q$ is blended as
//!
//! $$
//! q = q_{i,j}(1-\delta_\phi)(1-\delta_\lambda) + q_{i,j+1}(1-\delta_\phi)\delta_\lambda
//!   + q_{i+1,j}\delta_\phi(1-\delta_\lambda) + q_{i+1,j+1}\delta_\phi\delta_\lambda
//! $$
//!
//! The three fields are interpolated independently. Declination is not unwrapped, so cells that
//! straddle the +/-180 degree discontinuity near the magnetic poles blend poorly; the same holds
//! for the longitude axis, which is clamped at the table edge rather than wrapped across the
//! dateline.
use std::fmt::{self, Debug, Display};

use log::trace;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::location::Location;

/// Placement and spacing of a field grid
///
/// The maximum latitude and longitude are not stored; they follow from the table dimensions
/// (see [`FieldGrid::max_latitude`]), so dimensions and covered range cannot disagree.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridGeometry {
    /// Latitude of the first row in degrees
    pub min_latitude: f32,
    /// Longitude of the first column in degrees
    pub min_longitude: f32,
    /// Spacing between adjacent rows and columns in degrees
    pub resolution: f32,
}

/// Interpolated field values at one query point
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldSample {
    /// Total field intensity in Gauss
    pub intensity: f32,
    /// Declination in degrees, positive east of true north
    pub declination: f32,
    /// Inclination in degrees, positive downward
    pub inclination: f32,
    /// False when the query was clamped onto the grid edge
    pub in_bounds: bool,
}

impl FieldSample {
    /// Reconstruct the field vector in the local North-East-Down frame (Gauss)
    ///
    /// $$
    /// B = F \begin{bmatrix} \cos I \cos D \\\\ \cos I \sin D \\\\ \sin I \end{bmatrix}
    /// $$
    ///
    /// The norm of the result equals `intensity` up to rounding regardless of the angles.
    pub fn ned_vector(&self) -> Vector3<f32> {
        let declination = self.declination.to_radians();
        let inclination = self.inclination.to_radians();
        let horizontal = self.intensity * inclination.cos();
        Vector3::new(
            horizontal * declination.cos(),
            horizontal * declination.sin(),
            self.intensity * inclination.sin(),
        )
    }
    /// Magnitude of the horizontal (North-East) component in Gauss
    pub fn horizontal_intensity(&self) -> f32 {
        self.intensity * self.inclination.to_radians().cos()
    }
}

/// Fractional position of a coordinate along one grid axis
#[derive(Clone, Copy, Debug, PartialEq)]
struct AxisPosition {
    /// Lower node of the enclosing cell, always at most `steps - 2`
    index: usize,
    /// Offset from the lower node in cell units, in [0, 1]
    weight: f32,
}

/// Clamp a coordinate into `[min, max]`, reporting whether it was already inside.
///
/// NaN is out of domain and is replaced by the centre of the axis.
fn clamp_axis(value: f32, min: f32, max: f32) -> (f32, bool) {
    if value.is_nan() {
        return ((min + max) * 0.5, false);
    }
    let inside = value >= min && value <= max;
    (value.clamp(min, max), inside)
}

/// Locate a clamped coordinate on an axis of `steps` nodes
fn locate(value: f32, min: f32, resolution: f32, steps: usize) -> AxisPosition {
    let position = (value - min) / resolution;
    let index = (position.floor().max(0.0) as usize).min(steps - 2);
    let weight = (position - index as f32).clamp(0.0, 1.0);
    AxisPosition { index, weight }
}

/// A world (or regional) grid of declination, inclination and intensity samples
///
/// Tables are indexed `[latitude_row][longitude_column]`, row 0 at `min_latitude` and column 0
/// at `min_longitude`. The grid is immutable once built and every query is a pure function of
/// the grid and the coordinates; it allocates nothing and takes no locks, so a `static` grid can
/// be shared freely between threads and interrupt handlers.
#[derive(Clone, PartialEq)]
pub struct FieldGrid<const LAT_STEPS: usize, const LON_STEPS: usize> {
    geometry: GridGeometry,
    declination: [[f32; LON_STEPS]; LAT_STEPS],
    inclination: [[f32; LON_STEPS]; LAT_STEPS],
    intensity: [[f32; LON_STEPS]; LAT_STEPS],
}

impl<const LAT_STEPS: usize, const LON_STEPS: usize> Debug for FieldGrid<LAT_STEPS, LON_STEPS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FieldGrid {{ {:?} x {:?}, geometry: {:?} }}",
            LAT_STEPS, LON_STEPS, self.geometry
        )
    }
}

impl<const LAT_STEPS: usize, const LON_STEPS: usize> Display for FieldGrid<LAT_STEPS, LON_STEPS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FieldGrid: {} x {} at {} deg | Lat range: [{}, {}] | Lon range: [{}, {}]",
            LAT_STEPS,
            LON_STEPS,
            self.geometry.resolution,
            self.geometry.min_latitude,
            self.max_latitude(),
            self.geometry.min_longitude,
            self.max_longitude()
        )
    }
}

impl<const LAT_STEPS: usize, const LON_STEPS: usize> FieldGrid<LAT_STEPS, LON_STEPS> {
    /// Create a grid from its geometry and the three sample tables.
    ///
    /// # Panics
    /// Panics (a compile error when evaluated for a `static`) if either axis has fewer than two
    /// samples or the resolution is not positive.
    ///
    /// # Example
    /// ```rust
    /// use geomag::grid::{FieldGrid, GridGeometry};
    /// let geometry = GridGeometry { min_latitude: 0.0, min_longitude: 0.0, resolution: 1.0 };
    /// let grid = FieldGrid::new(
    ///     geometry,
    ///     [[0.0, 2.0], [0.0, 2.0]],
    ///     [[60.0, 60.0], [70.0, 70.0]],
    ///     [[0.4, 0.4], [0.5, 0.5]],
    /// );
    /// let sample = grid.sample_field(0.5, 0.5);
    /// assert_eq!(sample.declination, 1.0);
    /// assert_eq!(sample.inclination, 65.0);
    /// assert!(sample.in_bounds);
    /// ```
    pub const fn new(
        geometry: GridGeometry,
        declination: [[f32; LON_STEPS]; LAT_STEPS],
        inclination: [[f32; LON_STEPS]; LAT_STEPS],
        intensity: [[f32; LON_STEPS]; LAT_STEPS],
    ) -> Self {
        assert!(LAT_STEPS >= 2 && LON_STEPS >= 2);
        assert!(geometry.resolution > 0.0);
        FieldGrid {
            geometry,
            declination,
            inclination,
            intensity,
        }
    }
    /// Placement and spacing of the grid
    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }
    /// Number of (latitude, longitude) samples
    pub const fn dimensions(&self) -> (usize, usize) {
        (LAT_STEPS, LON_STEPS)
    }
    /// Latitude of the last row in degrees
    pub fn max_latitude(&self) -> f32 {
        self.geometry.min_latitude + (LAT_STEPS - 1) as f32 * self.geometry.resolution
    }
    /// Longitude of the last column in degrees
    pub fn max_longitude(&self) -> f32 {
        self.geometry.min_longitude + (LON_STEPS - 1) as f32 * self.geometry.resolution
    }
    /// Whether a point lies inside the covered range (edges included)
    pub fn contains(&self, latitude: f32, longitude: f32) -> bool {
        clamp_axis(latitude, self.geometry.min_latitude, self.max_latitude()).1
            && clamp_axis(longitude, self.geometry.min_longitude, self.max_longitude()).1
    }
    /// Raw table values at a grid node, or `None` if the indices are outside the tables
    pub fn node(&self, lat_index: usize, lon_index: usize) -> Option<FieldSample> {
        Some(FieldSample {
            intensity: *self.intensity.get(lat_index)?.get(lon_index)?,
            declination: self.declination[lat_index][lon_index],
            inclination: self.inclination[lat_index][lon_index],
            in_bounds: true,
        })
    }
    /// Interpolate intensity, declination and inclination at a point.
    ///
    /// Latitude and longitude are clamped independently into the covered range; the returned
    /// [`FieldSample::in_bounds`] is true only if neither needed clamping. A clamped result is
    /// the value on the nearest grid edge, not an extrapolation.
    ///
    /// # Arguments
    /// - `latitude` - WGS84 latitude in degrees, any value
    /// - `longitude` - WGS84 longitude in degrees, any value
    ///
    /// # Returns
    /// The interpolated [`FieldSample`]
    pub fn sample_field(&self, latitude: f32, longitude: f32) -> FieldSample {
        let (lat, lat_inside) =
            clamp_axis(latitude, self.geometry.min_latitude, self.max_latitude());
        let (lon, lon_inside) =
            clamp_axis(longitude, self.geometry.min_longitude, self.max_longitude());
        let in_bounds = lat_inside && lon_inside;
        if !in_bounds {
            trace!(
                "Query ({}, {}) clamped to grid edge ({}, {})",
                latitude, longitude, lat, lon
            );
        }
        let lat_pos = locate(
            lat,
            self.geometry.min_latitude,
            self.geometry.resolution,
            LAT_STEPS,
        );
        let lon_pos = locate(
            lon,
            self.geometry.min_longitude,
            self.geometry.resolution,
            LON_STEPS,
        );
        FieldSample {
            intensity: Self::blend(&self.intensity, lat_pos, lon_pos),
            declination: Self::blend(&self.declination, lat_pos, lon_pos),
            inclination: Self::blend(&self.inclination, lat_pos, lon_pos),
            in_bounds,
        }
    }
    /// Interpolated declination in degrees; clamping is not reported
    pub fn declination(&self, latitude: f32, longitude: f32) -> f32 {
        self.sample_field(latitude, longitude).declination
    }
    /// Field vector in Gauss in the North-East-Down frame at a fixed-point location.
    ///
    /// The vector is produced even when the location had to be clamped.
    pub fn field_vector(&self, location: &Location) -> Vector3<f32> {
        self.sample_field(
            location.latitude_deg() as f32,
            location.longitude_deg() as f32,
        )
        .ned_vector()
    }
    /// Bilinear blend of the four nodes around a cell position
    fn blend(
        table: &[[f32; LON_STEPS]; LAT_STEPS],
        lat: AxisPosition,
        lon: AxisPosition,
    ) -> f32 {
        let (i, j) = (lat.index, lon.index);
        let (dlat, dlon) = (lat.weight, lon.weight);
        table[i][j] * (1.0 - dlat) * (1.0 - dlon)
            + table[i][j + 1] * (1.0 - dlat) * dlon
            + table[i + 1][j] * dlat * (1.0 - dlon)
            + table[i + 1][j + 1] * dlat * dlon
    }
}
