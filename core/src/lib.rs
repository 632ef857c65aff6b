//! Geomagnetic field lookup for navigation and attitude estimation
//!
//! This crate estimates Earth's magnetic field (intensity, declination, inclination, and the
//! North-East-Down field vector) at any latitude/longitude by bilinear interpolation over a
//! coarse, precomputed world grid derived from the World Magnetic Model (WMM). It targets
//! embedded navigation code (compass calibration, heading correction, magnetometer aiding)
//! that needs a small, deterministic, allocation-free approximation rather than the full
//! spherical-harmonic evaluation of the WMM.
//!
//! This crate is built off of a short list of dependencies:
//! - [`nalgebra`](https://crates.io/crates/nalgebra): Provides the vector type for the NED field vector.
//! - [`nav-types`](https://crates.io/crates/nav-types): Provides the WGS84 position type that [`Location`] converts from.
//! - [`serde`](https://crates.io/crates/serde) and [`csv`](https://crates.io/crates/csv): Provide I/O for batch evaluation ([records]).
//!
//! ## Crate overview
//!
//! - [grid]: The interpolation engine: grid geometry, clamping, cell selection and bilinear blending.
//! - [tables]: The embedded declination, inclination, and intensity tables (10 degree resolution).
//! - [magnetic]: The world grid and the public query functions built on it.
//! - [location]: Fixed-point (1e-7 degree) WGS84 locations.
//! - [records]: CSV records and survey configuration files used by the `geomag` tool.
//!
//! ## Model and conventions
//!
//! The tables cover latitude [-90, 90] and longitude [-180, 180] degrees at a 10 degree spacing
//! and describe the field on the WGS84 ellipsoid surface at a single epoch. Altitude and secular
//! variation are not modeled. Outputs follow the usual geomagnetic conventions:
//! - Intensity $F$ in Gauss (1 G = 100 000 nT)
//! - Declination $D$ in degrees, positive east of true north
//! - Inclination $I$ in degrees, positive below the horizontal
//!
//! The field vector in the local level frame is reconstructed from the three scalars:
//!
//! $$
//! B_n = F \cos I \cos D, \quad B_e = F \cos I \sin D, \quad B_d = F \sin I
//! $$
//!
//! so that $\lVert B \rVert = F$ exactly, up to floating point rounding.
//!
//! ## Out-of-range input
//!
//! No query can fail. Coordinates outside the table are clamped onto its edge and the
//! [`FieldSample::in_bounds`] flag is cleared; callers that need strict validation should check
//! the flag (or the range themselves) before trusting the result. Longitude is clamped, not
//! wrapped, at +/-180 degrees.
//!
//! ```rust
//! use geomag::magnetic;
//! let edge = magnetic::magnetic_field(90.0, 10.0);
//! let beyond = magnetic::magnetic_field(95.0, 10.0);
//! assert!(edge.in_bounds);
//! assert!(!beyond.in_bounds);
//! assert_eq!(edge.intensity, beyond.intensity);
//! ```
pub mod grid;
pub mod location;
pub mod magnetic;
pub mod records;
pub mod tables;

pub use grid::{FieldGrid, FieldSample, GridGeometry};
pub use location::Location;
pub use magnetic::{earth_field_vector, magnetic_declination, magnetic_field};

/// Wrap an angle to the range 0 to 360 degrees
///
/// This function is generic and can be used with any floating point type that can be built
/// from an `f32`.
///
/// # Arguments
/// * `angle` - The angle to be wrapped, in degrees.
/// # Returns
/// * The wrapped angle, in the range [0, 360) degrees.
/// # Example
/// ```rust
/// use geomag::wrap_to_360;
/// assert_eq!(wrap_to_360(370.0), 10.0);
/// assert_eq!(wrap_to_360(-10.0_f32), 350.0);
/// ```
pub fn wrap_to_360<T>(angle: T) -> T
where
    T: PartialOrd
        + Copy
        + std::ops::Rem<Output = T>
        + std::ops::Add<Output = T>
        + std::ops::Sub<Output = T>
        + From<f32>,
{
    let wrapped: T = angle % T::from(360.0);
    if wrapped < T::from(0.0) {
        // -1e-9 % 360 + 360 rounds to 360 itself
        let shifted = wrapped + T::from(360.0);
        if shifted >= T::from(360.0) {
            shifted - T::from(360.0)
        } else {
            shifted
        }
    } else {
        wrapped
    }
}
