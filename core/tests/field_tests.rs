//! Integration tests for the embedded World Magnetic Model grid
//!
//! These tests exercise the public query surface against the real table. Expected values for
//! the reference cities are loose physical bounds taken from published WMM charts; the grid is
//! a 10 degree approximation, so the checks are regression guards rather than accuracy targets.
//!
//! ## Properties checked
//! 1. The reconstructed NED vector has the interpolated intensity as its norm
//! 2. Out-of-range latitude is clamped and flagged
//! 3. Queries on grid nodes return the raw table values
//! 4. Interpolated fields are continuous across cell boundaries
//! 5. Queries are deterministic
//! 6. Fixed-point locations round trip within 1e-7 degrees
use assert_approx_eq::assert_approx_eq;

use geomag::magnetic::{
    self, MAX_LATITUDE, MAX_LONGITUDE, WMM_GRID, magnetic_heading, true_heading,
};
use geomag::records::SurveyConfig;
use geomag::tables::{
    DECLINATION_TABLE, INCLINATION_TABLE, INTENSITY_TABLE, LAT_STEPS, LON_STEPS, MIN_LATITUDE,
    MIN_LONGITUDE, RESOLUTION,
};
use geomag::{Location, earth_field_vector, magnetic_declination, magnetic_field};

/// Sweep the globe (and a margin beyond it) every few degrees
fn sweep() -> impl Iterator<Item = (f32, f32)> {
    (-19..=19).flat_map(|i| (-38..=38).map(move |j| (i as f32 * 4.9, j as f32 * 4.9)))
}

#[test]
fn vector_norm_equals_intensity() {
    for (lat, lon) in sweep() {
        let sample = magnetic_field(lat, lon);
        let b = earth_field_vector(&Location::from_degrees(lat as f64, lon as f64));
        assert!(
            (b.norm() - sample.intensity).abs() <= 1e-4 * sample.intensity,
            "norm {} != intensity {} at ({}, {})",
            b.norm(),
            sample.intensity,
            lat,
            lon
        );
    }
}

#[test]
fn latitude_clamping() {
    let beyond = magnetic_field(95.0, 13.0);
    let edge = magnetic_field(90.0, 13.0);
    assert!(!beyond.in_bounds);
    assert!(edge.in_bounds);
    assert_eq!(beyond.intensity, edge.intensity);
    assert_eq!(beyond.declination, edge.declination);
    assert_eq!(beyond.inclination, edge.inclination);

    let beyond = magnetic_field(-120.0, -60.0);
    let edge = magnetic_field(-90.0, -60.0);
    assert!(!beyond.in_bounds);
    assert_eq!(beyond.intensity, edge.intensity);
}

#[test]
fn longitude_clamping_does_not_wrap() {
    let beyond = magnetic_field(10.0, 185.0);
    let edge = magnetic_field(10.0, 180.0);
    assert!(!beyond.in_bounds);
    assert!(edge.in_bounds);
    assert_eq!(beyond.intensity, edge.intensity);
    assert_eq!(beyond.declination, edge.declination);
    // 185 is not treated as -175
    assert_ne!(beyond.declination, magnetic_field(10.0, -175.0).declination);
}

#[test]
fn edges_are_in_bounds() {
    for (lat, lon) in [
        (MAX_LATITUDE, MAX_LONGITUDE),
        (-MAX_LATITUDE, -MAX_LONGITUDE),
        (MAX_LATITUDE, 0.0),
        (0.0, -MAX_LONGITUDE),
    ] {
        assert!(magnetic_field(lat, lon).in_bounds);
        assert!(WMM_GRID.contains(lat, lon));
    }
    assert!(!magnetic_field(90.001, 0.0).in_bounds);
    assert!(!magnetic_field(0.0, -180.001).in_bounds);
}

#[test]
fn grid_nodes_are_exact() {
    for i in 0..LAT_STEPS {
        for j in 0..LON_STEPS {
            let lat = MIN_LATITUDE + i as f32 * RESOLUTION;
            let lon = MIN_LONGITUDE + j as f32 * RESOLUTION;
            let sample = magnetic_field(lat, lon);
            assert!(sample.in_bounds);
            assert_eq!(sample.intensity, INTENSITY_TABLE[i][j]);
            assert_eq!(sample.declination, DECLINATION_TABLE[i][j]);
            assert_eq!(sample.inclination, INCLINATION_TABLE[i][j]);
        }
    }
}

#[test]
fn continuous_across_cell_boundaries() {
    let eps = 1e-3;
    for lat in [-40.0_f32, 0.0, 50.0] {
        for lon in [-170.0_f32, -30.0, 10.0, 120.0] {
            let below = magnetic_field(lat - eps, lon);
            let above = magnetic_field(lat + eps, lon);
            assert_approx_eq!(below.intensity, above.intensity, 1e-3);
            assert_approx_eq!(below.inclination, above.inclination, 0.05);
            assert_approx_eq!(below.declination, above.declination, 0.05);

            let west = magnetic_field(lat, lon - eps);
            let east = magnetic_field(lat, lon + eps);
            assert_approx_eq!(west.intensity, east.intensity, 1e-3);
            assert_approx_eq!(west.inclination, east.inclination, 0.05);
            assert_approx_eq!(west.declination, east.declination, 0.05);
        }
    }
}

#[test]
fn interpolation_stays_within_cell_range() {
    for (lat, lon) in sweep() {
        let sample = magnetic_field(lat, lon);
        let clamped_lat = lat.clamp(-90.0, 90.0);
        let clamped_lon = lon.clamp(-180.0, 180.0);
        let i = (((clamped_lat - MIN_LATITUDE) / RESOLUTION).floor() as usize).min(LAT_STEPS - 2);
        let j = (((clamped_lon - MIN_LONGITUDE) / RESOLUTION).floor() as usize).min(LON_STEPS - 2);
        let corners = [
            INTENSITY_TABLE[i][j],
            INTENSITY_TABLE[i][j + 1],
            INTENSITY_TABLE[i + 1][j],
            INTENSITY_TABLE[i + 1][j + 1],
        ];
        let low = corners.iter().cloned().fold(f32::INFINITY, f32::min);
        let high = corners.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        assert!(sample.intensity >= low - 1e-5 && sample.intensity <= high + 1e-5);
    }
}

#[test]
fn berlin_spot_check() {
    let berlin = magnetic_field(52.52, 13.405);
    assert!(berlin.in_bounds);
    assert!(berlin.intensity > 0.48 && berlin.intensity < 0.51);
    assert!(berlin.inclination > 65.0 && berlin.inclination < 70.0);
    assert!(berlin.declination > 2.0 && berlin.declination < 7.0);
    let b = earth_field_vector(&Location::from_degrees(52.52, 13.405));
    assert!(b[0] > 0.0 && b[1] > 0.0 && b[2] > 0.0);
}

#[test]
fn hemispheres() {
    let sydney = magnetic_field(-33.8688, 151.2093);
    assert!(sydney.inclination < -55.0);
    assert!(sydney.declination > 10.0 && sydney.declination < 15.0);
    assert!(sydney.intensity > 0.54 && sydney.intensity < 0.60);
    let b = earth_field_vector(&Location::from_degrees(-33.8688, 151.2093));
    assert!(b[2] < 0.0);

    let quito = magnetic_field(0.1807, -78.4678);
    assert!(quito.inclination.abs() < 30.0);
    assert!(quito.intensity < 0.35);

    let tehran = magnetic_field(35.6892, 51.389);
    assert!(tehran.inclination > 50.0 && tehran.inclination < 60.0);
    assert!(tehran.declination > 3.0 && tehran.declination < 7.0);
}

#[test]
fn reference_survey() {
    let results = SurveyConfig::default().evaluate(&WMM_GRID);
    assert_eq!(results.len(), 7);
    assert!(results.iter().all(|r| r.in_bounds));
    for record in &results {
        let norm = (record.north.powi(2) + record.east.powi(2) + record.down.powi(2)).sqrt();
        assert_approx_eq!(norm, record.intensity_gauss, 1e-4);
    }
    let north = &results[4];
    let south = &results[5];
    assert_eq!(north.name.as_deref(), Some("NorthPole-ish"));
    assert!(north.inclination_deg > 80.0);
    assert!(south.inclination_deg < -60.0);
}

#[test]
fn deterministic() {
    for (lat, lon) in sweep().step_by(17) {
        let first = magnetic_field(lat, lon);
        let second = magnetic_field(lat, lon);
        assert_eq!(first.intensity.to_bits(), second.intensity.to_bits());
        assert_eq!(first.declination.to_bits(), second.declination.to_bits());
        assert_eq!(first.inclination.to_bits(), second.inclination.to_bits());
        assert_eq!(first.in_bounds, second.in_bounds);
    }
}

#[test]
fn concurrent_readers_agree() {
    let expected = magnetic_field(48.1, 11.6);
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| magnetic_field(48.1, 11.6)))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn fixed_point_round_trip() {
    for (lat, lon) in [(52.52, 13.405), (-33.8688, 151.2093), (89.9999999, -179.9999999)] {
        let loc = Location::from_degrees(lat, lon);
        assert!((loc.latitude_deg() - lat).abs() <= 1e-7);
        assert!((loc.longitude_deg() - lon).abs() <= 1e-7);
    }
}

#[test]
fn fixed_point_vector_matches_float_query() {
    let loc = Location::from_degrees(35.6892, 51.389);
    let b = earth_field_vector(&loc);
    let expected = magnetic_field(35.6892, 51.389).ned_vector();
    assert_approx_eq!(b[0], expected[0], 1e-5);
    assert_approx_eq!(b[1], expected[1], 1e-5);
    assert_approx_eq!(b[2], expected[2], 1e-5);
}

#[test]
fn vector_produced_when_clamped() {
    let loc = Location::from_degrees(95.0, 0.0);
    let b = earth_field_vector(&loc);
    assert_approx_eq!(b.norm(), magnetic_field(90.0, 0.0).intensity, 1e-4);
}

#[test]
fn declination_wrapper_matches_field() {
    for (lat, lon) in sweep().step_by(11) {
        assert_eq!(magnetic_declination(lat, lon), magnetic_field(lat, lon).declination);
    }
}

#[test]
fn heading_round_trip() {
    for heading in [0.0_f32, 45.0, 180.0, 359.5] {
        let corrected = true_heading(heading, 45.0, -75.0);
        assert!((0.0..360.0).contains(&corrected));
        let back = magnetic_heading(corrected, 45.0, -75.0);
        let diff = (back - heading).abs();
        assert!(diff < 1e-3 || (360.0 - diff) < 1e-3);
    }
    // Westerly declination around Ottawa: true heading reads lower than magnetic
    assert!(magnetic::magnetic_declination(45.0, -75.0) < 0.0);
    assert!(true_heading(90.0, 45.0, -75.0) < 90.0);
}
