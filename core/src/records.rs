//! Query and result records for batch evaluation
//!
//! This module contains:
//! - [`QueryRecord`]: a named (or anonymous) latitude/longitude read from CSV or a survey file
//! - [`FieldRecord`]: a query together with the interpolated field, written to CSV
//! - [`SurveyConfig`]: a list of query points stored as JSON, YAML, or TOML
//!
//! None of this is needed for point queries; it backs the `geomag` command line tool and any
//! host that wants to tabulate the model over a set of sites.
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::grid::FieldGrid;

/// A single point to evaluate.
///
/// CSV files need `latitude` and `longitude` columns (degrees); `name` is optional and may be
/// left empty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryRecord {
    /// Optional label for the point
    #[serde(default)]
    pub name: Option<String>,
    /// WGS84 latitude in degrees
    pub latitude: f32,
    /// WGS84 longitude in degrees
    pub longitude: f32,
}

impl QueryRecord {
    /// Create a labelled query point
    pub fn named(name: &str, latitude: f32, longitude: f32) -> Self {
        QueryRecord {
            name: Some(name.to_string()),
            latitude,
            longitude,
        }
    }
    /// Reads a CSV file of query points.
    ///
    /// # Arguments
    /// * `path` - Path to the CSV file to read.
    ///
    /// # Returns
    /// * `Ok(Vec<QueryRecord>)` if successful.
    /// * `Err` if the file cannot be read or a row cannot be parsed.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Self>, Box<dyn std::error::Error>> {
        let mut rdr = csv::Reader::from_path(path)?;
        let mut records = Vec::new();
        for result in rdr.deserialize() {
            let record: Self = result?;
            records.push(record);
        }
        Ok(records)
    }
    /// Writes query points to a CSV file.
    pub fn to_csv<P: AsRef<Path>>(records: &[Self], path: P) -> io::Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// One evaluated point: the query plus the interpolated field and its NED vector
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldRecord {
    /// Optional label copied from the query
    pub name: Option<String>,
    /// Query latitude in degrees
    pub latitude: f32,
    /// Query longitude in degrees
    pub longitude: f32,
    /// Total intensity in Gauss
    pub intensity_gauss: f32,
    /// Declination in degrees, positive east
    pub declination_deg: f32,
    /// Inclination in degrees, positive down
    pub inclination_deg: f32,
    /// False if the query had to be clamped onto the table edge
    pub in_bounds: bool,
    /// North component in Gauss
    pub north: f32,
    /// East component in Gauss
    pub east: f32,
    /// Down component in Gauss
    pub down: f32,
}

impl FieldRecord {
    /// Evaluate a query against a grid
    pub fn evaluate<const LAT_STEPS: usize, const LON_STEPS: usize>(
        grid: &FieldGrid<LAT_STEPS, LON_STEPS>,
        query: &QueryRecord,
    ) -> Self {
        let sample = grid.sample_field(query.latitude, query.longitude);
        let b = sample.ned_vector();
        FieldRecord {
            name: query.name.clone(),
            latitude: query.latitude,
            longitude: query.longitude,
            intensity_gauss: sample.intensity,
            declination_deg: sample.declination,
            inclination_deg: sample.inclination,
            in_bounds: sample.in_bounds,
            north: b[0],
            east: b[1],
            down: b[2],
        }
    }
    /// Reads a CSV file of evaluated points.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Self>, Box<dyn std::error::Error>> {
        let mut rdr = csv::Reader::from_path(path)?;
        let mut records = Vec::new();
        for result in rdr.deserialize() {
            let record: Self = result?;
            records.push(record);
        }
        Ok(records)
    }
    /// Writes evaluated points to a CSV file.
    pub fn to_csv<P: AsRef<Path>>(records: &[Self], path: P) -> io::Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// A set of sites to evaluate in one run.
///
/// The default set covers a few well-known cities plus the table edges near the poles and the
/// dateline.
///
/// ```
/// use geomag::records::{QueryRecord, SurveyConfig};
///
/// let cfg = SurveyConfig {
///     points: vec![QueryRecord::named("Ottawa", 45.42, -75.70)],
/// };
/// assert_eq!(cfg.points.len(), 1);
/// assert_eq!(SurveyConfig::default().points.len(), 7);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurveyConfig {
    /// Points to evaluate, in output order
    #[serde(default)]
    pub points: Vec<QueryRecord>,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        SurveyConfig {
            points: vec![
                QueryRecord::named("Berlin", 52.52, 13.405),
                QueryRecord::named("Tehran", 35.6892, 51.389),
                QueryRecord::named("Sydney", -33.8688, 151.2093),
                QueryRecord::named("Quito", 0.1807, -78.4678),
                QueryRecord::named("NorthPole-ish", 89.0, 0.0),
                QueryRecord::named("SouthPole-ish", -89.0, 0.0),
                QueryRecord::named("Dateline", 0.0, 179.9),
            ],
        }
    }
}

impl SurveyConfig {
    /// Evaluate every point against a grid
    pub fn evaluate<const LAT_STEPS: usize, const LON_STEPS: usize>(
        &self,
        grid: &FieldGrid<LAT_STEPS, LON_STEPS>,
    ) -> Vec<FieldRecord> {
        self.points
            .iter()
            .map(|query| FieldRecord::evaluate(grid, query))
            .collect()
    }
    /// Write the configuration to a JSON file (pretty-printed).
    pub fn to_json<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self).map_err(io::Error::other)
    }
    /// Read the configuration from a JSON file.
    pub fn from_json<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        serde_json::from_reader(file).map_err(io::Error::other)
    }
    /// Write the configuration as YAML.
    pub fn to_yaml<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let mut file = File::create(path)?;
        let s = serde_yaml::to_string(self).map_err(io::Error::other)?;
        file.write_all(s.as_bytes())
    }
    /// Read the configuration from YAML.
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        serde_yaml::from_reader(file).map_err(io::Error::other)
    }
    /// Write the configuration as TOML.
    pub fn to_toml<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let mut file = File::create(path)?;
        let s = toml::to_string(self).map_err(io::Error::other)?;
        file.write_all(s.as_bytes())
    }
    /// Read the configuration from TOML.
    pub fn from_toml<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let mut s = String::new();
        let mut file = File::open(path)?;
        file.read_to_string(&mut s)?;
        toml::from_str(&s).map_err(io::Error::other)
    }
    /// Generic write: choose format by file extension (.json/.yaml/.yml/.toml)
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let p = path.as_ref();
        match extension(p).as_deref() {
            Some("json") => self.to_json(p),
            Some("yaml") | Some("yml") => self.to_yaml(p),
            Some("toml") => self.to_toml(p),
            _ => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "unsupported file extension",
            )),
        }
    }
    /// Generic read: choose format by file extension (.json/.yaml/.yml/.toml)
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let p = path.as_ref();
        match extension(p).as_deref() {
            Some("json") => Self::from_json(p),
            Some("yaml") | Some("yml") => Self::from_yaml(p),
            Some("toml") => Self::from_toml(p),
            _ => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "unsupported file extension",
            )),
        }
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::magnetic::WMM_GRID;
    use tempfile::NamedTempFile;

    fn sample_cfg() -> SurveyConfig {
        SurveyConfig {
            points: vec![
                QueryRecord::named("Ottawa", 45.42, -75.7),
                QueryRecord {
                    name: None,
                    latitude: -12.5,
                    longitude: 130.8,
                },
            ],
        }
    }

    #[test]
    fn json_roundtrip() {
        let cfg = sample_cfg();
        let f = NamedTempFile::new().unwrap();
        let path = f.path().with_extension("json");
        cfg.to_json(&path).unwrap();
        let loaded = SurveyConfig::from_json(&path).unwrap();
        assert_eq!(cfg, loaded);
    }
    #[test]
    fn yaml_roundtrip() {
        let cfg = sample_cfg();
        let f = NamedTempFile::new().unwrap();
        let path = f.path().with_extension("yaml");
        cfg.to_yaml(&path).unwrap();
        let loaded = SurveyConfig::from_yaml(&path).unwrap();
        assert_eq!(cfg, loaded);
    }
    #[test]
    fn toml_roundtrip() {
        let cfg = sample_cfg();
        let f = NamedTempFile::new().unwrap();
        let path = f.path().with_extension("toml");
        cfg.to_toml(&path).unwrap();
        let loaded = SurveyConfig::from_toml(&path).unwrap();
        assert_eq!(cfg, loaded);
    }
    #[test]
    fn generic_dispatch() {
        let cfg = SurveyConfig::default();
        let f = NamedTempFile::new().unwrap();
        let path = f.path().with_extension("YML");
        cfg.to_file(&path).unwrap();
        assert_eq!(SurveyConfig::from_file(&path).unwrap(), cfg);

        let bad = f.path().with_extension("ini");
        let err = cfg.to_file(&bad).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        let err = SurveyConfig::from_file(&bad).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
    #[test]
    fn empty_points_default_to_empty_list() {
        let f = NamedTempFile::new().unwrap();
        let path = f.path().with_extension("json");
        std::fs::write(&path, "{}").unwrap();
        let cfg = SurveyConfig::from_file(&path).unwrap();
        assert!(cfg.points.is_empty());
    }
    #[test]
    fn query_csv_with_optional_names() {
        let f = NamedTempFile::new().unwrap();
        let path = f.path().with_extension("csv");
        std::fs::write(&path, "name,latitude,longitude\nBerlin,52.52,13.405\n,-10.0,20.0\n")
            .unwrap();
        let queries = QueryRecord::from_csv(&path).unwrap();
        assert_eq!(queries.len(), 2);
        assert_eq!(queries[0].name.as_deref(), Some("Berlin"));
        assert_eq!(queries[1].name, None);
        assert_eq!(queries[1].latitude, -10.0);
    }
    #[test]
    fn field_records_csv_roundtrip() {
        let cfg = sample_cfg();
        let results = cfg.evaluate(&WMM_GRID);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.in_bounds));
        let f = NamedTempFile::new().unwrap();
        let path = f.path().with_extension("csv");
        FieldRecord::to_csv(&results, &path).unwrap();
        let loaded = FieldRecord::from_csv(&path).unwrap();
        assert_eq!(loaded.len(), results.len());
        assert_eq!(loaded[0].name.as_deref(), Some("Ottawa"));
        assert_eq!(loaded[1].name, None);
        assert_eq!(loaded[0].intensity_gauss, results[0].intensity_gauss);
    }
    #[test]
    fn evaluate_matches_grid() {
        let query = QueryRecord::named("Far north", 95.0, 0.0);
        let record = FieldRecord::evaluate(&WMM_GRID, &query);
        let sample = WMM_GRID.sample_field(95.0, 0.0);
        assert!(!record.in_bounds);
        assert_eq!(record.intensity_gauss, sample.intensity);
        let b = sample.ned_vector();
        assert_eq!((record.north, record.east, record.down), (b[0], b[1], b[2]));
    }
}
