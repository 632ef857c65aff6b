//! Common utility functions for the command line tool.
//!
//! This module contains shared utilities for the `geomag` binary:
//! - Logger initialization
//! - Path validation
//! - Result printing

use std::error::Error;
use std::path::{Path, PathBuf};

use log::warn;

use geomag::records::FieldRecord;

/// Initialize the logger with the specified configuration.
///
/// # Arguments
/// * `log_level` - Log level string (off, error, warn, info, debug, trace)
/// * `log_file` - Optional path to log file (logs to stderr if None)
///
/// # Errors
/// Returns an error if the log file cannot be opened or logger initialization fails.
pub fn init_logger(log_level: &str, log_file: Option<&PathBuf>) -> Result<(), Box<dyn Error>> {
    use std::io::Write;

    let level = log_level.parse::<log::LevelFilter>().unwrap_or_else(|_| {
        eprintln!("Invalid log level '{}', defaulting to 'info'", log_level);
        log::LevelFilter::Info
    });

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] - {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.args()
        )
    });

    if let Some(log_path) = log_file {
        if let Some(parent) = log_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let target = Box::new(
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_path)?,
        );
        builder.target(env_logger::Target::Pipe(target));
    }

    builder.try_init()?;
    Ok(())
}

/// Validate that an input path exists and is a file.
///
/// # Errors
/// Returns an error if the path does not exist or is not a regular file.
pub fn validate_input_file(input: &Path) -> Result<(), Box<dyn Error>> {
    if !input.exists() {
        return Err(format!("Input path '{}' does not exist.", input.display()).into());
    }
    if !input.is_file() {
        return Err(format!("Input path '{}' is not a file.", input.display()).into());
    }
    Ok(())
}

/// Create the parent directory of an output file if needed.
///
/// # Errors
/// Returns an error if directory creation fails.
pub fn validate_output_path(output: &Path) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Print one evaluated point in the two-line layout used by the `point`, `demo` and `survey`
/// commands, warning when the point was clamped.
pub fn print_record(record: &FieldRecord) {
    let name = record.name.as_deref().unwrap_or("point");
    if !record.in_bounds {
        warn!(
            "[{}] ({}, {}) is outside the table and was clamped to its edge",
            name, record.latitude, record.longitude
        );
    }
    println!(
        "[{}] lat={:.4} lon={:.4} | Intensity={:.5} G  Decl[deg]={:.3}  Incl[deg]={:.3}  inside:{}",
        name,
        record.latitude,
        record.longitude,
        record.intensity_gauss,
        record.declination_deg,
        record.inclination_deg,
        record.in_bounds
    );
    println!(
        "    B_ef (N,E,D) = [{:.6}, {:.6}, {:.6}] Gauss\n",
        record.north, record.east, record.down
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn input_file_must_exist() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.csv");
        assert!(validate_input_file(&missing).is_err());
        assert!(validate_input_file(dir.path()).is_err());
        let present = dir.path().join("present.csv");
        std::fs::write(&present, "latitude,longitude\n").unwrap();
        assert!(validate_input_file(&present).is_ok());
    }
    #[test]
    fn output_parent_is_created() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("nested").join("deeper").join("out.csv");
        validate_output_path(&output).unwrap();
        assert!(output.parent().unwrap().is_dir());
        assert!(validate_output_path(Path::new("out.csv")).is_ok());
    }
}
