//! CSV reporting for simulation output.
//!
//! The driver returns a [`TimeSeries`]; this module writes it out as one CSV
//! row per day so plotting and parameter sweeps can stay external to the
//! engine.

use std::ffi::OsStr;
use std::fs::{create_dir_all, File};
use std::path::Path;

use csv::Writer;
use serde_derive::{Deserialize, Serialize};

use crate::error::OutbreakError;
use crate::runner::TimeSeries;

/// One day of aggregate counts, as written to the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCounts {
    pub day: u32,
    pub infected: usize,
    pub discovered: usize,
    pub healed: usize,
    pub dead: usize,
}

impl TimeSeries {
    /// The recorded days as report rows, in ascending day order.
    pub fn rows(&self) -> impl Iterator<Item = DailyCounts> + '_ {
        (0..self.len()).map(|i| DailyCounts {
            day: self.days[i],
            infected: self.infected[i],
            discovered: self.discovered[i],
            healed: self.healed[i],
            dead: self.dead[i],
        })
    }
}

// Checks that the path is valid. Creates the file and all parent directories
// if they do not exist. Returns the file if successful.
fn create_report_file(path: &Path) -> Result<File, OutbreakError> {
    match path.extension().and_then(OsStr::to_str) {
        Some("csv") => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    create_dir_all(parent)?;
                }
            }
            let file = File::create(path)?;
            Ok(file)
        }
        _ => Err(OutbreakError::ReportError(
            "report output files must be CSVs at this time".to_string(),
        )),
    }
}

/// Writes the time series to `path` as a CSV report, one row per day.
///
/// # Errors
///
/// Returns an `OutbreakError` if `path` does not end in `.csv` or if the
/// file cannot be created or written.
pub fn write_time_series(series: &TimeSeries, path: &Path) -> Result<(), OutbreakError> {
    let file = create_report_file(path)?;
    let mut writer = Writer::from_writer(file);
    for row in series.rows() {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
