//! CSV reports for the output boundary: the compartment time series that
//! feeds the chart, and a one-row summary that feeds the metric badges.

use csv::Writer;
use serde::Serialize;
use std::ffi::OsStr;
use std::fs::{create_dir_all, File};
use std::path::Path;

use crate::engine::SimulationResult;
use crate::error::OutbreakError;
use crate::log::trace;
use crate::summary::Summary;

#[derive(Serialize)]
struct TimeSeriesRow {
    step: usize,
    susceptible: f64,
    infected: f64,
    recovered: f64,
}

#[derive(Serialize)]
struct SummaryRow {
    population: f64,
    vaccinated_count: f64,
    peak_infected: f64,
    final_recovered: f64,
    reproduction_number: Option<f64>,
    herd_immunity_threshold: Option<f64>,
    trajectory: Option<String>,
}

// Checks that the path is valid. Creates the file and all parent directories
// if they do not exist.
fn create_report_file(path: &Path) -> Result<File, OutbreakError> {
    match path.extension().and_then(OsStr::to_str) {
        Some("csv") => {
            if let Some(parent) = path.parent() {
                create_dir_all(parent)?;
            }
            let file = File::create(path)?;
            Ok(file)
        }
        _ => Err(OutbreakError::ReportError(
            "Report output files must be CSVs at this time".to_string(),
        )),
    }
}

/// Writes the full compartment sequence, one row per step index.
///
/// # Errors
///
/// Returns an [`OutbreakError`] if the path is not a `.csv` file or
/// writing fails.
pub fn write_time_series(path: &Path, result: &SimulationResult) -> Result<(), OutbreakError> {
    trace!("writing time series report to {}", path.display());
    let mut writer = Writer::from_writer(create_report_file(path)?);
    for (step, state) in result.states().iter().enumerate() {
        writer.serialize(TimeSeriesRow {
            step,
            susceptible: state.susceptible,
            infected: state.infected,
            recovered: state.recovered,
        })?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the scalar summary metrics as a single CSV row. Undefined
/// metrics (zero recovery rate) serialize as empty fields.
///
/// # Errors
///
/// Returns an [`OutbreakError`] if the path is not a `.csv` file or
/// writing fails.
pub fn write_summary(path: &Path, summary: &Summary) -> Result<(), OutbreakError> {
    trace!("writing summary report to {}", path.display());
    let mut writer = Writer::from_writer(create_report_file(path)?);
    writer.serialize(SummaryRow {
        population: summary.population,
        vaccinated_count: summary.vaccinated_count,
        peak_infected: summary.peak_infected,
        final_recovered: summary.final_recovered,
        reproduction_number: summary.reproduction_number,
        herd_immunity_threshold: summary.herd_immunity_threshold,
        trajectory: summary.trajectory().map(|t| t.to_string()),
    })?;
    writer.flush()?;
    Ok(())
}
