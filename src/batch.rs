//! Batch processing of sensor packages
//!
//! Packages are handled strictly in input order. The first package that
//! fails to dispatch or yields a non-finite metric aborts the run; lines already written stay written.

use std::io::Write;
use tracing::{error, info, info_span, warn, Level};

use crate::error::{Result, TrackerError};
use crate::export::{self, OutputFormat};
use crate::models::{InfoMessage, SensorPackage};
use crate::training::{read_package, Training};

/// Packages processed when no configuration supplies its own
pub fn sample_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Dispatch a single package and compute its summary
pub fn process_package(package: &SensorPackage) -> Result<InfoMessage> {
    let workout = read_package(&package.workout_type, &package.data)?;
    workout.try_training_info()
}

fn log_failure(e: &TrackerError) {
    match e.severity().to_tracing_level() {
        Level::ERROR => error!(severity = ?e.severity(), "Failed to process package: {}", e),
        Level::WARN => warn!(severity = ?e.severity(), "Skipped package: {}", e),
        _ => info!(severity = ?e.severity(), "Package not processed: {}", e),
    }
}

/// Process every package and write one rendered summary per line
pub fn run_batch<W: Write>(
    packages: &[SensorPackage],
    format: OutputFormat,
    writer: &mut W,
) -> Result<()> {
    info!(packages = packages.len(), format = ?format, "Processing batch");

    for (index, package) in packages.iter().enumerate() {
        let span = info_span!("package", index, code = %package.workout_type);
        let _enter = span.enter();

        let info = process_package(package).map_err(|e| {
            log_failure(&e);
            e
        })?;
        writeln!(writer, "{}", export::render(&info, format)?)?;
    }

    writer.flush()?;
    Ok(())
}
