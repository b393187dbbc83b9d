use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use super::model::PowerSpectrum;

#[derive(Debug, Serialize)]
struct SpectrumRow {
    frequency_hz: f64,
    power_db: f64,
}

/// Write the centred spectrum as `frequency_hz,power_db` rows.
pub fn write_spectrum_csv(path: &Path, spectrum: &PowerSpectrum) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;

    for (&frequency_hz, &power_db) in spectrum.frequencies.iter().zip(&spectrum.power_db) {
        writer
            .serialize(SpectrumRow {
                frequency_hz,
                power_db,
            })
            .context("writing spectrum row")?;
    }
    writer
        .flush()
        .with_context(|| format!("flushing {}", path.display()))?;

    log::info!("Exported {} spectrum bins to {}", spectrum.len(), path.display());
    Ok(())
}
