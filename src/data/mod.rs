//! Data layer: loading, deinterleaving and the spectral transform.
//!
//! Architecture:
//! ```text
//!  int8 / int16 / int32 / text file
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  decode file → Vec<i64> (I,Q,I,Q,…)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  model    │  deinterleave → IqCapture (Vec<Complex64>)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ spectrum  │  FFT / N → |·| in dB → fftshift → PowerSpectrum
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  export   │  optional CSV of the centred spectrum
//!   └──────────┘
//! ```

pub mod export;
pub mod loader;
pub mod model;
pub mod spectrum;

use std::path::Path;

use anyhow::{Context, Result};

use loader::DataType;
use model::{Analysis, IqCapture};

/// Run the whole pipeline for one capture file.
pub fn analyze(
    path: &Path,
    data_type: DataType,
    sample_rate: f64,
    floor_db: Option<f64>,
) -> Result<Analysis> {
    let raw = loader::load_samples(path, data_type)?;
    let capture = IqCapture::from_raw(&raw, sample_rate);
    let spectrum = spectrum::power_spectrum(&capture, floor_db)
        .with_context(|| format!("computing spectrum of {}", path.display()))?;

    match spectrum.peak() {
        Some((freq, db)) => log::info!(
            "{} IQ samples at {sample_rate} Hz, resolution {:.3} Hz, peak {db:.2} dB at {freq:.3} Hz",
            capture.len(),
            spectrum.resolution()
        ),
        None => log::info!(
            "{} IQ samples at {sample_rate} Hz, no finite spectrum bins",
            capture.len()
        ),
    }

    Ok(Analysis { capture, spectrum })
}
