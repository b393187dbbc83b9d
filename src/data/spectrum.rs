use rustfft::num_complex::Complex64;
use rustfft::FftPlanner;
use thiserror::Error;

use super::model::{IqCapture, PowerSpectrum};

#[derive(Debug, Error, PartialEq)]
pub enum SpectrumError {
    #[error("no complete IQ pair to transform")]
    Empty,

    #[error("sample rate must be a positive finite number, got {0}")]
    InvalidSampleRate(f64),
}

// ---------------------------------------------------------------------------
// Frequency-shift helpers
// ---------------------------------------------------------------------------

/// Move the zero-frequency bin to the centre (index `n / 2`).
pub fn fftshift<T: Clone>(values: &[T]) -> Vec<T> {
    let split = values.len().div_ceil(2);
    let mut shifted = Vec::with_capacity(values.len());
    shifted.extend_from_slice(&values[split..]);
    shifted.extend_from_slice(&values[..split]);
    shifted
}

/// DFT bin frequencies in Hz, in natural FFT order:
/// `0, 1, …, ⌈n/2⌉-1, -⌊n/2⌋, …, -1` scaled by `fs / n`.
pub fn fftfreq(n: usize, sample_rate: f64) -> Vec<f64> {
    let positive = n.div_ceil(2);
    let step = sample_rate / n as f64;
    (0..n)
        .map(|i| {
            let k = if i < positive {
                i as f64
            } else {
                i as f64 - n as f64
            };
            k * step
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Power spectrum
// ---------------------------------------------------------------------------

/// Unwindowed FFT of the whole capture, normalised by `N`, in dB, centred.
///
/// Zero-magnitude bins come out as `-inf` unless `floor_db` is given, in
/// which case anything below the floor (including NaN) is clamped to it.
pub fn power_spectrum(
    capture: &IqCapture,
    floor_db: Option<f64>,
) -> Result<PowerSpectrum, SpectrumError> {
    let fs = capture.sample_rate;
    if !(fs.is_finite() && fs > 0.0) {
        return Err(SpectrumError::InvalidSampleRate(fs));
    }
    if capture.is_empty() {
        return Err(SpectrumError::Empty);
    }

    let n = capture.len();
    log::debug!("Planning forward FFT of size {n}");
    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(n);

    let mut buffer: Vec<Complex64> = capture.samples.clone();
    fft.process(&mut buffer);

    let scale = 1.0 / n as f64;
    let magnitudes_db: Vec<f64> = buffer
        .iter()
        .map(|bin| {
            let db = 20.0 * (*bin * scale).norm().log10();
            match floor_db {
                Some(floor) if db.is_nan() || db < floor => floor,
                _ => db,
            }
        })
        .collect();

    let spectrum = PowerSpectrum {
        frequencies: fftshift(&fftfreq(n, fs)),
        power_db: fftshift(&magnitudes_db),
        sample_rate: fs,
    };

    let non_finite = spectrum.non_finite_bins();
    if non_finite > 0 {
        log::warn!(
            "{non_finite} of {n} spectrum bins have zero magnitude and are not finite in dB \
             (use --floor-db to clamp them)"
        );
    }
    if let (Some(first), Some(last)) = (spectrum.frequencies.first(), spectrum.frequencies.last()) {
        log::debug!("Frequency axis spans {first} Hz to {last} Hz");
    }

    Ok(spectrum)
}
