use rustfft::num_complex::Complex64;

// ---------------------------------------------------------------------------
// Deinterleaving
// ---------------------------------------------------------------------------

/// Pair even-indexed elements (I) with odd-indexed elements (Q).
///
/// An unpaired trailing element is dropped.
pub fn deinterleave(raw: &[i64]) -> Vec<Complex64> {
    raw.chunks_exact(2)
        .map(|pair| Complex64::new(pair[0] as f64, pair[1] as f64))
        .collect()
}

// ---------------------------------------------------------------------------
// IqCapture – the time-domain signal
// ---------------------------------------------------------------------------

/// A deinterleaved capture together with the rate it was sampled at.
#[derive(Debug, Clone)]
pub struct IqCapture {
    /// Complex samples, I in the real part and Q in the imaginary part.
    pub samples: Vec<Complex64>,
    /// Sample rate in Hz.
    pub sample_rate: f64,
    /// Whether the raw sequence had an odd length and lost its last element.
    pub dropped_tail: bool,
}

impl IqCapture {
    /// Deinterleave a raw sequence, reporting any truncation.
    pub fn from_raw(raw: &[i64], sample_rate: f64) -> Self {
        let dropped_tail = raw.len() % 2 == 1;
        if dropped_tail {
            log::warn!(
                "Raw sequence has odd length {}; dropping the unpaired final element",
                raw.len()
            );
        }
        Self {
            samples: deinterleave(raw),
            sample_rate,
            dropped_tail,
        }
    }

    /// Number of complex samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample instants in seconds: `i / fs`.
    pub fn time_axis(&self) -> Vec<f64> {
        (0..self.len())
            .map(|i| i as f64 / self.sample_rate)
            .collect()
    }

    /// Capture length in seconds.
    pub fn duration(&self) -> f64 {
        self.len() as f64 / self.sample_rate
    }
}

// ---------------------------------------------------------------------------
// PowerSpectrum – the frequency-domain view
// ---------------------------------------------------------------------------

/// Log-magnitude spectrum in centred (shifted) order.
#[derive(Debug, Clone)]
pub struct PowerSpectrum {
    /// Bin frequencies in Hz, ascending, DC in the middle.
    pub frequencies: Vec<f64>,
    /// `20·log10(|X[k]| / N)` per bin, same order as `frequencies`.
    pub power_db: Vec<f64>,
    pub sample_rate: f64,
}

impl PowerSpectrum {
    pub fn len(&self) -> usize {
        self.power_db.len()
    }

    pub fn is_empty(&self) -> bool {
        self.power_db.is_empty()
    }

    /// Bin spacing in Hz.
    pub fn resolution(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.sample_rate / self.len() as f64
    }

    /// Frequency and level of the strongest finite bin.
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.frequencies
            .iter()
            .zip(&self.power_db)
            .filter(|(_, db)| db.is_finite())
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(&f, &db)| (f, db))
    }

    /// Number of bins that are -inf or NaN.
    pub fn non_finite_bins(&self) -> usize {
        self.power_db.iter().filter(|db| !db.is_finite()).count()
    }
}

// ---------------------------------------------------------------------------
// Analysis – everything derived from one capture file
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Analysis {
    pub capture: IqCapture,
    pub spectrum: PowerSpectrum,
}
