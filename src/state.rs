use std::path::PathBuf;

use egui_plot::PlotPoint;

use crate::color::TraceColors;
use crate::data::model::Analysis;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Plot-ready series and display toggles, independent of rendering.
pub struct ViewState {
    /// File the capture was loaded from, for the title and status bar.
    pub source: PathBuf,

    /// Time-domain traces, x in ms. Built once and borrowed by every frame.
    pub real_points: Vec<PlotPoint>,
    pub imag_points: Vec<PlotPoint>,

    /// Spectrum as contiguous runs of finite bins, x in kHz. Each run is
    /// drawn as its own line so a -inf bin leaves a gap.
    pub spectrum_runs: Vec<Vec<PlotPoint>>,

    /// Bins left out of `spectrum_runs` because they are -inf or NaN.
    pub hidden_bins: usize,

    /// One-line summary shown in the top bar.
    pub summary: String,

    pub show_real: bool,
    pub show_imag: bool,

    pub colors: TraceColors,
}

impl ViewState {
    /// Convert an analysis into display units (ms, kHz).
    pub fn new(source: PathBuf, analysis: &Analysis) -> Self {
        let capture = &analysis.capture;
        let spectrum = &analysis.spectrum;

        let t_ms: Vec<f64> = capture.time_axis().iter().map(|t| t * 1e3).collect();
        let real_points = t_ms
            .iter()
            .zip(&capture.samples)
            .map(|(&t, s)| PlotPoint::new(t, s.re))
            .collect();
        let imag_points = t_ms
            .iter()
            .zip(&capture.samples)
            .map(|(&t, s)| PlotPoint::new(t, s.im))
            .collect();

        let spectrum_runs = finite_runs(
            spectrum
                .frequencies
                .iter()
                .zip(&spectrum.power_db)
                .map(|(&f, &db)| (f / 1e3, db)),
        );
        let drawn: usize = spectrum_runs.iter().map(Vec::len).sum();
        let hidden_bins = spectrum.len() - drawn;

        let mut summary = format!(
            "{} samples ({:.3} ms) @ {} Hz, Δf = {:.3} Hz",
            capture.len(),
            capture.duration() * 1e3,
            capture.sample_rate,
            spectrum.resolution()
        );
        if let Some((freq, db)) = spectrum.peak() {
            summary.push_str(&format!(", peak {db:.1} dB @ {:.3} kHz", freq / 1e3));
        }
        if capture.dropped_tail {
            summary.push_str(", odd input: last element dropped");
        }

        Self {
            source,
            real_points,
            imag_points,
            spectrum_runs,
            hidden_bins,
            summary,
            show_real: true,
            show_imag: true,
            colors: TraceColors::default(),
        }
    }

    /// File name for the window title.
    pub fn title(&self) -> String {
        let name = self
            .source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string());
        format!("IQ Plot – {name}")
    }
}

/// Split `(x, y)` pairs into runs of consecutive finite `y` values.
fn finite_runs(points: impl Iterator<Item = (f64, f64)>) -> Vec<Vec<PlotPoint>> {
    let mut runs: Vec<Vec<PlotPoint>> = Vec::new();
    let mut current = Vec::new();
    for (x, y) in points {
        if y.is_finite() {
            current.push(PlotPoint::new(x, y));
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}
