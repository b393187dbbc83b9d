use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoint, PlotPoints};

use crate::state::ViewState;

// ---------------------------------------------------------------------------
// Stacked plots (central panel)
// ---------------------------------------------------------------------------

/// Render the time-domain and power-spectrum plots one above the other.
pub fn stacked_plots(ui: &mut Ui, state: &ViewState) {
    let spacing = ui.spacing().item_spacing.y;
    let heading_height = ui.text_style_height(&eframe::egui::TextStyle::Heading);
    let plot_height =
        ((ui.available_height() - 2.0 * heading_height - 3.0 * spacing) / 2.0).max(80.0);

    ui.heading("Time Domain");
    time_domain_plot(ui, state, plot_height);

    ui.heading("Power Spectrum");
    power_spectrum_plot(ui, state, plot_height);
}

fn time_domain_plot(ui: &mut Ui, state: &ViewState, height: f32) {
    Plot::new("time_domain")
        .height(height)
        .legend(Legend::default())
        .x_axis_label("Time (ms)")
        .y_axis_label("Amplitude")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            if state.show_real {
                plot_ui.line(
                    Line::new(series(&state.real_points))
                        .name("I (real)")
                        .color(state.colors.real)
                        .width(1.5),
                );
            }
            if state.show_imag {
                plot_ui.line(
                    Line::new(series(&state.imag_points))
                        .name("Q (imag)")
                        .color(state.colors.imag)
                        .width(1.5),
                );
            }
        });
}

fn power_spectrum_plot(ui: &mut Ui, state: &ViewState, height: f32) {
    Plot::new("power_spectrum")
        .height(height)
        .legend(Legend::default())
        .x_axis_label("Frequency (kHz)")
        .y_axis_label("Log Mag (dB)")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            // One line per finite run, sharing a legend entry.
            for run in &state.spectrum_runs {
                plot_ui.line(
                    Line::new(series(run))
                        .name("Power spectrum")
                        .color(state.colors.spectrum)
                        .width(1.5),
                );
            }
        });
}

/// Borrow cached points without copying them each frame.
fn series(points: &[PlotPoint]) -> PlotPoints<'_> {
    PlotPoints::Borrowed(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_borrows_cached_points() {
        let cached = vec![PlotPoint::new(0.0, 1.0), PlotPoint::new(0.5, -1.0)];
        let points = series(&cached);
        assert!(matches!(points, PlotPoints::Borrowed(_)));
        assert_eq!(points.points(), cached.as_slice());
        assert!(std::ptr::eq(points.points().as_ptr(), cached.as_ptr()));
    }
}
