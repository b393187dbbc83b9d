use eframe::egui;

use crate::state::ViewState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct IqPlotApp {
    pub state: ViewState,
}

impl IqPlotApp {
    pub fn new(state: ViewState) -> Self {
        Self { state }
    }
}

impl eframe::App for IqPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar and summary ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: time domain above power spectrum ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::stacked_plots(ui, &self.state);
        });
    }
}
