use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::ViewState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut ViewState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Quit").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                ui.close_menu();
            }
        });

        ui.separator();

        if ui
            .selectable_label(state.show_real, RichText::new("I").color(state.colors.real))
            .clicked()
        {
            state.show_real = !state.show_real;
        }
        if ui
            .selectable_label(state.show_imag, RichText::new("Q").color(state.colors.imag))
            .clicked()
        {
            state.show_imag = !state.show_imag;
        }

        ui.separator();

        ui.label(&state.summary);

        if state.hidden_bins > 0 {
            ui.label(
                RichText::new(format!("{} zero-magnitude bins not drawn", state.hidden_bins))
                    .color(Color32::YELLOW),
            );
        }
    });
}
