//! Status bar rendering: element count, history position, and redo policy.

use eframe::egui;

use super::App;

/// Formats the element count, e.g. "1 element", "3 elements".
pub(crate) fn format_element_count(count: usize) -> String {
    if count == 1 {
        "1 element".to_string()
    } else {
        format!("{count} elements")
    }
}

impl App {
    /// Renders the status bar contents.
    pub(crate) fn show_status_bar(&self, ui: &mut egui::Ui) {
        let store = self.session.store();
        let history = self.session.history();

        ui.horizontal_centered(|ui| {
            ui.spacing_mut().item_spacing.x = 12.0;
            ui.label(format_element_count(store.len()));
            ui.separator();
            ui.label(format!("History: {}/{}", history.position(), history.len()));
            ui.separator();
            ui.label(format!("Redo: {}", self.session.redo_policy()));

            if let (Some(head), Some(tail)) = (store.head(), store.tail()) {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(format!("head: {head}  tail: {tail}"));
                });
            }
        });
    }
}
