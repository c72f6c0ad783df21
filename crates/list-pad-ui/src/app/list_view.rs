//! Central list display, rendered from the session's store every frame.

use eframe::egui;
use egui::RichText;

use super::App;

/// Shown in place of rows when the list has no elements.
pub(crate) const EMPTY_LIST_TEXT: &str = "The list is empty";

impl App {
    /// Renders one row per element, head first.
    pub(crate) fn show_list_view(&self, ui: &mut egui::Ui) {
        let store = self.session.store();
        if store.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.weak(EMPTY_LIST_TEXT);
            });
            return;
        }

        let last = store.len() - 1;
        let font_size = self.font_size;
        let accent = ui.visuals().selection.bg_fill;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (index, item) in store.iter().enumerate() {
                    ui.horizontal(|ui| {
                        if self.show_indices {
                            ui.label(
                                RichText::new(format!("{index:>3}"))
                                    .monospace()
                                    .size(font_size * 0.8)
                                    .weak(),
                            );
                        }
                        ui.label(RichText::new(item).size(font_size));
                        if index == 0 {
                            ui.label(RichText::new("HEAD").small().color(accent));
                        }
                        if index == last {
                            ui.label(RichText::new("TAIL").small().color(accent));
                        }
                    });
                    if index != last {
                        ui.label(RichText::new("↕").size(font_size * 0.7).weak());
                    }
                }
            });
    }
}
