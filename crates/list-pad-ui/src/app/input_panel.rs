//! Text field and action buttons above the list.

use eframe::egui;

use super::{App, ListAction};

/// Id of the input text field, used to restore focus.
const INPUT_ID: &str = "list_input";

impl App {
    /// Renders the text field followed by one button per list action.
    pub(crate) fn show_input_panel(&mut self, ui: &mut egui::Ui) {
        let enabled = !self.is_dialog_open();
        let mut clicked = None;

        ui.add_enabled_ui(enabled, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing.x = 6.0;

                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.input)
                        .id(egui::Id::new(INPUT_ID))
                        .hint_text("Value or index")
                        .desired_width(200.0),
                );
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    clicked = Some(ListAction::AddTail);
                }
                if self.focus_input && enabled {
                    response.request_focus();
                    self.focus_input = false;
                }

                // Buttons stay enabled; an action with nothing to do is a no-op
                for action in ListAction::ALL {
                    let button = ui.button(action.label()).on_hover_text(action.tooltip());
                    if button.clicked() {
                        clicked = Some(action);
                    }
                }
            });
        });

        if let Some(action) = clicked {
            self.perform(action);
        }
    }
}
