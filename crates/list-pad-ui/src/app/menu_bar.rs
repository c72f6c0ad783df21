//! Menu bar rendering: File, Edit, View, and Help menus.

use eframe::egui;
use list_pad_core::history::RedoPolicy;

use super::{App, ListAction, ThemeMode};

impl App {
    /// Renders the menu bar.
    pub(crate) fn show_menu_bar(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Exit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    ui.close();
                }
            });

            ui.menu_button("Edit", |ui| {
                let can_undo = self.session.history().can_undo();
                let can_redo = self.session.history().can_redo();

                if ui
                    .add_enabled(can_undo, egui::Button::new("Undo            Ctrl+Z"))
                    .clicked()
                {
                    self.perform(ListAction::Undo);
                    ui.close();
                }
                if ui
                    .add_enabled(can_redo, egui::Button::new("Redo            Ctrl+Y"))
                    .clicked()
                {
                    self.perform(ListAction::Redo);
                    ui.close();
                }
                ui.separator();
                if ui.button("Traverse        Ctrl+T").clicked() {
                    self.perform(ListAction::Traverse);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                ui.menu_button("Theme", |ui| {
                    for mode in ThemeMode::ALL {
                        if ui.radio(self.theme_mode == mode, mode.name()).clicked() {
                            self.set_theme_mode(mode, ctx);
                            ui.close();
                        }
                    }
                });
                ui.menu_button("Redo Policy", |ui| {
                    let current = self.session.redo_policy();
                    for policy in RedoPolicy::ALL {
                        if ui.radio(current == policy, policy.label()).clicked() {
                            self.set_redo_policy(policy);
                            ui.close();
                        }
                    }
                });
                ui.separator();
                ui.checkbox(&mut self.show_indices, "Show Indices");
                ui.separator();
                if ui.button("Zoom In         Ctrl++").clicked() {
                    self.zoom(1.1);
                }
                if ui.button("Zoom Out        Ctrl+-").clicked() {
                    self.zoom(1.0 / 1.1);
                }
                if ui.button("Reset Zoom      Ctrl+0").clicked() {
                    self.reset_zoom();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About list-pad").clicked() {
                    self.about_open = true;
                    ui.close();
                }
            });
        });
    }
}
