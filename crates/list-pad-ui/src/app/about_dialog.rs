//! About dialog showing application information, version, and links.

use eframe::egui;

use super::App;

impl App {
    /// Renders the About dialog window while it is open.
    pub(crate) fn show_about_dialog(&mut self, ctx: &egui::Context) {
        if !self.about_open {
            return;
        }

        let mut open = true;
        egui::Window::new("About list-pad")
            .collapsible(false)
            .resizable(false)
            .default_width(340.0)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("list-pad");
                    ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));

                    ui.add_space(4.0);
                    ui.label("Edit a list of strings from both ends, with undo and redo");

                    ui.add_space(8.0);
                    ui.separator();
                    ui.add_space(4.0);

                    ui.label(format!("License: {}", env!("CARGO_PKG_LICENSE")));
                    ui.hyperlink_to("Source code", env!("CARGO_PKG_REPOSITORY"));

                    ui.add_space(8.0);
                    ui.separator();
                    ui.add_space(4.0);

                    ui.label(format!(
                        "OS: {} {}",
                        std::env::consts::OS,
                        std::env::consts::ARCH
                    ));
                });
            });

        if !open {
            self.about_open = false;
        }
    }
}
