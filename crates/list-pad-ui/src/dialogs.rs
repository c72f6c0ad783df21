/// Modal message window used for traversal output and notices.
use egui::{Align2, Context, Window};

/// Title of the message window.
pub const MESSAGE_TITLE: &str = "Message";

/// State for the message dialog.
#[derive(Debug, Default)]
pub struct MessageDialog {
    pub visible: bool,
    pub text: String,
}

impl MessageDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `text` in the dialog, replacing any message already open.
    pub fn open(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Renders the dialog. Returns `true` while it is open.
    pub fn show(&mut self, ctx: &Context) -> bool {
        if !self.visible {
            return false;
        }

        let mut open = true;
        let mut ok_clicked = false;

        Window::new(MESSAGE_TITLE)
            .collapsible(false)
            .resizable(false)
            .min_width(240.0)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                ui.spacing_mut().item_spacing.y = 8.0;
                if self.text.is_empty() {
                    ui.weak("(empty)");
                } else {
                    ui.label(&self.text);
                }
                ui.add_space(4.0);
                ui.vertical_centered(|ui| {
                    if ui.button("  OK  ").clicked() {
                        ok_clicked = true;
                    }
                });
            });

        if !open || ok_clicked {
            self.visible = false;
        }
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_dialog_is_hidden() {
        let dialog = MessageDialog::new();
        assert!(!dialog.visible);
        assert!(dialog.text.is_empty());
    }

    #[test]
    fn test_open_replaces_text() {
        let mut dialog = MessageDialog::new();
        dialog.open("first");
        dialog.open("second");
        assert!(dialog.visible);
        assert_eq!(dialog.text, "second");
    }

    #[test]
    fn test_close() {
        let mut dialog = MessageDialog::new();
        dialog.open("hi");
        dialog.close();
        assert!(!dialog.visible);
    }
}
