//! Global keyboard shortcut handling.
//!
//! Maps key events to list actions, zoom, and dialog dismissal.

use eframe::egui;

use super::{App, ListAction};

impl App {
    /// Returns true if any dialog is currently open and capturing input.
    pub(crate) fn is_dialog_open(&self) -> bool {
        self.message.visible || self.about_open
    }

    /// Handles global keyboard shortcuts.
    pub(crate) fn handle_global_shortcuts(&mut self, ctx: &egui::Context) {
        let (ctrl, shift, keys) = ctx.input(|i| {
            let ctrl = i.modifiers.ctrl || i.modifiers.command;
            let keys: Vec<egui::Key> = i
                .events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Key {
                        key, pressed: true, ..
                    } => Some(*key),
                    _ => None,
                })
                .collect();
            (ctrl, i.modifiers.shift, keys)
        });

        let mut dismissed_with_enter = false;
        for key in keys {
            if self.handle_dialog_shortcut(key) {
                dismissed_with_enter |= key == egui::Key::Enter;
                continue;
            }
            // List shortcuts are suppressed while a dialog is open.
            if self.is_dialog_open() {
                continue;
            }
            if self.handle_zoom_shortcut(key, ctrl) {
                continue;
            }
            self.handle_list_shortcut(key, ctrl, shift);
        }

        // The text field must not also treat this Enter as "Add (Tail)"
        if dismissed_with_enter {
            ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::Enter));
        }
    }

    /// Escape or Enter dismiss the topmost dialog.
    /// Returns `true` if the key was consumed.
    fn handle_dialog_shortcut(&mut self, key: egui::Key) -> bool {
        if !matches!(key, egui::Key::Escape | egui::Key::Enter) {
            return false;
        }
        if self.message.visible {
            self.message.close();
            self.focus_input = true;
            true
        } else if self.about_open && key == egui::Key::Escape {
            self.about_open = false;
            true
        } else {
            false
        }
    }

    /// Zoom shortcuts (Ctrl+Plus, Ctrl+Minus, Ctrl+0).
    /// Returns `true` if the key was consumed.
    fn handle_zoom_shortcut(&mut self, key: egui::Key, ctrl: bool) -> bool {
        if !ctrl {
            return false;
        }
        match key {
            egui::Key::Plus | egui::Key::Equals => self.zoom(1.1),
            egui::Key::Minus => self.zoom(1.0 / 1.1),
            egui::Key::Num0 => self.reset_zoom(),
            _ => return false,
        }
        true
    }

    /// Undo (Ctrl+Z), redo (Ctrl+Y or Ctrl+Shift+Z), traverse (Ctrl+T).
    fn handle_list_shortcut(&mut self, key: egui::Key, ctrl: bool, shift: bool) {
        if !ctrl {
            return;
        }
        match key {
            egui::Key::Z if shift => self.perform(ListAction::Redo),
            egui::Key::Z => self.perform(ListAction::Undo),
            egui::Key::Y => self.perform(ListAction::Redo),
            egui::Key::T => self.perform(ListAction::Traverse),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;

    #[test]
    fn test_no_dialog_open_initially() {
        let app = test_app();
        assert!(!app.is_dialog_open());
    }

    #[test]
    fn test_enter_closes_message() {
        let mut app = test_app();
        app.message.open("a -> b");
        assert!(app.is_dialog_open());
        assert!(app.handle_dialog_shortcut(egui::Key::Enter));
        assert!(!app.is_dialog_open());
    }

    #[test]
    fn test_enter_does_not_close_about() {
        let mut app = test_app();
        app.about_open = true;
        assert!(!app.handle_dialog_shortcut(egui::Key::Enter));
        assert!(app.handle_dialog_shortcut(egui::Key::Escape));
        assert!(!app.about_open);
    }

    #[test]
    fn test_ctrl_shift_z_redoes() {
        let mut app = test_app();
        app.input = "x".to_string();
        app.perform(ListAction::AddTail);
        app.handle_list_shortcut(egui::Key::Z, true, false);
        assert!(app.session.store().is_empty());
        app.handle_list_shortcut(egui::Key::Z, true, true);
        assert_eq!(app.session.store().len(), 1);
    }

    #[test]
    fn test_plain_keys_are_ignored() {
        let mut app = test_app();
        app.session.seed(["a"]);
        app.handle_list_shortcut(egui::Key::T, false, false);
        assert!(!app.message.visible);
        assert!(!app.handle_zoom_shortcut(egui::Key::Plus, false));
    }
}
