//! egui front end for list-pad.
//!
//! The `App` owns a `ListSession` and renders it; every button and shortcut
//! maps to one `ListAction`.

pub mod app;
pub mod dialogs;

pub use app::{App, ListAction, StartupArgs, ThemeMode};
