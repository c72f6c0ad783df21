pub mod config;

pub use config::{AppConfig, THEME_MODES};
