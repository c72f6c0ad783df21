//! Top-level application tying together the input panel, list view, menus,
//! and status bar.

mod about_dialog;
mod actions;
mod input_panel;
mod list_view;
mod menu_bar;
mod shortcuts;
mod status_bar;

use std::path::PathBuf;

use eframe::egui;

use list_pad_config::AppConfig;
use list_pad_core::history::{HistoryConfig, RedoPolicy};
use list_pad_core::ListSession;

use crate::dialogs::MessageDialog;

pub use actions::ListAction;

/// Smallest and largest row text size reachable with zoom shortcuts.
pub(crate) const FONT_SIZE_RANGE: (f32, f32) = (8.0, 48.0);

/// Arguments passed from the command line to the application.
#[derive(Debug, Clone, Default)]
pub struct StartupArgs {
    /// Elements appended to the list on startup, without history.
    pub items: Vec<String>,
    /// Config file to use instead of the default location.
    pub config_path: Option<PathBuf>,
    /// Redo policy forced for this run; not written back to the config.
    pub redo_policy: Option<RedoPolicy>,
}

/// Which color theme to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    System,
    Dark,
    Light,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::System, ThemeMode::Dark, ThemeMode::Light];

    /// Name as stored in the config file.
    pub fn name(self) -> &'static str {
        match self {
            ThemeMode::System => "System",
            ThemeMode::Dark => "Dark",
            ThemeMode::Light => "Light",
        }
    }

    /// Parses a config name, falling back to `System` for anything unknown.
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|m| m.name() == name)
            .unwrap_or_default()
    }

    /// Resolves "System" using the OS preference. Returns true for dark.
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Dark => true,
            ThemeMode::Light => false,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }
}

/// The main application state.
pub struct App {
    pub session: ListSession,
    /// Contents of the text field.
    pub input: String,
    pub theme_mode: ThemeMode,
    pub font_size: f32,
    pub show_indices: bool,
    /// Redo policy saved to the config on exit.
    pub redo_policy_pref: RedoPolicy,
    pub message: MessageDialog,
    config_path: PathBuf,
    /// Set when the text field should grab keyboard focus next frame.
    pub(crate) focus_input: bool,
    pub(crate) about_open: bool,
}

impl App {
    /// Creates a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>, args: StartupArgs) -> Self {
        // Ctrl+/- resize the list rows instead of the whole UI
        cc.egui_ctx.options_mut(|o| o.zoom_with_keyboard = false);

        let config_path = args.config_path.unwrap_or_else(AppConfig::config_path);
        let app_config = AppConfig::load_or_create(&config_path);
        tracing::debug!("Loaded config from {}", config_path.display());

        let theme_mode = ThemeMode::from_name(&app_config.current_theme);
        Self::apply_theme_visuals(&cc.egui_ctx, theme_mode.is_dark());

        let redo_policy = args.redo_policy.unwrap_or(app_config.redo_policy);
        let mut session = ListSession::new(HistoryConfig::with_policy(redo_policy));
        session.set_separator(app_config.traverse_separator.clone());
        session.seed(&args.items);
        if !session.store().is_empty() {
            tracing::info!("Seeded list with {} elements", session.store().len());
        }

        Self {
            session,
            input: String::new(),
            theme_mode,
            font_size: app_config.font_size,
            show_indices: app_config.show_indices,
            redo_policy_pref: app_config.redo_policy,
            message: MessageDialog::new(),
            config_path,
            focus_input: true,
            about_open: false,
        }
    }

    /// Applies egui visuals for a light or dark theme.
    fn apply_theme_visuals(ctx: &egui::Context, dark_mode: bool) {
        let mut visuals = if dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        // Same 4px rounding for every widget state
        let widget_rounding = egui::CornerRadius::same(4);
        visuals.widgets.noninteractive.corner_radius = widget_rounding;
        visuals.widgets.inactive.corner_radius = widget_rounding;
        visuals.widgets.hovered.corner_radius = widget_rounding;
        visuals.widgets.active.corner_radius = widget_rounding;
        visuals.widgets.open.corner_radius = widget_rounding;

        visuals.window_corner_radius = egui::CornerRadius::same(6);
        visuals.menu_corner_radius = egui::CornerRadius::same(4);
        visuals.widgets.noninteractive.bg_stroke.width = 0.0;
        visuals.window_stroke.width = 1.0;

        ctx.set_visuals(visuals);

        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::Vec2::new(8.0, 6.0);
            style.spacing.button_padding = egui::Vec2::new(8.0, 4.0);
            style.spacing.window_margin = egui::Margin::same(12);
        });
    }

    /// Switches to a new theme mode and applies it.
    pub fn set_theme_mode(&mut self, mode: ThemeMode, ctx: &egui::Context) {
        self.theme_mode = mode;
        Self::apply_theme_visuals(ctx, mode.is_dark());
    }

    /// Switches the redo policy for this session and remembers it.
    pub fn set_redo_policy(&mut self, policy: RedoPolicy) {
        self.session.set_redo_policy(policy);
        self.redo_policy_pref = policy;
    }

    /// Multiplies the row text size, staying inside `FONT_SIZE_RANGE`.
    pub(crate) fn zoom(&mut self, factor: f32) {
        let (min, max) = FONT_SIZE_RANGE;
        self.font_size = (self.font_size * factor).clamp(min, max);
    }

    /// Restores the default row text size.
    pub(crate) fn reset_zoom(&mut self) {
        self.font_size = AppConfig::default().font_size;
    }

    pub fn about_is_open(&self) -> bool {
        self.about_open
    }

    /// Builds the config that reflects current preferences.
    pub fn current_config(&self) -> AppConfig {
        AppConfig {
            current_theme: self.theme_mode.name().to_string(),
            redo_policy: self.redo_policy_pref,
            traverse_separator: self.session.separator().to_string(),
            font_size: self.font_size,
            show_indices: self.show_indices,
        }
    }

    /// Writes current preferences to the config file, logging failures.
    pub fn save_config(&self) {
        match self.current_config().save(&self.config_path) {
            Ok(()) => tracing::debug!("Saved config to {}", self.config_path.display()),
            Err(e) => tracing::warn!("Failed to save config: {e:#}"),
        }
    }

    /// Shows all dialog windows.
    fn show_dialogs(&mut self, ctx: &egui::Context) {
        let was_open = self.message.visible;
        if was_open && !self.message.show(ctx) {
            // Hand focus back to the text field once the notice is dismissed
            self.focus_input = true;
        }
        self.show_about_dialog(ctx);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_global_shortcuts(ctx);

        let panel_fill = ctx.style().visuals.panel_fill;
        let faint_bg = ctx.style().visuals.faint_bg_color;
        let extreme_bg = ctx.style().visuals.extreme_bg_color;

        egui::TopBottomPanel::top("menu_bar")
            .frame(
                egui::Frame::new()
                    .fill(panel_fill)
                    .inner_margin(egui::Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                self.show_menu_bar(ui, ctx);
            });

        egui::TopBottomPanel::top("input_panel")
            .frame(
                egui::Frame::new()
                    .fill(faint_bg)
                    .inner_margin(egui::Margin::symmetric(8, 6)),
            )
            .show(ctx, |ui| {
                self.show_input_panel(ui);
            });

        egui::TopBottomPanel::bottom("status_bar")
            .max_height(24.0)
            .frame(
                egui::Frame::new()
                    .fill(extreme_bg)
                    .inner_margin(egui::Margin::symmetric(8, 3)),
            )
            .show(ctx, |ui| {
                self.show_status_bar(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_list_view(ui);
        });

        self.show_dialogs(ctx);
    }

    // Required by eframe 0.34; all drawing happens in `update`, which eframe still calls each frame.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.save_config();
    }
}
