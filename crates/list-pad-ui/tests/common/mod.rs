use egui_kittest::Harness;
use list_pad_ui::{App, StartupArgs};
use tempfile::TempDir;

/// Creates a standard test harness with the app at 1024x768.
///
/// The config file lives in the returned temp dir, which must outlive the
/// harness.
pub fn create_harness() -> (Harness<'static, App>, TempDir) {
    create_harness_with(StartupArgs::default())
}

/// Like [`create_harness`], with custom startup arguments.
pub fn create_harness_with(mut args: StartupArgs) -> (Harness<'static, App>, TempDir) {
    let dir = tempfile::tempdir().expect("create temp dir");
    args.config_path = Some(dir.path().join("list-pad.json"));
    let harness = Harness::builder()
        .with_size(egui::Vec2::new(1024.0, 768.0))
        .build_eframe(move |cc| App::new(cc, args));
    (harness, dir)
}

/// Types `text` into the input field and clicks the button labelled `button`.
#[allow(dead_code)]
pub fn submit(harness: &mut Harness<'static, App>, text: &str, button: &str) {
    use egui_kittest::kittest::Queryable;

    harness.state_mut().input = text.to_string();
    harness.run();
    harness.get_by_label(button).click();
    harness.run();
}

/// List contents, head first.
#[allow(dead_code)]
pub fn contents(harness: &Harness<'static, App>) -> Vec<String> {
    harness
        .state()
        .session
        .store()
        .iter()
        .map(str::to_string)
        .collect()
}
