use console_panel::bridge::ConsoleBridge;
use console_panel::gui::PanelApp;
use console_panel::settings::PanelSettings;
use eframe::egui;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct Calls {
    toggles: usize,
    executed: Vec<String>,
}

struct RecordingBridge(Rc<RefCell<Calls>>);

impl ConsoleBridge for RecordingBridge {
    fn toggle(&mut self) {
        self.0.borrow_mut().toggles += 1;
    }

    fn execute(&mut self, command: &str) {
        self.0.borrow_mut().executed.push(command.to_string());
    }
}

fn new_app(dir: &std::path::Path) -> (PanelApp, Rc<RefCell<Calls>>) {
    let settings = PanelSettings {
        commands_file: Some(dir.join("commands.json").to_string_lossy().into_owned()),
        ..Default::default()
    };
    settings
        .save(&dir.join("settings.json"))
        .expect("save settings");
    let calls = Rc::new(RefCell::new(Calls::default()));
    let app = PanelApp::new(
        settings,
        dir.join("settings.json"),
        Box::new(RecordingBridge(calls.clone())),
    );
    (app, calls)
}

#[test]
fn toggle_panel_also_toggles_console() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (mut app, calls) = new_app(dir.path());
    assert!(!app.visible);
    app.toggle_panel();
    assert!(app.visible);
    assert_eq!(calls.borrow().toggles, 1);
    app.toggle_console();
    assert_eq!(calls.borrow().toggles, 2);
}

#[test]
fn hiding_panel_ends_drag_and_press() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (mut app, _) = new_app(dir.path());
    app.toggle_panel();
    app.state.dragging = true;
    app.state.pressed = Some(0);

    app.toggle_panel();
    assert!(!app.visible);
    assert!(!app.state.dragging);
    assert_eq!(app.state.pressed, None);

    let start = app.state.window_pos;
    app.toggle_panel();
    let ctx = egui::Context::default();
    let _ = ctx.run(egui::RawInput::default(), |ctx| app.ui(ctx));
    assert_eq!(app.state.window_pos, start);
}

#[test]
fn run_command_forwards_entry_command() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (mut app, calls) = new_app(dir.path());
    let expected = app.store.get(1).expect("defaults loaded").command.clone();
    app.run_command(1);
    app.run_command(999);
    assert_eq!(calls.borrow().executed, vec![expected]);
}

#[test]
fn applying_scale_persists_settings() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (mut app, _) = new_app(dir.path());
    app.state.set_pending_scale(1.5);
    app.apply_scale();
    let saved = PanelSettings::load(&dir.path().join("settings.json")).expect("load");
    assert_eq!(saved.scale_factor, 1.5);
}

#[test]
fn reload_picks_up_new_commands() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (mut app, _) = new_app(dir.path());
    std::fs::write(
        dir.path().join("commands.json"),
        r#"[{"Label":"Fly","Command":"noclip","Description":""}]"#,
    )
    .expect("write");
    app.reload();
    assert_eq!(app.store.len(), 1);
    assert_eq!(app.store.get(0).map(|e| e.command.as_str()), Some("noclip"));
}

#[test]
fn hidden_panel_draws_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (mut app, _) = new_app(dir.path());
    let ctx = egui::Context::default();
    let _ = ctx.run(egui::RawInput::default(), |ctx| app.ui(ctx));
    assert!(app.last_frame().is_none());

    app.visible = true;
    let _ = ctx.run(egui::RawInput::default(), |ctx| app.ui(ctx));
    let frame = app.last_frame().expect("frame rendered");
    assert_eq!(frame.buttons().count(), app.store.len());
}
