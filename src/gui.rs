use crate::bridge::ConsoleBridge;
use crate::hotkey::Hotkey;
use crate::layout::{LayoutParams, MAX_SCALE, MIN_SCALE};
use crate::panel::{render, DrawCommand, PanelFrame, PanelState, PointerInput};
use crate::settings::PanelSettings;
use crate::store::CommandStore;
use eframe::egui;
use std::path::PathBuf;

const FOOTER_ID: &str = "console_panel_footer";
const LAYER_ID: &str = "console_panel";

/// The command panel overlay.
///
/// Call [`PanelApp::ui`] once per frame from the host render loop, or run it
/// directly as an [`eframe::App`].
pub struct PanelApp {
    pub settings: PanelSettings,
    settings_path: PathBuf,
    pub store: CommandStore,
    pub state: PanelState,
    bridge: Box<dyn ConsoleBridge>,
    console_key: Hotkey,
    panel_key: Hotkey,
    pub visible: bool,
    last_frame: Option<PanelFrame>,
}

impl PanelApp {
    pub fn new(
        settings: PanelSettings,
        settings_path: PathBuf,
        bridge: Box<dyn ConsoleBridge>,
    ) -> Self {
        let settings = settings.clamped();
        let store = CommandStore::from_settings(&settings);
        let state = PanelState::new(
            egui::pos2(settings.window_pos.0, settings.window_pos.1),
            settings.scale_factor,
        );
        Self {
            console_key: settings.console_hotkey(),
            panel_key: settings.panel_hotkey(),
            settings,
            settings_path,
            store,
            state,
            bridge,
            visible: false,
            last_frame: None,
        }
    }

    pub fn bridge_mut(&mut self) -> &mut dyn ConsoleBridge {
        self.bridge.as_mut()
    }

    pub fn last_frame(&self) -> Option<&PanelFrame> {
        self.last_frame.as_ref()
    }

    /// Base layout for the current settings, before the applied scale.
    pub fn layout_params(&self, screen: egui::Vec2) -> LayoutParams {
        let base = LayoutParams::default();
        let (w, h) = self.settings.window_size;
        LayoutParams {
            container: egui::vec2(w, (h - base.title_height).max(0.0)),
            screen,
            buttons_per_row: self.settings.buttons_per_row,
            ..base
        }
    }

    pub fn toggle_console(&mut self) {
        tracing::info!(hotkey = %self.console_key, "toggle console");
        self.bridge.toggle();
    }

    /// Show or hide the panel. The console is toggled as well so the host
    /// releases the mouse cursor while the panel is open.
    pub fn toggle_panel(&mut self) {
        self.bridge.toggle();
        self.visible = !self.visible;
        self.state.dragging = false;
        self.state.pressed = None;
        tracing::debug!(visible = self.visible, "panel toggled");
    }

    pub fn run_command(&mut self, index: usize) {
        let Some(entry) = self.store.get(index).cloned() else {
            tracing::warn!(index, "clicked entry no longer exists");
            return;
        };
        tracing::info!(label = %entry.label, command = %entry.command, "running command");
        self.bridge.execute(&entry.command);
    }

    /// Commit the pending scale and persist it.
    pub fn apply_scale(&mut self) {
        if !self.state.apply_scale() {
            return;
        }
        self.settings.scale_factor = self.state.applied_scale();
        if let Err(e) = self.settings.save(&self.settings_path) {
            tracing::error!(error = %e, "failed to save settings");
        }
    }

    /// Re-read settings and the command list.
    pub fn reload(&mut self) {
        tracing::info!("reloading configuration");
        match PanelSettings::load(&self.settings_path) {
            Ok(s) => {
                self.settings = s;
                self.console_key = self.settings.console_hotkey();
                self.panel_key = self.settings.panel_hotkey();
                self.state.reset_scale(self.settings.scale_factor);
            }
            Err(e) => tracing::warn!(error = %e, "keeping current settings"),
        }
        self.store.reconfigure(&self.settings);
        self.store.reload();
        self.state.scroll_offset = 0.0;
        self.state.pressed = None;
    }

    pub fn ui(&mut self, ctx: &egui::Context) {
        let (console_key, panel_key) =
            ctx.input(|i| (self.console_key.pressed(i), self.panel_key.pressed(i)));
        if console_key {
            self.toggle_console();
        }
        if panel_key {
            self.toggle_panel();
        }
        if !self.visible {
            self.last_frame = None;
            return;
        }

        let (input, screen) = ctx.input(|i| {
            (
                PointerInput {
                    pos: i.pointer.hover_pos(),
                    delta: i.pointer.delta(),
                    pressed: i.pointer.primary_pressed(),
                    released: i.pointer.primary_released(),
                    scroll: -i.raw_scroll_delta.y,
                },
                i.screen_rect().size(),
            )
        });

        let entries = self.store.entries();
        let params = self.state.layout_params(self.layout_params(screen));
        let frame = render(&mut self.state, &entries, &params, &input);

        paint(ctx, &frame);
        if let Some(index) = frame.clicked {
            self.run_command(index);
        }
        self.footer(ctx, frame.frame_rect.left_bottom());
        self.last_frame = Some(frame);
    }

    fn footer(&mut self, ctx: &egui::Context, pos: egui::Pos2) {
        let mut apply = false;
        let mut revert = false;
        let mut reload = false;
        egui::Area::new(egui::Id::new(FOOTER_ID))
            .fixed_pos(pos)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::Slider::new(self.state.pending_scale_mut(), MIN_SCALE..=MAX_SCALE)
                                .text("Scale"),
                        );
                        apply = ui
                            .add_enabled(self.state.has_pending_scale(), egui::Button::new("Apply"))
                            .clicked();
                        revert = ui
                            .add_enabled(self.state.has_pending_scale(), egui::Button::new("Revert"))
                            .clicked();
                    });
                    ui.horizontal(|ui| {
                        reload = ui.button("Reload").clicked();
                        ui.label(format!(
                            "{} commands from {}",
                            self.store.len(),
                            self.store.source()
                        ));
                    });
                });
            });
        if apply {
            self.apply_scale();
        }
        if revert {
            self.state.revert_scale();
        }
        if reload {
            self.reload();
        }
    }
}

fn paint(ctx: &egui::Context, frame: &PanelFrame) {
    let layer = egui::LayerId::new(egui::Order::Foreground, egui::Id::new(LAYER_ID));
    let painter = ctx.layer_painter(layer);
    let visuals = ctx.style().visuals.clone();
    let rounding = egui::Rounding::same(4.0 * frame.scale);
    let font = egui::FontId::proportional(14.0 * frame.scale);
    let mut clip = painter.clone();

    for cmd in &frame.commands {
        match cmd {
            DrawCommand::Frame { rect } => {
                painter.rect(*rect, rounding, visuals.window_fill, visuals.window_stroke);
            }
            DrawCommand::TitleBar { rect, title } => {
                painter.rect_filled(*rect, rounding, visuals.widgets.noninteractive.bg_fill);
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    title,
                    font.clone(),
                    visuals.strong_text_color(),
                );
            }
            DrawCommand::Viewport { rect } => {
                clip = painter.with_clip_rect(*rect);
            }
            DrawCommand::Button {
                rect,
                label,
                hovered,
                pressed,
                ..
            } => {
                let style = if *pressed {
                    &visuals.widgets.active
                } else if *hovered {
                    &visuals.widgets.hovered
                } else {
                    &visuals.widgets.inactive
                };
                clip.rect(*rect, rounding, style.weak_bg_fill, style.bg_stroke);
                clip.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    label,
                    font.clone(),
                    style.fg_stroke.color,
                );
            }
            DrawCommand::Tooltip { rect, text } => {
                let tip = ctx.layer_painter(egui::LayerId::new(
                    egui::Order::Tooltip,
                    egui::Id::new(LAYER_ID),
                ));
                tip.rect(*rect, rounding, visuals.extreme_bg_color, visuals.window_stroke);
                let galley = tip.layout(
                    text.clone(),
                    font.clone(),
                    visuals.text_color(),
                    rect.width(),
                );
                let pad = (rect.height() - galley.size().y).max(0.0) / 2.0;
                tip.galley(rect.min + egui::vec2(pad.min(6.0 * frame.scale), pad), galley, visuals.text_color());
            }
        }
    }
}

impl eframe::App for PanelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(format!(
                "{} toggles the panel, {} toggles the console.",
                self.panel_key, self.console_key
            ));
        });
        self.ui(ctx);
    }
}
