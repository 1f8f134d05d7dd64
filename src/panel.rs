//! Frame-by-frame panel model.
//!
//! [`render`] turns the command list, the layout parameters and the pointer
//! input of a single frame into draw commands plus an optional click. All
//! state that survives between frames lives in [`PanelState`].

use crate::commands::CommandEntry;
use crate::layout::{clamp_scale, layout_grid, tooltip_rect, LayoutParams, ScaleTransform};
use eframe::egui::{pos2, vec2, Pos2, Rect, Vec2};

pub const PANEL_TITLE: &str = "Console Command Panel";

#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    /// Top-left corner of the panel in layout space.
    pub window_pos: Pos2,
    pub scroll_offset: f32,
    pub pressed: Option<usize>,
    pub dragging: bool,
    pending_scale: f32,
    applied_scale: f32,
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new(pos2(100.0, 100.0), 1.0)
    }
}

impl PanelState {
    pub fn new(window_pos: Pos2, scale: f32) -> Self {
        let scale = clamp_scale(scale);
        Self {
            window_pos,
            scroll_offset: 0.0,
            pressed: None,
            dragging: false,
            pending_scale: scale,
            applied_scale: scale,
        }
    }

    pub fn applied_scale(&self) -> f32 {
        self.applied_scale
    }

    pub fn pending_scale(&self) -> f32 {
        self.pending_scale
    }

    pub fn pending_scale_mut(&mut self) -> &mut f32 {
        &mut self.pending_scale
    }

    pub fn set_pending_scale(&mut self, scale: f32) {
        self.pending_scale = clamp_scale(scale);
    }

    pub fn has_pending_scale(&self) -> bool {
        clamp_scale(self.pending_scale) != self.applied_scale
    }

    /// Commit the pending scale. Returns `true` if the active scale changed.
    pub fn apply_scale(&mut self) -> bool {
        let next = clamp_scale(self.pending_scale);
        self.pending_scale = next;
        if next == self.applied_scale {
            return false;
        }
        tracing::debug!(from = self.applied_scale, to = next, "scale applied");
        self.applied_scale = next;
        true
    }

    pub fn revert_scale(&mut self) {
        self.pending_scale = self.applied_scale;
    }

    /// Replace both scales, e.g. after settings were reloaded.
    pub fn reset_scale(&mut self, scale: f32) {
        let scale = clamp_scale(scale);
        self.pending_scale = scale;
        self.applied_scale = scale;
    }

    /// `base` with the applied scale filled in.
    pub fn layout_params(&self, base: LayoutParams) -> LayoutParams {
        LayoutParams {
            scale: self.applied_scale,
            ..base
        }
    }
}

/// Pointer state for one frame, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerInput {
    pub pos: Option<Pos2>,
    pub delta: Vec2,
    pub pressed: bool,
    pub released: bool,
    /// Positive values scroll the content up (towards later rows).
    pub scroll: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Frame {
        rect: Rect,
    },
    TitleBar {
        rect: Rect,
        title: String,
    },
    /// Clip region for the buttons that follow.
    Viewport {
        rect: Rect,
    },
    Button {
        index: usize,
        rect: Rect,
        label: String,
        hovered: bool,
        pressed: bool,
    },
    Tooltip {
        rect: Rect,
        text: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelFrame {
    pub commands: Vec<DrawCommand>,
    pub clicked: Option<usize>,
    pub hovered: Option<usize>,
    /// Outer panel rectangle in screen space.
    pub frame_rect: Rect,
    pub scale: f32,
    pub content_height: f32,
}

impl PanelFrame {
    pub fn buttons(&self) -> impl Iterator<Item = (usize, Rect)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Button { index, rect, .. } => Some((*index, *rect)),
            _ => None,
        })
    }

    pub fn tooltip(&self) -> Option<(Rect, &str)> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::Tooltip { rect, text } => Some((*rect, text.as_str())),
            _ => None,
        })
    }
}

/// Lay out and hit-test one frame of the panel.
///
/// `state` carries the scroll offset, press tracking and window drag between
/// frames and is updated in place.
pub fn render(
    state: &mut PanelState,
    entries: &[CommandEntry],
    params: &LayoutParams,
    input: &PointerInput,
) -> PanelFrame {
    let params = params.clamped();
    let transform = ScaleTransform::new(params.scale);
    let grid = layout_grid(entries.len(), &params);

    let pointer = input.pos.map(|p| transform.invert_pos(p));
    if state.dragging {
        state.window_pos += transform.invert_vec(input.delta);
    }

    let frame = Rect::from_min_size(
        state.window_pos,
        vec2(params.container.x, params.title_height + params.container.y),
    );
    let title = Rect::from_min_size(state.window_pos, vec2(params.container.x, params.title_height));
    let viewport = Rect::from_min_size(
        state.window_pos + vec2(0.0, params.title_height),
        params.container,
    );

    // Wheel input only scrolls the panel while the pointer is over its buttons.
    let mut scroll = state.scroll_offset;
    if pointer.is_some_and(|p| viewport.contains(p)) {
        scroll += transform.invert_vec(vec2(0.0, input.scroll)).y;
    }
    let max_scroll = (grid.content_height - params.container.y).max(0.0);
    state.scroll_offset = scroll.clamp(0.0, max_scroll);

    let content_origin = viewport.min.to_vec2() - vec2(0.0, state.scroll_offset);

    let hovered = pointer.filter(|p| viewport.contains(*p)).and_then(|p| {
        grid.cells
            .iter()
            .find(|c| c.rect.translate(content_origin).contains(p))
            .map(|c| c.index)
    });

    if input.pressed {
        if hovered.is_some() {
            state.pressed = hovered;
        } else if pointer.is_some_and(|p| title.contains(p)) {
            state.dragging = true;
        } else {
            state.pressed = None;
        }
    }

    let mut clicked = None;
    if input.released {
        if let Some(pressed) = state.pressed.take() {
            if hovered == Some(pressed) {
                clicked = Some(pressed);
            }
        }
        state.dragging = false;
    }

    let mut commands = Vec::with_capacity(entries.len() + 4);
    commands.push(DrawCommand::Frame {
        rect: transform.apply_rect(frame),
    });
    commands.push(DrawCommand::TitleBar {
        rect: transform.apply_rect(title),
        title: PANEL_TITLE.into(),
    });
    commands.push(DrawCommand::Viewport {
        rect: transform.apply_rect(viewport),
    });
    for cell in &grid.cells {
        let rect = cell.rect.translate(content_origin);
        if !rect.intersects(viewport) {
            continue;
        }
        commands.push(DrawCommand::Button {
            index: cell.index,
            rect: transform.apply_rect(rect),
            label: entries[cell.index].label.clone(),
            hovered: hovered == Some(cell.index),
            pressed: state.pressed == Some(cell.index),
        });
    }

    if let (Some(index), Some(screen_pos)) = (hovered, input.pos) {
        let text = &entries[index].description;
        if !text.is_empty() && !state.dragging {
            let mut style = params.tooltip;
            style.max_width = style.max_width.min(params.screen.x / transform.factor());
            let rect = tooltip_rect(
                screen_pos,
                transform.apply_vec(style.cursor_offset),
                transform.apply_vec(style.measure(text)),
                params.screen,
            );
            commands.push(DrawCommand::Tooltip {
                rect,
                text: text.clone(),
            });
        }
    }

    PanelFrame {
        commands,
        clicked,
        hovered,
        frame_rect: transform.apply_rect(frame),
        scale: transform.factor(),
        content_height: grid.content_height,
    }
}
