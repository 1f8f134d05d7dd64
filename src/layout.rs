use eframe::egui::{pos2, vec2, Pos2, Rect, Vec2};

pub const MIN_BUTTONS_PER_ROW: usize = 1;
pub const MAX_BUTTONS_PER_ROW: usize = 5;
pub const MIN_SCALE: f32 = 0.5;
pub const MAX_SCALE: f32 = 3.0;

/// Per-frame layout configuration. All lengths are in unscaled points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Size of the scrollable button area.
    pub container: Vec2,
    /// Size of the host viewport, used to keep tooltips on screen.
    pub screen: Vec2,
    pub buttons_per_row: usize,
    pub spacing: f32,
    pub row_spacing: f32,
    pub button_height: f32,
    pub min_button_width: f32,
    pub margin: f32,
    pub title_height: f32,
    pub scale: f32,
    pub tooltip: TooltipStyle,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            container: vec2(300.0, 350.0),
            screen: vec2(1920.0, 1080.0),
            buttons_per_row: 3,
            spacing: 6.0,
            row_spacing: 6.0,
            button_height: 32.0,
            min_button_width: 60.0,
            margin: 8.0,
            title_height: 22.0,
            scale: 1.0,
            tooltip: TooltipStyle::default(),
        }
    }
}

impl LayoutParams {
    /// Return a copy with every bounded field pulled back into range.
    pub fn clamped(mut self) -> Self {
        self.buttons_per_row = clamp_buttons_per_row(self.buttons_per_row);
        self.scale = clamp_scale(self.scale);
        self.spacing = self.spacing.max(0.0);
        self.row_spacing = self.row_spacing.max(0.0);
        self.margin = self.margin.max(0.0);
        self.button_height = self.button_height.max(1.0);
        self.min_button_width = self.min_button_width.max(1.0);
        self.title_height = self.title_height.max(0.0);
        self.container = vec2(self.container.x.max(0.0), self.container.y.max(0.0));
        self
    }
}

pub fn clamp_buttons_per_row(n: usize) -> usize {
    n.clamp(MIN_BUTTONS_PER_ROW, MAX_BUTTONS_PER_ROW)
}

pub fn clamp_scale(scale: f32) -> f32 {
    if scale.is_finite() {
        scale.clamp(MIN_SCALE, MAX_SCALE)
    } else {
        1.0
    }
}

/// Width of every button for the given parameters, never below the minimum.
pub fn button_width(params: &LayoutParams) -> f32 {
    let per_row = clamp_buttons_per_row(params.buttons_per_row) as f32;
    let spacing = params.spacing.max(0.0);
    let usable =
        params.container.x - 2.0 * params.margin.max(0.0) - (per_row - 1.0) * spacing;
    (usable / per_row).max(params.min_button_width.max(1.0))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    pub index: usize,
    pub row: usize,
    pub col: usize,
    /// Position relative to the top-left corner of the unscrolled content.
    pub rect: Rect,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridLayout {
    pub cells: Vec<GridCell>,
    pub rows: usize,
    pub button_width: f32,
    pub content_height: f32,
}

impl GridLayout {
    pub fn row_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.rows];
        for cell in &self.cells {
            counts[cell.row] += 1;
        }
        counts
    }

    /// First cell in display order containing `pos` (content space).
    pub fn hit(&self, pos: Pos2) -> Option<usize> {
        self.cells
            .iter()
            .find(|c| c.rect.contains(pos))
            .map(|c| c.index)
    }
}

/// Lay `count` buttons out left to right, wrapping every `buttons_per_row`.
pub fn layout_grid(count: usize, params: &LayoutParams) -> GridLayout {
    let params = params.clamped();
    let per_row = params.buttons_per_row;
    let width = button_width(&params);
    let rows = count.div_ceil(per_row);

    let cells = (0..count)
        .map(|index| {
            let row = index / per_row;
            let col = index % per_row;
            let x = params.margin + col as f32 * (width + params.spacing);
            let y = params.margin + row as f32 * (params.button_height + params.row_spacing);
            GridCell {
                index,
                row,
                col,
                rect: Rect::from_min_size(pos2(x, y), vec2(width, params.button_height)),
            }
        })
        .collect();

    let content_height = if rows == 0 {
        0.0
    } else {
        2.0 * params.margin
            + rows as f32 * params.button_height
            + (rows - 1) as f32 * params.row_spacing
    };

    GridLayout {
        cells,
        rows,
        button_width: width,
        content_height,
    }
}

/// Uniform scale anchored at the screen origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleTransform {
    factor: f32,
}

impl ScaleTransform {
    pub fn new(factor: f32) -> Self {
        Self {
            factor: clamp_scale(factor),
        }
    }

    pub fn factor(&self) -> f32 {
        self.factor
    }

    pub fn is_identity(&self) -> bool {
        self.factor == 1.0
    }

    pub fn apply_pos(&self, p: Pos2) -> Pos2 {
        if self.is_identity() {
            return p;
        }
        pos2(p.x * self.factor, p.y * self.factor)
    }

    pub fn apply_vec(&self, v: Vec2) -> Vec2 {
        if self.is_identity() {
            return v;
        }
        v * self.factor
    }

    pub fn apply_rect(&self, r: Rect) -> Rect {
        if self.is_identity() {
            return r;
        }
        Rect::from_min_max(self.apply_pos(r.min), self.apply_pos(r.max))
    }

    /// Map a screen-space point back into layout space.
    pub fn invert_pos(&self, p: Pos2) -> Pos2 {
        if self.is_identity() {
            return p;
        }
        pos2(p.x / self.factor, p.y / self.factor)
    }

    pub fn invert_vec(&self, v: Vec2) -> Vec2 {
        if self.is_identity() {
            return v;
        }
        v / self.factor
    }
}

/// Approximate text metrics used to size tooltips without a font backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipStyle {
    pub char_width: f32,
    pub line_height: f32,
    pub padding: f32,
    pub max_width: f32,
    pub cursor_offset: Vec2,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            char_width: 7.0,
            line_height: 16.0,
            padding: 6.0,
            max_width: 260.0,
            cursor_offset: vec2(12.0, 16.0),
        }
    }
}

impl TooltipStyle {
    /// Unscaled size of a tooltip box holding `text`, wrapping at `max_width`.
    pub fn measure(&self, text: &str) -> Vec2 {
        let char_width = self.char_width.max(1.0);
        let inner = (self.max_width - 2.0 * self.padding).max(char_width);
        let per_line = ((inner / char_width).floor() as usize).max(1);

        let mut lines = 0usize;
        let mut widest = 0usize;
        for line in text.lines() {
            let chars = line.chars().count();
            lines += chars.div_ceil(per_line).max(1);
            widest = widest.max(chars.min(per_line));
        }
        let lines = lines.max(1);
        vec2(
            widest as f32 * char_width + 2.0 * self.padding,
            lines as f32 * self.line_height + 2.0 * self.padding,
        )
    }
}

/// Place a tooltip of `size` next to `pointer`, shifted left/up so it stays
/// inside `screen`. Never moved past the screen origin; a tooltip larger than
/// the screen is cut down to the screen size.
pub fn tooltip_rect(pointer: Pos2, offset: Vec2, size: Vec2, screen: Vec2) -> Rect {
    let screen = screen.max(Vec2::ZERO);
    let size = size.max(Vec2::ZERO).min(screen);
    let mut min = pointer + offset;
    if min.x + size.x > screen.x {
        min.x = screen.x - size.x;
    }
    if min.y + size.y > screen.y {
        min.y = screen.y - size.y;
    }
    min.x = min.x.max(0.0);
    min.y = min.y.max(0.0);
    Rect::from_min_size(min, size)
}
