//! Draw plans: the ordered list of primitives for one frame.

use crate::{
    geometry::{BoxModel, Fill, Rect},
    label::Label,
};
use obar_core::ShowMode;
use obar_theme::{Color, Colors, Colorscheme, FontSpec};
use serde::Serialize;

/// Window position and size in root-window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct WindowBounds {
    pub x:      i32,
    pub y:      i32,
    pub width:  i32,
    pub height: i32,
}

/// One drawing primitive. Coordinates are window-relative.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    Fill {
        rect:  Rect,
        color: Color,
    },
    Text {
        x:     i32,
        y:     i32,
        font:  FontSpec,
        color: Color,
        text:  String,
    },
}

/// Everything one update draws, in painting order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DrawPlan {
    pub bounds:      WindowBounds,
    /// The frame (clear, outline, border, padding) is part of this plan.
    pub full_redraw: bool,
    pub commands:    Vec<DrawCommand>,
}

impl DrawPlan {
    pub fn new(bounds: WindowBounds, full_redraw: bool) -> Self {
        Self {
            bounds,
            full_redraw,
            commands: Vec::new(),
        }
    }

    fn fill(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Fill { rect, color });
    }

    /// Clear the window, then paint outline, border and padding rings.
    pub fn push_frame(&mut self, bm: &BoxModel, colors: Colors, offset: (i32, i32)) {
        let whole = Rect::new(0, 0, self.bounds.width, self.bounds.height);
        self.fill(whole, Color::TRANSPARENT);

        let layers = bm.layers();
        for (ring, color) in [
            (layers.outline, colors.bg),
            (layers.border, colors.border),
            (layers.padding, colors.bg),
        ] {
            for rect in ring.rects() {
                self.fill(rect.translate(offset.0, offset.1), color);
            }
        }
    }

    /// Paint the filled part and the remainder of the content rectangle.
    pub fn push_content(&mut self, bm: &BoxModel, fill: &Fill, colors: Colors, offset: (i32, i32)) {
        let (filled, rest) = bm.split_content(fill.filled);
        self.fill(filled.translate(offset.0, offset.1), colors.fg);
        self.fill(rest.translate(offset.0, offset.1), colors.bg);
    }

    pub fn push_separator(&mut self, bm: &BoxModel, position: i32, color: Color, offset: (i32, i32)) {
        self.fill(bm.separator(position).translate(offset.0, offset.1), color);
    }

    pub fn push_label(&mut self, label: &Label, mode: ShowMode, offset: (i32, i32)) {
        if label.text().is_empty() {
            return;
        }
        self.commands.push(DrawCommand::Text {
            x:     label.pos.0 + offset.0,
            y:     label.pos.1 + offset.1,
            font:  label.style.font.clone(),
            color: label.style.color_for(mode),
            text:  label.text().to_owned(),
        });
    }

    /// Build the complete plan for one value.
    #[allow(clippy::too_many_arguments)]
    pub fn for_update(
        bounds: WindowBounds,
        full_redraw: bool,
        bm: &BoxModel,
        fill: &Fill,
        scheme: &Colorscheme,
        mode: ShowMode,
        labels: &[Label],
        offset: (i32, i32),
    ) -> Self {
        let mut plan = Self::new(bounds, full_redraw);
        let colors = scheme.select(mode, fill.overflow);

        if full_redraw {
            plan.push_frame(bm, colors, offset);
        }
        if fill.proportional {
            plan.push_content(bm, fill, scheme.proportional(mode), offset);
        } else {
            plan.push_content(bm, fill, colors, offset);
        }
        if let Some(position) = fill.separator {
            plan.push_separator(bm, position, colors.bg, offset);
        }
        for label in labels {
            plan.push_label(label, mode, offset);
        }
        plan
    }
}
