//! Box model of the bar: outline, border and padding rings around a content
//! rectangle of `length × thickness` (transposed for vertical bars).
//!
//! All rectangles are relative to the box origin. The caller shifts them by
//! the canvas offset when labels extend the window.

use obar_config::{Dim, Orientation, Overflow, StyleConfig};
use obar_core::Monitor;
use serde::Serialize;

/// Keep `value` in `[min, max]`; `max` wins when the range is empty.
fn fit_in(value: i32, min: i32, max: i32) -> i32 {
    value.max(min).min(max)
}

/// Pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[must_use]
    pub const fn translate(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    /// Shrink by `by` on every side.
    #[must_use]
    pub const fn inset(self, by: i32) -> Self {
        Self::new(self.x + by, self.y + by, self.w - 2 * by, self.h - 2 * by)
    }
}

/// The four sides of a frame layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ring {
    pub left:   Rect,
    pub right:  Rect,
    pub top:    Rect,
    pub bottom: Rect,
}

impl Ring {
    /// The `width`-wide band just inside `outer`.
    fn inside(outer: Rect, width: i32) -> Self {
        Self {
            left:   Rect::new(outer.x, outer.y, width, outer.h),
            right:  Rect::new(outer.x + outer.w - width, outer.y, width, outer.h),
            top:    Rect::new(outer.x, outer.y, outer.w, width),
            bottom: Rect::new(outer.x, outer.y + outer.h - width, outer.w, width),
        }
    }

    pub fn rects(&self) -> [Rect; 4] {
        [self.left, self.right, self.top, self.bottom]
    }
}

/// The concentric layers of the box, outermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layers {
    pub outline: Ring,
    pub border:  Ring,
    pub padding: Ring,
    pub content: Rect,
}

/// Style parameters of the box model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxStyle {
    pub orientation: Orientation,
    pub outline:     i32,
    pub border:      i32,
    pub padding:     i32,
    pub thickness:   i32,
    pub length:      Dim,
}

impl BoxStyle {
    pub fn from_config(cfg: &StyleConfig) -> Self {
        Self {
            orientation: cfg.orientation,
            outline:     cfg.outline,
            border:      cfg.border,
            padding:     cfg.padding,
            thickness:   cfg.thickness,
            length:      cfg.length,
        }
    }

    /// Combined frame width on one side.
    #[must_use]
    pub fn fat_layer(&self) -> i32 {
        self.outline + self.border + self.padding
    }
}

/// Box model computed for one monitor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxModel {
    pub style:     BoxStyle,
    /// Content length along the primary axis.
    pub length:    i32,
    /// Full box width including the frame.
    pub size_x:    i32,
    /// Full box height including the frame.
    pub size_y:    i32,
    pub fat_layer: i32,
}

impl BoxModel {
    /// Lay the box out for `available` pixels along the primary axis.
    pub fn compute(style: &BoxStyle, available: i32) -> Self {
        let fat_layer = style.fat_layer();
        let wanted = (f64::from(available) * style.length.relative) as i32 + style.length.offset;
        let length = fit_in(wanted, 0, available - 2 * fat_layer).max(0);

        let (content_x, content_y) = match style.orientation {
            Orientation::Horizontal => (length, style.thickness),
            Orientation::Vertical => (style.thickness, length),
        };

        Self {
            style: *style,
            length,
            size_x: content_x + 2 * fat_layer,
            size_y: content_y + 2 * fat_layer,
            fat_layer,
        }
    }

    /// Lay the box out on `monitor`, using its extent along the bar's axis.
    pub fn for_monitor(style: &BoxStyle, monitor: &Monitor) -> Self {
        let available = match style.orientation {
            Orientation::Horizontal => monitor.width,
            Orientation::Vertical => monitor.height,
        };
        Self::compute(style, available)
    }

    pub fn outer(&self) -> Rect {
        Rect::new(0, 0, self.size_x, self.size_y)
    }

    pub fn content(&self) -> Rect {
        self.outer().inset(self.fat_layer)
    }

    pub fn layers(&self) -> Layers {
        let s = &self.style;
        let outer = self.outer();
        let border = outer.inset(s.outline);
        let padding = border.inset(s.border);
        Layers {
            outline: Ring::inside(outer, s.outline),
            border:  Ring::inside(border, s.border),
            padding: Ring::inside(padding, s.padding),
            content: padding.inset(s.padding),
        }
    }

    /// Split the content rectangle into the filled part and the remainder.
    /// Vertical bars fill from the bottom.
    pub fn split_content(&self, filled: i32) -> (Rect, Rect) {
        let c = self.content();
        let rest = self.length - filled;
        match self.style.orientation {
            Orientation::Horizontal => (
                Rect::new(c.x, c.y, filled, c.h),
                Rect::new(c.x + filled, c.y, rest, c.h),
            ),
            Orientation::Vertical => (
                Rect::new(c.x, c.y + rest, c.w, filled),
                Rect::new(c.x, c.y, c.w, rest),
            ),
        }
    }

    /// A `padding`-wide bar across the content, centred on `position`.
    pub fn separator(&self, position: i32) -> Rect {
        let s = &self.style;
        let start = s.outline + s.border + s.padding / 2;
        match s.orientation {
            Orientation::Horizontal => {
                Rect::new(start + position, self.fat_layer, s.padding, s.thickness)
            }
            Orientation::Vertical => Rect::new(
                self.fat_layer,
                start + self.length - position,
                s.thickness,
                s.padding,
            ),
        }
    }

    /// Screen position of the box's top-left corner for an anchor on `monitor`.
    pub fn anchor(&self, monitor: &Monitor, x: Dim, y: Dim) -> (i32, i32) {
        let axis = |extent: i32, size: i32, dim: Dim, origin: i32| {
            let centred = (f64::from(extent) * dim.relative - f64::from(size / 2)) as i32;
            fit_in(centred, 0, extent - size) + dim.offset + origin
        };
        (
            axis(monitor.width, self.size_x, x, monitor.x),
            axis(monitor.height, self.size_y, y, monitor.y),
        )
    }
}

/// How much of the content is filled for one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fill {
    /// Filled length along the primary axis, `0..=length`.
    pub filled:       i32,
    /// The value exceeds the cap.
    pub overflow:     bool,
    /// Drawn in proportional-overflow style.
    pub proportional: bool,
    /// Position of the cap marker, if one is drawn.
    pub separator:    Option<i32>,
}

impl Fill {
    pub fn compute(value: i64, cap: i64, mode: Overflow, length: i32, padding: i32) -> Self {
        let overflow = value > cap;
        if cap <= 0 {
            return Self { filled: 0, overflow, proportional: false, separator: None };
        }

        // i128: `value · length` must not wrap for any i64 value and cap.
        let scaled = |num: i64, den: i64| (i128::from(num) * i128::from(length) / i128::from(den)) as i32;
        if overflow && mode == Overflow::Proportional {
            let filled = scaled(cap, value);
            Self {
                filled,
                overflow,
                proportional: true,
                separator: (filled > padding).then_some(filled),
            }
        } else {
            let filled = scaled(value.clamp(0, cap), cap);
            Self { filled, overflow, proportional: false, separator: None }
        }
    }
}
