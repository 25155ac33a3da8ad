//! Placement of text labels around the box and the window growth they need.

use crate::{geometry::BoxModel, label::Label};

/// How far the window extends around the box origin.
///
/// `offset_*` is the extension in the negative direction (≥ 0), `max_*` the
/// extent in the positive direction. The box itself is drawn at
/// `(offset_x, offset_y)` inside the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CanvasBounds {
    pub offset_x: i32,
    pub offset_y: i32,
    pub max_x:    i32,
    pub max_y:    i32,
}

impl CanvasBounds {
    /// Bounds of the bare box, without labels.
    pub fn of_box(bm: &BoxModel) -> Self {
        Self {
            offset_x: 0,
            offset_y: 0,
            max_x:    bm.size_x,
            max_y:    bm.size_y,
        }
    }

    pub fn width(&self) -> i32 {
        self.offset_x + self.max_x
    }

    pub fn height(&self) -> i32 {
        self.offset_y + self.max_y
    }

    pub fn offset(&self) -> (i32, i32) {
        (self.offset_x, self.offset_y)
    }
}

/// Position every label against `bm` using its last measured extent and
/// return the bounds that fit the box and all labels.
pub fn layout(labels: &mut [Label], bm: &BoxModel) -> CanvasBounds {
    let mut bounds = CanvasBounds::of_box(bm);
    let (mut min_x, mut min_y) = (0, 0);

    for label in labels.iter_mut() {
        let width = f64::from(label.extent.width);
        let height = f64::from(label.extent.height);

        let x = label.x.relative * f64::from(bm.size_x) - width * label.align.x
            + f64::from(label.x.offset);
        let y = label.y.relative * f64::from(bm.size_y) + height * (1.0 - label.align.y)
            + f64::from(label.y.offset);
        label.pos = (x as i32, y as i32);

        let (px, py) = label.pos;
        min_x = min_x.min(px);
        min_y = min_y.min(py - label.extent.height);
        bounds.max_x = bounds.max_x.max(px + label.extent.width);
        bounds.max_y = bounds.max_y.max(py);
    }

    bounds.offset_x = -min_x;
    bounds.offset_y = -min_y;
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        geometry::BoxStyle,
        surface::TextExtent,
    };
    use obar_config::{Align, Dim, Orientation, TextConfig};

    fn bar() -> BoxModel {
        let style = BoxStyle {
            orientation: Orientation::Horizontal,
            outline:     1,
            border:      1,
            padding:     1,
            thickness:   14,
            length:      Dim::new(0.0, 100),
        };
        BoxModel::compute(&style, 1000)
    }

    fn label(x: Dim, y: Dim, align: Align, width: i32, height: i32) -> Label {
        let mut label = Label::from_config(&TextConfig {
            x,
            y,
            align,
            ..TextConfig::default()
        });
        label.extent = TextExtent { width, height };
        label
    }

    #[test]
    fn no_labels_is_the_box() {
        let bm = bar();
        let bounds = layout(&mut [], &bm);
        assert_eq!(bounds, CanvasBounds::of_box(&bm));
        assert_eq!((bounds.width(), bounds.height()), (106, 20));
    }

    #[test]
    fn centred_label_stays_inside() {
        let bm = bar();
        let mut labels = [label(Dim::new(0.5, 0), Dim::new(0.5, 0), Align::default(), 40, 10)];
        let bounds = layout(&mut labels, &bm);
        assert_eq!(labels[0].pos, (33, 15));
        assert_eq!(bounds, CanvasBounds::of_box(&bm));
    }

    #[test]
    fn label_left_of_bar_extends_negative_x() {
        let bm = bar();
        let align = Align { x: 1.0, y: 0.5 };
        let mut labels = [label(Dim::new(0.0, -4), Dim::new(0.5, 0), align, 30, 10)];
        let bounds = layout(&mut labels, &bm);
        assert_eq!(labels[0].pos, (-34, 15));
        assert_eq!(bounds.offset_x, 34);
        assert_eq!(bounds.offset_y, 0);
        assert_eq!(bounds.width(), 34 + 106);
    }

    #[test]
    fn label_above_and_below() {
        let bm = bar();
        let above = label(Dim::new(0.5, 0), Dim::new(0.0, -2), Align { x: 0.5, y: 1.0 }, 20, 12);
        let below = label(Dim::new(0.5, 0), Dim::new(1.0, 2), Align { x: 0.5, y: 0.0 }, 120, 12);
        let mut labels = [above, below];
        let bounds = layout(&mut labels, &bm);

        // above: baseline at y = -2, top at -14
        assert_eq!(labels[0].pos, (43, -2));
        // below: baseline at 20 + 12 + 2
        assert_eq!(labels[1].pos, (-7, 34));
        assert_eq!(bounds.offset_x, 7);
        assert_eq!(bounds.offset_y, 14);
        assert_eq!(bounds.max_x, 113);
        assert_eq!(bounds.max_y, 34);
        assert_eq!((bounds.width(), bounds.height()), (120, 48));
    }
}
