//! Sequencing of one update: parse, render labels, lay out, draw.

use crate::{
    geometry::{BoxModel, BoxStyle, Fill},
    label::Label,
    layout::{layout, CanvasBounds},
    plan::{DrawPlan, WindowBounds},
    surface::Surface,
};
use obar_config::{Dim, Overflow, Placement, StyleConfig};
use obar_core::{BarError, InputValue, Monitor, Result, ShowMode, Visibility, VisualState};
use obar_theme::Colorscheme;

/// What was last put on screen; a full redraw is skipped while it is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrameKey {
    visual: VisualState,
    length: i32,
    window: WindowBounds,
}

/// Summary of one applied update, for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateReport {
    pub value:       i64,
    pub cap:         i64,
    pub mode:        ShowMode,
    pub fill:        Fill,
    pub full_redraw: bool,
}

/// Owns all bar state and drives a [`Surface`] one update at a time.
#[derive(Debug)]
pub struct Coordinator {
    placement:   Placement,
    box_style:   BoxStyle,
    anchor:      (Dim, Dim),
    overflow:    Overflow,
    colorscheme: Colorscheme,
    labels:      Vec<Label>,
    cap:         i64,

    visibility: Visibility,
    /// Monitor and box model of the last layout.
    placed:     Option<(Monitor, BoxModel)>,
    bounds:     CanvasBounds,
    window:     WindowBounds,
    last_frame: Option<FrameKey>,
}

impl Coordinator {
    /// Build the coordinator for a style and a maximum value `cap` (≥ 1).
    /// The style is validated first.
    pub fn new(style: &StyleConfig, cap: i64) -> Result<Self> {
        if cap <= 0 {
            return Err(BarError::Config(format!("cap must be positive (got {cap})")));
        }
        style.validate()?;

        Ok(Self {
            placement:   style.monitor.clone(),
            box_style:   BoxStyle::from_config(style),
            anchor:      (style.x, style.y),
            overflow:    style.overflow,
            colorscheme: Colorscheme::from_config(&style.color),
            labels:      style.text.iter().map(Label::from_config).collect(),
            cap,
            visibility: Visibility::Hidden,
            placed:     None,
            bounds:     CanvasBounds::default(),
            window:     WindowBounds::default(),
            last_frame: None,
        })
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn cap(&self) -> i64 {
        self.cap
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Box model of the last update, if any.
    pub fn box_model(&self) -> Option<&BoxModel> {
        self.placed.as_ref().map(|(_, bm)| bm)
    }

    pub fn bounds(&self) -> CanvasBounds {
        self.bounds
    }

    pub fn window(&self) -> WindowBounds {
        self.window
    }

    /// Parse one raw input line and apply it. An unparsable line is returned
    /// as [`BarError::InvalidInput`] and leaves the bar untouched.
    pub fn submit_update<S: Surface + ?Sized>(&mut self, line: &str, surface: &mut S) -> Result<UpdateReport> {
        let input = InputValue::parse(line)?;
        self.apply(&input, surface)
    }

    /// Run one update cycle for an already parsed input.
    pub fn apply<S: Surface + ?Sized>(&mut self, input: &InputValue, surface: &mut S) -> Result<UpdateReport> {
        let mut labels_changed = false;
        for label in &mut self.labels {
            labels_changed |= label.refresh(input.mode, &input.tokens, surface);
        }

        let relayout = self.placed.is_none() || self.placement.is_relative();
        if relayout {
            let monitor = surface.monitor(&self.placement);
            let bm = BoxModel::for_monitor(&self.box_style, &monitor);
            self.placed = Some((monitor, bm));
        }
        let Some((monitor, bm)) = &self.placed else {
            return Err(BarError::Surface("no monitor to lay the bar out on".into()));
        };
        let bm = *bm;

        if relayout || labels_changed {
            self.bounds = layout(&mut self.labels, &bm);
            let (x, y) = bm.anchor(monitor, self.anchor.0, self.anchor.1);
            self.window = WindowBounds {
                x:      x - self.bounds.offset_x,
                y:      y - self.bounds.offset_y,
                width:  self.bounds.width(),
                height: self.bounds.height(),
            };
        }

        let fill = Fill::compute(input.value, self.cap, self.overflow, bm.length, bm.style.padding);
        let key = FrameKey {
            visual: VisualState::new(input.mode, fill.overflow, true),
            length: bm.length,
            window: self.window,
        };
        let full_redraw = labels_changed || self.last_frame != Some(key);

        surface.set_window_bounds(self.window)?;
        if self.visibility == Visibility::Hidden {
            surface.show_window()?;
            self.visibility = Visibility::Shown;
        }

        let plan = DrawPlan::for_update(
            self.window,
            full_redraw,
            &bm,
            &fill,
            &self.colorscheme,
            input.mode,
            &self.labels,
            self.bounds.offset(),
        );
        surface.present(&plan)?;
        self.last_frame = Some(key);

        Ok(UpdateReport {
            value: input.value,
            cap: self.cap,
            mode: input.mode,
            fill,
            full_redraw,
        })
    }

    /// The idle timeout elapsed without input.
    pub fn on_idle_timeout<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<()> {
        self.hide(surface)
    }

    /// Unmap the window. The next update redraws the whole frame.
    pub fn hide<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<()> {
        if self.visibility == Visibility::Shown {
            surface.hide_window()?;
            self.visibility = Visibility::Hidden;
            self.last_frame = None;
        }
        Ok(())
    }
}
