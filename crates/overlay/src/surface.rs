//! JSON-lines surface: every window operation becomes one JSON object on the
//! output stream, for an external drawer to execute.

use crate::monitors::MonitorSet;
use obar_config::Placement;
use obar_core::{BarError, Monitor, Result};
use obar_renderer::{DrawCommand, DrawPlan, Rect, Surface, TextExtent, WindowBounds};
use obar_theme::{Color, FontSpec};
use serde::Serialize;
use std::io::Write;

/// Horizontal advance of one character, as a fraction of the font size.
const ADVANCE: f64 = 0.6;

#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Event<'a> {
    Show,
    Hide,
    Bounds(WindowBounds),
    Draw { command: &'a DrawCommand },
    Present(&'a DrawPlan),
}

/// [`Surface`] writing JSON lines to `out`.
pub struct JsonSurface<W: Write> {
    out:      W,
    monitors: MonitorSet,
}

impl<W: Write> JsonSurface<W> {
    pub fn new(out: W, monitors: MonitorSet) -> Self {
        Self { out, monitors }
    }

    pub fn monitors_mut(&mut self) -> &mut MonitorSet {
        &mut self.monitors
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, event: &Event<'_>) -> Result<()> {
        let line = serde_json::to_string(event)
            .map_err(|e| BarError::Surface(format!("encode: {e}")))?;
        writeln!(self.out, "{line}")?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Surface for JsonSurface<W> {
    fn monitor(&mut self, placement: &Placement) -> Monitor {
        self.monitors.resolve(placement)
    }

    fn measure_text(&mut self, font: &FontSpec, text: &str) -> TextExtent {
        let size = f64::from(font.size);
        TextExtent {
            width:  (ADVANCE * size * text.chars().count() as f64).round() as i32,
            height: font.size as i32,
        }
    }

    fn set_window_bounds(&mut self, bounds: WindowBounds) -> Result<()> {
        self.emit(&Event::Bounds(bounds))
    }

    fn fill_rectangle(&mut self, color: Color, rect: Rect) -> Result<()> {
        self.emit(&Event::Draw {
            command: &DrawCommand::Fill { rect, color },
        })
    }

    fn draw_text(&mut self, font: &FontSpec, color: Color, x: i32, y: i32, text: &str) -> Result<()> {
        self.emit(&Event::Draw {
            command: &DrawCommand::Text {
                x,
                y,
                font: font.clone(),
                color,
                text: text.to_owned(),
            },
        })
    }

    fn show_window(&mut self) -> Result<()> {
        self.emit(&Event::Show)
    }

    fn hide_window(&mut self) -> Result<()> {
        self.emit(&Event::Hide)
    }

    /// One line per frame.
    fn present(&mut self, plan: &DrawPlan) -> Result<()> {
        self.emit(&Event::Present(plan))
    }
}
