use crate::{
    geometry::Rect,
    plan::{DrawCommand, DrawPlan, WindowBounds},
};
use obar_config::Placement;
use obar_core::{Monitor, Result};
use obar_theme::{Color, FontSpec};

/// Measured size of a rendered string, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextExtent {
    pub width:  i32,
    pub height: i32,
}

/// The platform side of the bar: monitors, fonts, the window and pixels.
///
/// The coordinator never talks to a display server directly; everything goes
/// through this trait so backends (and test doubles) can be swapped.
pub trait Surface {
    /// The monitor the bar should be laid out on for `placement`.
    fn monitor(&mut self, placement: &Placement) -> Monitor;

    fn measure_text(&mut self, font: &FontSpec, text: &str) -> TextExtent;

    fn set_window_bounds(&mut self, bounds: WindowBounds) -> Result<()>;

    fn fill_rectangle(&mut self, color: Color, rect: Rect) -> Result<()>;

    /// Draw `text` with its baseline-left corner at `(x, y)`.
    fn draw_text(&mut self, font: &FontSpec, color: Color, x: i32, y: i32, text: &str) -> Result<()>;

    /// Map the window and raise it.
    fn show_window(&mut self) -> Result<()>;

    fn hide_window(&mut self) -> Result<()>;

    /// Draw a frame. The default replays the plan command by command.
    fn present(&mut self, plan: &DrawPlan) -> Result<()> {
        for command in &plan.commands {
            match command {
                DrawCommand::Fill { rect, color } => self.fill_rectangle(*color, *rect)?,
                DrawCommand::Text { x, y, font, color, text } => {
                    self.draw_text(font, *color, *x, *y, text)?
                }
            }
        }
        Ok(())
    }
}
