use obar_core::{BarError, Monitor, Result};
use serde::Deserialize;

/// JSON shape returned by `hyprctl monitors -j`.
///
/// `width` and `height` are in physical pixels; the layout space is logical,
/// so they are divided by `scale`.
#[derive(Debug, Clone, Deserialize)]
pub struct MonitorInfo {
    pub name:    String,
    pub x:       i32,
    pub y:       i32,
    pub width:   i32,
    pub height:  i32,
    #[serde(default = "unit_scale")]
    pub scale:   f64,
}

fn unit_scale() -> f64 {
    1.0
}

impl MonitorInfo {
    pub fn logical_size(&self) -> (i32, i32) {
        if self.scale <= 0.0 {
            return (self.width, self.height);
        }
        (
            (f64::from(self.width) / self.scale).round() as i32,
            (f64::from(self.height) / self.scale).round() as i32,
        )
    }
}

impl From<&MonitorInfo> for Monitor {
    fn from(info: &MonitorInfo) -> Self {
        let (width, height) = info.logical_size();
        Monitor::new(&info.name, info.x, info.y, width, height)
    }
}

/// JSON shape returned by `hyprctl activewindow -j`.
///
/// Hyprland answers `{}` when nothing is focused, hence every field defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ActiveWindow {
    pub at:   Option<[i32; 2]>,
    pub size: Option<[i32; 2]>,
}

impl ActiveWindow {
    /// Centre of the window, if one is focused.
    pub fn centre(&self) -> Option<(i32, i32)> {
        let ([x, y], [w, h]) = (self.at?, self.size?);
        Some((x + w / 2, y + h / 2))
    }
}

/// JSON shape returned by `hyprctl cursorpos -j`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CursorPos {
    pub x: i32,
    pub y: i32,
}

pub fn parse_monitors(raw: &str) -> Result<Vec<MonitorInfo>> {
    serde_json::from_str(raw).map_err(|e| BarError::Ipc(format!("parse monitors: {e}")))
}

pub fn parse_active_window(raw: &str) -> Result<ActiveWindow> {
    serde_json::from_str(raw).map_err(|e| BarError::Ipc(format!("parse activewindow: {e}")))
}

pub fn parse_cursor_pos(raw: &str) -> Result<CursorPos> {
    serde_json::from_str(raw).map_err(|e| BarError::Ipc(format!("parse cursorpos: {e}")))
}
