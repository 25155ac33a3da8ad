//! Hyprland queries used to place the bar: monitors, the focused window and
//! the pointer.

pub mod client;
pub mod monitors;

pub use client::{fetch_active_window, fetch_cursor_pos, fetch_monitors, HyprlandIpc};
pub use monitors::{ActiveWindow, CursorPos, MonitorInfo};
