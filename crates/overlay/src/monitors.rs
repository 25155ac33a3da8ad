use obar_config::Placement;
use obar_core::Monitor;
use obar_ipc::{fetch_active_window, fetch_cursor_pos, fetch_monitors, HyprlandIpc};
use tracing::{debug, warn};

/// Last known monitor layout, focused window and pointer position.
#[derive(Debug, Clone)]
pub struct MonitorSet {
    /// Used when the compositor reported no monitors.
    screen:   Monitor,
    monitors: Vec<Monitor>,
    focus:    Option<(i32, i32)>,
    pointer:  Option<(i32, i32)>,
}

impl MonitorSet {
    pub fn new(screen_width: i32, screen_height: i32) -> Self {
        Self {
            screen:   Monitor::new("screen", 0, 0, screen_width, screen_height),
            monitors: Vec::new(),
            focus:    None,
            pointer:  None,
        }
    }

    pub fn set_monitors(&mut self, monitors: Vec<Monitor>) {
        self.monitors = monitors;
    }

    /// Centre of the focused window.
    pub fn set_focus(&mut self, point: Option<(i32, i32)>) {
        self.focus = point;
    }

    pub fn set_pointer(&mut self, point: Option<(i32, i32)>) {
        self.pointer = point;
    }

    /// Bounding box of every monitor.
    pub fn combined(&self) -> Monitor {
        let Some(first) = self.monitors.first() else {
            return self.screen.clone();
        };

        let (mut x0, mut y0) = (first.x, first.y);
        let (mut x1, mut y1) = (first.x + first.width, first.y + first.height);
        for m in &self.monitors[1..] {
            x0 = x0.min(m.x);
            y0 = y0.min(m.y);
            x1 = x1.max(m.x + m.width);
            y1 = y1.max(m.y + m.height);
        }
        Monitor::new("combined", x0, y0, x1 - x0, y1 - y0)
    }

    pub fn containing(&self, x: i32, y: i32) -> Option<&Monitor> {
        self.monitors.iter().find(|m| m.contains(x, y))
    }

    /// The monitor `placement` selects, falling back to the combined extent.
    pub fn resolve(&self, placement: &Placement) -> Monitor {
        let found = match placement {
            Placement::Combined => return self.combined(),
            Placement::Named(name) => {
                let found = self.monitors.iter().find(|m| &m.name == name);
                if found.is_none() && !self.monitors.is_empty() {
                    warn!("no monitor named {name:?}; using the combined extent");
                }
                found
            }
            Placement::RelativeFocus => self.focus.and_then(|(x, y)| self.containing(x, y)),
            Placement::RelativePointer => self.pointer.and_then(|(x, y)| self.containing(x, y)),
        };
        found.cloned().unwrap_or_else(|| self.combined())
    }

    /// Query the compositor for what `placement` needs. Failures keep the
    /// previous snapshot.
    pub async fn refresh(&mut self, ipc: &HyprlandIpc, placement: &Placement) {
        match fetch_monitors(ipc).await {
            Ok(infos) => self.set_monitors(infos.iter().map(Monitor::from).collect()),
            Err(e) => warn!("could not query monitors: {e}"),
        }

        match placement {
            Placement::RelativeFocus => match fetch_active_window(ipc).await {
                Ok(window) => self.set_focus(window.centre()),
                Err(e) => warn!("could not query the focused window: {e}"),
            },
            Placement::RelativePointer => match fetch_cursor_pos(ipc).await {
                Ok(pos) => self.set_pointer(Some((pos.x, pos.y))),
                Err(e) => warn!("could not query the pointer: {e}"),
            },
            Placement::Combined | Placement::Named(_) => {}
        }
        debug!("{} monitor(s) known", self.monitors.len());
    }
}
