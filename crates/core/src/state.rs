use serde::{Deserialize, Serialize};

/// Whether the bar window is currently mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

/// Color/template set requested by the input line (`!` suffix selects `Alternative`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShowMode {
    #[default]
    Normal,
    Alternative,
}

/// The flags that decide whether the static frame has to be redrawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisualState {
    pub alternate: bool,
    pub overflow:  bool,
    pub mapped:    bool,
}

impl VisualState {
    #[must_use]
    pub fn new(mode: ShowMode, overflow: bool, mapped: bool) -> Self {
        Self {
            alternate: mode == ShowMode::Alternative,
            overflow,
            mapped,
        }
    }
}

/// A physical output (or the combined screen) in root-window coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monitor {
    pub name:   String,
    pub x:      i32,
    pub y:      i32,
    pub width:  i32,
    pub height: i32,
}

impl Monitor {
    pub fn new(name: impl Into<String>, x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            width,
            height,
        }
    }

    /// `true` if the point lies inside this monitor (right/bottom edges excluded).
    #[must_use]
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}
