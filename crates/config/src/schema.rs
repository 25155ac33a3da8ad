use obar_core::{BarError, Result};
use serde::{Deserialize, Serialize};

/// Largest accepted frame width, thickness or label size, in pixels.
pub const MAX_WIDTH: i32 = 10_000;
/// Largest accepted `offset` magnitude, in pixels.
pub const MAX_OFFSET: i32 = 100_000;

/// One named style from the style file. Every field falls back to the
/// built-in default when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Which monitor the bar is placed on.
    pub monitor: Placement,
    pub orientation: Orientation,
    /// How values above the cap are drawn.
    pub overflow: Overflow,
    /// Anchor of the bar centre along x.
    pub x: Dim,
    /// Anchor of the bar centre along y.
    pub y: Dim,
    /// Length of the content area along the primary axis.
    pub length: Dim,
    /// Width of the content area across the primary axis.
    pub thickness: i32,
    pub outline: i32,
    pub border: i32,
    pub padding: i32,
    pub color: ColorConfig,
    /// Text labels drawn around or over the bar.
    pub text: Vec<TextConfig>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            monitor:     Placement::Combined,
            orientation: Orientation::Vertical,
            overflow:    Overflow::Hidden,
            x:           Dim::new(1.0, -48),
            y:           Dim::new(0.5, 0),
            length:      Dim::new(0.3, 0),
            thickness:   24,
            outline:     3,
            border:      4,
            padding:     3,
            color:       ColorConfig::default(),
            text:        Vec::new(),
        }
    }
}

impl StyleConfig {
    /// Reject values the geometry engine cannot work with.
    pub fn validate(&self) -> Result<()> {
        for (name, dim) in [("x", self.x), ("y", self.y), ("length", self.length)] {
            dim.validate(name)?;
        }
        for (name, width) in [
            ("thickness", self.thickness),
            ("outline", self.outline),
            ("border", self.border),
            ("padding", self.padding),
        ] {
            if !(0..=MAX_WIDTH).contains(&width) {
                return Err(BarError::Config(format!(
                    "'{name}' must lie in [0, {MAX_WIDTH}] (got {width})"
                )));
            }
        }
        self.color.validate()?;
        for (i, text) in self.text.iter().enumerate() {
            text.validate()
                .map_err(|e| BarError::Config(format!("text #{i}: {e}")))?;
        }
        Ok(())
    }
}

/// A length or position: `relative` fraction of the monitor extent plus a pixel `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dim {
    pub relative: f64,
    #[serde(default)]
    pub offset: i32,
}

impl Dim {
    pub const fn new(relative: f64, offset: i32) -> Self {
        Self { relative, offset }
    }

    fn validate(&self, name: &str) -> Result<()> {
        if !(0.0..=1.0).contains(&self.relative) {
            return Err(BarError::Config(format!(
                "'{name}.relative' must lie in [0, 1] (got {})",
                self.relative
            )));
        }
        if !(-MAX_OFFSET..=MAX_OFFSET).contains(&self.offset) {
            return Err(BarError::Config(format!(
                "'{name}.offset' must lie in [-{MAX_OFFSET}, {MAX_OFFSET}] (got {})",
                self.offset
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    /// Values above the cap show a full bar in overflow colors.
    #[default]
    Hidden,
    /// Values above the cap shrink the filled part to `cap / value`.
    Proportional,
}

/// Monitor selection. Written as a plain string in the style file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum Placement {
    /// The bounding box of every monitor.
    #[default]
    Combined,
    /// The monitor holding the centre of the focused window.
    RelativeFocus,
    /// The monitor under the pointer.
    RelativePointer,
    /// A monitor by output name, e.g. `"DP-1"`.
    Named(String),
}

impl Placement {
    /// Focus- and pointer-relative placements move between updates.
    #[must_use]
    pub fn is_relative(&self) -> bool {
        matches!(self, Self::RelativeFocus | Self::RelativePointer)
    }
}

impl From<String> for Placement {
    fn from(s: String) -> Self {
        match s.as_str() {
            "combined" => Self::Combined,
            "relative_focus" => Self::RelativeFocus,
            "relative_pointer" => Self::RelativePointer,
            _ => Self::Named(s),
        }
    }
}

impl From<Placement> for String {
    fn from(p: Placement) -> Self {
        match p {
            Placement::Combined => "combined".into(),
            Placement::RelativeFocus => "relative_focus".into(),
            Placement::RelativePointer => "relative_pointer".into(),
            Placement::Named(name) => name,
        }
    }
}

/// Colors for one state of the bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub fg:     String,
    pub bg:     String,
    pub border: String,
}

impl ColorSpec {
    fn new(fg: &str, bg: &str, border: &str) -> Self {
        Self {
            fg:     fg.into(),
            bg:     bg.into(),
            border: border.into(),
        }
    }

    fn validate(&self, name: &str) -> Result<()> {
        for (part, spec) in [("fg", &self.fg), ("bg", &self.bg), ("border", &self.border)] {
            if !is_color_spec(spec) {
                return Err(BarError::Config(format!(
                    "color.{name}.{part}: invalid color {spec:?} (expected #RRGGBB or #RRGGBBAA)"
                )));
            }
        }
        Ok(())
    }
}

/// The four colorschemes, picked by show mode and overflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub normal:      ColorSpec,
    pub overflow:    ColorSpec,
    pub alt:         ColorSpec,
    pub altoverflow: ColorSpec,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            normal:      ColorSpec::new("#ffffff", "#00000090", "#ffffff"),
            overflow:    ColorSpec::new("#ff0000", "#00000090", "#ff0000"),
            alt:         ColorSpec::new("#555555", "#00000090", "#555555"),
            altoverflow: ColorSpec::new("#550000", "#00000090", "#550000"),
        }
    }
}

impl ColorConfig {
    fn validate(&self) -> Result<()> {
        self.normal.validate("normal")?;
        self.overflow.validate("overflow")?;
        self.alt.validate("alt")?;
        self.altoverflow.validate("altoverflow")
    }
}

/// One text label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Template source, e.g. `"Out: {1}"`.
    pub string: String,
    /// Template used for alternate-mode updates instead of `string`.
    pub alt_string: Option<String>,
    /// Font family name.
    pub font: String,
    /// Font pixel size.
    pub size: u32,
    pub color: String,
    pub alt_color: Option<String>,
    /// Anchor relative to the bar box.
    pub x: Dim,
    pub y: Dim,
    pub align: Align,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            string:     String::new(),
            alt_string: None,
            font:       "monospace".into(),
            size:       16,
            color:      "#ffffff".into(),
            alt_color:  None,
            x:          Dim::new(0.5, 0),
            y:          Dim::new(0.5, 0),
            align:      Align::default(),
        }
    }
}

impl TextConfig {
    fn validate(&self) -> Result<()> {
        self.x.validate("x")?;
        self.y.validate("y")?;
        if self.size == 0 || self.size > MAX_WIDTH as u32 {
            return Err(BarError::Config(format!("'size' must lie in [1, {MAX_WIDTH}]")));
        }
        for (name, v) in [("align.x", self.align.x), ("align.y", self.align.y)] {
            if !(0.0..=1.0).contains(&v) {
                return Err(BarError::Config(format!("'{name}' must lie in [0, 1] (got {v})")));
            }
        }
        for spec in std::iter::once(&self.color).chain(self.alt_color.as_ref()) {
            if !is_color_spec(spec) {
                return Err(BarError::Config(format!("invalid color {spec:?}")));
            }
        }
        Ok(())
    }
}

/// Which point of the rendered text sits on the anchor (`0.5, 0.5` = centre).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Align {
    pub x: f64,
    pub y: f64,
}

impl Default for Align {
    fn default() -> Self {
        Self { x: 0.5, y: 0.5 }
    }
}

/// `#RRGGBB` or `#RRGGBBAA`.
pub fn is_color_spec(spec: &str) -> bool {
    spec.strip_prefix('#')
        .is_some_and(|hex| matches!(hex.len(), 6 | 8) && hex.bytes().all(|b| b.is_ascii_hexdigit()))
}
