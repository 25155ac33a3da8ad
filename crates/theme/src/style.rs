use crate::colors::Color;
use obar_config::TextConfig;
use obar_core::ShowMode;

/// Font request handed to the surface; resolving it is the surface's job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct FontSpec {
    pub family: String,
    /// Pixel size.
    pub size:   u32,
}

/// Paint settings for one text label.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font:      FontSpec,
    pub color:     Color,
    /// Used for alternate-mode updates; falls back to `color`.
    pub alt_color: Option<Color>,
}

impl TextStyle {
    pub fn from_config(cfg: &TextConfig) -> Self {
        Self {
            font: FontSpec {
                family: cfg.font.clone(),
                size:   cfg.size,
            },
            color:     Color::from_hex_or(&cfg.color, Color::WHITE),
            alt_color: cfg.alt_color.as_deref().and_then(Color::from_hex),
        }
    }

    #[must_use]
    pub fn color_for(&self, mode: ShowMode) -> Color {
        match mode {
            ShowMode::Normal => self.color,
            ShowMode::Alternative => self.alt_color.unwrap_or(self.color),
        }
    }
}
