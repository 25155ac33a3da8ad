pub mod colors;
pub mod style;

pub use colors::Color;
pub use style::{FontSpec, TextStyle};

use obar_config::{ColorConfig, ColorSpec};
use obar_core::ShowMode;

/// Colors for one bar state, pre-parsed from the style file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colors {
    pub fg:     Color,
    pub bg:     Color,
    pub border: Color,
}

impl Colors {
    fn from_spec(spec: &ColorSpec, fallback: Self) -> Self {
        Self {
            fg:     Color::from_hex_or(&spec.fg, fallback.fg),
            bg:     Color::from_hex_or(&spec.bg, fallback.bg),
            border: Color::from_hex_or(&spec.border, fallback.border),
        }
    }

    const fn uniform(fg: Color) -> Self {
        Self {
            fg,
            bg: Color::SHADE,
            border: fg,
        }
    }
}

/// Compiled colorscheme derived from the `color` table of a style.
///
/// Building it is infallible: invalid color strings fall back to the
/// built-in scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colorscheme {
    pub normal:      Colors,
    pub overflow:    Colors,
    pub alt:         Colors,
    pub altoverflow: Colors,
}

impl Colorscheme {
    pub fn from_config(cfg: &ColorConfig) -> Self {
        let fallback = Self::default();
        Self {
            normal:      Colors::from_spec(&cfg.normal, fallback.normal),
            overflow:    Colors::from_spec(&cfg.overflow, fallback.overflow),
            alt:         Colors::from_spec(&cfg.alt, fallback.alt),
            altoverflow: Colors::from_spec(&cfg.altoverflow, fallback.altoverflow),
        }
    }

    /// The mode's base colors, ignoring overflow.
    #[must_use]
    pub fn base(&self, mode: ShowMode) -> Colors {
        match mode {
            ShowMode::Normal => self.normal,
            ShowMode::Alternative => self.alt,
        }
    }

    /// Colors for the frame and an overflowing or non-overflowing value.
    #[must_use]
    pub fn select(&self, mode: ShowMode, overflow: bool) -> Colors {
        match (mode, overflow) {
            (ShowMode::Normal, false) => self.normal,
            (ShowMode::Normal, true) => self.overflow,
            (ShowMode::Alternative, false) => self.alt,
            (ShowMode::Alternative, true) => self.altoverflow,
        }
    }

    /// Content colors for proportional overflow: the capped part keeps the
    /// base fg, the excess shows the overflow fg.
    #[must_use]
    pub fn proportional(&self, mode: ShowMode) -> Colors {
        Colors {
            bg: self.select(mode, true).fg,
            ..self.base(mode)
        }
    }
}

impl Default for Colorscheme {
    fn default() -> Self {
        Self {
            normal:      Colors::uniform(Color::WHITE),
            overflow:    Colors::uniform(Color::RED),
            alt:         Colors::uniform(Color::GREY),
            altoverflow: Colors::uniform(Color::DARK_RED),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_builtin_scheme() {
        assert_eq!(Colorscheme::from_config(&ColorConfig::default()), Colorscheme::default());
    }

    #[test]
    fn selection_by_mode_and_overflow() {
        let scheme = Colorscheme::default();
        assert_eq!(scheme.select(ShowMode::Normal, false).fg, Color::WHITE);
        assert_eq!(scheme.select(ShowMode::Normal, true).fg, Color::RED);
        assert_eq!(scheme.select(ShowMode::Alternative, false).fg, Color::GREY);
        assert_eq!(scheme.select(ShowMode::Alternative, true).fg, Color::DARK_RED);
    }

    #[test]
    fn proportional_uses_overflow_fg_as_background() {
        let scheme = Colorscheme::default();
        let colors = scheme.proportional(ShowMode::Alternative);
        assert_eq!(colors.fg, Color::GREY);
        assert_eq!(colors.bg, Color::DARK_RED);
    }

    #[test]
    fn invalid_entries_fall_back() {
        let mut cfg = ColorConfig::default();
        cfg.normal.fg = "white".into();
        cfg.normal.bg = "#10203040".into();
        let scheme = Colorscheme::from_config(&cfg);
        assert_eq!(scheme.normal.fg, Color::WHITE);
        assert_eq!(scheme.normal.bg, Color::rgba(0x10, 0x20, 0x30, 0x40));
    }
}
