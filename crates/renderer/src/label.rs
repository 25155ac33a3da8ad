use crate::surface::{Surface, TextExtent};
use obar_config::{Align, Dim, TextConfig};
use obar_core::{ShowMode, Template};
use obar_theme::TextStyle;
use tracing::warn;

/// A text label: compiled templates plus the state of its last render.
#[derive(Debug, Clone)]
pub struct Label {
    pub x:     Dim,
    pub y:     Dim,
    pub align: Align,
    pub style: TextStyle,
    template:     Template,
    alt_template: Option<Template>,
    text:         String,
    /// Mode of the last successful render; `None` before the first one.
    rendered_for: Option<ShowMode>,
    pub extent: TextExtent,
    /// Baseline-left position relative to the box origin.
    pub pos: (i32, i32),
}

impl Label {
    pub fn from_config(cfg: &TextConfig) -> Self {
        Self {
            x:            cfg.x,
            y:            cfg.y,
            align:        cfg.align,
            style:        TextStyle::from_config(cfg),
            template:     Template::compile(&cfg.string),
            alt_template: cfg.alt_string.as_deref().map(Template::compile),
            text:         String::new(),
            rendered_for: None,
            extent:       TextExtent::default(),
            pos:          (0, 0),
        }
    }

    /// The string currently on display.
    pub fn text(&self) -> &str {
        &self.text
    }

    fn template_for(&self, mode: ShowMode) -> &Template {
        match mode {
            ShowMode::Alternative => self.alt_template.as_ref().unwrap_or(&self.template),
            ShowMode::Normal => &self.template,
        }
    }

    /// Re-render for this update and re-measure if the text changed.
    ///
    /// Static templates render once per mode. A failed render keeps the
    /// previous text. Returns `true` when the displayed text changed.
    pub fn refresh<S: Surface + ?Sized>(
        &mut self,
        mode: ShowMode,
        tokens: &[String],
        surface: &mut S,
    ) -> bool {
        let template = self.template_for(mode);
        let first = self.rendered_for.is_none();
        if !first && !template.is_dynamic() && self.rendered_for == Some(mode) {
            return false;
        }

        match template.render(tokens) {
            Ok(text) => {
                self.rendered_for = Some(mode);
                if text == self.text && !first {
                    return false;
                }
                self.text = text;
                self.extent = surface.measure_text(&self.style.font, &self.text);
                true
            }
            Err(e) => {
                warn!("label: {e}; keeping {:?}", self.text);
                if first {
                    self.extent = surface.measure_text(&self.style.font, &self.text);
                }
                false
            }
        }
    }
}
