use crate::config::color::Color;
use crate::foundation::error::{TextFxError, TextFxResult};
use crate::render::raster::Raster;

/// Font family used when an effect does not name one.
pub const DEFAULT_FONT_FAMILY: &str = "sans-serif";

/// Horizontal alignment of multi-line text inside its own box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Everything a collaborator needs to produce a text drawable.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub text: String,
    pub font_family: String,
    /// Font size in pixels.
    pub font_size: f64,
    pub fill: Color,
    /// Extra space between glyphs, in pixels.
    pub letter_spacing: f64,
    pub align: TextAlign,
}

impl TextStyle {
    pub fn new(text: impl Into<String>, font_family: impl Into<String>, font_size: f64) -> Self {
        Self {
            text: text.into(),
            font_family: font_family.into(),
            font_size,
            fill: Color::rgba(1.0, 1.0, 1.0, 1.0),
            letter_spacing: 0.0,
            align: TextAlign::Left,
        }
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    /// Set spacing in thousandths of an em, relative to the current font size.
    pub fn with_char_spacing(mut self, thousandths_em: f64) -> Self {
        self.letter_spacing = thousandths_em * self.font_size / 1000.0;
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

/// Produces drawables for effects. Text shaping and rasterization live behind this seam.
pub trait RenderCollaborator: Send + Sync {
    /// Rasterize `style` into a tightly cropped text image.
    fn text(&self, style: &TextStyle) -> TextFxResult<Raster>;

    /// Solid rectangle, rounded up to whole pixels.
    fn rect(&self, width: f64, height: f64, fill: Color) -> TextFxResult<Raster> {
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(TextFxError::render(format!(
                "rect size must be finite and >= 0, got {width}x{height}"
            )));
        }
        Raster::solid(
            width.ceil() as u32,
            height.ceil() as u32,
            fill.to_rgba8_premul(),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/collaborator.rs"]
mod tests;
