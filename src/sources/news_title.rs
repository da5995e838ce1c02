use crate::animation::ease::ease_out_expo;
use crate::config::color::Color;
use crate::foundation::core::{Canvas, clamp01};
use crate::foundation::error::{TextFxError, TextFxResult};
use crate::render::collaborator::TextStyle;
use crate::render::scene::{Placement, Scene};
use crate::sources::title::{default_font_family, default_text_color};
use crate::sources::{FrameCtx, FrameSource};

fn default_background_color() -> Color {
    Color::rgba(208.0 / 255.0, 42.0 / 255.0, 66.0 / 255.0, 1.0)
}

fn default_speed() -> f64 {
    1.0
}

/// Ticker-style bar with a title sliding in from the left.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsTitleParams {
    pub text: String,
    #[serde(default = "default_text_color")]
    pub text_color: Color,
    #[serde(default = "default_background_color")]
    pub background_color: Color,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    /// Progress offset before anything moves.
    #[serde(default)]
    pub delay: f64,
    /// Ramp speed multiplier.
    #[serde(default = "default_speed")]
    pub speed: f64,
}

impl NewsTitleParams {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            text_color: default_text_color(),
            background_color: default_background_color(),
            font_family: default_font_family(),
            delay: 0.0,
            speed: default_speed(),
        }
    }
}

/// `ease_out_expo(clamp01((progress - delay - offset) * speed * factor))`.
pub fn delayed_ramp(progress: f64, delay: f64, offset: f64, speed: f64, factor: f64) -> f64 {
    ease_out_expo(clamp01((progress - delay - offset) * speed * factor))
}

/// The three independently delayed ramps driving the ticker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NewsTitleRamps {
    /// Background bar slide.
    pub background: f64,
    /// Text slide.
    pub text: f64,
    /// Text opacity.
    pub text_opacity: f64,
}

impl NewsTitleRamps {
    pub fn at(progress: f64, delay: f64, speed: f64) -> Self {
        Self {
            background: delayed_ramp(progress, delay, 0.0, speed, 3.0),
            text: delayed_ramp(progress, delay, 0.02, speed, 4.0),
            text_opacity: delayed_ramp(progress, delay, 0.07, speed, 4.0),
        }
    }
}

/// Pixel metrics derived from the frame size.
#[derive(Clone, Copy, Debug, PartialEq)]
struct TickerMetrics {
    font_size: f64,
    top: f64,
    padding_v: f64,
    padding_h: f64,
    char_spacing: f64,
}

impl TickerMetrics {
    fn for_canvas(canvas: Canvas) -> Self {
        let min = canvas.min_side();
        Self {
            font_size: (min * 0.05).round(),
            top: f64::from(canvas.height) * 0.08,
            padding_v: 0.07 * min,
            padding_h: 0.03 * min,
            char_spacing: f64::from(canvas.width) * 0.1,
        }
    }
}

pub struct NewsTitleSource {
    params: NewsTitleParams,
    metrics: TickerMetrics,
}

impl NewsTitleSource {
    pub fn new(params: NewsTitleParams, canvas: Canvas) -> TextFxResult<Self> {
        if !params.speed.is_finite() || params.speed <= 0.0 {
            return Err(TextFxError::validation(format!(
                "news-title speed must be > 0, got {}",
                params.speed
            )));
        }
        if !params.delay.is_finite() {
            return Err(TextFxError::validation("news-title delay must be finite"));
        }
        Ok(Self {
            params,
            metrics: TickerMetrics::for_canvas(canvas),
        })
    }

    pub fn ramps_at(&self, progress: f64) -> NewsTitleRamps {
        NewsTitleRamps::at(progress, self.params.delay, self.params.speed)
    }
}

impl FrameSource for NewsTitleSource {
    #[tracing::instrument(level = "trace", skip(self, ctx, target))]
    fn on_render(&self, progress: f64, ctx: &FrameCtx<'_>, target: &mut Scene) -> TextFxResult<()> {
        let m = self.metrics;
        let ramps = self.ramps_at(progress);

        let style = TextStyle::new(&self.params.text, &self.params.font_family, m.font_size)
            .with_fill(self.params.text_color)
            .with_char_spacing(m.char_spacing);
        let text = ctx.renderer.text(&style)?;

        let bg_width = f64::from(text.width()) + m.padding_v * 2.0;
        let bg_height = f64::from(text.height()) + m.padding_h * 2.0;
        let bar = ctx
            .renderer
            .rect(bg_width, bg_height, self.params.background_color)?;

        // Slide by the raster's whole-pixel width so the bar is fully hidden at ramp 0.
        let bar_left = (ramps.background - 1.0) * f64::from(bar.width());
        target.add(bar, Placement::top_left(bar_left, m.top - m.padding_h));
        target.add(
            text,
            Placement::top_left(m.padding_v + (ramps.text - 1.0) * target.width(), m.top)
                .with_opacity(ramps.text_opacity),
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sources/news_title.rs"]
mod tests;
