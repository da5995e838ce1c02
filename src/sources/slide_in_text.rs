use crate::animation::ease::ease_in_out_cubic;
use crate::animation::keyframes::{Checkpoint, KeyframeTrack, Lerp, TrackProps};
use crate::config::color::Color;
use crate::effects::fade::fade;
use crate::foundation::core::Canvas;
use crate::foundation::error::{TextFxError, TextFxResult};
use crate::layout::position::Position;
use crate::render::collaborator::TextStyle;
use crate::render::scene::{Placement, Scene};
use crate::sources::title::{default_font_family, default_text_color};
use crate::sources::{FrameCtx, FrameSource};

fn default_font_size() -> f64 {
    0.05
}

fn default_char_spacing() -> f64 {
    0.1
}

/// Text revealed by a sweeping fade, held, then faded out.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideInTextParams {
    pub text: String,
    /// Font size relative to frame width.
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    /// Glyph spacing relative to frame width, in thousandths of an em.
    #[serde(default = "default_char_spacing")]
    pub char_spacing: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Color>,
    /// Deprecated alias of `text_color`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default)]
    pub position: Position,
}

impl SlideInTextParams {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size: default_font_size(),
            char_spacing: default_char_spacing(),
            text_color: None,
            color: None,
            font_family: default_font_family(),
            position: Position::default(),
        }
    }

    /// Effective text colour. `text_color` wins over the deprecated `color`.
    pub fn resolved_text_color(&self) -> Color {
        self.text_color
            .or(self.color)
            .unwrap_or_else(default_text_color)
    }

    /// Deprecated parameter names that are set.
    pub fn deprecations(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.color.is_some() {
            out.push("color");
        }
        out
    }
}

/// Animated properties of the slide-in effect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideInFrame {
    pub opacity: f64,
    pub text_slide: f64,
}

impl Lerp for SlideInFrame {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            opacity: f64::lerp(&a.opacity, &b.opacity, t),
            text_slide: f64::lerp(&a.text_slide, &b.text_slide, t),
        }
    }
}

impl TrackProps for SlideInFrame {}

/// Hidden until 0.1, revealed by 0.3, held until 0.8, faded out by 0.9.
pub fn slide_in_track() -> TextFxResult<KeyframeTrack<SlideInFrame>> {
    let cp = |t, opacity, text_slide| {
        Checkpoint::new(
            t,
            SlideInFrame {
                opacity,
                text_slide,
            },
        )
    };
    KeyframeTrack::new(vec![
        cp(0.1, 1.0, 0.0),
        cp(0.3, 1.0, 1.0),
        cp(0.8, 1.0, 1.0),
        cp(0.9, 0.0, 1.0),
    ])
}

pub struct SlideInTextSource {
    params: SlideInTextParams,
    track: KeyframeTrack<SlideInFrame>,
    font_size: f64,
    char_spacing: f64,
}

impl SlideInTextSource {
    pub fn new(params: SlideInTextParams, canvas: Canvas) -> TextFxResult<Self> {
        if !params.font_size.is_finite() || params.font_size <= 0.0 {
            return Err(TextFxError::validation(format!(
                "slide-in-text fontSize must be > 0, got {}",
                params.font_size
            )));
        }
        for name in params.deprecations() {
            tracing::warn!(
                param = name,
                "slide-in-text parameter '{name}' is deprecated, use 'textColor'"
            );
        }

        let width = f64::from(canvas.width);
        Ok(Self {
            track: slide_in_track()?,
            font_size: (width * params.font_size).round(),
            char_spacing: width * params.char_spacing,
            params,
        })
    }

    pub fn frame_at(&self, progress: f64) -> SlideInFrame {
        self.track.interpolate(progress)
    }
}

impl FrameSource for SlideInTextSource {
    #[tracing::instrument(level = "trace", skip(self, ctx, target))]
    fn on_render(&self, progress: f64, ctx: &FrameCtx<'_>, target: &mut Scene) -> TextFxResult<()> {
        let frame = self.frame_at(progress);

        let style = TextStyle::new(&self.params.text, &self.params.font_family, self.font_size)
            .with_fill(self.params.resolved_text_color())
            .with_char_spacing(self.char_spacing);
        let text = ctx.renderer.text(&style)?;
        let faded = fade(&text, ease_in_out_cubic(frame.text_slide))?;

        let pos = ctx
            .layout
            .position_of(&self.params.position, target.width(), target.height());
        target.add(faded, Placement::at(pos).with_opacity(frame.opacity));
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sources/slide_in_text.rs"]
mod tests;
