use crate::animation::kenburns::{KenBurns, ZoomDirection, ZoomParams};
use crate::config::color::Color;
use crate::foundation::core::{Canvas, clamp01};
use crate::foundation::error::{TextFxError, TextFxResult};
use crate::layout::position::Position;
use crate::render::collaborator::{DEFAULT_FONT_FAMILY, TextAlign, TextStyle};
use crate::render::scene::{Placement, Scene};
use crate::sources::{FrameCtx, FrameSource};

/// Font size relative to the shorter frame side.
const TITLE_FONT_SCALE: f64 = 0.1;

pub(crate) fn default_text_color() -> Color {
    Color::rgba(1.0, 1.0, 1.0, 1.0)
}

pub(crate) fn default_font_family() -> String {
    DEFAULT_FONT_FAMILY.to_owned()
}

fn default_title_zoom_amount() -> f64 {
    0.2
}

/// Centered title with a Ken Burns zoom or pan.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleParams {
    pub text: String,
    #[serde(default = "default_text_color")]
    pub text_color: Color,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub zoom_direction: ZoomDirection,
    #[serde(default = "default_title_zoom_amount")]
    pub zoom_amount: f64,
}

impl TitleParams {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            text_color: default_text_color(),
            font_family: default_font_family(),
            position: Position::default(),
            zoom_direction: ZoomDirection::default(),
            zoom_amount: default_title_zoom_amount(),
        }
    }

    pub fn ken_burns(&self) -> KenBurns {
        KenBurns::new(self.zoom_direction, self.zoom_amount)
    }
}

pub struct TitleSource {
    params: TitleParams,
    ken_burns: KenBurns,
    font_size: f64,
}

impl TitleSource {
    pub fn new(params: TitleParams, canvas: Canvas) -> TextFxResult<Self> {
        if !params.zoom_amount.is_finite() || params.zoom_amount < 0.0 {
            return Err(TextFxError::validation(format!(
                "title zoomAmount must be finite and >= 0, got {}",
                params.zoom_amount
            )));
        }
        Ok(Self {
            ken_burns: params.ken_burns(),
            font_size: (canvas.min_side() * TITLE_FONT_SCALE).round(),
            params,
        })
    }

    /// Zoom parameters applied at `progress`.
    pub fn zoom_at(&self, progress: f64) -> ZoomParams {
        self.ken_burns.params(clamp01(progress))
    }
}

impl FrameSource for TitleSource {
    #[tracing::instrument(level = "trace", skip(self, ctx, target))]
    fn on_render(&self, progress: f64, ctx: &FrameCtx<'_>, target: &mut Scene) -> TextFxResult<()> {
        let style = TextStyle::new(&self.params.text, &self.params.font_family, self.font_size)
            .with_fill(self.params.text_color)
            .with_align(TextAlign::Center);
        let text = ctx.renderer.text(&style)?;

        let zoom = self.zoom_at(progress);
        let pos = ctx
            .layout
            .position_of(&self.params.position, target.width(), target.height());
        target.add(
            text,
            Placement::at(pos)
                .offset_x(zoom.translate_x)
                .with_scale(zoom.scale),
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sources/title.rs"]
mod tests;
