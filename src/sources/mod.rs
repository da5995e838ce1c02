//! Effect definitions that turn static parameters into per-frame render callbacks.

pub(crate) mod custom;
pub(crate) mod news_title;
pub(crate) mod slide_in_text;
pub(crate) mod title;

use crate::foundation::core::Canvas;
use crate::foundation::error::TextFxResult;
use crate::layout::position::LayoutResolver;
use crate::render::collaborator::RenderCollaborator;
use crate::render::scene::Scene;

use custom::{CustomEffect, CustomSource};
use news_title::{NewsTitleParams, NewsTitleSource};
use slide_in_text::{SlideInTextParams, SlideInTextSource};
use title::{TitleParams, TitleSource};

/// Collaborators available to a frame callback.
#[derive(Clone, Copy)]
pub struct FrameCtx<'a> {
    pub renderer: &'a dyn RenderCollaborator,
    pub layout: &'a dyn LayoutResolver,
}

/// Per-frame render callback produced by an effect.
///
/// Implementations hold only the read-only parameters captured at construction, so frames can be
/// rendered in any order and from several threads at once.
pub trait FrameSource: Send + Sync {
    /// Add this effect's drawables for `progress` to `target`.
    fn on_render(&self, progress: f64, ctx: &FrameCtx<'_>, target: &mut Scene) -> TextFxResult<()>;
}

/// Data-driven effect description, as found in configuration files.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum EffectConfig {
    Title(TitleParams),
    NewsTitle(NewsTitleParams),
    SlideInText(SlideInTextParams),
}

/// Closed set of effects a host can instantiate.
#[derive(Clone, Debug)]
pub enum EffectSpec {
    Title(TitleParams),
    NewsTitle(NewsTitleParams),
    SlideInText(SlideInTextParams),
    /// Caller-supplied logic with no built-in behaviour.
    Custom(CustomEffect),
}

impl From<EffectConfig> for EffectSpec {
    fn from(cfg: EffectConfig) -> Self {
        match cfg {
            EffectConfig::Title(p) => Self::Title(p),
            EffectConfig::NewsTitle(p) => Self::NewsTitle(p),
            EffectConfig::SlideInText(p) => Self::SlideInText(p),
        }
    }
}

impl EffectSpec {
    /// Short, stable name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Title(_) => "title",
            Self::NewsTitle(_) => "news-title",
            Self::SlideInText(_) => "slide-in-text",
            Self::Custom(_) => "custom",
        }
    }

    /// Build the frame callback for an output of size `canvas`.
    pub fn frame_source(&self, canvas: Canvas) -> TextFxResult<Box<dyn FrameSource>> {
        tracing::debug!(
            kind = self.kind(),
            width = canvas.width,
            height = canvas.height,
            "building frame source"
        );
        Ok(match self {
            Self::Title(p) => Box::new(TitleSource::new(p.clone(), canvas)?),
            Self::NewsTitle(p) => Box::new(NewsTitleSource::new(p.clone(), canvas)?),
            Self::SlideInText(p) => Box::new(SlideInTextSource::new(p.clone(), canvas)?),
            Self::Custom(c) => Box::new(CustomSource::new(c.clone())),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sources/mod.rs"]
mod tests;
