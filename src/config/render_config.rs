use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::config::color::Color;
use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange};
use crate::foundation::error::{TextFxError, TextFxResult};
use crate::render::pipeline::FrameSettings;
use crate::sources::{EffectConfig, EffectSpec, FrameSource};

/// A JSON render job: output size, timing and one effect.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub fps: Fps,
    pub duration_secs: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    pub effect: EffectConfig,
}

impl RenderConfig {
    pub fn from_json(s: &str) -> TextFxResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: &Path) -> TextFxResult<Self> {
        let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
        let cfg = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("parse config JSON '{}'", path.display()))?;
        Ok(cfg)
    }

    pub fn validate(&self) -> TextFxResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(TextFxError::validation("width/height must be > 0"));
        }
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(TextFxError::validation("fps must have num>0 and den>0"));
        }
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return Err(TextFxError::validation("durationSecs must be finite and > 0"));
        }
        Ok(())
    }

    pub fn canvas(&self) -> TextFxResult<Canvas> {
        Canvas::new(self.width, self.height)
    }

    /// Frames needed to cover the full duration, rounded up.
    pub fn total_frames(&self) -> u64 {
        self.fps.secs_to_frames_ceil(self.duration_secs)
    }

    pub fn frame_range(&self) -> TextFxResult<FrameRange> {
        FrameRange::new(FrameIndex(0), FrameIndex(self.total_frames()))
    }

    pub fn frame_settings(&self) -> TextFxResult<FrameSettings> {
        Ok(FrameSettings {
            canvas: self.canvas()?,
            clear: self.background.map(Color::to_rgba8_premul),
        })
    }

    /// Validate, then build the effect's frame callback for this output size.
    pub fn frame_source(&self) -> TextFxResult<Box<dyn FrameSource>> {
        self.validate()?;
        EffectSpec::from(self.effect.clone()).frame_source(self.canvas()?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/render_config.rs"]
mod tests;
