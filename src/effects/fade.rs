//! Gradient-mask fade used for slide-in reveals.
//!
//! Instead of moving the object, a soft opaque-to-transparent band sweeps across it from left to
//! right. The band is `FADE_BAND_WIDTH` wide (relative to the object's width); both stop offsets
//! are clamped into `[0, 1]`, so the object is fully hidden at progress 0 and fully visible at
//! progress 1.

use crate::foundation::error::TextFxResult;
use crate::foundation::math::unit_to_u8;
use crate::render::raster::{Drawable, Raster};

/// Width of the soft band, as a fraction of the object's width.
pub const FADE_BAND_WIDTH: f64 = 0.2;

/// Gradient stop offsets for one fade step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeBand {
    /// Offset where the mask is still fully opaque.
    pub start: f64,
    /// Offset where the mask becomes fully transparent.
    pub end: f64,
}

impl FadeBand {
    pub fn at(progress: f64) -> Self {
        let travel = progress * (1.0 + FADE_BAND_WIDTH);
        Self {
            start: (travel - FADE_BAND_WIDTH).max(0.0),
            end: travel.min(1.0),
        }
    }

    /// Mask opacity at relative horizontal position `s`.
    ///
    /// Positions before `start` take the first stop (opaque), positions past `end` take the last
    /// stop (transparent).
    pub fn opacity_at(&self, s: f64) -> f64 {
        if s <= self.start {
            return 1.0;
        }
        if s >= self.end {
            return 0.0;
        }
        1.0 - (s - self.start) / (self.end - self.start)
    }
}

/// Horizontal alpha gradient spanning a fixed-size area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientMask {
    pub width: u32,
    pub height: u32,
    pub band: FadeBand,
}

impl GradientMask {
    /// Rasterize to white with per-column alpha, sampled at pixel centres.
    pub fn rasterize(&self) -> TextFxResult<Raster> {
        let w = self.width as usize;
        let mut row = Vec::with_capacity(w * 4);
        for x in 0..self.width {
            let s = (f64::from(x) + 0.5) / f64::from(self.width);
            let a = unit_to_u8(self.band.opacity_at(s));
            row.extend_from_slice(&[a, a, a, a]);
        }

        let mut data = Vec::with_capacity(row.len() * self.height as usize);
        for _ in 0..self.height {
            data.extend_from_slice(&row);
        }
        Raster::from_premul_rgba8(self.width, self.height, data)
    }
}

/// Fade `object` by the moving band for `progress`.
///
/// Returns a new raster; `object` is only read.
pub fn fade(object: &dyn Drawable, progress: f64) -> TextFxResult<Raster> {
    let mask = GradientMask {
        width: object.width(),
        height: object.height(),
        band: FadeBand::at(progress),
    }
    .rasterize()?;

    let mut out = object.rasterize()?;
    out.multiply_alpha(&mask)?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/fade.rs"]
mod tests;
