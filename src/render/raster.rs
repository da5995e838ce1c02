use crate::effects::composite::{multiply_by_mask_alpha_in_place, scale_alpha};
use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::{TextFxError, TextFxResult};
use crate::foundation::math::unit_to_u8;

/// Largest raster side we are willing to allocate.
pub const MAX_RASTER_DIM: u32 = 16_384;

/// Something the scene can place and rasterize.
///
/// Implementations are owned by the rendering collaborator. Rasterizing must not mutate the
/// drawable, and the returned [`Raster`] must not alias it.
pub trait Drawable {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn rasterize(&self) -> TextFxResult<Raster>;
}

/// Owned premultiplied RGBA8 image, tightly packed and row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

fn byte_len(width: u32, height: u32) -> TextFxResult<usize> {
    if width > MAX_RASTER_DIM || height > MAX_RASTER_DIM {
        return Err(TextFxError::render(format!(
            "raster size too large: {width}x{height} (max {MAX_RASTER_DIM}x{MAX_RASTER_DIM})"
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| TextFxError::render("raster buffer size overflow"))
}

impl Raster {
    /// Fully transparent raster.
    pub fn transparent(width: u32, height: u32) -> TextFxResult<Self> {
        Ok(Self {
            width,
            height,
            data: vec![0u8; byte_len(width, height)?],
        })
    }

    /// Raster filled with a single colour.
    pub fn solid(width: u32, height: u32, fill: Rgba8Premul) -> TextFxResult<Self> {
        let len = byte_len(width, height)?;
        let px = fill.to_array();
        let mut data = Vec::with_capacity(len);
        for _ in 0..len / 4 {
            data.extend_from_slice(&px);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn from_premul_rgba8(width: u32, height: u32, data: Vec<u8>) -> TextFxResult<Self> {
        if data.len() != byte_len(width, height)? {
            return Err(TextFxError::render(format!(
                "raster data length {} does not match {width}x{height}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        Some([
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ])
    }

    /// Multiply blend with the alpha channel of `mask`, which must match in size.
    pub fn multiply_alpha(&mut self, mask: &Raster) -> TextFxResult<()> {
        if mask.width != self.width || mask.height != self.height {
            return Err(TextFxError::render(format!(
                "mask size {}x{} does not match raster {}x{}",
                mask.width, mask.height, self.width, self.height
            )));
        }
        multiply_by_mask_alpha_in_place(&mut self.data, &mask.data)
    }

    /// Copy with every pixel scaled by `opacity`.
    pub fn with_opacity(&self, opacity: f64) -> Self {
        let coverage = unit_to_u8(opacity);
        let mut out = self.clone();
        if coverage == 255 {
            return out;
        }
        for px in out.data.chunks_exact_mut(4) {
            let scaled = scale_alpha([px[0], px[1], px[2], px[3]], coverage);
            px.copy_from_slice(&scaled);
        }
        out
    }
}

impl Drawable for Raster {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn rasterize(&self) -> TextFxResult<Raster> {
        Ok(self.clone())
    }
}

/// A rendered frame as RGBA8 pixels.
///
/// Frames are **premultiplied alpha** by default. The `premultiplied` flag is included to make
/// this explicit at API boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Convert to straight alpha, as expected by PNG writers.
    pub fn to_straight(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        self.data
            .chunks_exact(4)
            .flat_map(|px| {
                Rgba8Premul {
                    r: px[0],
                    g: px[1],
                    b: px[2],
                    a: px[3],
                }
                .to_straight_rgba()
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
