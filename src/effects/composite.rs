use crate::foundation::error::{TextFxError, TextFxResult};
use crate::foundation::math::mul_div255_u8;

pub type PremulRgba8 = [u8; 4];

/// Source-over of premultiplied `src` onto `dst`, with `src` scaled by `opacity`.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = add_sat_u8(sa, mul_div255(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255(u16::from(src[i]), op);
        let dc = mul_div255(u16::from(dst[i]), inv);
        out[i] = add_sat_u8(sc, dc);
    }
    out
}

/// Multiply every premultiplied channel of `px` by `coverage / 255`.
pub fn scale_alpha(px: PremulRgba8, coverage: u8) -> PremulRgba8 {
    let c = u16::from(coverage);
    [
        mul_div255(u16::from(px[0]), c),
        mul_div255(u16::from(px[1]), c),
        mul_div255(u16::from(px[2]), c),
        mul_div255(u16::from(px[3]), c),
    ]
}

/// Multiply blend of `dst` with the alpha channel of an equally sized `mask` buffer.
pub fn multiply_by_mask_alpha_in_place(dst: &mut [u8], mask: &[u8]) -> TextFxResult<()> {
    if dst.len() != mask.len() || !dst.len().is_multiple_of(4) {
        return Err(TextFxError::render(
            "multiply_by_mask_alpha_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, m) in dst.chunks_exact_mut(4).zip(mask.chunks_exact(4)) {
        let out = scale_alpha([d[0], d[1], d[2], d[3]], m[3]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

fn mul_div255(x: u16, y: u16) -> u8 {
    mul_div255_u8(x, y)
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;
