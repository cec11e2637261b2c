use crate::{
    foundation::error::{GargantaError, GargantaResult},
    foundation::math::mul_div255,
};

pub type PremulRgba8 = [u8; 4];

/// Source-over for premultiplied pixels.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    if src[3] == 0 {
        return dst;
    }
    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255(u16::from(dst[i]), inv));
    }
    out
}

/// Additive ("lighter") blend for premultiplied pixels.
pub fn add(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    [
        dst[0].saturating_add(src[0]),
        dst[1].saturating_add(src[1]),
        dst[2].saturating_add(src[2]),
        dst[3].saturating_add(src[3]),
    ]
}

fn blend_in_place(
    dst: &mut [u8],
    src: &[u8],
    op: fn(PremulRgba8, PremulRgba8) -> PremulRgba8,
) -> GargantaResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(GargantaError::render(
            "blend expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = op([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

pub fn over_in_place(dst: &mut [u8], src: &[u8]) -> GargantaResult<()> {
    blend_in_place(dst, src, over)
}

pub fn add_in_place(dst: &mut [u8], src: &[u8]) -> GargantaResult<()> {
    blend_in_place(dst, src, add)
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
