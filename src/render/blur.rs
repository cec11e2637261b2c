use crate::{
    foundation::error::{GargantaError, GargantaResult},
    portal::config::MAX_GLOW_BLUR,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

/// Gaussian halo over a premultiplied RGBA8 buffer.
///
/// `blur_px` follows canvas `shadowBlur` semantics: the Gaussian sigma is half of it and
/// the kernel spans `blur_px` pixels on each side.
pub fn glow_blur_premul(src: &[u8], width: u32, height: u32, blur_px: f64) -> GargantaResult<Vec<u8>> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| GargantaError::render("glow buffer size overflow"))?;
    if src.len() != expected_len {
        return Err(GargantaError::render(
            "glow_blur_premul expects src matching width*height*4",
        ));
    }
    if !blur_px.is_finite() || !(0.0..=MAX_GLOW_BLUR).contains(&blur_px) {
        return Err(GargantaError::validation(format!(
            "glow blur must be finite and in [0, {MAX_GLOW_BLUR}]"
        )));
    }

    let radius = blur_px.round() as u32;
    if radius == 0 || width == 0 || height == 0 {
        return Ok(src.to_vec());
    }

    let kernel = gaussian_kernel_q16(radius, (blur_px / 2.0).max(0.5))?;
    let mut tmp = vec![0u8; expected_len];
    let mut out = vec![0u8; expected_len];
    convolve(src, &mut tmp, width, height, &kernel, Axis::Horizontal);
    convolve(&tmp, &mut out, width, height, &kernel, Axis::Vertical);
    Ok(out)
}

/// Normalized Gaussian weights in Q16 fixed point; they sum to exactly `1 << 16`.
fn gaussian_kernel_q16(radius: u32, sigma: f64) -> GargantaResult<Vec<u32>> {
    let r = radius as i32;
    let denom = 2.0 * sigma * sigma;
    let weights_f: Vec<f64> = (-r..=r)
        .map(|i| {
            let x = f64::from(i);
            (-x * x / denom).exp()
        })
        .collect();
    let sum: f64 = weights_f.iter().sum();
    if sum.is_nan() || sum <= 0.0 {
        return Err(GargantaError::render("gaussian kernel sum is zero"));
    }

    let mut weights: Vec<u32> = weights_f
        .iter()
        .map(|wf| ((wf / sum) * 65536.0).round().clamp(0.0, 65536.0) as u32)
        .collect();
    let acc: i64 = weights.iter().map(|&w| i64::from(w)).sum();
    let delta = 65536 - acc;
    if delta != 0 {
        let mid = weights.len() / 2;
        weights[mid] = (i64::from(weights[mid]) + delta).clamp(0, 65536) as u32;
    }
    Ok(weights)
}

fn convolve(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32], axis: Axis) {
    let radius = (k.len() / 2) as i32;
    let (w, h) = (width as i32, height as i32);
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0u64; 4];
            for (ki, &kw) in k.iter().enumerate() {
                let d = ki as i32 - radius;
                let (sx, sy) = match axis {
                    Axis::Horizontal => ((x + d).clamp(0, w - 1), y),
                    Axis::Vertical => (x, (y + d).clamp(0, h - 1)),
                };
                let idx = ((sy * w + sx) as usize) * 4;
                for (c, a) in acc.iter_mut().enumerate() {
                    *a += u64::from(kw) * u64::from(src[idx + c]);
                }
            }
            let out_idx = ((y * w + x) as usize) * 4;
            for (c, a) in acc.iter().enumerate() {
                dst[out_idx + c] = (((a + 32768) >> 16).min(255)) as u8;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/blur.rs"]
mod tests;
