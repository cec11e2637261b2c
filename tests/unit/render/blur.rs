use super::*;

#[test]
fn zero_blur_is_identity() {
    let src = vec![1u8, 2, 3, 4, 5, 6, 7, 8];
    assert_eq!(glow_blur_premul(&src, 1, 2, 0.0).unwrap(), src);
    assert_eq!(glow_blur_premul(&src, 1, 2, 0.4).unwrap(), src);
}

#[test]
fn constant_image_is_unchanged() {
    let (w, h) = (6u32, 4u32);
    let src = [0u8, 90, 90, 90].repeat((w * h) as usize);
    assert_eq!(glow_blur_premul(&src, w, h, 4.0).unwrap(), src);
}

#[test]
fn halo_spreads_and_conserves_energy() {
    let (w, h) = (9u32, 9u32);
    let mut src = vec![0u8; (w * h * 4) as usize];
    let center = ((4 * w + 4) * 4) as usize;
    src[center..center + 4].copy_from_slice(&[0, 255, 255, 255]);

    let out = glow_blur_premul(&src, w, h, 3.0).unwrap();
    let lit = out.chunks_exact(4).filter(|px| px[3] != 0).count();
    assert!(lit > 1);
    assert!(out[center + 3] < 255);

    let sum_a: u32 = out.chunks_exact(4).map(|px| u32::from(px[3])).sum();
    assert!((sum_a as i32 - 255).abs() <= 8);
}

#[test]
fn mismatched_buffer_and_bad_radius_are_rejected() {
    assert!(glow_blur_premul(&[0u8; 12], 2, 2, 1.0).is_err());
    assert!(glow_blur_premul(&[0u8; 16], 2, 2, f64::NAN).is_err());
    assert!(glow_blur_premul(&[0u8; 16], 2, 2, -1.0).is_err());
    assert!(glow_blur_premul(&[0u8; 16], 2, 2, MAX_GLOW_BLUR + 1.0).is_err());
    assert!(glow_blur_premul(&[0u8; 16], 2, 2, 1e300).is_err());
}
