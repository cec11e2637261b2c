use super::*;

#[test]
fn over_transparent_src_is_noop() {
    let dst = [10, 20, 30, 40];
    assert_eq!(over(dst, [0, 0, 0, 0]), dst);
}

#[test]
fn over_opaque_src_replaces_dst() {
    let src = [0, 0, 0, 255];
    assert_eq!(over([0, 255, 255, 255], src), src);
}

#[test]
fn over_half_alpha_mixes() {
    let out = over([0, 0, 200, 255], [100, 0, 0, 128]);
    assert_eq!(out[3], 255);
    assert_eq!(out[0], 100);
    assert!(out[2] > 90 && out[2] < 110);
}

#[test]
fn add_saturates() {
    assert_eq!(add([200, 10, 0, 200], [100, 10, 0, 100]), [255, 20, 0, 255]);
}

#[test]
fn in_place_rejects_length_mismatch() {
    let mut dst = vec![0u8; 8];
    assert!(over_in_place(&mut dst, &[0u8; 4]).is_err());
    assert!(add_in_place(&mut dst, &[0u8; 7]).is_err());
    add_in_place(&mut dst, &[1u8; 8]).unwrap();
    assert_eq!(dst, vec![1u8; 8]);
}
