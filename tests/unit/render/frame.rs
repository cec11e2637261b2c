use super::*;

#[test]
fn pixel_is_bounds_checked() {
    let f = FrameRGBA::transparent(2, 1);
    assert_eq!(f.pixel(1, 0), Some([0, 0, 0, 0]));
    assert_eq!(f.pixel(2, 0), None);
    assert_eq!(f.pixel(0, 1), None);
}

#[test]
fn unpremultiply_restores_straight_colour() {
    let f = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![64, 0, 0, 128, 0, 0, 0, 0],
        premultiplied: true,
    };
    let out = f.to_straight();
    assert!(out[0] >= 126 && out[0] <= 128);
    assert_eq!(out[3], 128);
    assert_eq!(&out[4..], &[0, 0, 0, 0]);
}

#[test]
fn background_fills_transparent_pixels() {
    let f = FrameRGBA::transparent(1, 1);
    let flat = f.over_background([18, 20, 28]).unwrap();
    assert_eq!(flat.pixel(0, 0), Some([18, 20, 28, 255]));
}

#[test]
fn png_is_written() {
    let dir = std::env::temp_dir().join(format!("garganta-frame-{}", std::process::id()));
    let path = dir.join("f.png");
    FrameRGBA::transparent(3, 2).write_png(&path).unwrap();
    let img = image::open(&path).unwrap();
    assert_eq!((img.width(), img.height()), (3, 2));
    let _ = std::fs::remove_dir_all(&dir);
}
