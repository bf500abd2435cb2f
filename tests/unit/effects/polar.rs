use super::*;

/// Red is the column, green the row.
fn coords(w: u32, h: u32) -> PixelBuffer {
    let mut buf = PixelBuffer::new(w, h).unwrap();
    for y in 0..h {
        for x in 0..w {
            buf.set_pixel(x, y, [x as u8, y as u8, 100, 255]);
        }
    }
    buf
}

#[test]
fn identity_parameters_are_noops() {
    let buf = coords(6, 6);
    assert!(matches!(swirl(&buf, 0.0), Cow::Borrowed(_)));
    assert!(matches!(swirl(&buf, -20.0), Cow::Borrowed(_)));
    assert!(matches!(swirl(&buf, f64::NAN), Cow::Borrowed(_)));
    assert!(matches!(swirl(&buf, f64::INFINITY), Cow::Borrowed(_)));
    assert!(matches!(kaleidoscope(&buf, 0), Cow::Borrowed(_)));
    assert!(matches!(kaleidoscope(&buf, 1), Cow::Borrowed(_)));
}

#[test]
fn remaps_keep_dimensions() {
    let buf = coords(13, 7);
    let s = swirl(&buf, 55.0);
    assert_eq!((s.width(), s.height()), (13, 7));
    let k = kaleidoscope(&buf, 6);
    assert_eq!((k.width(), k.height()), (13, 7));
}

#[test]
fn swirl_fixes_center_and_corner() {
    let buf = coords(16, 16);
    let out = swirl(&buf, 100.0);
    assert_eq!(out.pixel(8, 8), buf.pixel(8, 8));
    // The corner sits at the maximum radius, where rotation vanishes.
    assert_eq!(out.pixel(0, 0), buf.pixel(0, 0));
}

#[test]
fn swirl_writes_transparent_outside_the_source() {
    let buf = coords(16, 16);
    let out = swirl(&buf, 100.0);
    assert_eq!(out.pixel(1, 0), TRANSPARENT);
}

#[test]
fn swirl_amount_is_capped() {
    let buf = coords(9, 9);
    assert_eq!(swirl(&buf, 100.0), swirl(&buf, 1000.0));
}

#[test]
fn kaleidoscope_mirrors_across_the_wedge_midline() {
    let buf = coords(16, 16);
    for segments in [4, 8] {
        let out = kaleidoscope(&buf, segments);
        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(out.pixel(x, y), out.pixel(y, x), "segments {segments} at ({x},{y})");
            }
        }
    }
}

#[test]
fn four_segments_read_only_the_first_half_wedge() {
    let buf = coords(16, 16);
    let out = kaleidoscope(&buf, 4);
    let mut transparent = 0;
    for px in out.as_bytes().chunks_exact(4) {
        if px[3] == 0 {
            assert_eq!(px, TRANSPARENT);
            transparent += 1;
            continue;
        }
        let (sx, sy) = (px[0], px[1]);
        assert!(sx >= 8 && sy >= 8 && sy <= sx, "sampled ({sx},{sy})");
    }
    assert!(transparent > 0);
}
