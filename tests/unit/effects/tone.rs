use super::*;
use crate::random::mulberry::Mulberry32;

fn gradient(w: u32, h: u32) -> PixelBuffer {
    let mut buf = PixelBuffer::new(w, h).unwrap();
    for y in 0..h {
        for x in 0..w {
            let v = ((x * 37 + y * 91) % 256) as u8;
            buf.set_pixel(x, y, [v, 255 - v, v / 2, 200]);
        }
    }
    buf
}

#[test]
fn posterize_mid_grey_three_levels_lands_on_128() {
    let buf = PixelBuffer::filled(4, 4, [128, 128, 128, 255]).unwrap();
    let out = posterize(&buf, 3);
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(out.pixel(x, y), [128, 128, 128, 255]);
        }
    }
}

#[test]
fn posterize_below_two_levels_is_noop() {
    let buf = gradient(5, 4);
    assert!(matches!(posterize(&buf, 0), Cow::Borrowed(_)));
    assert!(matches!(posterize(&buf, 1), Cow::Borrowed(_)));
}

#[test]
fn posterize_is_idempotent() {
    let buf = gradient(16, 16);
    for levels in [2, 3, 4, 5, 7, 16, 255, 256] {
        let once = posterize(&buf, levels).into_owned();
        let twice = posterize(&once, levels).into_owned();
        assert_eq!(once, twice, "levels {levels}");
    }
}

#[test]
fn posterize_two_levels_is_binary() {
    let src = gradient(8, 8);
    let out = posterize(&src, 2);
    for px in out.as_bytes().chunks_exact(4) {
        for &c in &px[..3] {
            assert!(c == 0 || c == 255);
        }
        assert_eq!(px[3], 200);
    }
}

#[test]
fn noise_zero_amplitude_is_noop() {
    let buf = gradient(4, 4);
    let mut rng = Mulberry32::new(1);
    assert!(matches!(noise(&buf, 0.0, &mut rng), Cow::Borrowed(_)));
    assert!(matches!(noise(&buf, f64::NAN, &mut rng), Cow::Borrowed(_)));
    // No draws were consumed.
    assert_eq!(rng, Mulberry32::new(1));
}

#[test]
fn noise_is_bounded_and_keeps_alpha() {
    let buf = PixelBuffer::filled(6, 6, [128, 128, 128, 99]).unwrap();
    let out = noise(&buf, 20.0, &mut Mulberry32::new(9));
    for px in out.as_bytes().chunks_exact(4) {
        for &c in &px[..3] {
            assert!((108..=148).contains(&c), "{c}");
        }
        assert_eq!(px[3], 99);
    }
}

#[test]
fn noise_draws_three_values_per_pixel() {
    let buf = gradient(5, 3);
    let mut rng = Mulberry32::new(3);
    let _ = noise(&buf, 10.0, &mut rng);
    let mut expected = Mulberry32::new(3);
    for _ in 0..5 * 3 * 3 {
        expected.next_u32();
    }
    assert_eq!(rng, expected);
}

#[test]
fn noise_replays_with_same_seed() {
    let buf = gradient(7, 5);
    let a = noise(&buf, 50.0, &mut Mulberry32::new(42)).into_owned();
    let b = noise(&buf, 50.0, &mut Mulberry32::new(42)).into_owned();
    assert_eq!(a, b);
    assert_ne!(a, buf);
}

#[test]
fn contrast_brightness_identity_and_offsets() {
    let buf = PixelBuffer::filled(2, 2, [100, 128, 30, 255]).unwrap();
    assert!(matches!(
        contrast_brightness(&buf, 0.0, 0.0),
        Cow::Borrowed(_)
    ));
    assert!(matches!(
        contrast_brightness(&buf, f64::NAN, 0.0),
        Cow::Borrowed(_)
    ));
    assert_eq!(contrast_factor(0.0), 1.0);

    let brighter = contrast_brightness(&buf, 0.0, 50.0);
    assert_eq!(brighter.pixel(0, 0), [150, 178, 80, 255]);

    // Clamped to +100.
    let maxed = contrast_brightness(&buf, 0.0, 500.0);
    assert_eq!(maxed.pixel(1, 1), [200, 228, 130, 255]);
}

#[test]
fn full_contrast_splits_around_mid_grey() {
    let buf = PixelBuffer::filled(1, 2, [200, 128, 50, 255]).unwrap();
    let out = contrast_brightness(&buf, 100.0, 0.0);
    assert_eq!(out.pixel(0, 1), [255, 128, 0, 255]);
}

#[test]
fn invert_is_an_involution() {
    let buf = gradient(9, 7);
    assert!(matches!(invert(&buf, false), Cow::Borrowed(_)));
    let once = invert(&buf, true).into_owned();
    assert_ne!(once, buf);
    let twice = invert(&once, true).into_owned();
    assert_eq!(twice, buf);
}
