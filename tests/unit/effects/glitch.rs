use std::collections::VecDeque;

use super::*;
use crate::random::mulberry::Mulberry32;

/// Replays a fixed list of draws and panics when a filter asks for more.
struct Script(VecDeque<f64>);

impl Script {
    fn new(draws: &[f64]) -> Self {
        Self(draws.iter().copied().collect())
    }

    fn remaining(&self) -> usize {
        self.0.len()
    }
}

impl ChaosSource for Script {
    fn next_f64(&mut self) -> f64 {
        self.0.pop_front().expect("script exhausted")
    }
}

/// 10x24: red encodes the pixel's stream index, green the row, blue the column.
fn indexed() -> PixelBuffer {
    let mut buf = PixelBuffer::new(10, 24).unwrap();
    for y in 0..24u32 {
        for x in 0..10u32 {
            buf.set_pixel(x, y, [(y * 10 + x) as u8, y as u8, x as u8, 255]);
        }
    }
    buf
}

// A stripe at row 0 (band height is always 4 at h=24) that neither moves nor bleeds.
const QUIET_STRIPE: [f64; 4] = [0.0, 0.0, 0.5, 0.99];

#[test]
fn zero_negative_and_nan_intensity_consume_nothing() {
    let buf = indexed();
    for intensity in [0.0, -5.0, f64::NAN, f64::INFINITY] {
        let mut rng = Script::new(&[]);
        assert!(matches!(glitch(&buf, intensity, &mut rng), Cow::Borrowed(_)));
    }
}

#[test]
fn band_shift_moves_rows_left() {
    let buf = indexed();
    // Stripe 1: y = 12, band 12..16, range(-30, 30) = -30 -> floor(-0.3) = -1, no bleed.
    let mut draws = vec![0.5, 0.0, 0.0, 0.9];
    draws.extend(QUIET_STRIPE);
    draws.extend(QUIET_STRIPE);
    let mut rng = Script::new(&draws);

    let out = glitch(&buf, 1.0, &mut rng);
    assert_eq!(rng.remaining(), 0);

    for y in 0..24u32 {
        for x in 0..10u32 {
            let expected = if (12..16).contains(&y) && x < 9 {
                buf.pixel(x + 1, y)
            } else {
                buf.pixel(x, y)
            };
            assert_eq!(out.pixel(x, y), expected, "({x},{y})");
        }
    }
}

#[test]
fn overlapping_stripes_compound() {
    let buf = indexed();
    // Two identical left shifts of rows 0..4, then a quiet stripe.
    let mut draws = vec![0.0, 0.0, 0.0, 0.9, 0.0, 0.0, 0.0, 0.9];
    draws.extend(QUIET_STRIPE);
    let mut rng = Script::new(&draws);

    let out = glitch(&buf, 1.0, &mut rng);
    for x in 0..8u32 {
        assert_eq!(out.pixel(x, 2), buf.pixel(x + 2, 2));
    }
    assert_eq!(out.pixel(8, 2), buf.pixel(9, 2));
    assert_eq!(out.pixel(9, 2), buf.pixel(9, 2));
}

#[test]
fn positive_bleed_pulls_red_across_row_boundaries() {
    let buf = indexed();
    // Stripe 1: rows 0..4, no shift, bleed, dir +1 (draw >= 0.5), magnitude floor(1.0) = 1.
    let mut draws = vec![0.0, 0.0, 0.5, 0.0, 0.9, 0.0];
    draws.extend(QUIET_STRIPE);
    draws.extend(QUIET_STRIPE);
    let mut rng = Script::new(&draws);

    let out = glitch(&buf, 1.0, &mut rng);
    assert_eq!(rng.remaining(), 0);

    for p in 0..40u32 {
        let (x, y) = (p % 10, p / 10);
        let px = out.pixel(x, y);
        let expected_red = if p < 39 { p + 1 } else { p };
        assert_eq!(px[0], expected_red as u8, "pixel {p}");
        assert_eq!(px[1..], buf.pixel(x, y)[1..]);
    }
    // End of row 0 takes the red of the start of row 1.
    assert_eq!(out.pixel(9, 0)[0], buf.pixel(0, 1)[0]);
    assert_eq!(out.pixel(0, 4), buf.pixel(0, 4));
}

#[test]
fn negative_bleed_smears_leading_reds() {
    let buf = indexed();
    // dir -1 (draw < 0.5), magnitude floor(1 + 0.5 * 2) = 2.
    let mut draws = vec![0.0, 0.0, 0.5, 0.0, 0.1, 0.5];
    draws.extend(QUIET_STRIPE);
    draws.extend(QUIET_STRIPE);
    let mut rng = Script::new(&draws);

    let out = glitch(&buf, 1.0, &mut rng);
    assert_eq!(rng.remaining(), 0);
    for p in 0..40u32 {
        let (x, y) = (p % 10, p / 10);
        let expected_red = if (2..39).contains(&p) { p % 2 } else { p };
        assert_eq!(out.pixel(x, y)[0], expected_red as u8, "pixel {p}");
        assert_eq!(out.pixel(x, y)[1..], buf.pixel(x, y)[1..]);
    }
}

#[test]
fn bleed_writes_in_stream_order() {
    let mut row = PixelBuffer::new(6, 1).unwrap();
    for x in 0..6u32 {
        row.set_pixel(x, 0, [(x * 10) as u8, 1, 2, 255]);
    }
    let reds = |shift: i64| {
        let mut work = row.clone();
        bleed_red(&mut work, 0, 1, shift);
        work.as_bytes().chunks_exact(4).map(|px| px[0]).collect::<Vec<u8>>()
    };
    assert_eq!(reds(-1), [0, 0, 0, 0, 0, 50]);
    assert_eq!(reds(-2), [0, 10, 0, 10, 0, 50]);
    assert_eq!(reds(1), [10, 20, 30, 40, 50, 50]);
    assert_eq!(reds(2), [20, 30, 40, 50, 40, 50]);
}

#[test]
fn bleed_past_the_bottom_edge_reads_zero_red() {
    let buf = indexed();
    // y = floor(0.93 * 24) = 22, band 22..26 clipped to 22..24, no shift, bleed +1.
    let mut draws = vec![0.93, 0.0, 0.5, 0.0, 0.9, 0.0];
    draws.extend(QUIET_STRIPE);
    draws.extend(QUIET_STRIPE);
    let mut rng = Script::new(&draws);

    let out = glitch(&buf, 1.0, &mut rng);
    assert_eq!(rng.remaining(), 0);
    for p in 0..20u32 {
        let (x, y) = (p % 10, 22 + p / 10);
        let expected_red = if p < 19 { 221 + p } else { 0 };
        assert_eq!(out.pixel(x, y)[0], expected_red as u8, "pixel {p}");
        assert_eq!(out.pixel(x, y)[1..], buf.pixel(x, y)[1..]);
    }
    assert_eq!(out.pixel(9, 21), buf.pixel(9, 21));
}

#[test]
fn stripe_count_follows_intensity() {
    let buf = indexed();
    // floor(16 / 8) + 3 = 5 quiet stripes.
    let draws: Vec<f64> = QUIET_STRIPE.iter().copied().cycle().take(20).collect();
    let mut rng = Script::new(&draws);
    let out = glitch(&buf, 16.0, &mut rng);
    assert_eq!(rng.remaining(), 0);
    assert_eq!(out.as_bytes(), buf.as_bytes());
}

#[test]
fn seeded_runs_are_identical_and_keep_dimensions() {
    let buf = indexed();
    let a = glitch(&buf, 77.0, &mut Mulberry32::new(42)).into_owned();
    let b = glitch(&buf, 77.0, &mut Mulberry32::new(42)).into_owned();
    assert_eq!(a, b);
    assert_eq!((a.width(), a.height()), (10, 24));
}

#[test]
fn intensity_above_hundred_behaves_like_hundred() {
    let buf = indexed();
    let capped = glitch(&buf, 100.0, &mut Mulberry32::new(9)).into_owned();
    let over = glitch(&buf, 450.0, &mut Mulberry32::new(9)).into_owned();
    assert_eq!(capped, over);
}
