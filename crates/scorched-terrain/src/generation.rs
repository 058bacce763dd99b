//! Procedural rolling terrain.

use rand::Rng;
use scorched_core::constants::*;

use crate::ground::Ground;

struct Harmonic {
    amplitude: f64,
    frequency: f64,
    phase: f64,
}

/// Generate a fresh ground for a `width × height` playfield.
///
/// Sums a few random sine harmonics, then rescales the result into a random
/// band inside `[MIN_GROUND_FRACTION, MAX_GROUND_FRACTION] * height`.
pub fn generate<R: Rng + ?Sized>(width: f64, height: f64, rng: &mut R) -> Ground {
    let tau = std::f64::consts::TAU;
    let span = width.max(1.0);
    let harmonics: Vec<Harmonic> = (0..TERRAIN_HARMONICS)
        .map(|k| {
            let order = (k + 1) as f64;
            Harmonic {
                amplitude: rng.gen_range(0.2..1.0) / order,
                frequency: order * rng.gen_range(0.5..1.5) * tau / span,
                phase: rng.gen_range(0.0..tau),
            }
        })
        .collect();
    let raw = |x: f64| -> f64 {
        harmonics
            .iter()
            .map(|h| h.amplitude * (h.frequency * x + h.phase).sin())
            .sum()
    };

    let low = height * MIN_GROUND_FRACTION;
    let high = height * MAX_GROUND_FRACTION;
    let relief = (high - low) * rng.gen_range(0.4..1.0);
    let base = low + rng.gen_range(0.0..=(high - low - relief).max(0.0));

    let samples = Ground::flat(width, height, 0.0);
    let (rmin, rmax) = raw_bounds(&samples, &raw);
    let scale = rmax - rmin;

    Ground::from_fn(width, height, TERRAIN_STEP, |x| {
        if scale < 1e-9 {
            base + relief / 2.0
        } else {
            base + (raw(x) - rmin) / scale * relief
        }
    })
}

// Bounds of the unclamped harmonic sum over the sample columns.
fn raw_bounds(samples: &Ground, raw: &impl Fn(f64) -> f64) -> (f64, f64) {
    (0..samples.sample_count())
        .map(|i| raw(samples.x_at(i)))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        })
}
