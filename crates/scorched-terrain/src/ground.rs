//! Ground: the terrain height-field with surface queries.

use scorched_core::constants::TERRAIN_STEP;
use scorched_core::types::Position;

/// Terrain surface sampled at regular x intervals.
///
/// Sample `i` sits at `x = min(i * step, width)`, so the samples always
/// span `[0, width]` with strictly increasing x. Heights are kept inside
/// `[0, max_height]`; only heights ever change after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Ground {
    width: f64,
    max_height: f64,
    step: f64,
    heights: Vec<f64>,
}

impl Ground {
    /// Build a ground by sampling `surface` at every column.
    ///
    /// The span is at least one `step` wide, so there are always two samples
    /// at distinct x.
    pub fn from_fn(width: f64, max_height: f64, step: f64, surface: impl Fn(f64) -> f64) -> Self {
        let step = if step > 0.0 && step.is_finite() { step } else { TERRAIN_STEP };
        let width = if width.is_finite() { width.max(step) } else { step };
        let max_height = max_height.max(0.0);
        let count = (width / step).ceil() as usize + 1;
        let mut ground = Self {
            width,
            max_height,
            step,
            heights: vec![0.0; count.max(2)],
        };
        for i in 0..ground.heights.len() {
            let x = ground.x_at(i);
            ground.set_height(i, surface(x));
        }
        ground
    }

    /// Level ground at `level` with the default sample spacing.
    pub fn flat(width: f64, max_height: f64, level: f64) -> Self {
        Self::from_fn(width, max_height, TERRAIN_STEP, |_| level)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn max_height(&self) -> f64 {
        self.max_height
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    pub fn sample_count(&self) -> usize {
        self.heights.len()
    }

    /// x coordinate of sample `i`.
    pub fn x_at(&self, i: usize) -> f64 {
        (i as f64 * self.step).min(self.width)
    }

    /// Index of the polyline segment containing `x` (clamped to the span).
    pub(crate) fn segment_index(&self, x: f64) -> usize {
        let last = self.heights.len() - 2;
        if x <= 0.0 || !x.is_finite() {
            return 0;
        }
        ((x / self.step).floor() as usize).min(last)
    }

    /// Surface height at `x`, linearly interpolated. Outside the span the
    /// nearest edge sample is used.
    pub fn height_at(&self, x: f64) -> f64 {
        if x <= 0.0 || x.is_nan() {
            return self.heights[0];
        }
        if x >= self.width {
            return self.heights[self.heights.len() - 1];
        }
        let i = self.segment_index(x);
        let x0 = self.x_at(i);
        let x1 = self.x_at(i + 1);
        if x1 <= x0 {
            return self.heights[i];
        }
        let t = (x - x0) / (x1 - x0);
        self.heights[i] + (self.heights[i + 1] - self.heights[i]) * t
    }

    /// True when `x` lies within the sampled span.
    pub fn contains_x(&self, x: f64) -> bool {
        (0.0..=self.width).contains(&x)
    }

    /// Polyline for rendering, left to right.
    pub fn points(&self) -> Vec<Position> {
        self.heights
            .iter()
            .enumerate()
            .map(|(i, h)| Position::new(self.x_at(i), *h))
            .collect()
    }

    pub(crate) fn set_height(&mut self, i: usize, h: f64) {
        let h = if h.is_nan() { 0.0 } else { h };
        self.heights[i] = h.clamp(0.0, self.max_height);
    }
}
