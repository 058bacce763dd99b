//! Crater carving and sloughing.
//!
//! An explosion removes a disc from the height-field. When the disc is a
//! hole inside a column, the material above it drops into the hole, so the
//! column loses exactly the height of the hole. Carving can leave columns
//! standing steeper than `TERRAIN_MAX_SLOPE` above a neighbour (crater rims,
//! thin spikes between overlapping craters). Those are reported as
//! [`Overhang`]s and [`Ground::update_after_sloughing`] lowers them until the
//! crater region is no steeper than that slope. Sloughing never raises a column.

use glam::DVec2;
use log::debug;

use scorched_core::constants::TERRAIN_MAX_SLOPE;

use crate::ground::Ground;

/// A column left standing too steeply above a neighbour after carving.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overhang {
    /// Sample index of the column.
    pub index: usize,
    pub x: f64,
    /// Column height after carving.
    pub height: f64,
    /// Height of its lower neighbour.
    pub support: f64,
}

impl Ground {
    /// Largest height difference allowed between adjacent samples.
    fn max_rise(&self) -> f64 {
        TERRAIN_MAX_SLOPE * self.step()
    }

    /// Lowest neighbouring height of sample `i`.
    fn support_at(&self, i: usize) -> f64 {
        let h = self.heights();
        let left = i.checked_sub(1).map(|j| h[j]);
        let right = h.get(i + 1).copied();
        match (left, right) {
            (Some(l), Some(r)) => l.min(r),
            (Some(v), None) | (None, Some(v)) => v,
            (None, None) => h[i],
        }
    }

    /// Carve a circular crater. Returns the columns around the crater that
    /// now stand too steeply above a neighbour, left to right. Never raises
    /// any height.
    pub fn update_after_explosion(&mut self, center: DVec2, radius: f64) -> Vec<Overhang> {
        if !(radius > 0.0) || !center.is_finite() {
            return Vec::new();
        }
        if center.x + radius < 0.0 || center.x - radius > self.width() {
            return Vec::new();
        }

        let last = self.sample_count() - 1;
        let first = (((center.x - radius) / self.step()).ceil().max(0.0) as usize).min(last);
        let end = (((center.x + radius) / self.step()).floor().max(0.0) as usize).min(last);

        let mut carved = 0usize;
        for i in first..=end {
            let dx = self.x_at(i) - center.x;
            if dx.abs() >= radius {
                continue;
            }
            let dy = (radius * radius - dx * dx).sqrt();
            let h = self.heights()[i];
            // Part of the hole that lies inside this column.
            let removed = (center.y + dy).min(h) - (center.y - dy).max(0.0);
            if removed <= 0.0 {
                continue;
            }
            self.set_height(i, h - removed);
            carved += 1;
        }
        if carved == 0 {
            return Vec::new();
        }

        let limit = self.max_rise();
        let overhangs: Vec<Overhang> = (first.saturating_sub(1)..=(end + 1).min(last))
            .filter_map(|i| {
                let height = self.heights()[i];
                let support = self.support_at(i);
                (height > support + limit).then(|| Overhang {
                    index: i,
                    x: self.x_at(i),
                    height,
                    support,
                })
            })
            .collect();

        debug!(
            "crater at ({:.1}, {:.1}) r={:.1}: {} columns carved, {} overhanging",
            center.x,
            center.y,
            radius,
            carved,
            overhangs.len()
        );
        overhangs
    }

    /// Settle the region spanned by `overhangs` so that no column in it
    /// rises more than `TERRAIN_MAX_SLOPE` per pixel above a neighbour.
    /// Columns are only ever lowered. Returns the number of columns lowered.
    pub fn update_after_sloughing(&mut self, overhangs: &[Overhang]) -> usize {
        let count = self.sample_count();
        let mut indices = overhangs.iter().map(|o| o.index).filter(|&i| i < count);
        let Some(seed) = indices.next() else {
            return 0;
        };
        let (lo, hi) = indices.fold((seed, seed), |(lo, hi), i| (lo.min(i), hi.max(i)));

        let limit = self.max_rise();
        let before = self.heights()[lo..=hi].to_vec();
        // Two sweeps give the tallest profile under the current one whose
        // steps are all within `limit`.
        for i in lo..=hi {
            if i > 0 {
                let bound = self.heights()[i - 1] + limit;
                if self.heights()[i] > bound {
                    self.set_height(i, bound);
                }
            }
        }
        for i in (lo..=hi).rev() {
            if i + 1 < count {
                let bound = self.heights()[i + 1] + limit;
                if self.heights()[i] > bound {
                    self.set_height(i, bound);
                }
            }
        }

        before
            .iter()
            .zip(&self.heights()[lo..=hi])
            .filter(|(b, a)| a < b)
            .count()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn blast() -> impl Strategy<Value = (f64, f64, f64)> {
        (-50.0f64..450.0, -50.0f64..350.0, 0.0f64..80.0)
    }

    proptest! {
        #[test]
        fn heights_stay_in_bounds(
            level in 0.0f64..300.0,
            blasts in proptest::collection::vec(blast(), 1..20),
        ) {
            let mut g = Ground::flat(400.0, 300.0, level);
            for (x, y, r) in blasts {
                let overhangs = g.update_after_explosion(DVec2::new(x, y), r);
                g.update_after_sloughing(&overhangs);
                prop_assert!(g.heights().iter().all(|h| (0.0..=300.0).contains(h)));
            }
        }

        #[test]
        fn carving_and_sloughing_never_raise(
            seed_heights in proptest::collection::vec(0.0f64..300.0, 101),
            (x, y, r) in blast(),
        ) {
            let mut g = Ground::from_fn(400.0, 300.0, 4.0, |x| seed_heights[(x / 4.0) as usize]);
            let before = g.heights().to_vec();
            let overhangs = g.update_after_explosion(DVec2::new(x, y), r);
            let carved = g.heights().to_vec();
            for (b, c) in before.iter().zip(&carved) {
                prop_assert!(c <= b, "carved {} above original {}", c, b);
            }
            g.update_after_sloughing(&overhangs);
            for (c, s) in carved.iter().zip(g.heights()) {
                prop_assert!(s <= c, "sloughed {} above pre-slough {}", s, c);
            }
        }
    }
}
