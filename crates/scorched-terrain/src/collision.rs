//! Shell-versus-ground collision.
//!
//! Tests the moving segment against every polyline segment under its x
//! extent and keeps the earliest crossing.

use glam::DVec2;
use scorched_core::geometry::segment_intersection;

use crate::ground::Ground;

impl Ground {
    /// First point where the segment `from→to` meets the surface.
    ///
    /// A segment that starts at or below the surface (inside the x span)
    /// collides at its start. Segments entirely left or right of the span
    /// never collide.
    pub fn check_collision(&self, from: DVec2, to: DVec2) -> Option<DVec2> {
        if !from.is_finite() || !to.is_finite() {
            return None;
        }
        if self.contains_x(from.x) && from.y <= self.height_at(from.x) {
            return Some(from);
        }

        let lo = from.x.min(to.x);
        let hi = from.x.max(to.x);
        if hi < 0.0 || lo > self.width() {
            return None;
        }

        let first = self.segment_index(lo);
        let last = self.segment_index(hi);
        let heights = self.heights();
        let mut best: Option<(f64, DVec2)> = None;
        for i in first..=last {
            let a = DVec2::new(self.x_at(i), heights[i]);
            let b = DVec2::new(self.x_at(i + 1), heights[i + 1]);
            if let Some((t, p)) = segment_intersection(from, to, a, b) {
                if best.map_or(true, |(bt, _)| t < bt) {
                    best = Some((t, p));
                }
            }
        }

        match best {
            Some((_, p)) => Some(p),
            // Grazing along a surface segment: treat a buried endpoint as the hit.
            None if self.contains_x(to.x) && to.y <= self.height_at(to.x) => Some(to),
            None => None,
        }
    }
}
