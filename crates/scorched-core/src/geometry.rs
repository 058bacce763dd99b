//! Stateless intersection tests used by collision detection.
//!
//! All functions return the contact parameter `t` along the moving segment
//! (0 at its start, 1 at its end) together with the contact point, so callers
//! can pick the earliest hit.

use glam::DVec2;

const EPSILON: f64 = 1e-12;

/// Intersection of segment `a0→a1` with segment `b0→b1`.
///
/// Parallel (including collinear) segments report no intersection.
pub fn segment_intersection(a0: DVec2, a1: DVec2, b0: DVec2, b1: DVec2) -> Option<(f64, DVec2)> {
    let r = a1 - a0;
    let s = b1 - b0;
    let denom = r.perp_dot(s);
    if denom.abs() < EPSILON {
        return None;
    }
    let qp = b0 - a0;
    let t = qp.perp_dot(s) / denom;
    let u = qp.perp_dot(r) / denom;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some((t, a0 + r * t))
    } else {
        None
    }
}

/// First point where segment `from→to` touches the circle.
///
/// A segment starting inside (or on) the circle touches it at its start.
pub fn segment_circle_first_contact(
    from: DVec2,
    to: DVec2,
    center: DVec2,
    radius: f64,
) -> Option<(f64, DVec2)> {
    if radius <= 0.0 {
        return None;
    }
    let f = from - center;
    let c = f.length_squared() - radius * radius;
    if c <= 0.0 {
        return Some((0.0, from));
    }
    let d = to - from;
    let a = d.length_squared();
    if a < EPSILON {
        return None;
    }
    let b = 2.0 * f.dot(d);
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return None;
    }
    let t = (-b - disc.sqrt()) / (2.0 * a);
    if (0.0..=1.0).contains(&t) {
        Some((t, from + d * t))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crossing_segments() {
        let hit = segment_intersection(
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 10.0),
            DVec2::new(0.0, 10.0),
            DVec2::new(10.0, 0.0),
        );
        let (t, p) = hit.expect("diagonals should cross");
        assert!((t - 0.5).abs() < 1e-9);
        assert!((p - DVec2::new(5.0, 5.0)).length() < 1e-9);
    }

    #[test]
    fn test_parallel_segments_do_not_cross() {
        let hit = segment_intersection(
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(0.0, 1.0),
            DVec2::new(10.0, 1.0),
        );
        assert!(hit.is_none());
    }

    #[test]
    fn test_segment_enters_circle() {
        let (t, p) = segment_circle_first_contact(
            DVec2::new(-20.0, 0.0),
            DVec2::new(20.0, 0.0),
            DVec2::ZERO,
            10.0,
        )
        .expect("segment passes through the circle");
        assert!((t - 0.25).abs() < 1e-9, "entry at a quarter of the way, got {}", t);
        assert!((p.x + 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_segment_starting_inside_circle() {
        let from = DVec2::new(1.0, 1.0);
        let hit = segment_circle_first_contact(from, DVec2::new(50.0, 50.0), DVec2::ZERO, 5.0);
        assert_eq!(hit, Some((0.0, from)));
    }

    #[test]
    fn test_segment_misses_circle() {
        let hit = segment_circle_first_contact(
            DVec2::new(-20.0, 20.0),
            DVec2::new(20.0, 20.0),
            DVec2::ZERO,
            10.0,
        );
        assert!(hit.is_none());
    }
}
