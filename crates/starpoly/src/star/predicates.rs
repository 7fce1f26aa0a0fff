//! Leaf predicates: turn direction and polar angle.

use std::f64::consts::TAU;

use super::types::{Orientation, Point, Tolerance};

/// Signed area (times two) of the triangle `(p, q, r)`.
///
/// Positive when `p → q → r` turns counter-clockwise.
#[inline]
pub fn signed_area(p: Point, q: Point, r: Point) -> f64 {
    (p.x - r.x) * (q.y - r.y) - (p.y - r.y) * (q.x - r.x)
}

/// Classify `r` against the directed line `p → q`.
#[inline]
pub fn orientation(p: Point, q: Point, r: Point, tol: Tolerance) -> Orientation {
    let area = signed_area(p, q, r);
    if tol.is_negligible(area, p, q, r) {
        Orientation::Collinear
    } else if area > 0.0 {
        Orientation::Left
    } else {
        Orientation::Right
    }
}

/// Polar angle of `point` seen from `origin`, normalised to `[0, 2π)`.
///
/// Pre: `point != origin` (the degenerate case returns `0.0`).
#[inline]
pub fn angle(origin: Point, point: Point) -> f64 {
    let a = (point.y - origin.y).atan2(point.x - origin.x);
    if a >= 0.0 {
        // also maps -0.0 to +0.0
        return a + 0.0;
    }
    let a = a + TAU;
    // tiny negative raw angles round up to exactly 2π
    if a >= TAU {
        0.0
    } else {
        a
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn orientation_signs() {
        let p = vector![0.0, 0.0];
        let q = vector![1.0, 0.0];
        let tol = Tolerance::default();
        assert_eq!(orientation(p, q, vector![0.5, 1.0], tol), Orientation::Left);
        assert_eq!(orientation(p, q, vector![0.5, -1.0], tol), Orientation::Right);
        assert_eq!(orientation(p, q, vector![3.0, 0.0], tol), Orientation::Collinear);
    }

    #[test]
    fn orientation_antisymmetric() {
        let tol = Tolerance::default();
        let p = vector![1.0, 2.0];
        let q = vector![4.0, -1.0];
        let r = vector![2.5, 3.0];
        let a = orientation(p, q, r, tol);
        let b = orientation(q, p, r, tol);
        assert_ne!(a, Orientation::Collinear);
        assert_eq!(a.reverse(), b);
    }

    #[test]
    fn absolute_tolerance_is_scale_dependent() {
        let tol = Tolerance::Absolute(1e-6);
        // Tiny triangle with a right angle still counts as collinear.
        let p = vector![0.0, 0.0];
        let q = vector![1e-4, 0.0];
        let r = vector![0.0, 1e-4];
        assert_eq!(orientation(p, q, r, tol), Orientation::Collinear);
        // Relative policy sees the right angle.
        let rel = Tolerance::Relative(1e-9);
        assert_eq!(orientation(p, q, r, rel), Orientation::Left);
    }

    #[test]
    fn relative_tolerance_flags_near_collinear_at_large_scale() {
        let rel = Tolerance::Relative(1e-9);
        let p = vector![1e6, 1e6];
        let q = vector![2e6, 2e6];
        let r = vector![3e6, 3e6 + 1e-6];
        assert_eq!(orientation(p, q, r, rel), Orientation::Collinear);
        // Coincident points are collinear under the relative policy too.
        assert_eq!(orientation(p, q, p, rel), Orientation::Collinear);
    }

    #[test]
    fn angle_quadrants() {
        let o = vector![1.0, 1.0];
        assert!((angle(o, vector![2.0, 1.0]) - 0.0).abs() < 1e-15);
        assert!((angle(o, vector![1.0, 2.0]) - FRAC_PI_2).abs() < 1e-15);
        assert!((angle(o, vector![0.0, 1.0]) - PI).abs() < 1e-15);
        assert!((angle(o, vector![1.0, 0.0]) - 3.0 * FRAC_PI_2).abs() < 1e-15);
    }

    #[test]
    fn angle_range_is_half_open() {
        let o = vector![0.0, 0.0];
        // Just below the positive x axis: raw atan2 is a tiny negative number.
        let a = angle(o, vector![1.0, -1e-300]);
        assert!((0.0..TAU).contains(&a));
        // Negative zero in y.
        let b = angle(o, vector![1.0, -0.0]);
        assert_eq!(b, 0.0);
        assert!(b.is_sign_positive());
    }
}
