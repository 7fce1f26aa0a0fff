//! Angular index over an angle-sorted vertex ring.
//!
//! The vertices of a star polygon, seen from a kernel point, are sorted by
//! polar angle up to one rotation: `angles[0..r]` ascend, `angles[r..n]`
//! ascend, and everything after `r` is smaller than `angles[0]`. `r` is the
//! rotation index (`n` when the list does not wrap). `AngularIndex` treats the
//! ring as one sorted sequence starting at physical index `r % n`, so a single
//! binary search finds the sector of any query angle.

use std::ops::Range;

use super::predicates::angle;
use super::types::Point;

/// First index in `range` where the monotone predicate `pred` becomes true,
/// or `range.end` if it never does.
///
/// Pre: `pred` is `false` on a prefix of `range` and `true` on the rest.
#[inline]
pub fn first_true<F: Fn(usize) -> bool>(range: Range<usize>, pred: F) -> usize {
    let mut lo = range.start;
    let mut hi = range.end;
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if pred(mid) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}

/// Smallest index in `range` whose key strictly exceeds `query`, or `range.end`.
///
/// Pre: `key` ascends over `range`.
#[inline]
pub fn upper_bound_by<F: Fn(usize) -> f64>(range: Range<usize>, key: F, query: f64) -> usize {
    first_true(range, |i| key(i) > query)
}

/// Smallest index in `range` whose angle from `origin` strictly exceeds
/// `query_angle`, or `range.end` if none does.
///
/// Pre: vertices in `range` are angle-sorted ascending around `origin`.
#[inline]
pub fn find_first_greater(
    vertices: &[Point],
    origin: Point,
    range: Range<usize>,
    query_angle: f64,
) -> usize {
    upper_bound_by(range, |i| angle(origin, vertices[i]), query_angle)
}

/// Index of the first vertex whose angle is below the angle of vertex 0
/// (where the angular order wraps), or `vertices.len()` if it never wraps.
pub fn rotation_index(vertices: &[Point], origin: Point) -> usize {
    let Some(&v0) = vertices.first() else {
        return 0;
    };
    let a0 = angle(origin, v0);
    first_true(0..vertices.len(), |i| angle(origin, vertices[i]) < a0)
}

/// Rotation-aware binary search over an angle-sorted vertex ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngularIndex {
    origin: Point,
    rotation: usize,
    len: usize,
}

impl AngularIndex {
    /// Build the index for `vertices` around `origin` (O(log n)).
    pub fn new(vertices: &[Point], origin: Point) -> Self {
        Self {
            origin,
            rotation: rotation_index(vertices, origin),
            len: vertices.len(),
        }
    }

    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Rotation index in `0..=len`; `len` means no wrap.
    #[inline]
    pub fn rotation(&self) -> usize {
        self.rotation
    }

    /// Physical index of the smallest angle.
    #[inline]
    fn start(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            self.rotation % self.len
        }
    }

    /// Physical index of the `k`-th vertex in ascending angular order.
    #[inline]
    pub fn physical(&self, k: usize) -> usize {
        (self.start() + k) % self.len
    }

    /// Physical index of the first vertex, in circular angular order, whose
    /// angle strictly exceeds `query_angle`. Wraps to the smallest-angle vertex
    /// when the query lies beyond the largest angle.
    ///
    /// Pre: `vertices` is the ring this index was built for (non-empty).
    pub fn upper_vertex(&self, vertices: &[Point], query_angle: f64) -> usize {
        debug_assert_eq!(vertices.len(), self.len, "index built for another ring");
        let k = upper_bound_by(
            0..self.len,
            |k| angle(self.origin, vertices[self.physical(k)]),
            query_angle,
        );
        if k == self.len {
            self.start()
        } else {
            self.physical(k)
        }
    }

    /// Edge `(v1, v2)` whose angular sector contains `query_angle`.
    #[inline]
    pub fn sector(&self, vertices: &[Point], query_angle: f64) -> (usize, usize) {
        let v2 = self.upper_vertex(vertices, query_angle);
        let v1 = (v2 + self.len - 1) % self.len;
        (v1, v2)
    }
}
