//! Star polygon container: raw vertex ring, preprocessing, membership.
//!
//! Lifecycle
//! - `Polygon` holds a finished vertex ring (≥ 3 finite points, CCW).
//! - `Polygon::preprocess` computes the origin and the rotation index once and
//!   returns a read-only `StarPolygon`. Only `StarPolygon` answers queries, so
//!   a query can never run against stale derived state.
//!
//! Membership is O(log n): the query's polar angle from the origin selects one
//! edge (its angular sector) and a single turn test against that edge decides.
//! This is only correct when the origin lies in the polygon's kernel; with
//! `StarCfg::validate` that precondition is checked during preprocessing.
//!
//! Code cross-refs: `angular::AngularIndex`, `predicates::{orientation, angle}`

use std::fmt;

use super::angular::AngularIndex;
use super::predicates::{angle, orientation, signed_area};
use super::types::{Location, OriginStrategy, Point, StarCfg, Tolerance};

/// Errors raised while building or preprocessing a polygon.
#[derive(Clone, Debug, PartialEq)]
pub enum PolygonError {
    TooFewVertices { n: usize },
    NonFiniteVertex { index: usize },
    /// Area-weighted centroid requested for a zero-area ring.
    DegenerateArea,
    OriginOnVertex { index: usize },
    /// The origin does not see edge `edge → edge+1` counter-clockwise.
    OriginNotInKernel { edge: usize },
    /// Angles from the origin do not wrap exactly once around the ring.
    NotAngularlySorted { descents: usize },
}

impl fmt::Display for PolygonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewVertices { n } => write!(f, "polygon needs at least 3 vertices, got {n}"),
            Self::NonFiniteVertex { index } => write!(f, "vertex {index} is not finite"),
            Self::DegenerateArea => write!(f, "polygon has zero area"),
            Self::OriginOnVertex { index } => write!(f, "origin coincides with vertex {index}"),
            Self::OriginNotInKernel { edge } => {
                write!(f, "origin is not in the polygon kernel (edge {edge})")
            }
            Self::NotAngularlySorted { descents } => write!(
                f,
                "vertices are not angle-sorted around the origin ({descents} wraps, expected 1)"
            ),
        }
    }
}

impl std::error::Error for PolygonError {}

/// Closed vertex ring; vertex `i` connects to vertex `(i + 1) % n`.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Result<Self, PolygonError> {
        if vertices.len() < 3 {
            return Err(PolygonError::TooFewVertices { n: vertices.len() });
        }
        if let Some(index) = vertices
            .iter()
            .position(|v| !(v.x.is_finite() && v.y.is_finite()))
        {
            return Err(PolygonError::NonFiniteVertex { index });
        }
        Ok(Self { vertices })
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Mean of the first three vertices.
    #[inline]
    pub fn first_three_centroid(&self) -> Point {
        (self.vertices[0] + self.vertices[1] + self.vertices[2]) / 3.0
    }

    /// Signed-area-weighted centroid; `None` for (near) zero area.
    pub fn area_centroid(&self) -> Option<Point> {
        let verts = &self.vertices;
        let mut a: f64 = 0.0;
        let mut cx: f64 = 0.0;
        let mut cy: f64 = 0.0;
        for i in 0..verts.len() {
            let p = verts[i];
            let q = verts[(i + 1) % verts.len()];
            let cross = p.x * q.y - q.x * p.y;
            a += cross;
            cx += (p.x + q.x) * cross;
            cy += (p.y + q.y) * cross;
        }
        a *= 0.5;
        if a.abs() < 1e-18 {
            return None;
        }
        Some(Point::new(cx / (6.0 * a), cy / (6.0 * a)))
    }

    /// Compute the origin and rotation index; optionally validate the star
    /// precondition (see `StarCfg::validate`).
    pub fn preprocess(self, cfg: &StarCfg) -> Result<StarPolygon, PolygonError> {
        let origin = match cfg.origin {
            OriginStrategy::FirstThreeCentroid => self.first_three_centroid(),
            OriginStrategy::AreaCentroid => {
                self.area_centroid().ok_or(PolygonError::DegenerateArea)?
            }
            OriginStrategy::Fixed(p) => p,
        };
        if let Some(index) = self.vertices.iter().position(|v| *v == origin) {
            return Err(PolygonError::OriginOnVertex { index });
        }
        if cfg.validate {
            check_star(&self.vertices, origin)?;
        }
        let index = AngularIndex::new(&self.vertices, origin);
        tracing::debug!(
            n = self.vertices.len(),
            origin_x = origin.x,
            origin_y = origin.y,
            rotation = index.rotation(),
            "preprocessed star polygon"
        );
        Ok(StarPolygon {
            vertices: self.vertices,
            index,
            tolerance: cfg.tolerance,
        })
    }
}

/// O(n) check that `origin` sees every edge counter-clockwise and that the
/// polar angles wrap exactly once.
fn check_star(vertices: &[Point], origin: Point) -> Result<(), PolygonError> {
    let n = vertices.len();
    for i in 0..n {
        let (p, q) = (vertices[i], vertices[(i + 1) % n]);
        if signed_area(origin, p, q) <= 0.0 {
            return Err(PolygonError::OriginNotInKernel { edge: i });
        }
    }
    let descents = (0..n)
        .filter(|&i| angle(origin, vertices[(i + 1) % n]) <= angle(origin, vertices[i]))
        .count();
    if descents != 1 {
        return Err(PolygonError::NotAngularlySorted { descents });
    }
    Ok(())
}

/// Preprocessed star polygon. Read-only; safe to share between threads.
#[derive(Clone, Debug)]
pub struct StarPolygon {
    vertices: Vec<Point>,
    index: AngularIndex,
    tolerance: Tolerance,
}

impl StarPolygon {
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn origin(&self) -> Point {
        self.index.origin()
    }

    /// First vertex whose angle is below the angle of vertex 0; `len()` if none.
    #[inline]
    pub fn rotation_index(&self) -> usize {
        self.index.rotation()
    }

    #[inline]
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Edges as `(from, to)` pairs, wrapping last → first.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// O(log n) membership test.
    pub fn contains(&self, query: Point) -> Location {
        let query_angle = angle(self.origin(), query);
        let (v1, v2) = self.index.sector(&self.vertices, query_angle);
        orientation(self.vertices[v1], self.vertices[v2], query, self.tolerance).into()
    }

    /// Classify every point of `queries`.
    pub fn classify_all(&self, queries: &[Point]) -> Vec<Location> {
        queries.iter().map(|&q| self.contains(q)).collect()
    }

    /// O(n) reference test independent of the angular index: boundary check
    /// against every edge, then even-odd ray crossing.
    pub fn contains_scan(&self, query: Point) -> Location {
        if self
            .edges()
            .any(|(p, q)| on_segment(p, q, query, self.tolerance))
        {
            return Location::OnBoundary;
        }
        let mut inside = false;
        for (p, q) in self.edges() {
            if (p.y > query.y) != (q.y > query.y) {
                let t = (query.y - p.y) / (q.y - p.y);
                let x_crossing = p.x + t * (q.x - p.x);
                if x_crossing > query.x {
                    inside = !inside;
                }
            }
        }
        if inside {
            Location::Inside
        } else {
            Location::Outside
        }
    }
}

#[inline]
fn on_segment(p: Point, q: Point, r: Point, tol: Tolerance) -> bool {
    if !tol.is_negligible(signed_area(p, q, r), p, q, r) {
        return false;
    }
    let within = |a: f64, b: f64, v: f64| v >= a.min(b) && v <= a.max(b);
    within(p.x, q.x, r.x) && within(p.y, q.y, r.y)
}
