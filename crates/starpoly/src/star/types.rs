//! Value types and tolerances used by the star-polygon membership test.
//!
//! - `Orientation`, `Location`: results of the turn predicate and of membership.
//! - `Tolerance`: collinearity policy applied to the signed triangle area.
//! - `OriginStrategy`, `StarCfg`: preprocessing configuration.
//!
//! Code cross-refs: `predicates::orientation`, `polygon::Polygon::preprocess`

use nalgebra::Vector2;

/// A point in the plane. Plain `Copy` value, no identity beyond coordinates.
pub type Point = Vector2<f64>;

/// Turn direction of `r` relative to the directed line `p → q`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Counter-clockwise (`r` left of `p → q`).
    Left,
    /// Clockwise (`r` right of `p → q`).
    Right,
    Collinear,
}

impl Orientation {
    /// Opposite turn; `Collinear` is its own reverse.
    #[inline]
    pub fn reverse(self) -> Self {
        match self {
            Orientation::Left => Orientation::Right,
            Orientation::Right => Orientation::Left,
            Orientation::Collinear => Orientation::Collinear,
        }
    }
}

/// Result of a membership query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Location {
    Inside,
    Outside,
    OnBoundary,
}

impl Location {
    /// Marker colour used by the SVG collaborator.
    #[inline]
    pub fn color(self) -> &'static str {
        match self {
            Location::Inside => "red",
            Location::Outside => "blue",
            Location::OnBoundary => "green",
        }
    }

    /// Short lowercase label, used for CSV output and logs.
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            Location::Inside => "inside",
            Location::Outside => "outside",
            Location::OnBoundary => "boundary",
        }
    }
}

impl From<Orientation> for Location {
    /// Edges are traversed counter-clockwise, so "left of the edge" is the interior side.
    #[inline]
    fn from(o: Orientation) -> Self {
        match o {
            Orientation::Left => Location::Inside,
            Orientation::Right => Location::Outside,
            Orientation::Collinear => Location::OnBoundary,
        }
    }
}

/// Collinearity policy for the signed area of a triangle `(p, q, r)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tolerance {
    /// Collinear iff `|area| < eps`. Scale dependent.
    Absolute(f64),
    /// Collinear iff `|area| <= eps * |q - p| * |r - p|`, i.e. a bound on the
    /// sine of the angle at `p`. Independent of coordinate magnitude.
    Relative(f64),
}

impl Tolerance {
    /// Fixed absolute threshold of the sample run.
    pub const DEFAULT_ABS_EPS: f64 = 1e-6;

    /// Whether `area` (signed area of `(p, q, r)`) counts as zero.
    #[inline]
    pub fn is_negligible(&self, area: f64, p: Point, q: Point, r: Point) -> bool {
        match *self {
            Tolerance::Absolute(eps) => area.abs() < eps,
            Tolerance::Relative(eps) => area.abs() <= eps * (q - p).norm() * (r - p).norm(),
        }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance::Absolute(Self::DEFAULT_ABS_EPS)
    }
}

/// How `preprocess` picks the interior reference point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OriginStrategy {
    /// Mean of the first three vertices. Cheap; only reliable for convex input
    /// or polygons built around that point.
    FirstThreeCentroid,
    /// Signed-area-weighted centroid of the whole boundary.
    AreaCentroid,
    /// Caller-supplied kernel point.
    Fixed(Point),
}

/// Preprocessing configuration.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    pub origin: OriginStrategy,
    pub tolerance: Tolerance,
    /// Verify in O(n) that the origin sees every edge counter-clockwise and
    /// that the angular order wraps exactly once.
    pub validate: bool,
}

impl Default for StarCfg {
    fn default() -> Self {
        Self {
            origin: OriginStrategy::FirstThreeCentroid,
            tolerance: Tolerance::default(),
            validate: true,
        }
    }
}

impl StarCfg {
    /// Same configuration with a caller-supplied origin.
    #[inline]
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = OriginStrategy::Fixed(origin);
        self
    }
}
