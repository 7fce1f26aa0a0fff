//! Random star polygons around a fixed centre (sorted random angles + replay tokens).
//!
//! Model
//! - Draw `n` independent uniform angles on [0, 2π), sort them, and place each
//!   vertex on the circle of radius `radius` around `center`. The ring is convex,
//!   counter-clockwise and angle-sorted around `center` by construction.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG;
//!   any other `rand::Rng` (e.g. `thread_rng()`) can be passed directly.
//!
//! Code cross-refs: `polygon::Polygon`, `polygon::Polygon::preprocess`

use std::f64::consts::TAU;
use std::fmt;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::polygon::Polygon;
use super::types::Point;

/// Redraws allowed when two sorted angles coincide.
const MAX_ATTEMPTS: usize = 16;

/// Error type for the polygon sampler.
#[derive(Clone, Debug, PartialEq)]
pub enum GeneratorError {
    InvalidParams { reason: String },
    DegenerateSample { reason: String },
}

impl GeneratorError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }

    fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateSample {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid generator params: {reason}"),
            Self::DegenerateSample { reason } => write!(f, "degenerate sample: {reason}"),
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Vertex count distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn validate(&self) -> Result<(), GeneratorError> {
        match *self {
            VertexCount::Fixed(n) if n < 3 => {
                Err(GeneratorError::invalid(format!("need at least 3 vertices, got {n}")))
            }
            VertexCount::Uniform { min, max } if min < 3 || min > max => Err(
                GeneratorError::invalid(format!("vertex range {min}..={max} needs 3 <= min <= max")),
            ),
            _ => Ok(()),
        }
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n,
            VertexCount::Uniform { min, max } => rng.gen_range(min..=max),
        }
    }
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    pub center: Point,
    pub radius: f64,
}

impl Default for RadialCfg {
    /// The fixed sample run: 30 vertices on a radius-300 circle centred at (400, 300).
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(30),
            center: Vector2::new(400.0, 300.0),
            radius: 300.0,
        }
    }
}

impl RadialCfg {
    fn validate(&self) -> Result<(), GeneratorError> {
        self.vertex_count.validate()?;
        if !(self.center.x.is_finite() && self.center.y.is_finite()) {
            return Err(GeneratorError::invalid("center must be finite"));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(GeneratorError::invalid("radius must be finite and > 0"));
        }
        Ok(())
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// `n` sorted, pairwise distinct uniform angles on [0, 2π).
fn sorted_angles<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Result<Vec<f64>, GeneratorError> {
    for attempt in 0..MAX_ATTEMPTS {
        let mut angles: Vec<f64> = (0..n).map(|_| rng.gen::<f64>() * TAU).collect();
        angles.sort_by(f64::total_cmp);
        if angles.windows(2).all(|w| w[0] < w[1]) {
            return Ok(angles);
        }
        tracing::debug!(attempt, n, "coincident angles, redrawing");
    }
    Err(GeneratorError::degenerate(format!(
        "no {n} distinct angles after {MAX_ATTEMPTS} attempts"
    )))
}

/// Draw a random star polygon, star-shaped (and convex) around `cfg.center`.
pub fn draw_star_polygon<R: Rng + ?Sized>(
    cfg: &RadialCfg,
    rng: &mut R,
) -> Result<Polygon, GeneratorError> {
    cfg.validate()?;
    let n = cfg.vertex_count.sample(rng);
    let pts: Vec<Point> = sorted_angles(rng, n)?
        .into_iter()
        .map(|th| cfg.center + Vector2::new(th.cos(), th.sin()) * cfg.radius)
        .collect();
    tracing::debug!(n, radius = cfg.radius, "drew star polygon");
    Polygon::new(pts).map_err(|e| GeneratorError::degenerate(e.to_string()))
}

/// Reproducible variant of `draw_star_polygon`.
pub fn draw_star_polygon_replay(
    cfg: &RadialCfg,
    tok: ReplayToken,
) -> Result<Polygon, GeneratorError> {
    draw_star_polygon(cfg, &mut tok.to_std_rng())
}

/// Uniform point in the axis-aligned rectangle `[min.x, max.x) × [min.y, max.y)`.
///
/// Pre: `min.x < max.x` and `min.y < max.y`.
#[inline]
pub fn sample_rect<R: Rng + ?Sized>(rng: &mut R, min: Point, max: Point) -> Point {
    Vector2::new(rng.gen_range(min.x..max.x), rng.gen_range(min.y..max.y))
}
