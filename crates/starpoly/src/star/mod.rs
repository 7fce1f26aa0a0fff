//! Star-shaped polygons with O(log n) membership.
//!
//! Purpose
//! - Classify query points as inside, outside, or on the boundary of a polygon
//!   that is star-shaped around a known interior origin.
//! - Generate random star polygons (sorted random angles on a circle).
//!
//! Layout (leaf first)
//! - `predicates`: turn direction with a tolerance policy, polar angle.
//! - `angular`: upper-bound search, rotation index, rotation-aware `AngularIndex`.
//! - `polygon`: `Polygon` → `preprocess` → `StarPolygon::contains`.
//! - `rand`: sampler for polygons and query points.

pub mod angular;
pub mod polygon;
pub mod predicates;
pub mod rand;
mod types;

pub use angular::{find_first_greater, rotation_index, upper_bound_by, AngularIndex};
pub use polygon::{Polygon, PolygonError, StarPolygon};
pub use predicates::{angle, orientation, signed_area};
pub use types::{Location, Orientation, OriginStrategy, Point, StarCfg, Tolerance};

#[cfg(test)]
mod tests;
