//! Point-in-star-polygon queries by angular binary search.
//!
//! A star polygon is preprocessed once (interior origin + rotation index);
//! afterwards each query costs one binary search over vertex angles and one
//! orientation test. The `svg` module renders polygons and classified points.

pub mod star;
pub mod svg;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::star::rand::{
        draw_star_polygon, draw_star_polygon_replay, sample_rect, GeneratorError, RadialCfg,
        ReplayToken, VertexCount,
    };
    pub use crate::star::{
        angle, orientation, Location, Orientation, OriginStrategy, Point, Polygon, PolygonError,
        StarCfg, StarPolygon, Tolerance,
    };
    pub use crate::svg::{write_svg, SvgCanvas};
    pub use nalgebra::Vector2 as Vec2;
}
