//! SVG rendering of a polygon and classified query points.
//!
//! Output: XML header, SVG 1.1 doctype, one black marker per vertex, one black
//! line per edge (last vertex back to the first), one filled marker per query
//! coloured by `Location::color`.

use std::io::{self, Write};

use crate::star::{Location, Point, StarPolygon};

/// Canvas size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SvgCanvas {
    pub width: u32,
    pub height: u32,
}

impl Default for SvgCanvas {
    fn default() -> Self {
        Self {
            width: 840,
            height: 640,
        }
    }
}

const MARKER_RADIUS: u32 = 2;

/// Write a complete SVG document to `out`.
pub fn write_svg<W: Write>(
    out: &mut W,
    canvas: SvgCanvas,
    polygon: &StarPolygon,
    queries: &[(Point, Location)],
) -> io::Result<()> {
    writeln!(out, r#"<?xml version="1.0" standalone="no" ?>"#)?;
    writeln!(
        out,
        r#"<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">"#
    )?;
    writeln!(
        out,
        r#"<svg width="{}px" height="{}px" xmlns="http://www.w3.org/2000/svg" version="1.1">"#,
        canvas.width, canvas.height
    )?;
    for v in polygon.vertices() {
        writeln!(
            out,
            r#"  <circle cx="{}" cy="{}" r="{MARKER_RADIUS}" stroke="black" stroke-width="2"/>"#,
            v.x, v.y
        )?;
    }
    for (p, q) in polygon.edges() {
        writeln!(
            out,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="black" stroke-width="1"/>"#,
            p.x, p.y, q.x, q.y
        )?;
    }
    for (p, loc) in queries {
        let col = loc.color();
        writeln!(
            out,
            r#"  <circle cx="{}" cy="{}" r="{MARKER_RADIUS}" stroke="{col}" stroke-width="2" fill="{col}"/>"#,
            p.x, p.y
        )?;
    }
    writeln!(out, "</svg>")?;
    Ok(())
}
