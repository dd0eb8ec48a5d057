//! SVG image export
//!
//! Renders the committed lines as stroked paths. SVG's vertical axis points
//! down while the design space points up, so the drawing is flipped around
//! its bounding box. Single-point lines become dots.

use std::path::Path;

use anyhow::{Context, Result};
use bevy::math::Vec2;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Path as SvgPath};
use svg::Document;

use crate::geometry::Polyline;

const MARGIN: f32 = 10.0;
const STROKE_WIDTH: f32 = 2.0;
const DOT_RADIUS: f32 = 2.0;

/// Builds an SVG document from the committed lines
pub fn render_svg(lines: &[Polyline], cell_size: f32) -> Document {
    let points: Vec<Vec2> = lines
        .iter()
        .flat_map(|line| line.points())
        .map(|cell| cell.as_vec2() * cell_size)
        .collect();

    let mut min = Vec2::INFINITY;
    let mut max = Vec2::NEG_INFINITY;
    for p in &points {
        min = min.min(*p);
        max = max.max(*p);
    }
    if points.is_empty() {
        min = Vec2::ZERO;
        max = Vec2::ZERO;
    }

    let width = max.x - min.x + 2.0 * MARGIN;
    let height = max.y - min.y + 2.0 * MARGIN;
    // Design space is y-up, SVG is y-down.
    let place = |world: Vec2| (world.x - min.x + MARGIN, max.y - world.y + MARGIN);

    let mut document = Document::new()
        .set("width", width)
        .set("height", height)
        .set("viewBox", (0.0, 0.0, width, height));

    for line in lines {
        let world: Vec<Vec2> = line
            .points()
            .iter()
            .map(|cell| cell.as_vec2() * cell_size)
            .collect();
        match world.as_slice() {
            [] => {}
            [only] => {
                let (cx, cy) = place(*only);
                document = document.add(
                    Circle::new()
                        .set("cx", cx)
                        .set("cy", cy)
                        .set("r", DOT_RADIUS)
                        .set("fill", "black"),
                );
            }
            [first, rest @ ..] => {
                let mut data = Data::new().move_to(place(*first));
                for p in rest {
                    data = data.line_to(place(*p));
                }
                document = document.add(
                    SvgPath::new()
                        .set("fill", "none")
                        .set("stroke", "black")
                        .set("stroke-width", STROKE_WIDTH)
                        .set("d", data),
                );
            }
        }
    }
    document
}

/// Renders the lines and writes the SVG file
pub fn write_svg_file(path: &Path, lines: &[Polyline], cell_size: f32) -> Result<()> {
    log::debug!("rendering {} lines to {}", lines.len(), path.display());
    let document = render_svg(lines, cell_size);
    svg::save(path, &document)
        .with_context(|| format!("failed to write SVG to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::IVec2;

    fn line(points: &[(i32, i32)]) -> Polyline {
        Polyline::from_points(points.iter().map(|&(x, y)| IVec2::new(x, y)).collect())
    }

    #[test]
    fn paths_are_flipped_and_offset_by_margin() {
        let lines = [line(&[(0, 0), (2, 0)])];
        let rendered = render_svg(&lines, 20.0).to_string();
        // Bounding box is 40x0 world units plus a 10 unit margin all around.
        assert!(rendered.contains("width=\"60\""), "{rendered}");
        assert!(rendered.contains("height=\"20\""), "{rendered}");
        assert!(rendered.contains("M10,10"), "{rendered}");
        assert!(rendered.contains("L50,10"), "{rendered}");
    }

    #[test]
    fn higher_points_land_higher_on_the_page() {
        // (0,0) and (0,2): the y=2 point must get the smaller SVG y.
        let lines = [line(&[(0, 0), (0, 2)])];
        let rendered = render_svg(&lines, 10.0).to_string();
        assert!(rendered.contains("M10,30"), "{rendered}");
        assert!(rendered.contains("L10,10"), "{rendered}");
    }

    #[test]
    fn single_point_line_becomes_a_dot() {
        let lines = [line(&[(1, 1)])];
        let rendered = render_svg(&lines, 20.0).to_string();
        assert!(rendered.contains("<circle"), "{rendered}");
        assert!(!rendered.contains("<path"), "{rendered}");
    }

    #[test]
    fn empty_drawing_is_a_blank_document() {
        let rendered = render_svg(&[], 20.0).to_string();
        assert!(!rendered.contains("<path"));
        assert!(!rendered.contains("<circle"));
    }
}
