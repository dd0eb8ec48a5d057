//! Committed line rendering
//!
//! Gizmos redraw the whole document every frame, so there is no explicit
//! invalidation: edits show up as soon as the document changes. Selected
//! lines and points get highlight colors.

use bevy::prelude::*;

use crate::editing::{Document, Selection};
use crate::geometry::Grid;
use crate::ui::theme::{
    LINE_COLOR, MOVING_POINT_COLOR, POINT_COLOR, POINT_RADIUS, SELECTED_LINE_COLOR,
    SELECTED_POINT_COLOR, SELECTED_POINT_RADIUS,
};

pub struct LineRenderPlugin;

impl Plugin for LineRenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, draw_lines);
    }
}

fn draw_lines(
    mut gizmos: Gizmos,
    document: Res<Document>,
    grid: Res<Grid>,
    selection: Res<Selection>,
) {
    for (index, line) in document.lines.iter().enumerate() {
        let line_selected = selection.line == Some(index);
        let color = if line_selected {
            SELECTED_LINE_COLOR
        } else {
            LINE_COLOR
        };

        for (a, b) in line.segments() {
            gizmos.line_2d(grid.cell_to_world(a), grid.cell_to_world(b), color);
        }

        for (point_index, &point) in line.points().iter().enumerate() {
            let world = grid.cell_to_world(point);
            if line_selected && selection.point == Some(point_index) {
                let highlight = if selection.moving {
                    MOVING_POINT_COLOR
                } else {
                    SELECTED_POINT_COLOR
                };
                gizmos.circle_2d(world, SELECTED_POINT_RADIUS, highlight);
            } else {
                gizmos.circle_2d(world, POINT_RADIUS, POINT_COLOR);
            }
        }
    }
}
