//! The pen tool
//!
//! Left clicks place grid-snapped points into the active line; Escape
//! finishes the line. The preview shows the active line, a marker on the
//! snapped cursor cell and a translucent segment from the last placed point
//! to the cursor.

use bevy::prelude::*;

use crate::core::cursor::CursorInfo;
use crate::editing::{Document, Selection};
use crate::geometry::Grid;
use crate::systems::ui_interaction::UiHoverState;
use crate::ui::theme::{
    ACTIVE_LINE_COLOR, ACTIVE_POINT_COLOR, ACTIVE_POINT_RADIUS, PREVIEW_LINE_COLOR,
    SNAP_MARKER_COLOR, SNAP_MARKER_RADIUS,
};

/// The state of the pen tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PenState {
    /// Ready to start a line
    #[default]
    Ready,
    /// Placing points into the active line
    Drawing,
}

/// Resource tracking what the pen tool is doing
#[derive(Resource, Debug, Default)]
pub struct PenToolState {
    pub state: PenState,
}

/// Plugin registering the pen tool systems
pub struct PenPlugin;

impl Plugin for PenPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PenToolState>().add_systems(
            Update,
            (handle_pen_clicks, handle_pen_keys, render_pen_preview),
        );
    }
}

/// Places or extends the active line on left click
fn handle_pen_clicks(
    mouse: Res<ButtonInput<MouseButton>>,
    cursor: Res<CursorInfo>,
    hover: Res<UiHoverState>,
    mut pen: ResMut<PenToolState>,
    mut selection: ResMut<Selection>,
    mut document: ResMut<Document>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    // Clicks on the sidebar and overlays never reach the canvas.
    if hover.is_hovering_ui {
        return;
    }
    let Some(cell) = cursor.cell else {
        return;
    };

    // A click while a point is being moved drops it where it is.
    if selection.moving {
        selection.moving = false;
        info!("Dropped moved point at {:?}", cell);
        return;
    }

    match pen.state {
        PenState::Ready => {
            selection.clear();
            pen.state = PenState::Drawing;
            document.start_or_extend(cell);
            info!("Started new line at {:?}", cell);
        }
        PenState::Drawing => {
            document.start_or_extend(cell);
            info!("Extended line to {:?}", cell);
        }
    }
}

/// Finishes the active line on Escape
fn handle_pen_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut pen: ResMut<PenToolState>,
    mut selection: ResMut<Selection>,
    mut document: ResMut<Document>,
) {
    if !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }

    if selection.moving {
        selection.moving = false;
    }

    let points = document.active.len();
    if document.commit_active() {
        pen.state = PenState::Ready;
        info!("Line finished: {} points", points);
    }
}

/// Draws the active line, the snap marker and the preview segment
fn render_pen_preview(
    mut gizmos: Gizmos,
    document: Res<Document>,
    grid: Res<Grid>,
    cursor: Res<CursorInfo>,
    hover: Res<UiHoverState>,
) {
    for (a, b) in document.active.segments() {
        gizmos.line_2d(
            grid.cell_to_world(a),
            grid.cell_to_world(b),
            ACTIVE_LINE_COLOR,
        );
    }
    for &point in document.active.points() {
        gizmos.circle_2d(
            grid.cell_to_world(point),
            ACTIVE_POINT_RADIUS,
            ACTIVE_POINT_COLOR,
        );
    }

    // No marker while the cursor is over UI.
    if hover.is_hovering_ui {
        return;
    }
    let Some(cell) = cursor.cell else {
        return;
    };
    let snapped = grid.cell_to_world(cell);
    gizmos.circle_2d(snapped, SNAP_MARKER_RADIUS, SNAP_MARKER_COLOR);

    if let Some(last) = document.active.last() {
        gizmos.line_2d(grid.cell_to_world(last), snapped, PREVIEW_LINE_COLOR);
    }
}
