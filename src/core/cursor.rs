//! Cursor tracking
//!
//! Converts the window cursor position into world coordinates and the
//! nearest grid cell once per frame, so input and preview systems all agree
//! on where the cursor is.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::geometry::Grid;
use crate::rendering::cameras::DesignCamera;

/// Where the cursor is this frame, if it is over the window
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct CursorInfo {
    /// Cursor position in world coordinates
    pub world: Option<Vec2>,
    /// Nearest grid cell to the cursor
    pub cell: Option<IVec2>,
}

pub struct CursorPlugin;

impl Plugin for CursorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CursorInfo>()
            .add_systems(PreUpdate, update_cursor_info);
    }
}

fn update_cursor_info(
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_q: Query<(&Camera, &GlobalTransform), With<DesignCamera>>,
    grid: Res<Grid>,
    mut cursor: ResMut<CursorInfo>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_q.single() else {
        return;
    };

    let world = window
        .cursor_position()
        .and_then(|pos| camera.viewport_to_world_2d(camera_transform, pos).ok());

    cursor.world = world;
    cursor.cell = world.map(|pos| grid.world_to_cell(pos));
}
