//! Grid line rendering
//!
//! Draws the lattice over the visible camera rect with gizmos, with every
//! n-th line emphasized. Pressing `g` toggles visibility. When the camera is
//! zoomed far out the grid is dropped entirely rather than drawn as noise.

use bevy::prelude::*;

use crate::core::settings::{MAJOR_GRID_LINE_EVERY, MAX_VISIBLE_GRID_LINES};
use crate::geometry::Grid;
use crate::rendering::cameras::DesignCamera;
use crate::ui::theme::{GRID_LINE_COLOR, GRID_MAJOR_LINE_COLOR};

/// Resource to track grid visibility
#[derive(Resource)]
pub struct GridSettings {
    pub visible: bool,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self { visible: true }
    }
}

pub struct GridRenderPlugin;

impl Plugin for GridRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GridSettings>()
            .add_systems(Update, (toggle_grid, draw_grid));
    }
}

/// System to toggle grid visibility
fn toggle_grid(keyboard: Res<ButtonInput<KeyCode>>, mut settings: ResMut<GridSettings>) {
    if keyboard.just_pressed(KeyCode::KeyG) {
        settings.visible = !settings.visible;
    }
}

/// System that draws the visible portion of the grid
fn draw_grid(
    mut gizmos: Gizmos,
    grid: Res<Grid>,
    settings: Res<GridSettings>,
    camera_q: Query<(&Projection, &GlobalTransform), With<DesignCamera>>,
) {
    if !settings.visible {
        return;
    }
    let Ok((projection, transform)) = camera_q.single() else {
        return;
    };
    let Projection::Orthographic(ortho) = projection else {
        return;
    };

    let center = transform.translation().truncate();
    let half = ortho.area.half_size();
    let min = center - half;
    let max = center + half;

    let spacing = grid.cell_size;
    let visible_lines = ((max.x - min.x) / spacing).max((max.y - min.y) / spacing);
    if visible_lines > MAX_VISIBLE_GRID_LINES as f32 {
        return;
    }

    let line_color = |index: i32| {
        if index % MAJOR_GRID_LINE_EVERY == 0 {
            GRID_MAJOR_LINE_COLOR
        } else {
            GRID_LINE_COLOR
        }
    };

    let first_x = (min.x / spacing).floor() as i32;
    let last_x = (max.x / spacing).ceil() as i32;
    for i in first_x..=last_x {
        let x = i as f32 * spacing;
        gizmos.line_2d(Vec2::new(x, min.y), Vec2::new(x, max.y), line_color(i));
    }

    let first_y = (min.y / spacing).floor() as i32;
    let last_y = (max.y / spacing).ceil() as i32;
    for i in first_y..=last_y {
        let y = i as f32 * spacing;
        gizmos.line_2d(Vec2::new(min.x, y), Vec2::new(max.x, y), line_color(i));
    }
}
