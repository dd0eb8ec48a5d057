//! Camera setup for the design space
//!
//! A single 2D camera with pan and zoom. Panning is bound to the middle and
//! right mouse buttons so left clicks stay with the pen tool.

use bevy::prelude::*;
use bevy_pancam::{PanCam, PanCamPlugin};

use crate::core::settings::{MAX_ALLOWED_ZOOM_SCALE, MIN_ALLOWED_ZOOM_SCALE};

/// Component that marks the main design camera
#[derive(Component)]
pub struct DesignCamera;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(PanCamPlugin)
            .add_systems(Startup, spawn_design_camera);
    }
}

fn spawn_design_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        DesignCamera,
        PanCam {
            grab_buttons: vec![MouseButton::Middle, MouseButton::Right],
            min_scale: MIN_ALLOWED_ZOOM_SCALE,
            max_scale: MAX_ALLOWED_ZOOM_SCALE,
            ..default()
        },
    ));
}
