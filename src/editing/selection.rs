//! Selection state and point editing shortcuts
//!
//! The selection refers to committed lines by index. Systems here handle the
//! keyboard side of editing: deleting the selected point, toggling move-point
//! mode, and nudging with the arrow keys. Mutations clear or keep the
//! selection so no system can index out of bounds afterwards.

use bevy::prelude::*;

use crate::core::cursor::CursorInfo;
use crate::core::settings::{NUDGE_CELLS, SHIFT_NUDGE_CELLS};
use crate::editing::Document;

/// Which committed line and point the user is working with
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Index of the selected committed line
    pub line: Option<usize>,
    /// Index of the selected point within the selected line
    pub point: Option<usize>,
    /// Whether the selected point is in move mode and follows the cursor
    pub moving: bool,
}

impl Selection {
    /// Selects a line, dropping any point selection
    pub fn select_line(&mut self, index: usize) {
        self.line = Some(index);
        self.point = None;
        self.moving = false;
    }

    /// Selects a point of the currently selected line
    pub fn select_point(&mut self, index: usize) {
        if self.line.is_some() {
            self.point = Some(index);
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The selected (line, point) pair, when both are set
    pub fn selected(&self) -> Option<(usize, usize)> {
        Some((self.line?, self.point?))
    }
}

/// Plugin registering the selection resource and its keyboard systems
pub struct SelectionPlugin;

impl Plugin for SelectionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Selection>().add_systems(
            Update,
            (
                handle_delete_point,
                handle_move_toggle,
                move_selected_point,
                nudge_selected_point,
            ),
        );
    }
}

/// Deletes the selected point on `d` or `Delete`
fn handle_delete_point(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut selection: ResMut<Selection>,
    mut document: ResMut<Document>,
) {
    if !keyboard.just_pressed(KeyCode::KeyD) && !keyboard.just_pressed(KeyCode::Delete) {
        return;
    }
    let Some((line, point)) = selection.selected() else {
        return;
    };
    if document.delete_point(line, point) {
        selection.point = None;
        selection.moving = false;
        info!("Deleted point {} from line {}", point, line);
    }
}

/// Toggles move-point mode on `m`
fn handle_move_toggle(keyboard: Res<ButtonInput<KeyCode>>, mut selection: ResMut<Selection>) {
    if !keyboard.just_pressed(KeyCode::KeyM) {
        return;
    }
    if selection.moving {
        selection.moving = false;
        info!("Stopped moving the point");
    } else if selection.selected().is_some() {
        selection.moving = true;
        info!("Started moving the point");
    } else {
        warn!("Cannot move: no point selected");
    }
}

/// While move mode is active, the selected point follows the snapped cursor
fn move_selected_point(
    selection: Res<Selection>,
    cursor: Res<CursorInfo>,
    mut document: ResMut<Document>,
) {
    if !selection.moving {
        return;
    }
    let Some((line, point)) = selection.selected() else {
        return;
    };
    let Some(cell) = cursor.cell else {
        return;
    };
    // Only write when the cell actually changes, so change detection on the
    // document stays meaningful.
    if document.point(line, point) == Some(cell) {
        return;
    }
    document.move_point(line, point, cell);
}

/// Nudges the selected point by whole cells with the arrow keys
fn nudge_selected_point(
    keyboard: Res<ButtonInput<KeyCode>>,
    selection: Res<Selection>,
    mut document: ResMut<Document>,
) {
    let Some((line, point)) = selection.selected() else {
        return;
    };

    let mut delta = IVec2::ZERO;
    if keyboard.just_pressed(KeyCode::ArrowLeft) {
        delta.x -= 1;
    }
    if keyboard.just_pressed(KeyCode::ArrowRight) {
        delta.x += 1;
    }
    if keyboard.just_pressed(KeyCode::ArrowDown) {
        delta.y -= 1;
    }
    if keyboard.just_pressed(KeyCode::ArrowUp) {
        delta.y += 1;
    }
    if delta == IVec2::ZERO {
        return;
    }

    let shift =
        keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);
    let step = if shift { SHIFT_NUDGE_CELLS } else { NUDGE_CELLS };

    let Some(current) = document.point(line, point) else {
        return;
    };
    document.move_point(line, point, current + delta * step);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_line_clears_point() {
        let mut selection = Selection::default();
        selection.select_line(0);
        selection.select_point(3);
        assert_eq!(selection.selected(), Some((0, 3)));

        selection.select_line(1);
        assert_eq!(selection.line, Some(1));
        assert_eq!(selection.point, None);
        assert_eq!(selection.selected(), None);
    }

    #[test]
    fn select_point_requires_line() {
        let mut selection = Selection::default();
        selection.select_point(2);
        assert_eq!(selection.point, None);
    }

    #[test]
    fn clear_resets_move_mode() {
        let mut selection = Selection {
            line: Some(0),
            point: Some(0),
            moving: true,
        };
        selection.clear();
        assert_eq!(selection, Selection::default());
    }
}
