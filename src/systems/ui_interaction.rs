//! UI hover tracking
//!
//! Canvas tools check this resource so clicks on the sidebar or overlays do
//! not also place points. UI roots that should block the canvas carry an
//! `Interaction` component; any non-`None` interaction counts as hovering.

use bevy::prelude::*;

/// Whether the cursor is currently over a UI surface
#[derive(Resource, Debug, Default)]
pub struct UiHoverState {
    pub is_hovering_ui: bool,
}

pub struct UiInteractionPlugin;

impl Plugin for UiInteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiHoverState>()
            .add_systems(PreUpdate, update_ui_hover_state);
    }
}

fn update_ui_hover_state(
    mut state: ResMut<UiHoverState>,
    interactions: Query<&Interaction, With<Node>>,
) {
    state.is_hovering_ui = interactions
        .iter()
        .any(|interaction| *interaction != Interaction::None);
}
