//! The export overlay
//!
//! After a plot export the generated command text is shown in an overlay in
//! the top-right corner, together with the file it was written to. The
//! overlay lives while `ExportOutput` holds a report and is despawned when
//! the Close button clears it.

use std::path::PathBuf;

use bevy::prelude::*;

use crate::ui::theme::*;

/// The result of the latest plot export, if any
#[derive(Resource, Debug, Default)]
pub struct ExportOutput {
    pub report: Option<ExportReport>,
}

#[derive(Debug, Clone)]
pub struct ExportReport {
    /// The command text, one command per line
    pub text: String,
    /// Where the text was written
    pub path: PathBuf,
}

/// Component marker for the overlay root
#[derive(Component)]
pub struct ExportOverlay;

/// Component marker for the close button
#[derive(Component)]
pub struct CloseExportButton;

pub struct ExportPanePlugin;

impl Plugin for ExportPanePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ExportOutput>()
            .add_systems(Update, (sync_export_overlay, handle_close_button));
    }
}

/// Spawns or despawns the overlay to match the export output
fn sync_export_overlay(
    mut commands: Commands,
    output: Res<ExportOutput>,
    overlay_q: Query<Entity, With<ExportOverlay>>,
) {
    if !output.is_changed() {
        return;
    }
    for entity in &overlay_q {
        commands.entity(entity).despawn();
    }
    let Some(report) = &output.report else {
        return;
    };

    let body = if report.text.is_empty() {
        "(empty drawing)".to_string()
    } else {
        report.text.clone()
    };

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(OVERLAY_MARGIN),
                top: Val::Px(OVERLAY_MARGIN),
                width: Val::Px(OVERLAY_WIDTH),
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(SIDEBAR_PADDING)),
                row_gap: Val::Px(SIDEBAR_ROW_GAP),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BackgroundColor(OVERLAY_BACKGROUND_COLOR),
            BorderColor(BUTTON_BORDER_COLOR),
            Interaction::default(),
            ExportOverlay,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Plotter commands"),
                TextFont {
                    font_size: TITLE_FONT_SIZE,
                    ..default()
                },
                TextColor(TEXT_COLOR),
            ));
            parent.spawn((
                Text::new(format!("written to {}", report.path.display())),
                TextFont {
                    font_size: EXPORT_TEXT_FONT_SIZE,
                    ..default()
                },
                TextColor(MUTED_TEXT_COLOR),
            ));
            parent.spawn((
                Text::new(body),
                TextFont {
                    font_size: EXPORT_TEXT_FONT_SIZE,
                    ..default()
                },
                TextColor(TEXT_COLOR),
            ));
            parent
                .spawn((
                    Button,
                    CloseExportButton,
                    Node {
                        padding: UiRect::all(Val::Px(6.0)),
                        justify_content: JustifyContent::Center,
                        ..default()
                    },
                    BackgroundColor(NORMAL_BUTTON),
                ))
                .with_children(|button| {
                    button.spawn((
                        Text::new("Close"),
                        TextFont {
                            font_size: LIST_FONT_SIZE,
                            ..default()
                        },
                        TextColor(TEXT_COLOR),
                    ));
                });
        });
}

fn handle_close_button(
    interactions: Query<&Interaction, (Changed<Interaction>, With<CloseExportButton>)>,
    mut output: ResMut<ExportOutput>,
) {
    if interactions.iter().any(|i| *i == Interaction::Pressed) {
        output.report = None;
    }
}
