//! Application initialization and configuration

use anyhow::Result;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::winit::WinitSettings;

use crate::core::cli::CliArgs;
use crate::core::cursor::CursorPlugin;
use crate::editing::{Document, SelectionPlugin};
use crate::geometry::Grid;
use crate::rendering::{cameras::CameraPlugin, grid::GridRenderPlugin, lines::LineRenderPlugin};
use crate::systems::ui_interaction::UiInteractionPlugin;
use crate::tools::pen::PenPlugin;
use crate::ui::export_pane::ExportPanePlugin;
use crate::ui::panes::sidebar::SidebarPlugin;
use crate::ui::theme::{BACKGROUND_COLOR, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};

/// Creates a fully configured Bevy GUI application ready to run
pub fn create_app(cli_args: CliArgs) -> Result<App> {
    cli_args.validate()?;

    let mut app = App::new();
    configure_app_settings(&mut app, cli_args);
    add_all_plugins(&mut app);
    Ok(app)
}

/// Sets up application resources and configuration
fn configure_app_settings(app: &mut App, cli_args: CliArgs) {
    let grid = Grid::new(cli_args.cell_size);

    app.insert_resource(grid)
        .init_resource::<Document>()
        .insert_resource(cli_args)
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .insert_resource(WinitSettings::desktop_app());
}

/// Adds all plugins to the application in logical groups
fn add_all_plugins(app: &mut App) {
    // The custom logger is installed before the app is built, so Bevy's own
    // LogPlugin has to stay out.
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: WINDOW_TITLE.into(),
                    resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
                    ..default()
                }),
                ..default()
            })
            .disable::<LogPlugin>(),
    );

    add_rendering_plugins(app);
    add_editor_plugins(app);
    add_ui_plugins(app);

    app.add_systems(Update, exit_on_ctrl_q);
}

/// Plugins for the canvas: camera, grid lines, committed lines
fn add_rendering_plugins(app: &mut App) {
    app.add_plugins((CameraPlugin, GridRenderPlugin, LineRenderPlugin));
}

/// Plugins for editing: cursor tracking, pen tool, selection shortcuts
fn add_editor_plugins(app: &mut App) {
    app.add_plugins((CursorPlugin, PenPlugin, SelectionPlugin));
}

/// Plugins for the sidebar and the export overlay
fn add_ui_plugins(app: &mut App) {
    app.add_plugins((UiInteractionPlugin, SidebarPlugin, ExportPanePlugin));
}

/// Quits on Ctrl+Q (Escape is taken by the pen tool)
fn exit_on_ctrl_q(keyboard: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    let ctrl =
        keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if ctrl && keyboard.just_pressed(KeyCode::KeyQ) {
        exit.write(AppExit::Success);
    }
}
