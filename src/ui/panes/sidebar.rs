//! The sidebar pane
//!
//! Lists the committed lines and the points of the selected (or in-progress)
//! line, and hosts the export buttons. Entries are buttons: clicking a line
//! selects it, clicking a point selects the point within the selected line.
//! Both lists are rebuilt whenever the document or the selection changes.

use bevy::prelude::*;

use crate::core::cli::CliArgs;
use crate::editing::{Document, Selection};
use crate::export::{self, svg::write_svg_file};
use crate::geometry::Grid;
use crate::ui::export_pane::{ExportOutput, ExportReport};
use crate::ui::theme::*;

/// Component marker for the sidebar root
#[derive(Component)]
pub struct SidebarPane;

/// Component marker for the container holding line entries
#[derive(Component)]
pub struct LineListContainer;

/// Component marker for the container holding point entries
#[derive(Component)]
pub struct PointListContainer;

/// A clickable entry in the line list
#[derive(Component)]
pub struct LineListEntry(pub usize);

/// A clickable entry in the point list
#[derive(Component)]
pub struct PointListEntry(pub usize);

/// Component marker for the plotter export button
#[derive(Component)]
pub struct ExportPlotButton;

/// Component marker for the SVG export button
#[derive(Component)]
pub struct ExportSvgButton;

/// Marker for buttons that get generic hover feedback
#[derive(Component)]
pub struct ActionButton;

/// Plugin that adds the sidebar pane functionality
pub struct SidebarPlugin;

impl Plugin for SidebarPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_sidebar).add_systems(
            Update,
            (
                update_line_list,
                update_point_list,
                handle_line_entry_clicks,
                handle_point_entry_clicks,
                handle_export_buttons,
                action_button_feedback,
            ),
        );
    }
}

fn spawn_sidebar(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                width: Val::Px(SIDEBAR_WIDTH),
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(SIDEBAR_PADDING)),
                row_gap: Val::Px(SIDEBAR_ROW_GAP),
                ..default()
            },
            BackgroundColor(SIDEBAR_BACKGROUND_COLOR),
            // Tracks hover so canvas tools can ignore clicks on the pane.
            Interaction::default(),
            SidebarPane,
        ))
        .with_children(|parent| {
            spawn_section_title(parent, "Lines");
            parent.spawn((
                Node {
                    flex_direction: FlexDirection::Column,
                    row_gap: Val::Px(2.0),
                    ..default()
                },
                LineListContainer,
            ));

            spawn_section_title(parent, "Points");
            parent.spawn((
                Node {
                    flex_direction: FlexDirection::Column,
                    row_gap: Val::Px(2.0),
                    ..default()
                },
                PointListContainer,
            ));

            spawn_action_button(parent, "Export plot", ExportPlotButton);
            spawn_action_button(parent, "Export SVG", ExportSvgButton);
        });
}

fn spawn_section_title(parent: &mut ChildSpawnerCommands, title: &str) {
    parent.spawn((
        Text::new(title),
        TextFont {
            font_size: TITLE_FONT_SIZE,
            ..default()
        },
        TextColor(TEXT_COLOR),
    ));
}

fn spawn_action_button(parent: &mut ChildSpawnerCommands, label: &str, marker: impl Component) {
    parent
        .spawn((
            Button,
            marker,
            ActionButton,
            Node {
                padding: UiRect::all(Val::Px(8.0)),
                border: UiRect::all(Val::Px(1.0)),
                justify_content: JustifyContent::Center,
                ..default()
            },
            BackgroundColor(NORMAL_BUTTON),
            BorderColor(BUTTON_BORDER_COLOR),
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(label),
                TextFont {
                    font_size: LIST_FONT_SIZE,
                    ..default()
                },
                TextColor(TEXT_COLOR),
            ));
        });
}

/// Rebuilds the line list when the document or selection changes
fn update_line_list(
    mut commands: Commands,
    document: Res<Document>,
    selection: Res<Selection>,
    container_q: Query<Entity, With<LineListContainer>>,
) {
    if !document.is_changed() && !selection.is_changed() {
        return;
    }
    let Ok(container) = container_q.single() else {
        return;
    };
    commands.entity(container).despawn_related::<Children>();
    commands.entity(container).with_children(|parent| {
        for (index, line) in document.lines.iter().enumerate() {
            let selected = selection.line == Some(index);
            spawn_list_entry(
                parent,
                format!("Line {}: {} points", index + 1, line.len()),
                selected,
                LineListEntry(index),
            );
        }
        if !document.active.is_empty() {
            parent.spawn((
                Text::new(format!("drawing: {} points", document.active.len())),
                TextFont {
                    font_size: LIST_FONT_SIZE,
                    ..default()
                },
                TextColor(MUTED_TEXT_COLOR),
            ));
        }
    });
}

/// Rebuilds the point list for the selected line, or the line being drawn
fn update_point_list(
    mut commands: Commands,
    document: Res<Document>,
    selection: Res<Selection>,
    container_q: Query<Entity, With<PointListContainer>>,
) {
    if !document.is_changed() && !selection.is_changed() {
        return;
    }
    let Ok(container) = container_q.single() else {
        return;
    };

    let points = match selection.line {
        Some(index) => document.line(index).map(|line| line.points()),
        None => Some(document.active.points()),
    }
    .unwrap_or(&[]);

    commands.entity(container).despawn_related::<Children>();
    commands.entity(container).with_children(|parent| {
        for (index, point) in points.iter().enumerate() {
            let selected = selection.line.is_some() && selection.point == Some(index);
            spawn_list_entry(
                parent,
                format!("({}, {})", point.x, point.y),
                selected,
                PointListEntry(index),
            );
        }
    });
}

fn spawn_list_entry(
    parent: &mut ChildSpawnerCommands,
    label: String,
    selected: bool,
    marker: impl Component,
) {
    let background = if selected {
        SELECTED_ENTRY_COLOR
    } else {
        NORMAL_BUTTON
    };
    parent
        .spawn((
            Button,
            marker,
            Node {
                padding: UiRect::axes(Val::Px(6.0), Val::Px(3.0)),
                ..default()
            },
            BackgroundColor(background),
        ))
        .with_children(|entry| {
            entry.spawn((
                Text::new(label),
                TextFont {
                    font_size: LIST_FONT_SIZE,
                    ..default()
                },
                TextColor(TEXT_COLOR),
            ));
        });
}

fn handle_line_entry_clicks(
    interactions: Query<(&Interaction, &LineListEntry), Changed<Interaction>>,
    mut selection: ResMut<Selection>,
) {
    for (interaction, entry) in &interactions {
        if *interaction == Interaction::Pressed {
            selection.select_line(entry.0);
            info!("Selected line {}", entry.0 + 1);
        }
    }
}

fn handle_point_entry_clicks(
    interactions: Query<(&Interaction, &PointListEntry), Changed<Interaction>>,
    mut selection: ResMut<Selection>,
    document: Res<Document>,
) {
    for (interaction, entry) in &interactions {
        if *interaction != Interaction::Pressed {
            continue;
        }
        let Some(line) = selection.line else {
            // Points of the in-progress line are display only.
            continue;
        };
        selection.select_point(entry.0);
        if let Some(point) = document.point(line, entry.0) {
            info!("Selected point {:?}", point);
        }
    }
}

/// Runs the exports when their buttons are pressed
fn handle_export_buttons(
    plot_clicks: Query<&Interaction, (Changed<Interaction>, With<ExportPlotButton>)>,
    svg_clicks: Query<&Interaction, (Changed<Interaction>, With<ExportSvgButton>)>,
    document: Res<Document>,
    grid: Res<Grid>,
    cli_args: Res<CliArgs>,
    mut output: ResMut<ExportOutput>,
) {
    if plot_clicks.iter().any(|i| *i == Interaction::Pressed) {
        let commands = export::plot_commands(&document.lines);
        let text = export::format_commands(&commands);
        match export::write_text_file(&cli_args.plot_out, &text) {
            Ok(()) => info!(
                "Exported {} plotter commands to {}",
                commands.len(),
                cli_args.plot_out.display()
            ),
            Err(err) => error!("Plot export failed: {:#}", err),
        }
        output.report = Some(ExportReport {
            text,
            path: cli_args.plot_out.clone(),
        });
    }

    if svg_clicks.iter().any(|i| *i == Interaction::Pressed) {
        match write_svg_file(&cli_args.svg_out, &document.lines, grid.cell_size) {
            Ok(()) => info!("Exported SVG to {}", cli_args.svg_out.display()),
            Err(err) => error!("SVG export failed: {:#}", err),
        }
    }
}

/// Hover and press feedback for the action buttons
fn action_button_feedback(
    mut buttons: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<ActionButton>),
    >,
) {
    for (interaction, mut background) in &mut buttons {
        *background = match interaction {
            Interaction::Pressed => PRESSED_BUTTON.into(),
            Interaction::Hovered => HOVERED_BUTTON.into(),
            Interaction::None => NORMAL_BUTTON.into(),
        };
    }
}
