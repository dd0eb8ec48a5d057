use bevy::prelude::*;

// Window Configuration
pub const WINDOW_TITLE: &str = "Gridpen";
pub const WINDOW_WIDTH: f32 = 1024.0;
pub const WINDOW_HEIGHT: f32 = 768.0;

// Canvas Colors
pub const BACKGROUND_COLOR: Color = Color::srgb(0.97, 0.97, 0.97);
pub const GRID_LINE_COLOR: Color = Color::srgba(0.5, 0.5, 0.5, 0.2);
pub const GRID_MAJOR_LINE_COLOR: Color = Color::srgba(0.5, 0.5, 0.5, 0.45);

// Line Drawing
pub const LINE_COLOR: Color = Color::srgb(0.15, 0.35, 0.85);
pub const ACTIVE_LINE_COLOR: Color = Color::srgb(0.15, 0.35, 0.85);
pub const PREVIEW_LINE_COLOR: Color = Color::srgba(0.15, 0.35, 0.85, 0.4);
pub const SELECTED_LINE_COLOR: Color = Color::srgb(1.0, 0.55, 0.1);

// Point Rendering
pub const POINT_RADIUS: f32 = 4.0;
pub const POINT_COLOR: Color = Color::srgb(0.1, 0.25, 0.6);
pub const ACTIVE_POINT_RADIUS: f32 = 4.0;
pub const ACTIVE_POINT_COLOR: Color = Color::srgb(0.1, 0.25, 0.6);
pub const SELECTED_POINT_RADIUS: f32 = 6.0;
pub const SELECTED_POINT_COLOR: Color = Color::srgb(1.0, 0.8, 0.0);
pub const MOVING_POINT_COLOR: Color = Color::srgb(0.2, 0.85, 0.3);

// Snap Marker
pub const SNAP_MARKER_RADIUS: f32 = 5.0;
pub const SNAP_MARKER_COLOR: Color = Color::srgb(0.9, 0.15, 0.15);

// Sidebar Visual Style
pub const SIDEBAR_WIDTH: f32 = 220.0;
pub const SIDEBAR_BACKGROUND_COLOR: Color = Color::srgba(0.12, 0.12, 0.12, 1.0);
pub const SIDEBAR_PADDING: f32 = 12.0;
pub const SIDEBAR_ROW_GAP: f32 = 6.0;

// Text
pub const TITLE_FONT_SIZE: f32 = 18.0;
pub const LIST_FONT_SIZE: f32 = 14.0;
pub const EXPORT_TEXT_FONT_SIZE: f32 = 13.0;
pub const TEXT_COLOR: Color = Color::srgb(0.9, 0.9, 0.9);
pub const MUTED_TEXT_COLOR: Color = Color::srgb(0.6, 0.6, 0.6);

// Button Colors
pub const NORMAL_BUTTON: Color = Color::srgb(0.2, 0.2, 0.2);
pub const HOVERED_BUTTON: Color = Color::srgb(0.3, 0.3, 0.3);
pub const PRESSED_BUTTON: Color = Color::srgb(1.0, 0.4, 0.0);
pub const SELECTED_ENTRY_COLOR: Color = Color::srgb(0.45, 0.25, 0.05);
pub const BUTTON_BORDER_COLOR: Color = Color::srgb(0.5, 0.5, 0.5);

// Export Overlay
pub const OVERLAY_WIDTH: f32 = 420.0;
pub const OVERLAY_BACKGROUND_COLOR: Color = Color::srgba(0.1, 0.1, 0.1, 0.97);
pub const OVERLAY_MARGIN: f32 = 24.0;
