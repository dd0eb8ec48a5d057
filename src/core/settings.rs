// Settings ///////////////////////////////////////////////////////////////////
// Non-visual tunables for the editor.

// Nudge Settings /////////////////////////////////////////////////////////////

/// How many cells an arrow-key nudge moves the selected point
pub const NUDGE_CELLS: i32 = 1;
/// Nudge step with shift held
pub const SHIFT_NUDGE_CELLS: i32 = 5;

// Camera Zoom Settings ///////////////////////////////////////////////////////

/// Minimum allowed camera scale (maximum zoom in)
pub const MIN_ALLOWED_ZOOM_SCALE: f32 = 0.1;
/// Maximum allowed camera scale (maximum zoom out)
pub const MAX_ALLOWED_ZOOM_SCALE: f32 = 10.0;

// Grid Rendering /////////////////////////////////////////////////////////////

/// Stop drawing grid lines once more than this many would be visible
pub const MAX_VISIBLE_GRID_LINES: usize = 256;
/// Every n-th grid line is drawn stronger
pub const MAJOR_GRID_LINE_EVERY: i32 = 5;
