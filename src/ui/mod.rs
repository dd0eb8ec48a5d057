//! Sidebar panes, export overlay and the visual theme

pub mod export_pane;
pub mod panes;
pub mod theme;
