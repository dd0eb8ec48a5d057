//! A grid-snapped line editor made with the Bevy game engine.
//!
//! Click to place points on the grid, chain them into polylines, edit them
//! from the sidebar, and export the drawing as pen-plotter commands for the
//! KuMir Drafter («Чертёжник») executor or as an SVG image.

pub mod core;
pub mod editing;
pub mod export;
pub mod geometry;
pub mod rendering;
pub mod systems;
pub mod tools;
pub mod ui;
