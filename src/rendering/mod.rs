//! Canvas rendering: camera, grid lines, committed lines

pub mod cameras;
pub mod grid;
pub mod lines;
