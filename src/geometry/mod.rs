//! Grid and polyline primitives
//!
//! Everything the editor draws lives on an integer lattice: points are stored
//! in cell coordinates and only converted to world coordinates at the input
//! and rendering edges.

pub mod grid;
pub mod polyline;

pub use grid::Grid;
pub use polyline::Polyline;
