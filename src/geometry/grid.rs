//! The snapping grid
//!
//! The grid is a square lattice with a fixed cell size in world units. Cursor
//! positions are rounded to the nearest lattice point; the rest of the editor
//! works in integer cell coordinates, so every stored point is on the grid by
//! construction.

use bevy::prelude::*;

/// Default size of a grid cell in world units
pub const DEFAULT_CELL_SIZE: f32 = 20.0;

/// The snapping grid used by the whole editor
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    /// Size of one grid cell in world units
    pub cell_size: f32,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

impl Grid {
    pub fn new(cell_size: f32) -> Self {
        Self { cell_size }
    }

    /// Rounds a world position to the nearest lattice point, in cell
    /// coordinates
    pub fn world_to_cell(&self, pos: Vec2) -> IVec2 {
        IVec2::new(
            (pos.x / self.cell_size).round() as i32,
            (pos.y / self.cell_size).round() as i32,
        )
    }

    /// Converts a lattice point back to world coordinates
    pub fn cell_to_world(&self, cell: IVec2) -> Vec2 {
        cell.as_vec2() * self.cell_size
    }

    /// Snaps a world position to the nearest lattice point, in world
    /// coordinates
    pub fn snap(&self, pos: Vec2) -> Vec2 {
        self.cell_to_world(self.world_to_cell(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snaps_to_nearest_cell() {
        let grid = Grid::new(20.0);
        assert_eq!(grid.world_to_cell(Vec2::new(9.9, 10.1)), IVec2::new(0, 1));
        assert_eq!(grid.world_to_cell(Vec2::new(31.0, 49.0)), IVec2::new(2, 2));
        assert_eq!(grid.snap(Vec2::new(31.0, 49.0)), Vec2::new(40.0, 40.0));
    }

    #[test]
    fn snaps_negative_coordinates() {
        let grid = Grid::new(20.0);
        assert_eq!(
            grid.world_to_cell(Vec2::new(-9.9, -10.1)),
            IVec2::new(0, -1)
        );
        assert_eq!(grid.snap(Vec2::new(-25.0, -55.0)), Vec2::new(-20.0, -60.0));
    }

    #[test]
    fn cell_to_world_inverts_lattice_points() {
        let grid = Grid::new(16.0);
        for cell in [IVec2::ZERO, IVec2::new(3, -7), IVec2::new(-100, 42)] {
            assert_eq!(grid.world_to_cell(grid.cell_to_world(cell)), cell);
        }
    }

    #[test]
    fn lattice_points_are_fixed_by_snap() {
        let grid = Grid::new(20.0);
        let p = Vec2::new(60.0, -80.0);
        assert_eq!(grid.snap(p), p);
    }
}
