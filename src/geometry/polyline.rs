//! An ordered list of lattice points forming connected line segments

use bevy::prelude::*;

/// A polyline on the grid, stored in cell coordinates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Polyline {
    points: Vec<IVec2>,
}

impl Polyline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: Vec<IVec2>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[IVec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<IVec2> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<IVec2> {
        self.points.last().copied()
    }

    /// Appends a point to the end of the polyline
    pub fn push(&mut self, cell: IVec2) {
        self.points.push(cell);
    }

    /// Removes the point at `index`, returning it. Out-of-range indices are
    /// ignored.
    pub fn remove(&mut self, index: usize) -> Option<IVec2> {
        if index < self.points.len() {
            Some(self.points.remove(index))
        } else {
            None
        }
    }

    /// Moves the point at `index` to a new lattice position. Returns false
    /// for out-of-range indices.
    pub fn move_point(&mut self, index: usize, cell: IVec2) -> bool {
        match self.points.get_mut(index) {
            Some(point) => {
                *point = cell;
                true
            }
            None => false,
        }
    }

    /// Iterates over the line segments between consecutive points
    pub fn segments(&self) -> impl Iterator<Item = (IVec2, IVec2)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Empties the polyline, returning the points it held
    pub fn take_points(&mut self) -> Vec<IVec2> {
        std::mem::take(&mut self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_segments() {
        let mut line = Polyline::new();
        line.push(IVec2::new(0, 0));
        line.push(IVec2::new(2, 0));
        line.push(IVec2::new(2, 3));

        let segments: Vec<_> = line.segments().collect();
        assert_eq!(
            segments,
            vec![
                (IVec2::new(0, 0), IVec2::new(2, 0)),
                (IVec2::new(2, 0), IVec2::new(2, 3)),
            ]
        );
    }

    #[test]
    fn single_point_has_no_segments() {
        let line = Polyline::from_points(vec![IVec2::new(1, 1)]);
        assert_eq!(line.segments().count(), 0);
        assert_eq!(line.len(), 1);
    }

    #[test]
    fn remove_ignores_out_of_range() {
        let mut line = Polyline::from_points(vec![IVec2::ZERO, IVec2::ONE]);
        assert_eq!(line.remove(5), None);
        assert_eq!(line.len(), 2);
        assert_eq!(line.remove(0), Some(IVec2::ZERO));
        assert_eq!(line.points(), &[IVec2::ONE]);
    }

    #[test]
    fn move_point_bounds_checked() {
        let mut line = Polyline::from_points(vec![IVec2::ZERO]);
        assert!(line.move_point(0, IVec2::new(4, -2)));
        assert_eq!(line.points(), &[IVec2::new(4, -2)]);
        assert!(!line.move_point(1, IVec2::ZERO));
    }
}
