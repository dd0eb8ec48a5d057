//! The drawing document
//!
//! A document is a list of committed polylines plus the active line the user
//! is currently placing points into. All mutation goes through the methods
//! here so out-of-range indices are ignored instead of panicking.

use bevy::prelude::*;

use crate::geometry::Polyline;

/// All lines in the drawing
#[derive(Resource, Debug, Clone, Default)]
pub struct Document {
    /// Committed lines, in the order they were finished
    pub lines: Vec<Polyline>,
    /// The line currently being drawn
    pub active: Polyline,
}

impl Document {
    /// Appends a point to the active line, starting it if necessary
    pub fn start_or_extend(&mut self, cell: IVec2) {
        self.active.push(cell);
    }

    /// Commits the active line to the document. Returns false when the
    /// active line is empty, in which case nothing happens.
    pub fn commit_active(&mut self) -> bool {
        if self.active.is_empty() {
            return false;
        }
        let points = self.active.take_points();
        self.lines.push(Polyline::from_points(points));
        true
    }

    pub fn line(&self, index: usize) -> Option<&Polyline> {
        self.lines.get(index)
    }

    /// Removes a point from a committed line. Returns false when either
    /// index is out of range.
    pub fn delete_point(&mut self, line: usize, point: usize) -> bool {
        match self.lines.get_mut(line) {
            Some(polyline) => polyline.remove(point).is_some(),
            None => false,
        }
    }

    /// Moves a point of a committed line to a new lattice position
    pub fn move_point(&mut self, line: usize, point: usize, cell: IVec2) -> bool {
        match self.lines.get_mut(line) {
            Some(polyline) => polyline.move_point(point, cell),
            None => false,
        }
    }

    pub fn point(&self, line: usize, point: usize) -> Option<IVec2> {
        self.lines.get(line)?.points().get(point).copied()
    }

    /// True when there are no committed lines and nothing is being drawn
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_moves_active_into_lines() {
        let mut doc = Document::default();
        doc.start_or_extend(IVec2::new(0, 0));
        doc.start_or_extend(IVec2::new(1, 0));
        assert!(doc.commit_active());

        assert_eq!(doc.lines.len(), 1);
        assert!(doc.active.is_empty());
        assert_eq!(doc.lines[0].points(), &[IVec2::new(0, 0), IVec2::new(1, 0)]);
    }

    #[test]
    fn commit_empty_active_is_a_no_op() {
        let mut doc = Document::default();
        assert!(!doc.commit_active());
        assert!(doc.lines.is_empty());
    }

    #[test]
    fn single_point_line_commits() {
        let mut doc = Document::default();
        doc.start_or_extend(IVec2::new(3, 4));
        assert!(doc.commit_active());
        assert_eq!(doc.lines[0].len(), 1);
    }

    #[test]
    fn delete_point_leaves_empty_line_in_list() {
        let mut doc = Document::default();
        doc.start_or_extend(IVec2::ZERO);
        doc.commit_active();

        assert!(doc.delete_point(0, 0));
        assert_eq!(doc.lines.len(), 1);
        assert!(doc.lines[0].is_empty());
    }

    #[test]
    fn delete_and_move_reject_bad_indices() {
        let mut doc = Document::default();
        doc.start_or_extend(IVec2::ZERO);
        doc.commit_active();

        assert!(!doc.delete_point(1, 0));
        assert!(!doc.delete_point(0, 1));
        assert!(!doc.move_point(0, 1, IVec2::ONE));
        assert!(!doc.move_point(2, 0, IVec2::ONE));
    }

    #[test]
    fn move_point_updates_committed_line() {
        let mut doc = Document::default();
        doc.start_or_extend(IVec2::ZERO);
        doc.start_or_extend(IVec2::new(1, 1));
        doc.commit_active();

        assert!(doc.move_point(0, 1, IVec2::new(5, -3)));
        assert_eq!(doc.point(0, 1), Some(IVec2::new(5, -3)));
    }
}
