//! Pen-plotter command export
//!
//! The drawing is flattened into the command set of the KuMir Drafter
//! («Чертёжник») teaching executor: relative pen movements plus pen up/down.
//! The pen is assumed to start on the first drawn point, so the first emitted
//! command is always a zero move. Displacements are in whole cells; points
//! are lattice points, so no rounding is involved.

use std::fmt;

use bevy::math::IVec2;

use crate::geometry::Polyline;

/// One plotter instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PenCommand {
    /// Move the pen by a vector, in cells
    MoveBy(IVec2),
    /// Lower the pen so subsequent moves draw
    PenDown,
    /// Raise the pen
    PenUp,
}

impl fmt::Display for PenCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PenCommand::MoveBy(v) => {
                write!(f, "сместиться на вектор ({}, {})", v.x, v.y)
            }
            PenCommand::PenDown => write!(f, "опустить перо"),
            PenCommand::PenUp => write!(f, "поднять перо"),
        }
    }
}

/// Flattens the committed lines into plotter commands.
///
/// The pen position is accumulated in cell units: each point becomes one
/// relative move, the pen drops after the first move of each line and lifts
/// after the line's last point. Empty lines are skipped.
pub fn plot_commands(lines: &[Polyline]) -> Vec<PenCommand> {
    let mut commands = Vec::new();

    // The pen's origin is the first point of the drawing.
    let Some(origin) = lines.iter().find_map(|line| line.first()) else {
        return commands;
    };
    let mut pen = origin;

    for line in lines {
        let mut pen_down = false;
        for &point in line.points() {
            commands.push(PenCommand::MoveBy(point - pen));
            pen = point;
            if !pen_down {
                commands.push(PenCommand::PenDown);
                pen_down = true;
            }
        }
        if pen_down {
            commands.push(PenCommand::PenUp);
        }
    }
    commands
}

/// Renders commands as the text the user copies into KuMir
pub fn format_commands(commands: &[PenCommand]) -> String {
    commands
        .iter()
        .map(PenCommand::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(points: &[(i32, i32)]) -> Polyline {
        Polyline::from_points(points.iter().map(|&(x, y)| IVec2::new(x, y)).collect())
    }

    #[test]
    fn empty_drawing_exports_nothing() {
        assert!(plot_commands(&[]).is_empty());
        assert_eq!(format_commands(&[]), "");
    }

    #[test]
    fn single_line_starts_with_zero_move() {
        let lines = [line(&[(0, 0), (2, 0), (2, 2)])];
        assert_eq!(
            plot_commands(&lines),
            vec![
                PenCommand::MoveBy(IVec2::new(0, 0)),
                PenCommand::PenDown,
                PenCommand::MoveBy(IVec2::new(2, 0)),
                PenCommand::MoveBy(IVec2::new(0, 2)),
                PenCommand::PenUp,
            ]
        );
    }

    #[test]
    fn origin_is_the_first_drawn_point() {
        // A drawing nowhere near the grid origin still starts with a zero
        // move: the pen is assumed to sit on the first point.
        let lines = [line(&[(7, -4), (8, -4)])];
        assert_eq!(
            plot_commands(&lines)[0],
            PenCommand::MoveBy(IVec2::new(0, 0))
        );
    }

    #[test]
    fn pen_travels_between_lines_raised() {
        let lines = [line(&[(0, 0), (1, 0)]), line(&[(5, 5), (5, 6)])];
        assert_eq!(
            plot_commands(&lines),
            vec![
                PenCommand::MoveBy(IVec2::new(0, 0)),
                PenCommand::PenDown,
                PenCommand::MoveBy(IVec2::new(1, 0)),
                PenCommand::PenUp,
                PenCommand::MoveBy(IVec2::new(4, 5)),
                PenCommand::PenDown,
                PenCommand::MoveBy(IVec2::new(0, 1)),
                PenCommand::PenUp,
            ]
        );
    }

    #[test]
    fn single_point_line_draws_a_dot() {
        let lines = [line(&[(3, 3)])];
        assert_eq!(
            plot_commands(&lines),
            vec![
                PenCommand::MoveBy(IVec2::new(0, 0)),
                PenCommand::PenDown,
                PenCommand::PenUp,
            ]
        );
    }

    #[test]
    fn empty_lines_are_skipped() {
        let lines = [line(&[]), line(&[(1, 1), (2, 1)]), line(&[])];
        let commands = plot_commands(&lines);
        // No stray pen up/down from the empty lines.
        assert_eq!(
            commands,
            vec![
                PenCommand::MoveBy(IVec2::new(0, 0)),
                PenCommand::PenDown,
                PenCommand::MoveBy(IVec2::new(1, 0)),
                PenCommand::PenUp,
            ]
        );
    }

    #[test]
    fn display_matches_drafter_dialect() {
        assert_eq!(
            PenCommand::MoveBy(IVec2::new(1, -2)).to_string(),
            "сместиться на вектор (1, -2)"
        );
        assert_eq!(PenCommand::PenDown.to_string(), "опустить перо");
        assert_eq!(PenCommand::PenUp.to_string(), "поднять перо");
    }

    #[test]
    fn format_joins_with_newlines() {
        let lines = [line(&[(0, 0), (1, 2)])];
        let text = format_commands(&plot_commands(&lines));
        assert_eq!(
            text,
            "сместиться на вектор (0, 0)\n\
             опустить перо\n\
             сместиться на вектор (1, 2)\n\
             поднять перо"
        );
    }
}
