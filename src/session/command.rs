//! Movement command model.
//!
//! A movement has three independent facets: how far ([`StepSize`]), which
//! way ([`Direction`]), and which panes it applies to ([`Panes`]). The
//! pane set is a bitflag so "both" is simply the union of top and bottom.

use crate::view::{BYTES_PER_LINE, PAGE_STEP};
use bitflags::bitflags;

/// Navigation granularity of one movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepSize {
    /// One byte.
    Byte,
    /// One display line.
    Line,
    /// One page (a full window minus one line of overlap).
    Page,
}

impl StepSize {
    /// Unsigned magnitude of this step in bytes.
    #[inline]
    pub const fn bytes(self) -> usize {
        match self {
            Self::Byte => 1,
            Self::Line => BYTES_PER_LINE,
            Self::Page => PAGE_STEP,
        }
    }
}

/// Direction of one movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the end of the files.
    Forward,
    /// Toward the start of the files.
    Backward,
}

bitflags! {
    /// Which pane(s) a movement targets.
    ///
    /// Targeting a single pane "freezes" the other one in place, letting
    /// the user re-align the two files at different offsets.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Panes: u8 {
        /// The top file pane.
        const TOP = 0b01;
        /// The bottom file pane.
        const BOTTOM = 0b10;
        /// Both panes (synchronized navigation, the default).
        const BOTH = Self::TOP.bits() | Self::BOTTOM.bits();
    }
}

/// One command issued against the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the targeted pane(s) by one step.
    Move {
        /// How far to move.
        step: StepSize,
        /// Which way to move.
        direction: Direction,
        /// Which pane(s) to move.
        panes: Panes,
    },
    /// Page both panes forward until the windows differ or both files
    /// are exhausted.
    NextDiff,
    /// Recompute and redraw without moving (e.g. after a terminal
    /// resize).
    Redraw,
    /// End the session.
    Quit,
}

impl Command {
    /// Convenience constructor for a movement command.
    pub const fn movement(step: StepSize, direction: Direction, panes: Panes) -> Self {
        Self::Move {
            step,
            direction,
            panes,
        }
    }

    /// The signed byte delta of a movement, `None` for other commands.
    pub const fn delta(self) -> Option<i64> {
        match self {
            Self::Move {
                step, direction, ..
            } => {
                let magnitude = step.bytes() as i64;
                Some(match direction {
                    Direction::Forward => magnitude,
                    Direction::Backward => -magnitude,
                })
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::CAPACITY;

    #[test]
    fn test_step_sizes() {
        assert_eq!(StepSize::Byte.bytes(), 1);
        assert_eq!(StepSize::Line.bytes(), BYTES_PER_LINE);
        assert_eq!(StepSize::Page.bytes(), CAPACITY - BYTES_PER_LINE);
    }

    #[test]
    fn test_panes_union() {
        assert_eq!(Panes::TOP | Panes::BOTTOM, Panes::BOTH);
        assert!(Panes::BOTH.contains(Panes::TOP));
        assert!(Panes::BOTH.contains(Panes::BOTTOM));
        assert!(!Panes::TOP.contains(Panes::BOTTOM));
    }

    #[test]
    fn test_signed_delta() {
        let fwd = Command::movement(StepSize::Line, Direction::Forward, Panes::BOTH);
        let back = Command::movement(StepSize::Page, Direction::Backward, Panes::TOP);
        assert_eq!(fwd.delta(), Some(16));
        assert_eq!(back.delta(), Some(-128));
        assert_eq!(Command::NextDiff.delta(), None);
        assert_eq!(Command::Quit.delta(), None);
    }
}
