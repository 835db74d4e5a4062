//! Navigator: interprets movement commands over the two file windows.
//!
//! The navigator is the only owner of mutable session state: both
//! [`FileView`]s and the [`DiffMask`]. Every command runs the same
//! procedure — move, recompute, correct bounds, redraw — with no
//! persistent mode between commands.

use super::command::{Command, Direction, Panes};
use crate::error::Error;
use crate::view::{DiffMask, DiffOutcome, FileView, CAPACITY, PAGE_STEP};
use log::debug;
use std::io;
use std::path::Path;

/// Presentation seam: redraws the screen from the current session state.
///
/// Implementations must not block indefinitely and must not mutate
/// session state; they receive read-only views and the freshly computed
/// mask after every successful command.
pub trait Renderer {
    /// Redraw using the current windows and difference mask.
    fn draw(&mut self, top: &FileView, bottom: &FileView, mask: &DiffMask) -> io::Result<()>;
}

/// Owner and interpreter of the comparison session.
///
/// Holds the two file windows and the difference mask for the session's
/// lifetime. All mutation happens on the single control path through
/// [`handle`](Self::handle); nothing here needs locking unless the whole
/// navigator is shared across threads.
pub struct Navigator {
    /// Window onto the first (top pane) file.
    top: FileView,
    /// Window onto the second (bottom pane) file.
    bottom: FileView,
    /// Difference mask over the current pair of windows.
    mask: DiffMask,
}

impl Navigator {
    /// Open both files and compute the initial difference mask.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Open`] if either file cannot be opened. Failure
    /// is fatal for the session; there is no partially opened state.
    pub fn open(path_top: impl AsRef<Path>, path_bottom: impl AsRef<Path>) -> Result<Self, Error> {
        let top = FileView::open(path_top)?;
        let bottom = FileView::open(path_bottom)?;
        let mut mask = DiffMask::new();
        mask.compute(&top, &bottom);
        Ok(Self { top, bottom, mask })
    }

    /// The top pane's window.
    #[inline]
    pub const fn top(&self) -> &FileView {
        &self.top
    }

    /// The bottom pane's window.
    #[inline]
    pub const fn bottom(&self) -> &FileView {
        &self.bottom
    }

    /// The current difference mask.
    #[inline]
    pub const fn mask(&self) -> &DiffMask {
        &self.mask
    }

    /// Outcome of the most recent difference computation.
    #[inline]
    pub const fn outcome(&self) -> DiffOutcome {
        self.mask.outcome()
    }

    /// Apply one command, recompute differences, and redraw.
    ///
    /// After any movement the mask is recomputed in full, and while both
    /// windows come back empty the views are stepped backward one page at
    /// a time so the visible window never strands past the end of both
    /// files. [`Command::Quit`] is a no-op here; ending the loop is the
    /// caller's decision.
    ///
    /// # Errors
    ///
    /// Propagates only renderer I/O errors; file-level read failures
    /// degrade to empty windows inside [`FileView`].
    pub fn handle<R: Renderer>(&mut self, command: Command, renderer: &mut R) -> io::Result<()> {
        match command {
            Command::Move {
                step,
                direction,
                panes,
            } => {
                let mut delta = step.bytes() as i64;
                if direction == Direction::Backward {
                    delta = -delta;
                }
                if panes.contains(Panes::TOP) {
                    self.top.move_by(delta);
                }
                if panes.contains(Panes::BOTTOM) {
                    self.bottom.move_by(delta);
                }
            }
            Command::NextDiff => self.scan_to_next_diff(),
            Command::Redraw => {}
            Command::Quit => return Ok(()),
        }

        self.correct_bounds();
        renderer.draw(&self.top, &self.bottom, &self.mask)
    }

    /// Release both files.
    ///
    /// Equivalent to dropping the navigator; provided so callers can end
    /// the session explicitly.
    pub fn shutdown(self) {
        drop(self);
    }

    /// Page both windows forward until they differ or both files end.
    ///
    /// This is a full-page scan over offset-aligned windows, not a
    /// content-aware search: it stops at the first window pair with a
    /// nonzero diff count, or when both files are exhausted (which the
    /// subsequent boundary correction then unwinds).
    fn scan_to_next_diff(&mut self) {
        loop {
            self.top.move_by(CAPACITY as i64);
            self.bottom.move_by(CAPACITY as i64);
            match self.mask.compute(&self.top, &self.bottom) {
                DiffOutcome::Count(0) => {}
                _ => break,
            }
        }
    }

    /// Step both windows back one page at a time while both are empty.
    ///
    /// Keeps the display out of the dead zone past the end of both files.
    /// Terminates: each step strictly decreases the offsets until data
    /// reappears, and two genuinely empty files stop the loop at offset 0.
    fn correct_bounds(&mut self) {
        while self.mask.compute(&self.top, &self.bottom).is_exhausted() {
            if self.top.base_offset() == 0 && self.bottom.base_offset() == 0 {
                break;
            }
            debug!(
                "boundary correction: offsets {} / {}",
                self.top.base_offset(),
                self.bottom.base_offset()
            );
            self.top.move_by(-(PAGE_STEP as i64));
            self.bottom.move_by(-(PAGE_STEP as i64));
        }
    }
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator")
            .field("top", &self.top)
            .field("bottom", &self.bottom)
            .field("outcome", &self.outcome())
            .finish()
    }
}
