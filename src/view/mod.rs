//! View module: Core state for the dual-buffer comparison model.
//!
//! This module contains:
//! - [`FileView`]: A fixed-capacity read window onto one file
//! - [`DiffMask`]: Per-byte difference flags between two windows
//! - [`DiffOutcome`]: Diff count, or the both-windows-exhausted sentinel
//!
//! Both windows share the same geometry: [`LINES_PER_SCREEN`] rows of
//! [`BYTES_PER_LINE`] bytes, backed by one flat [`CAPACITY`]-byte buffer.

mod diff;
mod file_view;

pub use diff::{DiffMask, DiffOutcome};
pub use file_view::FileView;

/// Number of hex lines displayed per file pane.
pub const LINES_PER_SCREEN: usize = 9;

/// Number of bytes displayed per hex line.
pub const BYTES_PER_LINE: usize = 16;

/// Total window capacity in bytes (one pane's worth of data).
pub const CAPACITY: usize = LINES_PER_SCREEN * BYTES_PER_LINE;

/// Number of bytes moved by a one-page step.
///
/// A page overlaps the previous window by one line so that context is
/// preserved while scrolling.
pub const PAGE_STEP: usize = CAPACITY - BYTES_PER_LINE;

/// Row of a flat buffer position.
#[inline]
pub const fn row_of(index: usize) -> usize {
    index / BYTES_PER_LINE
}

/// Column of a flat buffer position.
#[inline]
pub const fn col_of(index: usize) -> usize {
    index % BYTES_PER_LINE
}
