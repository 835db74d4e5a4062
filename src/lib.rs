//! # Bindelta
//!
//! A side-by-side binary diff viewer for the terminal.
//!
//! Bindelta shows two files in hex and ASCII, one pane above the other,
//! with every differing byte highlighted. Both panes scroll together by
//! byte, line, or page, or independently so the files can be compared at
//! different offsets.
//!
//! ## Core Concepts
//!
//! - **File windows**: each pane is a fixed 144-byte window onto its
//!   file, re-read in full after every move
//! - **Difference mask**: per-position flags recomputed from scratch on
//!   every change; bytes present in only one window always count as
//!   differing
//! - **Navigator**: single owner of both windows and the mask; every
//!   command runs move → recompute → boundary-correct → redraw
//! - **Offset-aligned comparison only**: there is no content alignment
//!   or LCS search, "next difference" is a page-by-page scan
//!
//! ## Example
//!
//! ```rust,ignore
//! use bindelta::{Command, Navigator};
//!
//! let mut navigator = Navigator::open("a.bin", "b.bin")?;
//! navigator.handle(Command::NextDiff, &mut renderer)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod input;
pub mod render;
pub mod session;
pub mod view;

// Re-exports for convenience
pub use error::Error;
pub use input::{InputActor, InputEvent, Key, KeyCode};
pub use render::{OutputBuffer, Screen, Style};
pub use session::{Command, Direction, Navigator, Panes, Renderer, StepSize};
pub use view::{DiffMask, DiffOutcome, FileView, BYTES_PER_LINE, CAPACITY, LINES_PER_SCREEN};
