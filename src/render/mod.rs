//! Render module: terminal presentation of the comparison session.
//!
//! This module contains:
//! - [`hex`]: pure hex/ASCII line formatting and column geometry
//! - [`OutputBuffer`]: pre-allocated ANSI output flushed in one write
//! - [`Style`]: the fixed color palette
//! - [`Screen`]: the crossterm screen session implementing
//!   [`Renderer`](crate::session::Renderer)
//!
//! Nothing in here owns session state; the screen is handed read-only
//! windows and the mask on every redraw.

pub mod hex;
mod output;
mod screen;

pub use output::{OutputBuffer, Style};
pub use screen::Screen;
