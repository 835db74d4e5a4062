//! Session module: Command model and navigation over two file windows.
//!
//! This module contains:
//! - [`Command`], [`StepSize`], [`Direction`], [`Panes`]: the movement
//!   command model (step size, direction, and target panes are three
//!   independent facets)
//! - [`Navigator`]: owner of both file windows and the diff mask,
//!   interpreter of commands
//! - [`Renderer`]: the seam to the presentation layer

mod command;
mod navigator;

pub use command::{Command, Direction, Panes, StepSize};
pub use navigator::{Navigator, Renderer};
