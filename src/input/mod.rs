//! Input module: keyboard event capture and translation.
//!
//! This module contains:
//! - [`InputEvent`], [`Key`], [`KeyCode`]: the event protocol between the
//!   input thread and the main loop
//! - [`InputActor`]: dedicated thread polling crossterm events
//! - [`keymap`]: key event to [`Command`](crate::session::Command)
//!   translation

mod actor;
mod event;
pub mod keymap;

pub use actor::InputActor;
pub use event::{InputEvent, Key, KeyCode};
