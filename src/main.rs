//! Bindelta binary: argument parsing, session wiring, and the event loop.
//!
//! The core session (navigator, windows, mask) is fully synchronous and
//! lives on this thread; the only other thread is the input actor feeding
//! key events over a channel.

use bindelta::input::keymap;
use bindelta::{Command, Error, InputActor, InputEvent, Navigator, Screen};
use clap::error::ErrorKind;
use clap::Parser;
use crossbeam_channel::bounded;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

/// Compare two binary files side by side in hex and ASCII.
#[derive(Debug, Parser)]
#[command(name = "bindelta", version, about)]
struct Args {
    /// File shown in the top pane.
    top: PathBuf,
    /// File shown in the bottom pane.
    bottom: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();

    // Usage errors exit 1, matching the init-failure path; --help and
    // --version are not errors.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("bindelta: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    // Open both files before touching the terminal, so an open failure
    // is reported on a normal screen.
    let mut navigator = Navigator::open(&args.top, &args.bottom)?;

    let mut screen = Screen::new(display_name(&args.top), display_name(&args.bottom))?;
    let (tx, rx) = bounded::<InputEvent>(64);
    let input = InputActor::spawn(tx, Duration::from_millis(50));

    // Initial frame.
    navigator.handle(Command::Redraw, &mut screen)?;

    loop {
        match rx.recv() {
            Ok(InputEvent::Key(key)) => match keymap::command_for(key) {
                Some(Command::Quit) => break,
                Some(command) => navigator.handle(command, &mut screen)?,
                None => {}
            },
            Ok(InputEvent::Resize) => navigator.handle(Command::Redraw, &mut screen)?,
            Ok(InputEvent::Error(msg)) => log::warn!("input error: {msg}"),
            Ok(InputEvent::Shutdown) | Err(_) => break,
        }
    }

    input.join();
    navigator.shutdown();
    Ok(())
}

/// The name shown in a pane's title bar.
fn display_name(path: &Path) -> String {
    path.display().to_string()
}
