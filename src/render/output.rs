//! `OutputBuffer`: Single-write output buffer for ANSI sequences.

use std::io::Write;

/// The fixed screen palette.
///
/// Classic 16-color attributes rather than truecolor: the display is a
/// full-screen blue workspace with red highlights, and the named styles
/// keep every draw site honest about which one it is using.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// File pane body: white on blue.
    Pane,
    /// File name bar: black on white.
    FileName,
    /// Differing byte highlight: bold red on blue.
    Diff,
    /// Key-help bar text: white on blue.
    Help,
    /// Highlighted key names in the help bar: bold white on blue.
    HelpKey,
}

impl Style {
    /// The SGR sequence selecting this style.
    pub const fn sgr(self) -> &'static str {
        match self {
            Self::Pane | Self::Help => "\x1b[0;37;44m",
            Self::FileName => "\x1b[0;30;47m",
            Self::Diff => "\x1b[1;31;44m",
            Self::HelpKey => "\x1b[1;37;44m",
        }
    }
}

/// Pre-allocated buffer for building ANSI escape sequences.
///
/// A whole frame is accumulated here, then flushed in a single `write()`
/// syscall to prevent flicker mid-frame.
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for a full 80x25 frame (8KB).
    pub fn new() -> Self {
        Self::with_capacity(8192)
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the buffer length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write a string.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Move cursor to (x, y) position (1-indexed for ANSI).
    #[inline]
    pub fn cursor_move(&mut self, x: u16, y: u16) {
        // CSI row ; col H
        write!(self.data, "\x1b[{};{}H", y + 1, x + 1).unwrap();
    }

    /// Select a palette style.
    #[inline]
    pub fn set_style(&mut self, style: Style) {
        self.data.extend_from_slice(style.sgr().as_bytes());
    }

    /// Reset all attributes.
    #[inline]
    pub fn reset_attrs(&mut self) {
        self.data.extend_from_slice(b"\x1b[0m");
    }

    /// Clear the entire screen (with the currently selected background).
    #[inline]
    pub fn clear_screen(&mut self) {
        self.data.extend_from_slice(b"\x1b[2J");
    }

    /// Flush to a writer in a single syscall.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}
