//! Screen: the crossterm screen session and frame composer.
//!
//! Owns the terminal for the session's lifetime: raw mode, alternate
//! screen, hidden cursor on entry, everything restored on drop (error
//! paths included). Each redraw composes a full frame into the
//! [`OutputBuffer`] and flushes it with one write.

use super::hex;
use super::output::{OutputBuffer, Style};
use crate::session::Renderer;
use crate::view::{DiffMask, FileView, BYTES_PER_LINE, LINES_PER_SCREEN};
use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Screen row of the top pane's file name bar.
const TOP_NAME_ROW: u16 = 0;
/// First screen row of the top hex pane.
const TOP_PANE_ROW: u16 = 1;
/// Screen row of the bottom pane's file name bar.
const BOTTOM_NAME_ROW: u16 = 11;
/// First screen row of the bottom hex pane.
const BOTTOM_PANE_ROW: u16 = 12;
/// First screen row of the key-help bar.
const HELP_ROW: u16 = 22;
/// Frame width in columns.
const SCREEN_COLS: usize = 80;

/// Key-help bar content: alternating (text, is-key-name) segments.
const HELP_LINES: [&[(&str, bool)]; 2] = [
    &[
        ("\u{2192}", true),
        (" forward 1 byte   ", false),
        ("\u{2193}", true),
        (" forward 1 line   ", false),
        ("RET", true),
        (" next difference  ", false),
        ("ALT", true),
        ("  freeze top", false),
    ],
    &[
        ("\u{2190}", true),
        (" backward 1 byte  ", false),
        ("\u{2191}", true),
        (" backward 1 line  ", false),
        ("ESC", true),
        (" quit             ", false),
        ("CTRL", true),
        (" freeze bottom", false),
    ],
];

/// Terminal screen session for the two-pane comparison display.
pub struct Screen {
    /// Output stream the frames are flushed to.
    out: io::Stdout,
    /// Reusable frame buffer.
    buf: OutputBuffer,
    /// Name shown above the top pane.
    name_top: String,
    /// Name shown above the bottom pane.
    name_bottom: String,
}

impl Screen {
    /// Take over the terminal and prepare the workspace.
    ///
    /// Enables raw mode, switches to the alternate screen, and hides the
    /// cursor. The terminal is restored when the screen is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails; nothing is left
    /// half-configured in that case.
    pub fn new(name_top: impl Into<String>, name_bottom: impl Into<String>) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        if let Err(e) = execute!(out, EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        Ok(Self {
            out,
            buf: OutputBuffer::new(),
            name_top: name_top.into(),
            name_bottom: name_bottom.into(),
        })
    }

    /// Compose one full frame into the output buffer.
    fn compose(&mut self, top: &FileView, bottom: &FileView, mask: &DiffMask) {
        self.buf.clear();
        self.buf.set_style(Style::Pane);
        self.buf.clear_screen();

        Self::draw_name_bar(&mut self.buf, TOP_NAME_ROW, &self.name_top);
        Self::draw_pane(&mut self.buf, TOP_PANE_ROW, top, mask);
        Self::draw_name_bar(&mut self.buf, BOTTOM_NAME_ROW, &self.name_bottom);
        Self::draw_pane(&mut self.buf, BOTTOM_PANE_ROW, bottom, mask);
        Self::draw_help(&mut self.buf);

        self.buf.reset_attrs();
    }

    /// Draw a full-width inverse file name bar.
    fn draw_name_bar(buf: &mut OutputBuffer, row: u16, name: &str) {
        buf.cursor_move(0, row);
        buf.set_style(Style::FileName);
        buf.write_str(name);
        for _ in name.chars().count()..SCREEN_COLS {
            buf.write_str(" ");
        }
    }

    /// Draw one pane: nine hex lines plus diff highlights.
    ///
    /// Each line is written whole in the pane style first; differing
    /// cells are then overwritten in the highlight style at the columns
    /// the formatting geometry dictates. Positions flagged past this
    /// pane's data render as highlighted blanks.
    fn draw_pane(buf: &mut OutputBuffer, first_row: u16, view: &FileView, mask: &DiffMask) {
        for row in 0..LINES_PER_SCREEN {
            #[allow(clippy::cast_possible_truncation)]
            let y = first_row + row as u16;
            let line_offset = view.base_offset() + (row * BYTES_PER_LINE) as u64;
            let bytes = view.line(row);

            buf.cursor_move(0, y);
            buf.set_style(Style::Pane);
            buf.write_str(&hex::format_line(line_offset, bytes));

            for (col, &flagged) in mask.line(row).iter().enumerate() {
                if !flagged {
                    continue;
                }
                buf.set_style(Style::Diff);
                #[allow(clippy::cast_possible_truncation)]
                buf.cursor_move(hex::hex_column(col) as u16, y);
                match bytes.get(col) {
                    Some(b) => buf.write_str(&format!("{b:02X}")),
                    None => buf.write_str("  "),
                }
                #[allow(clippy::cast_possible_truncation)]
                buf.cursor_move(hex::ascii_column(col) as u16, y);
                match bytes.get(col) {
                    Some(&b) => {
                        let mut cell = [0u8; 4];
                        buf.write_str(hex::printable(b).encode_utf8(&mut cell));
                    }
                    None => buf.write_str(" "),
                }
            }
        }
    }

    /// Draw the two-line key-help bar.
    fn draw_help(buf: &mut OutputBuffer) {
        for (i, segments) in HELP_LINES.iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            buf.cursor_move(0, HELP_ROW + i as u16);
            for &(text, is_key) in *segments {
                buf.set_style(if is_key { Style::HelpKey } else { Style::Help });
                buf.write_str(text);
            }
        }
    }
}

impl Renderer for Screen {
    fn draw(&mut self, top: &FileView, bottom: &FileView, mask: &DiffMask) -> io::Result<()> {
        self.compose(top, bottom, mask);
        self.buf.flush_to(&mut self.out)
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        let _ = self.out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    // Screen::new needs a real terminal, so these tests exercise the
    // frame composition helpers against a bare OutputBuffer instead.

    fn view_of(contents: &[u8]) -> (FileView, NamedTempFile) {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file.flush().unwrap();
        let view = FileView::open(file.path()).unwrap();
        (view, file)
    }

    #[test]
    fn test_name_bar_pads_to_full_width() {
        let mut buf = OutputBuffer::new();
        Screen::draw_name_bar(&mut buf, 0, "a.bin");

        let text = String::from_utf8(buf.as_bytes().to_vec()).unwrap();
        assert!(text.contains("a.bin"));
        let padding = text.chars().filter(|&c| c == ' ').count();
        assert_eq!(padding, SCREEN_COLS - "a.bin".len());
    }

    #[test]
    fn test_pane_emits_every_line_offset() {
        let (view, _file) = view_of(&[0u8; 300]);
        let mut buf = OutputBuffer::new();
        Screen::draw_pane(&mut buf, TOP_PANE_ROW, &view, &DiffMask::new());

        let text = String::from_utf8(buf.as_bytes().to_vec()).unwrap();
        for row in 0..LINES_PER_SCREEN {
            let field = hex::format_offset((row * BYTES_PER_LINE) as u64);
            assert!(text.contains(&field), "missing offset field {field}");
        }
    }

    #[test]
    fn test_pane_highlights_differing_cells() {
        let (a, _fa) = view_of(&[0x00; 16]);
        let (b, _fb) = view_of(&[0xFF; 16]);
        let mut mask = DiffMask::new();
        mask.compute(&a, &b);

        let mut buf = OutputBuffer::new();
        Screen::draw_pane(&mut buf, TOP_PANE_ROW, &a, &mask);

        let text = String::from_utf8(buf.as_bytes().to_vec()).unwrap();
        // One highlight style per differing cell, hex and ASCII both.
        let highlights = text.matches(Style::Diff.sgr()).count();
        assert_eq!(highlights, 16);
    }

    #[test]
    fn test_highlighted_blank_past_short_pane() {
        // Bottom has data where top has none: top's pane must show
        // highlighted blanks there, not stale or garbage cells.
        let (a, _fa) = view_of(&[1, 2]);
        let (b, _fb) = view_of(&[1, 2, 3, 4]);
        let mut mask = DiffMask::new();
        mask.compute(&a, &b);

        let mut buf = OutputBuffer::new();
        Screen::draw_pane(&mut buf, TOP_PANE_ROW, &a, &mask);

        let text = String::from_utf8(buf.as_bytes().to_vec()).unwrap();
        assert_eq!(text.matches(Style::Diff.sgr()).count(), 2);
        // The highlight rewrites for the missing cells are blanks.
        let after_last_sgr = text.rsplit(Style::Diff.sgr()).next().unwrap();
        assert!(after_last_sgr.contains(' '));
    }

    #[test]
    fn test_help_bar_mentions_all_commands() {
        let mut buf = OutputBuffer::new();
        Screen::draw_help(&mut buf);

        let text = String::from_utf8(buf.as_bytes().to_vec()).unwrap();
        for token in ["next difference", "quit", "freeze top", "freeze bottom"] {
            assert!(text.contains(token), "help bar missing {token}");
        }
    }
}
