//! `FileView`: A fixed-capacity read window onto one file.
//!
//! The window holds exactly [`CAPACITY`] bytes of backing storage and is
//! refreshed in full on every move. There is no caching and no partial
//! invalidation; the buffer always reflects the last seek-and-read.

use super::{BYTES_PER_LINE, CAPACITY, LINES_PER_SCREEN};
use crate::error::Error;
use log::{debug, warn};
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// A read-only window onto one file being compared.
///
/// The view owns the file handle, the window's base offset, and a flat
/// [`CAPACITY`]-byte buffer. `valid_len` is the number of buffer bytes the
/// last read actually populated; anything less than [`CAPACITY`] means the
/// read reached end-of-file.
///
/// # Failure model
///
/// Opening the file is the only fatal operation. Once open, a failed seek
/// or read degrades to an empty window (`valid_len == 0`) and the next
/// move retries from scratch, so one bad read never wedges the session.
pub struct FileView {
    /// Path of the backing file (for display and diagnostics).
    path: PathBuf,
    /// Open file handle.
    file: File,
    /// File position of buffer byte 0. Clamped at 0; never negative.
    base_offset: u64,
    /// Window storage, row-major: `LINES_PER_SCREEN` rows of
    /// `BYTES_PER_LINE` bytes.
    buffer: [u8; CAPACITY],
    /// Number of buffer bytes populated by the last read.
    valid_len: usize,
}

impl FileView {
    /// Open a file and fill the window from offset 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Open`] if the file cannot be opened or the initial
    /// read fails. There is no partially initialized state: either the
    /// view comes back readable or the caller gets the error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();
        let open = |p: &PathBuf| -> io::Result<Self> {
            let file = File::open(p)?;
            let mut view = Self {
                path: p.clone(),
                file,
                base_offset: 0,
                buffer: [0; CAPACITY],
                valid_len: 0,
            };
            view.refill()?;
            Ok(view)
        };
        open(&path).map_err(|source| Error::Open { path, source })
    }

    /// Path of the backing file.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File position of buffer byte 0.
    #[inline]
    pub const fn base_offset(&self) -> u64 {
        self.base_offset
    }

    /// The populated portion of the window.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.buffer[..self.valid_len]
    }

    /// Number of buffer bytes populated by the last read.
    ///
    /// Anything less than [`CAPACITY`] means end-of-file was reached.
    #[inline]
    pub const fn valid_len(&self) -> usize {
        self.valid_len
    }

    /// The populated bytes of one display row.
    ///
    /// Returns an empty slice for rows entirely past `valid_len`.
    pub fn line(&self, row: usize) -> &[u8] {
        debug_assert!(row < LINES_PER_SCREEN);
        let start = (row * BYTES_PER_LINE).min(self.valid_len);
        let end = (start + BYTES_PER_LINE).min(self.valid_len);
        &self.buffer[start..end]
    }

    /// Move the window by a signed byte delta and refresh it.
    ///
    /// The new base offset is clamped at 0; moving backward from the start
    /// of the file stays at the start. The window is re-read in full even
    /// for a zero delta, which makes `move_by(0)` a refresh.
    ///
    /// A seek or read failure is not fatal: the window degrades to empty
    /// (`valid_len == 0`) and the next move retries.
    pub fn move_by(&mut self, delta: i64) {
        self.base_offset = if delta.is_negative() {
            self.base_offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.base_offset.saturating_add(delta.unsigned_abs())
        };

        if let Err(e) = self.refill() {
            warn!(
                "read failed at offset {} in {}: {e}",
                self.base_offset,
                self.path.display()
            );
            self.valid_len = 0;
        }
        debug!(
            "{}: offset {} valid {}",
            self.path.display(),
            self.base_offset,
            self.valid_len
        );
    }

    /// Seek to `base_offset` and read up to [`CAPACITY`] bytes.
    fn refill(&mut self) -> io::Result<()> {
        self.file.seek(SeekFrom::Start(self.base_offset))?;
        self.valid_len = 0;
        while self.valid_len < CAPACITY {
            match self.file.read(&mut self.buffer[self.valid_len..]) {
                Ok(0) => break,
                Ok(n) => self.valid_len += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for FileView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileView")
            .field("path", &self.path)
            .field("base_offset", &self.base_offset)
            .field("valid_len", &self.valid_len)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn backing_file(contents: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_open_missing_file() {
        let err = FileView::open("/nonexistent/bindelta-test").unwrap_err();
        assert!(matches!(err, Error::Open { .. }));
    }

    #[test]
    fn test_open_fills_window() {
        let data: Vec<u8> = (0..=255).collect();
        let file = backing_file(&data);
        let view = FileView::open(file.path()).unwrap();

        assert_eq!(view.base_offset(), 0);
        assert_eq!(view.valid_len(), CAPACITY);
        assert_eq!(view.bytes(), &data[..CAPACITY]);
    }

    #[test]
    fn test_open_short_file() {
        let file = backing_file(&[1, 2, 3]);
        let view = FileView::open(file.path()).unwrap();

        assert_eq!(view.valid_len(), 3);
        assert_eq!(view.bytes(), &[1, 2, 3]);
    }

    #[test]
    fn test_open_empty_file() {
        let file = backing_file(&[]);
        let view = FileView::open(file.path()).unwrap();
        assert_eq!(view.valid_len(), 0);
    }

    #[test]
    fn test_move_forward_and_back() {
        let data: Vec<u8> = (0..1024u32).map(|i| (i % 251) as u8).collect();
        let file = backing_file(&data);
        let mut view = FileView::open(file.path()).unwrap();

        view.move_by(BYTES_PER_LINE as i64);
        assert_eq!(view.base_offset(), 16);
        assert_eq!(view.bytes(), &data[16..16 + CAPACITY]);

        view.move_by(-(BYTES_PER_LINE as i64));
        assert_eq!(view.base_offset(), 0);
        assert_eq!(view.bytes(), &data[..CAPACITY]);
    }

    #[test]
    fn test_move_clamps_at_zero() {
        let file = backing_file(&[0; 64]);
        let mut view = FileView::open(file.path()).unwrap();

        view.move_by(-1000);
        assert_eq!(view.base_offset(), 0);

        view.move_by(10);
        view.move_by(-5000);
        assert_eq!(view.base_offset(), 0);
        assert_eq!(view.valid_len(), 64);
    }

    #[test]
    fn test_move_zero_is_idempotent() {
        let data: Vec<u8> = (0..200).collect();
        let file = backing_file(&data);
        let mut view = FileView::open(file.path()).unwrap();
        view.move_by(32);

        let before: Vec<u8> = view.bytes().to_vec();
        let offset = view.base_offset();
        view.move_by(0);

        assert_eq!(view.base_offset(), offset);
        assert_eq!(view.valid_len(), before.len());
        assert_eq!(view.bytes(), &before[..]);
    }

    #[test]
    fn test_move_past_end_reads_nothing() {
        let file = backing_file(&[7; 100]);
        let mut view = FileView::open(file.path()).unwrap();

        view.move_by(4096);
        assert_eq!(view.base_offset(), 4096);
        assert_eq!(view.valid_len(), 0);
        assert!(view.bytes().is_empty());

        // Moving back re-enters the readable region.
        view.move_by(-4096);
        assert_eq!(view.valid_len(), 100);
    }

    #[test]
    fn test_line_slicing() {
        let data: Vec<u8> = (0..40).collect();
        let file = backing_file(&data);
        let view = FileView::open(file.path()).unwrap();

        assert_eq!(view.line(0), &data[0..16]);
        assert_eq!(view.line(1), &data[16..32]);
        assert_eq!(view.line(2), &data[32..40]); // partial row
        assert!(view.line(3).is_empty());
        assert!(view.line(LINES_PER_SCREEN - 1).is_empty());
    }
}
