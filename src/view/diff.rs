//! Difference engine: per-byte comparison of two file windows.
//!
//! The mask is recomputed in full after every window move. There is no
//! incremental update path; at 144 bytes a full pass is cheaper than any
//! bookkeeping that would avoid it.

use super::file_view::FileView;
use super::{BYTES_PER_LINE, CAPACITY, LINES_PER_SCREEN};

/// Result of one difference computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffOutcome {
    /// Both windows returned zero valid bytes: the comparison has run off
    /// the end of both files. Distinct from `Count(0)` (identical data),
    /// this is the signal the navigator's boundary correction consumes.
    Exhausted,
    /// Number of differing byte positions in the current windows.
    Count(usize),
}

impl DiffOutcome {
    /// Whether both windows were exhausted.
    #[inline]
    pub const fn is_exhausted(self) -> bool {
        matches!(self, Self::Exhausted)
    }

    /// Whether at least one byte position differs.
    #[inline]
    pub const fn has_diffs(self) -> bool {
        matches!(self, Self::Count(n) if n > 0)
    }
}

/// Per-position difference flags for the current pair of windows.
///
/// `flags[i]` is true when byte `i` of the top window differs from byte
/// `i` of the bottom window, or when only one window has a byte at `i`
/// (tail positions past the shorter window always count as differing).
pub struct DiffMask {
    /// One flag per window position, row-major like the windows.
    flags: [bool; CAPACITY],
    /// Outcome of the last computation.
    outcome: DiffOutcome,
}

impl DiffMask {
    /// Create an empty mask.
    pub const fn new() -> Self {
        Self {
            flags: [false; CAPACITY],
            outcome: DiffOutcome::Count(0),
        }
    }

    /// Outcome of the last [`compute`](Self::compute).
    #[inline]
    pub const fn outcome(&self) -> DiffOutcome {
        self.outcome
    }

    /// Whether position `index` differed in the last computation.
    #[inline]
    pub fn is_set(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    /// The flags of one display row.
    pub fn line(&self, row: usize) -> &[bool] {
        debug_assert!(row < LINES_PER_SCREEN);
        let start = row * BYTES_PER_LINE;
        &self.flags[start..start + BYTES_PER_LINE]
    }

    /// Recompute the mask from the current contents of both windows.
    ///
    /// Compares the overlapping prefix byte by byte, then marks every
    /// tail position present in only one window as differing. Returns
    /// [`DiffOutcome::Exhausted`] when both windows are empty; otherwise
    /// the count of differing positions.
    pub fn compute(&mut self, top: &FileView, bottom: &FileView) -> DiffOutcome {
        self.flags = [false; CAPACITY];

        let a = top.bytes();
        let b = bottom.bytes();
        let overlap = a.len().min(b.len());
        let tail_end = a.len().max(b.len());

        if tail_end == 0 {
            self.outcome = DiffOutcome::Exhausted;
            return self.outcome;
        }

        let mut count = 0;
        for i in 0..overlap {
            if a[i] != b[i] {
                self.flags[i] = true;
                count += 1;
            }
        }
        for flag in &mut self.flags[overlap..tail_end] {
            *flag = true;
        }
        count += tail_end - overlap;

        self.outcome = DiffOutcome::Count(count);
        self.outcome
    }
}

impl Default for DiffMask {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DiffMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiffMask")
            .field("outcome", &self.outcome)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn view_of(contents: &[u8]) -> (FileView, NamedTempFile) {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file.flush().unwrap();
        let view = FileView::open(file.path()).unwrap();
        (view, file)
    }

    #[test]
    fn test_identical_windows() {
        let data = [0xAB; CAPACITY];
        let (a, _fa) = view_of(&data);
        let (b, _fb) = view_of(&data);

        let mut mask = DiffMask::new();
        assert_eq!(mask.compute(&a, &b), DiffOutcome::Count(0));
        assert!((0..CAPACITY).all(|i| !mask.is_set(i)));
    }

    #[test]
    fn test_every_byte_differs() {
        let (a, _fa) = view_of(&[0x00; 10]);
        let (b, _fb) = view_of(&[0xFF; 10]);

        let mut mask = DiffMask::new();
        assert_eq!(mask.compute(&a, &b), DiffOutcome::Count(10));
        assert!((0..10).all(|i| mask.is_set(i)));
        assert!(!mask.is_set(10));
    }

    #[test]
    fn test_tail_only_bytes_count() {
        // A is a strict prefix of B: the overlap matches, the 5 trailing
        // bytes of B have no counterpart and must all be flagged.
        let (a, _fa) = view_of(&[1, 2, 3, 4, 5]);
        let (b, _fb) = view_of(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);

        let mut mask = DiffMask::new();
        assert_eq!(mask.compute(&a, &b), DiffOutcome::Count(5));
        assert!((0..5).all(|i| !mask.is_set(i)));
        assert!((5..10).all(|i| mask.is_set(i)));
    }

    #[test]
    fn test_mixed_overlap_and_tail() {
        let (a, _fa) = view_of(&[9, 2, 9, 4]);
        let (b, _fb) = view_of(&[1, 2, 3, 4, 5, 6]);

        let mut mask = DiffMask::new();
        // Positions 0 and 2 differ in the overlap, 4 and 5 are tail-only.
        assert_eq!(mask.compute(&a, &b), DiffOutcome::Count(4));
        assert!(mask.is_set(0));
        assert!(!mask.is_set(1));
        assert!(mask.is_set(2));
        assert!(!mask.is_set(3));
        assert!(mask.is_set(4));
        assert!(mask.is_set(5));
    }

    #[test]
    fn test_both_empty_is_exhausted_not_zero() {
        let (a, _fa) = view_of(&[]);
        let (b, _fb) = view_of(&[]);

        let mut mask = DiffMask::new();
        let outcome = mask.compute(&a, &b);
        assert_eq!(outcome, DiffOutcome::Exhausted);
        assert_ne!(outcome, DiffOutcome::Count(0));
        assert!(outcome.is_exhausted());
        assert!(!outcome.has_diffs());
    }

    #[test]
    fn test_one_empty_window_flags_the_other() {
        let (a, _fa) = view_of(&[]);
        let (b, _fb) = view_of(&[1, 2, 3]);

        let mut mask = DiffMask::new();
        assert_eq!(mask.compute(&a, &b), DiffOutcome::Count(3));
    }

    #[test]
    fn test_count_matches_property() {
        // diffCount = |{i < min : a[i] != b[i]}| + |vA - vB|
        let da: Vec<u8> = (0..100).collect();
        let mut db = da.clone();
        db[3] = 0xEE;
        db[77] = 0xEE;
        db.truncate(90);

        let (a, _fa) = view_of(&da);
        let (b, _fb) = view_of(&db);

        let mut mask = DiffMask::new();
        assert_eq!(mask.compute(&a, &b), DiffOutcome::Count(2 + 10));
    }

    #[test]
    fn test_recompute_clears_stale_flags() {
        let (a, _fa) = view_of(&[0u8; 8]);
        let (b, _fb) = view_of(&[1u8; 8]);
        let (c, _fc) = view_of(&[0u8; 8]);

        let mut mask = DiffMask::new();
        mask.compute(&a, &b);
        assert!(mask.is_set(0));

        mask.compute(&a, &c);
        assert_eq!(mask.outcome(), DiffOutcome::Count(0));
        assert!((0..8).all(|i| !mask.is_set(i)));
    }

    #[test]
    fn test_line_accessor() {
        let da = [0u8; CAPACITY];
        let mut db = [0u8; CAPACITY];
        db[BYTES_PER_LINE] = 1; // row 1, column 0

        let (a, _fa) = view_of(&da);
        let (b, _fb) = view_of(&db);

        let mut mask = DiffMask::new();
        mask.compute(&a, &b);

        assert!(mask.line(0).iter().all(|&f| !f));
        assert!(mask.line(1)[0]);
        assert!(mask.line(1)[1..].iter().all(|&f| !f));
    }
}
