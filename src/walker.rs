//! Incremental flat-index walk over one slice.
//!
//! The native memory order only matches the row-major traversal of a slice
//! for some orientations. Instead of a multiply per axis, the walker keeps a
//! running counter and adds a default delta per step, swapping in an
//! alternate delta at the positions where the traversal wraps to the next
//! row.

/// Positions within a slice whose outgoing step uses the alternate delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CorrectionSet {
    period: usize,
}

impl CorrectionSet {
    /// No corrections: the walk is a single uniform stride
    pub fn none() -> Self {
        Self { period: 0 }
    }

    /// Corrections at `period - 1`, `2 * period - 1`, ... (the last cell of every row)
    pub fn every(period: usize) -> Self {
        Self { period }
    }

    pub fn is_empty(&self) -> bool {
        self.period == 0
    }

    #[inline]
    pub fn contains(&self, position: usize) -> bool {
        self.period != 0 && (position + 1) % self.period == 0
    }
}

/// Yields the flat index of every cell of one slice in row-major order.
#[derive(Clone, Debug)]
pub struct IndexWalker {
    counter: isize,
    position: usize,
    len: usize,
    default_delta: isize,
    alternate_delta: isize,
    corrections: CorrectionSet,
}

impl IndexWalker {
    pub fn new(
        start: isize,
        len: usize,
        default_delta: isize,
        alternate_delta: isize,
        corrections: CorrectionSet,
    ) -> Self {
        Self {
            counter: start,
            position: 0,
            len,
            default_delta,
            alternate_delta,
            corrections,
        }
    }
}

impl Iterator for IndexWalker {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.position == self.len {
            return None;
        }
        // Advance lazily so no step is taken past the last cell.
        if self.position > 0 {
            let previous = self.position - 1;
            self.counter += if self.corrections.contains(previous) {
                self.alternate_delta
            } else {
                self.default_delta
            };
        }
        self.position += 1;
        debug_assert!(self.counter >= 0, "walker left the buffer");
        Some(self.counter as usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for IndexWalker {}
