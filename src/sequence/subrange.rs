use crate::cursor::{Cursor, Sentinel, SizedSentinel};
use crate::primitives::Present;

use super::{Sequence, SizedSequence};

/// A cursor and sentinel pair as a sequence.
///
/// The pair refers into storage owned elsewhere, so a subrange is always
/// borrowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subrange<I, S> {
    first: I,
    last: S,
}

impl<I, S> Subrange<I, S> {
    #[inline]
    pub const fn new(first: I, last: S) -> Self {
        Self { first, last }
    }

    #[inline]
    pub fn into_parts(self) -> (I, S) {
        (self.first, self.last)
    }
}

/// The sequence `[first, last)`.
#[inline]
pub fn subrange<I: Cursor, S: Sentinel<I>>(first: I, last: S) -> Subrange<I, S> {
    Subrange::new(first, last)
}

impl<I, S> Sequence for Subrange<I, S>
where
    I: Cursor + Clone,
    S: Sentinel<I> + Clone,
{
    type Cursor = I;
    type Sentinel = S;
    type Borrowed = Present;

    #[inline]
    fn start(&self) -> I {
        self.first.clone()
    }

    #[inline]
    fn end(&self) -> S {
        self.last.clone()
    }
}

impl<I, S> SizedSequence for Subrange<I, S>
where
    I: Cursor + Clone,
    S: SizedSentinel<I> + Clone,
{
    #[inline]
    fn size(&self) -> usize {
        self.last.distance_from(&self.first).max(0) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{Counted, DefaultSentinel, SliceCursor};

    #[test]
    fn test_subrange_of_slice_cursors() {
        let data = [1, 2, 3, 4];
        let r = subrange(SliceCursor::new(&data, 1), SliceCursor::new(&data, 3));
        assert_eq!(r.size(), 2);
    }

    #[test]
    fn test_counted_subrange_is_sized() {
        let data = [1, 2, 3, 4];
        let r = subrange(Counted::new(SliceCursor::new(&data, 0), 3), DefaultSentinel);
        assert_eq!(r.size(), 3);
    }
}
