use crate::cursor::{Counted, Cursor, Sentinel};
use crate::sequence::{Sequence, SizedSequence};

/// The first `count` elements of `base`, or all of them if there are fewer.
#[derive(Debug, Clone, Copy)]
pub struct Take<R> {
    base: R,
    count: isize,
}

/// Take at most `count` elements; a negative count takes none.
#[inline]
pub fn take<R: Sequence>(base: R, count: isize) -> Take<R> {
    Take {
        base,
        count: count.max(0),
    }
}

impl<R> Take<R> {
    #[inline]
    pub fn base(&self) -> &R {
        &self.base
    }
}

/// End of a [`Take`]: the count runs out or the underlying sequence ends.
///
/// The count is checked first; once it reaches zero the underlying sentinel
/// is not consulted.
#[derive(Debug, Clone, Copy)]
pub struct TakeSentinel<S> {
    end: S,
}

impl<I, S> Sentinel<Counted<I>> for TakeSentinel<S>
where
    I: Cursor,
    S: Sentinel<I>,
{
    #[inline]
    fn is_end(&self, cursor: &Counted<I>) -> bool {
        cursor.remaining() == 0 || self.end.is_end(cursor.base())
    }
}

impl<R: Sequence> Sequence for Take<R> {
    type Cursor = Counted<R::Cursor>;
    type Sentinel = TakeSentinel<R::Sentinel>;
    type Borrowed = R::Borrowed;

    #[inline]
    fn start(&self) -> Self::Cursor {
        Counted::new(self.base.start(), self.count)
    }

    #[inline]
    fn end(&self) -> Self::Sentinel {
        TakeSentinel {
            end: self.base.end(),
        }
    }
}

impl<R: SizedSequence> SizedSequence for Take<R> {
    #[inline]
    fn size(&self) -> usize {
        self.base.size().min(self.count as usize)
    }
}
