use crate::cursor::{BaseSentinel, Readable};
use crate::invoke::Projected;
use crate::sequence::{Sequence, SizedSequence};

/// Each element of `base` passed through `fun`.
///
/// Keeps the strength of the underlying cursor up to random access. Reads
/// produce fresh values, so the view is never writable.
#[derive(Debug, Clone, Copy)]
pub struct Transform<R, F> {
    base: R,
    fun: F,
}

/// Map every element of `base` through `fun`.
#[inline]
pub fn transform<R, F, U>(base: R, fun: F) -> Transform<R, F>
where
    R: Sequence<Cursor: Readable>,
    F: Fn(<R::Cursor as Readable>::Item) -> U + Clone,
{
    Transform { base, fun }
}

impl<R, F> Transform<R, F> {
    #[inline]
    pub fn base(&self) -> &R {
        &self.base
    }
}

impl<R, F, U> Sequence for Transform<R, F>
where
    R: Sequence<Cursor: Readable>,
    F: Fn(<R::Cursor as Readable>::Item) -> U + Clone,
{
    type Cursor = Projected<R::Cursor, F>;
    type Sentinel = BaseSentinel<R::Sentinel>;
    type Borrowed = R::Borrowed;

    #[inline]
    fn start(&self) -> Self::Cursor {
        Projected::new(self.base.start(), self.fun.clone())
    }

    #[inline]
    fn end(&self) -> Self::Sentinel {
        BaseSentinel(self.base.end())
    }
}

impl<R, F, U> SizedSequence for Transform<R, F>
where
    R: SizedSequence<Cursor: Readable>,
    F: Fn(<R::Cursor as Readable>::Item) -> U + Clone,
{
    #[inline]
    fn size(&self) -> usize {
        self.base.size()
    }
}
