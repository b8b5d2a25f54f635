use crate::cursor::{Counted, DefaultSentinel, WeaklyIncrementable};
use crate::sequence::{Subrange, subrange};

/// The `n` elements starting at `first`.
///
/// No end is ever compared; `first` must have at least `n` elements after
/// it. A negative `n` yields an empty sequence.
#[inline]
pub fn counted<I>(first: I, n: isize) -> Subrange<Counted<I>, DefaultSentinel>
where
    I: WeaklyIncrementable,
{
    subrange(Counted::new(first, n.max(0)), DefaultSentinel)
}
