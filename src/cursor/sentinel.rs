//! Sentinels that are not cursors.

use super::{Cursor, Sentinel, SizedSentinel};

/// End marker for cursors that know their own end (counted cursors,
/// filtered cursors, single-pass adaptors).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DefaultSentinel;

/// A sentinel no cursor ever reaches. Bounds infinite sequences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Unreachable;

impl<I: Cursor> Sentinel<I> for Unreachable {
    #[inline]
    fn is_end(&self, _cursor: &I) -> bool {
        false
    }
}

/// A cursor that wraps another cursor and exposes it.
pub trait Adaptor {
    type Base;

    fn base(&self) -> &Self::Base;
}

/// Sentinel of an adaptor: the end of the wrapped sequence, compared against
/// the adaptor's base cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BaseSentinel<S>(pub S);

impl<C, S> Sentinel<C> for BaseSentinel<S>
where
    C: Cursor + Adaptor,
    C::Base: Cursor,
    S: Sentinel<C::Base>,
{
    #[inline]
    fn is_end(&self, cursor: &C) -> bool {
        self.0.is_end(cursor.base())
    }
}

impl<C, S> SizedSentinel<C> for BaseSentinel<S>
where
    C: Cursor + Adaptor,
    C::Base: Cursor,
    S: SizedSentinel<C::Base>,
{
    #[inline]
    fn distance_from(&self, cursor: &C) -> isize {
        self.0.distance_from(cursor.base())
    }
}
