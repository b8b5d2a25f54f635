//! Elements that satisfy a predicate.

use crate::cursor::{
    BidirectionalCursor, Cursor, DefaultSentinel, ForwardCursor, IndirectlySwappable, Readable,
    Sentinel, WeaklyIncrementable, Writable,
};
use crate::invoke::IndirectUnaryPredicate;
use crate::sequence::Sequence;

/// The elements of `base` for which `pred` holds, in their original order.
///
/// At most bidirectional: skipping rejected elements makes the distance
/// between two positions unknowable without walking. Writes and swaps go
/// straight through to the underlying elements.
#[derive(Debug, Clone, Copy)]
pub struct Filter<R, P> {
    base: R,
    pred: P,
}

/// Keep the elements of `base` that satisfy `pred`.
#[inline]
pub fn filter<R, P>(base: R, pred: P) -> Filter<R, P>
where
    R: Sequence<Cursor: Readable>,
    P: FnMut(<R::Cursor as Readable>::Item) -> bool + Clone,
{
    Filter { base, pred }
}

impl<R, P> Filter<R, P> {
    #[inline]
    pub fn base(&self) -> &R {
        &self.base
    }
}

/// Cursor of [`Filter`]. Carries the underlying end so it can stop skipping.
#[derive(Debug, Clone)]
pub struct FilterCursor<I, S, P> {
    current: I,
    end: S,
    pred: P,
}

impl<I, S, P> FilterCursor<I, S, P>
where
    I: Cursor + Readable,
    S: Sentinel<I>,
    P: IndirectUnaryPredicate<I>,
{
    fn satisfy(&mut self) {
        while !self.end.is_end(&self.current) && !(self.pred)(self.current.read()) {
            self.current.advance();
        }
    }
}

impl<I, S, P> FilterCursor<I, S, P> {
    /// The underlying cursor.
    #[inline]
    pub fn base(&self) -> &I {
        &self.current
    }
}

impl<I: PartialEq, S, P> PartialEq for FilterCursor<I, S, P> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<I, S, P> WeaklyIncrementable for FilterCursor<I, S, P>
where
    I: Cursor + Readable,
    S: Sentinel<I>,
    P: IndirectUnaryPredicate<I>,
{
    #[inline]
    fn advance(&mut self) {
        self.current.advance();
        self.satisfy();
    }
}

impl<I: Readable, S, P> Readable for FilterCursor<I, S, P> {
    type Item = I::Item;

    #[inline]
    fn read(&self) -> I::Item {
        self.current.read()
    }
}

impl<I: Writable<T>, S, P, T> Writable<T> for FilterCursor<I, S, P> {
    #[inline]
    fn write(&mut self, value: T) {
        self.current.write(value);
    }
}

impl<I: IndirectlySwappable, S, P> IndirectlySwappable for FilterCursor<I, S, P> {
    #[inline]
    fn swap_with(&mut self, other: &mut Self) {
        self.current.swap_with(&mut other.current);
    }
}

impl<I, S, P> ForwardCursor for FilterCursor<I, S, P>
where
    I: ForwardCursor + Readable,
    S: Sentinel<I> + Clone,
    P: IndirectUnaryPredicate<I> + Clone,
{
}

impl<I, S, P> BidirectionalCursor for FilterCursor<I, S, P>
where
    I: BidirectionalCursor + Readable,
    S: Sentinel<I> + Clone,
    P: IndirectUnaryPredicate<I> + Clone,
{
    fn retreat(&mut self) {
        loop {
            self.current.retreat();
            if (self.pred)(self.current.read()) {
                break;
            }
        }
    }
}

impl<I, S, P> Sentinel<FilterCursor<I, S, P>> for DefaultSentinel
where
    I: Cursor + Readable,
    S: Sentinel<I>,
    P: IndirectUnaryPredicate<I>,
{
    #[inline]
    fn is_end(&self, cursor: &FilterCursor<I, S, P>) -> bool {
        cursor.end.is_end(&cursor.current)
    }
}

impl<R, P> Sequence for Filter<R, P>
where
    R: Sequence<Cursor: Readable, Sentinel: Clone>,
    P: IndirectUnaryPredicate<R::Cursor> + Clone,
{
    type Cursor = FilterCursor<R::Cursor, R::Sentinel, P>;
    type Sentinel = DefaultSentinel;
    type Borrowed = R::Borrowed;

    fn start(&self) -> Self::Cursor {
        let mut cursor = FilterCursor {
            current: self.base.start(),
            end: self.base.end(),
            pred: self.pred.clone(),
        };
        cursor.satisfy();
        cursor
    }

    #[inline]
    fn end(&self) -> DefaultSentinel {
        DefaultSentinel
    }
}
