//! Flatten a sequence of sequences.

use crate::cursor::{
    BidirectionalCursor, Cursor, DefaultSentinel, ForwardCursor, IndirectlySwappable, Readable,
    Sentinel, WeaklyIncrementable, Writable, next_to,
};
use crate::primitives::Bool;
use crate::sequence::Sequence;

/// The elements of every inner sequence of `base`, one after another.
///
/// Empty inner sequences contribute nothing. Forward when both levels are
/// forward, bidirectional when both are bidirectional. Borrowed only when
/// both the outer sequence and the inner sequences are.
#[derive(Debug, Clone, Copy)]
pub struct Join<R> {
    base: R,
}

#[inline]
pub fn join<R>(base: R) -> Join<R>
where
    R: Sequence<Cursor: Readable<Item: Sequence>>,
{
    Join { base }
}

impl<R> Join<R> {
    #[inline]
    pub fn base(&self) -> &R {
        &self.base
    }
}

/// Cursor of [`Join`].
///
/// `inner` holds the position in the current inner sequence together with
/// that sequence's end; it is `None` only once the outer cursor is done.
#[derive(Debug, Clone)]
pub struct JoinCursor<O, OS, C, CS> {
    outer: O,
    outer_end: OS,
    inner: Option<(C, CS)>,
}

impl<O, OS, C, CS> JoinCursor<O, OS, C, CS>
where
    O: Cursor + Readable<Item: Sequence<Cursor = C, Sentinel = CS>>,
    OS: Sentinel<O>,
    C: Cursor,
    CS: Sentinel<C>,
{
    /// Settle on the first element at or after the outer position.
    fn satisfy(&mut self) {
        while !self.outer_end.is_end(&self.outer) {
            let seq = self.outer.read();
            let (first, last) = (seq.start(), seq.end());
            if !last.is_end(&first) {
                self.inner = Some((first, last));
                return;
            }
            self.outer.advance();
        }
        self.inner = None;
    }
}

impl<O: PartialEq, OS, C: PartialEq, CS> PartialEq for JoinCursor<O, OS, C, CS> {
    fn eq(&self, other: &Self) -> bool {
        self.outer == other.outer
            && match (&self.inner, &other.inner) {
                (Some((a, _)), Some((b, _))) => a == b,
                (None, None) => true,
                _ => false,
            }
    }
}

impl<O, OS, C, CS> WeaklyIncrementable for JoinCursor<O, OS, C, CS>
where
    O: Cursor + Readable<Item: Sequence<Cursor = C, Sentinel = CS>>,
    OS: Sentinel<O>,
    C: Cursor,
    CS: Sentinel<C>,
{
    fn advance(&mut self) {
        let exhausted = match &mut self.inner {
            Some((cursor, last)) => {
                cursor.advance();
                last.is_end(cursor)
            }
            None => false,
        };
        if exhausted {
            self.outer.advance();
            self.satisfy();
        }
    }
}

impl<O, OS, C: Readable, CS> Readable for JoinCursor<O, OS, C, CS> {
    type Item = C::Item;

    fn read(&self) -> C::Item {
        match &self.inner {
            Some((cursor, _)) => cursor.read(),
            None => panic!("read past the end of a joined sequence"),
        }
    }
}

impl<O, OS, C: Writable<T>, CS, T> Writable<T> for JoinCursor<O, OS, C, CS> {
    fn write(&mut self, value: T) {
        match &mut self.inner {
            Some((cursor, _)) => cursor.write(value),
            None => panic!("write past the end of a joined sequence"),
        }
    }
}

impl<O, OS, C: IndirectlySwappable, CS> IndirectlySwappable for JoinCursor<O, OS, C, CS> {
    fn swap_with(&mut self, other: &mut Self) {
        match (&mut self.inner, &mut other.inner) {
            (Some((a, _)), Some((b, _))) => a.swap_with(b),
            _ => panic!("swap past the end of a joined sequence"),
        }
    }
}

impl<O, OS, C, CS> ForwardCursor for JoinCursor<O, OS, C, CS>
where
    O: ForwardCursor + Readable<Item: Sequence<Cursor = C, Sentinel = CS>>,
    OS: Sentinel<O> + Clone,
    C: ForwardCursor,
    CS: Sentinel<C> + Clone,
{
}

impl<O, OS, C, CS> BidirectionalCursor for JoinCursor<O, OS, C, CS>
where
    O: BidirectionalCursor + Readable<Item: Sequence<Cursor = C, Sentinel = CS>>,
    OS: Sentinel<O> + Clone,
    C: BidirectionalCursor,
    CS: Sentinel<C> + Clone,
{
    fn retreat(&mut self) {
        let at_inner_start = match &self.inner {
            Some((cursor, _)) => *cursor == self.outer.read().start(),
            None => true,
        };
        if !at_inner_start {
            if let Some((cursor, _)) = &mut self.inner {
                cursor.retreat();
            }
            return;
        }
        loop {
            self.outer.retreat();
            let seq = self.outer.read();
            let (first, last) = (seq.start(), seq.end());
            let mut cursor = next_to(first.clone(), last.clone());
            if cursor != first {
                cursor.retreat();
                self.inner = Some((cursor, last));
                return;
            }
        }
    }
}

impl<O, OS, C, CS> Sentinel<JoinCursor<O, OS, C, CS>> for DefaultSentinel
where
    O: Cursor + Readable<Item: Sequence<Cursor = C, Sentinel = CS>>,
    OS: Sentinel<O>,
    C: Cursor,
    CS: Sentinel<C>,
{
    #[inline]
    fn is_end(&self, cursor: &JoinCursor<O, OS, C, CS>) -> bool {
        cursor.outer_end.is_end(&cursor.outer)
    }
}

impl<R, Q> Sequence for Join<R>
where
    R: Sequence<Cursor: Readable<Item = Q>, Sentinel: Clone>,
    Q: Sequence,
{
    type Cursor = JoinCursor<R::Cursor, R::Sentinel, Q::Cursor, Q::Sentinel>;
    type Sentinel = DefaultSentinel;
    type Borrowed = <R::Borrowed as Bool>::And<Q::Borrowed>;

    fn start(&self) -> Self::Cursor {
        let mut cursor = JoinCursor {
            outer: self.base.start(),
            outer_end: self.base.end(),
            inner: None,
        };
        cursor.satisfy();
        cursor
    }

    #[inline]
    fn end(&self) -> DefaultSentinel {
        DefaultSentinel
    }
}
