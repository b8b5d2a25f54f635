use core::iter::FusedIterator;

use crate::cursor::{InputCursor, Sentinel};
use crate::sequence::Sequence;

/// A cursor and sentinel pair as a standard iterator.
#[derive(Debug, Clone)]
pub struct Iter<I, S> {
    cursor: I,
    end: S,
}

impl<I: InputCursor, S: Sentinel<I>> Iter<I, S> {
    #[inline]
    pub fn new(first: I, last: S) -> Self {
        Self {
            cursor: first,
            end: last,
        }
    }
}

/// Iterate the elements of `seq`.
#[inline]
pub fn iter<R: Sequence<Cursor: InputCursor>>(seq: &R) -> Iter<R::Cursor, R::Sentinel> {
    Iter::new(seq.start(), seq.end())
}

impl<I: InputCursor, S: Sentinel<I>> Iterator for Iter<I, S> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        if self.end.is_end(&self.cursor) {
            return None;
        }
        let item = self.cursor.read();
        self.cursor.advance();
        Some(item)
    }
}

impl<I: InputCursor, S: Sentinel<I>> FusedIterator for Iter<I, S> {}
