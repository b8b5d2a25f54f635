//! Single-pass sequences over standard iterators.

use core::cell::Cell;

use crate::cursor::{DefaultSentinel, Readable, Sentinel, WeaklyIncrementable};
use crate::primitives::Absent;
use crate::sequence::Sequence;

/// An iterator as a single-pass sequence.
///
/// The iterator is handed to the first cursor taken from the sequence;
/// later calls to `start` see an exhausted sequence.
pub struct FromIter<It> {
    source: Cell<Option<It>>,
}

#[inline]
pub fn from_iter<It: IntoIterator>(iter: It) -> FromIter<It::IntoIter> {
    FromIter {
        source: Cell::new(Some(iter.into_iter())),
    }
}

/// Input cursor that pulls from an iterator.
///
/// Keeps the element under the cursor so it can be read more than once.
/// Only exhausted cursors compare equal.
pub struct IterCursor<It: Iterator> {
    iter: Option<It>,
    current: Option<It::Item>,
}

impl<It: Iterator> IterCursor<It> {
    fn new(iter: Option<It>) -> Self {
        let mut cursor = Self {
            iter,
            current: None,
        };
        cursor.pull();
        cursor
    }

    fn pull(&mut self) {
        self.current = self.iter.as_mut().and_then(Iterator::next);
    }
}

impl<It: Iterator> PartialEq for IterCursor<It> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.current.is_none() && other.current.is_none()
    }
}

impl<It: Iterator> WeaklyIncrementable for IterCursor<It> {
    #[inline]
    fn advance(&mut self) {
        self.pull();
    }
}

impl<It: Iterator<Item: Clone>> Readable for IterCursor<It> {
    type Item = It::Item;

    fn read(&self) -> It::Item {
        match &self.current {
            Some(item) => item.clone(),
            None => panic!("read past the end of a single-pass sequence"),
        }
    }
}

impl<It: Iterator> Sentinel<IterCursor<It>> for DefaultSentinel {
    #[inline]
    fn is_end(&self, cursor: &IterCursor<It>) -> bool {
        cursor.current.is_none()
    }
}

impl<It: Iterator> Sequence for FromIter<It> {
    type Cursor = IterCursor<It>;
    type Sentinel = DefaultSentinel;
    type Borrowed = Absent;

    #[inline]
    fn start(&self) -> IterCursor<It> {
        IterCursor::new(self.source.take())
    }

    #[inline]
    fn end(&self) -> DefaultSentinel {
        DefaultSentinel
    }
}
