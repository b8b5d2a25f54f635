use alloc::vec::Vec;

use super::{WeaklyIncrementable, Writable};

/// Output cursor that appends every write to a `Vec`.
///
/// Advancing is a no-op; the next write always lands at the back.
#[derive(Debug)]
pub struct BackInserter<'a, T> {
    target: &'a mut Vec<T>,
}

impl<'a, T> BackInserter<'a, T> {
    #[inline]
    pub fn new(target: &'a mut Vec<T>) -> Self {
        Self { target }
    }
}

impl<T> WeaklyIncrementable for BackInserter<'_, T> {
    #[inline]
    fn advance(&mut self) {}
}

impl<T> Writable<T> for BackInserter<'_, T> {
    #[inline]
    fn write(&mut self, value: T) {
        self.target.push(value);
    }
}

impl<T: Clone> Writable<&T> for BackInserter<'_, T> {
    #[inline]
    fn write(&mut self, value: &T) {
        self.target.push(value.clone());
    }
}
