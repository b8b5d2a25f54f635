//! # Layer 6: Uninitialized storage
//!
//! Construct elements into `MaybeUninit` slots. Every operation is all or
//! nothing: if a clone, a conversion or a generator panics or returns an
//! error partway, the elements already constructed are dropped before the
//! failure propagates, and the slots are left uninitialized again.
//!
//! On success the constructed prefix is returned as an initialized slice.
//! The caller owns those elements and drops them with [`destroy`] (or by
//! moving them out) when done.

use core::borrow::Borrow;
use core::mem::{self, MaybeUninit};
use core::ptr;

use crate::algorithm::InOut;
use crate::cursor::{InputCursor, Readable, Sentinel, WeaklyIncrementable};

/// Slots being filled front to back. Dropping it drops what was written.
struct PartialInit<'a, T> {
    slots: &'a mut [MaybeUninit<T>],
    initialized: usize,
}

impl<'a, T> PartialInit<'a, T> {
    #[inline]
    fn new(slots: &'a mut [MaybeUninit<T>]) -> Self {
        Self {
            slots,
            initialized: 0,
        }
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.initialized == self.slots.len()
    }

    #[inline]
    fn push(&mut self, value: T) {
        self.slots[self.initialized].write(value);
        self.initialized += 1;
    }

    /// Hand the constructed prefix to the caller.
    fn finish(mut self) -> &'a mut [T] {
        let len = mem::replace(&mut self.initialized, 0);
        let slots = mem::take(&mut self.slots);
        let init = &mut slots[..len];
        // SAFETY: `push` wrote the first `len` slots, and `MaybeUninit<T>`
        // has the layout of `T`.
        unsafe { &mut *(ptr::from_mut(init) as *mut [T]) }
    }
}

impl<T> Drop for PartialInit<'_, T> {
    fn drop(&mut self) {
        for slot in &mut self.slots[..self.initialized] {
            // SAFETY: slots below `initialized` were written by `push`.
            unsafe { slot.assume_init_drop() };
        }
    }
}

/// Clone `value` into every slot.
pub fn uninitialized_fill<'a, T: Clone>(slots: &'a mut [MaybeUninit<T>], value: &T) -> &'a mut [T] {
    let mut guard = PartialInit::new(slots);
    while !guard.is_full() {
        guard.push(value.clone());
    }
    guard.finish()
}

/// Clone `value` into the first `n` slots. Panics if `n` exceeds the slots.
pub fn uninitialized_fill_n<'a, T: Clone>(
    slots: &'a mut [MaybeUninit<T>],
    n: usize,
    value: &T,
) -> &'a mut [T] {
    uninitialized_fill(&mut slots[..n], value)
}

/// Construct `T::default()` in every slot.
pub fn uninitialized_default_construct<T: Default>(slots: &mut [MaybeUninit<T>]) -> &mut [T] {
    let mut guard = PartialInit::new(slots);
    while !guard.is_full() {
        guard.push(T::default());
    }
    guard.finish()
}

/// Copy `[first, last)` into the slots, stopping early when they run out.
///
/// Returns the input position reached and the constructed elements.
pub fn uninitialized_copy<'a, I, S, T>(
    mut first: I,
    last: S,
    slots: &'a mut [MaybeUninit<T>],
) -> InOut<I, &'a mut [T]>
where
    I: InputCursor,
    S: Sentinel<I>,
    I::Item: Borrow<T>,
    T: Clone,
{
    let mut guard = PartialInit::new(slots);
    while !guard.is_full() && !last.is_end(&first) {
        guard.push(<I::Item as Borrow<T>>::borrow(&first.read()).clone());
        first.advance();
    }
    InOut {
        input: first,
        output: guard.finish(),
    }
}

/// Copy up to `n` elements starting at `first` into the slots.
pub fn uninitialized_copy_n<'a, I, T>(
    mut first: I,
    n: isize,
    slots: &'a mut [MaybeUninit<T>],
) -> InOut<I, &'a mut [T]>
where
    I: WeaklyIncrementable + Readable,
    I::Item: Borrow<T>,
    T: Clone,
{
    let mut guard = PartialInit::new(slots);
    let mut left = n;
    while left > 0 && !guard.is_full() {
        guard.push(<I::Item as Borrow<T>>::borrow(&first.read()).clone());
        first.advance();
        left -= 1;
    }
    InOut {
        input: first,
        output: guard.finish(),
    }
}

/// Construct every slot from `make(index)`, stopping at the first error.
///
/// On `Err` the elements built so far are dropped and the error is
/// returned.
pub fn try_uninitialized_generate<'a, T, E, F>(
    slots: &'a mut [MaybeUninit<T>],
    mut make: F,
) -> Result<&'a mut [T], E>
where
    F: FnMut(usize) -> Result<T, E>,
{
    let mut guard = PartialInit::new(slots);
    while !guard.is_full() {
        let value = make(guard.initialized)?;
        guard.push(value);
    }
    Ok(guard.finish())
}

/// Drop every element in `slots` in place.
///
/// # Safety
///
/// Every slot must hold an initialized value that is not used again.
pub unsafe fn destroy<T>(slots: &mut [MaybeUninit<T>]) {
    for slot in slots {
        // SAFETY: the caller guarantees the slot is initialized.
        unsafe { slot.assume_init_drop() };
    }
}
