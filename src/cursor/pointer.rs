//! Raw pointers as position-only cursors.
//!
//! A pointer moves and measures in units of its pointee, so it models the
//! contiguous traversal capabilities without ever being dereferenced. It is
//! not `Readable` or `Writable`: reading through a pointer is the caller's
//! `unsafe` business.
//!
//! Only sized pointees qualify. A `*const str` or `*const [T]` has no
//! element size to step by and satisfies none of the cursor capabilities.
//! Zero-sized pointees do not advance.

use core::mem::size_of;

use super::{
    BidirectionalCursor, ContiguousCursor, ForwardCursor, RandomAccessCursor, WeaklyIncrementable,
};

macro_rules! impl_pointer_cursor {
    ($($ptr:ty),* $(,)?) => {
        $(
            impl<T> WeaklyIncrementable for $ptr {
                #[inline]
                fn advance(&mut self) {
                    *self = self.wrapping_add(1);
                }
            }

            impl<T> ForwardCursor for $ptr {}

            impl<T> BidirectionalCursor for $ptr {
                #[inline]
                fn retreat(&mut self) {
                    *self = self.wrapping_sub(1);
                }

                #[inline]
                fn random_distance(&self, to: &Self) -> Option<isize> {
                    Some(self.distance_to(to))
                }
            }

            impl<T> RandomAccessCursor for $ptr {
                #[inline]
                fn offset(&mut self, n: isize) {
                    *self = self.wrapping_offset(n);
                }

                #[inline]
                fn distance_to(&self, to: &Self) -> isize {
                    let bytes = (*to as usize).wrapping_sub(*self as usize) as isize;
                    bytes / size_of::<T>().max(1) as isize
                }
            }

            impl<T> ContiguousCursor for $ptr {
                type Element = T;

                #[inline]
                fn address(&self) -> *const T {
                    *self as *const T
                }
            }
        )*
    };
}

impl_pointer_cursor! {
    *const T,
    *mut T,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_offset_and_distance() {
        let data = [0u64; 8];
        let first = data.as_ptr();
        let mut p = first;
        // `<*const T>::offset` is inherent and unsafe; name the trait.
        RandomAccessCursor::offset(&mut p, 5);
        assert_eq!(first.distance_to(&p), 5);
        assert_eq!(p.distance_to(&first), -5);
        p.retreat();
        p.advance();
        p.advance();
        assert_eq!(first.distance_to(&p), 6);
    }

    #[test]
    fn test_mut_pointer_address() {
        let mut data = [1i16, 2, 3];
        let mut p = data.as_mut_ptr();
        p.advance();
        assert_eq!(p.address(), &data[1] as *const i16);
    }
}
