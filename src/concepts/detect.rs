//! Named capability constants for concrete types.
//!
//! `Detect::<X>::IS_FORWARD_CURSOR` and friends answer the same questions
//! as [`satisfies!`](crate::satisfies), as plain associated constants that
//! read well in `const` items and `match` guards.
//!
//! Each constant exists twice: a `false` default on a fallback trait, and
//! an inherent `true` on `Detect<X>` that only exists when `X` has the
//! capability. Inherent constants win, so the lookup picks whichever
//! applies. The fallback traits have to be in scope:
//!
//! ```
//! use tola_ranges::concepts::detect::*;
//! use tola_ranges::cursor::SliceCursor;
//!
//! assert!(Detect::<SliceCursor<'static, u8>>::IS_CONTIGUOUS_CURSOR);
//! assert!(!Detect::<*const u8>::IS_READABLE);
//! ```
//!
//! Only concrete types can be asked; inside a generic function every
//! answer is the fallback.

use core::marker::PhantomData;

use crate::concepts::{EqualityComparable, Regular, Semiregular, TotallyOrdered};
use crate::cursor::{
    BidirectionalCursor, ContiguousCursor, Cursor, ForwardCursor, IndirectlySwappable, InputCursor,
    RandomAccessCursor, Readable, WeaklyIncrementable,
};
use crate::sequence::{
    BidirectionalSequence, BorrowedSequence, CommonSequence, ContiguousSequence, ForwardSequence,
    InputSequence, RandomAccessSequence, Sequence, SizedSequence,
};

/// Detection wrapper type.
#[doc(hidden)]
pub struct Detect<T: ?Sized>(PhantomData<T>);

macro_rules! impl_detect {
    ($($Trait:ident => $CONST:ident),* $(,)?) => {
        $(
            ::paste::paste! {
                #[doc(hidden)]
                pub trait [<$Trait Fallback>] { const $CONST: bool = false; }
                impl<T: ?Sized> [<$Trait Fallback>] for Detect<T> {}
                impl<T: ?Sized + $Trait> Detect<T> { pub const $CONST: bool = true; }
            }
        )*
    };
}

impl_detect! {
    EqualityComparable => IS_EQUALITY_COMPARABLE,
    TotallyOrdered => IS_TOTALLY_ORDERED,
    Semiregular => IS_SEMIREGULAR,
    Regular => IS_REGULAR,

    WeaklyIncrementable => IS_WEAKLY_INCREMENTABLE,
    Cursor => IS_CURSOR,
    Readable => IS_READABLE,
    IndirectlySwappable => IS_INDIRECTLY_SWAPPABLE,
    InputCursor => IS_INPUT_CURSOR,
    ForwardCursor => IS_FORWARD_CURSOR,
    BidirectionalCursor => IS_BIDIRECTIONAL_CURSOR,
    RandomAccessCursor => IS_RANDOM_ACCESS_CURSOR,
    ContiguousCursor => IS_CONTIGUOUS_CURSOR,

    Sequence => IS_SEQUENCE,
    SizedSequence => IS_SIZED_SEQUENCE,
    CommonSequence => IS_COMMON_SEQUENCE,
    BorrowedSequence => IS_BORROWED_SEQUENCE,
    InputSequence => IS_INPUT_SEQUENCE,
    ForwardSequence => IS_FORWARD_SEQUENCE,
    BidirectionalSequence => IS_BIDIRECTIONAL_SEQUENCE,
    RandomAccessSequence => IS_RANDOM_ACCESS_SEQUENCE,
    ContiguousSequence => IS_CONTIGUOUS_SEQUENCE,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{Counted, SliceCursor};
    use crate::view::{Repeat, Single};

    #[test]
    fn test_cursor_constants() {
        type Slice = SliceCursor<'static, i32>;
        assert!(Detect::<Slice>::IS_CONTIGUOUS_CURSOR);
        assert!(Detect::<Slice>::IS_INPUT_CURSOR);
        assert!(Detect::<Counted<Slice>>::IS_RANDOM_ACCESS_CURSOR);
        assert!(Detect::<*mut u16>::IS_CONTIGUOUS_CURSOR);
        assert!(!Detect::<*mut u16>::IS_READABLE);
        assert!(!Detect::<*const str>::IS_CURSOR);
    }

    #[test]
    fn test_sequence_constants() {
        assert!(Detect::<&'static [u8]>::IS_BORROWED_SEQUENCE);
        assert!(Detect::<&'static [u8]>::IS_CONTIGUOUS_SEQUENCE);
        assert!(Detect::<Single<u8>>::IS_COMMON_SEQUENCE);
        assert!(!Detect::<Single<u8>>::IS_BORROWED_SEQUENCE);
        assert!(!Detect::<Repeat<u8>>::IS_COMMON_SEQUENCE);
        assert!(!Detect::<u8>::IS_SEQUENCE);
    }
}
