use crate::cursor::{
    BidirectionalCursor, IndirectlySwappable, Readable, Sentinel, WeaklyIncrementable, Writable,
    next_to,
};
use crate::sequence::{SafeCursor, Sequence, safe_cursor};

use super::InOut;

/// Reverse `[first, last)` in place. Returns the end position.
///
/// When the distance between the ends is known without walking (random
/// access, counted cursors) exactly `n / 2` swaps are made from the two
/// ends inward. Otherwise the two cursors walk towards each other until
/// they meet or cross.
pub fn reverse<I, S>(first: I, last: S) -> I
where
    I: BidirectionalCursor + IndirectlySwappable,
    S: Sentinel<I>,
{
    let bound = next_to(first.clone(), last);
    let mut lo = first;
    let mut hi = bound.clone();
    match lo.random_distance(&bound) {
        Some(n) => {
            for _ in 0..n / 2 {
                hi.retreat();
                lo.swap_with(&mut hi);
                lo.advance();
            }
        }
        None => {
            while lo != hi {
                hi.retreat();
                if lo == hi {
                    break;
                }
                lo.swap_with(&mut hi);
                lo.advance();
            }
        }
    }
    bound
}

pub fn reverse_in<R>(seq: R) -> SafeCursor<R>
where
    R: Sequence<Cursor: BidirectionalCursor + IndirectlySwappable>,
{
    safe_cursor::<R>(reverse(seq.start(), seq.end()))
}

/// Copy `[first, last)` into `out` back to front.
///
/// Returns the end of the input and the output position after the last
/// write.
pub fn reverse_copy<I, S, O>(first: I, last: S, mut out: O) -> InOut<I, O>
where
    I: BidirectionalCursor + Readable,
    S: Sentinel<I>,
    O: WeaklyIncrementable + Writable<I::Item>,
{
    let bound = next_to(first.clone(), last);
    let mut cursor = bound.clone();
    while cursor != first {
        cursor.retreat();
        out.write(cursor.read());
        out.advance();
    }
    InOut {
        input: bound,
        output: out,
    }
}

pub fn reverse_copy_in<R, O>(seq: R, out: O) -> InOut<SafeCursor<R>, O>
where
    R: Sequence<Cursor: BidirectionalCursor + Readable>,
    O: WeaklyIncrementable + Writable<<R::Cursor as Readable>::Item>,
{
    let InOut { input, output } = reverse_copy(seq.start(), seq.end(), out);
    InOut {
        input: safe_cursor::<R>(input),
        output,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::SliceMut;

    #[test]
    fn test_reverse_odd_and_even_lengths() {
        let mut odd = [1, 2, 3, 4, 5];
        reverse_in(SliceMut::new(&mut odd));
        assert_eq!(odd, [5, 4, 3, 2, 1]);

        let mut even = [1, 2, 3, 4];
        reverse_in(SliceMut::new(&mut even));
        assert_eq!(even, [4, 3, 2, 1]);
    }

    #[test]
    fn test_reverse_empty_and_single() {
        let mut empty: [u8; 0] = [];
        reverse_in(SliceMut::new(&mut empty));

        let mut one = [7];
        reverse_in(SliceMut::new(&mut one));
        assert_eq!(one, [7]);
    }
}
