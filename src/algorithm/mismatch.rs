use crate::cursor::{InputCursor, Readable, Sentinel};
use crate::invoke::projected_read;
use crate::sequence::{SafeCursor, Sequence, safe_cursor};

use super::InIn;

/// First pair of positions where `pred` rejects the projected elements,
/// or where either sequence ends.
#[allow(clippy::too_many_arguments)]
pub fn mismatch<I1, S1, I2, S2, F, P1, P2, U1, U2>(
    mut first1: I1,
    last1: S1,
    mut first2: I2,
    last2: S2,
    mut pred: F,
    mut proj1: P1,
    mut proj2: P2,
) -> InIn<I1, I2>
where
    I1: InputCursor,
    S1: Sentinel<I1>,
    I2: InputCursor,
    S2: Sentinel<I2>,
    P1: FnMut(I1::Item) -> U1,
    P2: FnMut(I2::Item) -> U2,
    F: FnMut(U1, U2) -> bool,
{
    while !last1.is_end(&first1) && !last2.is_end(&first2) {
        let a = projected_read(&first1, &mut proj1);
        let b = projected_read(&first2, &mut proj2);
        if !pred(a, b) {
            break;
        }
        first1.advance();
        first2.advance();
    }
    InIn {
        input1: first1,
        input2: first2,
    }
}

pub fn mismatch_in<R1, R2, F, P1, P2, U1, U2>(
    seq1: R1,
    seq2: R2,
    pred: F,
    proj1: P1,
    proj2: P2,
) -> InIn<SafeCursor<R1>, SafeCursor<R2>>
where
    R1: Sequence<Cursor: InputCursor>,
    R2: Sequence<Cursor: InputCursor>,
    P1: FnMut(<R1::Cursor as Readable>::Item) -> U1,
    P2: FnMut(<R2::Cursor as Readable>::Item) -> U2,
    F: FnMut(U1, U2) -> bool,
{
    let InIn { input1, input2 } =
        mismatch(seq1.start(), seq1.end(), seq2.start(), seq2.end(), pred, proj1, proj2);
    InIn {
        input1: safe_cursor::<R1>(input1),
        input2: safe_cursor::<R2>(input2),
    }
}

/// Whether both sequences have the same length and `pred` accepts every
/// pair of projected elements.
#[allow(clippy::too_many_arguments)]
pub fn equal<I1, S1, I2, S2, F, P1, P2, U1, U2>(
    mut first1: I1,
    last1: S1,
    mut first2: I2,
    last2: S2,
    mut pred: F,
    mut proj1: P1,
    mut proj2: P2,
) -> bool
where
    I1: InputCursor,
    S1: Sentinel<I1>,
    I2: InputCursor,
    S2: Sentinel<I2>,
    P1: FnMut(I1::Item) -> U1,
    P2: FnMut(I2::Item) -> U2,
    F: FnMut(U1, U2) -> bool,
{
    loop {
        let (end1, end2) = (last1.is_end(&first1), last2.is_end(&first2));
        if end1 || end2 {
            return end1 && end2;
        }
        let a = projected_read(&first1, &mut proj1);
        let b = projected_read(&first2, &mut proj2);
        if !pred(a, b) {
            return false;
        }
        first1.advance();
        first2.advance();
    }
}

pub fn equal_in<R1, R2, F, P1, P2, U1, U2>(
    seq1: R1,
    seq2: R2,
    pred: F,
    proj1: P1,
    proj2: P2,
) -> bool
where
    R1: Sequence<Cursor: InputCursor>,
    R2: Sequence<Cursor: InputCursor>,
    P1: FnMut(<R1::Cursor as Readable>::Item) -> U1,
    P2: FnMut(<R2::Cursor as Readable>::Item) -> U2,
    F: FnMut(U1, U2) -> bool,
{
    equal(seq1.start(), seq1.end(), seq2.start(), seq2.end(), pred, proj1, proj2)
}
