//! Cursor behavior: multi-pass copies, random-access arithmetic, sentinels.

use tola_ranges::cursor::{
    BaseSentinel, advance_bounded, advance_n, distance, next, next_n, next_to, prev, sized_distance,
};
use tola_ranges::invoke::Projected;
use tola_ranges::prelude::*;

// =============================================================================
// Forward: copies advance independently
// =============================================================================

#[test]
fn test_forward_copies_are_independent() {
    let data = [5, 6, 7, 8];
    let a = SliceCursor::new(&data, 0);
    let mut b = a;
    b.advance();
    b.advance();
    assert_eq!(*a.read(), 5);
    assert_eq!(*b.read(), 7);

    let mut a2 = a;
    advance_n(&mut a2, 2);
    assert!(a2 == b);
    assert_eq!(a2.read(), b.read());
}

#[test]
fn test_bidirectional_round_trip() {
    let data = ['a', 'b', 'c'];
    let c = SliceCursor::new(&data, 1);
    assert!(prev(next(c)) == c);
    assert!(next(prev(c)) == c);
}

// =============================================================================
// Random access: offset and distance are inverse
// =============================================================================

#[test]
fn test_offset_and_distance_are_inverse() {
    let data = [0u16; 16];
    let first = SliceCursor::new(&data, 3);
    for n in [-3isize, -1, 0, 1, 7, 13] {
        let mut moved = first;
        moved.offset(n);
        assert_eq!(first.distance_to(&moved), n);
        assert_eq!(moved.distance_to(&first), -n);
    }
}

#[test]
fn test_offset_matches_repeated_advance() {
    let data = [1, 2, 3, 4, 5, 6];
    let first = SliceCursor::new(&data, 0);
    let mut jumped = first;
    jumped.offset(4);
    assert!(jumped == next_n(first, 4));
}

#[test]
fn test_pointer_distance_counts_elements() {
    let data = [0u32; 10];
    let first = data.as_ptr();
    let last = first.wrapping_add(10);
    assert_eq!(sized_distance(&first, &last), 10);
    assert_eq!(distance(first, &last), 10);
}

// =============================================================================
// Sentinels
// =============================================================================

#[test]
fn test_next_to_through_adaptor_sentinel() {
    let data = [1, 2, 3];
    let first = Projected::new(SliceCursor::new(&data, 0), |x: &i32| x + 1);
    let last = BaseSentinel(SliceCursor::new(&data, 3));
    let end = next_to(first, last);
    assert_eq!(sized_distance(&first, &last), 3);
    assert!(last.is_end(&end));
}

#[test]
fn test_unreachable_never_ends() {
    let data = [0u8; 4];
    let mut c = SliceCursor::new(&data, 0);
    assert_eq!(advance_bounded(&mut c, 3, &Unreachable), 0);
    assert_eq!(c.position(), 3);
}

#[test]
fn test_counted_cursor_over_output() {
    let mut out = Vec::new();
    let mut c = Counted::new(BackInserter::new(&mut out), 3);
    while !DefaultSentinel.is_end(&c) {
        c.write(7);
        c.advance();
    }
    assert_eq!(out, [7, 7, 7]);
}
