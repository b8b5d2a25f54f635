//! Algorithm tests over slices, mutable slices and views.

use tola_ranges::algorithm::InOut;
use tola_ranges::prelude::*;
use tola_ranges::view::{self, single};

// =============================================================================
// Quantifiers
// =============================================================================

#[test]
fn test_quantifiers_on_empty() {
    let empty: &[i32] = &[];
    assert!(all_of_in(empty, |_: &i32| false, identity));
    assert!(none_of_in(empty, |_: &i32| true, identity));
    assert!(!any_of_in(empty, |_: &i32| true, identity));
}

#[test]
fn test_quantifiers_with_projection() {
    let words = ["apple", "fig", "kiwi"];
    assert!(all_of_in(&words[..], |n: usize| n >= 3, |w: &&str| w.len()));
    assert!(any_of_in(&words[..], |n: usize| n == 4, |w: &&str| w.len()));
    assert!(none_of_in(&words[..], |n: usize| n > 5, |w: &&str| w.len()));
}

#[test]
fn test_all_of_stops_at_first_failure() {
    let data = [2, 4, 5, 6, 7];
    let mut calls = 0;
    let result = all_of_in(
        &data[..],
        |x: &i32| {
            calls += 1;
            x % 2 == 0
        },
        identity,
    );
    assert!(!result);
    assert_eq!(calls, 3);
}

// =============================================================================
// Counting and searching
// =============================================================================

#[test]
fn test_count_and_complement_cover_everything() {
    let data = [1, 2, 3, 4, 5, 6, 7];
    let is_odd = |x: &i32| x % 2 != 0;
    let odd = count_if_in(&data[..], is_odd, identity);
    let even = count_if_in(&data[..], not_fn(is_odd), identity);
    assert_eq!(odd, 4);
    assert_eq!(odd + even, data.len() as isize);
}

#[test]
fn test_count_value_with_projection() {
    let pairs = [(1, 'a'), (2, 'b'), (1, 'c')];
    assert_eq!(count_in(&pairs[..], &1, |p: &(i32, char)| p.0), 2);
    assert_eq!(count_in(&pairs[..], &'b', |p: &(i32, char)| p.1), 1);
}

#[test]
fn test_find_family() {
    let data = [3, 8, 1, 8];
    let found = find_in(&data[..], &8, identity);
    assert_eq!(found.position(), 1);

    let first_small = find_if_in(&data[..], |x: &i32| *x < 3, identity);
    assert_eq!(first_small.position(), 2);

    let first_not_odd = find_if_not_in(&data[..], |x: &i32| x % 2 != 0, identity);
    assert_eq!(*first_not_odd.read(), 8);

    let missing = find_in(&data[..], &42, identity);
    assert_eq!(missing.position(), data.len());
}

#[test]
fn test_find_by_borrowed_key() {
    let names = [String::from("ann"), String::from("bo")];
    let hit = find_in(&names[..], "bo", String::as_str);
    assert_eq!(hit.position(), 1);
}

// =============================================================================
// Copying
// =============================================================================

#[test]
fn test_copy_into_mutable_slice() {
    let src = [1, 2, 3];
    let mut dst = [0; 5];
    let InOut { input, output } = copy_in(&src[..], SliceMut::new(&mut dst).start());
    assert_eq!(input.position(), 3);
    assert_eq!(output.position(), 3);
    assert_eq!(dst, [1, 2, 3, 0, 0]);
}

#[test]
fn test_copy_n_non_positive_is_a_no_op() {
    let src = [1, 2, 3];
    let mut dst = [9; 3];
    let first = SliceCursor::new(&src, 0);
    for n in [0, -1, -100] {
        let out = SliceMut::new(&mut dst).start();
        let InOut { input, output } = copy_n(first, n, out);
        assert!(input == first);
        assert_eq!(output.position(), 0);
    }
    assert_eq!(dst, [9, 9, 9]);
}

#[test]
fn test_copy_to_back_inserter() {
    let src = ["x", "y"];
    let mut out: Vec<&str> = Vec::new();
    copy_in(&src[..], BackInserter::new(&mut out));
    assert_eq!(out, ["x", "y"]);
}

#[test]
fn test_transform_and_for_each() {
    let src = [1, 2, 3];
    let mut out = Vec::new();
    transform_in(&src[..], BackInserter::new(&mut out), |x: i32| x * x, |x: &i32| *x);
    assert_eq!(out, [1, 4, 9]);

    let mut sum = 0;
    let done = for_each_in(&out[..], |x: &i32| sum += x, identity);
    assert_eq!(done.input.position(), 3);
    assert_eq!(sum, 14);
}

// =============================================================================
// Filling and generating
// =============================================================================

#[test]
fn test_fill_and_fill_n() {
    let mut data = [0; 6];
    let end = fill_in(SliceMut::new(&mut data), &4);
    assert_eq!(end.position(), 6);
    assert_eq!(data, [4; 6]);

    let stop = fill_n(SliceMut::new(&mut data).start(), 2, &1);
    assert_eq!(stop.position(), 2);
    assert_eq!(data, [1, 1, 4, 4, 4, 4]);
}

#[test]
fn test_generate_and_generate_n() {
    let mut data = [0; 4];
    let mut next = 0;
    generate_in(SliceMut::new(&mut data), || {
        next += 10;
        next
    });
    assert_eq!(data, [10, 20, 30, 40]);

    let mut out = Vec::new();
    let mut k = 0;
    generate_n(BackInserter::new(&mut out), 3, || {
        k += 1;
        k
    });
    assert_eq!(out, [1, 2, 3]);
}

// =============================================================================
// Reverse
// =============================================================================

#[test]
fn test_reverse_random_access_round_trip() {
    let original = [1, 2, 3, 4, 5, 6, 7];
    let mut data = original;
    reverse_in(SliceMut::new(&mut data));
    assert_eq!(data, [7, 6, 5, 4, 3, 2, 1]);
    reverse_in(SliceMut::new(&mut data));
    assert_eq!(data, original);
}

#[test]
fn test_reverse_bidirectional_through_filter() {
    // Filtering hides the distance, so this takes the converging path.
    let mut data = [1, 10, 2, 20, 3, 30, 4];
    let small = SliceMut::new(&mut data).filter(|x: i32| x < 10);
    reverse_in(small);
    assert_eq!(data, [4, 10, 3, 20, 2, 30, 1]);

    let mut even = [1, 2, 3, 4];
    reverse_in(SliceMut::new(&mut even).filter(|_: i32| true));
    assert_eq!(even, [4, 3, 2, 1]);
}

#[test]
fn test_reverse_converging_walk_every_length() {
    for n in 0..8 {
        let mut data: Vec<i32> = (0..n).collect();
        reverse_in(SliceMut::new(&mut data).filter(|_: i32| true));
        let expected: Vec<i32> = (0..n).rev().collect();
        assert_eq!(data, expected, "length {n}");
    }
}

#[test]
fn test_reverse_copy() {
    let src = [1, 2, 3];
    let mut out: Vec<i32> = Vec::new();
    let InOut { input, .. } = reverse_copy_in(&src[..], BackInserter::new(&mut out));
    assert_eq!(input.position(), 3);
    assert_eq!(out, [3, 2, 1]);
}

// =============================================================================
// Comparing
// =============================================================================

#[test]
fn test_mismatch_and_equal() {
    let a = [1, 2, 3, 4];
    let b = [1, 2, 9];
    let stop = mismatch_in(&a[..], &b[..], |x: &i32, y: &i32| x == y, identity, identity);
    assert_eq!(stop.input1.position(), 2);
    assert_eq!(stop.input2.position(), 2);

    assert!(equal_in(&a[..], &a[..], |x: &i32, y: &i32| x == y, identity, identity));
    assert!(!equal_in(&a[..], &a[..3], |x: &i32, y: &i32| x == y, identity, identity));
    let tens = [10, 20, 30, 40];
    assert!(equal_in(&a[..], &tens[..], |x: i32, y: i32| x * 10 == y, |x: &i32| *x, |y: &i32| *y));
}

// =============================================================================
// Borrow safety
// =============================================================================

#[test]
fn test_owning_sequence_yields_dangling() {
    let result: Dangling = find_in(single(5), &5, identity);
    assert_eq!(result, Dangling);

    let mut out = Vec::new();
    let InOut { input, .. } = copy_in(view::repeat_n(1u8, 3), BackInserter::new(&mut out));
    assert_eq!(input, Dangling);
    assert_eq!(out, [1, 1, 1]);
}

#[test]
fn test_borrowed_view_yields_cursor() {
    let data = [1, 2, 3];
    let hit = find_in(view::take(&data[..], 2), &2, identity);
    assert_eq!(*hit.read(), 2);
    assert_eq!(hit.remaining(), 1);
}
