//! Uninitialized storage: construction is all or nothing.

use std::cell::Cell;
use std::mem::MaybeUninit;
use std::panic::{AssertUnwindSafe, catch_unwind};

use tola_ranges::cursor::SliceCursor;
use tola_ranges::memory::*;

/// Counts live instances; clones panic once `clones_left` runs out.
struct Tracked<'a> {
    live: &'a Cell<isize>,
    clones_left: &'a Cell<usize>,
}

impl<'a> Tracked<'a> {
    fn new(live: &'a Cell<isize>, clones_left: &'a Cell<usize>) -> Self {
        live.set(live.get() + 1);
        Self { live, clones_left }
    }
}

impl Clone for Tracked<'_> {
    fn clone(&self) -> Self {
        if self.clones_left.get() == 0 {
            panic!("clone budget exhausted");
        }
        self.clones_left.set(self.clones_left.get() - 1);
        Tracked::new(self.live, self.clones_left)
    }
}

impl Drop for Tracked<'_> {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

fn slots<T, const N: usize>() -> [MaybeUninit<T>; N] {
    [const { MaybeUninit::uninit() }; N]
}

#[test]
fn test_fill_rolls_back_on_panic() {
    let live = Cell::new(0);
    let budget = Cell::new(2);
    let proto = Tracked::new(&live, &budget);
    let mut storage = slots::<Tracked<'_>, 5>();

    let result = catch_unwind(AssertUnwindSafe(|| {
        uninitialized_fill(&mut storage, &proto);
    }));

    assert!(result.is_err());
    assert_eq!(live.get(), 1, "only the prototype survives");
}

#[test]
fn test_generate_rolls_back_on_error() {
    let live = Cell::new(0);
    let budget = Cell::new(0);
    let mut storage = slots::<Tracked<'_>, 4>();

    let result = try_uninitialized_generate(&mut storage, |i| {
        if i < 3 { Ok(Tracked::new(&live, &budget)) } else { Err(i) }
    });

    assert_eq!(result.err(), Some(3));
    assert_eq!(live.get(), 0);
}

#[test]
fn test_success_hands_over_ownership() {
    let live = Cell::new(0);
    let budget = Cell::new(usize::MAX);
    let proto = Tracked::new(&live, &budget);
    let mut storage = slots::<Tracked<'_>, 3>();

    let built = uninitialized_fill_n(&mut storage, 2, &proto);
    assert_eq!(built.len(), 2);
    assert_eq!(live.get(), 3);

    unsafe { destroy(&mut storage[..2]) };
    assert_eq!(live.get(), 1);
}

#[test]
fn test_copy_and_default_construct() {
    let src = [String::from("a"), String::from("b"), String::from("c")];
    let mut storage = slots::<String, 2>();
    let copied = uninitialized_copy_n(SliceCursor::new(&src, 1), 5, &mut storage);
    assert_eq!(copied.output, ["b", "c"]);
    assert_eq!(copied.input.position(), 3);
    unsafe { destroy(&mut storage) };

    let mut zeros = slots::<u64, 3>();
    assert_eq!(uninitialized_default_construct(&mut zeros), [0, 0, 0]);
}
