//! # Layer 4: Indirect invocation
//!
//! Algorithms never call a predicate on a cursor directly: they read the
//! element, pass it through a projection, then hand the projected value to
//! the callable. The helpers here are that plumbing.
//!
//! Callables are ordinary closures, function items and method paths
//! (`str::len`, `Option::is_some`). A member access is a closure
//! (`|p: &Point| p.x`).

use core::cmp::Ordering;

use crate::cursor::{
    Adaptor, BidirectionalCursor, ForwardCursor, RandomAccessCursor, Readable, WeaklyIncrementable,
};

/// The default projection: hands the element through unchanged.
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Calling convention for a callable over an argument tuple.
pub trait Invoke<Args> {
    type Output;

    fn invoke(self, args: Args) -> Self::Output;
}

macro_rules! impl_invoke {
    ($(($($arg:ident),*)),* $(,)?) => {
        $(
            impl<F, R, $($arg),*> Invoke<($($arg,)*)> for F
            where
                F: FnOnce($($arg),*) -> R,
            {
                type Output = R;

                #[inline]
                #[allow(non_snake_case)]
                fn invoke(self, ($($arg,)*): ($($arg,)*)) -> R {
                    self($($arg),*)
                }
            }
        )*
    };
}

impl_invoke! {
    (),
    (A),
    (A, B),
    (A, B, C),
    (A, B, C, D),
}

/// Call `f` with the arguments packed in `args`.
///
/// ```
/// use tola_ranges::invoke::invoke;
///
/// assert_eq!(invoke(str::len, ("four",)), 4);
/// assert_eq!(invoke(|a: i32, b: i32| a * b, (6, 7)), 42);
/// ```
#[inline]
pub fn invoke<F: Invoke<Args>, Args>(f: F, args: Args) -> F::Output {
    f.invoke(args)
}

/// Negate a predicate.
#[inline]
pub fn not_fn<A, F: FnMut(A) -> bool>(mut pred: F) -> impl FnMut(A) -> bool {
    move |value| !pred(value)
}

// =============================================================================
// Indirect calls through cursors
// =============================================================================

/// Read `cursor` and project the element.
#[inline]
pub fn projected_read<I, P, U>(cursor: &I, proj: &mut P) -> U
where
    I: Readable,
    P: FnMut(I::Item) -> U,
{
    proj(cursor.read())
}

/// Apply `pred` to the projected element under `cursor`.
#[inline]
pub fn indirect_test<I, F, P, U>(pred: &mut F, proj: &mut P, cursor: &I) -> bool
where
    I: Readable,
    P: FnMut(I::Item) -> U,
    F: FnMut(U) -> bool,
{
    pred(projected_read(cursor, proj))
}

/// A predicate over what cursors of type `I` read.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a predicate over the elements of `{I}`",
    label = "requires `FnMut(<{I} as Readable>::Item) -> bool`"
)]
pub trait IndirectUnaryPredicate<I: Readable>: FnMut(I::Item) -> bool {}
impl<I: Readable, F: FnMut(I::Item) -> bool> IndirectUnaryPredicate<I> for F {}

// =============================================================================
// Projected cursor
// =============================================================================

/// A cursor that reads through a projection.
///
/// Moves exactly like the wrapped cursor, with the same strength up to
/// random access; reads yield `proj(base.read())`. The projection has to be
/// `Fn` because reading takes `&self`.
#[derive(Debug, Clone, Copy)]
pub struct Projected<I, P> {
    base: I,
    proj: P,
}

impl<I, P> Projected<I, P> {
    #[inline]
    pub const fn new(base: I, proj: P) -> Self {
        Self { base, proj }
    }

    #[inline]
    pub fn into_base(self) -> I {
        self.base
    }
}

impl<I, P> Adaptor for Projected<I, P> {
    type Base = I;

    #[inline]
    fn base(&self) -> &I {
        &self.base
    }
}

impl<I: PartialEq, P> PartialEq for Projected<I, P> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl<I: PartialOrd, P> PartialOrd for Projected<I, P> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.base.partial_cmp(&other.base)
    }
}

impl<I: WeaklyIncrementable, P> WeaklyIncrementable for Projected<I, P> {
    #[inline]
    fn advance(&mut self) {
        self.base.advance();
    }
}

impl<I, P, U> Readable for Projected<I, P>
where
    I: Readable,
    P: Fn(I::Item) -> U,
{
    type Item = U;

    #[inline]
    fn read(&self) -> U {
        (self.proj)(self.base.read())
    }
}

impl<I: ForwardCursor, P: Clone> ForwardCursor for Projected<I, P> {}

impl<I: BidirectionalCursor, P: Clone> BidirectionalCursor for Projected<I, P> {
    #[inline]
    fn retreat(&mut self) {
        self.base.retreat();
    }

    #[inline]
    fn random_distance(&self, to: &Self) -> Option<isize> {
        self.base.random_distance(&to.base)
    }
}

impl<I: RandomAccessCursor, P: Clone> RandomAccessCursor for Projected<I, P> {
    #[inline]
    fn offset(&mut self, n: isize) {
        self.base.offset(n);
    }

    #[inline]
    fn distance_to(&self, to: &Self) -> isize {
        self.base.distance_to(&to.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::SliceCursor;

    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_invoke_forms() {
        assert_eq!(invoke(|| 3, ()), 3);
        assert_eq!(invoke(i32::abs, (-4,)), 4);
        assert_eq!(invoke(|p: &Point| p.y, (&Point { x: 1, y: 2 },)), 2);
        assert_eq!(invoke(|a: u8, b: u8, c: u8| a + b + c, (1, 2, 3)), 6);
    }

    #[test]
    fn test_indirect_test_projects_first() {
        let points = [Point { x: 1, y: -1 }, Point { x: -2, y: 5 }];
        let c = SliceCursor::new(&points, 1);
        let mut proj = |p: &Point| p.x;
        assert!(indirect_test(&mut |x: i32| x < 0, &mut proj, &c));
        assert_eq!(projected_read(&c, &mut |p: &Point| p.y), 5);
    }

    #[test]
    fn test_not_fn() {
        let mut odd = not_fn(|x: i32| x % 2 == 0);
        assert!(odd(3));
        assert!(!odd(4));
    }

    #[test]
    fn test_projected_cursor_keeps_position() {
        let data = [1, 2, 3];
        let mut c = Projected::new(SliceCursor::new(&data, 0), |x: &i32| x * 10);
        let start = c;
        c.offset(2);
        assert_eq!(c.read(), 30);
        assert_eq!(start.distance_to(&c), 2);
        assert_eq!(c.base().position(), 2);
    }
}
