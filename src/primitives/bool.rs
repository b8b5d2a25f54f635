//! Type-level boolean logic.
//!
//! Core types: `Present` (true), `Absent` (false), `Bool` trait.
//! Sequences use these to carry their borrow-safety classification.

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;

    /// Type-level conditional: If<Then, Else> (General Type Selector)
    type If<Then, Else>;

    /// Logical AND
    type And<Other: Bool>: Bool;

    /// Value-level counterpart of `If`.
    ///
    /// `Present` keeps `then`; `Absent` discards it and builds the
    /// replacement from `otherwise`.
    fn select<Then, Else>(then: Then, otherwise: impl FnOnce() -> Else) -> Self::If<Then, Else>;
}

/// Type-level True.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Present;

/// Type-level False.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
    type If<Then, Else> = Then;

    type And<Other: Bool> = Other;

    #[inline(always)]
    fn select<Then, Else>(then: Then, _otherwise: impl FnOnce() -> Else) -> Then {
        then
    }
}

impl Bool for Absent {
    const VALUE: bool = false;
    type If<Then, Else> = Else;

    type And<Other: Bool> = Absent;

    #[inline(always)]
    fn select<Then, Else>(_then: Then, otherwise: impl FnOnce() -> Else) -> Else {
        otherwise()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logic_tables() {
        assert!(<<Present as Bool>::And<Present> as Bool>::VALUE);
        assert!(!<<Present as Bool>::And<Absent> as Bool>::VALUE);
        assert!(!<<Absent as Bool>::And<Present> as Bool>::VALUE);
        assert!(!<<Absent as Bool>::And<Absent> as Bool>::VALUE);
    }

    #[test]
    fn test_select_keeps_or_replaces() {
        let kept: u8 = Present::select(7u8, || "gone");
        let replaced: &str = Absent::select(7u8, || "gone");
        assert_eq!(kept, 7);
        assert_eq!(replaced, "gone");

        let _: <Present as Bool>::If<u8, ()> = 1u8;
    }
}
