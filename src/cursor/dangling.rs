/// Returned in place of a cursor when the sequence it would point into was
/// owned by the call and no longer exists.
///
/// Carries no position; there is nothing to read or compare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Dangling;
