//! Shorthand constructors for tests.

use std::convert::TryFrom;

use crate::layout::{Goal, Layout};
use crate::topology::SIZE;

pub(crate) fn layout(values: [u8; SIZE]) -> Layout {
    Layout::try_from(values).unwrap()
}

pub(crate) fn goal(values: [u8; SIZE]) -> Goal {
    Goal::from(layout(values))
}

/// Exactly one blank, and every value 0-8 present once.
pub(crate) fn permutation(values: &[u8; SIZE]) -> bool {
    let mut sorted = *values;
    sorted.sort_unstable();
    sorted == [0, 1, 2, 3, 4, 5, 6, 7, 8]
}
