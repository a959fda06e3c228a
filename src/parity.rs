//! Solvability precondition checked before any search runs.
//!
//! A blank move never changes the parity of the inversion count on
//! a board three tiles wide, so a start layout can only reach goals
//! whose inversion count has the same parity.

use puzzle::Layout;

use crate::AppError;

pub fn parities_match(start: &Layout, goal: &Layout) -> bool {
    start.inversions() % 2 == goal.inversions() % 2
}

/// Fail with [AppError::ParityMismatch] when the goal is unreachable.
pub fn check(start: &Layout, goal: &Layout) -> Result<(), AppError> {
    if parities_match(start, goal) {
        Ok(())
    } else {
        Err(AppError::ParityMismatch(start.inversions(), goal.inversions()))
    }
}
