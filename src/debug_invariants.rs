//! Self-checks for trees after structural edits.
//!
//! Checking is on in debug builds and with the `strict-invariants` feature.
//! Everywhere else the checks still type-check but are optimised away.

use crate::tree_error::TreeError;

/// `true` when edits re-validate the tree and local assertions fire.
pub const INVARIANTS_CHECKED: bool = cfg!(any(debug_assertions, feature = "strict-invariants"));

/// A structure that can validate its own invariants.
pub trait DebugInvariants {
    /// Returns the first broken invariant, if any.
    fn validate_invariants(&self) -> Result<(), TreeError>;

    /// Panics on a broken invariant when [`INVARIANTS_CHECKED`] is set.
    fn debug_assert_invariants(&self) {
        if INVARIANTS_CHECKED
            && let Err(e) = self.validate_invariants()
        {
            panic!("[invariants] {e}");
        }
    }
}
