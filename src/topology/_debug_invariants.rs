//! Local consistency checks used inside the editing algorithms.
//!
//! These guard assumptions that follow from preceding logic rather than from
//! caller input, so they are assertions and not reported errors.

use super::index::LinkIndex;
use super::tree::Tree;

/// Asserts a local condition while invariant checking is on.
macro_rules! inv_assert {
    ($cond:expr $(, $($msg:tt)+)?) => {
        if $crate::debug_invariants::INVARIANTS_CHECKED {
            assert!($cond $(, $($msg)+)?);
        }
    };
}

/// Asserts local equality while invariant checking is on.
macro_rules! inv_assert_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        if $crate::debug_invariants::INVARIANTS_CHECKED {
            assert_eq!($lhs, $rhs);
        }
    };
}

/// Re-validates the whole tree after an edit.
macro_rules! assert_tree_valid {
    ($tree:expr) => {
        $crate::debug_invariants::DebugInvariants::debug_assert_invariants(&*$tree)
    };
}

pub(crate) use {assert_tree_valid, inv_assert, inv_assert_eq};

/// `true` if `link` is in the rotation ring that contains `start`.
pub(crate) fn ring_contains<N, E>(tree: &Tree<N, E>, start: LinkIndex, link: LinkIndex) -> bool {
    let mut cur = start;
    loop {
        if cur == link {
            return true;
        }
        cur = tree.link(cur).next();
        if cur == start {
            return false;
        }
    }
}
