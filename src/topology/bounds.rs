//! Payload capability required from node and edge data.
//!
//! The tree never inspects payloads. It only needs to produce a payload for
//! an entity it creates, seeded from a neighbouring entity's payload, and to
//! deep-copy payloads when the whole tree is cloned.

/// Data attached to every node (`N`) or edge (`E`) of a [`Tree`].
///
/// `recreate` is the data factory used by the insertion algorithms: a new
/// leaf gets `target_node.data().recreate()` and its edge gets the recreated
/// payload of the target's edge towards the root. The default returns a
/// copy; types that prefer fresh values override it, e.g. with
/// `Self::default()`.
///
/// `Default` seeds payloads when there is no neighbour to recreate from,
/// which only happens for the first edge grown out of a single-node tree.
///
/// [`Tree`]: crate::topology::tree::Tree
pub trait TreeData: Clone + Default {
    fn recreate(&self) -> Self {
        self.clone()
    }
}

macro_rules! impl_tree_data {
    ($($t:ty),* $(,)?) => {
        $(impl TreeData for $t {})*
    };
}

impl_tree_data!(
    (),
    bool,
    u8,
    u16,
    u32,
    u64,
    usize,
    i8,
    i16,
    i32,
    i64,
    isize,
    f32,
    f64,
    String,
);

impl<T: Clone> TreeData for Option<T> {}
impl<T: Clone> TreeData for Vec<T> {}
