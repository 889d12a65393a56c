//! Post-order traversal.
//!
//! Emission of a node is deferred until everything below it has been
//! emitted. The start node comes last; consumers that accumulate per-edge
//! values skip it through [`Visit::is_last_iteration`], as it was not
//! entered through an edge.

use super::{Visit, push_children};
use crate::topology::functions::check_link;
use crate::topology::index::{LinkIndex, NodeIndex};
use crate::topology::subtree::Subtree;
use crate::topology::tree::Tree;
use crate::tree_error::TreeError;

#[derive(Clone, Copy, Debug)]
struct Frame {
    link: LinkIndex,
    start: bool,
    expanded: bool,
}

/// Depth-first iterator yielding each node after the nodes below it.
pub struct Postorder<'a, N, E> {
    tree: &'a Tree<N, E>,
    stack: Vec<Frame>,
    whole: bool,
    lone: bool,
    emitted: bool,
    scratch: Vec<LinkIndex>,
}

impl<'a, N, E> Postorder<'a, N, E> {
    fn with_stack(tree: &'a Tree<N, E>, stack: Vec<Frame>, whole: bool, lone: bool) -> Self {
        Self {
            tree,
            stack,
            whole,
            lone,
            emitted: false,
            scratch: Vec::new(),
        }
    }

    fn start(tree: &'a Tree<N, E>, link: LinkIndex, whole: bool) -> Self {
        let frame = Frame {
            link,
            start: true,
            expanded: false,
        };
        Self::with_stack(tree, vec![frame], whole, false)
    }
}

impl<'a, N, E> Iterator for Postorder<'a, N, E> {
    type Item = Visit<'a, N, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.lone {
            self.lone = false;
            return Some(
                Visit::new(self.tree, None, NodeIndex::new(0), None)
                    .first(true)
                    .last(true),
            );
        }
        loop {
            let top = self.stack.last_mut()?;
            if !top.expanded {
                top.expanded = true;
                let (link, include_entry) = (top.link, top.start && self.whole);
                self.scratch.clear();
                push_children(self.tree, link, include_entry, &mut self.scratch);
                self.stack.extend(self.scratch.iter().map(|&l| Frame {
                    link: l,
                    start: false,
                    expanded: false,
                }));
                continue;
            }
            let frame = *top;
            self.stack.pop();
            let l = self.tree.link(frame.link);
            let edge = if frame.start && self.whole {
                None
            } else {
                Some(l.edge())
            };
            let first = !self.emitted;
            self.emitted = true;
            return Some(
                Visit::new(self.tree, Some(frame.link), l.node(), edge)
                    .first(first)
                    .last(frame.start),
            );
        }
    }
}

/// Post-order over the whole tree, ending at the root.
pub fn postorder<N, E>(tree: &Tree<N, E>) -> Postorder<'_, N, E> {
    match tree.root_link_index() {
        Some(link) if link.get() < tree.link_count() => Postorder::start(tree, link, true),
        Some(_) => Postorder::with_stack(tree, Vec::new(), true, false),
        None => Postorder::with_stack(tree, Vec::new(), true, tree.node_count() == 1),
    }
}

/// Post-order over the whole tree as if it were rooted at `link`'s node,
/// ending there.
pub fn postorder_from<N, E>(
    tree: &Tree<N, E>,
    link: LinkIndex,
) -> Result<Postorder<'_, N, E>, TreeError> {
    check_link(tree, link)?;
    Ok(Postorder::start(tree, link, true))
}

/// Post-order over `subtree` only, ending at its top node.
pub fn postorder_subtree<N, E>(
    tree: &Tree<N, E>,
    subtree: Subtree,
) -> Result<Postorder<'_, N, E>, TreeError> {
    check_link(tree, subtree.link())?;
    Ok(Postorder::start(tree, subtree.link(), false))
}
