use alloc::boxed::Box;
use alloc::vec::Vec;

/// An owned child slot. `None` means the slot is empty.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single tree node: one payload and two exclusively owned children.
///
/// The map instantiates this with `T = (K, V)`, the set with `T = E`. There are
/// no parent pointers and no shared ownership, so a node's lifetime ends the
/// moment it is unlinked from its tree.
pub(crate) struct Node<T> {
    pub(crate) item: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(item: T) -> Self {
        Node { item, left: None, right: None }
    }
}

/// The topology shared by both public containers: an optional root plus a
/// length counter.
///
/// `len` counts structurally new nodes only; an update-in-place never touches
/// it. The root being `None` is the one and only "empty" state.
///
/// Comparison rules live in the public containers - this layer only knows how
/// to hold, walk, and tear down nodes.
pub(crate) struct Tree<T> {
    pub(crate) root: Link<T>,
    pub(crate) len: usize,
}

impl<T> Tree<T> {
    pub(crate) const fn new() -> Self {
        Tree { root: None, len: 0 }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Unlinks the whole tree and resets `len` to 0.
    ///
    /// Teardown runs on an explicit worklist rather than letting the `Box`
    /// chain drop recursively; a degenerate chain of any length frees in
    /// constant stack space.
    pub(crate) fn clear(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = Vec::new();
        pending.extend(self.root.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.len = 0;
    }

    /// Visits every payload in order (left subtree, node, right subtree) using
    /// an explicit stack.
    ///
    /// For a tree obeying the BST invariant this yields payloads in ascending
    /// order. The traversal never mutates the tree and is restartable.
    pub(crate) fn visit_in_order<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a T),
    {
        let mut stack: Vec<&'a Node<T>> = Vec::new();
        let mut cursor = self.root.as_deref();
        loop {
            while let Some(node) = cursor {
                stack.push(node);
                cursor = node.left.as_deref();
            }
            let Some(node) = stack.pop() else { break };
            visit(&node.item);
            cursor = node.right.as_deref();
        }
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}
