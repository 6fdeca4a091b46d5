use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;

use alloc::boxed::Box;

use crate::raw::{Node, Tree};

/// An ordered multiset based on an unbalanced binary search tree.
///
/// See [`BSTreeMap`]'s documentation for a discussion of the underlying tree:
/// one heap-allocated node per element, exclusively owned child links, and no
/// rebalancing, so every O(height) operation degrades to O(n) for sorted
/// insertion order.
///
/// Unlike a conventional set, **duplicates are retained**. Insertion routes
/// elements comparing less than *or equal to* the current node into the left
/// subtree, so an element equal to ones already present gets its own node,
/// placed to the left of them. [`contains`] uses strict three-way comparison
/// and stops at the first exact match, so it is unaffected by how duplicates
/// are distributed.
///
/// There is no removal operation and no iterator surface; the externally
/// visible state is reached through [`contains`], [`len`], and
/// [`is_empty`], and the whole tree is discarded at once with [`clear`].
///
/// It is a logic error for an item to be modified in such a way that the item's
/// ordering relative to any other item, as determined by the [`Ord`] trait,
/// changes while it is in the set. This is normally only possible through
/// [`Cell`], [`RefCell`], global state, I/O, or unsafe code. The behavior
/// resulting from such a logic error is not specified, but will be encapsulated
/// to the `BSTreeSet` that observed the logic error and not result in undefined
/// behavior.
///
/// [`BSTreeMap`]: crate::BSTreeMap
/// [`contains`]: BSTreeSet::contains
/// [`len`]: BSTreeSet::len
/// [`is_empty`]: BSTreeSet::is_empty
/// [`clear`]: BSTreeSet::clear
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
///
/// # Examples
///
/// ```
/// use bstree::BSTreeSet;
///
/// // Type inference lets us omit an explicit type signature (which
/// // would be `BSTreeSet<&str>` in this example).
/// let mut books = BSTreeSet::new();
///
/// // Add some books.
/// books.add("A Dance With Dragons");
/// books.add("To Kill a Mockingbird");
/// books.add("The Odyssey");
/// books.add("The Great Gatsby");
///
/// // Check for a specific one.
/// if !books.contains("The Winds of Winter") {
///     println!("We have {} books, but The Winds of Winter ain't one.",
///              books.len());
/// }
///
/// // A second copy is kept, not deduplicated.
/// books.add("The Odyssey");
/// assert_eq!(books.len(), 5);
/// ```
pub struct BSTreeSet<T> {
    tree: Tree<T>,
}

impl<T> BSTreeSet<T> {
    /// Makes a new, empty `BSTreeSet`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTreeSet;
    ///
    /// let mut set: BSTreeSet<i32> = BSTreeSet::new();
    /// assert!(set.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn new() -> Self {
        BSTreeSet { tree: Tree::new() }
    }

    /// Adds a value to the set.
    ///
    /// A new node is created unconditionally and the length always grows by one,
    /// even if an equal value is already present. Equal values route left during
    /// descent, so the newest copy ends up to the left of the ones already in the
    /// tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTreeSet;
    ///
    /// let mut set = BSTreeSet::new();
    /// set.add(2);
    /// set.add(2);
    /// set.add(2);
    /// assert_eq!(set.len(), 3);
    /// assert!(set.contains(&2));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height) - O(log n) for well-shuffled insertion order, O(n) worst case.
    pub fn add(&mut self, value: T)
    where
        T: Ord,
    {
        let mut cursor = &mut self.tree.root;
        while let Some(node) = cursor {
            cursor = match value.cmp(&node.item) {
                Ordering::Less | Ordering::Equal => &mut node.left,
                Ordering::Greater => &mut node.right,
            };
        }
        *cursor = Some(Box::new(Node::new(value)));
        self.tree.len += 1;
    }

    /// Returns `true` if the set contains an element equal to the value.
    ///
    /// Descent uses strict three-way comparison and stops at the first exact
    /// match, independent of how many duplicates exist.
    ///
    /// The value may be any borrowed form of the set's element type, but the
    /// ordering on the borrowed form *must* match the ordering on the element
    /// type.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTreeSet;
    ///
    /// let mut set = BSTreeSet::new();
    /// set.add(1);
    /// set.add(2);
    /// assert_eq!(set.contains(&1), true);
    /// assert_eq!(set.contains(&4), false);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height) - O(log n) for well-shuffled insertion order, O(n) worst case.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        let mut cursor = self.tree.root.as_deref();
        while let Some(node) = cursor {
            match value.cmp(node.item.borrow()) {
                Ordering::Less => cursor = node.left.as_deref(),
                Ordering::Greater => cursor = node.right.as_deref(),
                Ordering::Equal => return true,
            }
        }
        false
    }

    /// Clears the set, removing all elements.
    ///
    /// Teardown is iterative, so even a degenerate chain frees in constant stack
    /// space.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTreeSet;
    ///
    /// let mut set = BSTreeSet::new();
    /// set.add(1);
    /// set.clear();
    /// assert!(set.is_empty());
    /// assert!(!set.contains(&1));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns the number of elements in the set, counting duplicates.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTreeSet;
    ///
    /// let mut set = BSTreeSet::new();
    /// assert_eq!(set.len(), 0);
    /// set.add(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the set contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTreeSet;
    ///
    /// let mut set = BSTreeSet::new();
    /// assert!(set.is_empty());
    /// set.add(1);
    /// assert!(!set.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}

impl<T> Default for BSTreeSet<T> {
    /// Creates an empty `BSTreeSet`.
    fn default() -> Self {
        BSTreeSet::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for BSTreeSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        self.tree.visit_in_order(|item| {
            set.entry(item);
        });
        set.finish()
    }
}

impl<T: Ord> FromIterator<T> for BSTreeSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = BSTreeSet::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord> Extend<T> for BSTreeSet<T> {
    /// Adds every element in order; duplicates each get their own node.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}
