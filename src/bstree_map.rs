use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::hash::Hash;

use alloc::boxed::Box;
use alloc::vec::Vec;

use hashbrown::HashSet;

use crate::raw::{Node, Tree};

/// An ordered map based on an unbalanced [binary search tree].
///
/// Given a key type with a [total order], an ordered map stores its entries in key
/// order. That means that keys must be of a type that implements the [`Ord`] trait,
/// such that two keys can always be compared to determine their [`Ordering`].
/// Examples of keys with a total order are strings with lexicographical order,
/// and numbers with their natural order.
///
/// Each entry occupies one heap-allocated node that exclusively owns its two child
/// links. Inserting an existing key overwrites the stored value in place without
/// creating a node; inserting a new key creates exactly one node at the point where
/// descent ran out of tree. The tree is **never rebalanced**: its height is a
/// direct function of insertion order, so every O(height) operation degrades to
/// O(n) when keys arrive in sorted order. That limitation is deliberate - callers
/// that need balanced worst cases want a different structure, not a flag on this
/// one.
///
/// There is no removal operation. The mutating surface is [`insert`], which either
/// creates or overwrites, and [`clear`], which discards the whole tree. There is
/// likewise no iterator surface: the ordered contents are obtained in bulk via
/// [`keys_in_order`] and [`values_in_order`], and the distinct keys without any
/// ordering guarantee via [`key_set`].
///
/// It is a logic error for a key to be modified in such a way that the key's
/// ordering relative to any other key, as determined by the [`Ord`] trait, changes
/// while it is in the map. This is normally only possible through [`Cell`],
/// [`RefCell`], global state, I/O, or unsafe code. The behavior resulting from
/// such a logic error is not specified, but will be encapsulated to the
/// `BSTreeMap` that observed the logic error and not result in undefined behavior.
///
/// [`insert`]: BSTreeMap::insert
/// [`clear`]: BSTreeMap::clear
/// [`keys_in_order`]: BSTreeMap::keys_in_order
/// [`values_in_order`]: BSTreeMap::values_in_order
/// [`key_set`]: BSTreeMap::key_set
/// [binary search tree]: https://en.wikipedia.org/wiki/Binary_search_tree
/// [total order]: https://en.wikipedia.org/wiki/Total_order
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
///
/// # Examples
///
/// ```
/// use bstree::BSTreeMap;
///
/// // type inference lets us omit an explicit type signature (which
/// // would be `BSTreeMap<&str, &str>` in this example).
/// let mut movie_reviews = BSTreeMap::new();
///
/// // review some movies.
/// movie_reviews.insert("Office Space",       "Deals with real issues in the workplace.");
/// movie_reviews.insert("Pulp Fiction",       "Masterpiece.");
/// movie_reviews.insert("The Godfather",      "Very enjoyable.");
/// movie_reviews.insert("The Blues Brothers", "Eye lyked it a lot.");
///
/// // check for a specific one.
/// if !movie_reviews.contains_key("Les Miserables") {
///     println!("We've got {} reviews, but Les Miserables ain't one.",
///              movie_reviews.len());
/// }
///
/// // look up the values associated with some keys.
/// let to_find = ["Up!", "Office Space"];
/// for movie in &to_find {
///     match movie_reviews.get(movie) {
///        Some(review) => println!("{movie}: {review}"),
///        None => println!("{movie} is unreviewed.")
///     }
/// }
///
/// // extract everything in title order.
/// for (movie, review) in movie_reviews
///     .keys_in_order()
///     .into_iter()
///     .zip(movie_reviews.values_in_order())
/// {
///     println!("{movie}: \"{review}\"");
/// }
/// ```
///
/// A `BSTreeMap` with a known list of entries can be initialized from an array:
///
/// ```
/// use bstree::BSTreeMap;
///
/// let solar_distance = BSTreeMap::from_iter([
///     ("Mercury", 0.4),
///     ("Venus", 0.7),
///     ("Earth", 1.0),
///     ("Mars", 1.5),
/// ]);
/// assert_eq!(solar_distance.len(), 4);
/// ```
pub struct BSTreeMap<K, V> {
    tree: Tree<(K, V)>,
}

impl<K, V> BSTreeMap<K, V> {
    /// Makes a new, empty `BSTreeMap`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTreeMap;
    ///
    /// let mut map = BSTreeMap::new();
    /// assert!(map.is_empty());
    ///
    /// // entries can now be inserted into the empty map
    /// map.insert(1, "a");
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn new() -> Self {
        BSTreeMap { tree: Tree::new() }
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already had this key present, the stored value is overwritten in
    /// place; no node is created or moved and the length does not change. The
    /// previous value is discarded - unlike [`BTreeMap::insert`], nothing is
    /// returned.
    ///
    /// Otherwise descent ends at an empty child slot, exactly one new node is
    /// created there, and the length grows by one.
    ///
    /// [`BTreeMap::insert`]: https://doc.rust-lang.org/std/collections/struct.BTreeMap.html#method.insert
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTreeMap;
    ///
    /// let mut map = BSTreeMap::new();
    /// map.insert(37, "a");
    /// assert_eq!(map.len(), 1);
    ///
    /// map.insert(37, "c");
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map.get(&37), Some(&"c"));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height) - O(log n) for well-shuffled insertion order, O(n) worst case.
    pub fn insert(&mut self, key: K, value: V)
    where
        K: Ord,
    {
        let mut cursor = &mut self.tree.root;
        while let Some(node) = cursor {
            match key.cmp(&node.item.0) {
                Ordering::Less => cursor = &mut node.left,
                Ordering::Greater => cursor = &mut node.right,
                Ordering::Equal => {
                    node.item.1 = value;
                    return;
                }
            }
        }
        *cursor = Some(Box::new(Node::new((key, value))));
        self.tree.len += 1;
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the map's key type, but the ordering
    /// on the borrowed form *must* match the ordering on the key type.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTreeMap;
    ///
    /// let mut map = BSTreeMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height) - O(log n) for well-shuffled insertion order, O(n) worst case.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        let mut cursor = self.tree.root.as_deref();
        while let Some(node) = cursor {
            match key.cmp(node.item.0.borrow()) {
                Ordering::Less => cursor = node.left.as_deref(),
                Ordering::Greater => cursor = node.right.as_deref(),
                Ordering::Equal => return Some(&node.item.1),
            }
        }
        None
    }

    /// Returns `true` if the map contains a value for the specified key.
    ///
    /// This is literally defined as `self.get(key).is_some()`.
    ///
    /// The key may be any borrowed form of the map's key type, but the ordering
    /// on the borrowed form *must* match the ordering on the key type.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTreeMap;
    ///
    /// let mut map = BSTreeMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.contains_key(&1), true);
    /// assert_eq!(map.contains_key(&2), false);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height) - O(log n) for well-shuffled insertion order, O(n) worst case.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.get(key).is_some()
    }

    /// Clears the map, removing all entries.
    ///
    /// Teardown is iterative, so even a degenerate chain frees in constant stack
    /// space.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTreeMap;
    ///
    /// let mut map = BSTreeMap::new();
    /// map.insert(1, "a");
    /// map.clear();
    /// assert!(map.is_empty());
    /// assert_eq!(map.get(&1), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns the number of entries in the map.
    ///
    /// The count is maintained on insertion, not recomputed.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTreeMap;
    ///
    /// let mut map = BSTreeMap::new();
    /// assert_eq!(map.len(), 0);
    /// map.insert(1, "a");
    /// assert_eq!(map.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the map contains no entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTreeMap;
    ///
    /// let mut map = BSTreeMap::new();
    /// assert!(map.is_empty());
    /// map.insert(1, "a");
    /// assert!(!map.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns references to all keys in ascending order.
    ///
    /// The result has no duplicates, its length equals [`len`](BSTreeMap::len),
    /// and its i-th entry pairs with the i-th entry of
    /// [`values_in_order`](BSTreeMap::values_in_order). The traversal does not
    /// mutate the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTreeMap;
    ///
    /// let mut map = BSTreeMap::new();
    /// map.insert(3, "c");
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    /// assert_eq!(map.keys_in_order(), [&1, &2, &3]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn keys_in_order(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len());
        self.tree.visit_in_order(|(key, _)| keys.push(key));
        keys
    }

    /// Returns references to all values, ordered by their keys ascending.
    ///
    /// The result's length equals [`len`](BSTreeMap::len) and its i-th entry is
    /// the value stored under the i-th entry of
    /// [`keys_in_order`](BSTreeMap::keys_in_order).
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTreeMap;
    ///
    /// let mut map = BSTreeMap::new();
    /// map.insert(3, "c");
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    /// assert_eq!(map.values_in_order(), [&"a", &"b", &"c"]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn values_in_order(&self) -> Vec<&V> {
        let mut values = Vec::with_capacity(self.len());
        self.tree.visit_in_order(|(_, value)| values.push(value));
        values
    }

    /// Returns the distinct keys as a hash set, with **no ordering guarantee**.
    ///
    /// This deliberately discards the tree's sort order; callers that want the
    /// ascending sequence use [`keys_in_order`](BSTreeMap::keys_in_order)
    /// instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTreeMap;
    ///
    /// let mut map = BSTreeMap::new();
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// let keys = map.key_set();
    /// assert_eq!(keys.len(), 2);
    /// assert!(keys.contains(&1));
    /// assert!(keys.contains(&2));
    /// assert!(!keys.contains(&3));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn key_set(&self) -> HashSet<&K>
    where
        K: Hash + Eq,
    {
        let mut keys = HashSet::with_capacity(self.len());
        self.tree.visit_in_order(|(key, _)| {
            keys.insert(key);
        });
        keys
    }
}

impl<K, V> Default for BSTreeMap<K, V> {
    /// Creates an empty `BSTreeMap`.
    fn default() -> Self {
        BSTreeMap::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for BSTreeMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        self.tree.visit_in_order(|(key, value)| {
            map.entry(key, value);
        });
        map.finish()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for BSTreeMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = BSTreeMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for BSTreeMap<K, V> {
    /// Inserts every pair in order; later duplicates overwrite earlier ones.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
