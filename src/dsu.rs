//! Union-find (disjoint-set) over dense element ids.
//!
//! Elements are registered one at a time with [`DisjointSet::make_set`],
//! which hands out contiguous ids starting from `0`.  Both standard
//! optimisations are applied: `find` compresses the traversed chain onto the
//! root, and `union` attaches the smaller tree under the larger root, so a
//! sequence of operations runs in near-constant amortised time per call.

/// A partition of the registered elements into disjoint sets.
///
/// Calling [`find`](Self::find) or [`union`](Self::union) with an id that was
/// never returned by [`make_set`](Self::make_set) is a contract violation and
/// panics.
#[derive(Clone, Debug, Default)]
pub struct DisjointSet {
    /// Parent of each element; roots point at themselves.
    parent: Vec<usize>,
    /// Element count of the set rooted at each id (meaningful for roots only).
    size: Vec<u32>,
}

impl DisjointSet {
    /// Create a structure with no registered elements.
    pub fn new() -> Self {
        Self { parent: Vec::new(), size: Vec::new() }
    }

    /// Like [`new`](Self::new), with storage reserved for `n` elements.
    pub fn with_capacity(n: usize) -> Self {
        Self { parent: Vec::with_capacity(n), size: Vec::with_capacity(n) }
    }

    /// Number of registered elements.
    #[inline] pub fn len(&self) -> usize { self.parent.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.parent.is_empty() }

    /// Register a new element as its own singleton set and return its id.
    ///
    /// Ids are assigned contiguously (`0`, `1`, `2`, …), so an element can
    /// never be registered twice.
    pub fn make_set(&mut self) -> usize {
        let id = self.parent.len();
        self.parent.push(id);
        self.size.push(1);
        id
    }

    /// Representative of the set containing `x`.
    ///
    /// Every element on the traversed chain is repointed directly at the
    /// root, so repeated lookups flatten the structure.
    pub fn find(&mut self, x: usize) -> usize {
        assert!(x < self.parent.len(), "element {x} is not registered");

        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != node {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merge the sets containing `x` and `y`.
    ///
    /// Returns `false` (and changes nothing) when the two are already in the
    /// same set, `true` when two distinct sets were merged.  The smaller set
    /// is attached under the larger set's root.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let mut a = self.find(x);
        let mut b = self.find(y);
        if a == b {
            return false;
        }

        if self.size[a] < self.size[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a;
        self.size[a] += self.size[b];
        true
    }

    /// True if `x` and `y` currently belong to the same set.
    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }
}
