//! Disjoint Set (Union-Find) over dense integer ids.
//!
//! # Performance
//!
//! - Parent pointers live in a `Cell<usize>` vector so `find` can compress
//!   paths through a shared reference.
//! - Path compression and union-by-rank keep operations nearly constant time.

use std::cell::Cell;

/// A Disjoint Set (Union-Find) data structure.
#[derive(Debug, Clone, Default)]
pub struct DisjointSet {
    /// Parent pointers.
    /// Uses `Cell` to allow path compression with shared reference.
    parent: Vec<Cell<usize>>,
    /// Rank (depth upper bound) for union-by-rank.
    rank: Vec<u8>,
}

impl DisjointSet {
    /// Creates a new empty disjoint set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates `n` singleton sets with ids `0..n`.
    pub fn with_len(n: usize) -> Self {
        Self {
            parent: (0..n).map(Cell::new).collect(),
            rank: vec![0; n],
        }
    }

    /// Creates a new set containing a single element.
    /// Returns the representative ID of the new set.
    pub fn make_set(&mut self) -> usize {
        let id = self.parent.len();
        self.parent.push(Cell::new(id));
        self.rank.push(0);
        id
    }

    /// Finds the representative of the set containing `id`, with path compression.
    ///
    /// # Panics
    /// Panics if `id >= self.len()`.
    pub fn find(&self, id: usize) -> usize {
        // Two passes: locate the root, then point every node on the path at it.
        let mut root = id;
        loop {
            let parent = self.parent[root].get();
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut curr = id;
        while curr != root {
            let parent = self.parent[curr].replace(root);
            curr = parent;
        }

        root
    }

    /// Returns `true` if `a` and `b` are in the same set.
    pub fn same_set(&self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Unites the sets containing `id1` and `id2`.
    /// Returns `true` if they were in different sets, `false` otherwise.
    pub fn union(&mut self, id1: usize, id2: usize) -> bool {
        let root1 = self.find(id1);
        let root2 = self.find(id2);

        if root1 == root2 {
            return false;
        }

        let rank1 = self.rank[root1];
        let rank2 = self.rank[root2];

        if rank1 < rank2 {
            self.parent[root1].set(root2);
        } else if rank1 > rank2 {
            self.parent[root2].set(root1);
        } else {
            // Same rank, attach 2 to 1 and increment rank of 1
            self.parent[root2].set(root1);
            self.rank[root1] = self.rank[root1].saturating_add(1);
        }

        true
    }

    /// Returns the number of elements in the disjoint set.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if empty.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
