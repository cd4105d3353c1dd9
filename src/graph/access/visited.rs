//! Visited sets for graph traversals.
//!
//! `VisitedSet` is a dense, word-packed bitset sized to the vertex count.
//! Lookups past the end report "not visited" and `try_visit` refuses them,
//! which lets traversals accept a start vertex that is not in the graph.

const WORD_BITS: usize = u64::BITS as usize;

/// A dense, word-packed visited set.
#[derive(Debug, Clone)]
pub(crate) struct VisitedSet {
    words: Vec<u64>,
    len: usize,
}

impl VisitedSet {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(WORD_BITS)],
            len,
        }
    }

    /// Returns `true` iff `idx` is in range and was not yet visited, marking it visited.
    #[inline(always)]
    pub(crate) fn try_visit(&mut self, idx: usize) -> bool {
        if idx >= self.len {
            return false;
        }
        let (word, mask) = (idx / WORD_BITS, 1u64 << (idx % WORD_BITS));
        let fresh = self.words[word] & mask == 0;
        self.words[word] |= mask;
        fresh
    }

    #[inline(always)]
    pub(crate) fn is_visited(&self, idx: usize) -> bool {
        idx < self.len && self.words[idx / WORD_BITS] & (1u64 << (idx % WORD_BITS)) != 0
    }

    #[cfg(any(test, feature = "tracing"))]
    pub(crate) fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}
