//! Weighted shortest-path algorithms.
//!
//! | Algorithm        | Weights       | Result                                   |
//! |------------------|---------------|------------------------------------------|
//! | [`dijkstra`]     | non-negative  | [`ShortestPaths`] from one source        |
//! | [`bellman_ford`] | any           | [`ShortestPaths`] or `NegativeCycle`     |
//! | [`floyd_warshall`] | any         | [`DistanceMatrix`] or `NegativeCycle`    |
//! | [`astar`]        | non-negative  | one [`Path`], or `None`                  |
//!
//! Infinity is represented by `None` throughout; no sentinel value is ever
//! added to a real weight.

pub mod astar;
pub mod bellman_ford;
pub mod dijkstra;
pub mod floyd_warshall;

pub use astar::{astar, astar_path};
pub use bellman_ford::bellman_ford;
pub use dijkstra::{dijkstra, dijkstra_path};
pub use floyd_warshall::{floyd_warshall, DistanceMatrix};

use crate::graph::Vertex;
use crate::weight::Weight;
use serde::{Deserialize, Serialize};

/// Accumulated path cost from a source to every vertex.
///
/// Index `i` holds the distance to vertex `i`; `None` means unreached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceMap<W> {
    source: Vertex,
    distances: Vec<Option<W>>,
}

impl<W: Weight> DistanceMap<W> {
    /// All vertices at infinity except `source`, which is at zero.
    ///
    /// A source outside `0..vertex_count` leaves every entry at infinity.
    pub(crate) fn new(source: Vertex, vertex_count: usize) -> Self {
        let mut distances = vec![None; vertex_count];
        if let Some(slot) = distances.get_mut(source.index()) {
            *slot = Some(W::zero());
        }
        Self { source, distances }
    }

    pub(crate) fn from_parts(source: Vertex, distances: Vec<Option<W>>) -> Self {
        Self { source, distances }
    }

    /// Returns the source vertex.
    pub fn source(&self) -> Vertex {
        self.source
    }

    /// Returns the distance to `vertex`, `None` if unreached or unknown.
    #[inline]
    pub fn get(&self, vertex: Vertex) -> Option<W> {
        self.distances.get(vertex.index()).copied().flatten()
    }

    /// Returns `true` if `vertex` was reached from the source.
    pub fn is_reachable(&self, vertex: Vertex) -> bool {
        self.get(vertex).is_some()
    }

    /// Number of entries (the graph's vertex count).
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Returns `true` for a map over an empty graph.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Iterates over `(vertex, distance)` for every vertex.
    pub fn iter(&self) -> impl Iterator<Item = (Vertex, Option<W>)> + '_ {
        self.distances
            .iter()
            .enumerate()
            .map(|(i, d)| (Vertex::new(i), *d))
    }

    /// Iterates over `(vertex, distance)` for reached vertices only.
    pub fn reachable(&self) -> impl Iterator<Item = (Vertex, W)> + '_ {
        self.iter().filter_map(|(v, d)| d.map(|d| (v, d)))
    }

    /// Returns the raw per-vertex distances.
    pub fn as_slice(&self) -> &[Option<W>] {
        &self.distances
    }

    #[inline]
    pub(crate) fn slot(&self, index: usize) -> Option<W> {
        self.distances[index]
    }

    #[inline]
    pub(crate) fn set(&mut self, index: usize, distance: W) {
        self.distances[index] = Some(distance);
    }
}

/// The vertex each vertex was reached from.
///
/// `None` means "no predecessor": the source itself, or an unreached vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredecessorMap {
    predecessors: Vec<Option<Vertex>>,
}

impl PredecessorMap {
    pub(crate) fn new(vertex_count: usize) -> Self {
        Self {
            predecessors: vec![None; vertex_count],
        }
    }

    /// Returns the predecessor of `vertex`.
    pub fn get(&self, vertex: Vertex) -> Option<Vertex> {
        self.predecessors.get(vertex.index()).copied().flatten()
    }

    pub(crate) fn set(&mut self, vertex: Vertex, predecessor: Vertex) {
        self.predecessors[vertex.index()] = Some(predecessor);
    }

    /// Walks predecessor links back from `target` and returns the vertices
    /// from the chain's origin to `target`.
    ///
    /// The walk stops after `len()` steps, so a corrupted map with a cycle
    /// cannot loop forever.
    pub fn walk_back(&self, target: Vertex) -> Vec<Vertex> {
        let mut path = vec![target];
        let mut current = target;
        while let Some(prev) = self.get(current) {
            if path.len() > self.predecessors.len() {
                break;
            }
            path.push(prev);
            current = prev;
        }
        path.reverse();
        path
    }

    /// Returns the raw per-vertex predecessors.
    pub fn as_slice(&self) -> &[Option<Vertex>] {
        &self.predecessors
    }
}

/// An ordered vertex sequence with its total cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path<W> {
    /// Vertices from source to target, both included.
    pub vertices: Vec<Vertex>,
    /// Sum of the traversed edge weights.
    pub cost: W,
}

impl<W> Path<W> {
    /// Returns the first vertex.
    pub fn source(&self) -> Option<Vertex> {
        self.vertices.first().copied()
    }

    /// Returns the last vertex.
    pub fn target(&self) -> Option<Vertex> {
        self.vertices.last().copied()
    }

    /// Number of edges on the path.
    pub fn edge_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

/// Single-source result: distances plus the predecessor tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPaths<W> {
    /// Distance from the source to every vertex.
    pub distances: DistanceMap<W>,
    /// Predecessor on a shortest path to every reached vertex.
    pub predecessors: PredecessorMap,
}

impl<W: Weight> ShortestPaths<W> {
    pub(crate) fn new(source: Vertex, vertex_count: usize) -> Self {
        Self {
            distances: DistanceMap::new(source, vertex_count),
            predecessors: PredecessorMap::new(vertex_count),
        }
    }

    /// Returns the source vertex.
    pub fn source(&self) -> Vertex {
        self.distances.source()
    }

    /// Returns the distance to `vertex`, `None` if unreached.
    pub fn distance(&self, vertex: Vertex) -> Option<W> {
        self.distances.get(vertex)
    }

    /// Reconstructs a shortest path to `target`, `None` if unreached.
    pub fn path_to(&self, target: Vertex) -> Option<Path<W>> {
        let cost = self.distances.get(target)?;
        Some(Path {
            vertices: self.predecessors.walk_back(target),
            cost,
        })
    }
}
