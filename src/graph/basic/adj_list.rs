//! Arena-indexed adjacency list graph.
//!
//! Vertices live in a dense arena and are addressed by [`Vertex`] handles,
//! which are plain indices: two handles are equal iff they name the same
//! slot, regardless of label. Each vertex owns an ordered list of outgoing
//! [`WeightedEdge`]s.
//!
//! # Direction
//! Directionality is a type parameter (`Directed` / `Undirected`). On an
//! undirected graph `add_edge(u, v, w)` stores `u -> v` and `v -> u`, both
//! with weight `w`. Parallel edges are kept as separate entries.
//!
//! The graph never validates weight signs. Each algorithm documents its own
//! precondition.

use crate::collections::DenseMatrix;
use crate::error::{GraphError, GraphResult};
use core::fmt;
use core::marker::PhantomData;
use serde::{Deserialize, Serialize};

/// Marker trait for graph edge directionality.
pub trait EdgeType {
    /// Returns true if the graph is directed.
    fn is_directed() -> bool;
}

/// Marker for directed graphs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Directed;
/// Marker for undirected graphs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Undirected;

impl EdgeType for Directed {
    fn is_directed() -> bool {
        true
    }
}
impl EdgeType for Undirected {
    fn is_directed() -> bool {
        false
    }
}

/// Opaque handle to a vertex: its index in the owning graph's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vertex(usize);

impl Vertex {
    /// Wraps a raw arena index.
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the arena index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for Vertex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// A directed, weighted adjacency entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeightedEdge<W> {
    /// Tail of the edge.
    pub source: Vertex,
    /// Head of the edge.
    pub destination: Vertex,
    /// Edge weight; may be negative.
    pub weight: W,
}

impl<W> WeightedEdge<W> {
    /// Creates an edge.
    pub const fn new(source: Vertex, destination: Vertex, weight: W) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }
}

/// An adjacency list graph with labelled vertices and weighted edges.
///
/// `L` is the vertex label type, `W` the weight type and `Ty` the direction
/// marker.
#[derive(Clone)]
pub struct Graph<L, W, Ty = Directed> {
    labels: Vec<L>,
    adjacency: Vec<Vec<WeightedEdge<W>>>,
    /// Edges in insertion order, one entry per `add_edge` call.
    edges: Vec<WeightedEdge<W>>,
    _marker: PhantomData<Ty>,
}

/// A directed graph.
pub type DiGraph<L, W> = Graph<L, W, Directed>;
/// An undirected graph.
pub type UnGraph<L, W> = Graph<L, W, Undirected>;

impl<L, W> Graph<L, W, Directed> {
    /// Creates a new empty directed graph.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }
}

impl<L, W> Default for Graph<L, W, Directed> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L, W> Graph<L, W, Undirected> {
    /// Creates a new empty undirected graph.
    pub fn new_undirected() -> Self {
        Self::with_capacity(0)
    }
}

impl<L, W, Ty: EdgeType> Graph<L, W, Ty> {
    /// Creates an empty graph with room for `vertices` vertices.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            labels: Vec::with_capacity(vertices),
            adjacency: Vec::with_capacity(vertices),
            edges: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Returns true if the graph is directed.
    pub fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    /// Adds a vertex and returns its handle.
    pub fn add_vertex(&mut self, label: L) -> Vertex {
        let vertex = Vertex(self.labels.len());
        self.labels.push(label);
        self.adjacency.push(Vec::new());
        vertex
    }

    /// Adds an edge from `source` to `destination`.
    ///
    /// On an undirected graph the mirrored entry is added as well.
    ///
    /// # Panics
    /// Panics if either endpoint does not belong to this graph. See
    /// [`Graph::try_add_edge`] for the fallible form.
    pub fn add_edge(&mut self, source: Vertex, destination: Vertex, weight: W)
    where
        W: Copy,
    {
        if let Err(err) = self.try_add_edge(source, destination, weight) {
            panic!("add_edge: {err}");
        }
    }

    /// Adds an edge, failing if either endpoint is unknown.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] for the first endpoint that is
    /// not in the graph; the graph is left unchanged.
    pub fn try_add_edge(&mut self, source: Vertex, destination: Vertex, weight: W) -> GraphResult<()>
    where
        W: Copy,
    {
        self.check_vertex(source)?;
        self.check_vertex(destination)?;

        let edge = WeightedEdge::new(source, destination, weight);
        self.adjacency[source.0].push(edge);
        if !Ty::is_directed() {
            self.adjacency[destination.0].push(WeightedEdge::new(destination, source, weight));
        }
        self.edges.push(edge);
        Ok(())
    }

    /// Returns an error unless `vertex` belongs to this graph.
    pub fn check_vertex(&self, vertex: Vertex) -> GraphResult<()> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(GraphError::UnknownVertex {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }

    /// Returns the outgoing entries of `vertex` in insertion order.
    ///
    /// A vertex that is not in the graph has no neighbors.
    #[inline]
    pub fn neighbors(&self, vertex: Vertex) -> &[WeightedEdge<W>] {
        match self.adjacency.get(vertex.0) {
            Some(edges) => edges,
            None => &[],
        }
    }

    /// Iterates over every directed adjacency entry, grouped by source vertex.
    ///
    /// On an undirected graph each logical edge appears twice, once per
    /// direction.
    pub fn all_edges(&self) -> impl Iterator<Item = &WeightedEdge<W>> + '_ {
        self.adjacency.iter().flatten()
    }

    /// Returns the logical edges in insertion order, as passed to `add_edge`.
    pub fn edges(&self) -> &[WeightedEdge<W>] {
        &self.edges
    }

    /// Iterates over all vertices in index order.
    pub fn all_vertices(&self) -> impl ExactSizeIterator<Item = Vertex> + DoubleEndedIterator {
        (0..self.labels.len()).map(Vertex)
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    /// Returns the number of logical edges (`add_edge` calls).
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns `true` if `vertex` is a handle into this graph.
    #[inline]
    pub fn contains_vertex(&self, vertex: Vertex) -> bool {
        vertex.0 < self.labels.len()
    }

    /// Returns the label of `vertex`.
    pub fn label(&self, vertex: Vertex) -> Option<&L> {
        self.labels.get(vertex.0)
    }

    /// Returns all labels in vertex order.
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    /// Returns the first vertex whose label equals `label`.
    pub fn find_vertex<Q>(&self, label: &Q) -> Option<Vertex>
    where
        L: PartialEq<Q>,
        Q: ?Sized,
    {
        self.labels.iter().position(|l| l == label).map(Vertex)
    }

    /// Builds a dense `|V| x |V|` matrix of direct edge weights.
    ///
    /// Parallel edges are not merged: the last entry in adjacency order wins.
    pub fn adjacency_matrix(&self) -> DenseMatrix<Option<W>>
    where
        W: Copy,
    {
        let n = self.vertex_count();
        let mut matrix = DenseMatrix::square(n, None);
        for edge in self.all_edges() {
            matrix[(edge.source.0, edge.destination.0)] = Some(edge.weight);
        }
        matrix
    }
}

impl<L: fmt::Debug, W: fmt::Debug, Ty: EdgeType> fmt::Debug for Graph<L, W, Ty> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("directed", &Ty::is_directed())
            .field("labels", &self.labels)
            .field("adjacency", &self.adjacency)
            .finish()
    }
}

/// Renders one line per vertex: `label -> dest(weight) dest(weight)`.
impl<L: fmt::Display, W: fmt::Display, Ty: EdgeType> fmt::Display for Graph<L, W, Ty> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, edges) in self.labels.iter().zip(&self.adjacency) {
            write!(f, "{label} ->")?;
            for edge in edges {
                write!(f, " {}({})", self.labels[edge.destination.0], edge.weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
