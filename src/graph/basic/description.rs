//! Serializable graph descriptions.
//!
//! A [`GraphDescription`] names its vertices by label and its edges by the
//! labels of their endpoints, which makes it a convenient on-disk format:
//!
//! ```json
//! {
//!   "directed": true,
//!   "vertices": ["A", "B"],
//!   "edges": [{ "from": "A", "to": "B", "weight": 3 }]
//! }
//! ```
//!
//! Vertices are created in declaration order, so the `i`-th label becomes
//! `Vertex::new(i)`. Duplicate labels are kept as distinct vertices; edges
//! naming a duplicated label attach to its first occurrence.

use super::adj_list::{Directed, EdgeType, Graph, Undirected, Vertex, WeightedEdge};
use crate::error::{GraphError, GraphResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One edge of a [`GraphDescription`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeDescription {
    /// Label of the source vertex.
    pub from: String,
    /// Label of the destination vertex.
    pub to: String,
    /// Edge weight.
    pub weight: i64,
}

/// A graph spelled out by vertex labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDescription {
    /// Whether edges are one-way.
    #[serde(default = "directed_by_default")]
    pub directed: bool,
    /// Vertex labels in index order.
    pub vertices: Vec<String>,
    /// Edges in insertion order.
    #[serde(default)]
    pub edges: Vec<EdgeDescription>,
}

fn directed_by_default() -> bool {
    true
}

/// A graph built from a description, with its direction chosen at runtime.
#[derive(Debug, Clone)]
pub enum AnyGraph {
    /// Built from a description with `directed: true`.
    Directed(Graph<String, i64, Directed>),
    /// Built from a description with `directed: false`.
    Undirected(Graph<String, i64, Undirected>),
}

impl GraphDescription {
    /// Builds the described graph.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownLabel`] if an edge names a label that is
    /// not in `vertices`.
    pub fn build(&self) -> GraphResult<AnyGraph> {
        if self.directed {
            self.build_as::<Directed>(Graph::new()).map(AnyGraph::Directed)
        } else {
            self.build_as::<Undirected>(Graph::new_undirected())
                .map(AnyGraph::Undirected)
        }
    }

    fn build_as<Ty: EdgeType>(
        &self,
        mut graph: Graph<String, i64, Ty>,
    ) -> GraphResult<Graph<String, i64, Ty>> {
        let mut index: HashMap<&str, Vertex> = HashMap::with_capacity(self.vertices.len());
        for label in &self.vertices {
            let vertex = graph.add_vertex(label.clone());
            index.entry(label.as_str()).or_insert(vertex);
        }

        let lookup = |label: &str| {
            index
                .get(label)
                .copied()
                .ok_or_else(|| GraphError::UnknownLabel(label.to_owned()))
        };
        for edge in &self.edges {
            let (from, to) = (lookup(&edge.from)?, lookup(&edge.to)?);
            graph.try_add_edge(from, to, edge.weight)?;
        }

        log_debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            directed = Ty::is_directed(),
            "built graph from description"
        );
        Ok(graph)
    }
}

impl<Ty: EdgeType> From<&Graph<String, i64, Ty>> for GraphDescription {
    fn from(graph: &Graph<String, i64, Ty>) -> Self {
        let label = |v: Vertex| graph.label(v).cloned().unwrap_or_default();
        Self {
            directed: Ty::is_directed(),
            vertices: graph.labels().to_vec(),
            edges: graph
                .edges()
                .iter()
                .map(|e: &WeightedEdge<i64>| EdgeDescription {
                    from: label(e.source),
                    to: label(e.destination),
                    weight: e.weight,
                })
                .collect(),
        }
    }
}

impl AnyGraph {
    /// Returns `true` for [`AnyGraph::Directed`].
    pub fn is_directed(&self) -> bool {
        matches!(self, Self::Directed(_))
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        match self {
            Self::Directed(g) => g.vertex_count(),
            Self::Undirected(g) => g.vertex_count(),
        }
    }

    /// Finds the first vertex with the given label.
    pub fn find_vertex(&self, label: &str) -> Option<Vertex> {
        match self {
            Self::Directed(g) => g.find_vertex(label),
            Self::Undirected(g) => g.find_vertex(label),
        }
    }

    /// Vertex labels in index order.
    pub fn labels(&self) -> &[String] {
        match self {
            Self::Directed(g) => g.labels(),
            Self::Undirected(g) => g.labels(),
        }
    }

    /// Converts back into a description.
    pub fn describe(&self) -> GraphDescription {
        match self {
            Self::Directed(g) => g.into(),
            Self::Undirected(g) => g.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> GraphDescription {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_build_directed() {
        let desc = parse(
            r#"{"directed": true, "vertices": ["A", "B", "C"],
                "edges": [{"from": "A", "to": "B", "weight": 2},
                          {"from": "B", "to": "C", "weight": -1}]}"#,
        );
        let AnyGraph::Directed(g) = desc.build().unwrap() else {
            panic!("expected a directed graph");
        };
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 2);
        let b = g.find_vertex("B").unwrap();
        assert_eq!(b, Vertex::new(1));
        assert_eq!(g.neighbors(b)[0].weight, -1);
    }

    #[test]
    fn test_build_undirected_stores_both_directions() {
        let desc = parse(
            r#"{"directed": false, "vertices": ["x", "y"],
                "edges": [{"from": "x", "to": "y", "weight": 5}]}"#,
        );
        let graph = desc.build().unwrap();
        assert!(!graph.is_directed());
        let AnyGraph::Undirected(g) = graph else {
            panic!("expected an undirected graph");
        };
        assert_eq!(g.neighbors(Vertex::new(1))[0].destination, Vertex::new(0));
    }

    #[test]
    fn test_defaults() {
        let desc = parse(r#"{"vertices": ["only"]}"#);
        assert!(desc.directed);
        assert!(desc.edges.is_empty());
        assert_eq!(desc.build().unwrap().vertex_count(), 1);
    }

    #[test]
    fn test_unknown_label() {
        let desc = parse(
            r#"{"vertices": ["A"], "edges": [{"from": "A", "to": "Z", "weight": 1}]}"#,
        );
        assert_eq!(
            desc.build().unwrap_err(),
            GraphError::UnknownLabel("Z".to_owned())
        );
    }

    #[test]
    fn test_describe_round_trips() {
        let desc = parse(
            r#"{"directed": false, "vertices": ["p", "q", "r"],
                "edges": [{"from": "p", "to": "q", "weight": 1},
                          {"from": "r", "to": "p", "weight": 7}]}"#,
        );
        assert_eq!(desc.build().unwrap().describe(), desc);
    }
}
