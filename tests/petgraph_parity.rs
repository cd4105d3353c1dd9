use meridian::{dijkstra, floyd_warshall, kruskal_graph, prim_graph, Graph, UnGraph, Vertex};
use petgraph::algo;
use petgraph::data::Element;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use proptest::prelude::*;
use std::collections::HashSet;

type Edges = Vec<(usize, usize, i64)>;

fn edges_strategy() -> impl Strategy<Value = (usize, Edges)> {
    (1usize..10).prop_flat_map(|n| {
        (
            Just(n),
            proptest::collection::vec((0..n, 0..n, 1i64..40), 0..30).prop_map(|edges| {
                // Simple graphs only: no self-loops, one edge per ordered pair.
                let mut seen = HashSet::new();
                edges
                    .into_iter()
                    .filter(|&(a, b, _)| a != b && seen.insert((a, b)))
                    .collect::<Edges>()
            }),
        )
    })
}

fn ours(n: usize, edges: &Edges) -> Graph<usize, i64> {
    let mut g = Graph::new();
    let v: Vec<_> = (0..n).map(|i| g.add_vertex(i)).collect();
    for &(a, b, w) in edges {
        g.add_edge(v[a], v[b], w);
    }
    g
}

fn theirs(n: usize, edges: &Edges) -> petgraph::Graph<(), i64> {
    let mut g = petgraph::Graph::new();
    let v: Vec<_> = (0..n).map(|_| g.add_node(())).collect();
    for &(a, b, w) in edges {
        g.add_edge(v[a], v[b], w);
    }
    g
}

proptest! {
    #[test]
    fn dijkstra_matches_petgraph((n, edges) in edges_strategy()) {
        let mine = dijkstra(&ours(n, &edges), Vertex::new(0));
        let reference = algo::dijkstra(&theirs(n, &edges), NodeIndex::new(0), None, |e| *e.weight());

        for i in 0..n {
            prop_assert_eq!(mine.distance(Vertex::new(i)), reference.get(&NodeIndex::new(i)).copied());
        }
    }

    #[test]
    fn floyd_warshall_matches_petgraph((n, edges) in edges_strategy()) {
        let mine = floyd_warshall(&ours(n, &edges)).unwrap();
        let reference = algo::floyd_warshall(&theirs(n, &edges), |e| *e.weight()).unwrap();

        for i in 0..n {
            for j in 0..n {
                let other = reference.get(&(NodeIndex::new(i), NodeIndex::new(j))).copied();
                match mine.get(Vertex::new(i), Vertex::new(j)) {
                    Some(d) => prop_assert_eq!(Some(d), other),
                    // petgraph leaves unreachable pairs at the measure's maximum.
                    None => prop_assert!(other.map_or(true, |d| d == i64::MAX)),
                }
            }
        }
    }

    #[test]
    fn spanning_tree_weight_matches_petgraph((n, edges) in edges_strategy()) {
        let mut mine: UnGraph<usize, i64> = Graph::new_undirected();
        let v: Vec<_> = (0..n).map(|i| mine.add_vertex(i)).collect();
        let mut reference = petgraph::graph::UnGraph::<(), i64>::new_undirected();
        let nodes: Vec<_> = (0..n).map(|_| reference.add_node(())).collect();
        for &(a, b, w) in &edges {
            mine.add_edge(v[a], v[b], w);
            reference.add_edge(nodes[a], nodes[b], w);
        }

        let expected: i64 = algo::min_spanning_tree(&reference)
            .filter_map(|element| match element {
                Element::Edge { weight, .. } => Some(weight),
                Element::Node { .. } => None,
            })
            .sum();
        prop_assert_eq!(kruskal_graph(&mine).total_weight, expected);

        // Prim only grows the component of vertex 0.
        if algo::connected_components(&reference) == 1 {
            prop_assert_eq!(prim_graph(&mine).total_weight(), expected);
        }
    }
}

#[test]
fn petgraph_edge_references_agree_with_edge_list() {
    let edges: Edges = vec![(0, 1, 3), (1, 2, 4), (2, 0, 5)];
    let reference = theirs(3, &edges);
    let mine = ours(3, &edges);
    let from_petgraph: Vec<_> = reference
        .edge_references()
        .map(|e| (e.source().index(), e.target().index(), *e.weight()))
        .collect();
    let from_meridian: Vec<_> = mine
        .edges()
        .iter()
        .map(|e| (e.source.index(), e.destination.index(), e.weight))
        .collect();
    assert_eq!(from_petgraph, from_meridian);
}
