use meridian::{astar, astar_path, bellman_ford, dijkstra, dijkstra_path, floyd_warshall, Graph, GraphError, Vertex};

/// A->B(4), A->C(2), C->D(5), B->E(10), D->E(2).
fn letters() -> (Graph<char, i32>, [Vertex; 5]) {
    let mut g = Graph::new();
    let a = g.add_vertex('A');
    let b = g.add_vertex('B');
    let c = g.add_vertex('C');
    let d = g.add_vertex('D');
    let e = g.add_vertex('E');
    g.add_edge(a, b, 4);
    g.add_edge(a, c, 2);
    g.add_edge(c, d, 5);
    g.add_edge(b, e, 10);
    g.add_edge(d, e, 2);
    (g, [a, b, c, d, e])
}

#[test]
fn astar_finds_cheapest_route() {
    let (g, [a, _, c, d, e]) = letters();
    // Straight-line estimates that never exceed the true remaining cost.
    let estimate = [9, 10, 7, 2, 0];
    let path = astar(&g, a, e, |v, _| estimate[v.index()]).unwrap();
    assert_eq!(path.vertices, vec![a, c, d, e]);
    assert_eq!(path.cost, 9);
    assert_eq!(astar_path(&g, a, e, |_, _| 0), vec![a, c, d, e]);
}

#[test]
fn astar_with_zero_heuristic_matches_dijkstra() {
    let (g, [a, b, c, d, e]) = letters();
    let paths = dijkstra(&g, a);
    for goal in [a, b, c, d, e] {
        let cost = astar(&g, a, goal, |_, _| 0).map(|p| p.cost);
        assert_eq!(cost, paths.distance(goal));
    }
}

#[test]
fn astar_reports_no_path() {
    let (g, [a, _, _, _, e]) = letters();
    assert!(astar(&g, e, a, |_, _| 0).is_none());
    assert!(astar_path(&g, e, a, |_, _| 0).is_empty());
}

#[test]
fn dijkstra_and_bellman_ford_agree() {
    let (g, [a, ..]) = letters();
    let fast = dijkstra(&g, a);
    let general = bellman_ford(&g, a).unwrap();
    assert_eq!(fast.distances, general.distances);
    assert_eq!(
        fast.distances.as_slice(),
        &[Some(0), Some(4), Some(2), Some(7), Some(9)]
    );
}

#[test]
fn dijkstra_path_reconstructs_route() {
    let (g, [a, _, c, d, e]) = letters();
    let path = dijkstra_path(&g, a, e).unwrap();
    assert_eq!(path.vertices, vec![a, c, d, e]);
    assert_eq!(path.source(), Some(a));
    assert_eq!(path.target(), Some(e));
    assert_eq!(path.edge_count(), 3);
}

#[test]
fn floyd_warshall_matches_single_source_runs() {
    let (g, vs) = letters();
    let table = floyd_warshall(&g).unwrap();
    for &from in &vs {
        let paths = dijkstra(&g, from);
        for &to in &vs {
            assert_eq!(table.get(from, to), paths.distance(to), "{from:?} -> {to:?}");
        }
    }
}

#[test]
fn negative_cycle_is_reported_by_both_general_algorithms() {
    let mut g: Graph<&str, i64> = Graph::new();
    let s = g.add_vertex("s");
    let x = g.add_vertex("x");
    let y = g.add_vertex("y");
    let z = g.add_vertex("z");
    g.add_edge(s, x, 1);
    g.add_edge(x, y, 2);
    g.add_edge(y, x, -3);
    g.add_edge(y, z, 1);

    assert_eq!(bellman_ford(&g, s), Err(GraphError::NegativeCycle));
    assert_eq!(floyd_warshall(&g), Err(GraphError::NegativeCycle));
    // The cycle is not reachable from z.
    assert_eq!(bellman_ford(&g, z).unwrap().distance(z), Some(0));
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(GraphError::NegativeCycle.to_string(), "negative weight cycle detected");
    let err = GraphError::UnknownVertex {
        vertex: Vertex::new(9),
        vertex_count: 3,
    };
    assert_eq!(err.to_string(), "vertex 9 is not in the graph (3 vertices)");
}
