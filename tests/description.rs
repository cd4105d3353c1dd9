use meridian::{astar, dijkstra, kruskal_graph, AnyGraph, GraphDescription, GraphError};

const LETTERS: &str = include_str!("data/letters.json");

fn letters() -> AnyGraph {
    let description: GraphDescription = serde_json::from_str(LETTERS).unwrap();
    description.build().unwrap()
}

#[test]
fn loads_directed_graph_from_json() {
    let graph = letters();
    assert!(graph.is_directed());
    assert_eq!(graph.vertex_count(), 5);
    assert_eq!(graph.labels(), ["A", "B", "C", "D", "E"]);
}

#[test]
fn algorithms_run_on_loaded_graph() {
    let AnyGraph::Directed(g) = letters() else {
        panic!("letters.json is directed");
    };
    let a = g.find_vertex("A").unwrap();
    let e = g.find_vertex("E").unwrap();

    assert_eq!(dijkstra(&g, a).distance(e), Some(9));
    let path = astar(&g, a, e, |_, _| 0).unwrap();
    let labels: Vec<_> = path.vertices.iter().map(|&v| g.label(v).unwrap().as_str()).collect();
    assert_eq!(labels, ["A", "C", "D", "E"]);
}

#[test]
fn undirected_description_feeds_spanning_trees() {
    let json = r#"{
        "directed": false,
        "vertices": ["0", "1", "2", "3"],
        "edges": [
            {"from": "0", "to": "1", "weight": 4},
            {"from": "0", "to": "2", "weight": 3},
            {"from": "1", "to": "2", "weight": 1},
            {"from": "1", "to": "3", "weight": 2},
            {"from": "2", "to": "3", "weight": 4}
        ]
    }"#;
    let description: GraphDescription = serde_json::from_str(json).unwrap();
    let AnyGraph::Undirected(g) = description.build().unwrap() else {
        panic!("description is undirected");
    };
    assert_eq!(kruskal_graph(&g).total_weight, 6);
}

#[test]
fn unknown_edge_label_is_an_error() {
    let json = r#"{"vertices": ["A"], "edges": [{"from": "B", "to": "A", "weight": 1}]}"#;
    let description: GraphDescription = serde_json::from_str(json).unwrap();
    let err = description.build().unwrap_err();
    assert_eq!(err, GraphError::UnknownLabel("B".into()));
    assert_eq!(err.to_string(), "unknown vertex label `B`");
}

#[test]
fn description_survives_a_json_round_trip() {
    let graph = letters();
    let json = serde_json::to_string(&graph.describe()).unwrap();
    let reparsed: GraphDescription = serde_json::from_str(&json).unwrap();
    assert_eq!(reparsed, graph.describe());
    assert_eq!(reparsed.edges.len(), 5);
}
