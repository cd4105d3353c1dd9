use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use meridian::{
    astar, bellman_ford, bfs_order, connected_components, dfs_order, dijkstra, floyd_warshall,
    kruskal_graph, prim_graph, AnyGraph, EdgeType, Graph, GraphDescription, GraphError, MstEdge,
    ShortestPaths, Vertex,
};
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "meridian")]
#[command(about = "Run graph algorithms over a JSON graph description", long_about = None)]
struct Cli {
    /// Path to the graph description (JSON)
    graph: PathBuf,

    /// Label of the start vertex (defaults to the first vertex)
    #[arg(long, global = true)]
    from: Option<String>,

    /// Log algorithm progress to stderr
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Breadth-first visit order
    Bfs,
    /// Depth-first visit order
    Dfs,
    /// Single-source shortest paths (non-negative weights)
    Dijkstra,
    /// Single-source shortest paths with negative-cycle detection
    BellmanFord,
    /// All-pairs shortest distances
    FloydWarshall,
    /// Shortest path to a goal vertex
    Astar {
        /// Label of the goal vertex
        #[arg(long)]
        goal: String,
    },
    /// Minimum spanning forest by Kruskal
    Kruskal,
    /// Minimum spanning tree by Prim, rooted at the first vertex
    Prim,
    /// Connected components (edge direction ignored)
    Components,
    /// Print the parsed graph
    Show {
        /// Print one adjacency line per vertex instead of JSON
        #[arg(long, default_value_t = false)]
        text: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let raw = fs::read_to_string(&cli.graph)
        .with_context(|| format!("failed to read {}", cli.graph.display()))?;
    let description: GraphDescription = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse {}", cli.graph.display()))?;
    let graph = description
        .build()
        .with_context(|| format!("invalid graph in {}", cli.graph.display()))?;

    tracing::info!(
        vertices = graph.vertex_count(),
        directed = graph.is_directed(),
        "loaded graph"
    );

    let output = match &graph {
        AnyGraph::Directed(g) => run(g, &cli)?,
        AnyGraph::Undirected(g) => run(g, &cli)?,
    };
    if let Some(text) = output.as_str() {
        print!("{text}");
    } else {
        println!("{}", serde_json::to_string_pretty(&output)?);
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("meridian=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run<Ty: EdgeType>(graph: &Graph<String, i64, Ty>, cli: &Cli) -> Result<Value> {
    let name = |v: Vertex| graph.label(v).cloned().unwrap_or_default();
    let names = |vs: &[Vertex]| vs.iter().map(|&v| name(v)).collect::<Vec<_>>();

    let value = match &cli.command {
        Commands::Bfs => json!({ "order": names(&bfs_order(graph, start(graph, cli)?)) }),
        Commands::Dfs => json!({ "order": names(&dfs_order(graph, start(graph, cli)?)) }),
        Commands::Dijkstra => single_source(graph, &dijkstra(graph, start(graph, cli)?)),
        Commands::BellmanFord => {
            let source = start(graph, cli)?;
            let paths = bellman_ford(graph, source)
                .with_context(|| format!("bellman-ford from `{}`", name(source)))?;
            single_source(graph, &paths)
        }
        Commands::FloydWarshall => {
            let table = floyd_warshall(graph).context("floyd-warshall")?;
            let rows: Vec<_> = table.as_matrix().iter_rows().map(<[_]>::to_vec).collect();
            json!({ "vertices": graph.labels(), "distances": rows })
        }
        Commands::Astar { goal } => {
            let source = start(graph, cli)?;
            let goal = lookup(graph, goal)?;
            // No coordinates are known, so the estimate is always zero.
            match astar(graph, source, goal, |_, _| 0) {
                Some(path) => json!({ "path": names(&path.vertices), "cost": path.cost }),
                None => json!({ "path": [], "cost": null }),
            }
        }
        Commands::Kruskal => {
            let forest = kruskal_graph(graph);
            json!({
                "edges": edge_list(graph, &forest.edges),
                "total_weight": forest.total_weight,
                "trees": forest.tree_count(graph.vertex_count()),
            })
        }
        Commands::Prim => {
            let tree = prim_graph(graph);
            json!({
                "edges": edge_list(graph, &tree.edges()),
                "total_weight": tree.total_weight(),
                "spans_all": tree.spans_all(),
            })
        }
        Commands::Components => {
            let roots = connected_components(graph);
            let mut groups: Vec<(usize, Vec<String>)> = Vec::new();
            for (v, &root) in roots.iter().enumerate() {
                match groups.iter_mut().find(|(r, _)| *r == root) {
                    Some((_, members)) => members.push(name(Vertex::new(v))),
                    None => groups.push((root, vec![name(Vertex::new(v))])),
                }
            }
            let components: Vec<_> = groups.into_iter().map(|(_, members)| members).collect();
            json!({ "count": components.len(), "components": components })
        }
        Commands::Show { text: true } => Value::String(graph.to_string()),
        Commands::Show { text: false } => serde_json::to_value(GraphDescription::from(graph))?,
    };
    Ok(value)
}

fn start<Ty: EdgeType>(graph: &Graph<String, i64, Ty>, cli: &Cli) -> Result<Vertex> {
    match &cli.from {
        Some(label) => lookup(graph, label),
        None if graph.is_empty() => bail!("graph has no vertices"),
        None => Ok(Vertex::new(0)),
    }
}

fn lookup<Ty: EdgeType>(graph: &Graph<String, i64, Ty>, label: &str) -> Result<Vertex> {
    graph
        .find_vertex(label)
        .ok_or_else(|| GraphError::UnknownLabel(label.to_owned()).into())
}

fn single_source<Ty: EdgeType>(graph: &Graph<String, i64, Ty>, paths: &ShortestPaths<i64>) -> Value {
    let name = |v: Vertex| graph.label(v).cloned().unwrap_or_default();
    let rows: Vec<_> = paths
        .distances
        .iter()
        .map(|(v, distance)| {
            let path = paths
                .path_to(v)
                .map(|p| p.vertices.into_iter().map(name).collect::<Vec<_>>());
            json!({ "vertex": name(v), "distance": distance, "path": path })
        })
        .collect();
    json!({ "source": name(paths.source()), "distances": rows })
}

fn edge_list<Ty: EdgeType>(graph: &Graph<String, i64, Ty>, edges: &[MstEdge<i64>]) -> Vec<Value> {
    let name = |i: usize| graph.label(Vertex::new(i)).cloned().unwrap_or_default();
    edges
        .iter()
        .map(|e| json!({ "from": name(e.u), "to": name(e.v), "weight": e.weight }))
        .collect()
}
