use clap::Parser;
use lazy_paths::{
    graphs::vec_vec_graph::VecVecGraph,
    logging::init_logging,
    search::dijkstra::shortest_path_weight,
    spanning_tree::prim::minimum_spanning_tree_weight,
    GraphError,
};

/// Runs shortest path search and Prim's algorithm on two small example graphs.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log search statistics
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let directed = directed_example()?;
    for (source, target) in [(0, 3), (3, 4)] {
        // -1 marks an unreachable target
        let weight = shortest_path_weight(&directed, source, target)?.unwrap_or(-1.0);
        println!("shortest path {} -> {}: {}", source, target, weight);
    }

    let undirected = undirected_example()?;
    for source in [0, 4] {
        let weight = minimum_spanning_tree_weight(&undirected, source)?;
        println!("spanning tree from {}: {}", source, weight);
    }

    Ok(())
}

fn directed_example() -> Result<VecVecGraph, GraphError> {
    let mut graph = VecVecGraph::with_vertices(5);
    graph.add_directed_edge(0, 1, 1.0)?;
    graph.add_directed_edge(0, 2, 5.0)?;
    graph.add_directed_edge(1, 2, 2.0)?;
    graph.add_directed_edge(2, 3, 3.0)?;
    graph.add_directed_edge(3, 1, 1.0)?;
    Ok(graph)
}

fn undirected_example() -> Result<VecVecGraph, GraphError> {
    let mut graph = VecVecGraph::with_vertices(5);
    graph.add_undirected_edge(0, 1, 1.0)?;
    graph.add_undirected_edge(0, 2, 5.0)?;
    graph.add_undirected_edge(1, 2, 2.0)?;
    graph.add_undirected_edge(2, 3, 3.0)?;
    graph.add_undirected_edge(3, 1, 1.0)?;
    Ok(graph)
}
