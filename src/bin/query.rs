use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lazy_paths::{
    graphs::VertexId,
    logging::init_logging,
    read_graph,
    search::{dijkstra::Dijkstra, PathFinding, ShortestPathRequest},
    spanning_tree::prim::Prim,
    FileType,
};
use serde_json::json;

/// Answers a single query on a graph read from disk and prints it as json.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph file
    #[arg(short, long)]
    graph: PathBuf,

    /// Format of the graph file
    #[arg(short, long, value_enum, default_value_t = FileType::Json)]
    file_type: FileType,

    /// Log search statistics
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    query: Query,
}

#[derive(Subcommand, Debug)]
enum Query {
    /// Shortest path between two vertices
    ShortestPath {
        #[arg(short, long)]
        source: VertexId,
        #[arg(short, long)]
        target: VertexId,
    },
    /// Minimum spanning tree of the vertices reachable from a vertex
    SpanningTree {
        #[arg(short, long)]
        source: VertexId,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let graph = read_graph(&args.graph, args.file_type)?;

    let output = match args.query {
        Query::ShortestPath { source, target } => {
            let request = ShortestPathRequest::new(source, target);
            let path = Dijkstra::new(&graph).shortest_path(&request)?;
            json!({ "request": request, "path": path })
        }
        Query::SpanningTree { source } => {
            let tree = Prim::new(&graph).spanning_tree(source)?;
            json!({ "source": source, "tree": tree })
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
