use std::path::PathBuf;

use clap::Parser;
use lazy_paths::{
    graphs::Graph,
    logging::init_logging,
    read_graph,
    search::dijkstra::Dijkstra,
    spanning_tree::prim::Prim,
    utility::{
        benchmark, gen_requests, get_progressbar, random_graph, shortest_path_weights_parallel,
    },
    write_graph, FileType,
};
use log::info;
use rand::{rngs::StdRng, SeedableRng};

/// Times shortest path queries on a random or given graph.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph file, a random graph is generated if missing
    #[arg(short, long)]
    graph: Option<PathBuf>,

    /// Format of the graph file
    #[arg(short, long, value_enum, default_value_t = FileType::Bincode)]
    file_type: FileType,

    /// Stores the generated graph at this path
    #[arg(long)]
    save_graph: Option<PathBuf>,

    #[arg(long, default_value_t = 100_000)]
    vertices: u32,

    #[arg(long, default_value_t = 400_000)]
    edges: u32,

    #[arg(long, default_value_t = 100)]
    max_weight: u32,

    /// Number of random queries
    #[arg(short, long, default_value_t = 1_000)]
    queries: u32,

    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(false)?;

    let mut rng = StdRng::seed_from_u64(args.seed);
    let graph = match &args.graph {
        Some(path) => read_graph(path, args.file_type)?,
        None => random_graph(args.vertices, args.edges, args.max_weight, &mut rng)?,
    };
    if let Some(path) = &args.save_graph {
        write_graph(&graph, path, args.file_type)?;
    }
    info!(
        "graph has {} vertices and {} edges",
        graph.number_of_vertices(),
        graph.number_of_edges()
    );

    let requests = gen_requests(&graph, args.queries, &mut rng);

    let average = benchmark(&Dijkstra::new(&graph), &requests)?;
    println!("average sequential shortest path query took {:?}", average);

    let weights = shortest_path_weights_parallel(&graph, &requests)?;
    let reachable = weights.iter().filter(|weight| weight.is_some()).count();
    println!("{} of {} targets are reachable", reachable, requests.len());

    let prim = Prim::new(&graph);
    let bar = get_progressbar("spanning trees", requests.len() as u64);
    for request in &requests {
        prim.tree_weight(request.source())?;
        bar.inc(1);
    }
    bar.finish_and_clear();
    println!(
        "average spanning tree computation took {:?}",
        bar.elapsed() / requests.len().max(1) as u32
    );

    Ok(())
}
