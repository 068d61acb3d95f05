use std::time::{Duration, Instant};

use indicatif::{ParallelProgressIterator, ProgressBar, ProgressIterator, ProgressStyle};
use rand::prelude::*;
use rayon::prelude::*;

use crate::{
    error::GraphError,
    graphs::{vec_vec_graph::VecVecGraph, Graph, VertexId, Weight},
    search::{dijkstra::Dijkstra, Path, PathFinding, ShortestPathRequest},
};

pub fn get_progressbar(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    bar.set_style(
        ProgressStyle::with_template(" {msg} {wide_bar} {pos}/{len} eta: {eta_precise}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar
}

/// Random directed graph with `number_of_edges` edges. Weights are integral and
/// drawn from `0..=max_weight`, so sums of them stay exact.
pub fn random_graph(
    number_of_vertices: u32,
    number_of_edges: u32,
    max_weight: u32,
    rng: &mut impl Rng,
) -> Result<VecVecGraph, GraphError> {
    let mut graph = VecVecGraph::with_vertices(number_of_vertices);
    if number_of_vertices == 0 {
        return Ok(graph);
    }

    for _ in 0..number_of_edges {
        let tail = rng.gen_range(0..number_of_vertices);
        let head = rng.gen_range(0..number_of_vertices);
        let weight = rng.gen_range(0..=max_weight) as Weight;
        graph.add_directed_edge(tail, head, weight)?;
    }

    Ok(graph)
}

/// Like [`random_graph`], but every edge is stored in both directions.
pub fn random_undirected_graph(
    number_of_vertices: u32,
    number_of_edges: u32,
    max_weight: u32,
    rng: &mut impl Rng,
) -> Result<VecVecGraph, GraphError> {
    let mut graph = VecVecGraph::with_vertices(number_of_vertices);
    if number_of_vertices == 0 {
        return Ok(graph);
    }

    for _ in 0..number_of_edges {
        let u = rng.gen_range(0..number_of_vertices);
        let v = rng.gen_range(0..number_of_vertices);
        let weight = rng.gen_range(0..=max_weight) as Weight;
        graph.add_undirected_edge(u, v, weight)?;
    }

    Ok(graph)
}

pub fn random_request(graph: &dyn Graph, rng: &mut impl Rng) -> Option<ShortestPathRequest> {
    if graph.number_of_vertices() == 0 {
        return None;
    }

    let source = rng.gen_range(0..graph.number_of_vertices());
    let target = rng.gen_range(0..graph.number_of_vertices());
    Some(ShortestPathRequest::new(source, target))
}

pub fn gen_requests(
    graph: &dyn Graph,
    number_of_requests: u32,
    rng: &mut impl Rng,
) -> Vec<ShortestPathRequest> {
    (0..number_of_requests)
        .filter_map(|_| random_request(graph, &mut *rng))
        .collect()
}

/// Answers all requests in parallel on the same graph. The graph is only read,
/// so every search runs independently.
pub fn shortest_path_weights_parallel(
    graph: &dyn Graph,
    requests: &[ShortestPathRequest],
) -> Result<Vec<Option<Weight>>, GraphError> {
    let dijkstra = Dijkstra::new(graph);
    requests
        .par_iter()
        .progress_count(requests.len() as u64)
        .map(|request| dijkstra.shortest_path_weight(request))
        .collect()
}

/// Average duration of a shortest path query over `requests`.
pub fn benchmark(
    path_finder: &dyn PathFinding,
    requests: &[ShortestPathRequest],
) -> Result<Duration, GraphError> {
    let mut total = Duration::ZERO;
    for request in requests.iter().progress() {
        let start = Instant::now();
        let _weight = path_finder.shortest_path_weight(request)?;
        total += start.elapsed();
    }

    Ok(total / requests.len().max(1) as u32)
}

/// Checks that `path` answers `request`: it starts at the source, ends at the
/// target, every hop is an edge of the graph and the cheapest such edges add
/// up to the reported weight.
pub fn validate_path(
    graph: &dyn Graph,
    request: &ShortestPathRequest,
    path: &Path,
) -> Result<(), String> {
    if path.vertices.first() != Some(&request.source()) {
        return Err("first vertex of path is not source of request".to_string());
    }
    if path.vertices.last() != Some(&request.target()) {
        return Err("last vertex of path is not target of request".to_string());
    }

    let mut true_weight: Weight = 0.0;
    for hop in path.vertices.windows(2) {
        let (tail, head): (VertexId, VertexId) = (hop[0], hop[1]);
        let edges = graph.edges(tail).map_err(|err| err.to_string())?;
        let min_weight = edges
            .iter()
            .filter(|edge| edge.head == head)
            .map(|edge| edge.weight)
            .min_by(|a, b| a.total_cmp(b))
            .ok_or_else(|| format!("no edge between {} and {} found", tail, head))?;
        true_weight += min_weight;
    }

    if true_weight != path.weight {
        return Err(format!(
            "path weight is {} but its edges add up to {}",
            path.weight, true_weight
        ));
    }

    Ok(())
}
