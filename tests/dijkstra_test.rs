use lazy_paths::{
    graphs::{edge::WeightedEdge, vec_vec_graph::VecVecGraph, Graph, VertexId, Weight},
    search::{
        dijkstra::{shortest_path_weight, Dijkstra},
        PathFinding, ShortestPathRequest,
    },
    utility::{gen_requests, random_graph, shortest_path_weights_parallel, validate_path},
    GraphError,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn get_small_graph() -> VecVecGraph {
    let edges = [
        WeightedEdge::new(0, 1, 1.0),
        WeightedEdge::new(0, 2, 5.0),
        WeightedEdge::new(1, 2, 2.0),
        WeightedEdge::new(2, 3, 3.0),
        WeightedEdge::new(3, 1, 1.0),
    ];
    VecVecGraph::from_edges(5, &edges).unwrap()
}

/// Minimum weight over all simple paths, found by depth first enumeration.
fn brute_force_weight(graph: &dyn Graph, source: VertexId, target: VertexId) -> Option<Weight> {
    fn visit(
        graph: &dyn Graph,
        vertex: VertexId,
        target: VertexId,
        weight: Weight,
        on_path: &mut Vec<bool>,
        best: &mut Option<Weight>,
    ) {
        if vertex == target {
            if best.map_or(true, |best| weight < best) {
                *best = Some(weight);
            }
            return;
        }

        on_path[vertex as usize] = true;
        for edge in graph.edges(vertex).unwrap() {
            if !on_path[edge.head as usize] {
                visit(graph, edge.head, target, weight + edge.weight, on_path, best);
            }
        }
        on_path[vertex as usize] = false;
    }

    let mut on_path = vec![false; graph.number_of_vertices() as usize];
    let mut best = None;
    visit(graph, source, target, 0.0, &mut on_path, &mut best);
    best
}

#[test]
fn small_graph_weights() {
    let graph = get_small_graph();

    assert_eq!(shortest_path_weight(&graph, 0, 3).unwrap(), Some(6.0));
    assert_eq!(shortest_path_weight(&graph, 3, 4).unwrap(), None);
    assert_eq!(shortest_path_weight(&graph, 3, 2).unwrap(), Some(3.0));
    assert_eq!(shortest_path_weight(&graph, 2, 0).unwrap(), None);
}

#[test]
fn source_equals_target() {
    let graph = get_small_graph();
    for vertex in 0..graph.number_of_vertices() {
        assert_eq!(shortest_path_weight(&graph, vertex, vertex).unwrap(), Some(0.0));
    }

    let path = Dijkstra::new(&graph)
        .shortest_path(&ShortestPathRequest::new(4, 4))
        .unwrap()
        .unwrap();
    assert_eq!(path.vertices, vec![4]);
}

#[test]
fn invalid_vertex() {
    let graph = get_small_graph();
    assert!(matches!(
        shortest_path_weight(&graph, 0, 5),
        Err(GraphError::InvalidVertex { vertex: 5, number_of_vertices: 5 })
    ));
}

#[test]
fn random_graphs_match_brute_force() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let number_of_vertices = rng.gen_range(1..8);
        let number_of_edges = rng.gen_range(0..14);
        let graph = random_graph(number_of_vertices, number_of_edges, 9, &mut rng).unwrap();
        let dijkstra = Dijkstra::new(&graph);

        for request in gen_requests(&graph, 10, &mut rng) {
            let expected = brute_force_weight(&graph, request.source(), request.target());
            assert_eq!(dijkstra.shortest_path_weight(&request).unwrap(), expected);

            let path = dijkstra.shortest_path(&request).unwrap();
            assert_eq!(path.as_ref().map(|path| path.weight), expected);
            if let Some(path) = path {
                validate_path(&graph, &request, &path).unwrap();
            }
        }
    }
}

#[test]
fn repeated_queries_agree() {
    let mut rng = StdRng::seed_from_u64(7);
    let graph = random_graph(50, 200, 20, &mut rng).unwrap();
    let requests = gen_requests(&graph, 50, &mut rng);

    let first: Vec<_> = requests
        .iter()
        .map(|request| shortest_path_weight(&graph, request.source(), request.target()).unwrap())
        .collect();
    let second: Vec<_> = requests
        .iter()
        .map(|request| shortest_path_weight(&graph, request.source(), request.target()).unwrap())
        .collect();
    assert_eq!(first, second);
}

#[test]
fn parallel_queries_match_sequential() {
    let mut rng = StdRng::seed_from_u64(11);
    let graph = random_graph(200, 800, 50, &mut rng).unwrap();
    let requests = gen_requests(&graph, 100, &mut rng);

    let sequential: Vec<_> = requests
        .iter()
        .map(|request| shortest_path_weight(&graph, request.source(), request.target()).unwrap())
        .collect();
    let parallel = shortest_path_weights_parallel(&graph, &requests).unwrap();

    assert_eq!(sequential, parallel);
}

#[test]
fn heavier_parallel_edges_and_self_loops_change_nothing() {
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..50 {
        let graph = random_graph(10, 25, 9, &mut rng).unwrap();
        let requests = gen_requests(&graph, 20, &mut rng);

        let mut modified = graph.clone();
        let edges: Vec<_> = graph.all_edges().collect();
        for edge in &edges {
            modified
                .add_directed_edge(edge.tail, edge.head, edge.weight + 1.0)
                .unwrap();
        }
        for vertex in 0..graph.number_of_vertices() {
            modified.add_directed_edge(vertex, vertex, 0.0).unwrap();
        }

        for request in &requests {
            assert_eq!(
                shortest_path_weight(&graph, request.source(), request.target()).unwrap(),
                shortest_path_weight(&modified, request.source(), request.target()).unwrap()
            );
        }
    }
}

#[test]
fn single_source_matches_single_pair() {
    let mut rng = StdRng::seed_from_u64(5);
    let graph = random_graph(30, 90, 9, &mut rng).unwrap();
    let dijkstra = Dijkstra::new(&graph);

    let distances = dijkstra.single_source(0).unwrap();
    for target in 0..graph.number_of_vertices() {
        assert_eq!(
            distances[target as usize],
            shortest_path_weight(&graph, 0, target).unwrap()
        );
    }
}
