use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use clap::ValueEnum;
use graphs::{vec_vec_graph::VecVecGraph, Graph};
use log::info;

pub mod error;
pub mod graphs;
pub mod logging;
pub mod queue;
pub mod search;
pub mod spanning_tree;
pub mod utility;

pub use error::GraphError;

#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Json,
    Bincode,
}

pub fn read_graph(path: &Path, file_type: FileType) -> Result<VecVecGraph, GraphError> {
    let reader = BufReader::new(File::open(path)?);
    let graph: VecVecGraph = match file_type {
        FileType::Json => serde_json::from_reader(reader)?,
        FileType::Bincode => bincode::deserialize_from(reader)?,
    };
    info!(
        "read graph with {} vertices and {} edges from {}",
        graph.number_of_vertices(),
        graph.number_of_edges(),
        path.display()
    );
    Ok(graph)
}

pub fn write_graph(
    graph: &VecVecGraph,
    path: &Path,
    file_type: FileType,
) -> Result<(), GraphError> {
    let mut writer = BufWriter::new(File::create(path)?);
    match file_type {
        FileType::Json => serde_json::to_writer(&mut writer, graph)?,
        FileType::Bincode => bincode::serialize_into(&mut writer, graph)?,
    }
    writer.flush()?;
    Ok(())
}
