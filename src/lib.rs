//! mycelium-paths: path search and shortest-path analysis over mycelium networks.
//!
//! Models a fungal network as an undirected graph of cells, then answers path
//! queries over it: depth-first and breadth-first search between two cells,
//! and Dijkstra shortest paths for every ordered pair of cells.

pub mod cli;
pub mod config;
pub mod engine;
pub mod graph;
pub mod index;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::NetworkConfig;
pub use engine::{
    all_pairs_shortest_paths, dijkstra, shortest_path, AllPairsResult, NetworkSummary,
    PathFinder, PathStatistics, SearchComparison, ShortestPath, ShortestPathTree,
};
pub use graph::{
    breadth_first_search, depth_first_search, generate_network, path_edges, GeneratorParams,
    GraphBuilder, MyceliumGraph, Topology,
};
pub use index::CellTypeIndex;
pub use types::{Cell, CellType, Edge, MycoError, MycoResult};
