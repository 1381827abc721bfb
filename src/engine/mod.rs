//! High-level operations: weighted shortest paths, statistics, and the path finder.

pub mod pathfinder;
pub mod shortest_path;
pub mod stats;

pub use pathfinder::{PathFinder, SearchComparison};
pub use shortest_path::{
    all_pairs_shortest_paths, dijkstra, shortest_path, AllPairsResult, ShortestPath,
    ShortestPathTree,
};
pub use stats::{NetworkSummary, PathStatistics};
