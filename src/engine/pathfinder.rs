//! Path queries over one network snapshot.

use serde::Serialize;

use crate::graph::traversal::{breadth_first_search, depth_first_search};
use crate::graph::Topology;
use crate::types::MycoResult;

use super::shortest_path::{
    all_pairs_shortest_paths, shortest_path, AllPairsResult, ShortestPath,
};
use super::stats::PathStatistics;

/// Result of running both unweighted searches between the same endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchComparison {
    /// Start node.
    pub start: u64,
    /// Target node.
    pub target: u64,
    /// First path found by depth-first search.
    pub dfs: Option<Vec<u64>>,
    /// Fewest-hops path found by breadth-first search.
    pub bfs: Option<Vec<u64>>,
}

/// Runs path queries against a borrowed graph. The graph is never mutated.
pub struct PathFinder<'g, G: Topology + ?Sized> {
    graph: &'g G,
}

impl<'g, G: Topology + ?Sized> PathFinder<'g, G> {
    /// Create a path finder over `graph`.
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// The graph being searched.
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    /// Some path from `start` to `target`, found depth-first.
    pub fn depth_first(&self, start: u64, target: u64) -> MycoResult<Option<Vec<u64>>> {
        depth_first_search(self.graph, start, target)
    }

    /// A fewest-hops path from `start` to `target`.
    pub fn breadth_first(&self, start: u64, target: u64) -> MycoResult<Option<Vec<u64>>> {
        breadth_first_search(self.graph, start, target)
    }

    /// Both searches for one pair of endpoints.
    pub fn compare(&self, start: u64, target: u64) -> MycoResult<SearchComparison> {
        Ok(SearchComparison {
            start,
            target,
            dfs: self.depth_first(start, target)?,
            bfs: self.breadth_first(start, target)?,
        })
    }

    /// Minimum-weight path between two nodes.
    pub fn shortest_path(&self, source: u64, target: u64) -> MycoResult<Option<ShortestPath>> {
        shortest_path(self.graph, source, target)
    }

    /// Minimum-weight paths for all ordered pairs.
    pub fn all_pairs(&self) -> MycoResult<AllPairsResult> {
        all_pairs_shortest_paths(self.graph)
    }

    /// All-pairs result together with its statistics.
    pub fn all_pairs_with_stats(&self) -> MycoResult<(AllPairsResult, Option<PathStatistics>)> {
        let result = self.all_pairs()?;
        let stats = PathStatistics::from_result(&result);
        Ok((result, stats))
    }
}
