//! Summary statistics over networks and computed shortest paths.

use std::collections::BTreeMap;

use log::warn;
use serde::Serialize;

use crate::graph::MyceliumGraph;
use crate::types::CellType;

use super::shortest_path::AllPairsResult;

/// Aggregate measures over the lengths of all reachable pairs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathStatistics {
    /// Number of reachable (non-`None`) pairs.
    pub count: usize,
    /// Mean path length.
    pub mean: f64,
    /// Shortest path length.
    pub min: f64,
    /// Longest path length.
    pub max: f64,
    /// Population standard deviation of the path lengths.
    pub std_dev: f64,
}

impl PathStatistics {
    /// Reduce an all-pairs result. None if no pair is reachable.
    pub fn from_result(result: &AllPairsResult) -> Option<Self> {
        let stats = Self::from_lengths(&result.lengths());
        if stats.is_none() {
            warn!(
                "no reachable pairs among {} computed; path statistics unavailable",
                result.len()
            );
        }
        stats
    }

    /// Reduce a list of path lengths. None for an empty list.
    pub fn from_lengths(lengths: &[f64]) -> Option<Self> {
        if lengths.is_empty() {
            return None;
        }

        let count = lengths.len();
        let n = count as f64;
        let mean = lengths.iter().sum::<f64>() / n;
        let min = lengths.iter().copied().fold(f64::INFINITY, f64::min);
        let max = lengths.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let variance = lengths.iter().map(|l| (l - mean).powi(2)).sum::<f64>() / n;

        Some(Self {
            count,
            mean,
            min,
            max,
            std_dev: variance.sqrt(),
        })
    }
}

/// Structural overview of a network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkSummary {
    /// Number of cells.
    pub node_count: usize,
    /// Number of connections.
    pub edge_count: usize,
    /// Mean degree (0 for an empty network).
    pub mean_degree: f64,
    /// Highest degree.
    pub max_degree: usize,
    /// Lowest degree.
    pub min_degree: usize,
    /// Number of cells per type; types with no cells are left out.
    pub cell_types: BTreeMap<CellType, usize>,
}

impl NetworkSummary {
    /// Summarize a network.
    pub fn of(graph: &MyceliumGraph) -> Self {
        let degrees: Vec<usize> = graph.nodes().iter().map(|n| graph.degree(n.id)).collect();
        let mean_degree = if degrees.is_empty() {
            0.0
        } else {
            degrees.iter().sum::<usize>() as f64 / degrees.len() as f64
        };

        Self {
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            mean_degree,
            max_degree: degrees.iter().copied().max().unwrap_or(0),
            min_degree: degrees.iter().copied().min().unwrap_or(0),
            cell_types: graph.cell_type_index().distribution(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_std_dev() {
        let stats = PathStatistics::from_lengths(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(stats.count, 8);
        assert!((stats.mean - 5.0).abs() < 1e-12);
        assert!((stats.std_dev - 2.0).abs() < 1e-12);
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 9.0);
    }

    #[test]
    fn empty_lengths_have_no_stats() {
        assert!(PathStatistics::from_lengths(&[]).is_none());
    }
}
