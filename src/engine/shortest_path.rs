//! Weighted shortest paths: Dijkstra from one source, and all pairs.
//!
//! Every edge on the way must carry a positive, finite weight. An edge that
//! breaks this is reported as an error instead of producing wrong distances.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap, HashMap};

use log::debug;
use serde::ser::{Serialize, Serializer};

use crate::graph::traversal::{path_edges, rebuild_path};
use crate::graph::Topology;
use crate::types::{MycoError, MycoResult};

/// A minimum-weight path and its total weight.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ShortestPath {
    /// Nodes from source to target, inclusive.
    pub path: Vec<u64>,
    /// Sum of edge weights along `path`.
    pub length: f64,
}

impl ShortestPath {
    /// First node of the path, None for an empty path.
    pub fn source(&self) -> Option<u64> {
        self.path.first().copied()
    }

    /// Last node of the path, None for an empty path.
    pub fn target(&self) -> Option<u64> {
        self.path.last().copied()
    }

    /// Number of edges on the path.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Consecutive node pairs along the path.
    pub fn edges(&self) -> Vec<(u64, u64)> {
        path_edges(&self.path)
    }
}

/// Distances and predecessor links from one Dijkstra run.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: u64,
    distances: HashMap<u64, f64>,
    parents: HashMap<u64, u64>,
}

impl ShortestPathTree {
    /// The node the tree was grown from.
    pub fn source(&self) -> u64 {
        self.source
    }

    /// Minimum total weight from the source, None if unreachable.
    pub fn distance_to(&self, target: u64) -> Option<f64> {
        self.distances.get(&target).copied()
    }

    /// Minimum-weight node sequence from the source, None if unreachable.
    pub fn path_to(&self, target: u64) -> Option<Vec<u64>> {
        self.distances
            .contains_key(&target)
            .then(|| rebuild_path(&self.parents, self.source, target))
    }

    /// Path and length together.
    pub fn to(&self, target: u64) -> Option<ShortestPath> {
        let length = self.distance_to(target)?;
        let path = self.path_to(target)?;
        Some(ShortestPath { path, length })
    }

    /// Number of nodes reachable from the source, the source included.
    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }
}

/// Heap entry; ordered so that `BinaryHeap` pops the smallest cost first.
#[derive(Debug, Clone, Copy, PartialEq)]
struct State {
    cost: f64,
    node: u64,
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn edge_cost<G: Topology + ?Sized>(graph: &G, source_id: u64, target_id: u64) -> MycoResult<f64> {
    match graph.edge_weight(source_id, target_id) {
        None => Err(MycoError::MissingWeight {
            source_id,
            target_id,
        }),
        Some(weight) if weight > 0.0 && weight.is_finite() => Ok(weight),
        Some(weight) => Err(MycoError::InvalidWeight {
            source_id,
            target_id,
            weight,
        }),
    }
}

/// Single-source shortest paths by Dijkstra's algorithm.
pub fn dijkstra<G: Topology + ?Sized>(graph: &G, source: u64) -> MycoResult<ShortestPathTree> {
    if !graph.contains_node(source) {
        return Err(MycoError::NodeNotFound(source));
    }

    let mut distances: HashMap<u64, f64> = HashMap::new();
    let mut parents: HashMap<u64, u64> = HashMap::new();
    let mut heap = BinaryHeap::new();

    distances.insert(source, 0.0);
    heap.push(State {
        cost: 0.0,
        node: source,
    });

    while let Some(State { cost, node }) = heap.pop() {
        // Stale entry: a cheaper route was already settled.
        if distances.get(&node).is_some_and(|&best| cost > best) {
            continue;
        }

        for &neighbor in graph.neighbors(node) {
            let candidate = cost + edge_cost(graph, node, neighbor)?;
            let improves = distances
                .get(&neighbor)
                .map_or(true, |&current| candidate < current);
            if improves {
                distances.insert(neighbor, candidate);
                parents.insert(neighbor, node);
                heap.push(State {
                    cost: candidate,
                    node: neighbor,
                });
            }
        }
    }

    Ok(ShortestPathTree {
        source,
        distances,
        parents,
    })
}

/// Minimum-weight path between two nodes. `Ok(None)` when unreachable.
pub fn shortest_path<G: Topology + ?Sized>(
    graph: &G,
    source: u64,
    target: u64,
) -> MycoResult<Option<ShortestPath>> {
    if !graph.contains_node(target) {
        return Err(MycoError::NodeNotFound(target));
    }
    Ok(dijkstra(graph, source)?.to(target))
}

/// Shortest paths for every ordered pair of distinct nodes.
///
/// Pairs are keyed `(source, target)`; `source == target` is never stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AllPairsResult {
    pairs: BTreeMap<(u64, u64), Option<ShortestPath>>,
}

impl AllPairsResult {
    /// The path for a pair, None if unreachable or not a stored pair.
    pub fn get(&self, source: u64, target: u64) -> Option<&ShortestPath> {
        self.pairs.get(&(source, target)).and_then(|p| p.as_ref())
    }

    /// Whether the pair was computed (reachable or not).
    pub fn contains_pair(&self, source: u64, target: u64) -> bool {
        self.pairs.contains_key(&(source, target))
    }

    /// Number of stored pairs, unreachable ones included.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether no pair was stored.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// All stored pairs in `(source, target)` order.
    pub fn iter(&self) -> impl Iterator<Item = ((u64, u64), Option<&ShortestPath>)> + '_ {
        self.pairs.iter().map(|(&key, path)| (key, path.as_ref()))
    }

    /// Only the reachable pairs.
    pub fn reachable(&self) -> impl Iterator<Item = &ShortestPath> + '_ {
        self.pairs.values().filter_map(|p| p.as_ref())
    }

    /// Lengths of all reachable pairs.
    pub fn lengths(&self) -> Vec<f64> {
        self.reachable().map(|p| p.length).collect()
    }

    /// The `k` cheapest reachable paths, ties kept in `(source, target)` order.
    pub fn shortest_paths(&self, k: usize) -> Vec<&ShortestPath> {
        let mut paths: Vec<&ShortestPath> = self.reachable().collect();
        paths.sort_by(|a, b| a.length.total_cmp(&b.length));
        paths.truncate(k);
        paths
    }
}

#[derive(serde::Serialize)]
struct PairEntry<'a> {
    source: u64,
    target: u64,
    path: Option<&'a [u64]>,
    length: Option<f64>,
}

impl Serialize for AllPairsResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(|((source, target), found)| PairEntry {
            source,
            target,
            path: found.map(|p| p.path.as_slice()),
            length: found.map(|p| p.length),
        }))
    }
}

/// Run Dijkstra once per node and collect every ordered pair.
pub fn all_pairs_shortest_paths<G: Topology + ?Sized>(graph: &G) -> MycoResult<AllPairsResult> {
    let nodes = graph.node_ids();
    let mut pairs = BTreeMap::new();

    for &source in &nodes {
        let tree = dijkstra(graph, source)?;
        for &target in &nodes {
            if target != source {
                pairs.insert((source, target), tree.to(target));
            }
        }
    }

    let result = AllPairsResult { pairs };
    debug!(
        "all-pairs: {} nodes, {} pairs, {} reachable",
        nodes.len(),
        result.len(),
        result.reachable().count()
    );
    Ok(result)
}
