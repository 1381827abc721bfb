//! Unweighted path search (DFS and BFS) between two nodes.

use std::collections::{HashMap, HashSet, VecDeque};

use log::debug;

use crate::types::{MycoError, MycoResult};

use super::Topology;

fn check_endpoints<G: Topology + ?Sized>(graph: &G, start: u64, target: u64) -> MycoResult<()> {
    if !graph.contains_node(start) {
        return Err(MycoError::NodeNotFound(start));
    }
    if !graph.contains_node(target) {
        return Err(MycoError::NodeNotFound(target));
    }
    Ok(())
}

/// Find a path from `start` to `target` by depth-first search.
///
/// Neighbors are explored in the order [`Topology::neighbors`] returns them,
/// and the first path reaching `target` wins, so the result is a simple path
/// but not necessarily a short one. Returns `Ok(None)` when `target` is
/// unreachable.
///
/// Backtracking uses an explicit stack of `(node, next neighbor index)`
/// frames; the nodes on the stack are the current path.
pub fn depth_first_search<G: Topology + ?Sized>(
    graph: &G,
    start: u64,
    target: u64,
) -> MycoResult<Option<Vec<u64>>> {
    check_endpoints(graph, start, target)?;
    if start == target {
        return Ok(Some(vec![start]));
    }

    let mut visited: HashSet<u64> = HashSet::new();
    let mut frames: Vec<(u64, usize)> = vec![(start, 0)];
    visited.insert(start);

    while let Some(frame) = frames.last_mut() {
        let (node, cursor) = *frame;
        let neighbors = graph.neighbors(node);
        let next = neighbors[cursor.min(neighbors.len())..]
            .iter()
            .position(|n| !visited.contains(n))
            .map(|offset| cursor + offset);

        match next {
            Some(idx) => {
                frame.1 = idx + 1;
                let neighbor = neighbors[idx];
                visited.insert(neighbor);
                frames.push((neighbor, 0));
                if neighbor == target {
                    let path: Vec<u64> = frames.iter().map(|&(n, _)| n).collect();
                    debug!(
                        "dfs {} -> {}: {} hops, {} visited",
                        start,
                        target,
                        path.len() - 1,
                        visited.len()
                    );
                    return Ok(Some(path));
                }
            }
            // Exhausted: backtrack.
            None => {
                frames.pop();
            }
        }
    }

    debug!("dfs {} -> {}: unreachable", start, target);
    Ok(None)
}

/// Find a shortest path (by edge count) from `start` to `target` by
/// breadth-first search. Returns `Ok(None)` when `target` is unreachable.
///
/// Each node remembers the node it was first discovered from; the path is
/// rebuilt from those parent links once `target` is discovered.
pub fn breadth_first_search<G: Topology + ?Sized>(
    graph: &G,
    start: u64,
    target: u64,
) -> MycoResult<Option<Vec<u64>>> {
    check_endpoints(graph, start, target)?;
    if start == target {
        return Ok(Some(vec![start]));
    }

    let mut parents: HashMap<u64, u64> = HashMap::new();
    let mut visited: HashSet<u64> = HashSet::new();
    let mut queue: VecDeque<u64> = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        for &neighbor in graph.neighbors(node) {
            if !visited.insert(neighbor) {
                continue;
            }
            parents.insert(neighbor, node);
            if neighbor == target {
                let path = rebuild_path(&parents, start, target);
                debug!(
                    "bfs {} -> {}: {} hops, {} visited",
                    start,
                    target,
                    path.len() - 1,
                    visited.len()
                );
                return Ok(Some(path));
            }
            queue.push_back(neighbor);
        }
    }

    debug!("bfs {} -> {}: unreachable", start, target);
    Ok(None)
}

/// Walk parent links back from `target` to `start`.
pub(crate) fn rebuild_path(parents: &HashMap<u64, u64>, start: u64, target: u64) -> Vec<u64> {
    let mut path = vec![target];
    let mut current = target;
    while current != start {
        match parents.get(&current) {
            Some(&parent) => {
                path.push(parent);
                current = parent;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

/// Consecutive node pairs of a path, i.e. the edges a renderer highlights.
pub fn path_edges(path: &[u64]) -> Vec<(u64, u64)> {
    path.windows(2).map(|w| (w[0], w[1])).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebuild_follows_parents() {
        let parents: HashMap<u64, u64> = [(1, 0), (2, 1), (3, 1)].into_iter().collect();
        assert_eq!(rebuild_path(&parents, 0, 2), vec![0, 1, 2]);
        assert_eq!(rebuild_path(&parents, 0, 0), vec![0]);
    }

    #[test]
    fn path_edges_pairs_neighbours() {
        assert_eq!(path_edges(&[3, 1, 4]), vec![(3, 1), (1, 4)]);
        assert!(path_edges(&[7]).is_empty());
    }
}
