//! Core graph structure: cells and undirected edges with an adjacency index.

use std::collections::HashMap;

use crate::index::CellTypeIndex;
use crate::types::edge::edge_key;
use crate::types::{Cell, Edge, MycoError, MycoResult};

use super::Topology;

/// An undirected mycelium network: cells as nodes, hyphal connections as edges.
#[derive(Debug, Clone, Default)]
pub struct MyceliumGraph {
    /// All cells, indexed by ID.
    nodes: Vec<Cell>,
    /// All edges in insertion order.
    edges: Vec<Edge>,
    /// Normalized endpoint pair -> position in `edges`.
    edge_index: HashMap<(u64, u64), usize>,
    /// Node ID -> neighbor IDs, in edge insertion order.
    adjacency: HashMap<u64, Vec<u64>>,
    /// Cell type index.
    pub(crate) cell_type_index: CellTypeIndex,
}

impl MyceliumGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Get a node by ID.
    pub fn get_node(&self, id: u64) -> Option<&Cell> {
        usize::try_from(id).ok().and_then(|idx| self.nodes.get(idx))
    }

    /// Get all nodes (immutable slice).
    pub fn nodes(&self) -> &[Cell] {
        &self.nodes
    }

    /// Get all edges (immutable slice).
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Look up the edge joining two nodes, in either orientation.
    pub fn get_edge(&self, a: u64, b: u64) -> Option<&Edge> {
        self.edge_index
            .get(&edge_key(a, b))
            .map(|&pos| &self.edges[pos])
    }

    /// Number of edges touching a node.
    pub fn degree(&self, id: u64) -> usize {
        self.adjacency.get(&id).map(|n| n.len()).unwrap_or(0)
    }

    /// Get the cell type index.
    pub fn cell_type_index(&self) -> &CellTypeIndex {
        &self.cell_type_index
    }

    /// Add a node, returns the assigned ID.
    pub fn add_node(&mut self, mut cell: Cell) -> u64 {
        let id = self.nodes.len() as u64;
        cell.id = id;
        self.cell_type_index.add_node(&cell);
        self.nodes.push(cell);
        id
    }

    /// Add an edge between two existing nodes.
    ///
    /// Adding a pair that is already connected replaces its weight.
    pub fn add_edge(&mut self, edge: Edge) -> MycoResult<()> {
        if edge.source_id == edge.target_id {
            return Err(MycoError::SelfEdge(edge.source_id));
        }
        if self.get_node(edge.source_id).is_none() {
            return Err(MycoError::NodeNotFound(edge.source_id));
        }
        if self.get_node(edge.target_id).is_none() {
            return Err(MycoError::NodeNotFound(edge.target_id));
        }

        let key = edge.key();
        if let Some(&pos) = self.edge_index.get(&key) {
            self.edges[pos].weight = edge.weight;
            return Ok(());
        }

        self.edge_index.insert(key, self.edges.len());
        self.edges.push(edge);
        self.adjacency
            .entry(edge.source_id)
            .or_default()
            .push(edge.target_id);
        self.adjacency
            .entry(edge.target_id)
            .or_default()
            .push(edge.source_id);

        Ok(())
    }
}

impl Topology for MyceliumGraph {
    fn node_ids(&self) -> Vec<u64> {
        self.nodes.iter().map(|n| n.id).collect()
    }

    fn contains_node(&self, id: u64) -> bool {
        self.get_node(id).is_some()
    }

    fn neighbors(&self, id: u64) -> &[u64] {
        self.adjacency
            .get(&id)
            .map(|n| n.as_slice())
            .unwrap_or(&[])
    }

    fn edge_weight(&self, a: u64, b: u64) -> Option<f64> {
        self.get_edge(a, b).and_then(|e| e.weight)
    }
}
