//! Fluent API for building MyceliumGraph instances.

use crate::types::{Cell, CellType, Edge, MycoResult};

use super::MyceliumGraph;

/// Fluent builder for constructing a MyceliumGraph.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    cells: Vec<Cell>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cell, returns the ID it will have in the built graph.
    pub fn add_cell(&mut self, cell_type: CellType, age: u32) -> u64 {
        let id = self.cells.len() as u64;
        self.cells.push(Cell::new(cell_type, age));
        id
    }

    /// Add `count` hypha cells of age 1, returns their IDs.
    pub fn add_hyphae(&mut self, count: usize) -> Vec<u64> {
        (0..count)
            .map(|_| self.add_cell(CellType::Hypha, 1))
            .collect()
    }

    /// Add an unweighted edge between two cells.
    pub fn link(&mut self, a: u64, b: u64) -> &mut Self {
        self.edges.push(Edge::new(a, b));
        self
    }

    /// Add a weighted edge between two cells.
    pub fn link_weighted(&mut self, a: u64, b: u64, weight: f64) -> &mut Self {
        self.edges.push(Edge::weighted(a, b, weight));
        self
    }

    /// Build the final MyceliumGraph, validating every edge.
    pub fn build(self) -> MycoResult<MyceliumGraph> {
        let mut graph = MyceliumGraph::new();
        for cell in self.cells {
            graph.add_node(cell);
        }
        for edge in self.edges {
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }
}
