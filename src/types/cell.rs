//! Cell types and the node struct of a mycelium network.

use serde::{Deserialize, Serialize};

/// The kind of fungal cell a node represents.
///
/// Purely descriptive: path search and shortest-path costs never look at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellType {
    /// Filament segment carrying nutrients.
    Hypha,
    /// Reproductive cell.
    Spore,
    /// Growing end of a hypha.
    MycelialTip,
}

impl CellType {
    /// Every cell type, in declaration order.
    pub const ALL: [CellType; 3] = [Self::Hypha, Self::Spore, Self::MycelialTip];

    /// Return a human-readable name for this cell type.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hypha => "hypha",
            Self::Spore => "spore",
            Self::MycelialTip => "mycelial_tip",
        }
    }
}

impl std::fmt::Display for CellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single node of the network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    /// Unique identifier (assigned sequentially by the graph).
    pub id: u64,
    /// Kind of cell.
    pub cell_type: CellType,
    /// Age in arbitrary ticks.
    pub age: u32,
}

impl Cell {
    /// Create a cell; the graph assigns the real ID on insertion.
    pub fn new(cell_type: CellType, age: u32) -> Self {
        Self {
            id: 0,
            cell_type,
            age,
        }
    }
}
