//! Index by cell type. Maps each CellType to sorted node IDs.

use std::collections::BTreeMap;

use crate::types::{Cell, CellType};

/// Maps each CellType to a sorted list of node IDs.
#[derive(Debug, Clone, Default)]
pub struct CellTypeIndex {
    index: BTreeMap<CellType, Vec<u64>>,
}

impl CellTypeIndex {
    /// Create a new, empty cell type index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Incrementally add a new cell.
    pub fn add_node(&mut self, cell: &Cell) {
        let list = self.index.entry(cell.cell_type).or_default();
        let pos = list.binary_search(&cell.id).unwrap_or_else(|p| p);
        list.insert(pos, cell.id);
    }

    /// Count per cell type, skipping types with no cells.
    pub fn distribution(&self) -> BTreeMap<CellType, usize> {
        self.index
            .iter()
            .filter(|(_, ids)| !ids.is_empty())
            .map(|(&cell_type, ids)| (cell_type, ids.len()))
            .collect()
    }

    /// Number of total entries across all types.
    pub fn len(&self) -> usize {
        self.index.values().map(|v| v.len()).sum()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(id: u64, cell_type: CellType) -> Cell {
        Cell {
            id,
            cell_type,
            age: 1,
        }
    }

    #[test]
    fn distribution_counts_added_cells() {
        let mut index = CellTypeIndex::new();
        assert!(index.is_empty());
        index.add_node(&cell(4, CellType::Spore));
        index.add_node(&cell(1, CellType::Spore));
        index.add_node(&cell(2, CellType::Hypha));
        assert_eq!(index.len(), 3);

        let dist = index.distribution();
        assert_eq!(dist.len(), 2);
        assert_eq!(dist[&CellType::Spore], 2);
        assert_eq!(dist[&CellType::Hypha], 1);
        assert!(!dist.contains_key(&CellType::MycelialTip));
    }
}
