//! Secondary indexes over network nodes.

pub mod cell_type_index;

pub use cell_type_index::CellTypeIndex;
