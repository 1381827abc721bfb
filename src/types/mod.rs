//! All data types for the mycelium-paths library.

pub mod cell;
pub mod edge;
pub mod error;

pub use cell::{Cell, CellType};
pub use edge::Edge;
pub use error::{MycoError, MycoResult};

/// Largest age the random generator assigns to a cell.
pub const MAX_CELL_AGE: u32 = 100;

/// Default number of cells in a generated network.
pub const DEFAULT_NODE_COUNT: usize = 100;

/// Default Erdős–Rényi connection probability.
pub const DEFAULT_CONNECTION_PROBABILITY: f64 = 0.05;
