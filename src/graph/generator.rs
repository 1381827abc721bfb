//! Random network factory (Erdős–Rényi G(n, p) with random cell attributes).

use log::debug;
use rand::Rng;

use crate::types::{
    Cell, CellType, Edge, MycoError, MycoResult, DEFAULT_CONNECTION_PROBABILITY,
    DEFAULT_NODE_COUNT, MAX_CELL_AGE,
};

use super::MyceliumGraph;

/// Parameters for generating a random network.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorParams {
    /// Number of cells.
    pub num_nodes: usize,
    /// Probability that any given pair of cells is connected.
    pub connection_probability: f64,
    /// Half-open `[min, max)` range for edge weights. None leaves edges unweighted.
    pub weight_range: Option<(f64, f64)>,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            num_nodes: DEFAULT_NODE_COUNT,
            connection_probability: DEFAULT_CONNECTION_PROBABILITY,
            weight_range: None,
        }
    }
}

impl GeneratorParams {
    /// Check the parameters without generating anything.
    pub fn validate(&self) -> MycoResult<()> {
        let p = self.connection_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(MycoError::InvalidProbability(p));
        }
        if let Some((min, max)) = self.weight_range {
            let valid = min.is_finite() && max.is_finite() && min > 0.0 && min < max;
            if !valid {
                return Err(MycoError::InvalidWeightRange { min, max });
            }
        }
        Ok(())
    }
}

/// Generate a random network.
///
/// Every unordered pair of cells is connected independently with
/// `connection_probability`. Each cell gets a uniformly chosen [`CellType`]
/// and an age in `1..=MAX_CELL_AGE`. Pass a seeded RNG for reproducible output.
pub fn generate_network<R: Rng + ?Sized>(
    params: &GeneratorParams,
    rng: &mut R,
) -> MycoResult<MyceliumGraph> {
    params.validate()?;

    let mut graph = MyceliumGraph::new();
    for _ in 0..params.num_nodes {
        let cell_type = CellType::ALL[rng.gen_range(0..CellType::ALL.len())];
        let age = rng.gen_range(1..=MAX_CELL_AGE);
        graph.add_node(Cell::new(cell_type, age));
    }

    let n = params.num_nodes as u64;
    for a in 0..n {
        for b in (a + 1)..n {
            if !rng.gen_bool(params.connection_probability) {
                continue;
            }
            let edge = match params.weight_range {
                Some((min, max)) => Edge::weighted(a, b, rng.gen_range(min..max)),
                None => Edge::new(a, b),
            };
            graph.add_edge(edge)?;
        }
    }

    debug!(
        "generated network: {} nodes, {} edges (p = {})",
        graph.node_count(),
        graph.edge_count(),
        params.connection_probability
    );

    Ok(graph)
}
