//! In-memory network model and unweighted search.

pub mod builder;
pub mod generator;
pub mod network;
pub mod traversal;

pub use builder::GraphBuilder;
pub use generator::{generate_network, GeneratorParams};
pub use network::MyceliumGraph;
pub use traversal::{breadth_first_search, depth_first_search, path_edges};

/// Read-only view of an undirected graph, as consumed by every search.
///
/// Searches never mutate the graph, so any structure that can enumerate its
/// nodes, list a node's neighbors and report edge weights can be searched.
pub trait Topology {
    /// All node identifiers, in the graph's own order.
    fn node_ids(&self) -> Vec<u64>;

    /// Whether `id` names a node of this graph.
    fn contains_node(&self, id: u64) -> bool;

    /// Neighbors of `id`. Unknown nodes have none.
    fn neighbors(&self, id: u64) -> &[u64];

    /// Weight of the edge `a`-`b`; None if the edge is absent or unweighted.
    fn edge_weight(&self, a: u64, b: u64) -> Option<f64>;
}
