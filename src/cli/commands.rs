//! CLI command implementations.

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::NetworkConfig;
use crate::engine::{NetworkSummary, PathFinder};
use crate::graph::{generate_network, MyceliumGraph};
use crate::types::{MycoError, MycoResult};

/// Generate the network described by `config`, seeded for reproducibility.
pub fn build_network(config: &NetworkConfig) -> MycoResult<MyceliumGraph> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let graph = generate_network(&config.generator_params(), &mut rng)?;
    info!(
        "Generated network with {} nodes and {} edges (seed {})",
        graph.node_count(),
        graph.edge_count(),
        config.seed
    );
    Ok(graph)
}

/// First and last node IDs, the default endpoints for path queries.
fn default_endpoints(graph: &MyceliumGraph) -> MycoResult<(u64, u64)> {
    match (graph.nodes().first(), graph.nodes().last()) {
        (Some(first), Some(last)) => Ok((first.id, last.id)),
        _ => Err(MycoError::NodeNotFound(0)),
    }
}

fn format_path(path: Option<&[u64]>) -> String {
    match path {
        Some(p) => {
            let ids: Vec<String> = p.iter().map(|id| id.to_string()).collect();
            format!("[{}]", ids.join(" -> "))
        }
        None => "no path".to_string(),
    }
}

/// Print structural statistics of a generated network.
pub fn cmd_analyze(config: &NetworkConfig, json: bool) -> MycoResult<()> {
    let graph = build_network(config)?;
    let summary = NetworkSummary::of(&graph);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).unwrap_or_default()
        );
    } else {
        println!("Network:");
        println!("  Nodes: {}", summary.node_count);
        println!("  Edges: {}", summary.edge_count);
        println!("Degree:");
        println!("  Mean: {:.2}", summary.mean_degree);
        println!("  Max: {}", summary.max_degree);
        println!("  Min: {}", summary.min_degree);
        println!("Cell types:");
        for (cell_type, count) in &summary.cell_types {
            println!("  {}: {}", cell_type, count);
        }
    }
    Ok(())
}

/// Run DFS and BFS between two nodes and print both paths.
pub fn cmd_search(
    config: &NetworkConfig,
    start: Option<u64>,
    target: Option<u64>,
    json: bool,
) -> MycoResult<()> {
    let graph = build_network(config)?;
    let (first, last) = default_endpoints(&graph)?;
    let start = start.unwrap_or(first);
    let target = target.unwrap_or(last);

    let finder = PathFinder::new(&graph);
    let comparison = finder.compare(start, target)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&comparison).unwrap_or_default()
        );
    } else {
        println!("Search {} -> {}", start, target);
        println!("  DFS: {}", format_path(comparison.dfs.as_deref()));
        println!("  BFS: {}", format_path(comparison.bfs.as_deref()));
        if let (Some(dfs), Some(bfs)) = (&comparison.dfs, &comparison.bfs) {
            println!("  Hops: DFS {}, BFS {}", dfs.len() - 1, bfs.len() - 1);
        }
    }
    Ok(())
}

/// Compute all-pairs shortest paths and print their statistics, the `top`
/// cheapest paths, and the path between two nodes.
pub fn cmd_paths(
    config: &NetworkConfig,
    source: Option<u64>,
    target: Option<u64>,
    top: usize,
    json: bool,
) -> MycoResult<()> {
    if !config.weighted {
        return Err(MycoError::Config(
            "shortest paths need weighted edges; set weighted = true or drop --unweighted"
                .to_string(),
        ));
    }
    let graph = build_network(config)?;
    let (first, last) = default_endpoints(&graph)?;
    let source = source.unwrap_or(first);
    let target = target.unwrap_or(last);

    let finder = PathFinder::new(&graph);
    let (all_pairs, stats) = finder.all_pairs_with_stats()?;
    info!("Computed {} ordered pairs", all_pairs.len());

    let cheapest = all_pairs.shortest_paths(top);
    let pair = finder.shortest_path(source, target)?;

    if json {
        let out = serde_json::json!({
            "pairs": all_pairs.len(),
            "statistics": stats,
            "shortest": cheapest,
            "pair": {
                "source": source,
                "target": target,
                "path": pair,
            },
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        println!("Shortest path statistics:");
        match &stats {
            Some(s) => {
                println!("  Paths: {}", s.count);
                println!("  Mean length: {:.2}", s.mean);
                println!("  Min length: {:.2}", s.min);
                println!("  Max length: {:.2}", s.max);
                println!("  Std deviation: {:.2}", s.std_dev);
            }
            None => println!("  No reachable pairs"),
        }
        if !cheapest.is_empty() {
            println!("Cheapest paths:");
            for sp in &cheapest {
                println!("  {:.3}  {}", sp.length, format_path(Some(sp.path.as_slice())));
            }
        }
        println!("Path {} -> {}:", source, target);
        match &pair {
            Some(sp) => {
                println!("  Path: {}", format_path(Some(sp.path.as_slice())));
                println!("  Length: {:.3}", sp.length);
            }
            None => println!("  no path"),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_path_joins_ids() {
        assert_eq!(format_path(Some(&[0u64, 5, 2][..])), "[0 -> 5 -> 2]");
        assert_eq!(format_path(None), "no path");
    }

    #[test]
    fn build_network_is_reproducible() {
        let config = NetworkConfig {
            nodes: 30,
            connection_probability: 0.2,
            ..Default::default()
        };
        let a = build_network(&config).unwrap();
        let b = build_network(&config).unwrap();
        assert_eq!(a.edges(), b.edges());
        assert_eq!(a.nodes(), b.nodes());
    }

    #[test]
    fn empty_network_has_no_endpoints() {
        let graph = MyceliumGraph::new();
        assert!(matches!(
            default_endpoints(&graph),
            Err(MycoError::NodeNotFound(0))
        ));
    }
}
