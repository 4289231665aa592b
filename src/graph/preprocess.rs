// src/graph/preprocess.rs

use tracing::info;

use crate::errors::GraphError;
use crate::graph::connectivity::check_connected;
use crate::graph::model::JobGraph;
use crate::graph::sort::topo_sort;

/// Validate the graph and compute the execution order.
///
/// The single entry point the driver calls:
/// 1. An empty graph fails with [`GraphError::EmptyGraph`] before either
///    traversal runs.
/// 2. The topological sort runs first; its cycle error propagates
///    unchanged. A graph that is both cyclic and disconnected therefore
///    reports the cycle.
/// 3. The connectivity check runs second; its error propagates unchanged.
///
/// The order is returned only when every check passes; there is no partial
/// result.
pub fn preprocess(graph: &JobGraph) -> Result<Vec<String>, GraphError> {
    if graph.is_empty() {
        return Err(GraphError::EmptyGraph);
    }

    let ids_ordered = topo_sort(graph)?;
    check_connected(graph)?;

    info!(jobs = ids_ordered.len(), "job graph validated and ordered");
    Ok(ids_ordered)
}
