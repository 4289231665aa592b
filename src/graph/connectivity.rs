// src/graph/connectivity.rs

use std::collections::HashSet;

use tracing::debug;

use crate::errors::GraphError;
use crate::graph::model::JobGraph;

/// Verify the jobs form a single connected component.
///
/// Edges are treated as undirected: an iterative depth-first traversal
/// starts from the first id in canonical order and follows both dependent
/// and dependency edges. If it cannot reach every job, the graph splits
/// into unrelated pieces and [`GraphError::Disconnected`] is returned (no
/// attempt is made to identify which jobs are unreachable).
///
/// An empty graph is vacuously connected here; the caller rejects empty
/// graphs before invoking this check.
pub fn check_connected(graph: &JobGraph) -> Result<(), GraphError> {
    let Some(first) = graph.ids().next() else {
        return Ok(());
    };

    let mut visited: HashSet<&str> = HashSet::with_capacity(graph.len());
    let mut stack: Vec<&str> = vec![first];

    while let Some(id) = stack.pop() {
        if !visited.insert(id) {
            continue;
        }

        for neighbour in graph
            .dependents_of(id)
            .iter()
            .chain(graph.dependencies_of(id).iter())
        {
            if !visited.contains(neighbour.as_str()) {
                stack.push(neighbour.as_str());
            }
        }
    }

    debug!(
        visited = visited.len(),
        total = graph.len(),
        "connectivity traversal complete"
    );

    if visited.len() < graph.len() {
        return Err(GraphError::Disconnected);
    }
    Ok(())
}
