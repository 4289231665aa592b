// src/graph/sort.rs

use std::collections::HashMap;

use tracing::debug;

use crate::errors::GraphError;
use crate::graph::model::JobGraph;

/// DFS colour of a job id during the sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// On the current DFS stack; seeing it again is a back-edge.
    Temporary,
    /// Fully processed and already placed in the output.
    Permanent,
}

/// Produce a stable topological order over all job ids.
///
/// For every dependency edge "A depends on B", B appears before A. Jobs
/// with no dependency relation between them come out in canonical
/// (lexicographic) id order where the dependency edges allow it: the
/// driver walks ids in *reverse* canonical order, each visit walks
/// dependents in *reverse* canonical order, each finished id is appended
/// after its dependents, and the accumulated sequence is reversed at the
/// end. All three reversals are load bearing for stability; dropping any
/// one leaves the tie-breaking to recursion artifacts.
///
/// Fails with [`GraphError::Cycle`] the first time a job on the current
/// DFS stack is re-entered; a self-dependency is reported the same way.
pub fn topo_sort(graph: &JobGraph) -> Result<Vec<String>, GraphError> {
    let mut marks: HashMap<&str, Mark> = HashMap::with_capacity(graph.len());
    let mut ordered: Vec<String> = Vec::with_capacity(graph.len());

    for id in graph.ids().rev() {
        if marks.get(id) != Some(&Mark::Permanent) {
            visit(graph, id, &mut marks, &mut ordered)?;
        }
    }

    ordered.reverse();
    debug!(order = ?ordered, "topological sort complete");
    Ok(ordered)
}

/// Depth-first visit from `start` over dependent edges.
///
/// Runs the classic recursive three-colour visit on an explicit work stack
/// of (id, dependents-remaining) frames, so stack depth is bounded by the
/// graph size rather than the call stack. Ordering and cycle detection are
/// identical to the recursive formulation: a frame's id is appended to
/// `ordered` only once all of its dependents have been placed. Dependents
/// are walked back to front, i.e. in reverse canonical order, so sibling
/// jobs land in canonical order after the caller's final reversal.
fn visit<'g>(
    graph: &'g JobGraph,
    start: &'g str,
    marks: &mut HashMap<&'g str, Mark>,
    ordered: &mut Vec<String>,
) -> Result<(), GraphError> {
    let mut stack: Vec<(&'g str, usize)> = vec![(start, graph.dependents_of(start).len())];
    marks.insert(start, Mark::Temporary);

    while let Some(frame) = stack.last_mut() {
        let id = frame.0;
        let dependents = graph.dependents_of(id);

        let next = if frame.1 > 0 {
            frame.1 -= 1;
            Some(dependents[frame.1].as_str())
        } else {
            None
        };

        match next {
            Some(next) => match marks.get(next) {
                Some(Mark::Permanent) => {}
                Some(Mark::Temporary) => {
                    return Err(GraphError::Cycle(next.to_string()));
                }
                None => {
                    marks.insert(next, Mark::Temporary);
                    stack.push((next, graph.dependents_of(next).len()));
                }
            },
            None => {
                marks.insert(id, Mark::Permanent);
                ordered.push(id.to_string());
                stack.pop();
            }
        }
    }

    Ok(())
}
