use std::collections::BTreeMap;
use std::error::Error;

use rundag::config::{ConfigFile, JobConfig};
use rundag::errors::GraphError;
use rundag::graph::{preprocess, JobGraph};

type TestResult = Result<(), Box<dyn Error>>;

fn declare(jobs: &[(&str, &[&str])]) -> ConfigFile {
    let mut map = BTreeMap::new();
    for (id, deps) in jobs {
        map.insert(
            (*id).to_string(),
            JobConfig {
                command: format!("echo {id}"),
                deps: deps.iter().map(|d| (*d).to_string()).collect(),
            },
        );
    }
    ConfigFile { job: map }
}

#[test]
fn empty_graph_is_rejected() -> TestResult {
    let graph = JobGraph::from_config(&ConfigFile::default());
    let err = preprocess(&graph).unwrap_err();
    assert!(matches!(err, GraphError::EmptyGraph));
    Ok(())
}

#[test]
fn two_job_cycle_is_rejected() -> TestResult {
    let graph = JobGraph::from_config(&declare(&[("A", &["B"]), ("B", &["A"])]));
    let err = preprocess(&graph).unwrap_err();
    assert!(matches!(err, GraphError::Cycle(_)));
    Ok(())
}

#[test]
fn self_dependency_is_rejected_as_cycle() -> TestResult {
    let graph = JobGraph::from_config(&declare(&[("A", &["A"])]));
    let err = preprocess(&graph).unwrap_err();
    assert!(matches!(err, GraphError::Cycle(ref id) if id == "A"));
    Ok(())
}

#[test]
fn longer_cycle_is_rejected() -> TestResult {
    let graph = JobGraph::from_config(&declare(&[
        ("A", &["C"]),
        ("B", &["A"]),
        ("C", &["B"]),
    ]));
    let err = preprocess(&graph).unwrap_err();
    assert!(matches!(err, GraphError::Cycle(_)));
    Ok(())
}

#[test]
fn two_isolated_jobs_are_rejected() -> TestResult {
    let graph = JobGraph::from_config(&declare(&[("A", &[]), ("B", &[])]));
    let err = preprocess(&graph).unwrap_err();
    assert!(matches!(err, GraphError::Disconnected));
    Ok(())
}

#[test]
fn two_separate_chains_are_rejected() -> TestResult {
    let graph = JobGraph::from_config(&declare(&[
        ("A", &[]),
        ("B", &["A"]),
        ("C", &[]),
        ("D", &["C"]),
    ]));
    let err = preprocess(&graph).unwrap_err();
    assert!(matches!(err, GraphError::Disconnected));
    Ok(())
}

#[test]
fn cycle_is_reported_before_disconnection() -> TestResult {
    // One component is a cycle, another is an isolated job; the sort runs
    // first, so the cycle error wins.
    let graph = JobGraph::from_config(&declare(&[
        ("A", &["B"]),
        ("B", &["A"]),
        ("C", &[]),
    ]));
    let err = preprocess(&graph).unwrap_err();
    assert!(matches!(err, GraphError::Cycle(_)));
    Ok(())
}

#[test]
fn connectivity_ignores_edge_direction() -> TestResult {
    // The traversal starts at "A", which has no dependents; reaching the
    // rest of the graph requires walking its dependency edge backwards,
    // so this only passes if the check treats edges as undirected.
    let graph = JobGraph::from_config(&declare(&[
        ("A", &["B"]),
        ("B", &[]),
        ("C", &["B"]),
    ]));
    assert!(preprocess(&graph).is_ok());
    Ok(())
}
