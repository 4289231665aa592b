// src/graph/model.rs

use std::collections::BTreeMap;

use crate::config::model::ConfigFile;

/// A single job node: its command plus both adjacency directions.
#[derive(Debug, Clone)]
pub struct Job {
    pub id: String,
    /// Opaque command payload, passed through to the executor.
    pub command: String,
    /// Direct dependencies: jobs that must complete before this one runs.
    pub deps: Vec<String>,
    /// Direct dependents: jobs that list this one in their `deps`.
    /// Mirrored from `deps` at build time; never mutated afterwards.
    pub dependents: Vec<String>,
}

/// In-memory job graph keyed by job id.
///
/// The `BTreeMap` gives a fixed lexicographic iteration order over ids; the
/// stability of the computed execution order depends on it.
#[derive(Debug, Clone)]
pub struct JobGraph {
    jobs: BTreeMap<String, Job>,
}

impl JobGraph {
    /// Build a graph from a validated [`ConfigFile`].
    ///
    /// Assumes every `deps` reference names a declared job (loader
    /// validation ran first). Two passes: create nodes with their `deps`,
    /// then mirror every edge into the dependency's `dependents`.
    pub fn from_config(cfg: &ConfigFile) -> Self {
        let mut jobs: BTreeMap<String, Job> = BTreeMap::new();

        for (id, jc) in cfg.job.iter() {
            jobs.insert(
                id.clone(),
                Job {
                    id: id.clone(),
                    command: jc.command.clone(),
                    deps: jc.deps.clone(),
                    dependents: Vec::new(),
                },
            );
        }

        let ids: Vec<String> = jobs.keys().cloned().collect();
        for id in ids {
            // clone to avoid borrowing issues while mutating
            let deps = jobs.get(&id).map(|j| j.deps.clone()).unwrap_or_default();

            for dep in deps {
                if let Some(dep_job) = jobs.get_mut(&dep) {
                    dep_job.dependents.push(id.clone());
                }
            }
        }

        Self { jobs }
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn get(&self, id: &str) -> Option<&Job> {
        self.jobs.get(id)
    }

    /// All job ids in canonical (lexicographic) order.
    pub fn ids(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.jobs.keys().map(|s| s.as_str())
    }

    /// Immediate dependencies of a job.
    pub fn dependencies_of(&self, id: &str) -> &[String] {
        self.jobs.get(id).map(|j| j.deps.as_slice()).unwrap_or(&[])
    }

    /// Immediate dependents of a job.
    pub fn dependents_of(&self, id: &str) -> &[String] {
        self.jobs
            .get(id)
            .map(|j| j.dependents.as_slice())
            .unwrap_or(&[])
    }
}
