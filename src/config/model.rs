// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

/// Top-level job declaration as read from a TOML file.
///
/// ```toml
/// [job.fetch]
/// command = "git pull"
///
/// [job.build]
/// command = "cargo build"
/// deps = ["fetch"]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// All jobs from `[job.<id>]`.
    ///
    /// Keys are the job ids. A `BTreeMap` keeps them in lexicographic
    /// order, which downstream ordering relies on.
    #[serde(default)]
    pub job: BTreeMap<String, JobConfig>,
}

/// `[job.<id>]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct JobConfig {
    /// The shell command to execute. Opaque to everything but the executor.
    pub command: String,

    /// Ids of jobs that must complete before this one starts.
    #[serde(default)]
    pub deps: Vec<String>,
}
