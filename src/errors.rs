// src/errors.rs

//! Structured error types for the whole pipeline.
//!
//! Every failure belongs to exactly one stage (load / validate / execute),
//! and the driver maps the stage to a distinct process exit code. None of
//! these are retried internally: the first error aborts the run.

use thiserror::Error;

/// Errors raised while validating and ordering the job graph.
#[derive(Debug, Error)]
pub enum GraphError {
    /// No jobs were supplied at all.
    #[error("job graph is empty")]
    EmptyGraph,

    /// The dependency relation is not acyclic. The named job is one that
    /// sits on the detected cycle (a self-dependency reports itself).
    #[error("dependency cycle detected involving job '{0}'")]
    Cycle(String),

    /// The jobs split into more than one connected component.
    #[error("job graph has more than one connected component")]
    Disconnected,
}

/// Errors raised while executing the ordered jobs.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The command could not be launched at all.
    #[error("job '{id}': failed to launch command")]
    Spawn {
        id: String,
        #[source]
        source: std::io::Error,
    },

    /// The command ran but exited non-zero (-1 when killed by a signal).
    #[error("job '{id}': command exited with code {code}")]
    JobFailed { id: String, code: i32 },

    /// The ordered id list referenced a job missing from the graph.
    /// Cannot happen for an order produced by `preprocess` on the same
    /// graph; kept as an error rather than a panic.
    #[error("job '{0}' is not in the graph")]
    UnknownJob(String),
}

/// Top-level error returned by [`crate::run`], tagged by pipeline stage.
#[derive(Debug, Error)]
pub enum RunError {
    /// Reading or parsing the job declaration failed.
    #[error(transparent)]
    Load(anyhow::Error),

    /// The graph was rejected (empty, cyclic, or disconnected).
    #[error(transparent)]
    Validate(#[from] GraphError),

    /// A job failed while executing.
    #[error(transparent)]
    Execute(#[from] ExecError),
}

impl RunError {
    /// Stage-specific process exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunError::Load(_) => 1,
            RunError::Validate(_) => 2,
            RunError::Execute(_) => 3,
        }
    }
}
