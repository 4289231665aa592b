// src/config/validate.rs

use anyhow::{anyhow, Result};

use crate::config::model::ConfigFile;

/// Run loader-level validation against a loaded job declaration.
///
/// This checks that every id listed in a job's `deps` is itself a declared
/// job, reporting the offending job id on failure.
///
/// It does **not** check:
/// - non-emptiness (an empty declaration is rejected by `graph::preprocess`)
/// - acyclicity (a self- or mutual dependency reaches the sorter, which
///   rejects it as a cycle)
/// - connectivity
pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    for (id, job) in cfg.job.iter() {
        for dep in job.deps.iter() {
            if !cfg.job.contains_key(dep) {
                return Err(anyhow!(
                    "job '{}': dependency not found: '{}'",
                    id,
                    dep
                ));
            }
        }
    }
    Ok(())
}
