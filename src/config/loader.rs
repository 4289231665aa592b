// src/config/loader.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::model::ConfigFile;
use crate::config::validate::validate_config;

/// Load a job declaration from a given path and return the raw `ConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation (dependency integrity, etc.). Use [`load_and_validate`] for
/// that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading job declaration at {:?}", path))?;

    let config: ConfigFile = toml::from_str(&contents)
        .with_context(|| format!("parsing TOML job declaration from {:?}", path))?;

    Ok(config)
}

/// Load a job declaration from path and run loader-level validation.
///
/// This is the entry point the rest of the application uses:
///
/// - Reads TOML.
/// - Checks that every `deps` entry names a declared job.
///
/// Graph-level checks (acyclicity, connectivity, non-emptiness) are NOT done
/// here; they belong to `graph::preprocess` and fail at a later stage with a
/// different exit code.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let config = load_from_path(&path)?;
    validate_config(&config)?;
    Ok(config)
}
