// src/config/mod.rs

//! Job declaration loading and validation for rundag.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a declaration file from disk (`loader.rs`).
//! - Validate referential integrity of dependencies (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path};
pub use model::{ConfigFile, JobConfig};
pub use validate::validate_config;
