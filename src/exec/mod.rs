// src/exec/mod.rs

//! Process execution layer.
//!
//! Runs the commands of the ordered jobs one at a time through the platform
//! shell, blocking for each, and halts the run on the first failure.

pub mod runner;

pub use runner::run_jobs;
