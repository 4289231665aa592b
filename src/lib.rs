// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod graph;
pub mod logging;

use std::path::PathBuf;

use tracing::debug;

use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::config::model::ConfigFile;
use crate::errors::RunError;
use crate::exec::run_jobs;
use crate::graph::{preprocess, JobGraph};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - job declaration loading
/// - graph construction, validation and ordering
/// - sequential execution (skipped by `--dry-run`)
///
/// The returned [`RunError`] carries the pipeline stage that failed; the
/// driver maps it to a process exit code. On a load or validation failure
/// no job is ever executed.
pub fn run(args: CliArgs) -> Result<(), RunError> {
    let config_path = PathBuf::from(&args.config);
    let cfg = load_and_validate(&config_path).map_err(RunError::Load)?;

    let graph = JobGraph::from_config(&cfg);
    let ids_ordered = preprocess(&graph)?;

    if args.dry_run {
        print_dry_run(&cfg, &ids_ordered);
        return Ok(());
    }

    run_jobs(&graph, &ids_ordered)?;
    Ok(())
}

/// Simple dry-run output: print jobs, deps and the computed order.
fn print_dry_run(cfg: &ConfigFile, ids_ordered: &[String]) {
    println!("rundag dry-run");
    println!();

    println!("jobs ({}):", cfg.job.len());
    for (id, job) in cfg.job.iter() {
        println!("  - {id}");
        println!("      command: {}", job.command);
        if !job.deps.is_empty() {
            println!("      deps: {:?}", job.deps);
        }
    }

    println!();
    println!("execution order: {}", ids_ordered.join(" -> "));

    debug!("dry-run complete (no execution)");
}
