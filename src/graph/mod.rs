// src/graph/mod.rs

//! The core graph stage: data model, topological sorting, connectivity.
//!
//! Control flow per run:
//! - `model` builds the immutable [`JobGraph`] from a validated config.
//! - `preprocess` composes the empty-graph check, the stable topological
//!   sort (`sort`) and the single-component check (`connectivity`) into the
//!   one entry point the driver calls.
//!
//! All traversals are pure functions over a read-only graph; there is no
//! retained state between calls.

pub mod connectivity;
pub mod model;
pub mod preprocess;
pub mod sort;

pub use connectivity::check_connected;
pub use model::{Job, JobGraph};
pub use preprocess::preprocess;
pub use sort::topo_sort;
