//! chm-hash: minimal perfect hashing for static byte-string key sets.
//!
//! - Collect keys (any bytes, embedded zeros included) in an [`Inputs`].
//! - Build once: [`Builder::build`] assigns every key a unique index in
//!   `[0..n)` via the CHM acyclic-graph construction. A trial whose random
//!   graph has a cycle rehashes with fresh salt; the graph grows when trials
//!   keep failing.
//! - O(length) lookups: [`HashTable::lookup`] re-derives the index and
//!   byte-verifies the stored key before answering, so probes outside the
//!   original set come back `None`.

mod build;
mod graph;
mod hash;
mod inputs;
mod stats;
mod table;

pub use build::{BuildConfig, BuildError, Builder};
pub use inputs::{Entry, Inputs};
pub use stats::{BuildStats, InputsStats};
pub use table::HashTable;
