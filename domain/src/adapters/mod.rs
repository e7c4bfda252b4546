//! Adapters that live inside the domain crate for convenience.
//!
//! The in-memory repository is the only store the service ships with; records
//! live for the lifetime of the process.

pub mod memory_repo;
