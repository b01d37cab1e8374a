//! Derived dependency/link graph and the algorithms over it.

pub mod builder;
pub mod cycles;
pub mod reachability;
pub mod types;
