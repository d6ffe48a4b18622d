//! Comparison Module - statistics contrasting one cluster with the rest.
//!
//! # Components
//!
//! - `GroupPartition` - Two-way split of the population around a target cluster
//! - `AttributeDistribution` - Observed category counts per group
//! - `ClusterComparisonEngine` - Size comparison, proportions and distributions
//!
//! All functions are pure. They borrow a `PopulationIndex` and never mutate it,
//! so any number of requests may compare against the same index concurrently.

mod distribution;
mod engine;
mod partition;

pub use distribution::{AttributeDistribution, CategoryCount};
pub use engine::{ClusterComparison, ClusterComparisonEngine, GroupProportions};
pub use partition::{Group, GroupPartition};
