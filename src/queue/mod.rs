//! Comparator-driven priority queue with deterministic tie-breaking.
//!
//! - [`StablePriorityQueue`] — binary heap over an injected `precedes`
//!   predicate; equal-priority elements leave in insertion order

mod stable;

pub use stable::StablePriorityQueue;
