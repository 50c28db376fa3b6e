//! # u-parcel
//!
//! Parcel-to-truck assignment with configurable greedy heuristics and a
//! random baseline.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Parcel, Truck, Fleet)
//! - [`distance`] — Location-pair distance lookup for fleet statistics
//! - [`queue`] — Stable comparator-driven priority queue
//! - [`scheduler`] — Scheduler trait, greedy and random schedulers, configuration
//! - [`error`] — Error type shared by the crate

pub mod distance;
pub mod error;
pub mod models;
pub mod queue;
pub mod scheduler;

pub use error::{Error, Result};
