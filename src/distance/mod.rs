//! Distances between named locations.
//!
//! Used by fleet statistics only; schedulers never consult distances.

mod map;

pub use map::DistanceMap;
