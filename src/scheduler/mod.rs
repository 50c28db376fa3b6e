//! Schedulers that assign parcels to trucks.
//!
//! - [`GreedyScheduler`] — configurable greedy assignment with route
//!   continuation preference, O(n·m + n log n)
//! - [`RandomScheduler`] — uniform random baseline, O(n·m)
//!
//! Both implement [`Scheduler`].

mod config;
mod greedy;
pub mod priority;
mod random;

pub use config::{GreedyConfig, ParcelPriority, SortOrder};
pub use greedy::GreedyScheduler;
pub use random::RandomScheduler;

use crate::models::{Parcel, Truck};

/// Decides which parcels go on which trucks and how each route grows.
///
/// Implementations must not retain `trucks` after returning. Parcels are
/// borrowed immutably and never modified; trucks are updated in place
/// (free space, route, packed IDs) and that is the only side effect.
pub trait Scheduler {
    /// Short identifier for logs and reports.
    fn name(&self) -> &'static str;

    /// Packs `parcels` onto `trucks`, returning the parcels that fit nowhere.
    fn schedule<'p>(&mut self, parcels: &'p [Parcel], trucks: &mut [Truck]) -> Vec<&'p Parcel>;
}
