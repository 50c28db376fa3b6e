//! Greedy parcel-to-truck assignment.
//!
//! # Algorithm
//!
//! Parcels are drained from a [`StablePriorityQueue`] ordered by the
//! configured parcel predicate. For each parcel, the trucks with enough free
//! space are *eligible*; among those, trucks whose route already ends at the
//! parcel's destination are *preferred* and, when any exist, are the only
//! candidates. The candidates are ranked by free space in a second stable
//! queue and the top truck receives the parcel. A parcel with no candidate
//! is left over. Decisions are never revisited.
//!
//! Ties on either queue are broken by input order, so a run is fully
//! determined by its inputs and configuration.
//!
//! # Complexity
//!
//! O(n·m + n log n) for n parcels and m trucks.

use tracing::{debug, debug_span, trace};

use super::config::GreedyConfig;
use super::priority::{ParcelComparator, TruckComparator};
use super::Scheduler;
use crate::error::Result;
use crate::models::{Parcel, Truck};
use crate::queue::StablePriorityQueue;

/// Greedy scheduler parameterized by a [`GreedyConfig`].
///
/// # Examples
///
/// ```
/// use u_parcel::models::{Parcel, Truck};
/// use u_parcel::scheduler::{GreedyConfig, GreedyScheduler, Scheduler};
///
/// let parcels = vec![
///     Parcel::new(1, 5, "Toronto", "Hamilton").unwrap(),
///     Parcel::new(2, 3, "Toronto", "London").unwrap(),
/// ];
/// let mut trucks = vec![Truck::new(1, 5, "Toronto").unwrap()];
///
/// let mut scheduler = GreedyScheduler::new(GreedyConfig::default());
/// let leftover = scheduler.schedule(&parcels, &mut trucks);
///
/// // smallest parcel goes first and the 5-unit parcel no longer fits
/// assert_eq!(trucks[0].packed(), [2]);
/// assert_eq!(leftover.len(), 1);
/// assert_eq!(leftover[0].id(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct GreedyScheduler {
    config: GreedyConfig,
    parcel_cmp: ParcelComparator,
    truck_cmp: TruckComparator,
}

impl GreedyScheduler {
    /// Creates a scheduler for `config`.
    pub fn new(config: GreedyConfig) -> Self {
        Self {
            config,
            parcel_cmp: config.parcel_comparator(),
            truck_cmp: config.truck_comparator(),
        }
    }

    /// Creates a scheduler from configuration names such as
    /// `("volume", "non-decreasing", "non-increasing")`.
    ///
    /// Fails with [`Error::Configuration`](crate::error::Error::Configuration)
    /// before any scheduling happens.
    pub fn from_names(parcel_priority: &str, parcel_order: &str, truck_order: &str) -> Result<Self> {
        GreedyConfig::from_names(parcel_priority, parcel_order, truck_order).map(Self::new)
    }

    /// The configuration this scheduler was built with.
    pub fn config(&self) -> &GreedyConfig {
        &self.config
    }

    /// Picks the truck for `parcel`, or `None` if nothing can take it.
    fn choose_truck(&self, parcel: &Parcel, trucks: &[Truck]) -> Option<usize> {
        let eligible: Vec<usize> = trucks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.can_fit(parcel))
            .map(|(i, _)| i)
            .collect();

        let preferred: Vec<usize> = eligible
            .iter()
            .copied()
            .filter(|&i| trucks[i].last_stop() == parcel.destination())
            .collect();

        let candidates = if preferred.is_empty() {
            eligible
        } else {
            preferred
        };
        if candidates.is_empty() {
            return None;
        }

        let cmp = self.truck_cmp;
        let by_space = |&a: &usize, &b: &usize| cmp(&trucks[a], &trucks[b]);
        let mut queue = StablePriorityQueue::with_capacity(candidates.len(), by_space);
        queue.extend(candidates);
        queue.remove().ok()
    }
}

impl Scheduler for GreedyScheduler {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn schedule<'p>(&mut self, parcels: &'p [Parcel], trucks: &mut [Truck]) -> Vec<&'p Parcel> {
        let _span = debug_span!(
            "greedy_schedule",
            config = %self.config,
            parcels = parcels.len(),
            trucks = trucks.len()
        )
        .entered();

        let cmp = self.parcel_cmp;
        let by_priority = |a: &&Parcel, b: &&Parcel| cmp(a, b);
        let mut queue = StablePriorityQueue::with_capacity(parcels.len(), by_priority);
        queue.extend(parcels);

        let mut leftover = Vec::new();
        while let Ok(parcel) = queue.remove() {
            match self.choose_truck(parcel, trucks) {
                Some(idx) => {
                    let truck = &mut trucks[idx];
                    let packed = truck.pack(parcel);
                    debug_assert!(packed, "chosen truck must have room");
                    trace!(
                        parcel = parcel.id(),
                        truck = truck.id(),
                        available = truck.available_space(),
                        "packed parcel"
                    );
                }
                None => {
                    trace!(parcel = parcel.id(), volume = parcel.volume(), "no truck fits");
                    leftover.push(parcel);
                }
            }
        }

        debug!(
            scheduled = parcels.len() - leftover.len(),
            leftover = leftover.len(),
            "greedy schedule finished"
        );
        leftover
    }
}
