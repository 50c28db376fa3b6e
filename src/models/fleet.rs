//! Fleet of trucks and its aggregate statistics.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::{ParcelId, Truck, TruckId};
use crate::distance::DistanceMap;
use crate::error::{Error, Result};

/// An ordered collection of trucks with unique IDs.
///
/// Truck order is significant: schedulers break ties between trucks by the
/// order they appear here.
///
/// # Examples
///
/// ```
/// use u_parcel::models::{Fleet, Parcel, Truck};
///
/// let mut fleet = Fleet::new();
/// fleet.add_truck(Truck::new(1423, 10, "Toronto").unwrap()).unwrap();
/// fleet.add_truck(Truck::new(1333, 10, "Toronto").unwrap()).unwrap();
///
/// let p = Parcel::new(27, 5, "Toronto", "Hamilton").unwrap();
/// assert!(fleet.trucks_mut()[0].pack(&p));
///
/// assert_eq!(fleet.num_trucks(), 2);
/// assert_eq!(fleet.num_nonempty_trucks(), 1);
/// assert_eq!(fleet.total_unused_space(), 5);
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct Fleet {
    trucks: Vec<Truck>,
}

impl Fleet {
    /// Creates a fleet with no trucks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a truck at the end of the fleet.
    ///
    /// Returns [`Error::DuplicateTruck`] if a truck with the same ID exists.
    pub fn add_truck(&mut self, truck: Truck) -> Result<()> {
        if self.trucks.iter().any(|t| t.id() == truck.id()) {
            return Err(Error::DuplicateTruck(truck.id()));
        }
        self.trucks.push(truck);
        Ok(())
    }

    /// Trucks in insertion order.
    pub fn trucks(&self) -> &[Truck] {
        &self.trucks
    }

    /// Mutable trucks, for handing to a scheduler.
    pub fn trucks_mut(&mut self) -> &mut [Truck] {
        &mut self.trucks
    }

    /// Number of trucks.
    pub fn num_trucks(&self) -> usize {
        self.trucks.len()
    }

    /// Number of trucks carrying at least one parcel.
    pub fn num_nonempty_trucks(&self) -> usize {
        self.nonempty().count()
    }

    /// Parcel IDs per truck, in pack order.
    pub fn parcel_allocations(&self) -> BTreeMap<TruckId, Vec<ParcelId>> {
        self.trucks
            .iter()
            .map(|t| (t.id(), t.packed().to_vec()))
            .collect()
    }

    /// Free space summed over non-empty trucks (0 if all are empty).
    pub fn total_unused_space(&self) -> u64 {
        self.nonempty().map(|t| u64::from(t.available_space())).sum()
    }

    /// Mean fullness of non-empty trucks, or `None` if every truck is empty.
    pub fn average_fullness(&self) -> Option<f64> {
        let count = self.num_nonempty_trucks();
        if count == 0 {
            return None;
        }
        let total: f64 = self.nonempty().map(Truck::fullness).sum();
        Some(total / count as f64)
    }

    /// Total distance driven by all trucks, including each return to depot.
    ///
    /// Trucks whose route never leaves the depot contribute nothing.
    /// Returns [`Error::UnknownDistance`] if `distances` lacks a leg.
    pub fn total_distance_travelled(&self, distances: &DistanceMap) -> Result<u64> {
        let mut total = 0;
        for truck in self.travelled() {
            total += route_distance(truck.route(), distances)?;
        }
        Ok(total)
    }

    /// Average distance over trucks that left the depot.
    ///
    /// `Ok(None)` if no truck travelled.
    pub fn average_distance_travelled(&self, distances: &DistanceMap) -> Result<Option<f64>> {
        let count = self.travelled().count();
        if count == 0 {
            return Ok(None);
        }
        let total = self.total_distance_travelled(distances)?;
        Ok(Some(total as f64 / count as f64))
    }

    fn nonempty(&self) -> impl Iterator<Item = &Truck> {
        self.trucks.iter().filter(|t| t.fullness() > 0.0)
    }

    fn travelled(&self) -> impl Iterator<Item = &Truck> {
        self.trucks.iter().filter(|t| t.route().len() > 1)
    }
}

/// Length of a closed tour over `route` (last stop back to the first).
fn route_distance(route: &[String], distances: &DistanceMap) -> Result<u64> {
    let (Some(first), Some(last)) = (route.first(), route.last()) else {
        return Ok(0);
    };
    let legs = route
        .windows(2)
        .map(|w| (&w[0], &w[1]))
        .chain(std::iter::once((last, first)));

    let mut total = 0;
    for (from, to) in legs {
        let d = distances
            .distance(from, to)
            .ok_or_else(|| Error::UnknownDistance {
                from: from.clone(),
                to: to.clone(),
            })?;
        total += u64::from(d);
    }
    Ok(total)
}

impl fmt::Display for Fleet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "trucks: {}, unused trucks: {}, avg fullness: {:.2}%, unused space: {}",
            self.num_trucks(),
            self.num_trucks() - self.num_nonempty_trucks(),
            self.average_fullness().unwrap_or(0.0),
            self.total_unused_space()
        )
    }
}
