//! Truck type with capacity and route.

use serde::Serialize;

use super::{Parcel, ParcelId};
use crate::error::{Error, Result};

/// Caller-assigned truck identifier.
pub type TruckId = u32;

/// A truck that carries parcels along a route anchored at its depot.
///
/// The route always starts with the depot and never holds two equal
/// consecutive stops. `available_space` equals `capacity` minus the total
/// volume packed so far.
///
/// # Examples
///
/// ```
/// use u_parcel::models::{Parcel, Truck};
///
/// let mut t = Truck::new(1423, 10, "Toronto").unwrap();
/// let p = Parcel::new(1, 5, "Buffalo", "Hamilton").unwrap();
/// assert!(t.pack(&p));
/// assert_eq!(t.route(), ["Toronto", "Hamilton"]);
/// assert_eq!(t.available_space(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Truck {
    id: TruckId,
    capacity: u32,
    route: Vec<String>,
    available_space: u32,
    packed: Vec<ParcelId>,
}

impl Truck {
    /// Creates an empty truck waiting at `depot`.
    ///
    /// Returns [`Error::InvalidTruck`] if `capacity` is zero.
    pub fn new(id: TruckId, capacity: u32, depot: impl Into<String>) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidTruck { id, capacity });
        }
        Ok(Self {
            id,
            capacity,
            route: vec![depot.into()],
            available_space: capacity,
            packed: Vec::new(),
        })
    }

    /// Truck ID.
    pub fn id(&self) -> TruckId {
        self.id
    }

    /// Maximum volume this truck can carry.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Volume still free.
    pub fn available_space(&self) -> u32 {
        self.available_space
    }

    /// Volume already packed.
    pub fn packed_volume(&self) -> u32 {
        self.capacity - self.available_space
    }

    /// Stops in visit order, depot first.
    pub fn route(&self) -> &[String] {
        &self.route
    }

    /// Starting location.
    pub fn depot(&self) -> &str {
        &self.route[0]
    }

    /// Where the route currently ends.
    pub fn last_stop(&self) -> &str {
        // route is seeded with the depot and only grows
        self.route.last().map_or("", String::as_str)
    }

    /// IDs of packed parcels, in pack order.
    pub fn packed(&self) -> &[ParcelId] {
        &self.packed
    }

    /// Returns `true` if nothing has been packed.
    pub fn is_empty(&self) -> bool {
        self.packed.is_empty()
    }

    /// Returns `true` if `parcel` fits in the remaining space.
    pub fn can_fit(&self, parcel: &Parcel) -> bool {
        parcel.volume() <= self.available_space
    }

    /// Packs `parcel` if it fits.
    ///
    /// On success the parcel's destination is appended to the route unless
    /// the route already ends there. Returns `false` and leaves the truck
    /// untouched if there is not enough space.
    pub fn pack(&mut self, parcel: &Parcel) -> bool {
        if !self.can_fit(parcel) {
            return false;
        }
        self.available_space -= parcel.volume();
        self.packed.push(parcel.id());
        if self.last_stop() != parcel.destination() {
            self.route.push(parcel.destination().to_owned());
        }
        true
    }

    /// Fullness in percentage points (0.0 for an empty truck).
    pub fn fullness(&self) -> f64 {
        100.0 - f64::from(self.available_space) / f64::from(self.capacity) * 100.0
    }
}
