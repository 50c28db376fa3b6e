//! Ordering predicates for parcels and trucks.
//!
//! Each predicate returns `true` when its first argument should be handled
//! before the second. None of them are total orders; equal keys are left to
//! the queue's insertion-order tie-break.

use crate::models::{Parcel, Truck};

/// Parcel ordering predicate.
pub type ParcelComparator = fn(&Parcel, &Parcel) -> bool;

/// Truck ordering predicate.
pub type TruckComparator = fn(&Truck, &Truck) -> bool;

/// Smaller parcels first.
pub fn volume_ascending(a: &Parcel, b: &Parcel) -> bool {
    a.volume() < b.volume()
}

/// Larger parcels first.
pub fn volume_descending(a: &Parcel, b: &Parcel) -> bool {
    a.volume() > b.volume()
}

/// Destinations in lexicographic order.
pub fn destination_ascending(a: &Parcel, b: &Parcel) -> bool {
    a.destination() < b.destination()
}

/// Destinations in reverse lexicographic order.
pub fn destination_descending(a: &Parcel, b: &Parcel) -> bool {
    a.destination() > b.destination()
}

/// Trucks with less free space first.
pub fn space_ascending(a: &Truck, b: &Truck) -> bool {
    a.available_space() < b.available_space()
}

/// Trucks with more free space first.
pub fn space_descending(a: &Truck, b: &Truck) -> bool {
    a.available_space() > b.available_space()
}
