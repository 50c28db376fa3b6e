//! Domain model types for parcel scheduling.
//!
//! Parcels are immutable inputs, trucks carry mutable load and route state,
//! and a fleet groups trucks and reports aggregate statistics.

mod fleet;
mod parcel;
mod truck;

pub use fleet::Fleet;
pub use parcel::{Parcel, ParcelId};
pub use truck::{Truck, TruckId};
