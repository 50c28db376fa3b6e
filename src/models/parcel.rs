//! Parcel type.

use serde::Serialize;

use crate::error::{Error, Result};

/// Caller-assigned parcel identifier.
pub type ParcelId = u32;

/// A parcel to be delivered from `source` to `destination`.
///
/// Parcels are immutable once built; schedulers only ever read them.
///
/// # Examples
///
/// ```
/// use u_parcel::models::Parcel;
///
/// let p = Parcel::new(1, 5, "Buffalo", "Hamilton").unwrap();
/// assert_eq!(p.id(), 1);
/// assert_eq!(p.volume(), 5);
/// assert_eq!(p.source(), "Buffalo");
/// assert_eq!(p.destination(), "Hamilton");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parcel {
    id: ParcelId,
    volume: u32,
    source: String,
    destination: String,
}

impl Parcel {
    /// Creates a parcel.
    ///
    /// Returns [`Error::InvalidParcel`] if `volume` is zero.
    pub fn new(
        id: ParcelId,
        volume: u32,
        source: impl Into<String>,
        destination: impl Into<String>,
    ) -> Result<Self> {
        if volume == 0 {
            return Err(Error::InvalidParcel { id, volume });
        }
        Ok(Self {
            id,
            volume,
            source: source.into(),
            destination: destination.into(),
        })
    }

    /// Parcel ID.
    pub fn id(&self) -> ParcelId {
        self.id
    }

    /// Volume occupied on a truck.
    pub fn volume(&self) -> u32 {
        self.volume
    }

    /// Pickup location.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Delivery location.
    pub fn destination(&self) -> &str {
        &self.destination
    }
}
