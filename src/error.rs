//! Error types.

use crate::models::{ParcelId, TruckId};

/// Errors raised by model construction, configuration and the priority queue.
///
/// A parcel that fits on no truck is *not* an error: schedulers report it
/// in their leftover list.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configuration field holds an unsupported value.
    #[error("unsupported {field}: {value:?}")]
    Configuration {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: String,
    },

    /// `remove` was called on an empty queue.
    #[error("remove called on an empty priority queue")]
    EmptyQueue,

    /// A parcel was constructed with a non-positive volume.
    #[error("parcel {id} has non-positive volume {volume}")]
    InvalidParcel {
        /// Parcel ID.
        id: ParcelId,
        /// Rejected volume.
        volume: u32,
    },

    /// A truck was constructed with a non-positive capacity.
    #[error("truck {id} has non-positive capacity {capacity}")]
    InvalidTruck {
        /// Truck ID.
        id: TruckId,
        /// Rejected capacity.
        capacity: u32,
    },

    /// A truck with this ID is already part of the fleet.
    #[error("truck {0} is already in the fleet")]
    DuplicateTruck(TruckId),

    /// The distance map has no entry for a leg of some route.
    #[error("no distance recorded from {from:?} to {to:?}")]
    UnknownDistance {
        /// Leg start.
        from: String,
        /// Leg end.
        to: String,
    },

    /// A JSON configuration document could not be decoded.
    #[error("invalid configuration document: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Crate-wide result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = Error::Configuration {
            field: "parcel_priority",
            value: "weight".into(),
        };
        assert_eq!(e.to_string(), "unsupported parcel_priority: \"weight\"");
        assert_eq!(
            Error::InvalidParcel { id: 7, volume: 0 }.to_string(),
            "parcel 7 has non-positive volume 0"
        );
        assert_eq!(
            Error::DuplicateTruck(3).to_string(),
            "truck 3 is already in the fleet"
        );
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<u32>("not json").expect_err("invalid");
        let e: Error = err.into();
        assert!(matches!(e, Error::ConfigParse(_)));
    }
}
