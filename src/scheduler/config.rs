//! Greedy scheduler configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::priority::{self, ParcelComparator, TruckComparator};
use crate::error::{Error, Result};

/// Parcel attribute that decides processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParcelPriority {
    /// Order by parcel volume.
    Volume,
    /// Order by destination name, lexicographically.
    Destination,
}

/// Direction of an ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Smallest key first.
    NonDecreasing,
    /// Largest key first.
    NonIncreasing,
}

impl ParcelPriority {
    /// Configuration name of this priority.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Volume => "volume",
            Self::Destination => "destination",
        }
    }
}

impl SortOrder {
    /// Configuration name of this order.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NonDecreasing => "non-decreasing",
            Self::NonIncreasing => "non-increasing",
        }
    }

    fn parse(field: &'static str, s: &str) -> Result<Self> {
        match s {
            "non-decreasing" => Ok(Self::NonDecreasing),
            "non-increasing" => Ok(Self::NonIncreasing),
            _ => Err(Error::Configuration {
                field,
                value: s.to_owned(),
            }),
        }
    }
}

impl FromStr for ParcelPriority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "volume" => Ok(Self::Volume),
            "destination" => Ok(Self::Destination),
            _ => Err(Error::Configuration {
                field: "parcel_priority",
                value: s.to_owned(),
            }),
        }
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse("sort_order", s)
    }
}

impl fmt::Display for ParcelPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for [`GreedyScheduler`](super::GreedyScheduler).
///
/// Three independent axes select one of four parcel orderings and one of
/// two truck orderings. Trucks are always ranked by available space.
///
/// # Examples
///
/// ```
/// use u_parcel::scheduler::{GreedyConfig, ParcelPriority, SortOrder};
///
/// let config = GreedyConfig::default()
///     .with_parcel_priority(ParcelPriority::Destination)
///     .with_truck_order(SortOrder::NonIncreasing);
/// assert_eq!(config.parcel_order, SortOrder::NonDecreasing);
///
/// let parsed = GreedyConfig::from_json(
///     r#"{"parcel_priority": "destination",
///         "parcel_order": "non-decreasing",
///         "truck_order": "non-increasing"}"#,
/// ).unwrap();
/// assert_eq!(parsed, config);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GreedyConfig {
    /// Parcel attribute used for ordering.
    pub parcel_priority: ParcelPriority,
    /// Direction of the parcel ordering.
    pub parcel_order: SortOrder,
    /// Direction of the truck ordering by available space.
    pub truck_order: SortOrder,
}

impl Default for GreedyConfig {
    fn default() -> Self {
        Self {
            parcel_priority: ParcelPriority::Volume,
            parcel_order: SortOrder::NonDecreasing,
            truck_order: SortOrder::NonDecreasing,
        }
    }
}

impl GreedyConfig {
    /// Creates a configuration from its three axes.
    pub fn new(
        parcel_priority: ParcelPriority,
        parcel_order: SortOrder,
        truck_order: SortOrder,
    ) -> Self {
        Self {
            parcel_priority,
            parcel_order,
            truck_order,
        }
    }

    /// Parses the three axes from their configuration names.
    ///
    /// Returns [`Error::Configuration`] naming the first unsupported field.
    pub fn from_names(parcel_priority: &str, parcel_order: &str, truck_order: &str) -> Result<Self> {
        Ok(Self {
            parcel_priority: parcel_priority.parse()?,
            parcel_order: SortOrder::parse("parcel_order", parcel_order)?,
            truck_order: SortOrder::parse("truck_order", truck_order)?,
        })
    }

    /// Decodes a JSON object with `parcel_priority`, `parcel_order` and
    /// `truck_order` keys. Other keys are ignored.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the parcel priority.
    pub fn with_parcel_priority(mut self, priority: ParcelPriority) -> Self {
        self.parcel_priority = priority;
        self
    }

    /// Sets the parcel order.
    pub fn with_parcel_order(mut self, order: SortOrder) -> Self {
        self.parcel_order = order;
        self
    }

    /// Sets the truck order.
    pub fn with_truck_order(mut self, order: SortOrder) -> Self {
        self.truck_order = order;
        self
    }

    /// Parcel predicate selected by the priority and parcel order.
    pub fn parcel_comparator(&self) -> ParcelComparator {
        match (self.parcel_priority, self.parcel_order) {
            (ParcelPriority::Volume, SortOrder::NonDecreasing) => priority::volume_ascending,
            (ParcelPriority::Volume, SortOrder::NonIncreasing) => priority::volume_descending,
            (ParcelPriority::Destination, SortOrder::NonDecreasing) => {
                priority::destination_ascending
            }
            (ParcelPriority::Destination, SortOrder::NonIncreasing) => {
                priority::destination_descending
            }
        }
    }

    /// Truck predicate selected by the truck order.
    pub fn truck_comparator(&self) -> TruckComparator {
        match self.truck_order {
            SortOrder::NonDecreasing => priority::space_ascending,
            SortOrder::NonIncreasing => priority::space_descending,
        }
    }
}

impl fmt::Display for GreedyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} / trucks {}",
            self.parcel_order, self.parcel_priority, self.truck_order
        )
    }
}
