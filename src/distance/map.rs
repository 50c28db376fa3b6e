//! Location-pair distance lookup.

use std::collections::HashMap;

/// Directed distances between named locations.
///
/// Unlike a dense matrix, locations are opaque string keys and any pair may
/// be missing.
///
/// # Examples
///
/// ```
/// use u_parcel::distance::DistanceMap;
///
/// let mut dm = DistanceMap::new();
/// dm.add_asymmetric_distance("Toronto", "Vancouver", 40, 50);
/// assert_eq!(dm.distance("Toronto", "Vancouver"), Some(40));
/// assert_eq!(dm.distance("Vancouver", "Toronto"), Some(50));
/// assert_eq!(dm.distance("Toronto", "Hamilton"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DistanceMap {
    distances: HashMap<(String, String), u32>,
}

impl DistanceMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `distance` in both directions between `a` and `b`.
    pub fn add_distance(&mut self, a: &str, b: &str, distance: u32) {
        self.add_asymmetric_distance(a, b, distance, distance);
    }

    /// Records `a_to_b` from `a` to `b` and `b_to_a` for the return leg.
    pub fn add_asymmetric_distance(&mut self, a: &str, b: &str, a_to_b: u32, b_to_a: u32) {
        self.distances.insert((a.to_owned(), b.to_owned()), a_to_b);
        self.distances.insert((b.to_owned(), a.to_owned()), b_to_a);
    }

    /// Returns the distance from `from` to `to`, if recorded.
    pub fn distance(&self, from: &str, to: &str) -> Option<u32> {
        self.distances
            .get(&(from.to_owned(), to.to_owned()))
            .copied()
    }

    /// Number of directed entries.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Returns `true` if no distance is recorded.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric_entry() {
        let mut dm = DistanceMap::new();
        dm.add_distance("Toronto", "London", 3);
        assert_eq!(dm.distance("Toronto", "London"), Some(3));
        assert_eq!(dm.distance("London", "Toronto"), Some(3));
        assert_eq!(dm.len(), 2);
    }

    #[test]
    fn test_asymmetric_entry() {
        let mut dm = DistanceMap::new();
        dm.add_asymmetric_distance("Toronto", "Hamilton", 2, 4);
        assert_eq!(dm.distance("Toronto", "Hamilton"), Some(2));
        assert_eq!(dm.distance("Hamilton", "Toronto"), Some(4));
    }

    #[test]
    fn test_unknown_pair() {
        let mut dm = DistanceMap::new();
        assert!(dm.is_empty());
        dm.add_distance("Toronto", "London", 4);
        assert_eq!(dm.distance("Toronto", "Hamilton"), None);
    }

    #[test]
    fn test_overwrite() {
        let mut dm = DistanceMap::new();
        dm.add_distance("A", "B", 4);
        dm.add_asymmetric_distance("A", "B", 5, 6);
        assert_eq!(dm.distance("A", "B"), Some(5));
        assert_eq!(dm.distance("B", "A"), Some(6));
        assert_eq!(dm.len(), 2);
    }
}
