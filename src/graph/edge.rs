//! Edge implementation for the city graph
//!
//! An undirected road between two cities is stored as two directed entries,
//! one in each endpoint's adjacency list, carrying the same distance.

use super::types::{CityName, Distance};
use serde::{Deserialize, Serialize};

/// One entry of a city's adjacency list
///
/// Serializes as `{"city": "...", "distance": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Neighboring city this entry points at
    city: CityName,

    /// Distance to the neighbor
    distance: Distance,
}

impl Edge {
    /// Create a new adjacency entry
    pub fn new(city: CityName, distance: Distance) -> Self {
        Edge { city, distance }
    }

    /// Build an entry from raw parts, validating both.
    pub fn from_parts(city: &str, distance: f64) -> Option<Self> {
        Some(Edge {
            city: CityName::parse(city)?,
            distance: Distance::new(distance)?,
        })
    }

    /// The reverse entry, as stored in the neighbor's list
    pub fn mirrored(&self, from: &CityName) -> Edge {
        Edge {
            city: from.clone(),
            distance: self.distance,
        }
    }

    /// Neighbor name
    pub fn city(&self) -> &str {
        self.city.as_str()
    }

    pub fn city_name(&self) -> &CityName {
        &self.city
    }

    /// Distance as a raw number
    pub fn distance(&self) -> f64 {
        self.distance.as_f64()
    }

    pub fn distance_value(&self) -> Distance {
        self.distance
    }
}
