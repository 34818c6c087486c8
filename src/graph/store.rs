//! In-memory city graph storage
//!
//! Adjacency list keyed by city name. Each road is stored twice, once per
//! endpoint, so `neighbors_of` is a single map lookup.

use super::dataset::AdjacencyDataset;
use super::edge::Edge;
use super::types::{CityName, Distance};
use super::value::Value;
use indexmap::IndexMap;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Invalid city name: expected non-empty string, got {0}")]
    InvalidCityName(Value),

    #[error("City {0} already exists")]
    CityAlreadyExists(CityName),

    #[error("City {0} not found")]
    CityNotFound(String),

    #[error("Invalid distance: expected positive number, got {0}")]
    InvalidDistance(Value),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Mutable weighted, undirected city graph
///
/// Cities are registered explicitly and live for the lifetime of the graph.
/// Roads are appended in insertion order; parallel roads and self-loops are
/// accepted as given.
#[derive(Debug, Clone, Default)]
pub struct CityGraph {
    /// City -> adjacency list, in registration order
    cities: IndexMap<CityName, Vec<Edge>>,

    /// Number of successful `add_distance` calls
    road_count: usize,
}

impl CityGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for a known number of cities.
    pub fn with_capacity(city_count: usize) -> Self {
        CityGraph {
            cities: IndexMap::with_capacity(city_count),
            road_count: 0,
        }
    }

    /// Register a city, reporting why registration failed.
    pub fn try_register_city(&mut self, name: impl Into<Value>) -> GraphResult<CityName> {
        let value = name.into();
        let name = match value.as_string().and_then(CityName::parse) {
            Some(name) => name,
            None => return Err(GraphError::InvalidCityName(value)),
        };

        if self.cities.contains_key(&name) {
            return Err(GraphError::CityAlreadyExists(name));
        }

        self.cities.insert(name.clone(), Vec::new());
        Ok(name)
    }

    /// Register a city with no roads.
    ///
    /// Returns `false` without touching the graph when the name is not a
    /// non-empty string or is already registered.
    pub fn register_city(&mut self, name: impl Into<Value>) -> bool {
        match self.try_register_city(name) {
            Ok(_) => true,
            Err(e) => {
                debug!("register_city rejected: {}", e);
                false
            }
        }
    }

    /// Add a road between two registered cities, reporting why it failed.
    pub fn try_add_distance(
        &mut self,
        city_a: &str,
        city_b: &str,
        distance: impl Into<Value>,
    ) -> GraphResult<()> {
        let value = distance.into();

        // All checks run before the first mutation
        let (a_idx, name_a, _) = self
            .cities
            .get_full(city_a)
            .ok_or_else(|| GraphError::CityNotFound(city_a.to_string()))?;
        let name_a = name_a.clone();
        let (b_idx, name_b, _) = self
            .cities
            .get_full(city_b)
            .ok_or_else(|| GraphError::CityNotFound(city_b.to_string()))?;
        let name_b = name_b.clone();
        let distance = match value.as_number().and_then(Distance::new) {
            Some(d) => d,
            None => return Err(GraphError::InvalidDistance(value)),
        };

        let forward = Edge::new(name_b, distance);
        let reverse = forward.mirrored(&name_a);
        self.cities[a_idx].push(forward);
        self.cities[b_idx].push(reverse);
        self.road_count += 1;
        Ok(())
    }

    /// Add a bidirectional road of `distance` between `city_a` and `city_b`.
    ///
    /// Appends `(city_b, distance)` to `city_a`'s list, then
    /// `(city_a, distance)` to `city_b`'s list. Returns `false` without
    /// touching the graph when either city is unknown or the distance is not
    /// a number greater than zero.
    pub fn add_distance(&mut self, city_a: &str, city_b: &str, distance: impl Into<Value>) -> bool {
        match self.try_add_distance(city_a, city_b, distance) {
            Ok(()) => true,
            Err(e) => {
                debug!("add_distance({}, {}) rejected: {}", city_a, city_b, e);
                false
            }
        }
    }

    /// Get the roads leaving a city, in insertion order.
    ///
    /// `None` means the city was never registered; a registered city without
    /// roads yields an empty slice.
    pub fn neighbors_of(&self, city: &str) -> Option<&[Edge]> {
        self.cities.get(city).map(|edges| edges.as_slice())
    }

    /// Check if a city is registered
    pub fn contains_city(&self, city: &str) -> bool {
        self.cities.contains_key(city)
    }

    /// Registered cities, in registration order
    pub fn cities(&self) -> impl Iterator<Item = &CityName> {
        self.cities.keys()
    }

    /// Get total number of cities
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Get total number of roads (each undirected road counts once)
    pub fn edge_count(&self) -> usize {
        self.road_count
    }

    /// Snapshot the graph into an immutable lookup dataset.
    pub fn to_dataset(&self) -> AdjacencyDataset {
        AdjacencyDataset::from_entries(
            self.cities
                .iter()
                .map(|(name, edges)| (name.clone(), edges.clone())),
        )
    }
}
