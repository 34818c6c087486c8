//! Read-only adjacency datasets
//!
//! A dataset is built once (from the built-in route table, a JSON document, or
//! a frozen [`CityGraph`](super::CityGraph)) and then only queried. Unlike
//! `CityGraph::neighbors_of`, [`lookup_neighbors`] does not distinguish an
//! unknown city from a city without roads: both yield an empty slice.

use super::edge::Edge;
use super::types::{CityName, Distance};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while loading a dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid distance {distance} on road {city} -> {neighbor}")]
    InvalidDistance {
        city: String,
        neighbor: String,
        distance: f64,
    },
}

pub type DatasetResult<T> = Result<T, DatasetError>;

/// Immutable city -> roads mapping
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AdjacencyDataset {
    cities: IndexMap<CityName, Vec<Edge>>,
}

/// Road entry as written in a JSON dataset, before its distance is checked
#[derive(Deserialize)]
struct RawEdge {
    city: CityName,
    distance: f64,
}

/// JSON numbers are always finite, so only the sign needs checking on load;
/// on export an infinite distance has no JSON form.
fn checked_distance(city: &CityName, neighbor: &CityName, distance: f64) -> DatasetResult<Distance> {
    Distance::new(distance)
        .filter(|d| d.as_f64().is_finite())
        .ok_or_else(|| DatasetError::InvalidDistance {
            city: city.to_string(),
            neighbor: neighbor.to_string(),
            distance,
        })
}

impl AdjacencyDataset {
    /// Build a dataset from `(city, roads)` pairs. Later duplicates replace
    /// earlier ones.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (CityName, Vec<Edge>)>,
    {
        AdjacencyDataset {
            cities: entries.into_iter().collect(),
        }
    }

    /// Parse a dataset from its JSON form:
    /// `{"CDMX": [{"city": "Puebla", "distance": 130}]}`.
    ///
    /// Empty city names are rejected as malformed JSON; non-positive
    /// distances as [`DatasetError::InvalidDistance`].
    pub fn from_json_str(json: &str) -> DatasetResult<Self> {
        let raw: IndexMap<CityName, Vec<RawEdge>> = serde_json::from_str(json)?;

        let mut cities = IndexMap::with_capacity(raw.len());
        for (city, roads) in raw {
            let edges = roads
                .into_iter()
                .map(|road| -> DatasetResult<Edge> {
                    let distance = checked_distance(&city, &road.city, road.distance)?;
                    Ok(Edge::new(road.city, distance))
                })
                .collect::<DatasetResult<Vec<_>>>()?;
            cities.insert(city, edges);
        }

        Ok(AdjacencyDataset { cities })
    }

    /// Load a dataset from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> DatasetResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let dataset = Self::from_json_str(&contents)?;
        info!("Loaded {} cities from {}", dataset.len(), path.display());
        Ok(dataset)
    }

    /// Serialize the dataset to pretty-printed JSON.
    ///
    /// Fails with [`DatasetError::InvalidDistance`] if a road is infinitely
    /// long, since JSON cannot represent it.
    pub fn to_json_string(&self) -> DatasetResult<String> {
        for (city, roads) in &self.cities {
            for road in roads {
                checked_distance(city, road.city_name(), road.distance())?;
            }
        }
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Roads stored for `city`, or `None` if it is not a key.
    pub fn get(&self, city: &str) -> Option<&[Edge]> {
        self.cities.get(city).map(|edges| edges.as_slice())
    }

    /// Iterate `(city, roads)` in dataset order
    pub fn iter(&self) -> impl Iterator<Item = (&CityName, &[Edge])> {
        self.cities.iter().map(|(name, edges)| (name, edges.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

/// Look up the roads leaving `city` in a fixed dataset.
///
/// A missing city (`None`) and an unknown one both yield an empty slice.
pub fn lookup_neighbors<'a>(dataset: &'a AdjacencyDataset, city: Option<&str>) -> &'a [Edge] {
    city.and_then(|name| dataset.get(name)).unwrap_or(&[])
}

/// Built-in road table for central Mexico.
pub fn mexico_routes() -> AdjacencyDataset {
    const ROUTES: &[(&str, &[(&str, f64)])] = &[
        ("CDMX", &[("Queretaro", 213.0), ("Puebla", 130.0)]),
        (
            "Queretaro",
            &[("CDMX", 213.0), ("San Luis Potosi", 205.0), ("Guadalajara", 330.0)],
        ),
        ("Puebla", &[("CDMX", 130.0), ("Veracruz", 280.0)]),
        ("San Luis Potosi", &[("Queretaro", 205.0), ("Monterrey", 512.0)]),
        ("Guadalajara", &[("Queretaro", 330.0), ("Tepic", 208.0)]),
        ("Veracruz", &[("Puebla", 280.0)]),
        ("Monterrey", &[("San Luis Potosi", 512.0)]),
        ("Tepic", &[("Guadalajara", 208.0)]),
    ];

    AdjacencyDataset::from_entries(ROUTES.iter().filter_map(|(city, roads)| {
        let name = CityName::parse(*city)?;
        let edges = roads
            .iter()
            .filter_map(|(to, distance)| Edge::from_parts(to, *distance))
            .collect();
        Some((name, edges))
    }))
}
