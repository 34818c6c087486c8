//! Core city graph implementation
//!
//! This module implements the road network data model with:
//! - Cities registered by name, each owning an ordered adjacency list
//! - Weighted, undirected roads stored as two mirrored directed entries
//! - A read-only dataset form for fixed route tables

pub mod dataset;
pub mod edge;
pub mod shared;
pub mod store;
pub mod types;
pub mod value;

// Re-export main types
pub use dataset::{lookup_neighbors, mexico_routes, AdjacencyDataset, DatasetError, DatasetResult};
pub use edge::Edge;
pub use shared::SharedCityGraph;
pub use store::{CityGraph, GraphError, GraphResult};
pub use types::{CityName, Distance};
pub use value::Value;
