//! CityGraph
//!
//! An in-memory, weighted, undirected graph of cities and the road distances
//! between them, answering "which cities are adjacent to X" queries.
//!
//! Two lookup surfaces are provided:
//!
//! - [`CityGraph`]: mutable. Cities are registered, roads added between
//!   registered cities, and `neighbors_of` returns `None` for unknown cities.
//! - [`AdjacencyDataset`] with [`lookup_neighbors`]: read-only. Unknown or
//!   missing cities yield an empty slice.
//!
//! ## Example Usage
//!
//! ```rust
//! use citygraph::{lookup_neighbors, mexico_routes, CityGraph};
//!
//! let mut graph = CityGraph::new();
//! graph.register_city("Monterrey");
//! graph.register_city("Guadalajara");
//! assert!(graph.add_distance("Monterrey", "Guadalajara", 900));
//!
//! let mty = graph.neighbors_of("Monterrey").unwrap();
//! assert_eq!(mty[0].city(), "Guadalajara");
//! assert!(graph.neighbors_of("Tijuana").is_none());
//!
//! let routes = mexico_routes();
//! assert_eq!(lookup_neighbors(&routes, Some("CDMX")).len(), 2);
//! assert!(lookup_neighbors(&routes, Some("Cancun")).is_empty());
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod graph;

// Re-export main types for convenience
pub use graph::{
    lookup_neighbors, mexico_routes, AdjacencyDataset, CityGraph, CityName, DatasetError,
    DatasetResult, Distance, Edge, GraphError, GraphResult, SharedCityGraph, Value,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
