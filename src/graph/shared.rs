//! Thread-safe handle around a [`CityGraph`]
//!
//! One coarse lock guards the whole mapping so the check-then-mutate steps of
//! `register_city` and `add_distance` are atomic to concurrent readers.

use super::edge::Edge;
use super::store::CityGraph;
use super::value::Value;
use std::sync::{Arc, RwLock};
use tracing::warn;

/// Cloneable, shareable city graph
#[derive(Debug, Clone, Default)]
pub struct SharedCityGraph {
    inner: Arc<RwLock<CityGraph>>,
}

impl SharedCityGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing graph
    pub fn from_graph(graph: CityGraph) -> Self {
        SharedCityGraph {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    /// See [`CityGraph::register_city`]. A poisoned lock counts as a failure.
    pub fn register_city(&self, name: impl Into<Value>) -> bool {
        match self.inner.write() {
            Ok(mut graph) => graph.register_city(name),
            Err(_) => {
                warn!("city graph lock poisoned; register_city rejected");
                false
            }
        }
    }

    /// See [`CityGraph::add_distance`]. A poisoned lock counts as a failure.
    pub fn add_distance(&self, city_a: &str, city_b: &str, distance: impl Into<Value>) -> bool {
        match self.inner.write() {
            Ok(mut graph) => graph.add_distance(city_a, city_b, distance),
            Err(_) => {
                warn!("city graph lock poisoned; add_distance rejected");
                false
            }
        }
    }

    /// Copy of the roads leaving `city`; `None` if unregistered.
    pub fn neighbors_of(&self, city: &str) -> Option<Vec<Edge>> {
        let graph = self.inner.read().ok()?;
        graph.neighbors_of(city).map(|edges| edges.to_vec())
    }

    pub fn city_count(&self) -> usize {
        self.inner.read().map(|g| g.city_count()).unwrap_or(0)
    }

    pub fn edge_count(&self) -> usize {
        self.inner.read().map(|g| g.edge_count()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_shared_basic_operations() {
        let graph = SharedCityGraph::new();
        assert!(graph.register_city("Monterrey"));
        assert!(graph.register_city("Saltillo"));
        assert!(graph.add_distance("Monterrey", "Saltillo", 85));

        let edges = graph.neighbors_of("Saltillo").unwrap();
        assert_eq!(edges, vec![Edge::from_parts("Monterrey", 85.0).unwrap()]);
        assert_eq!(graph.neighbors_of("Tijuana"), None);
    }

    #[test]
    fn test_concurrent_registration_is_exclusive() {
        let graph = SharedCityGraph::new();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let g = graph.clone();
                thread::spawn(move || g.register_city("CDMX"))
            })
            .collect();

        let wins = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|&ok| ok)
            .count();
        assert_eq!(wins, 1);
        assert_eq!(graph.city_count(), 1);
    }

    #[test]
    fn test_concurrent_roads_stay_symmetric() {
        let graph = SharedCityGraph::new();
        graph.register_city("Puebla");
        graph.register_city("Veracruz");

        let handles: Vec<_> = (1..=4)
            .map(|i| {
                let g = graph.clone();
                thread::spawn(move || g.add_distance("Puebla", "Veracruz", 280 + i))
            })
            .collect();
        for h in handles {
            assert!(h.join().unwrap());
        }

        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.neighbors_of("Puebla").unwrap().len(), 4);
        assert_eq!(graph.neighbors_of("Veracruz").unwrap().len(), 4);
    }
}
