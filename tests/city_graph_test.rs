//! End-to-end behaviour of the mutable city graph through the public API

use citygraph::{CityGraph, Edge, GraphError, Value};
use serde_json::json;

fn seeded() -> CityGraph {
    let mut graph = CityGraph::new();
    assert!(graph.register_city("Monterrey"));
    assert!(graph.register_city("Guadalajara"));
    assert!(graph.register_city("CDMX"));
    graph
}

#[test]
fn test_monterrey_guadalajara_scenario() {
    let mut graph = seeded();

    assert!(graph.add_distance("Monterrey", "Guadalajara", 900));

    assert_eq!(
        graph.neighbors_of("Monterrey").unwrap(),
        &[Edge::from_parts("Guadalajara", 900.0).unwrap()]
    );
    assert_eq!(
        graph.neighbors_of("Guadalajara").unwrap(),
        &[Edge::from_parts("Monterrey", 900.0).unwrap()]
    );
    assert!(graph.neighbors_of("CDMX").unwrap().is_empty());
}

#[test]
fn test_new_city_starts_without_roads() {
    let mut graph = seeded();
    assert!(graph.register_city("Cancún"));
    assert_eq!(graph.neighbors_of("Cancún").map(|e| e.len()), Some(0));
}

#[test]
fn test_duplicate_registration_is_rejected() {
    let mut graph = seeded();
    assert!(!graph.register_city("Monterrey"));
    assert_eq!(graph.city_count(), 3);
}

#[test]
fn test_invalid_names_leave_graph_untouched() {
    let mut graph = seeded();
    assert!(!graph.register_city(Value::Null));
    assert!(!graph.register_city(None::<String>));
    assert!(!graph.register_city(123));
    assert!(!graph.register_city(""));
    assert_eq!(graph.city_count(), 3);
}

#[test]
fn test_composite_names_are_rejected() {
    let mut graph = seeded();
    assert!(!graph.register_city(Value::from(json!(["CDMX"]))));
    assert!(!graph.register_city(Value::from(json!({"a": 1}))));
    assert!(!graph.register_city(Value::from(json!(["Tepic", "Colima"]))));
    assert!(!graph.register_city(Value::from(json!({}))));
    assert!(matches!(
        graph.try_register_city(Value::from(json!(["Tepic"]))),
        Err(GraphError::InvalidCityName(Value::Array(_)))
    ));

    assert_eq!(graph.city_count(), 3);
    let names: Vec<&str> = graph.cities().map(|c| c.as_str()).collect();
    assert_eq!(names, vec!["Monterrey", "Guadalajara", "CDMX"]);
}

#[test]
fn test_json_string_name_is_accepted() {
    let mut graph = seeded();
    assert!(graph.register_city(Value::from(json!("Tepic"))));
    assert!(graph.neighbors_of("Tepic").unwrap().is_empty());
}

#[test]
fn test_infinite_and_fractional_distances_are_accepted() {
    let mut graph = seeded();
    assert!(graph.add_distance("Monterrey", "CDMX", f64::INFINITY));
    assert!(graph.add_distance("Guadalajara", "CDMX", 0.25));

    assert_eq!(graph.neighbors_of("Monterrey").unwrap()[0].distance(), f64::INFINITY);
    assert_eq!(graph.neighbors_of("CDMX").unwrap()[0].distance(), f64::INFINITY);
    assert_eq!(graph.neighbors_of("Guadalajara").unwrap()[0].distance(), 0.25);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_non_numeric_and_non_positive_distances_are_rejected() {
    let mut graph = seeded();
    assert!(!graph.add_distance("Monterrey", "CDMX", f64::NAN));
    assert!(!graph.add_distance("Monterrey", "CDMX", f64::NEG_INFINITY));
    assert!(!graph.add_distance("Monterrey", "CDMX", -0.5));
    assert!(!graph.add_distance("Monterrey", "CDMX", Value::from(json!([900]))));
    assert!(!graph.add_distance("Monterrey", "CDMX", Value::from(json!({"km": 900}))));
    assert!(!graph.add_distance("Monterrey", "CDMX", true));
    assert!(!graph.add_distance("Monterrey", "CDMX", "900"));

    assert_eq!(graph.edge_count(), 0);
    assert!(graph.neighbors_of("Monterrey").unwrap().is_empty());
    assert!(graph.neighbors_of("CDMX").unwrap().is_empty());
}

#[test]
fn test_rejected_roads_leave_graph_untouched() {
    let mut graph = seeded();
    assert!(!graph.add_distance("Monterrey", "Tijuana", 1000));
    assert!(!graph.add_distance("Monterrey", "CDMX", -100));
    assert!(!graph.add_distance("Monterrey", "CDMX", 0));
    assert!(!graph.add_distance("Monterrey", "CDMX", "muy lejos"));

    assert_eq!(graph.edge_count(), 0);
    for city in ["Monterrey", "Guadalajara", "CDMX"] {
        assert!(graph.neighbors_of(city).unwrap().is_empty());
    }
}

#[test]
fn test_unknown_and_empty_are_distinguishable() {
    let mut graph = seeded();
    graph.register_city("Saltillo");

    let unknown = graph.neighbors_of("Tijuana");
    let empty = graph.neighbors_of("Saltillo");
    assert!(unknown.is_none());
    assert!(empty.is_some());
    assert_ne!(unknown, empty);
}

#[test]
fn test_every_road_is_mirrored() {
    let mut graph = seeded();
    graph.add_distance("Monterrey", "Guadalajara", 900);
    graph.add_distance("Guadalajara", "CDMX", 540.5);
    graph.add_distance("CDMX", "Monterrey", 910);

    for city in graph.cities() {
        for road in graph.neighbors_of(city.as_str()).unwrap() {
            let back = graph.neighbors_of(road.city()).unwrap();
            assert!(back.contains(&road.mirrored(city)));
        }
    }
}

#[test]
fn test_typed_errors() {
    let mut graph = seeded();
    assert!(matches!(
        graph.try_add_distance("CDMX", "Puebla", 130),
        Err(GraphError::CityNotFound(ref c)) if c == "Puebla"
    ));
    assert!(matches!(
        graph.try_add_distance("CDMX", "Monterrey", -1),
        Err(GraphError::InvalidDistance(Value::Integer(-1)))
    ));
    assert!(matches!(
        graph.try_register_city(false),
        Err(GraphError::InvalidCityName(Value::Boolean(false)))
    ));
}
