use citygraph::{lookup_neighbors, mexico_routes, CityGraph, Edge};
use tracing::info;

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("CityGraph v{}", citygraph::version());
    println!("==========================================");
    println!();

    // Demo 1: Mutable graph
    demo_city_graph();

    // Demo 2: Fixed route table
    demo_route_table();
}

fn format_roads(edges: &[Edge]) -> String {
    if edges.is_empty() {
        return "(no roads)".to_string();
    }
    edges
        .iter()
        .map(|e| format!("{} ({} km)", e.city(), e.distance()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn demo_city_graph() {
    println!("=== Demo 1: City Graph ===");
    let mut graph = CityGraph::new();

    for city in ["Monterrey", "Guadalajara", "CDMX", "Saltillo"] {
        if graph.register_city(city) {
            println!("✓ Registered {}", city);
        }
    }

    if !graph.register_city("Monterrey") {
        println!("✗ Monterrey is already registered");
    }

    if graph.add_distance("Monterrey", "Guadalajara", 900) {
        println!("✓ Monterrey <-> Guadalajara (900 km)");
    }
    if graph.add_distance("Guadalajara", "CDMX", 540) {
        println!("✓ Guadalajara <-> CDMX (540 km)");
    }
    if !graph.add_distance("Monterrey", "Tijuana", 2300) {
        println!("✗ Tijuana is not registered");
    }
    if !graph.add_distance("Monterrey", "CDMX", -100) {
        println!("✗ Negative distances are rejected");
    }

    println!();
    for city in ["Monterrey", "Guadalajara", "Saltillo", "Tijuana"] {
        match graph.neighbors_of(city) {
            Some(edges) => println!("  {} -> {}", city, format_roads(edges)),
            None => println!("  {} -> unknown city", city),
        }
    }

    info!(
        cities = graph.city_count(),
        roads = graph.edge_count(),
        "city graph demo finished"
    );
    println!("\nGraph Statistics:");
    println!("  Total cities: {}", graph.city_count());
    println!("  Total roads: {}", graph.edge_count());
}

fn demo_route_table() {
    println!("\n=== Demo 2: Route Table Lookup ===");
    let routes = mexico_routes();
    info!("route table holds {} cities", routes.len());

    for city in [Some("CDMX"), Some("Queretaro"), Some("Cancun"), None] {
        let nearby = lookup_neighbors(&routes, city);
        println!("  {} -> {}", city.unwrap_or("<none>"), format_roads(nearby));
    }
}
