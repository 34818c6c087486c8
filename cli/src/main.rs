//! CityGraph CLI — query a road table or build a graph interactively
//!
//! Lookups run against the built-in central Mexico route table unless a JSON
//! dataset is given with `--dataset` (or `CITYGRAPH_DATASET`).

use citygraph::{lookup_neighbors, mexico_routes, AdjacencyDataset, CityGraph, Edge, Value};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "citygraph", version, about = "CityGraph road network CLI")]
struct Cli {
    /// JSON adjacency dataset to load instead of the built-in route table
    #[arg(long, global = true, env = "CITYGRAPH_DATASET")]
    dataset: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// List the cities adjacent to CITY
    Neighbors {
        /// City name (case-sensitive)
        city: String,
    },
    /// List every city in the dataset with its number of roads
    Cities,
    /// Print the dataset as JSON
    Export,
    /// Build a graph interactively
    Shell,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = load_dataset(cli.dataset.as_ref()).and_then(|dataset| match cli.command {
        Commands::Neighbors { city } => run_neighbors(&dataset, &city, &cli.format),
        Commands::Cities => run_cities(&dataset, &cli.format),
        Commands::Export => run_export(&dataset),
        Commands::Shell => run_shell(&cli.format),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_dataset(path: Option<&PathBuf>) -> Result<AdjacencyDataset, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(AdjacencyDataset::from_json_file(path)?),
        None => {
            debug!("no dataset given, using built-in route table");
            Ok(mexico_routes())
        }
    }
}

fn run_neighbors(
    dataset: &AdjacencyDataset,
    city: &str,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let nearby = lookup_neighbors(dataset, Some(city));
    print_roads(nearby, format)
}

fn run_cities(
    dataset: &AdjacencyDataset,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => {
            let rows: Vec<serde_json::Value> = dataset
                .iter()
                .map(|(city, roads)| serde_json::json!({"city": city, "roads": roads.len()}))
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Csv => {
            println!("city,roads");
            for (city, roads) in dataset.iter() {
                println!("{},{}", csv_field(city.as_str()), roads.len());
            }
        }
        OutputFormat::Table => {
            if dataset.is_empty() {
                println!("(no cities)");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["city", "roads"]);
            for (city, roads) in dataset.iter() {
                table.add_row(vec![city.to_string(), roads.len().to_string()]);
            }

            println!("{}", table);
            println!("{} city(ies)", dataset.len());
        }
    }

    Ok(())
}

fn run_export(dataset: &AdjacencyDataset) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", dataset.to_json_string()?);
    Ok(())
}

fn print_roads(edges: &[Edge], format: &OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(edges)?);
        }
        OutputFormat::Csv => {
            println!("city,distance");
            for edge in edges {
                println!("{},{}", csv_field(edge.city()), edge.distance());
            }
        }
        OutputFormat::Table => {
            if edges.is_empty() {
                println!("(no results)");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["city", "distance"]);
            for edge in edges {
                table.add_row(vec![edge.city().to_string(), edge.distance().to_string()]);
            }

            println!("{}", table);
            println!("{} row(s)", edges.len());
        }
    }

    Ok(())
}

/// A line typed into the shell
#[derive(Debug, PartialEq)]
enum ShellCommand {
    Quit,
    Help,
    City(String),
    Road(String, String, Value),
    Near(String),
    Stats,
    Unknown(String),
}

/// Parse one shell line. Arguments of `road` are comma separated so city
/// names may contain spaces: `road San Luis Potosi, Monterrey, 512`.
fn parse_shell_line(line: &str) -> ShellCommand {
    let (cmd, rest) = match line.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (line, ""),
    };

    match cmd {
        ":quit" | ":exit" | ":q" => ShellCommand::Quit,
        ":help" | ":h" => ShellCommand::Help,
        ":stats" => ShellCommand::Stats,
        "city" => ShellCommand::City(rest.to_string()),
        "near" => ShellCommand::Near(rest.to_string()),
        "road" => {
            let parts: Vec<&str> = rest.split(',').map(str::trim).collect();
            match parts.as_slice() {
                [a, b, d] => ShellCommand::Road(a.to_string(), b.to_string(), parse_distance(d)),
                _ => ShellCommand::Unknown(line.to_string()),
            }
        }
        _ => ShellCommand::Unknown(line.to_string()),
    }
}

/// Numbers become numeric values; anything else stays a string and is
/// rejected by the graph.
fn parse_distance(raw: &str) -> Value {
    if let Ok(i) = raw.parse::<i64>() {
        Value::Integer(i)
    } else if let Ok(f) = raw.parse::<f64>() {
        Value::Float(f)
    } else {
        Value::String(raw.to_string())
    }
}

fn run_shell(format: &OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    println!("CityGraph Interactive Shell");
    println!("Type :help for commands. :quit to exit.\n");

    let mut graph = CityGraph::new();
    let stdin = std::io::stdin();
    let mut line = String::new();

    loop {
        eprint!("citygraph> ");

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match parse_shell_line(trimmed) {
            ShellCommand::Quit => break,
            ShellCommand::Help => {
                println!("Commands:");
                println!("  city <name>               Register a city");
                println!("  road <a>, <b>, <distance> Add a road between two cities");
                println!("  near <name>               Show roads leaving a city");
                println!("  :stats                    Show graph size");
                println!("  :quit                     Exit shell");
            }
            ShellCommand::City(name) => match graph.try_register_city(name) {
                Ok(city) => println!("✓ {}", city),
                Err(e) => eprintln!("✗ {}", e),
            },
            ShellCommand::Road(a, b, distance) => {
                match graph.try_add_distance(&a, &b, distance) {
                    Ok(()) => println!("✓ {} <-> {}", a, b),
                    Err(e) => eprintln!("✗ {}", e),
                }
            }
            ShellCommand::Near(name) => match graph.neighbors_of(&name) {
                Some(edges) => print_roads(edges, format)?,
                None => eprintln!("✗ unknown city: {}", name),
            },
            ShellCommand::Stats => {
                println!("Cities: {}", graph.city_count());
                println!("Roads:  {}", graph.edge_count());
            }
            ShellCommand::Unknown(input) => eprintln!("✗ unrecognized command: {}", input),
        }
    }

    println!("Bye!");
    Ok(())
}

fn csv_field(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
