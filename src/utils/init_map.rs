// Network configuration: the built-in sample network and JSON files

use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use geo::Coord;

use crate::error::Result;
use crate::models::{Distance, DistanceGraph, LocationRegistry, RoadNetwork};

// Sample network: five delivery points and their road distances in km
const SAMPLE_LOCATIONS: [(&str, f64, f64); 5] = [
    ("Satellite Town", 50.0, 100.0),
    ("University Road", 150.0, 200.0),
    ("Noor Pur Thal", 300.0, 100.0),
    ("Khushab Road", 400.0, 250.0),
    ("Shaheen Chowk", 550.0, 150.0),
];

const SAMPLE_DISTANCES: [[Distance; 5]; 5] = [
    [0, 5, 12, 15, 8],
    [5, 0, 8, 10, 6],
    [12, 8, 0, 7, 10],
    [15, 10, 7, 0, 5],
    [8, 6, 10, 5, 0],
];

/// A location entry of a network file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationConfig {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

/// On-disk network description: locations in index order plus the matrix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub locations: Vec<LocationConfig>,
    pub distances: Vec<Vec<Distance>>,
}

impl NetworkConfig {
    /// Validates the description and builds the network
    pub fn build(self) -> Result<RoadNetwork> {
        let registry = LocationRegistry::new(
            self.locations
                .into_iter()
                .map(|l| (l.name, Coord { x: l.x, y: l.y })),
        )?;
        let graph = DistanceGraph::from_rows(self.distances)?;
        RoadNetwork::new(registry, graph)
    }

    /// Description of the built-in sample network
    pub fn sample() -> Self {
        Self {
            locations: SAMPLE_LOCATIONS
                .iter()
                .map(|&(name, x, y)| LocationConfig {
                    name: name.to_string(),
                    x,
                    y,
                })
                .collect(),
            distances: SAMPLE_DISTANCES.iter().map(|row| row.to_vec()).collect(),
        }
    }
}

/// Built-in five-location network
pub fn sample_network() -> Result<RoadNetwork> {
    NetworkConfig::sample().build()
}

/// Loads a network from a JSON file
pub fn load_network<P: AsRef<Path>>(path: P) -> Result<RoadNetwork> {
    let path = path.as_ref();
    info!("Loading road network from {}", path.display());

    let json_str = fs::read_to_string(path)?;
    let config: NetworkConfig = serde_json::from_str(&json_str)?;
    let network = config.build()?;

    info!(
        "Loaded {} locations from {}",
        network.len(),
        path.display()
    );
    Ok(network)
}

/// Writes a network description as pretty JSON
pub fn save_network_config<P: AsRef<Path>>(config: &NetworkConfig, path: P) -> Result<()> {
    let json_str = serde_json::to_string_pretty(config)?;
    fs::write(path.as_ref(), json_str)?;
    info!("Network saved to {}", path.as_ref().display());
    Ok(())
}
