use anyhow::{bail, Context, Result};
use clap::Parser;
use delivery_routes::utils::init_map::{load_network, sample_network};
use delivery_routes::utils::render::draw_route_map;
use delivery_routes::{Algorithm, RoutePlanner, RouteRequest};
use log::{error, info};
use std::path::PathBuf;

/// Command-line interface for delivery_routes
#[derive(Parser)]
#[command(name = "delivery-routes")]
#[command(about = "Plan delivery routes over a fixed road network")]
#[command(long_about = "Plans a delivery route from a start location:
  delivery-routes --start \"Satellite Town\" --to \"Khushab Road\"
  delivery-routes --start \"Satellite Town\" --to \"Khushab Road\" --to \"Noor Pur Thal\" -a shortest-path
  delivery-routes --network city.json --list

Without --network the built-in five-location sample network is used.")]
struct Cli {
    /// Road network JSON file
    #[arg(short, long)]
    network: Option<PathBuf>,

    /// Starting location
    #[arg(short, long, required_unless_present = "list")]
    start: Option<String>,

    /// Delivery destination (repeat for several)
    #[arg(short = 't', long = "to", required_unless_present = "list")]
    destinations: Vec<String>,

    /// shortest-path or nearest-neighbor
    #[arg(short, long, default_value = "nearest-neighbor")]
    algorithm: Algorithm,

    /// Print the plan as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Draw the route map to this PNG file
    #[arg(long)]
    render: Option<PathBuf>,

    /// List the known locations and exit
    #[arg(long)]
    list: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();

    let network = match &cli.network {
        Some(path) => load_network(path)
            .with_context(|| format!("cannot use network file {}", path.display()))?,
        None => sample_network()?,
    };

    if cli.list {
        for location in network.registry().iter() {
            println!(
                "{:>3}  {:<20} ({}, {})",
                location.id, location.name, location.position.x, location.position.y
            );
        }
        return Ok(());
    }

    let Some(start) = cli.start else {
        bail!("--start is required");
    };
    let request = RouteRequest::new(start, cli.destinations, cli.algorithm);

    let planner = RoutePlanner::new(&network);
    let plan = planner.plan(&request)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        println!("{}", plan.result);
    }

    if let Some(path) = &cli.render {
        draw_route_map(path, &network, &plan)
            .map_err(|e| anyhow::anyhow!("failed to render {}: {}", path.display(), e))?;
        info!("Route map saved to {}", path.display());
    }

    Ok(())
}
