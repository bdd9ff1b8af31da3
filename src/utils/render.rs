// Map rendering for computed routes

use petgraph::visit::EdgeRef;
use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

use crate::models::{RoadNetwork, RoutePlan};

const ROUTE_COLORS: [RGBColor; 6] = [
    BLUE,
    RED,
    GREEN,
    MAGENTA,
    RGBColor(255, 165, 0), // Orange
    RGBColor(0, 128, 128), // Teal
];

/// Chart bounds `(min_x, max_x, min_y, max_y)` enclosing every location,
/// padded by 10% of the span on each side
pub fn map_bounds(network: &RoadNetwork) -> (f64, f64, f64, f64) {
    let mut min_x = f64::MAX;
    let mut max_x = f64::MIN;
    let mut min_y = f64::MAX;
    let mut max_y = f64::MIN;

    for location in network.registry().iter() {
        min_x = min_x.min(location.position.x);
        max_x = max_x.max(location.position.x);
        min_y = min_y.min(location.position.y);
        max_y = max_y.max(location.position.y);
    }

    // A single location or a straight line still needs a non-empty range
    let pad_x = ((max_x - min_x) * 0.1).max(1.0);
    let pad_y = ((max_y - min_y) * 0.1).max(1.0);

    (min_x - pad_x, max_x + pad_x, min_y - pad_y, max_y + pad_y)
}

/// Draws the road network, every location and the legs of `plan` to a PNG
pub fn draw_route_map<P: AsRef<Path>>(
    output_path: P,
    network: &RoadNetwork,
    plan: &RoutePlan,
) -> Result<(), Box<dyn Error>> {
    let (min_x, max_x, min_y, max_y) = map_bounds(network);

    let root = BitMapBackend::new(output_path.as_ref(), (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("{} Route", plan.result.algorithm()),
            ("sans-serif", 20).into_font(),
        )
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(min_x..max_x, min_y..max_y)?;

    chart.configure_mesh().disable_mesh().draw()?;

    // Roads
    let graph = network.graph().to_ungraph();
    for edge in graph.edge_references() {
        let from = network.registry().position(graph[edge.source()])?;
        let to = network.registry().position(graph[edge.target()])?;
        chart.draw_series(LineSeries::new(
            vec![(from.x, from.y), (to.x, to.y)],
            RGBColor(200, 200, 200).stroke_width(1),
        ))?;
    }

    // Route legs
    for (i, leg) in plan.legs.iter().enumerate() {
        let color = ROUTE_COLORS[i % ROUTE_COLORS.len()];
        let points: Vec<(f64, f64)> = leg.points().map(|p| (p.x(), p.y())).collect();
        chart
            .draw_series(LineSeries::new(points, color.stroke_width(3)))?
            .label(format!("Leg {}", i + 1))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(3)));
    }

    // Locations with their names
    chart.draw_series(network.registry().iter().map(|location| {
        let point = location.point();
        EmptyElement::at((point.x(), point.y()))
            + Circle::new((0, 0), 5, BLACK.filled())
            + Text::new(
                location.name.clone(),
                (10, -10),
                ("sans-serif", 15).into_font(),
            )
    }))?;

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
