//! Labels a hexagonal grid by its strongest Gaussian field and prints the
//! resulting Dirichlet domains.
//!
//! Run with `RUST_LOG=hexdomain=debug` to see the analysis log.

use hexdomain::grid::HexGrid;
use hexdomain::math::Point2;
use hexdomain::operations::{dirichlet_regions, Contours, DirichletDomains};
use hexdomain::HexDomainError;

const RINGS: u32 = 12;
const SPACING: f64 = 0.05;
const WIDTH: f64 = 0.25;

/// Gaussian bump centres.
const SEEDS: [(f64, f64); 4] = [(-0.3, -0.2), (0.25, -0.25), (0.0, 0.3), (0.35, 0.2)];

fn gaussian(p: &Point2, centre: (f64, f64)) -> f64 {
    let dx = p.x - centre.0;
    let dy = p.y - centre.1;
    (-(dx * dx + dy * dy) / (2.0 * WIDTH * WIDTH)).exp()
}

fn main() -> Result<(), HexDomainError> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("domains=info".parse().unwrap_or_default())
        .add_directive("hexdomain=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let grid = HexGrid::hexagon(RINGS, SPACING)?;
    let fields: Vec<Vec<f64>> = SEEDS
        .iter()
        .map(|&seed| grid.cells().map(|c| gaussian(&c.center, seed)).collect())
        .collect();

    let identity = dirichlet_regions(&fields)?;
    let analysis = DirichletDomains::new(&grid, &identity).execute()?;

    println!(
        "{} cells, {} domains, {} failures",
        identity.len(),
        analysis.domains.len(),
        analysis.failures.len()
    );
    for domain in &analysis.domains {
        println!(
            "  domain {}: {} vertices, area {:.4}",
            domain.domain_id,
            domain.len(),
            domain.area()
        );
    }
    for failure in &analysis.failures {
        println!("  domain {} failed: {}", failure.domain_id, failure.error);
    }

    let contours = Contours::new(&grid, &fields, 0.5).execute()?;
    for (i, cells) in contours.iter().enumerate() {
        println!("  field {i}: {} contour cells", cells.len());
    }

    Ok(())
}
