use alfred_core::{format_distance, haversine_km, Coordinate};
use clap::Args;

#[derive(Args)]
pub struct DistanceArgs {
    /// Latitude of the first point
    #[arg(allow_negative_numbers = true)]
    lat1: f64,
    /// Longitude of the first point
    #[arg(allow_negative_numbers = true)]
    lon1: f64,
    /// Latitude of the second point
    #[arg(allow_negative_numbers = true)]
    lat2: f64,
    /// Longitude of the second point
    #[arg(allow_negative_numbers = true)]
    lon2: f64,
}

pub fn run(args: DistanceArgs) -> Result<(), Box<dyn std::error::Error>> {
    let a = Coordinate::new(args.lat1, args.lon1);
    let b = Coordinate::new(args.lat2, args.lon2);
    if !a.is_valid() || !b.is_valid() {
        tracing::warn!("coordinate outside the valid latitude/longitude range");
    }
    let km = haversine_km(&a, &b);
    println!("{km:.3} km ({})", format_distance(Some(km)));
    Ok(())
}
