use alfred_core::{format_distance, Config};
use clap::Args;

use super::filters::FilterArgs;

#[derive(Args)]
pub struct RecommendArgs {
    #[command(flatten)]
    filters: FilterArgs,
    /// Advance the rotation this many times before printing
    #[arg(long, default_value_t = 0)]
    ticks: usize,
}

#[derive(Args)]
pub struct PlacesArgs {
    #[command(flatten)]
    filters: FilterArgs,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: RecommendArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut selector = args.filters.selector(config)?;
    for _ in 0..args.ticks {
        selector.tick();
    }
    println!("{}", serde_json::to_string_pretty(&selector.page())?);
    Ok(())
}

pub fn run_places(args: PlacesArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let selector = args.filters.selector(config)?;
    let places = selector.filtered();

    if args.json {
        println!("{}", serde_json::to_string_pretty(places)?);
        return Ok(());
    }

    if places.is_empty() {
        println!("No places match the current filters.");
        return Ok(());
    }
    for place in places {
        println!(
            "{:>3}  {:<28} {:<12} {:>4.1}  {:<4} {}",
            place.poi.id,
            place.poi.title,
            place.poi.category.as_str(),
            place.poi.rating,
            place.poi.price.to_string(),
            format_distance(place.distance_km),
        );
    }
    if selector.reference().is_none() {
        println!("(location unknown: showing a sample without radius filtering)");
    }
    Ok(())
}
