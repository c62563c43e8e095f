use alfred_core::recommend::pick_tip;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", pick_tip(&mut rand::thread_rng()));
    Ok(())
}
