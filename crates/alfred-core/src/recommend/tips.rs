use rand::seq::SliceRandom;
use rand::Rng;

/// Assistant tips shown under the recommendation list.
pub const TIPS: &[&str] = &[
    "Café Luna is quieter around 3 PM",
    "Restaurante Terra has a vegetarian menu on Thursdays",
    "The jazz night fills up fast, arrive early",
    "Many places offer discounts for digital payments",
];

/// Pick one tip at random.
pub fn pick_tip<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    TIPS.choose(rng).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn picks_a_known_tip() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert!(TIPS.contains(&pick_tip(&mut rng)));
        }
    }
}
