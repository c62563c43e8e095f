use super::{Category, Poi, PriceTier};
use crate::geo::Coordinate;

fn poi(
    id: u32,
    title: &str,
    status: &str,
    description: &str,
    category: Category,
    rating: f32,
    price: PriceTier,
    tags: &[&str],
    hours: &str,
    (latitude, longitude): (f64, f64),
) -> Poi {
    Poi {
        id,
        title: title.into(),
        description: description.into(),
        status: status.into(),
        category,
        rating,
        price,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        hours: hours.into(),
        coordinate: Coordinate::new(latitude, longitude),
    }
}

/// Sample places around central Lima.
#[rustfmt::skip]
pub(super) fn pois() -> Vec<Poi> {
    use Category::*;
    use PriceTier::*;

    vec![
        poi(1, "Café Luna", "Open", "Artisan coffee, cosy room and free wifi", Food, 4.5, Moderate, &["Café", "Wifi"], "07:00 - 22:00", (-12.0464, -77.0428)),
        poi(2, "Live Jazz Night", "Tonight", "Jazz night with local musicians", Events, 4.8, Upscale, &["Música", "Nocturno"], "20:00 - 23:00", (-12.0503, -77.0351)),
        poi(3, "Restaurante Terra", "Open", "Mediterranean cooking with organic produce", Food, 4.3, Upscale, &["Comida", "Orgánico"], "12:00 - 23:00", (-12.0432, -77.0282)),
        poi(4, "Historic Centre Tour", "Upcoming", "Guided walk through the iconic downtown buildings", Activities, 4.7, Moderate, &["Historia", "Guiado"], "16:00 - 18:00", (-12.0560, -77.0300)),
        poi(5, "Pulse 24/7 Gym", "Open", "Certified trainers around the clock", Activities, 4.2, Moderate, &["Fitness", "24/7"], "00:00 - 23:59", (-12.0700, -77.0450)),
        poi(6, "Green Organic Market", "Weekend", "Local producers with fresh tastings", Events, 4.6, Budget, &["Mercado", "Orgánico"], "08:00 - 14:00", (-12.0900, -77.0500)),
        poi(7, "Barranco Street Art Walk", "Upcoming", "Murals and galleries by the sea", Activities, 4.4, Budget, &["Arte", "Guiado"], "10:00 - 13:00", (-12.1480, -77.0210)),
        poi(8, "Cevichería Mar Azul", "Open", "Fresh ceviche and a seaside terrace", Food, 4.9, Moderate, &["Comida", "Mariscos"], "11:00 - 17:00", (-12.1220, -77.0300)),
        poi(9, "Open-Air Cinema", "Friday", "Classic films in the park", Events, 4.1, Budget, &["Cine", "Nocturno"], "19:30 - 22:00", (-12.1100, -77.0370)),
    ]
}
