//! Selection flags shared by `recommend`, `places` and `watch`.

use std::path::PathBuf;

use alfred_core::{Catalog, Config, Coordinate, RadiusKm, Selector, SelectorSettings};
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Reference latitude (needs --lon)
    #[arg(long, allow_negative_numbers = true, requires = "lon")]
    pub lat: Option<f64>,
    /// Reference longitude (needs --lat)
    #[arg(long, allow_negative_numbers = true, requires = "lat")]
    pub lon: Option<f64>,
    /// "all", Comida, Actividades or Eventos
    #[arg(long)]
    pub category: Option<String>,
    /// Search radius in km (1-5)
    #[arg(long)]
    pub radius: Option<u32>,
    /// Free-text search over title, category and tags
    #[arg(long)]
    pub search: Option<String>,
    /// Order by distance instead of catalog order
    #[arg(long)]
    pub sort: bool,
    /// Catalog file (.json or .toml) instead of the configured one
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

impl FilterArgs {
    /// Flags first, then `[location]` from the config.
    pub fn reference(&self, config: &Config) -> Option<Coordinate> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)),
            _ => config.reference(),
        }
    }

    pub fn catalog(&self, config: &Config) -> Result<Catalog, Box<dyn std::error::Error>> {
        match &self.catalog {
            Some(path) => Ok(Catalog::load(path)?),
            None => Ok(config.catalog()?),
        }
    }

    /// Configured defaults with the flags applied on top.
    pub fn settings(
        &self,
        config: &Config,
    ) -> Result<SelectorSettings, Box<dyn std::error::Error>> {
        let mut settings = config.selector_settings()?;
        if let Some(category) = &self.category {
            settings.filter.category = category.parse()?;
        }
        if let Some(radius) = self.radius {
            settings.filter.radius = RadiusKm::new(radius)?;
        }
        if let Some(search) = &self.search {
            settings.filter.search = search.clone();
        }
        if self.sort {
            settings.filter.sort_by_distance = true;
        }
        Ok(settings)
    }

    /// A selector with the reference already applied.
    pub fn selector(&self, config: &Config) -> Result<Selector, Box<dyn std::error::Error>> {
        let mut selector = Selector::new(self.catalog(config)?, self.settings(config)?);
        selector.set_reference(self.reference(config));
        Ok(selector)
    }
}
