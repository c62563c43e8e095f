//! Static point-of-interest catalog.
//!
//! The catalog is supplied once at startup, either from the built-in sample
//! or from a TOML/JSON file, and is never mutated afterwards.

mod sample;

use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, ValidationError};
use crate::geo::Coordinate;

/// Closed set of recommendation categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Comida")]
    Food,
    #[serde(rename = "Actividades")]
    Activities,
    #[serde(rename = "Eventos")]
    Events,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Food, Category::Activities, Category::Events];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Comida",
            Self::Activities => "Actividades",
            Self::Events => "Eventos",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}

/// Price tier, rendered as one to four `$` signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriceTier {
    #[serde(rename = "$")]
    Budget,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    Upscale,
    #[serde(rename = "$$$$")]
    Luxury,
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Budget => "$",
            Self::Moderate => "$$",
            Self::Upscale => "$$$",
            Self::Luxury => "$$$$",
        };
        f.write_str(s)
    }
}

/// A recommendable place or event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poi {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Short badge such as "Open" or "Tonight".
    #[serde(default)]
    pub status: String,
    pub category: Category,
    pub rating: f32,
    pub price: PriceTier,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Opening hours as free text, e.g. "07:00 - 22:00".
    #[serde(default)]
    pub hours: String,
    pub coordinate: Coordinate,
}

impl Poi {
    /// Text the free-text search is matched against.
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.title, self.category, self.tags.join(" ")).to_lowercase()
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "poi")]
    pois: Vec<Poi>,
}

/// Ordered, read-only list of points of interest.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Catalog {
    pois: Vec<Poi>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate identifiers.
    pub fn new(pois: Vec<Poi>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(pois.len());
        for poi in &pois {
            if !seen.insert(poi.id) {
                return Err(CatalogError::DuplicateId(poi.id));
            }
        }
        Ok(Self { pois })
    }

    /// The built-in sample catalog.
    pub fn sample() -> Self {
        Self {
            pois: sample::pois(),
        }
    }

    /// Load a catalog file. `.json` files are parsed as a JSON array of
    /// entries; anything else as TOML with `[[poi]]` tables.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content =
            std::fs::read_to_string(path).map_err(|source| CatalogError::ReadFailed {
                path: path.to_path_buf(),
                source,
            })?;
        let parse_failed = |message: String| CatalogError::ParseFailed {
            path: path.to_path_buf(),
            message,
        };

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let pois = if is_json {
            serde_json::from_str::<Vec<Poi>>(&content).map_err(|e| parse_failed(e.to_string()))?
        } else {
            toml::from_str::<CatalogFile>(&content)
                .map_err(|e| parse_failed(e.to_string()))?
                .pois
        };

        let invalid = pois.iter().filter(|p| !p.coordinate.is_valid()).count();
        if invalid > 0 {
            tracing::warn!(
                path = %path.display(),
                invalid,
                "catalog contains out-of-range coordinates; distances for them are meaningless"
            );
        }
        tracing::debug!(path = %path.display(), count = pois.len(), "catalog loaded");
        Self::new(pois)
    }

    pub fn pois(&self) -> &[Poi] {
        &self.pois
    }

    pub fn get(&self, id: u32) -> Option<&Poi> {
        self.pois.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.pois.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pois.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("comida".parse::<Category>().unwrap(), Category::Food);
        assert_eq!(" Eventos ".parse::<Category>().unwrap(), Category::Events);
        assert!("Bares".parse::<Category>().is_err());
    }

    #[test]
    fn sample_catalog_has_unique_ids() {
        let sample = Catalog::sample();
        assert!(!sample.is_empty());
        assert!(Catalog::new(sample.pois().to_vec()).is_ok());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut pois = Catalog::sample().pois().to_vec();
        pois.push(pois[0].clone());
        match Catalog::new(pois) {
            Err(CatalogError::DuplicateId(id)) => assert_eq!(id, 1),
            other => panic!("Expected DuplicateId, got {other:?}"),
        }
    }

    #[test]
    fn load_toml_catalog() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            r#"
[[poi]]
id = 7
title = "Café Luna"
category = "Comida"
rating = 4.5
price = "$$"
tags = ["Café", "Wifi"]
coordinate = {{ latitude = -12.12, longitude = -77.03 }}
"#
        )
        .unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        let poi = catalog.get(7).unwrap();
        assert_eq!(poi.category, Category::Food);
        assert_eq!(poi.price, PriceTier::Moderate);
        assert_eq!(poi.search_text(), "café luna comida café wifi");
    }

    #[test]
    fn load_json_catalog() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        let json = serde_json::to_string(&Catalog::sample().pois()[..2]).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn load_reports_parse_failures() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "[[poi]]\nid = \"not a number\"").unwrap();
        assert!(matches!(
            Catalog::load(file.path()),
            Err(CatalogError::ParseFailed { .. })
        ));
    }
}
