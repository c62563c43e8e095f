//! Category, radius and text filtering of annotated entries.
//!
//! Filtering is a pure function of its inputs: the same annotated list and
//! [`FilterParams`] always produce the same output.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::annotate::AnnotatedPoi;
use crate::catalog::Category;
use crate::error::ValidationError;

/// Radii offered to the user, in kilometers.
pub const RADIUS_OPTIONS_KM: &[u32] = &[1, 2, 3, 4, 5];

/// Default radius (the middle option).
pub const DEFAULT_RADIUS_KM: u32 = 3;

/// Default number of entries shown when no reference coordinate is known.
pub const DEFAULT_FALLBACK_SAMPLE: usize = 6;

/// Category selector: everything, or one exact category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => *c == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(c) => c.fmt(f),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

/// A radius restricted to [`RADIUS_OPTIONS_KM`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct RadiusKm(u32);

impl RadiusKm {
    pub fn new(km: u32) -> Result<Self, ValidationError> {
        if RADIUS_OPTIONS_KM.contains(&km) {
            Ok(Self(km))
        } else {
            Err(ValidationError::RadiusNotAllowed {
                value: km,
                allowed: RADIUS_OPTIONS_KM,
            })
        }
    }

    pub fn km(&self) -> u32 {
        self.0
    }
}

impl Default for RadiusKm {
    fn default() -> Self {
        Self(DEFAULT_RADIUS_KM)
    }
}

impl TryFrom<u32> for RadiusKm {
    type Error = ValidationError;

    fn try_from(km: u32) -> Result<Self, Self::Error> {
        Self::new(km)
    }
}

impl From<RadiusKm> for u32 {
    fn from(r: RadiusKm) -> Self {
        r.0
    }
}

/// Everything the filter depends on besides the annotated list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterParams {
    pub category: CategoryFilter,
    pub radius: RadiusKm,
    /// Free-text query; blank means no text filtering.
    #[serde(default)]
    pub search: String,
    /// Order results by ascending distance instead of catalog order.
    #[serde(default)]
    pub sort_by_distance: bool,
    /// Cap applied when no reference coordinate is known.
    pub fallback_sample: usize,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            radius: RadiusKm::default(),
            search: String::new(),
            sort_by_distance: false,
            fallback_sample: DEFAULT_FALLBACK_SAMPLE,
        }
    }
}

impl FilterParams {
    fn normalized_search(&self) -> String {
        self.search.trim().to_lowercase()
    }
}

/// Narrow the annotated list.
///
/// With a reference coordinate (`has_reference`), entries farther than the
/// radius are dropped. Without one, radius filtering is skipped and the
/// category-only result is cut to `fallback_sample` entries so the list is
/// never empty merely because the location is unknown.
pub fn apply_filters(
    annotated: &[AnnotatedPoi],
    params: &FilterParams,
    has_reference: bool,
) -> Vec<AnnotatedPoi> {
    let query = params.normalized_search();
    let radius = f64::from(params.radius.km());

    let mut out: Vec<AnnotatedPoi> = annotated
        .iter()
        .filter(|a| query.is_empty() || a.poi.search_text().contains(&query))
        .filter(|a| params.category.matches(a.poi.category))
        .filter(|a| !has_reference || a.distance_km.is_some_and(|d| d <= radius))
        .cloned()
        .collect();

    if params.sort_by_distance {
        // Stable: ties and unknown distances keep catalog order.
        out.sort_by(|a, b| {
            let da = a.distance_km.unwrap_or(f64::INFINITY);
            let db = b.distance_km.unwrap_or(f64::INFINITY);
            da.total_cmp(&db)
        });
    }

    if !has_reference {
        out.truncate(params.fallback_sample);
    }
    out
}
