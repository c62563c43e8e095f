//! Distance annotation of catalog entries.

use serde::{Deserialize, Serialize};

use crate::catalog::Poi;
use crate::geo::{format_distance, haversine_km, Coordinate};

/// A catalog entry with its distance from the reference point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedPoi {
    #[serde(flatten)]
    pub poi: Poi,
    /// `None` exactly when no reference coordinate is known.
    pub distance_km: Option<f64>,
}

impl AnnotatedPoi {
    pub fn formatted_distance(&self) -> String {
        format_distance(self.distance_km)
    }
}

/// Attach distances to every entry, preserving catalog order.
pub fn annotate(reference: Option<Coordinate>, pois: &[Poi]) -> Vec<AnnotatedPoi> {
    pois.iter()
        .map(|poi| AnnotatedPoi {
            poi: poi.clone(),
            distance_km: reference.map(|r| haversine_km(&r, &poi.coordinate)),
        })
        .collect()
}

/// Memoizes [`annotate`] on the reference coordinate value.
#[derive(Debug, Default)]
pub struct Annotator {
    cached: Option<(Option<Coordinate>, Vec<AnnotatedPoi>)>,
}

impl Annotator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Annotated list for `reference`, recomputed only when it changed.
    pub fn annotate(&mut self, reference: Option<Coordinate>, pois: &[Poi]) -> &[AnnotatedPoi] {
        let stale = !matches!(&self.cached, Some((cached_ref, _)) if *cached_ref == reference);
        if stale {
            self.cached = Some((reference, annotate(reference, pois)));
        }
        match &self.cached {
            Some((_, list)) => list,
            None => &[],
        }
    }

    /// Drop the cached list, e.g. after the catalog was replaced.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}
