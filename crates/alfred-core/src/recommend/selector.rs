//! Proximity recommendation selector.
//!
//! Owns the selection state (category, radius, search, reference coordinate,
//! rotation offset) for one hosting view and derives the visible page from
//! the static catalog. Every setter recomputes the filtered list
//! synchronously and resets the rotation when the selection changed.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::annotate::{AnnotatedPoi, Annotator};
use super::filter::{apply_filters, CategoryFilter, FilterParams, RadiusKm};
use super::rotation::RotationWindow;
use crate::catalog::Catalog;
use crate::events::{Event, ResetReason};
use crate::geo::Coordinate;

/// Initial selection and rotation parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectorSettings {
    pub filter: FilterParams,
    pub rotation: RotationWindow,
}

/// The entries currently on screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub items: Vec<AnnotatedPoi>,
    /// Index of the first item within the filtered list.
    pub start_index: usize,
    /// Size of the filtered list.
    pub total: usize,
    pub has_reference: bool,
}

impl Page {
    /// `true` when the view must render its empty state.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug)]
pub struct Selector {
    catalog: Catalog,
    annotator: Annotator,
    reference: Option<Coordinate>,
    filter: FilterParams,
    rotation: RotationWindow,
    filtered: Vec<AnnotatedPoi>,
}

impl Selector {
    pub fn new(catalog: Catalog, settings: SelectorSettings) -> Self {
        let mut selector = Self {
            catalog,
            annotator: Annotator::new(),
            reference: None,
            filter: settings.filter,
            rotation: settings.rotation,
            filtered: Vec::new(),
        };
        selector.filtered = selector.compute_filtered();
        selector.rotation.reset();
        selector
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn reference(&self) -> Option<Coordinate> {
        self.reference
    }

    pub fn filter(&self) -> &FilterParams {
        &self.filter
    }

    pub fn rotation(&self) -> &RotationWindow {
        &self.rotation
    }

    /// The full filtered list, before windowing.
    pub fn filtered(&self) -> &[AnnotatedPoi] {
        &self.filtered
    }

    /// The visible page. Pure: two reads without a tick or filter change in
    /// between are identical.
    pub fn page(&self) -> Page {
        Page {
            items: self.rotation.page(&self.filtered).into_iter().cloned().collect(),
            start_index: self.rotation.start_index(self.filtered.len()),
            total: self.filtered.len(),
            has_reference: self.reference.is_some(),
        }
    }

    pub fn snapshot(&self) -> Event {
        let page = self.page();
        Event::PageSnapshot {
            category: self.filter.category,
            radius_km: self.filter.radius.km(),
            has_reference: page.has_reference,
            start_index: page.start_index,
            total: page.total,
            items: page.items,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Advance the rotation by one page. No event for an empty list.
    pub fn tick(&mut self) -> Option<Event> {
        let total = self.filtered.len();
        if !self.rotation.advance(total) {
            return None;
        }
        let start_index = self.rotation.start_index(total);
        tracing::debug!(start_index, total, "rotation advanced");
        Some(Event::WindowAdvanced {
            start_index,
            total,
            at: Utc::now(),
        })
    }

    pub fn set_category(&mut self, category: CategoryFilter) -> Option<Event> {
        if self.filter.category == category {
            return None;
        }
        self.filter.category = category;
        Some(self.refilter(ResetReason::CategoryChanged))
    }

    pub fn set_radius(&mut self, radius: RadiusKm) -> Option<Event> {
        if self.filter.radius == radius {
            return None;
        }
        self.filter.radius = radius;
        Some(self.refilter(ResetReason::RadiusChanged))
    }

    pub fn set_search(&mut self, search: impl Into<String>) -> Option<Event> {
        let search = search.into();
        if self.filter.search.trim().to_lowercase() == search.trim().to_lowercase() {
            self.filter.search = search;
            return None;
        }
        self.filter.search = search;
        Some(self.refilter(ResetReason::SearchChanged))
    }

    /// Replace the reference coordinate; `None` means "location unknown".
    pub fn set_reference(&mut self, reference: Option<Coordinate>) -> Option<Event> {
        if self.reference == reference {
            return None;
        }
        self.reference = reference;
        Some(self.refilter(ResetReason::ReferenceChanged))
    }

    /// Swap in a reloaded catalog. The rotation only resets when the
    /// filtered list changed size; otherwise the current page position is
    /// kept (reduced modulo the list length on read).
    pub fn replace_catalog(&mut self, catalog: Catalog) -> Option<Event> {
        let before = self.filtered.len();
        self.catalog = catalog;
        self.annotator.invalidate();
        self.filtered = self.compute_filtered();
        if self.filtered.len() == before {
            return None;
        }
        self.rotation.reset();
        let total = self.filtered.len();
        tracing::debug!(before, total, "filtered count changed; rotation reset");
        Some(Event::SelectionReset {
            reason: ResetReason::ResultCountChanged,
            total,
            at: Utc::now(),
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn compute_filtered(&mut self) -> Vec<AnnotatedPoi> {
        let annotated = self.annotator.annotate(self.reference, self.catalog.pois());
        apply_filters(annotated, &self.filter, self.reference.is_some())
    }

    fn refilter(&mut self, reason: ResetReason) -> Event {
        self.filtered = self.compute_filtered();
        self.rotation.reset();
        let total = self.filtered.len();
        tracing::debug!(?reason, total, "selection reset");
        Event::SelectionReset {
            reason,
            total,
            at: Utc::now(),
        }
    }
}
