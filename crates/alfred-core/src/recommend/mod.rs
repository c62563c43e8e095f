//! Proximity recommendations: distance annotation, filtering and the
//! rotating page shown to the user.

mod annotate;
mod favorites;
mod filter;
mod rotation;
mod selector;
mod tips;

pub use annotate::{annotate, AnnotatedPoi, Annotator};
pub use favorites::Favorites;
pub use filter::{
    apply_filters, CategoryFilter, FilterParams, RadiusKm, DEFAULT_FALLBACK_SAMPLE,
    DEFAULT_RADIUS_KM, RADIUS_OPTIONS_KM,
};
pub use rotation::{RotationWindow, DEFAULT_ROTATION_INTERVAL, DEFAULT_WINDOW_SIZE};
pub use selector::{Page, Selector, SelectorSettings};
pub use tips::{pick_tip, TIPS};
