//! # Alfred Core Library
//!
//! Core logic for Alfred, a personal assistant that suggests nearby places.
//! Everything is available through the standalone `alfred` CLI; any richer
//! front end is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Geo**: haversine great-circle distance and distance formatting
//! - **Catalog**: the static list of points of interest (built-in or file)
//! - **Recommend**: distance annotation, category/radius/text filtering and a
//!   rotating window that shows a few entries at a time
//! - **Location**: the provider seam and the view-facing location state
//! - **Ticker / View**: the cancellable rotation timer and the task that owns
//!   one recommendation screen from mount to teardown
//! - **Assistant**: agenda, alarms, notifications and chat containers
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`Selector`]: selection state and the visible page
//! - [`RotationWindow`]: the windowing state machine
//! - [`RecommendationView`]: the hosting view lifecycle
//! - [`Config`]: application configuration management

pub mod assistant;
pub mod catalog;
pub mod error;
pub mod events;
pub mod geo;
pub mod location;
pub mod recommend;
pub mod storage;
pub mod ticker;
pub mod view;

pub use catalog::{Catalog, Category, Poi, PriceTier};
pub use error::{CatalogError, ChatError, ConfigError, CoreError, LocationError, ValidationError};
pub use events::{Event, ResetReason};
pub use geo::{format_distance, haversine_km, Coordinate};
pub use location::{FixedLocationProvider, LocationProvider, LocationTracker, PermissionStatus};
pub use recommend::{
    AnnotatedPoi, CategoryFilter, FilterParams, Page, RadiusKm, RotationWindow, Selector,
    SelectorSettings,
};
pub use storage::{data_dir, Config};
pub use ticker::RotationTicker;
pub use view::{DisplaySurface, RecommendationView, ViewCommand};
