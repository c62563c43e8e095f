//! The hosting view for recommendations.
//!
//! [`RecommendationView::run`] is the mount-to-teardown lifetime of one
//! recommendation screen. It owns all selection state, so nothing outlives
//! it: on shutdown the rotation ticker is stopped and any in-flight location
//! request is aborted before its result can touch the discarded state.

use std::future::pending;

use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinHandle};
use tokio_util::sync::CancellationToken;

use crate::error::LocationError;
use crate::events::Event;
use crate::geo::Coordinate;
use crate::location::LocationTracker;
use crate::recommend::{CategoryFilter, Page, RadiusKm, Selector};
use crate::ticker::RotationTicker;

/// Receives the current page whenever it may have changed.
pub trait DisplaySurface: Send {
    fn render(&mut self, page: &Page, event: &Event);
}

/// User input delivered to a running view.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewCommand {
    SetCategory(CategoryFilter),
    SetRadius(RadiusKm),
    SetSearch(String),
    /// Manual retry of the location request.
    RefreshLocation,
}

type LocationRequest = JoinHandle<Result<Coordinate, LocationError>>;

pub struct RecommendationView<D> {
    selector: Selector,
    location: LocationTracker,
    display: D,
    refresh_on_mount: bool,
}

impl<D: DisplaySurface> RecommendationView<D> {
    pub fn new(selector: Selector, location: LocationTracker, display: D) -> Self {
        Self {
            selector,
            location,
            display,
            refresh_on_mount: true,
        }
    }

    /// Skip the automatic location request on mount.
    pub fn without_initial_refresh(mut self) -> Self {
        self.refresh_on_mount = false;
        self
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn location(&self) -> &LocationTracker {
        &self.location
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn into_display(self) -> D {
        self.display
    }

    /// Run until `shutdown` is cancelled, then tear down and hand the view
    /// back for inspection.
    pub async fn run(
        mut self,
        mut commands: mpsc::Receiver<ViewCommand>,
        shutdown: CancellationToken,
    ) -> Self {
        let mut ticker =
            RotationTicker::start_with_token(self.selector.rotation().interval(), shutdown.clone());
        let mut request: Option<LocationRequest> = None;
        let mut commands_open = true;

        // A coordinate the provider already knows is shown before any refresh.
        self.selector.set_reference(self.location.coordinate());
        let mounted = self.selector.snapshot();
        self.emit(mounted);
        if self.refresh_on_mount {
            request = Some(self.spawn_location_request());
        }

        loop {
            let reset = tokio::select! {
                _ = shutdown.cancelled() => break,
                Some(_) = ticker.tick() => {
                    if let Some(event) = self.selector.tick() {
                        self.emit(event);
                    }
                    false
                }
                cmd = commands.recv(), if commands_open => match cmd {
                    Some(ViewCommand::RefreshLocation) => {
                        if request.is_none() {
                            request = Some(self.spawn_location_request());
                        }
                        false
                    }
                    Some(cmd) => self.handle(cmd),
                    None => {
                        commands_open = false;
                        false
                    }
                },
                joined = wait_for(&mut request), if request.is_some() => {
                    request = None;
                    self.finish_location_request(joined)
                }
            };
            // A reset page gets a full interval on screen.
            if reset {
                ticker.restart().await;
            }
        }

        if let Some(handle) = request.take() {
            handle.abort();
            self.location.abandon();
        }
        ticker.stop().await;
        tracing::debug!("recommendation view torn down");
        self
    }

    /// Returns `true` when the rotation was reset.
    fn handle(&mut self, cmd: ViewCommand) -> bool {
        let event = match cmd {
            ViewCommand::SetCategory(category) => self.selector.set_category(category),
            ViewCommand::SetRadius(radius) => self.selector.set_radius(radius),
            ViewCommand::SetSearch(search) => self.selector.set_search(search),
            ViewCommand::RefreshLocation => None,
        };
        match event {
            Some(event) => {
                self.emit(event);
                true
            }
            None => false,
        }
    }

    fn spawn_location_request(&mut self) -> LocationRequest {
        self.location.begin();
        let provider = self.location.provider();
        tokio::spawn(async move { provider.refresh().await })
    }

    /// Returns `true` when the new coordinate reset the rotation.
    fn finish_location_request(
        &mut self,
        joined: Result<Result<Coordinate, LocationError>, JoinError>,
    ) -> bool {
        let result = joined.unwrap_or_else(|e| Err(LocationError::Unavailable(e.to_string())));
        let event = self.location.apply(result);
        self.emit(event);
        match self.selector.set_reference(self.location.coordinate()) {
            Some(event) => {
                self.emit(event);
                true
            }
            None => false,
        }
    }

    fn emit(&mut self, event: Event) {
        let page = self.selector.page();
        self.display.render(&page, &event);
    }
}

async fn wait_for(
    request: &mut Option<LocationRequest>,
) -> Result<Result<Coordinate, LocationError>, JoinError> {
    match request {
        Some(handle) => handle.await,
        None => pending().await,
    }
}
