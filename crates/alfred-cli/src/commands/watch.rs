//! `alfred watch`: a recommendation view printed to the terminal.

use std::sync::Arc;
use std::time::Duration;

use alfred_core::{
    Config, DisplaySurface, Event, FixedLocationProvider, LocationTracker, Page,
    RecommendationView, RotationWindow,
};
use clap::Args;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use super::filters::FilterArgs;

#[derive(Args)]
pub struct WatchArgs {
    #[command(flatten)]
    filters: FilterArgs,
    /// Seconds between page rotations (default from config)
    #[arg(long)]
    interval_secs: Option<u64>,
    /// Stop after this many seconds instead of waiting for Ctrl-C
    #[arg(long)]
    duration_secs: Option<u64>,
}

/// Prints every event as one JSON line followed by the visible page.
struct TerminalSurface;

impl DisplaySurface for TerminalSurface {
    fn render(&mut self, page: &Page, event: &Event) {
        match serde_json::to_string(event) {
            Ok(line) => println!("{line}"),
            Err(e) => tracing::warn!(error = %e, "failed to encode event"),
        }
        if page.is_empty() {
            println!("  (nothing nearby matches the current filters)");
            return;
        }
        for (i, item) in page.items.iter().enumerate() {
            println!(
                "  {}. {} [{}] {}",
                page.start_index + i + 1,
                item.poi.title,
                item.poi.category.as_str(),
                item.formatted_distance()
            );
        }
    }
}

pub fn run(args: WatchArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = args.filters.settings(config)?;
    if let Some(secs) = args.interval_secs {
        settings.rotation =
            RotationWindow::new(settings.rotation.window_size(), Duration::from_secs(secs))?;
    }
    let catalog = args.filters.catalog(config)?;
    let provider = FixedLocationProvider::from_option(args.filters.reference(config));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let selector = alfred_core::Selector::new(catalog, settings);
        let view = RecommendationView::new(
            selector,
            LocationTracker::new(Arc::new(provider)),
            TerminalSurface,
        );

        let shutdown = CancellationToken::new();
        // Commands are not read from the terminal; the sender keeps the channel open.
        let (_commands, rx) = mpsc::channel(1);
        let handle = tokio::spawn(view.run(rx, shutdown.clone()));

        let stop_after = async {
            match args.duration_secs {
                Some(secs) => tokio::time::sleep(Duration::from_secs(secs)).await,
                None => std::future::pending().await,
            }
        };
        let interrupted = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!(error = %e, "cannot listen for Ctrl-C");
                std::future::pending::<()>().await;
            }
        };
        tokio::select! {
            _ = interrupted => tracing::debug!("interrupted"),
            _ = stop_after => {}
        }

        shutdown.cancel();
        handle.await?;
        Ok::<(), Box<dyn std::error::Error>>(())
    })
}
