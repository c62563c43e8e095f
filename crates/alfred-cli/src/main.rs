use alfred_core::Config;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "alfred", version, about = "Alfred personal assistant CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Great-circle distance between two coordinates
    Distance(commands::distance::DistanceArgs),
    /// Current page of nearby recommendations as JSON
    Recommend(commands::recommend::RecommendArgs),
    /// Every place passing the filters, with distances
    Places(commands::recommend::PlacesArgs),
    /// Rotate recommendations live until Ctrl-C
    Watch(commands::watch::WatchArgs),
    /// Print a random tip
    Tip,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

/// RUST_LOG wins; otherwise the configured level, then `warn`.
fn init_logging(config: Option<&Config>) {
    let level = config.map_or("warn", |c| c.logging.level.as_str());
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    // Read once; a missing file means defaults and is not written here.
    let loaded = Config::read();
    init_logging(loaded.as_ref().ok());
    if let Err(e) = &loaded {
        tracing::warn!(error = %e, "config unreadable");
    }

    let result = match cli.command {
        Commands::Distance(args) => commands::distance::run(args),
        Commands::Recommend(args) => loaded
            .map_err(Into::into)
            .and_then(|config| commands::recommend::run(args, &config)),
        Commands::Places(args) => loaded
            .map_err(Into::into)
            .and_then(|config| commands::recommend::run_places(args, &config)),
        Commands::Watch(args) => loaded
            .map_err(Into::into)
            .and_then(|config| commands::watch::run(args, &config)),
        Commands::Tip => commands::tip::run(),
        Commands::Config { action } => commands::config::run(action, loaded),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
