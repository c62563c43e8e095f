use alfred_core::{Config, ConfigError};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Dot-separated key (e.g. "recommendations.window_size")
        key: String,
    },
    /// Set a config value
    Set {
        /// Dot-separated key
        key: String,
        /// New value ("none" clears an optional value)
        value: String,
    },
    /// List all config values
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Reset config to defaults
    Reset,
}

/// `loaded` is the config as read at startup; `reset` works even when it
/// failed to parse.
pub fn run(
    action: ConfigAction,
    loaded: Result<Config, ConfigError>,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = loaded?;
            let value = config.get(&key).ok_or(ConfigError::UnknownKey(key))?;
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            let mut config = loaded?;
            config.set(&key, &value)?;
            config.save()?;
            tracing::info!(%key, %value, "config updated");
            println!("ok");
        }
        ConfigAction::List { json } => {
            let config = loaded?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                for (key, value) in config.entries() {
                    println!("{key} = {value}");
                }
            }
        }
        ConfigAction::Reset => {
            Config::default().save()?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
