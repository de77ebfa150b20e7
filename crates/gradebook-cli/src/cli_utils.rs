//! Common CLI utility functions shared across commands.

use anyhow::Result;
use gradebook::{Config, Error, Roster, StudentOrder, export_roster, load_roster};
use tracing::{debug, warn};

/// Load the config file, falling back to defaults when it is missing
/// or unreadable. A missing file is the normal case and only logged at
/// debug level.
pub fn load_config(path: &str) -> Config {
    match Config::load(path) {
        Ok(config) => {
            debug!("Loaded config from {}", path);
            config
        }
        Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No config file at {}, using defaults", path);
            Config::default()
        }
        Err(e) => {
            warn!("Failed to load config from {}: {}, using defaults", path, e);
            Config::default()
        }
    }
}

/// Resolve the roster file path: CLI flag first, then config.
pub fn resolve_roster_file(file: Option<&str>, config: &Config) -> String {
    file.map(str::to_string)
        .unwrap_or_else(|| config.roster.file.clone())
}

/// Load the roster file, or start empty when it does not exist yet.
pub fn load_roster_or_empty(path: &str) -> Result<Roster> {
    match load_roster(path) {
        Ok(roster) => Ok(roster),
        Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No roster file at {}, starting empty", path);
            Ok(Roster::new())
        }
        Err(e) => Err(e.into()),
    }
}

/// Save the roster file in insertion order, keeping the indices shown
/// by `show` stable across runs.
pub fn save_roster(path: &str, roster: &Roster) -> Result<()> {
    export_roster(path, roster, StudentOrder::Insertion)?;
    Ok(())
}

/// Convert a displayed 1-based index to the 0-based index the roster
/// uses.
pub fn to_zero_based(index: usize) -> Result<usize> {
    if index == 0 {
        anyhow::bail!("Indices start at 1, as shown by `show`");
    }
    Ok(index - 1)
}
