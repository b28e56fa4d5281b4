//! File logging. The terminal belongs to the UI, so nothing is logged there.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "FOLIO_LOG";

const LOG_FILE: &str = "folio.log";
const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber writing to `folio.log` in the data
/// directory. Logging stays off if the file cannot be opened.
pub fn init() {
    let Some(dir) = folio_config::data_dir() else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))
    else {
        return;
    };

    let initialized = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_ok();
    if initialized {
        tracing::info!(version = env!("CARGO_PKG_VERSION"), "folio starting");
    }
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
