//! Logging utilities

use std::path::{Path, PathBuf};

use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    self, filter::EnvFilter, prelude::__tracing_subscriber_SubscriberExt,
    util::SubscriberInitExt, Layer,
};

use super::paths::{LOG_ENV, LOG_FILE};

/// Sends `tracing` events (and bridged `log` records) to a file in
/// `directory`, truncating the previous session's log. Returns its path.
///
/// The filter comes from `RUST_LOG`, then `USERDECK_LOGLEVEL`, then
/// [`default_directives`].
pub fn initialize_logging(directory: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(directory)?;
    let log_path = directory.join(LOG_FILE.as_str());
    let log_file = std::fs::File::create(&log_path)?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV.as_str()))
        .unwrap_or_else(|_| EnvFilter::new(default_directives()));
    let file_subscriber = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(filter);
    tracing_subscriber::registry()
        .with(file_subscriber)
        .with(ErrorLayer::default())
        .try_init()?;

    tracing::info!(path = %log_path.display(), "logging initialized");
    Ok(log_path)
}

pub fn default_directives() -> String {
    format!("{}=info", env!("CARGO_CRATE_NAME"))
}

/// Like `dbg!`, but the value goes to the log file instead of stderr,
/// which belongs to the terminal UI.
#[macro_export]
macro_rules! trace_dbg {
    (level: $level:expr, $ex:expr) => {{
        let value = $ex;
        tracing::event!($level, value = ?value, expr = stringify!($ex));
        value
    }};
    ($ex:expr) => {
        $crate::trace_dbg!(level: tracing::Level::DEBUG, $ex)
    };
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(default_directives(), "userdeck=info");
    }

    #[test]
    fn test_trace_dbg_passes_value_through() {
        let value = crate::trace_dbg!(1 + 2);
        assert_eq!(value, 3);
        let name = crate::trace_dbg!(level: tracing::Level::INFO, String::from("ana"));
        assert_eq!(name, "ana");
    }
}
