//! Log subscriber setup for processes embedding the guard layer.
//!
//! The library only emits `debug` events when it hands a validated call to a
//! primitive. Payloads, keys and IVs are never recorded, only sizes and
//! algorithm names.

use anyhow::Result;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

/// Output format of the installed subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Multi-line human-readable output for local debugging.
    Pretty,
}

/// Build the event filter: `RUST_LOG` wins over `log_level` when set.
fn filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
}

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(log_level: &str, format: LogFormat) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(filter(log_level));
    let installed = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
    installed.map_err(|e| {
        anyhow::anyhow!("cipher-guard log subscriber not installed ({format:?}): {e}")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_serde_names() {
        let parsed: LogFormat = serde_json::from_str("\"pretty\"").unwrap();
        assert_eq!(parsed, LogFormat::Pretty);
        assert_eq!(LogFormat::default(), LogFormat::Json);
    }

    #[test]
    fn second_install_is_an_error() {
        let _ = init("debug", LogFormat::Json);
        let err = init("info", LogFormat::Pretty).unwrap_err();
        assert!(err.to_string().contains("Pretty"));
    }
}
