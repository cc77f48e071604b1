//! Tracing / logging initialisation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration for the CLI, built from `-v` and `--log-json`.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Global default level: "trace" | "debug" | "info" | "warn" | "error"
    pub level: String,
    /// Emit JSON structured logs (true) or human-readable text (false)
    pub json: bool,
}

impl LogConfig {
    /// Map `-v` repetitions onto a level: none → warn, `-v` → info,
    /// `-vv` → debug, more → trace.
    pub fn from_verbosity(verbosity: u8, json: bool) -> Self {
        let level = match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        Self {
            level: level.to_string(),
            json,
        }
    }
}

/// Initialise tracing. Logs go to stderr so stdout stays machine-readable.
/// `RUST_LOG`, when set, takes precedence over `config.level`.
/// Should be called once at startup.
pub fn init_tracing(config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    if config.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(LogConfig::from_verbosity(0, false).level, "warn");
        assert_eq!(LogConfig::from_verbosity(1, false).level, "info");
        assert_eq!(LogConfig::from_verbosity(2, false).level, "debug");
        assert_eq!(LogConfig::from_verbosity(9, true).level, "trace");
        assert!(LogConfig::from_verbosity(0, true).json);
    }
}
