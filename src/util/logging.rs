//! Structured logging setup for distro-base
//!
//! The library itself only emits `tracing` events: host lookups at `debug`,
//! version tuple comparisons at `trace`, and a `warn` when the host cannot be
//! identified. Applications that want to see them call one of the `init_*`
//! functions once at startup. Only the first call installs a subscriber.
//!
//! `RUST_LOG` always takes precedence over the configured level.
//!
//! ```no_run
//! use distro_base::util::logging;
//!
//! // DISTRO_BASE_LOG_LEVEL=debug DISTRO_BASE_LOG_JSON=true
//! logging::init_from_env();
//!
//! let host = distro_base::DistroBase::from_host();
//! ```

use crate::config::DistroConfig;
use std::env;
use std::sync::Once;
use tracing::level_filters::LevelFilter;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const ENV_LOG_JSON: &str = "DISTRO_BASE_LOG_JSON";

static INIT: Once = Once::new();

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum level for events from this crate
    pub level: Level,

    /// Emit newline-delimited JSON instead of human readable lines
    pub use_json: bool,

    /// Include the module target (e.g. `distro_base::host`)
    pub include_target: bool,

    /// Include file and line number
    pub include_location: bool,

    pub include_thread_ids: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_json: false,
            include_target: true,
            include_location: false,
            include_thread_ids: false,
        }
    }
}

impl LoggingConfig {
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// JSON output with full event metadata
    pub fn production() -> Self {
        Self {
            level: Level::INFO,
            use_json: true,
            include_target: true,
            include_location: true,
            include_thread_ids: true,
        }
    }

    /// Debug level, plain console output
    pub fn development() -> Self {
        Self::with_level(Level::DEBUG)
    }

    /// Level from [`DistroConfig`], JSON output from `DISTRO_BASE_LOG_JSON`
    ///
    /// Anything other than `true`/`false` in `DISTRO_BASE_LOG_JSON` means plain
    /// output.
    pub fn from_env() -> Self {
        let use_json = env::var(ENV_LOG_JSON)
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);

        Self {
            use_json,
            ..Self::from_distro_config(&DistroConfig::default())
        }
    }

    /// Take the level from an already loaded [`DistroConfig`]
    pub fn from_distro_config(config: &DistroConfig) -> Self {
        Self::with_level(parse_level(&config.log_level))
    }
}

/// Parse a level name, case-insensitively
///
/// Unknown names fall back to `INFO`.
///
/// ```
/// use distro_base::util::logging::parse_level;
/// use tracing::Level;
///
/// assert_eq!(parse_level("Debug"), Level::DEBUG);
/// assert_eq!(parse_level("chatty"), Level::INFO);
/// ```
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(config.level).into())
        .from_env_lossy()
}

/// Install the global subscriber; later calls are no-ops
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = build_filter(&config);
        let layer = fmt::layer()
            .with_target(config.include_target)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_thread_ids(config.include_thread_ids)
            .with_thread_names(config.include_thread_ids);

        let registry = tracing_subscriber::registry().with(filter);
        let result = if config.use_json {
            registry.with(layer.json()).try_init()
        } else {
            registry.with(layer).try_init()
        };

        // Another subscriber may already be installed by the embedding application
        if let Err(e) = result {
            tracing::debug!(error = %e, "Global subscriber already set");
        }
    });
}

pub fn init_default() {
    init_logging(LoggingConfig::default());
}

/// Configure from `DISTRO_BASE_LOG_LEVEL` and `DISTRO_BASE_LOG_JSON`
pub fn init_from_env() {
    init_logging(LoggingConfig::from_env());
}
