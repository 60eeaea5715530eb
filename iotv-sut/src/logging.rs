//! Tracing setup for iotv-sut
//!
//! The subscriber is installed before anything else runs, so config loading
//! is logged too. The filter sits behind a reload layer: once the TOML config
//! is known its `log_level` replaces the startup default, unless `RUST_LOG`
//! was set explicitly.

use anyhow::{Context, Result};
use tracing_subscriber::{
    fmt, layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry,
};

/// Filter used until the config file has been read
pub const STARTUP_LOG_LEVEL: &str = "info";

/// Swaps the active filter after startup
pub struct LogLevelHandle {
    handle: reload::Handle<EnvFilter, Registry>,
    from_env: bool,
}

impl LogLevelHandle {
    /// Apply the configured level; a `RUST_LOG` filter always wins
    pub fn apply_config_level(&self, level: &str) -> Result<()> {
        if self.from_env {
            return Ok(());
        }

        let filter = EnvFilter::try_new(level)
            .with_context(|| format!("Invalid log_level '{}'", level))?;
        self.handle
            .reload(filter)
            .context("Failed to reload log filter")?;
        Ok(())
    }
}

/// Reloadable filter layer, seeded from `RUST_LOG` or [`STARTUP_LOG_LEVEL`]
pub fn filter_layer() -> (reload::Layer<EnvFilter, Registry>, LogLevelHandle) {
    let (filter, from_env) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, true),
        Err(_) => (EnvFilter::new(STARTUP_LOG_LEVEL), false),
    };
    let (layer, handle) = reload::Layer::new(filter);
    (layer, LogLevelHandle { handle, from_env })
}

/// Install the global subscriber writing to stderr
pub fn init() -> LogLevelHandle {
    let (filter, handle) = filter_layer();
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
    handle
}
