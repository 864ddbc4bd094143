//! Logging utilities for running wasmlib contracts on the host.
//!
//! Contracts emit [`tracing`] events while dispatching actions. Off-chain
//! tooling and tests install a subscriber printing them with [`init_global`]
//! or [`test_logger`].
mod config;

use std::{
    fmt::Debug,
    sync::{
        atomic::{AtomicBool, Ordering},
        OnceLock,
    },
};

use color_eyre::{eyre::eyre, Result};
pub use config::{Config, Format, Level};
use tracing::subscriber::set_global_default;
pub use tracing::{debug, error, info, trace, warn};
pub use tracing_subscriber::reload::Error as ReloadError;
use tracing_subscriber::{
    filter::LevelFilter,
    layer::{Layered, SubscriberExt},
    registry::Registry,
    reload,
};

/// Subscriber the output layer is installed on.
type Filtered = Layered<reload::Layer<LevelFilter, Registry>, Registry>;

static LOGGER_SET: AtomicBool = AtomicBool::new(false);

fn try_set_logger() -> Result<()> {
    if LOGGER_SET
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return Err(eyre!("Logger is already set."));
    }
    Ok(())
}

/// Handle to the global logger.
#[derive(Debug, Clone)]
pub struct LoggerHandle {
    level: reload::Handle<LevelFilter, Registry>,
}

impl LoggerHandle {
    /// Change the maximum level of logged events.
    ///
    /// # Errors
    /// If the logger was dropped or its lock is poisoned
    pub fn reload_level(&self, level: Level) -> Result<(), ReloadError> {
        self.level
            .reload(LevelFilter::from_level(level.into()))
    }
}

/// Initializes the logger globally with given [`Config`].
///
/// Works only once per process, all subsequent invocations will fail.
///
/// For usage in tests consider [`test_logger`].
///
/// # Errors
/// If the logger is already set, raises a generic error.
pub fn init_global(config: &Config) -> Result<LoggerHandle> {
    try_set_logger()?;

    let layer = tracing_subscriber::fmt::layer()
        .with_ansi(config.terminal_colors)
        .with_test_writer();

    match config.format {
        Format::Full => step2(config, layer),
        Format::Compact => step2(config, layer.compact()),
        Format::Pretty => step2(config, layer.pretty()),
        Format::Json => step2(config, layer.json()),
    }
}

/// Returns once lazily initialised global logger for testing purposes.
///
/// # Panics
/// If [`init_global`] or [`disable_global`] were called first.
pub fn test_logger() -> LoggerHandle {
    static LOGGER: OnceLock<LoggerHandle> = OnceLock::new();

    LOGGER
        .get_or_init(|| {
            let config = Config {
                level: Level::Debug,
                format: Format::Pretty,
                terminal_colors: true,
            };

            init_global(&config).expect(
                "`init_global()` or `disable_global()` should not be called before `test_logger()`",
            )
        })
        .clone()
}

/// Disables the logger globally, so that subsequent calls to [`init_global`] will fail.
///
/// # Errors
/// If global logger was already initialised/disabled.
pub fn disable_global() -> Result<()> {
    try_set_logger()
}

fn step2<L>(config: &Config, layer: L) -> Result<LoggerHandle>
where
    L: tracing_subscriber::Layer<Filtered> + Debug + Send + Sync + 'static,
{
    let level_filter = LevelFilter::from_level(config.level.into());
    let (level_filter, level_handle) = reload::Layer::new(level_filter);
    let subscriber = Registry::default().with(level_filter).with(layer);
    set_global_default(subscriber)?;

    Ok(LoggerHandle {
        level: level_handle,
    })
}
