// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{get_env, log::try_create_layers};

/// Log level: `off`, `error`, `warn`, `info`, `debug` or `trace`.
pub const LOG_LEVEL_ENV_VAR: &str = "R3BL_TYPE_UTILS_LOG_LEVEL";

/// When set, logs are written to this file as well as to stderr.
pub const LOG_FILE_ENV_VAR: &str = "R3BL_TYPE_UTILS_LOG_FILE";

/// Where the logs go, and which of them are kept.
///
/// Fields:
/// - `writer_config`: [`WriterConfig`] to choose where to write the logs.
/// - `level_filter`: [`LevelFilter`] to use for every writer.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// The `String` in [`WriterConfig::File`] and [`WriterConfig::DisplayAndFile`] is the
/// path of the log file, eg: `/tmp/type_utils.log`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    pub fn new_display(preferred_display: DisplayPreference) -> Self {
        Self {
            writer_config: WriterConfig::Display(preferred_display),
            level_filter: LevelFilter::DEBUG,
        }
    }

    pub fn new_file(path: impl Into<String>) -> Self {
        Self {
            writer_config: WriterConfig::File(path.into()),
            level_filter: LevelFilter::DEBUG,
        }
    }

    pub fn new_file_and_display(
        path: impl Into<String>,
        preferred_display: DisplayPreference,
    ) -> Self {
        Self {
            writer_config: WriterConfig::DisplayAndFile(preferred_display, path.into()),
            level_filter: LevelFilter::DEBUG,
        }
    }

    /// Read [`LOG_LEVEL_ENV_VAR`] and [`LOG_FILE_ENV_VAR`].
    ///
    /// - The level defaults to `info` when the variable is unset, blank or not one of the
    ///   level names (case insensitive). Numeric levels are not accepted.
    /// - Without a log file, logs go to stderr only.
    pub fn from_env() -> Self {
        let level_filter = parse_level_name(&get_env(LOG_LEVEL_ENV_VAR))
            .unwrap_or(LevelFilter::INFO);

        let log_file = get_env(LOG_FILE_ENV_VAR);
        let writer_config = if log_file.is_empty() {
            WriterConfig::Display(DisplayPreference::Stderr)
        } else {
            WriterConfig::DisplayAndFile(DisplayPreference::Stderr, log_file)
        };

        Self {
            writer_config,
            level_filter,
        }
    }

    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    /// Install as the global default subscriber. That can only happen once per process.
    /// This is meant for apps.
    ///
    /// # Errors
    ///
    /// If the log file can't be created, or a global subscriber is already installed.
    pub fn install_global(self) -> miette::Result<()> {
        let layers = try_create_layers(self)?;
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .map_err(|err| miette::miette!("Can't install the global subscriber: {err}"))
    }

    /// Install as the default subscriber of the current thread, until the returned guard
    /// is dropped. This is meant for tests.
    ///
    /// # Errors
    ///
    /// If the log file can't be created.
    pub fn install_thread_local(self) -> miette::Result<dispatcher::DefaultGuard> {
        let layers = try_create_layers(self)?;
        Ok(tracing_subscriber::registry().with(layers).set_default())
    }
}

/// Only the names listed on [`LOG_LEVEL_ENV_VAR`]. [`LevelFilter`]'s own [`FromStr`]
/// also takes `""` and `0` to `5`.
///
/// [`FromStr`]: std::str::FromStr
fn parse_level_name(name: &str) -> Option<LevelFilter> {
    match name.trim().to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::OFF),
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}
