// SPDX-License-Identifier: MPL-2.0
//! Structured logging setup with tracing.
//!
//! Logs go to stderr, or to the file named by `ICED_FLIPBOOK_LOG`.
//! `RUST_LOG` overrides the default `info` filter.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable naming a log file to append to.
pub const ENV_LOG_FILE: &str = "ICED_FLIPBOOK_LOG";

const DEFAULT_FILTER: &str = "info";

/// Initializes the global subscriber. Later calls are no-ops.
pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let log_file = log_file_path().and_then(|path| {
        match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => Some(file),
            Err(err) => {
                eprintln!("cannot open log file {}: {err}", path.display());
                None
            }
        }
    });

    let result = match log_file {
        Some(file) => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .try_init(),
        None => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };

    if result.is_ok() {
        tracing::debug!("logging initialized");
    }
}

fn log_file_path() -> Option<PathBuf> {
    std::env::var_os(ENV_LOG_FILE)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
