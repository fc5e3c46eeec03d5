//! Console logging for the widget.
//!
//! `init_logging` routes the `log` facade to the browser console through
//! `console_log`. Host builds keep the facade without a backend. Repeated
//! calls are harmless and never panic; the first installed level wins.

use crate::config::ConfigError;
use log::LevelFilter;

pub(crate) fn parse_level(level: &str) -> Result<LevelFilter, ConfigError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "off" => Ok(LevelFilter::Off),
        "error" => Ok(LevelFilter::Error),
        "warn" | "warning" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        _ => Err(ConfigError::UnsupportedLogLevel(level.to_string())),
    }
}

pub fn init_logging(level: &str) -> Result<(), ConfigError> {
    let filter = parse_level(level)?;
    install(filter);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn install(filter: LevelFilter) {
    match filter.to_level() {
        // Fails only when a logger is already installed.
        Some(level) => {
            let _ = console_log::init_with_level(level);
        }
        None => log::set_max_level(LevelFilter::Off),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn install(filter: LevelFilter) {
    log::set_max_level(filter);
}
