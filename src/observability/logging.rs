//! Structured logging.
//!
//! # Responsibilities
//! - Initialize logging subsystem
//! - Configure log level from config, CLI, or environment
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - JSON format for production, pretty format for development
//! - RUST_LOG wins over the configured level when set

use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;

/// Parse a level name (trace, debug, info, warn, error; any case).
pub fn parse_log_level(s: &str) -> Result<Level, String> {
    s.trim()
        .parse::<Level>()
        .map_err(|_| format!("unknown log level '{}'", s))
}

/// Build the filter: RUST_LOG if set, else `level_override`, else the config level.
pub fn build_filter(config: &ObservabilityConfig, level_override: Option<Level>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level_override
            .or_else(|| parse_log_level(&config.log_level).ok())
            .unwrap_or(Level::INFO);
        EnvFilter::default().add_directive(LevelFilter::from_level(level).into())
    })
}

/// Install the global subscriber. Call once at startup.
pub fn init_logging(config: &ObservabilityConfig, level_override: Option<Level>) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(build_filter(config, level_override))
        .with_target(false);

    match config.log_format.as_str() {
        "json" => subscriber.json().init(),
        _ => subscriber.init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("info"), Ok(Level::INFO));
        assert_eq!(parse_log_level("WARN"), Ok(Level::WARN));
        assert_eq!(parse_log_level(" error "), Ok(Level::ERROR));
        assert!(parse_log_level("verbose").is_err());
        assert!(parse_log_level("").is_err());
    }
}
