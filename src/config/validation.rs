//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check every endpoint is fully specified and backend IDs are unique
//! - Validate value ranges (timeouts > 0, sleep > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ProberConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use thiserror::Error;

use crate::config::schema::ProberConfig;
use crate::observability::logging::parse_log_level;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no endpoints configured")]
    NoEndpoints,

    #[error("endpoints[{index}].{field} must not be empty")]
    EmptyEndpointField { index: usize, field: &'static str },

    #[error("duplicate backend_id '{0}'")]
    DuplicateBackendId(String),

    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("invalid apim_url '{url}': {reason}")]
    InvalidApimUrl { url: String, reason: String },

    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error("unsupported probe scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),

    #[error("unsupported log format '{0}' (expected pretty or json)")]
    UnsupportedLogFormat(String),

    #[error("unsupported log level '{0}' (expected trace, debug, info, warn or error)")]
    UnsupportedLogLevel(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &ProberConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.endpoints.is_empty() {
        errors.push(ValidationError::NoEndpoints);
    }

    let mut seen = HashSet::new();
    for (index, ep) in config.endpoints.iter().enumerate() {
        let fields = [
            ("endpoint", &ep.endpoint),
            ("deployment_name", &ep.deployment_name),
            ("api_key", &ep.api_key),
            ("backend_id", &ep.backend_id),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                errors.push(ValidationError::EmptyEndpointField { index, field });
            }
        }
        if !ep.backend_id.is_empty() && !seen.insert(ep.backend_id.as_str()) {
            errors.push(ValidationError::DuplicateBackendId(ep.backend_id.clone()));
        }
    }

    if config.aoai_api_version.trim().is_empty() {
        errors.push(ValidationError::EmptyField("aoai_api_version"));
    }
    if config.apim_api_key.trim().is_empty() {
        errors.push(ValidationError::EmptyField("apim_api_key"));
    }

    match url::Url::parse(&config.apim_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::InvalidApimUrl {
            url: config.apim_url.clone(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError::InvalidApimUrl {
            url: config.apim_url.clone(),
            reason: e.to_string(),
        }),
    }

    if config.sleep_timeout == 0 {
        errors.push(ValidationError::Zero("sleep_timeout"));
    }
    if config.probe.timeout_secs == 0 {
        errors.push(ValidationError::Zero("probe.timeout_secs"));
    }
    if config.probe.max_tokens == 0 {
        errors.push(ValidationError::Zero("probe.max_tokens"));
    }
    if config.report.timeout_secs == 0 {
        errors.push(ValidationError::Zero("report.timeout_secs"));
    }

    if config.probe.scheme != "http" && config.probe.scheme != "https" {
        errors.push(ValidationError::UnsupportedScheme(config.probe.scheme.clone()));
    }

    match config.observability.log_format.as_str() {
        "pretty" | "json" => {}
        other => errors.push(ValidationError::UnsupportedLogFormat(other.to_string())),
    }

    if parse_log_level(&config.observability.log_level).is_err() {
        errors.push(ValidationError::UnsupportedLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
