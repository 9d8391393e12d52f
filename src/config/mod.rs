//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ProberConfig (validated, immutable)
//!     → passed by reference into the prober and reporter
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - Tunables have defaults; endpoints and APIM settings are required
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::EndpointConfig;
pub use schema::ObservabilityConfig;
pub use schema::ProbeConfig;
pub use schema::ProberConfig;
pub use schema::ReportConfig;
