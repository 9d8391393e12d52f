//! Latency Prober
//!
//! Measures chat-completion latency across a fixed set of endpoints and
//! tells APIM which backends to prefer.
//!
//! # Architecture Overview
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────┐
//!   │                       LATENCY PROBER                         │
//!   │                                                              │
//!   │  ┌───────────┐   ┌───────────┐   ┌──────────┐   ┌─────────┐  │
//!   │  │ scheduler │──▶│  prober   │──▶│ ranking  │──▶│  APIM   │──┼──▶ set-preferred-backends
//!   │  │ (sleep)   │   │ (per ep.) │   │ (stable) │   │ report  │  │
//!   │  └─────▲─────┘   └─────┬─────┘   └──────────┘   └─────────┘  │
//!   │        │               │                                     │
//!   │        │               └──────────────────────────────────────┼──▶ chat/completions (each endpoint)
//!   │        │                                                     │
//!   │  ┌─────┴─────────────────────────────────────────────────┐   │
//!   │  │ config │ lifecycle (signals/shutdown) │ observability │   │
//!   │  └───────────────────────────────────────────────────────┘   │
//!   └──────────────────────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;

use latency_prober::config::load_config;
use latency_prober::lifecycle::{startup, Shutdown};
use latency_prober::observability::logging::{self, parse_log_level};

#[derive(Parser)]
#[command(name = "latency-prober")]
#[command(about = "Rank chat-completion endpoints by latency and report to APIM", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, env = "LATENCY_PROBER_CONFIG", default_value = "config.toml")]
    config: PathBuf,

    /// Run a single cycle, print the report as JSON, and exit.
    #[arg(long)]
    once: bool,

    /// Override the configured log level.
    #[arg(long, value_parser = parse_log_level)]
    log_level: Option<tracing::Level>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config(&cli.config)?;
    logging::init_logging(&config.observability, cli.log_level);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %cli.config.display(),
        endpoints = config.endpoints.len(),
        sleep_timeout_secs = config.sleep_timeout,
        probe_timeout_secs = config.probe.timeout_secs,
        "latency-prober starting"
    );

    startup::start_metrics(&config)?;

    if cli.once {
        let cycle = startup::build_cycle(&config)?;
        let report = cycle.run_once().await?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let shutdown = Shutdown::new();
    let listener = shutdown.listener();
    shutdown.trigger_on_signals();

    let scheduler = startup::build_scheduler(&config)?;
    let summary = scheduler.run(listener).await;

    tracing::info!(
        cycles = summary.cycles,
        failures = summary.failures,
        "Shutdown complete"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_flag_is_validated() {
        let cli = Cli::try_parse_from(["latency-prober", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level, Some(tracing::Level::DEBUG));

        assert!(Cli::try_parse_from(["latency-prober", "--log-level", "verbose"]).is_err());
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["latency-prober"]).unwrap();
        assert!(!cli.once);
        assert!(cli.log_level.is_none());
    }
}
